use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::observer::{ObserverOptions, ViewportObserver, Visibility};

/// Sections count as "current" inside the band between 20% from the top and
/// 60% from the bottom of the viewport.
const HIGHLIGHT_BAND: ObserverOptions =
    ObserverOptions::threshold(0.0).with_root_margin("-20% 0px -60% 0px");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Footprint,
    Emissions,
    Regulatory,
    Operations,
    Solution,
    CaseStudy,
    Faq,
}

impl Section {
    /// Document order, top to bottom.
    pub const ALL: [Section; 7] = [
        Section::Footprint,
        Section::Emissions,
        Section::Regulatory,
        Section::Operations,
        Section::Solution,
        Section::CaseStudy,
        Section::Faq,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Footprint => "footprint",
            Section::Emissions => "emissions",
            Section::Regulatory => "regulatory",
            Section::Operations => "operations",
            Section::Solution => "solution",
            Section::CaseStudy => "casestudy",
            Section::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Footprint => "Healthcare's Footprint",
            Section::Emissions => "Carbon Emissions",
            Section::Regulatory => "Regulatory Landscape",
            Section::Operations => "Greening Operations",
            Section::Solution => "SustainZone Solution",
            Section::CaseStudy => "Case Study",
            Section::Faq => "FAQ",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    fn position(self) -> usize {
        Section::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(usize::MAX)
    }
}

/// Picks the topmost intersecting section of one observer batch. Unknown
/// ids are skipped; `None` means the batch changes nothing.
pub fn topmost_visible<'a, I>(batch: I) -> Option<Section>
where
    I: IntoIterator<Item = Visibility<&'a str>>,
{
    batch
        .into_iter()
        .filter(|change| change.intersecting)
        .filter_map(|change| Section::from_id(change.target))
        .min_by_key(|section| section.position())
}

/// Smoothly scrolls the element with `id` into view. Missing targets are ignored.
pub fn scroll_to_id(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        log::debug!("No scroll target #{}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Tracks which section sits in the highlight band.
#[hook]
pub fn use_active_section() -> Option<Section> {
    let active = use_state_eq(|| None::<Section>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let observer = ViewportObserver::new(HIGHLIGHT_BAND, move |changes, _| {
                    let ids: Vec<(String, bool)> = changes
                        .iter()
                        .map(|change| (change.target.id(), change.intersecting))
                        .collect();
                    let batch = ids.iter().map(|(id, intersecting)| Visibility {
                        target: id.as_str(),
                        intersecting: *intersecting,
                    });
                    if let Some(section) = topmost_visible(batch) {
                        active.set(Some(section));
                    }
                });
                if let (Some(observer), Some(document)) =
                    (observer.as_ref(), web_sys::window().and_then(|w| w.document()))
                {
                    for section in Section::ALL {
                        if let Some(element) = document.get_element_by_id(section.id()) {
                            observer.observe(&element);
                        }
                    }
                }
                move || drop(observer)
            },
            (),
        );
    }

    *active
}

/// Open flag of the collapsible mobile table of contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileToc {
    pub open: bool,
}

impl MobileToc {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn chevron_style(&self) -> &'static str {
        if self.open {
            "transform: rotate(90deg);"
        } else {
            ""
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub active: Option<Section>,
}

#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    let mobile = use_state_eq(MobileToc::default);
    let mobile_root = use_node_ref();

    {
        let mobile = mobile.clone();
        use_click_away(mobile_root.clone(), move |_: Event| {
            if mobile.open {
                mobile.set((*mobile).closed());
            }
        });
    }

    let jump = |section: Section, mobile: Option<UseStateHandle<MobileToc>>| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_id(section.id());
            if let Some(mobile) = &mobile {
                mobile.set((*mobile).closed());
            }
        })
    };

    let toggle_mobile = {
        let mobile = mobile.clone();
        Callback::from(move |_: MouseEvent| mobile.set((*mobile).toggled()))
    };

    let mobile_label = props
        .active
        .map(Section::label)
        .unwrap_or("Contents");

    html! {
        <>
            <nav class="toc" aria-label="Table of contents">
                <ul>
                    { for Section::ALL.into_iter().map(|section| {
                        let active = props.active == Some(section);
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", section.id())}
                                    data-section={section.id()}
                                    class={classes!("toc-link", active.then_some("active"))}
                                    onclick={jump(section, None)}
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
            <div class="mobile-toc" ref={mobile_root}>
                <button id="mobile-toc-btn" type="button" class="mobile-toc-btn" onclick={toggle_mobile}>
                    <span id="mobile-toc-label">{mobile_label}</span>
                    <span id="mobile-toc-chevron" style={mobile.chevron_style()}>{"›"}</span>
                </button>
                <div id="mobile-toc-menu" class={classes!("mobile-toc-menu", mobile.open.then_some("open"))}>
                    { for Section::ALL.into_iter().map(|section| {
                        let active = props.active == Some(section);
                        html! {
                            <a
                                href={format!("#{}", section.id())}
                                data-section={section.id()}
                                class={classes!(
                                    "mobile-toc-link",
                                    active.then_some("bg-brand-50 text-brand-600 font-medium")
                                )}
                                onclick={jump(section, Some(mobile.clone()))}
                            >
                                {section.label()}
                            </a>
                        }
                    }) }
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(id: &str, intersecting: bool) -> Visibility<&str> {
        Visibility { target: id, intersecting }
    }

    #[test]
    fn ids_and_labels_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::CaseStudy.label(), "Case Study");
        assert_eq!(Section::from_id("pricing"), None);
    }

    #[test]
    fn single_intersecting_section_wins() {
        let batch = vec![seen("footprint", false), seen("regulatory", true)];
        assert_eq!(topmost_visible(batch), Some(Section::Regulatory));
    }

    #[test]
    fn topmost_section_wins_regardless_of_batch_order() {
        let batch = vec![seen("faq", true), seen("operations", true), seen("solution", true)];
        assert_eq!(topmost_visible(batch), Some(Section::Operations));
    }

    #[test]
    fn batch_without_intersections_changes_nothing() {
        let batch = vec![seen("emissions", false), seen("faq", false)];
        assert_eq!(topmost_visible(batch), None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let batch = vec![seen("hero", true), seen("faq", true)];
        assert_eq!(topmost_visible(batch), Some(Section::Faq));
    }

    #[test]
    fn mobile_toc_toggles_and_closes() {
        let toc = MobileToc::default().toggled();
        assert!(toc.open);
        assert_eq!(toc.chevron_style(), "transform: rotate(90deg);");
        assert!(!toc.toggled().open);
        assert!(!toc.closed().open);
        assert!(!MobileToc::default().closed().open);
        assert_eq!(MobileToc::default().chevron_style(), "");
    }
}
