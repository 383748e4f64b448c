use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeRecord {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub sublabel: &'static str,
    pub color: &'static str,
    /// Share of the donut, in percent.
    pub share: u32,
}

pub static SCOPES: [ScopeRecord; 3] = [
    ScopeRecord {
        id: "1",
        label: "Scope 1",
        value: "~10%",
        sublabel: "Direct operations",
        color: "#f97316",
        share: 10,
    },
    ScopeRecord {
        id: "2",
        label: "Scope 2",
        value: "~10%",
        sublabel: "Purchased energy",
        color: "#0284c7",
        share: 10,
    },
    ScopeRecord {
        id: "3",
        label: "Scope 3",
        value: "~80%",
        sublabel: "Supply chain",
        color: "#16a34a",
        share: 80,
    },
];

const DEFAULT_SCOPE: &str = "3";

pub fn scope(id: &str) -> Option<&'static ScopeRecord> {
    SCOPES.iter().find(|record| record.id == id)
}

/// Hover selection shared by the donut, the legend and the cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScopeSelection {
    hovered: Option<&'static str>,
}

impl ScopeSelection {
    /// Unknown ids leave the selection untouched.
    pub fn hover(self, id: &str) -> Self {
        match scope(id) {
            Some(record) => Self { hovered: Some(record.id) },
            None => self,
        }
    }

    pub fn leave(self) -> Self {
        Self { hovered: None }
    }

    pub fn display(&self) -> &'static ScopeRecord {
        self.hovered
            .and_then(scope)
            .or_else(|| scope(DEFAULT_SCOPE))
            .unwrap_or(&SCOPES[SCOPES.len() - 1])
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.hovered == Some(id)
    }

    /// Inline accent for a legend entry; empty when not hovered.
    pub fn legend_style(&self, id: &str) -> String {
        match (self.is_active(id), scope(id)) {
            (true, Some(record)) => format!(
                "border-color: {color}; box-shadow: 0 2px 8px -2px {color}33;",
                color = record.color
            ),
            _ => String::new(),
        }
    }
}

#[function_component(ScopeChart)]
pub fn scope_chart() -> Html {
    let selection = use_state_eq(ScopeSelection::default);
    let display = selection.display();

    let enter = |id: &'static str| {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| selection.set((*selection).hover(id)))
    };
    let leave = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| selection.set((*selection).leave()))
    };

    // r = 100 / 2π so the circumference is 100 and dash lengths are percentages.
    let mut offset = 25u32;
    let segments = SCOPES.iter().map(|record| {
        let dash_offset = offset;
        offset = (offset + 100 - record.share) % 100;
        html! {
            <circle
                class={classes!("donut-segment", selection.is_active(record.id).then_some("active"))}
                data-scope={record.id}
                cx="21" cy="21" r="15.915"
                fill="transparent"
                stroke={record.color}
                stroke-width="5"
                stroke-dasharray={format!("{} {}", record.share, 100 - record.share)}
                stroke-dashoffset={dash_offset.to_string()}
                onmouseenter={enter(record.id)}
                onmouseleave={leave.clone()}
            />
        }
    }).collect::<Html>();

    html! {
        <div class="scope-chart">
            <div class="donut">
                <svg viewBox="0 0 42 42" class="donut-svg" role="img" aria-label="Emissions by scope">
                    {segments}
                </svg>
                <div class="donut-center">
                    <p id="donut-label">{display.label}</p>
                    <p id="donut-value" style={format!("color: {};", display.color)}>{display.value}</p>
                    <p id="donut-sublabel">{display.sublabel}</p>
                </div>
            </div>
            <ul class="scope-legend">
                { for SCOPES.iter().map(|record| html! {
                    <li
                        class="scope-legend-item"
                        data-scope={record.id}
                        style={selection.legend_style(record.id)}
                        onmouseenter={enter(record.id)}
                        onmouseleave={leave.clone()}
                    >
                        <span class="scope-swatch" style={format!("background: {};", record.color)}></span>
                        {record.label}{" · "}{record.sublabel}
                    </li>
                }) }
            </ul>
            <div class="scope-cards">
                { for SCOPES.iter().map(|record| html! {
                    <div
                        class={classes!("scope-card", selection.is_active(record.id).then_some("highlighted"))}
                        data-scope={record.id}
                        onmouseenter={enter(record.id)}
                        onmouseleave={leave.clone()}
                    >
                        <h4>{record.label}</h4>
                        <p class="scope-card-value">{record.value}</p>
                        <p>{record.sublabel}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_is_scope_three() {
        let display = ScopeSelection::default().display();
        assert_eq!(display.label, "Scope 3");
        assert_eq!(display.value, "~80%");
        assert_eq!(display.color, "#16a34a");
    }

    #[test]
    fn hovering_legend_two_updates_display() {
        let selection = ScopeSelection::default().hover("2");
        let display = selection.display();
        assert_eq!(display.label, "Scope 2");
        assert_eq!(display.value, "~10%");
        assert_eq!(display.color, "#0284c7");
        assert!(selection.is_active("2"));
        assert!(!selection.is_active("3"));
    }

    #[test]
    fn leaving_restores_default() {
        let selection = ScopeSelection::default().hover("2").leave();
        let display = selection.display();
        assert_eq!(display.label, "Scope 3");
        assert_eq!(display.value, "~80%");
        assert_eq!(display.color, "#16a34a");
        assert!(SCOPES.iter().all(|record| !selection.is_active(record.id)));
        assert!(selection.legend_style("2").is_empty());
    }

    #[test]
    fn legend_accent_uses_scope_color() {
        let selection = ScopeSelection::default().hover("1");
        assert_eq!(
            selection.legend_style("1"),
            "border-color: #f97316; box-shadow: 0 2px 8px -2px #f9731633;"
        );
        assert!(selection.legend_style("3").is_empty());
    }

    #[test]
    fn unknown_scope_is_ignored() {
        let selection = ScopeSelection::default().hover("1").hover("9");
        assert!(selection.is_active("1"));
    }

    #[test]
    fn shares_fill_the_donut() {
        assert_eq!(SCOPES.iter().map(|record| record.share).sum::<u32>(), 100);
    }
}
