//! Viewport visibility tracking on top of `IntersectionObserver`.
//!
//! [`ViewportObserver`] reports every intersection change for the elements
//! it watches. [`use_first_visible`] builds the one-shot variant on top of it:
//! the element is unobserved as soon as it first intersects and the returned
//! flag never goes back to `false`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const fn threshold(threshold: f64) -> Self {
        Self { threshold, root_margin: "0px" }
    }

    pub const fn with_root_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }
}

/// A single intersection change for `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Visibility<T> {
    pub target: T,
    pub intersecting: bool,
}

/// The observer as seen from inside its own callback.
pub struct ObserverHandle<'a>(&'a IntersectionObserver);

impl ObserverHandle<'_> {
    pub fn unobserve(&self, element: &Element) {
        self.0.unobserve(element);
    }
}

pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    /// Returns `None` when the browser refuses to build the observer.
    pub fn new<F>(options: ObserverOptions, mut on_change: F) -> Option<Self>
    where
        F: FnMut(Vec<Visibility<Element>>, &ObserverHandle<'_>) + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let changes = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Visibility {
                        target: entry.target(),
                        intersecting: entry.is_intersecting(),
                    })
                    .collect();
                on_change(changes, &ObserverHandle(&observer));
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(Self { observer, _callback: callback }),
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Trips on the first intersecting report and stays tripped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// `true` exactly once: for the first report with `intersecting` set.
    pub fn trip(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Becomes `true` the first time the element behind `node` is visible.
#[hook]
pub fn use_first_visible(node: NodeRef, options: ObserverOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let mut latch = OnceLatch::default();
                    let observer = ViewportObserver::new(options, move |changes, handle| {
                        for change in changes {
                            if latch.trip(change.intersecting) {
                                handle.unobserve(&change.target);
                                visible.set(true);
                            }
                        }
                    })?;
                    observer.observe(&element);
                    Some(observer)
                });
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}
