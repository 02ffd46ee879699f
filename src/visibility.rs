use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot "became visible" latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityTrigger {
    #[default]
    NotTriggered,
    Triggered,
}

impl VisibilityTrigger {
    /// Feeds one visibility observation. Returns `true` exactly once, on the
    /// first visible observation; everything after that is ignored.
    pub fn observe(&mut self, visible: bool) -> bool {
        match self {
            VisibilityTrigger::NotTriggered if visible => {
                *self = VisibilityTrigger::Triggered;
                true
            }
            _ => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        matches!(self, VisibilityTrigger::Triggered)
    }
}

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(node: &NodeRef, root_margin: &str, on_visible: Callback<()>) -> Option<ObserverGuard> {
    let element = match node.cast::<Element>() {
        Some(element) => element,
        None => {
            warn!("in-view target is not mounted, treating it as visible");
            on_visible.emit(());
            return None;
        }
    };

    let mut trigger = VisibilityTrigger::default();
    let notify = on_visible.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if trigger.observe(intersecting) {
                observer.disconnect();
                notify.emit(());
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(ObserverGuard {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), treating target as visible", err);
            on_visible.emit(());
            None
        }
    }
}

/// Becomes `true` the first time `node` scrolls into the viewport and stays
/// `true` for the rest of the component's life.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_visible = Callback::from(move |_| {
                    debug!("section entered viewport");
                    in_view.set(true);
                });
                let guard = observe_once(node, root_margin, on_visible);
                move || drop(guard)
            },
            node,
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_on_first_visible_observation_only() {
        let mut trigger = VisibilityTrigger::default();
        assert!(!trigger.observe(false));
        assert!(!trigger.has_fired());

        assert!(trigger.observe(true));
        assert!(trigger.has_fired());

        // scrolled away and back
        assert!(!trigger.observe(false));
        assert!(!trigger.observe(true));
        assert_eq!(trigger, VisibilityTrigger::Triggered);
    }
}
