//! One-shot entrance animation for page sections.
//!
//! Each section's content sits in a `.reveal` container that starts
//! transparent. The first time the container intersects the viewport it
//! gains the `visible` class and the CSS transition runs: the container
//! fades in, direct children slide up from a 60px offset with a staggered
//! delay. Scrolling away and back does not replay it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fires slightly before the section's top edge reaches the viewport bottom.
const ROOT_MARGIN: &str = "-100px";

/// Per-container latch: the reveal fires on the first intersecting
/// notification and never again.
#[derive(Debug, Default)]
pub struct RevealState {
    fired: bool,
}

impl RevealState {
    pub fn should_fire(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

type ObserverHandle = (
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
);

/// Wraps section content in a viewport-triggered reveal container.
///
/// With `immediate` the observer is skipped entirely and the transition
/// plays right after mount, which is what the hero wants: it animates on
/// page load no matter where the scroll position starts.
#[component]
pub fn Reveal(#[prop(optional)] immediate: bool, children: Children) -> impl IntoView {
    let container: NodeRef<Div> = NodeRef::new();

    if immediate {
        Effect::new(move || {
            if let Some(element) = container.get() {
                // Let the hidden state paint once so the transition runs.
                set_timeout(
                    move || {
                        let _ = element.class_list().add_1("visible");
                    },
                    Duration::from_millis(80),
                );
            }
        });
    } else {
        let handle: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));

        let handle_for_effect = handle.clone();
        Effect::new(move || {
            let Some(element) = container.get() else {
                return;
            };
            if handle_for_effect.borrow().is_some() {
                return;
            }

            let state = RefCell::new(RevealState::default());
            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if state.borrow_mut().should_fire(entry.is_intersecting()) {
                            let target = entry.target();
                            let _ = target.class_list().add_1("visible");
                            observer.unobserve(&target);
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_root_margin(ROOT_MARGIN);
            init.set_threshold(&JsValue::from_f64(0.0));

            if let Ok(observer) =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            {
                observer.observe(&element);
                *handle_for_effect.borrow_mut() = Some((observer, callback));
            }
        });

        // SendWrapper: on_cleanup requires Send + Sync, and the observer
        // handle only ever lives on the browser's single thread.
        let cleanup_handle = SendWrapper::new(handle);
        on_cleanup(move || {
            // Dropping the closure here is safe: the observer is gone first.
            if let Some((observer, _callback)) = cleanup_handle.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    view! {
        <div class="reveal" node_ref=container>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_fire_before_entering_viewport() {
        let mut state = RevealState::default();
        assert!(!state.should_fire(false));
        assert!(!state.should_fire(false));
    }

    #[test]
    fn fires_once_on_first_entry() {
        let mut state = RevealState::default();
        assert!(!state.should_fire(false));
        assert!(state.should_fire(true));
    }

    #[test]
    fn cleanup_handle_is_send_and_sync() {
        // The wrapped observer handle crosses the on_cleanup Send + Sync
        // bound; the wrapper is what makes that legal for Rc<RefCell<_>>.
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let handle = SendWrapper::new(Rc::new(RefCell::new(Option::<u8>::None)));
        assert_send_sync(&handle);
        assert!(handle.borrow().is_none());
    }

    #[test]
    fn does_not_replay_on_reentry() {
        let mut state = RevealState::default();
        assert!(state.should_fire(true));
        // scroll away, scroll back, and a stale queued notification
        assert!(!state.should_fire(false));
        assert!(!state.should_fire(true));
        assert!(!state.should_fire(true));
    }
}
