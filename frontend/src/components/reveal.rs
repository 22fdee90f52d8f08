use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::Element;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A section counts as seen once its top is this far inside the viewport.
const REVEAL_MARGIN_PX: f64 = 100.0;

pub fn entered_viewport(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN_PX
}

/// Flips to true the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let window = web_sys::window();
                let fired = Rc::new(Cell::new(false));

                let check = {
                    let window = window.clone();
                    move || {
                        if fired.get() {
                            return;
                        }
                        let (Some(element), Some(window)) = (node.cast::<Element>(), window.as_ref()) else {
                            return;
                        };
                        let top = element.get_bounding_client_rect().top();
                        let height = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        if entered_viewport(top, height) {
                            fired.set(true);
                            in_view.set(true);
                        }
                    }
                };

                check();
                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
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
    fn section_reveals_inside_margin() {
        assert!(entered_viewport(500.0, 800.0));
        assert!(entered_viewport(-300.0, 800.0));
        assert!(!entered_viewport(700.0, 800.0));
        assert!(!entered_viewport(900.0, 800.0));
    }
}
