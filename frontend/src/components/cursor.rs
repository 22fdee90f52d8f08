use yew::prelude::*;
use web_sys::{Element, MouseEvent as DomMouseEvent, Node};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Pointer,
    Luxury,
    Text,
    View,
}

/// Offsets are subtracted from the mouse position so the shape stays centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorGeometry {
    pub dot_offset: f64,
    pub dot_scale: f64,
    pub ring_offset: f64,
    pub ring_scale: f64,
    pub ring_opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorPalette {
    pub inner_dot: &'static str,
    pub outer_ring: &'static str,
    pub border: &'static str,
}

/// What sits under the pointer, resolved from the DOM by `describe`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget {
    pub interactive: bool,
    pub luxury: bool,
    pub viewable: bool,
    pub text_entry: bool,
}

impl CursorVariant {
    /// `None` means the hovered element does not change the cursor.
    pub fn classify(target: HoverTarget) -> Option<CursorVariant> {
        if target.interactive {
            Some(if target.luxury { CursorVariant::Luxury } else { CursorVariant::Pointer })
        } else if target.viewable {
            Some(CursorVariant::View)
        } else if target.text_entry {
            Some(CursorVariant::Text)
        } else {
            None
        }
    }

    pub fn geometry(self) -> CursorGeometry {
        let (dot_offset, dot_scale, ring_offset, ring_scale, ring_opacity) = match self {
            CursorVariant::Default => (3.0, 1.0, 20.0, 1.0, 0.6),
            CursorVariant::Pointer => (3.0, 1.5, 25.0, 1.2, 0.8),
            CursorVariant::Luxury => (4.0, 2.0, 30.0, 1.5, 0.9),
            CursorVariant::Text => (2.0, 0.8, 15.0, 0.8, 0.5),
            CursorVariant::View => (3.0, 1.2, 28.0, 1.3, 0.7),
        };
        CursorGeometry { dot_offset, dot_scale, ring_offset, ring_scale, ring_opacity }
    }

    pub fn palette(self) -> CursorPalette {
        match self {
            CursorVariant::Luxury => CursorPalette {
                inner_dot: "hsl(45, 90%, 65%)",
                outer_ring: "hsl(45 90% 65% / 0.3)",
                border: "hsl(25, 30%, 55%)",
            },
            CursorVariant::Pointer => CursorPalette {
                inner_dot: "hsl(140, 25%, 65%)",
                outer_ring: "hsl(140 25% 65% / 0.2)",
                border: "hsl(45, 90%, 65%)",
            },
            CursorVariant::Text => CursorPalette {
                inner_dot: "hsl(25, 30%, 55%)",
                outer_ring: "hsl(25 30% 55% / 0.2)",
                border: "hsl(140, 45%, 25%)",
            },
            CursorVariant::View => CursorPalette {
                inner_dot: "hsl(200, 60%, 45%)",
                outer_ring: "hsl(200 60% 45% / 0.2)",
                border: "hsl(45, 90%, 65%)",
            },
            CursorVariant::Default => CursorPalette {
                inner_dot: "hsl(140, 45%, 25%)",
                outer_ring: "hsl(140 45% 25% / 0.15)",
                border: "hsl(35, 40%, 95%)",
            },
        }
    }
}

fn matches_closest(element: &Element, selector: &str) -> bool {
    element.closest(selector).ok().flatten().is_some()
}

fn describe(element: &Element) -> HoverTarget {
    HoverTarget {
        interactive: matches_closest(element, "button, a"),
        luxury: matches_closest(element, ".cursor-luxury"),
        viewable: matches_closest(element, "img, [data-cursor=\"view\"]"),
        text_entry: matches_closest(element, "input, textarea, .cursor-text"),
    }
}

fn event_element(event: &DomMouseEvent) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

#[function_component(CursorEffects)]
pub fn cursor_effects() -> Html {
    let position = use_state(|| (0.0_f64, 0.0_f64));
    let variant = use_state(CursorVariant::default);
    let clicking = use_state(|| false);

    {
        let position = position.clone();
        let variant = variant.clone();
        let clicking = clicking.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let document = window.as_ref().and_then(|w| w.document());

                let on_move = Closure::wrap(Box::new(move |e: DomMouseEvent| {
                    position.set((e.client_x() as f64, e.client_y() as f64));
                }) as Box<dyn FnMut(DomMouseEvent)>);

                let on_down = {
                    let clicking = clicking.clone();
                    Closure::wrap(Box::new(move |_: DomMouseEvent| clicking.set(true)) as Box<dyn FnMut(DomMouseEvent)>)
                };
                let on_up = Closure::wrap(Box::new(move |_: DomMouseEvent| clicking.set(false)) as Box<dyn FnMut(DomMouseEvent)>);

                let on_over = {
                    let variant = variant.clone();
                    Closure::wrap(Box::new(move |e: DomMouseEvent| {
                        if let Some(next) = event_element(&e).map(|el| describe(&el)).and_then(CursorVariant::classify) {
                            variant.set(next);
                        }
                    }) as Box<dyn FnMut(DomMouseEvent)>)
                };

                // Only reset when the pointer leaves for something outside the element
                let on_out = Closure::wrap(Box::new(move |e: DomMouseEvent| {
                    let Some(target) = event_element(&e) else { return };
                    let related = e.related_target().and_then(|t| t.dyn_into::<Node>().ok());
                    if !target.contains(related.as_ref()) {
                        variant.set(CursorVariant::Default);
                    }
                }) as Box<dyn FnMut(DomMouseEvent)>);

                let window_listeners = [("mousemove", &on_move), ("mousedown", &on_down), ("mouseup", &on_up)];
                let document_listeners = [("mouseover", &on_over), ("mouseout", &on_out)];

                if let Some(window) = &window {
                    for (event, listener) in window_listeners {
                        let _ = window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                    }
                }
                if let Some(document) = &document {
                    for (event, listener) in document_listeners {
                        let _ = document.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                    }
                }

                move || {
                    if let Some(window) = &window {
                        for (event, listener) in [("mousemove", &on_move), ("mousedown", &on_down), ("mouseup", &on_up)] {
                            let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                        }
                    }
                    if let Some(document) = &document {
                        for (event, listener) in [("mouseover", &on_over), ("mouseout", &on_out)] {
                            let _ = document.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            (),
        );
    }

    let (x, y) = *position;
    let geometry = variant.geometry();
    let palette = variant.palette();

    let dot_style = format!(
        "transform: translate({}px, {}px) scale({}); background-color: {}; box-shadow: 0 0 10px {};",
        x - geometry.dot_offset, y - geometry.dot_offset, geometry.dot_scale, palette.inner_dot, palette.inner_dot,
    );
    let ring_style = format!(
        "transform: translate({}px, {}px) scale({}); opacity: {}; background: {}; border: 1px solid {};",
        x - geometry.ring_offset, y - geometry.ring_offset, geometry.ring_scale, geometry.ring_opacity,
        palette.outer_ring, palette.border,
    );

    html! {
        <div class="cursor-layer" aria-hidden="true">
            <div class="cursor-dot" style={dot_style}></div>
            <div class="cursor-ring" style={ring_style}></div>
            {
                if *clicking {
                    html! {
                        <div class="cursor-ripple" style={format!(
                            "left: {}px; top: {}px; background: radial-gradient(circle, {} 0%, transparent 70%); border: 1px solid {};",
                            x - 32.0, y - 32.0, palette.inner_dot, palette.border,
                        )}></div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if *variant == CursorVariant::View {
                    html! {
                        <div class="cursor-label" style={format!("transform: translate({}px, {}px);", x + 20.0, y - 10.0)}>
                            {"View"}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_inside_luxury_blocks_get_the_gold_cursor() {
        let target = HoverTarget { interactive: true, luxury: true, ..Default::default() };
        assert_eq!(CursorVariant::classify(target), Some(CursorVariant::Luxury));
        let plain = HoverTarget { interactive: true, ..Default::default() };
        assert_eq!(CursorVariant::classify(plain), Some(CursorVariant::Pointer));
    }

    #[test]
    fn buttons_win_over_images_and_inputs() {
        let target = HoverTarget { interactive: true, viewable: true, text_entry: true, luxury: false };
        assert_eq!(CursorVariant::classify(target), Some(CursorVariant::Pointer));
        let image = HoverTarget { viewable: true, text_entry: true, ..Default::default() };
        assert_eq!(CursorVariant::classify(image), Some(CursorVariant::View));
        let field = HoverTarget { text_entry: true, ..Default::default() };
        assert_eq!(CursorVariant::classify(field), Some(CursorVariant::Text));
    }

    #[test]
    fn plain_content_keeps_current_cursor() {
        assert_eq!(CursorVariant::classify(HoverTarget::default()), None);
    }

    #[test]
    fn shapes_grow_for_emphasis() {
        let default = CursorVariant::Default.geometry();
        let luxury = CursorVariant::Luxury.geometry();
        let text = CursorVariant::Text.geometry();
        assert!(luxury.dot_scale > default.dot_scale);
        assert!(luxury.ring_offset > default.ring_offset);
        assert!(text.ring_scale < default.ring_scale);
        assert_eq!(default.ring_opacity, 0.6);
    }

    #[test]
    fn every_variant_has_distinct_dot_color() {
        let variants = [
            CursorVariant::Default,
            CursorVariant::Pointer,
            CursorVariant::Luxury,
            CursorVariant::Text,
            CursorVariant::View,
        ];
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                assert_ne!(a.palette().inner_dot, b.palette().inner_dot);
            }
        }
    }
}
