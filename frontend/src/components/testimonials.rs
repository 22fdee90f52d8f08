use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Interval;
use log::{debug, error, warn};
use web_sys::js_sys::Date;
use web_sys::Element;
use wasm_bindgen::JsCast;

use crate::carousel::{Carousel, Direction, DragRelease, DragTracker, Step};
use crate::components::reveal::use_in_view;
use crate::config;
use crate::content::{GUEST_STATS, TESTIMONIALS};

pub enum CarouselAction {
    Advance(Step),
    GoTo(usize),
    AutoplayTick,
    DragEnd(DragRelease),
    TransitionEnd,
    StartAutoplay,
    StopAutoplay,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselModel(pub Carousel<'static>);

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let mut carousel = self.0.clone();
        match action {
            CarouselAction::Advance(step) => carousel.advance(step),
            CarouselAction::GoTo(index) => {
                if let Err(e) = carousel.go_to(index) {
                    warn!("Ignoring dot click: {}", e);
                    return self;
                }
            }
            CarouselAction::AutoplayTick => {
                carousel.on_elapsed(config::AUTOPLAY_INTERVAL_MS);
            }
            CarouselAction::DragEnd(release) => {
                if !carousel.on_drag_end(release.offset_x, release.velocity_x) {
                    return self;
                }
            }
            CarouselAction::TransitionEnd => carousel.finish_transition(),
            CarouselAction::StartAutoplay => carousel.start(config::AUTOPLAY_INTERVAL_MS),
            CarouselAction::StopAutoplay => carousel.stop(),
        }
        if carousel.state() != self.0.state() {
            debug!(
                "Testimonial {} -> {} ({:?})",
                self.0.current_index(),
                carousel.current_index(),
                carousel.direction()
            );
        }
        Rc::new(CarouselModel(carousel))
    }
}

/// Entry animation class for the card that just became current.
pub fn slide_class(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "slide-from-right",
        Direction::Backward => "slide-from-left",
        Direction::Still => "slide-still",
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub carousel: Carousel<'static>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let initial = props.carousel.clone();
    let model = use_reducer(move || CarouselModel(initial));
    let drag = use_mut_ref(|| None::<DragTracker>);
    let drag_offset = use_state(|| 0.0_f64);

    // Autoplay lives exactly as long as the component is mounted
    {
        let dispatcher = model.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatcher.dispatch(CarouselAction::StartAutoplay);
                let tick = dispatcher.clone();
                let interval = Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                    tick.dispatch(CarouselAction::AutoplayTick);
                });
                move || {
                    drop(interval);
                    dispatcher.dispatch(CarouselAction::StopAutoplay);
                }
            },
            (),
        );
    }

    let carousel = &model.0;
    let testimonial = carousel.current();
    let index = carousel.current_index();

    let step = |step: Step| {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(CarouselAction::Advance(step)))
    };

    let on_pointer_down = {
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(target) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let _ = target.set_pointer_capture(e.pointer_id());
            }
            *drag.borrow_mut() = Some(DragTracker::begin(e.client_x() as f64, Date::now()));
        })
    };

    let on_pointer_move = {
        let drag = drag.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(tracker) = drag.borrow_mut().as_mut() {
                tracker.record(e.client_x() as f64, Date::now());
                drag_offset.set(tracker.offset());
            }
        })
    };

    let on_pointer_up = {
        let drag = drag.clone();
        let drag_offset = drag_offset.clone();
        let model = model.clone();
        Callback::from(move |e: PointerEvent| {
            let tracker = drag.borrow_mut().take();
            if let Some(tracker) = tracker {
                let release = tracker.release(e.client_x() as f64, Date::now());
                model.dispatch(CarouselAction::DragEnd(release));
            }
            drag_offset.set(0.0);
        })
    };

    let on_animation_end = {
        let model = model.clone();
        Callback::from(move |_: AnimationEvent| model.dispatch(CarouselAction::TransitionEnd))
    };

    let dragging = *drag_offset != 0.0;
    let card_style = if dragging {
        format!("transform: translateX({}px); transition: none;", *drag_offset)
    } else {
        String::new()
    };

    let stars = (0..testimonial.rating.stars()).map(|i| html! {
        <span key={i} class="star" style={format!("animation-delay: {:.1}s;", 0.5 + i as f64 * 0.1)}>{"★"}</span>
    }).collect::<Html>();

    let dots = (0..carousel.len()).map(|i| {
        let onclick = {
            let model = model.clone();
            Callback::from(move |_: MouseEvent| model.dispatch(CarouselAction::GoTo(i)))
        };
        html! {
            <button
                key={i}
                class={classes!("carousel-dot", (i == index).then(|| "active"))}
                aria-label={format!("Show testimonial {}", i + 1)}
                onclick={onclick}
            >
                <span class="carousel-dot-inner"></span>
            </button>
        }
    }).collect::<Html>();

    html! {
        <div class="carousel">
            <div class="carousel-stage">
                <div
                    key={index}
                    class={classes!("testimonial-card", slide_class(carousel.direction()), dragging.then(|| "dragging"))}
                    style={card_style}
                    onpointerdown={on_pointer_down}
                    onpointermove={on_pointer_move}
                    onpointerup={on_pointer_up.clone()}
                    onpointercancel={on_pointer_up}
                    onanimationend={on_animation_end}
                >
                    <span class="testimonial-quote-mark">{"❝"}</span>
                    <div class="testimonial-rating">
                        { stars }
                        <span class="testimonial-verified">{"♥ Verified Guest"}</span>
                    </div>
                    <blockquote class="testimonial-text">{ format!("\"{}\"", testimonial.text) }</blockquote>
                    <div class="testimonial-guest">
                        <div class="testimonial-avatar">{ testimonial.initial().to_string() }</div>
                        <div>
                            <h4>{ testimonial.name }</h4>
                            <p class="testimonial-location">{ testimonial.location }</p>
                            <p class="testimonial-experience">{ testimonial.experience }</p>
                        </div>
                    </div>
                </div>
            </div>
            <button class="carousel-arrow prev" aria-label="Previous testimonial" onclick={step(Step::Backward)}>{"‹"}</button>
            <button class="carousel-arrow next" aria-label="Next testimonial" onclick={step(Step::Forward)}>{"›"}</button>
            <div class="carousel-dots">{ dots }</div>
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());

    let carousel = match Carousel::new(TESTIMONIALS) {
        Ok(carousel) => html! { <TestimonialCarousel carousel={carousel} /> },
        Err(e) => {
            error!("Testimonials unavailable: {}", e);
            html! {}
        }
    };

    html! {
        <section id="testimonials" class={classes!("testimonials", "reveal", in_view.then(|| "visible"))} ref={node}>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        max-width: 960px;
                        margin: 0 auto;
                    }
                    .carousel-stage {
                        position: relative;
                        height: 420px;
                        overflow: hidden;
                    }
                    @keyframes slideFromRight {
                        from { transform: translateX(1000px) scale(0.8); opacity: 0; }
                        to { transform: translateX(0) scale(1); opacity: 1; }
                    }
                    @keyframes slideFromLeft {
                        from { transform: translateX(-1000px) scale(0.8); opacity: 0; }
                        to { transform: translateX(0) scale(1); opacity: 1; }
                    }
                    @keyframes fadeUp {
                        from { transform: scale(0.8); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    .testimonial-card {
                        position: absolute;
                        inset: 0;
                        padding: 48px;
                        border-radius: 24px;
                        background: rgba(255, 255, 255, 0.95);
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        box-shadow: 0 25px 50px rgba(26, 46, 34, 0.18);
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        cursor: grab;
                        touch-action: pan-y;
                        user-select: none;
                        transition: transform 0.3s cubic-bezier(0.2, 0.8, 0.2, 1);
                    }
                    .testimonial-card.dragging { cursor: grabbing; }
                    .slide-from-right { animation: slideFromRight 0.5s cubic-bezier(0.2, 0.8, 0.2, 1); }
                    .slide-from-left { animation: slideFromLeft 0.5s cubic-bezier(0.2, 0.8, 0.2, 1); }
                    .slide-still { animation: fadeUp 0.4s ease-out; }
                    .testimonial-quote-mark {
                        position: absolute;
                        top: 12px;
                        left: 24px;
                        font-size: 96px;
                        opacity: 0.1;
                        color: var(--forest-deep);
                    }
                    .testimonial-rating { display: flex; align-items: center; gap: 4px; }
                    .star { color: var(--sunset); font-size: 22px; }
                    .testimonial-verified { margin-left: 12px; font-size: 14px; color: var(--forest-deep); }
                    .testimonial-text {
                        font-size: 20px;
                        font-style: italic;
                        line-height: 1.6;
                        color: rgba(26, 46, 34, 0.9);
                    }
                    .testimonial-guest { display: flex; align-items: center; gap: 16px; }
                    .testimonial-avatar {
                        width: 72px;
                        height: 72px;
                        border-radius: 16px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-family: var(--font-serif);
                        font-size: 28px;
                        font-weight: 700;
                        color: var(--cream);
                        background: linear-gradient(135deg, var(--forest-deep), var(--forest-medium));
                    }
                    .testimonial-location { font-size: 14px; opacity: 0.7; }
                    .testimonial-experience { font-size: 14px; font-weight: 600; color: var(--sunset); }
                    .carousel-arrow {
                        position: absolute;
                        top: 210px;
                        transform: translateY(-50%);
                        width: 56px;
                        height: 56px;
                        border-radius: 16px;
                        border: 2px solid rgba(45, 90, 61, 0.25);
                        background: rgba(255, 255, 255, 0.95);
                        font-size: 28px;
                        color: var(--forest-deep);
                        transition: background 0.5s, color 0.5s, transform 0.2s;
                    }
                    .carousel-arrow:hover { background: var(--forest-deep); color: var(--cream); }
                    .carousel-arrow.prev { left: -72px; }
                    .carousel-arrow.next { right: -72px; }
                    .carousel-dots { display: flex; justify-content: center; gap: 8px; margin-top: 48px; }
                    .carousel-dot { background: none; border: none; padding: 8px; }
                    .carousel-dot-inner {
                        display: block;
                        width: 16px;
                        height: 16px;
                        border-radius: 50%;
                        background: rgba(45, 90, 61, 0.25);
                        transition: all 0.5s;
                    }
                    .carousel-dot.active .carousel-dot-inner {
                        background: linear-gradient(90deg, var(--forest-deep), var(--sunset), var(--forest-medium));
                        transform: scale(1.25);
                    }
                    @media (max-width: 1100px) {
                        .carousel-arrow.prev { left: 8px; }
                        .carousel-arrow.next { right: 8px; }
                    }
                    @media (max-width: 700px) {
                        .carousel-stage { height: 480px; }
                        .testimonial-card { padding: 28px; }
                        .testimonial-text { font-size: 16px; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-header">
                    <h3 class="eyebrow">{"GUEST EXPERIENCES"}</h3>
                    <h2>{"Stories from Our Guests"}</h2>
                    <p>{"Discover what makes J&L Kabini Palace special through the eyes of our cherished guests"}</p>
                </div>
                { carousel }
                <div class="guest-stats">
                    {
                        GUEST_STATS.iter().map(|(value, label)| html! {
                            <div key={*label} class="guest-stat">
                                <div class="guest-stat-value">{*value}</div>
                                <div class="guest-stat-label">{*label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Rc<CarouselModel> {
        Rc::new(CarouselModel(Carousel::new(TESTIMONIALS).unwrap()))
    }

    #[test]
    fn reducer_applies_clicks_and_wraps() {
        let state = model().reduce(CarouselAction::Advance(Step::Backward));
        assert_eq!(state.0.current_index(), TESTIMONIALS.len() - 1);
        let state = state.reduce(CarouselAction::Advance(Step::Forward));
        assert_eq!(state.0.current_index(), 0);
    }

    #[test]
    fn rejected_dot_click_keeps_the_same_state() {
        let before = model().reduce(CarouselAction::GoTo(2));
        let after = before.clone().reduce(CarouselAction::GoTo(42));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.0.current_index(), 2);
    }

    #[test]
    fn ticks_only_move_while_mounted() {
        let state = model().reduce(CarouselAction::AutoplayTick);
        assert_eq!(state.0.current_index(), 0);

        let state = state.reduce(CarouselAction::StartAutoplay);
        let state = state.reduce(CarouselAction::AutoplayTick);
        assert_eq!(state.0.current_index(), 1);

        let state = state.reduce(CarouselAction::StopAutoplay);
        let state = state.reduce(CarouselAction::AutoplayTick);
        assert_eq!(state.0.current_index(), 1);
    }

    #[test]
    fn full_autoplay_cycle_returns_to_first_guest() {
        let mut state = model().reduce(CarouselAction::StartAutoplay);
        for _ in 0..TESTIMONIALS.len() {
            state = state.reduce(CarouselAction::AutoplayTick);
        }
        assert_eq!(state.0.current_index(), 0);
    }

    #[test]
    fn short_drag_is_a_no_op() {
        let before = model();
        let after = before.clone().reduce(CarouselAction::DragEnd(DragRelease {
            offset_x: -50.0,
            velocity_x: 1.0,
        }));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn fling_left_shows_next_guest() {
        let state = model().reduce(CarouselAction::DragEnd(DragRelease {
            offset_x: -300.0,
            velocity_x: -3_000.0,
        }));
        assert_eq!(state.0.current_index(), 1);
        assert_eq!(slide_class(state.0.direction()), "slide-from-right");
    }

    #[test]
    fn animation_end_settles_transition() {
        use crate::carousel::Phase;
        let state = model().reduce(CarouselAction::Advance(Step::Forward));
        assert_eq!(state.0.phase(), Phase::Transitioning);
        let state = state.reduce(CarouselAction::TransitionEnd);
        assert_eq!(state.0.phase(), Phase::Idle);
    }

    #[test]
    fn shipped_testimonials_are_five_star() {
        assert_eq!(TESTIMONIALS.len(), 5);
        assert!(TESTIMONIALS.iter().all(|t| t.rating.stars() == 5));
    }
}
