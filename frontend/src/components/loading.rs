use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Math;

use crate::config;

const MIN_STEP: f64 = 4.0;
const STEP_SPREAD: f64 = 8.0;

/// Splash screen progress, 0..=100.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Adds `increment` percent, clamped at 100. Finished progress stays put.
    pub fn advance(&mut self, increment: f64) {
        if self.is_complete() {
            return;
        }
        self.percent = (self.percent + increment.max(0.0)).min(100.0);
    }
}

/// Maps a uniform sample in [0, 1) onto a tick increment in [4, 12).
pub fn step_for(sample: f64) -> f64 {
    MIN_STEP + sample.clamp(0.0, 1.0) * STEP_SPREAD
}

impl Reducible for LoadingProgress {
    type Action = f64;

    fn reduce(self: Rc<Self>, increment: f64) -> Rc<Self> {
        let mut next = *self;
        next.advance(increment);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub on_complete: Callback<()>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let progress = use_reducer(LoadingProgress::default);
    let fading = use_state(|| false);
    let complete = progress.is_complete();

    // Tick until full; changing `complete` drops the interval
    {
        let dispatcher = progress.dispatcher();
        use_effect_with_deps(
            move |complete: &bool| {
                let interval = (!*complete).then(|| {
                    Interval::new(config::LOADING_TICK_MS, move || {
                        dispatcher.dispatch(step_for(Math::random()));
                    })
                });
                move || drop(interval)
            },
            complete,
        );
    }

    {
        let fading = fading.clone();
        use_effect_with_deps(
            move |complete: &bool| {
                let timeout = complete.then(|| {
                    Timeout::new(config::LOADING_FADE_DELAY_MS, move || fading.set(true))
                });
                move || drop(timeout)
            },
            complete,
        );
    }

    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |fading: &bool| {
                let timeout = fading.then(|| {
                    Timeout::new(config::LOADING_EXIT_MS, move || {
                        log::info!("Splash screen finished");
                        on_complete.emit(());
                    })
                });
                move || drop(timeout)
            },
            *fading,
        );
    }

    let percent = progress.percent().round() as u32;

    html! {
        <div class={classes!("loading-screen", (*fading).then(|| "fading"))}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(160deg, var(--cream), var(--earth-light));
                        transition: opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .loading-screen.fading {
                        opacity: 0;
                        transform: scale(0.95) translateY(-20px);
                    }
                    .loading-hills {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    @keyframes ripple {
                        0% { transform: translate(-50%, -50%) scale(1); opacity: 0.6; }
                        50% { opacity: 0.3; }
                        100% { transform: translate(-50%, -50%) scale(1.8); opacity: 0; }
                    }
                    @keyframes leafSway {
                        0% { transform: scale(0.8) rotate(-10deg); opacity: 0; }
                        50% { transform: scale(1.1) rotate(5deg); opacity: 1; }
                        100% { transform: scale(1) rotate(0deg); opacity: 1; }
                    }
                    .loading-emblem {
                        position: relative;
                        width: 120px;
                        height: 120px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .loading-ripple {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 120px;
                        height: 120px;
                        border-radius: 50%;
                        border: 2px solid var(--forest-medium);
                        animation: ripple 1.2s ease-out infinite;
                    }
                    .loading-ripple.late { animation-delay: 0.3s; }
                    .loading-leaf {
                        animation: leafSway 1.5s ease-in-out infinite alternate;
                    }
                    .loading-title {
                        margin-top: 24px;
                        font-family: var(--font-serif);
                        font-size: 28px;
                        color: var(--forest-deep);
                    }
                    .loading-tagline {
                        color: var(--earth-medium);
                        letter-spacing: 0.2em;
                        font-size: 12px;
                        margin-top: 6px;
                    }
                    .loading-bar {
                        margin-top: 28px;
                        width: 220px;
                        height: 3px;
                        border-radius: 3px;
                        background: rgba(45, 90, 61, 0.15);
                        overflow: hidden;
                    }
                    .loading-bar-fill {
                        height: 100%;
                        background: linear-gradient(90deg, var(--forest-deep), var(--sunset));
                        transition: width 0.12s linear;
                    }
                    .loading-percent {
                        margin-top: 10px;
                        font-size: 12px;
                        color: var(--forest-medium);
                    }
                "#}
            </style>
            <svg class="loading-hills" viewBox="0 0 1200 800" preserveAspectRatio="none">
                <path d="M0,600 Q200,500 400,550 T800,520 T1200,580 L1200,800 L0,800 Z" fill="var(--forest-deep)" opacity="0.3" />
                <path d="M0,650 Q300,580 600,600 T1200,620 L1200,800 L0,800 Z" fill="var(--forest-medium)" opacity="0.2" />
            </svg>
            <div class="loading-emblem">
                <div class="loading-ripple"></div>
                <div class="loading-ripple late"></div>
                <svg class="loading-leaf" width="64" height="64" viewBox="0 0 64 64">
                    <path d="M32 8C24 8 18 14 16 22C14 30 18 38 24 42C26 44 28 46 32 46C36 46 38 44 40 42C46 38 50 30 48 22C46 14 40 8 32 8Z" fill="var(--forest-medium)" />
                    <path d="M32 8L32 46" stroke="var(--earth-medium)" stroke-width="2" stroke-linecap="round" />
                    <path d="M32 20C28 18 24 20 22 24" stroke="var(--earth-medium)" stroke-width="1.5" stroke-linecap="round" fill="none" />
                </svg>
            </div>
            <div class="loading-title">{ config::RESORT_NAME }</div>
            <div class="loading-tagline">{"RUSTIC ROYALTY BY THE WILD"}</div>
            <div class="loading-bar">
                <div class="loading-bar-fill" style={format!("width: {}%;", percent)}></div>
            </div>
            <div class="loading-percent">{ format!("{}%", percent) }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_stay_in_range() {
        assert_eq!(step_for(0.0), 4.0);
        assert!(step_for(0.999) < 12.0);
        assert_eq!(step_for(-3.0), 4.0);
        assert_eq!(step_for(7.0), 12.0);
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        let mut progress = LoadingProgress::default();
        for _ in 0..8 {
            progress.advance(12.0);
        }
        assert!(!progress.is_complete());
        assert_eq!(progress.percent(), 96.0);
        progress.advance(12.0);
        assert!(progress.is_complete());
        assert_eq!(progress.percent(), 100.0);
        progress.advance(12.0);
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn slowest_run_still_finishes() {
        let mut progress = LoadingProgress::default();
        let mut ticks = 0;
        while !progress.is_complete() {
            progress.advance(step_for(0.0));
            ticks += 1;
        }
        assert_eq!(ticks, 25);
    }

    #[test]
    fn negative_increment_never_rewinds() {
        let mut progress = LoadingProgress::default();
        progress.advance(10.0);
        progress.advance(-5.0);
        assert_eq!(progress.percent(), 10.0);
    }
}
