//! Testimonial carousel controller.
//!
//! Owns which guest story is on screen and which way the last transition
//! moved. Host independent: the Yew component in
//! `components::testimonials` drives it from clicks, pointer drags and an
//! interval timer.

use std::collections::VecDeque;

use thiserror::Error;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("testimonial index {index} is out of range (carousel holds {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("a carousel needs at least one testimonial")]
    Empty,
}

/// Star rating, always within 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(5);

    pub fn new(stars: u8) -> Option<Rating> {
        (1..=Self::MAX.0).contains(&stars).then_some(Rating(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub rating: Rating,
    pub text: &'static str,
    pub experience: &'static str,
}

impl Testimonial {
    /// First letter of the guest name, shown in the avatar tile.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Step::Forward => 1,
            Step::Backward => -1,
        }
    }
}

/// Which way the last transition went. Only used to pick the slide vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Forward => Direction::Forward,
            Step::Backward => Direction::Backward,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AutoplayClock {
    interval_ms: u32,
    elapsed_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel<'a> {
    testimonials: &'a [Testimonial],
    state: CarouselState,
    phase: Phase,
    autoplay: Option<AutoplayClock>,
}

impl<'a> Carousel<'a> {
    pub fn new(testimonials: &'a [Testimonial]) -> Result<Self, CarouselError> {
        if testimonials.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            testimonials,
            state: CarouselState::default(),
            phase: Phase::Idle,
            autoplay: None,
        })
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> &'a Testimonial {
        &self.testimonials[self.state.current_index]
    }

    /// Moves exactly one position, wrapping at both ends.
    pub fn advance(&mut self, step: Step) {
        let len = self.len() as isize;
        let next = (self.state.current_index as isize + step.delta() + len) % len;
        self.state = CarouselState {
            current_index: next as usize,
            direction: step.into(),
        };
        self.phase = Phase::Transitioning;
    }

    pub fn go_to(&mut self, target: usize) -> Result<(), CarouselError> {
        if target >= self.len() {
            return Err(CarouselError::OutOfRange {
                index: target,
                len: self.len(),
            });
        }
        let direction = if target > self.state.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        if target != self.state.current_index {
            self.phase = Phase::Transitioning;
        }
        self.state = CarouselState {
            current_index: target,
            direction,
        };
        Ok(())
    }

    pub fn on_autoplay_tick(&mut self) {
        self.advance(Step::Forward);
    }

    /// Returns true when the gesture turned the page.
    pub fn on_drag_end(&mut self, offset_x: f64, velocity_x: f64) -> bool {
        let power = swipe_power(offset_x, velocity_x);
        if power < -config::SWIPE_CONFIDENCE_THRESHOLD {
            self.advance(Step::Forward);
            true
        } else if power > config::SWIPE_CONFIDENCE_THRESHOLD {
            self.advance(Step::Backward);
            true
        } else {
            false
        }
    }

    /// Called by the presentation layer once the slide animation settles.
    pub fn finish_transition(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Arms autoplay. Restarting resets the elapsed time.
    pub fn start(&mut self, interval_ms: u32) {
        self.autoplay = Some(AutoplayClock {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        });
    }

    pub fn stop(&mut self) {
        self.autoplay = None;
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Feeds elapsed wall time into the autoplay clock and fires one tick per
    /// full interval. Does nothing while stopped. Returns the number of ticks.
    pub fn on_elapsed(&mut self, ms: u32) -> u32 {
        let Some(clock) = self.autoplay.as_mut() else {
            return 0;
        };
        let total = clock.elapsed_ms.saturating_add(ms);
        let ticks = total / clock.interval_ms;
        clock.elapsed_ms = total % clock.interval_ms;
        if ticks == 0 {
            return 0;
        }
        // Whole laps land back where they started
        let steps = ticks as usize % self.len();
        for _ in 0..steps {
            self.on_autoplay_tick();
        }
        self.state.direction = Direction::Forward;
        self.phase = Phase::Transitioning;
        ticks
    }
}

pub fn swipe_power(offset_x: f64, velocity_x: f64) -> f64 {
    offset_x.abs() * velocity_x
}

/// Only samples this recent count towards release velocity.
const VELOCITY_WINDOW_MS: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub offset_x: f64,
    /// Pixels per second.
    pub velocity_x: f64,
}

/// Tracks a horizontal pointer drag from press to release.
#[derive(Clone, Debug, PartialEq)]
pub struct DragTracker {
    origin_x: f64,
    samples: VecDeque<(f64, f64)>,
}

impl DragTracker {
    pub fn begin(x: f64, at_ms: f64) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((x, at_ms));
        Self { origin_x: x, samples }
    }

    pub fn record(&mut self, x: f64, at_ms: f64) {
        self.samples.push_back((x, at_ms));
        while let Some(&(_, t)) = self.samples.front() {
            if at_ms - t > VELOCITY_WINDOW_MS && self.samples.len() > 2 {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn offset(&self) -> f64 {
        self.samples
            .back()
            .map(|&(x, _)| x - self.origin_x)
            .unwrap_or(0.0)
    }

    pub fn release(mut self, x: f64, at_ms: f64) -> DragRelease {
        self.record(x, at_ms);
        let offset_x = x - self.origin_x;
        let velocity_x = match (self.samples.front(), self.samples.back()) {
            (Some(&(x0, t0)), Some(&(x1, t1))) if t1 > t0 => (x1 - x0) / ((t1 - t0) / 1000.0),
            _ => 0.0,
        };
        DragRelease {
            offset_x,
            velocity_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guests(n: usize) -> Vec<Testimonial> {
        (0..n)
            .map(|i| Testimonial {
                id: i as u32 + 1,
                name: "Guest",
                location: "Mysuru",
                rating: Rating::MAX,
                text: "Lovely stay.",
                experience: "Weekend",
            })
            .collect()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(Carousel::new(&[]).unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn starts_at_first_testimonial_without_direction() {
        let list = guests(3);
        let carousel = Carousel::new(&list).unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Still);
        assert_eq!(carousel.phase(), Phase::Idle);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn forward_cycles_through_every_index_and_returns_home() {
        for n in 1..=7 {
            let list = guests(n);
            let mut carousel = Carousel::new(&list).unwrap();
            let mut seen = Vec::new();
            for _ in 0..n {
                seen.push(carousel.current_index());
                carousel.advance(Step::Forward);
            }
            assert_eq!(seen, (0..n).collect::<Vec<_>>());
            assert_eq!(carousel.current_index(), 0);
        }
    }

    #[test]
    fn backward_from_first_wraps_to_last() {
        for n in 1..=7 {
            let list = guests(n);
            let mut carousel = Carousel::new(&list).unwrap();
            carousel.advance(Step::Backward);
            assert_eq!(carousel.current_index(), n - 1);
            assert_eq!(carousel.direction(), Direction::Backward);
        }
    }

    #[test]
    fn go_to_lands_exactly_on_target() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.advance(Step::Forward);
        carousel.advance(Step::Forward);
        for k in [4, 0, 3, 3, 1] {
            carousel.go_to(k).unwrap();
            assert_eq!(carousel.current_index(), k);
        }
    }

    #[test]
    fn go_to_out_of_range_leaves_state_alone() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.advance(Step::Forward);
        let before = carousel.state();

        let err = carousel.go_to(5).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 5, len: 5 });
        assert!(carousel.go_to(usize::MAX).is_err());
        assert_eq!(carousel.state(), before);
    }

    #[test]
    fn go_to_current_index_recomputes_direction_only() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.advance(Step::Forward);
        carousel.finish_transition();

        carousel.go_to(1).unwrap();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Backward);
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    #[test]
    fn strong_leftward_swipe_turns_to_next() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        // power = 2000 * 10 in the negative direction
        assert!(carousel.on_drag_end(-2000.0, -10.0));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn positive_velocity_turns_back_even_after_leftward_offset() {
        // |offset| * velocity = 2000 * 10 = 20000 > threshold, sign from velocity
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        assert!(carousel.on_drag_end(-2000.0, 10.0));
        assert_eq!(carousel.state().current_index, 4);
    }

    #[test]
    fn strong_rightward_swipe_turns_to_previous() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.go_to(2).unwrap();
        assert!(carousel.on_drag_end(800.0, 400.0));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn weak_drag_is_ignored() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        let before = carousel.state();
        assert!(!carousel.on_drag_end(-50.0, 1.0));
        assert!(!carousel.on_drag_end(-50.0, -1.0));
        assert!(!carousel.on_drag_end(100.0, 100.0)); // exactly at threshold
        assert_eq!(carousel.state(), before);
    }

    #[test]
    fn scripted_walkthrough() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.advance(Step::Forward);
        assert_eq!(carousel.current_index(), 1);
        carousel.advance(Step::Forward);
        assert_eq!(carousel.current_index(), 2);
        carousel.go_to(0).unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction().signum(), -1);
        carousel.advance(Step::Backward);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn five_autoplay_ticks_come_full_circle() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.start(config::AUTOPLAY_INTERVAL_MS);
        let mut fired = 0;
        for _ in 0..5 {
            fired += carousel.on_elapsed(5_000);
        }
        assert_eq!(fired, 5);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn autoplay_accumulates_partial_intervals() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.start(5_000);
        assert_eq!(carousel.on_elapsed(3_000), 0);
        assert_eq!(carousel.on_elapsed(2_500), 1);
        assert_eq!(carousel.on_elapsed(12_000), 2);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn huge_elapsed_time_wraps_without_stepping_each_tick() {
        let list = guests(4);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.start(0);
        assert_eq!(carousel.on_elapsed(u32::MAX), u32::MAX);
        // u32::MAX % 4 == 3
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.direction(), Direction::Forward);
        assert_eq!(carousel.phase(), Phase::Transitioning);
    }

    #[test]
    fn full_laps_of_ticks_return_to_the_same_guest() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.go_to(2).unwrap();
        carousel.start(5_000);
        assert_eq!(carousel.on_elapsed(50_000), 10);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn stopped_autoplay_never_ticks() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        assert_eq!(carousel.on_elapsed(60_000), 0);
        carousel.start(5_000);
        carousel.on_elapsed(4_000);
        carousel.stop();
        assert_eq!(carousel.on_elapsed(60_000), 0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn restart_resets_the_clock() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.start(5_000);
        carousel.on_elapsed(4_900);
        carousel.start(5_000);
        assert_eq!(carousel.on_elapsed(200), 0);
    }

    #[test]
    fn manual_change_is_overridden_by_next_tick() {
        let list = guests(5);
        let mut carousel = Carousel::new(&list).unwrap();
        carousel.start(5_000);
        carousel.on_elapsed(4_000);
        carousel.go_to(3).unwrap();
        carousel.on_elapsed(1_000);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let list = guests(4);
        let mut a = Carousel::new(&list).unwrap();
        let b = Carousel::new(&list).unwrap();
        a.advance(Step::Forward);
        assert_eq!(a.current_index(), 1);
        assert_eq!(b.current_index(), 0);
    }

    #[test]
    fn rating_is_bounded() {
        assert_eq!(Rating::new(0), None);
        assert_eq!(Rating::new(6), None);
        assert_eq!(Rating::new(3).map(Rating::stars), Some(3));
        assert_eq!(Rating::MAX.stars(), 5);
    }

    #[test]
    fn drag_release_reports_offset_and_velocity() {
        let mut drag = DragTracker::begin(500.0, 0.0);
        drag.record(450.0, 20.0);
        assert_eq!(drag.offset(), -50.0);
        drag.record(300.0, 50.0);
        let release = drag.release(200.0, 100.0);
        assert_eq!(release.offset_x, -300.0);
        // 300 px over 100 ms
        assert!((release.velocity_x + 3_000.0).abs() < 1e-6);
    }

    #[test]
    fn drag_velocity_uses_recent_samples_only() {
        let mut drag = DragTracker::begin(0.0, 0.0);
        drag.record(-400.0, 100.0);
        // Long hold before letting go
        drag.record(-400.0, 900.0);
        drag.record(-400.0, 950.0);
        let release = drag.release(-400.0, 1_000.0);
        assert_eq!(release.offset_x, -400.0);
        assert_eq!(release.velocity_x, 0.0);
    }

    #[test]
    fn instant_release_has_no_velocity() {
        let drag = DragTracker::begin(10.0, 5.0);
        let release = drag.release(10.0, 5.0);
        assert_eq!(release.offset_x, 0.0);
        assert_eq!(release.velocity_x, 0.0);
    }
}
