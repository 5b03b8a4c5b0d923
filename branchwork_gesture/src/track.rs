// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracks: a committed baseline plus a live delta, with commit-on-release.
//!
//! ## State machine
//!
//! A [`Track`] is either [`Phase::Idle`] or [`Phase::Active`].
//!
//! - Idle → Active: [`GestureEvent::Begin`], or the first [`GestureEvent::Update`].
//!   While active, each update replaces the live delta (last write wins) and
//!   [`Track::value`] combines it with the baseline. The baseline does not move.
//! - Active → Idle: [`GestureEvent::End`] folds its final delta into the baseline and
//!   resets the live delta to neutral. This is the only place the baseline changes,
//!   so the next session starts where the previous one was released.
//!
//! Pan and pinch share this machine; they differ only in how deltas combine, which
//! [`Accumulate`] captures.
//!
//! ## Minimal example
//!
//! ```
//! use branchwork_gesture::track::{GestureEvent, Track};
//!
//! let mut zoom: Track<f64> = Track::new();
//! zoom.handle(GestureEvent::Begin);
//! zoom.handle(GestureEvent::Update(2.0));
//! assert_eq!(zoom.value(), 2.0);
//! zoom.handle(GestureEvent::End(2.0));
//!
//! // The next pinch starts from the released zoom.
//! zoom.handle(GestureEvent::Update(1.5));
//! assert_eq!(zoom.value(), 3.0);
//! ```

use core::fmt::Debug;

use kurbo::Vec2;

/// How a gesture's deltas combine with each other and with the baseline.
pub trait Accumulate: Copy + PartialEq + Debug {
    /// The delta that changes nothing.
    const NEUTRAL: Self;

    /// Combine `self` with `delta`.
    fn fold(self, delta: Self) -> Self;
}

/// Translations add up.
impl Accumulate for Vec2 {
    const NEUTRAL: Self = Self::ZERO;

    fn fold(self, delta: Self) -> Self {
        self + delta
    }
}

/// Scale factors multiply.
impl Accumulate for f64 {
    const NEUTRAL: Self = 1.0;

    fn fold(self, delta: Self) -> Self {
        self * delta
    }
}

/// Whether a track is currently streaming a live delta.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// No gesture in progress; the live delta is neutral.
    #[default]
    Idle,
    /// A gesture is in progress.
    Active,
}

/// Input for one gesture stream.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent<V> {
    /// The recognizer started tracking.
    Begin,
    /// Live delta since the session began (not since the previous update).
    Update(V),
    /// The session ended with this final delta.
    End(V),
}

/// Recognizer states as reported by platform gesture handlers.
///
/// Use with [`Track::state_changed`] when the platform reports `(old, new)` transitions
/// instead of discrete begin/end events.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HandlerState {
    /// Not yet recognized.
    Undetermined,
    /// Recognition failed.
    Failed,
    /// Touches are down but the gesture has not been recognized yet.
    Began,
    /// The gesture was interrupted by the system.
    Cancelled,
    /// The gesture is recognized and streaming.
    Active,
    /// The gesture finished normally.
    End,
}

/// A baseline/live pair for one gesture kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Track<V> {
    baseline: V,
    live: V,
    phase: Phase,
}

impl<V: Accumulate> Default for Track<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Accumulate> Track<V> {
    /// An idle track with a neutral baseline.
    pub fn new() -> Self {
        Self::with_baseline(V::NEUTRAL)
    }

    /// An idle track starting from `baseline`.
    pub fn with_baseline(baseline: V) -> Self {
        Self {
            baseline,
            live: V::NEUTRAL,
            phase: Phase::Idle,
        }
    }

    /// Value accumulated from all completed sessions.
    pub fn baseline(&self) -> V {
        self.baseline
    }

    /// Delta contributed by the session in progress; neutral when idle.
    pub fn live(&self) -> V {
        self.live
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a session is in progress.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// The on-screen value: baseline combined with the live delta.
    pub fn value(&self) -> V {
        self.baseline.fold(self.live)
    }

    /// Start a session. Does nothing if one is already in progress.
    pub fn begin(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
            self.live = V::NEUTRAL;
        }
    }

    /// Replace the live delta, starting a session if needed.
    pub fn update(&mut self, delta: V) {
        self.phase = Phase::Active;
        self.live = delta;
    }

    /// End the session, folding `final_delta` into the baseline.
    ///
    /// Returns false (and changes nothing) if no session was in progress.
    pub fn end(&mut self, final_delta: V) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.commit(final_delta);
        true
    }

    /// Feed one event. Returns true if the baseline was committed.
    pub fn handle(&mut self, event: GestureEvent<V>) -> bool {
        match event {
            GestureEvent::Begin => {
                self.begin();
                false
            }
            GestureEvent::Update(delta) => {
                self.update(delta);
                false
            }
            GestureEvent::End(delta) => self.end(delta),
        }
    }

    /// Feed a platform state transition carrying the recognizer's current delta.
    ///
    /// Leaving [`HandlerState::Active`] for any other state (end, cancel, fail) commits
    /// `delta`. Entering it starts a session. Returns true if the baseline was committed.
    pub fn state_changed(&mut self, old: HandlerState, new: HandlerState, delta: V) -> bool {
        if old == HandlerState::Active && new != HandlerState::Active {
            self.commit(delta);
            true
        } else {
            if new == HandlerState::Active {
                self.begin();
            }
            false
        }
    }

    fn commit(&mut self, delta: V) {
        self.baseline = self.baseline.fold(delta);
        self.live = V::NEUTRAL;
        self.phase = Phase::Idle;
        tracing::debug!(baseline = ?self.baseline, "gesture committed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_do_not_touch_baseline() {
        let mut t: Track<Vec2> = Track::with_baseline(Vec2::new(5.0, 5.0));
        t.begin();
        t.update(Vec2::new(1.0, 0.0));
        t.update(Vec2::new(4.0, -2.0));
        assert_eq!(t.baseline(), Vec2::new(5.0, 5.0));
        assert_eq!(t.live(), Vec2::new(4.0, -2.0), "last write wins");
        assert_eq!(t.value(), Vec2::new(9.0, 3.0));
    }

    #[test]
    fn end_folds_and_resets_live() {
        let mut t: Track<f64> = Track::new();
        t.update(2.0);
        assert!(t.is_active());
        assert!(t.end(2.5));
        assert_eq!(t.baseline(), 2.5);
        assert_eq!(t.live(), 1.0);
        assert_eq!(t.phase(), Phase::Idle);
        assert_eq!(t.value(), 2.5);
    }

    #[test]
    fn sessions_resume_from_last_release() {
        let mut t: Track<Vec2> = Track::new();
        for step in [Vec2::new(10.0, 0.0), Vec2::new(0.0, 7.0), Vec2::new(-3.0, 1.0)] {
            t.handle(GestureEvent::Begin);
            t.handle(GestureEvent::Update(step));
            assert!(t.handle(GestureEvent::End(step)));
        }
        assert_eq!(t.baseline(), Vec2::new(7.0, 8.0));
    }

    #[test]
    fn neutral_release_is_idempotent() {
        let mut pan: Track<Vec2> = Track::with_baseline(Vec2::new(12.5, -3.0));
        pan.update(Vec2::new(40.0, 40.0));
        pan.end(Vec2::ZERO);
        assert_eq!(pan.baseline(), Vec2::new(12.5, -3.0));

        let mut zoom: Track<f64> = Track::with_baseline(0.75);
        zoom.update(3.0);
        zoom.end(1.0);
        assert_eq!(zoom.baseline(), 0.75);
    }

    #[test]
    fn end_while_idle_is_ignored() {
        let mut t: Track<f64> = Track::with_baseline(2.0);
        assert!(!t.end(4.0));
        assert_eq!(t.baseline(), 2.0);
    }

    #[test]
    fn begin_twice_keeps_live_delta() {
        let mut t: Track<f64> = Track::new();
        t.begin();
        t.update(1.25);
        t.begin();
        assert_eq!(t.live(), 1.25);
    }

    #[test]
    fn platform_transitions() {
        let mut t: Track<f64> = Track::new();
        assert!(!t.state_changed(HandlerState::Undetermined, HandlerState::Began, 1.0));
        assert!(!t.is_active());
        assert!(!t.state_changed(HandlerState::Began, HandlerState::Active, 1.0));
        assert!(t.is_active());
        t.update(2.0);
        assert!(t.state_changed(HandlerState::Active, HandlerState::End, 2.0));
        assert_eq!(t.baseline(), 2.0);

        // Cancelling an active gesture still commits what was shown.
        t.state_changed(HandlerState::Began, HandlerState::Active, 1.0);
        t.update(0.5);
        assert!(t.state_changed(HandlerState::Active, HandlerState::Cancelled, 0.5));
        assert_eq!(t.baseline(), 1.0);

        // Failing before activation commits nothing.
        assert!(!t.state_changed(HandlerState::Began, HandlerState::Failed, 9.0));
        assert_eq!(t.baseline(), 1.0);
    }
}
