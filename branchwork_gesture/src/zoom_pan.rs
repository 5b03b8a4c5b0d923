// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas transform driven by simultaneous pan and pinch gestures.

use kurbo::{Affine, Point, Size, Vec2};

use crate::track::{GestureEvent, HandlerState, Track};

bitflags::bitflags! {
    /// Gestures currently in progress.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ActiveGestures: u8 {
        /// A pan session is active.
        const PAN   = 0b0000_0001;
        /// A pinch session is active.
        const PINCH = 0b0000_0010;
    }
}

/// Zoom and pan state for a content block of known logical size.
///
/// Pan and pinch are tracked independently ([`Track<Vec2>`] and [`Track<f64>`]) and may be
/// active at the same time; committing one never touches the other's live delta. They only
/// meet in [`transform`](Self::transform):
///
/// 1. translate by the pan offset (committed + live),
/// 2. move the content center to the origin,
/// 3. scale by the zoom factor (committed × live),
/// 4. move the content center back.
///
/// Zoom therefore pivots around the content's center wherever it has been panned to. Neither
/// zoom nor offset is clamped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomPan {
    content_size: Size,
    pan: Track<Vec2>,
    pinch: Track<f64>,
}

impl ZoomPan {
    /// Identity transform over content of `content_size`.
    pub fn new(content_size: Size) -> Self {
        Self {
            content_size,
            pan: Track::new(),
            pinch: Track::new(),
        }
    }

    /// Logical size of the transformed content.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Change the content size; moves the zoom pivot, keeps gesture state.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Zoom pivot in content space.
    pub fn content_center(&self) -> Point {
        self.content_size.to_rect().center()
    }

    /// Pan track: committed offset and live translation.
    pub fn pan(&self) -> &Track<Vec2> {
        &self.pan
    }

    /// Pinch track: committed scale and live factor.
    pub fn pinch(&self) -> &Track<f64> {
        &self.pinch
    }

    /// Feed a pan event carrying the translation since the pan began.
    /// Returns true if the offset baseline was committed.
    pub fn on_pan(&mut self, event: GestureEvent<Vec2>) -> bool {
        self.pan.handle(event)
    }

    /// Feed a pinch event carrying the scale factor since the pinch began.
    /// Returns true if the zoom baseline was committed.
    pub fn on_pinch(&mut self, event: GestureEvent<f64>) -> bool {
        self.pinch.handle(event)
    }

    /// Feed a platform pan state transition. See [`Track::state_changed`].
    pub fn pan_state_changed(
        &mut self,
        old: HandlerState,
        new: HandlerState,
        translation: Vec2,
    ) -> bool {
        self.pan.state_changed(old, new, translation)
    }

    /// Feed a platform pinch state transition. See [`Track::state_changed`].
    pub fn pinch_state_changed(&mut self, old: HandlerState, new: HandlerState, scale: f64) -> bool {
        self.pinch.state_changed(old, new, scale)
    }

    /// Which gestures are in progress.
    pub fn active(&self) -> ActiveGestures {
        let mut out = ActiveGestures::empty();
        out.set(ActiveGestures::PAN, self.pan.is_active());
        out.set(ActiveGestures::PINCH, self.pinch.is_active());
        out
    }

    /// Effective zoom factor: committed scale times live pinch factor.
    pub fn scale(&self) -> f64 {
        self.pinch.value()
    }

    /// Effective pan offset: committed offset plus live translation.
    pub fn offset(&self) -> Vec2 {
        self.pan.value()
    }

    /// Content → viewport transform.
    pub fn transform(&self) -> Affine {
        let center = self.content_center().to_vec2();
        Affine::translate(self.offset())
            * Affine::translate(center)
            * Affine::scale(self.scale())
            * Affine::translate(-center)
    }

    /// Map a content-space point to the viewport.
    pub fn to_viewport(&self, pt: Point) -> Point {
        self.transform() * pt
    }

    /// Map a viewport point (e.g. a tap) back to content space for hit testing.
    ///
    /// Returns `None` when the zoom factor has collapsed to zero or is not finite.
    pub fn to_content(&self, pt: Point) -> Option<Point> {
        let scale = self.scale();
        if scale == 0.0 || !scale.is_finite() {
            return None;
        }
        Some(self.transform().inverse() * pt)
    }
}
