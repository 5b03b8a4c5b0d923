// Copyright 2025 the Branchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branchwork Gesture: pinch-to-zoom and pan composed into one canvas transform.
//!
//! ## Overview
//!
//! Two continuous gesture streams, pan and pinch, drive one affine transform of an opaque
//! content block. Each stream is a [`Track`](crate::track::Track): a committed baseline plus a
//! live delta that is folded in when the gesture is released. The two tracks never merge;
//! [`ZoomPan`](crate::zoom_pan::ZoomPan) combines them only when the transform is read.
//!
//! ## Commit discipline
//!
//! While a gesture is active its live delta streams in (last write wins) and the baseline
//! stays put. Leaving the active state folds the final delta into the baseline and resets
//! the live delta to neutral (`0` for translation, `1` for scale). A new gesture therefore
//! starts from where the last one was released, not from the origin.
//!
//! ## Composition order
//!
//! Translate by the pan offset, move the content center to the origin, scale, move the
//! center back. Zoom pivots around the content's geometric center however far it has been
//! panned. The order is significant and fixed.
//!
//! ## Example
//!
//! ```
//! use branchwork_gesture::track::GestureEvent;
//! use branchwork_gesture::zoom_pan::ZoomPan;
//! use kurbo::{Point, Size, Vec2};
//!
//! let mut view = ZoomPan::new(Size::new(200.0, 200.0));
//!
//! // Pan and pinch at the same time.
//! view.on_pan(GestureEvent::Update(Vec2::new(30.0, 0.0)));
//! view.on_pinch(GestureEvent::Update(2.0));
//! assert_eq!(view.scale(), 2.0);
//!
//! // The center follows the pan only; zoom pivots around it.
//! assert_eq!(view.to_viewport(Point::new(100.0, 100.0)), Point::new(130.0, 100.0));
//!
//! // Release both; a later pinch starts from 2×.
//! view.on_pan(GestureEvent::End(Vec2::new(30.0, 0.0)));
//! view.on_pinch(GestureEvent::End(2.0));
//! view.on_pinch(GestureEvent::Update(0.5));
//! assert_eq!(view.scale(), 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod track;
pub mod zoom_pan;

pub use track::{Accumulate, GestureEvent, HandlerState, Phase, Track};
pub use zoom_pan::{ActiveGestures, ZoomPan};
