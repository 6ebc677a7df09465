//! Domain logic and core data structures
//!
//! This module contains pure widget state and geometry that is independent
//! of any rendering backend or font source.

pub mod geometry;
pub mod picker;

pub use geometry::{Bounds, Circle, Point, Rect};
pub use picker::{AlignmentPicker, EventStatus, HasBounds, PointerButton};
