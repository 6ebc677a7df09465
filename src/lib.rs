//! Metrics anchor picking and settings persistence for font tooling
//!
//! Two independent building blocks for a font editor shell:
//!
//! - [`AlignmentPicker`], a toolkit-free model of the 3x3 anchor grid
//!   control: selection state, glyph association, hit-testing, and software
//!   rendering to a pixmap via [`paint`].
//! - [`Settings`], a typed key-value store over an injected backend, with
//!   built-in fallbacks and whole-block persistence for named glyph sets
//!   and mark colors.
//!
//! ```
//! use glyphsmith::{paint, AlignmentPicker, Point, PointerButton, Rect};
//!
//! let mut picker = AlignmentPicker::new();
//! let size = AlignmentPicker::DEFAULT_SIZE;
//! paint(&mut picker, Rect::new(0.0, 0.0, size, size))?;
//!
//! let target = picker.hit_regions()[4];
//! picker.press(PointerButton::Primary, Point::new(target.cx, target.cy));
//! assert_eq!(picker.alignment(), Some(4));
//! # Ok::<(), glyphsmith::RenderError>(())
//! ```

pub mod domain;
pub mod font;
pub mod settings;
pub mod ui;

pub use domain::{
    AlignmentPicker, Bounds, Circle, EventStatus, HasBounds, Point, PointerButton, Rect,
};
pub use font::FontGlyph;
pub use settings::{
    FileBackend, GlyphSet, MarkColor, MemoryBackend, Settings, SettingsBackend, SettingsError,
    SettingsValue,
};
pub use ui::{paint, PickerLayout, PickerRenderer, RenderError};
