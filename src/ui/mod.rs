pub mod renderer;

pub use renderer::{paint, PickerLayout, PickerRenderer, RenderError};
