//! Picker rendering system
//!
//! Implements the anchor grid visualization using tiny-skia for software
//! rendering. Separates layout calculation from rendering for better
//! testability: [`PickerLayout`] places the border track and the nine dots,
//! and [`PickerRenderer`] rasterizes a layout to a pixmap. [`paint`] ties
//! both to an [`AlignmentPicker`].

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform};

use crate::domain::geometry::{Circle, Rect};
use crate::domain::picker::AlignmentPicker;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,
}

/// Radius of an unselected dot, in local units.
const CIRCLE_RADIUS: f32 = 2.5;

/// Radius of the selected dot. Grows around an unchanged center.
const SELECTED_RADIUS: f32 = 3.0;

/// Gap between the available rect and the dot extents.
const PADDING: f32 = 1.0;

/// Pre-calculated layout for picker rendering
///
/// Contains all the geometric information needed to render the control and to
/// hit-test presses against it. The square track is fit to the smaller edge
/// of the available rect and centered horizontally; `offset` carries that
/// centering translation, which the renderer applies at draw time and
/// [`PickerLayout::hit_regions`] bakes into the returned circles.
#[derive(Debug, Clone)]
pub struct PickerLayout {
    /// Dot circles in untranslated coordinates, row-major. The selected
    /// cell's circle uses the larger radius.
    pub dots: Vec<Circle>,

    /// Border track the dot centers sit on.
    pub border: Rect,

    /// Horizontal centering translation.
    pub offset: f32,

    /// Cell the layout was computed for.
    pub selected: Option<u8>,

    /// Overall canvas dimensions
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl PickerLayout {
    /// Computes the layout for an available rect and the current selection.
    ///
    /// The square side is `min(w, h)`; the border track is the square inset
    /// by dot radius plus padding on every side; the nine dot centers sit on
    /// the track's corners, edge midpoints, and center (50%-of-track
    /// spacing). A degenerate rect keeps the raw arithmetic and still
    /// produces nine circles.
    pub fn compute(avail: Rect, alignment: Option<u8>) -> Self {
        let side = avail.w.min(avail.h);
        let offset = (0.5 * (avail.w - side)).round();
        let track = side - 2.0 * (CIRCLE_RADIUS + PADDING);
        let border = Rect::new(
            avail.x + CIRCLE_RADIUS + PADDING,
            avail.y + CIRCLE_RADIUS + PADDING,
            track,
            track,
        );

        let mut dots = Vec::with_capacity(9);
        for row in 0..3u8 {
            for col in 0..3u8 {
                let index = row * 3 + col;
                let cx = border.x + col as f32 * 0.5 * border.w;
                let cy = border.y + row as f32 * 0.5 * border.h;
                let radius = if alignment == Some(index) {
                    SELECTED_RADIUS
                } else {
                    CIRCLE_RADIUS
                };
                dots.push(Circle::new(cx, cy, radius));
            }
        }

        Self {
            dots,
            border,
            offset,
            selected: alignment,
            canvas_width: avail.w,
            canvas_height: avail.h,
        }
    }

    /// Returns the nine hit circles in final widget coordinates, translated
    /// by the centering offset so they match what the renderer draws.
    pub fn hit_regions(&self) -> Vec<Circle> {
        self.dots
            .iter()
            .map(|dot| dot.translated(self.offset, 0.0))
            .collect()
    }
}

/// Software renderer for picker layouts using tiny-skia
#[derive(Debug)]
pub struct PickerRenderer;

impl PickerRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders a layout to a fresh pixmap.
    ///
    /// The background is transparent; the border square is stroked in the
    /// base color, the unselected dots are filled over it in the base color,
    /// and the selected dot is filled in the selected color. Canvas
    /// dimensions are clamped to at least one pixel so degenerate layouts
    /// still produce a pixmap instead of failing.
    pub fn render(
        &self,
        layout: &PickerLayout,
        color: Color,
        selected_color: Color,
    ) -> Result<Pixmap, RenderError> {
        let width = (layout.canvas_width.ceil() as u32).max(1);
        let height = (layout.canvas_height.ceil() as u32).max(1);
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapCreationFailed)?;

        pixmap.fill(Color::TRANSPARENT);

        let transform = Transform::from_translate(layout.offset, 0.0);
        self.render_border(&mut pixmap, layout, color, transform);
        self.render_dots(&mut pixmap, layout, color, selected_color, transform);

        Ok(pixmap)
    }

    /// Strokes the border track. Skipped when the track has collapsed.
    fn render_border(
        &self,
        pixmap: &mut Pixmap,
        layout: &PickerLayout,
        color: Color,
        transform: Transform,
    ) {
        let rect = SkiaRect::from_xywh(
            layout.border.x,
            layout.border.y,
            layout.border.w,
            layout.border.h,
        );
        if let Some(rect) = rect {
            let path = PathBuilder::from_rect(rect);

            let mut paint = Paint::default();
            paint.set_color(color);
            // Aliased hairline; the dot fills paint over the segments
            // running beneath them.
            paint.anti_alias = false;

            let stroke = Stroke {
                width: 1.0,
                ..Stroke::default()
            };

            pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    /// Fills the unselected dots in the base color and the selected dot in
    /// the selected color.
    fn render_dots(
        &self,
        pixmap: &mut Pixmap,
        layout: &PickerLayout,
        color: Color,
        selected_color: Color,
        transform: Transform,
    ) {
        let mut radio = PathBuilder::new();
        let mut selected = PathBuilder::new();
        for (index, dot) in layout.dots.iter().enumerate() {
            let target = if layout.selected == Some(index as u8) {
                &mut selected
            } else {
                &mut radio
            };
            target.push_circle(dot.cx, dot.cy, dot.radius);
        }

        for (builder, fill_color) in [(radio, color), (selected, selected_color)] {
            if let Some(path) = builder.finish() {
                let mut paint = Paint::default();
                paint.set_color(fill_color);
                paint.anti_alias = true;

                pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
    }
}

impl Default for PickerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Paints a picker into a fresh pixmap for the given available rect.
///
/// Computes the layout for the picker's current selection, renders it with
/// the picker's colors, and installs the layout's hit regions on the picker,
/// clearing its pending repaint flag. On error the picker keeps its previous
/// hit regions and still reports a pending repaint.
pub fn paint(picker: &mut AlignmentPicker, avail: Rect) -> Result<Pixmap, RenderError> {
    let layout = PickerLayout::compute(avail, picker.alignment());
    let pixmap = PickerRenderer::new().render(&layout, picker.color(), picker.selected_color())?;
    picker.set_hit_regions(layout.hit_regions());
    Ok(pixmap)
}
