//! Glyph bounds snapshots over ab_glyph font faces
//!
//! Hosts that render from real font files can hand the picker a
//! [`FontGlyph`]: a bounds snapshot taken from an outline at a given pixel
//! size. Hosts with their own metrics source construct one directly with
//! [`FontGlyph::with_bounds`].

use ab_glyph::Font;

use crate::domain::geometry::Bounds;
use crate::domain::picker::HasBounds;

/// Snapshot of a glyph's outline bounding box.
///
/// Glyphs without an outline (whitespace, empty cells) carry no bounds,
/// which is distinct from an empty rectangle.
#[derive(Debug, Clone)]
pub struct FontGlyph {
    bounds: Option<Bounds>,
}

impl FontGlyph {
    /// Takes a bounds snapshot of `ch` scaled to `px_size` pixels.
    pub fn from_font(font: &impl Font, ch: char, px_size: f32) -> Self {
        let glyph = font.glyph_id(ch).with_scale(px_size);
        let bounds = font
            .outline_glyph(glyph)
            .map(|outlined| px_bounds_to_font_space(outlined.px_bounds()));
        Self { bounds }
    }

    /// Wraps pre-computed bounds, or the absence of any.
    pub fn with_bounds(bounds: Option<Bounds>) -> Self {
        Self { bounds }
    }
}

impl HasBounds for FontGlyph {
    fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }
}

/// Flips an outline's pixel-space rect (y grows downward) into y-up bounds.
fn px_bounds_to_font_space(px: ab_glyph::Rect) -> Bounds {
    Bounds::new(
        px.min.x as f64,
        -px.max.y as f64,
        px.max.x as f64,
        -px.min.y as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::point;

    #[test]
    fn px_bounds_flip_to_y_up() {
        // In pixel space min.y is the highest edge of the outline.
        let px = ab_glyph::Rect {
            min: point(1.0, -70.0),
            max: point(50.0, 10.0),
        };
        let bounds = px_bounds_to_font_space(px);
        assert_eq!(bounds, Bounds::new(1.0, -10.0, 50.0, 70.0));
        assert!(bounds.top > bounds.bottom);
    }

    #[test]
    fn absent_bounds_stay_absent() {
        let glyph = FontGlyph::with_bounds(None);
        assert_eq!(glyph.bounds(), None);
    }

    #[test]
    fn wrapped_bounds_round_trip() {
        let bounds = Bounds::new(0.0, -20.0, 30.0, 60.0);
        let glyph = FontGlyph::with_bounds(Some(bounds));
        assert_eq!(glyph.bounds(), Some(bounds));
    }
}
