//! Alignment picker state and interaction
//!
//! This module implements the state machine behind the metrics anchor control:
//! a 3x3 grid of radio dots laid over a glyph's bounding square. It owns the
//! selection and the glyph association, plus the hit regions from the most
//! recent paint. Layout and rasterization live in [`crate::ui`].

use std::rc::{Rc, Weak};

use crate::domain::geometry::{Bounds, Circle, Point};
use tiny_skia::Color;

/// Capability exposed by anything the picker can anchor to.
///
/// Implementors report their bounding box in font units, or `None` when the
/// glyph has no visible marks (an empty glyph has no bounds, not an empty
/// rectangle).
pub trait HasBounds {
    fn bounds(&self) -> Option<Bounds>;
}

/// Pointer button identifier for press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Whether the picker consumed a pointer event.
///
/// `Ignored` events should be forwarded to the host's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Handled,
    Ignored,
}

/// Stateful model of the 3x3 anchor grid control
///
/// Cells are numbered row-major: 0 is top-left, 8 is bottom-right. Selecting
/// the already-selected cell clears the selection. The picker holds a
/// non-owning reference to its glyph; once the glyph is dropped the
/// association dissolves and [`AlignmentPicker::origin`] falls back to
/// `(0, 0)`.
pub struct AlignmentPicker {
    alignment: Option<u8>,
    glyph: Option<Weak<dyn HasBounds>>,
    hit_regions: Vec<Circle>,
    color: Color,
    selected_color: Color,
    needs_repaint: bool,
}

impl AlignmentPicker {
    /// Preferred edge length of the square control, in local units.
    pub const DEFAULT_SIZE: f32 = 30.0;

    /// Creates a picker with no selection, no glyph, and the stock colors.
    ///
    /// A fresh picker reports [`needs_repaint`](Self::needs_repaint) until its
    /// first paint installs hit regions.
    pub fn new() -> Self {
        Self {
            alignment: None,
            glyph: None,
            hit_regions: Vec::new(),
            color: Color::from_rgba8(130, 130, 130, 255),
            selected_color: Color::from_rgba8(20, 146, 230, 255),
            needs_repaint: true,
        }
    }

    /// Returns the selected cell, if any
    pub fn alignment(&self) -> Option<u8> {
        self.alignment
    }

    /// Sets the selected cell directly, without validation or repaint
    pub fn set_alignment(&mut self, alignment: Option<u8>) {
        self.alignment = alignment;
    }

    /// Associates the picker with a glyph without taking ownership.
    pub fn set_glyph<G: HasBounds + 'static>(&mut self, glyph: &Rc<G>) {
        let weak: Weak<G> = Rc::downgrade(glyph);
        self.glyph = Some(weak);
    }

    /// Drops the glyph association.
    pub fn clear_glyph(&mut self) {
        self.glyph = None;
    }

    /// Returns the associated glyph while it is still alive.
    pub fn glyph(&self) -> Option<Rc<dyn HasBounds>> {
        self.glyph.as_ref().and_then(Weak::upgrade)
    }

    /// Computes the anchor point on the glyph's bounding box.
    ///
    /// Returns `(0, 0)` when no cell is selected, no glyph is associated (or
    /// it has been dropped), or the glyph has no bounds. Otherwise the x
    /// coordinate comes from the cell's column (left edge, horizontal center,
    /// right edge) and the y coordinate from its row (top edge, vertical
    /// center, bottom edge).
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    /// use glyphsmith::domain::geometry::Bounds;
    /// use glyphsmith::domain::picker::AlignmentPicker;
    /// use glyphsmith::font::FontGlyph;
    ///
    /// let glyph = Rc::new(FontGlyph::with_bounds(Some(Bounds::new(10.0, 0.0, 50.0, 70.0))));
    /// let mut picker = AlignmentPicker::new();
    /// picker.set_glyph(&glyph);
    /// picker.set_alignment(Some(0));
    /// assert_eq!(picker.origin(), (10.0, 70.0));
    /// ```
    pub fn origin(&self) -> (f64, f64) {
        let (Some(alignment), Some(glyph)) = (self.alignment, self.glyph()) else {
            return (0.0, 0.0);
        };
        let Some(bounds) = glyph.bounds() else {
            return (0.0, 0.0);
        };
        let x = match alignment % 3 {
            0 => bounds.left,
            2 => bounds.right,
            _ => (bounds.left + bounds.right) / 2.0,
        };
        let y = if alignment < 3 {
            bounds.top
        } else if alignment > 5 {
            bounds.bottom
        } else {
            (bounds.top + bounds.bottom) / 2.0
        };
        (x, y)
    }

    /// Returns the base display color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the base display color and requests a repaint
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.needs_repaint = true;
    }

    /// Returns the color of the selected dot
    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Sets the color of the selected dot and requests a repaint
    pub fn set_selected_color(&mut self, color: Color) {
        self.selected_color = color;
        self.needs_repaint = true;
    }

    /// Handles a pointer press at widget-local coordinates.
    ///
    /// A primary-button press toggles the cell whose hit region contains the
    /// point: selecting it, or clearing the selection when it was already
    /// selected. Primary presses are consumed even when they miss every
    /// region. Non-primary presses return [`EventStatus::Ignored`] so the
    /// host can apply default handling.
    pub fn press(&mut self, button: PointerButton, pos: Point) -> EventStatus {
        if button != PointerButton::Primary {
            return EventStatus::Ignored;
        }
        if let Some(index) = self.hit_test(pos) {
            if self.alignment == Some(index) {
                self.alignment = None;
            } else {
                self.alignment = Some(index);
            }
            tracing::trace!(
                "press at ({}, {}) toggled cell {} -> {:?}",
                pos.x,
                pos.y,
                index,
                self.alignment
            );
            self.needs_repaint = true;
        }
        EventStatus::Handled
    }

    /// Returns the cell whose hit region contains the point, scanning in cell
    /// order. Always `None` before the first paint.
    pub fn hit_test(&self, pos: Point) -> Option<u8> {
        self.hit_regions
            .iter()
            .position(|region| region.contains(pos))
            .map(|index| index as u8)
    }

    /// Hit regions from the most recent paint: empty, or one circle per cell.
    pub fn hit_regions(&self) -> &[Circle] {
        &self.hit_regions
    }

    /// Installs the hit regions computed by the paint path and clears the
    /// pending repaint flag. Called on every repaint; the regions must be the
    /// nine translated circles of the layout that was just drawn.
    pub fn set_hit_regions(&mut self, regions: Vec<Circle>) {
        self.hit_regions = regions;
        self.needs_repaint = false;
    }

    /// Returns true when state changed since the last paint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }
}

impl Default for AlignmentPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BoxGlyph {
        bounds: Option<Bounds>,
    }

    impl HasBounds for BoxGlyph {
        fn bounds(&self) -> Option<Bounds> {
            self.bounds
        }
    }

    fn glyph_with_bounds() -> Rc<BoxGlyph> {
        Rc::new(BoxGlyph {
            bounds: Some(Bounds::new(10.0, -20.0, 110.0, 80.0)),
        })
    }

    /// Nine distinct regions with centers spread along the x axis.
    fn spread_regions() -> Vec<Circle> {
        (0..9).map(|i| Circle::new(10.0 * i as f32, 0.0, 2.5)).collect()
    }

    fn center_of(regions: &[Circle], index: usize) -> Point {
        Point::new(regions[index].cx, regions[index].cy)
    }

    #[test]
    fn new_picker_has_no_selection_and_wants_paint() {
        let picker = AlignmentPicker::new();
        assert_eq!(picker.alignment(), None);
        assert!(picker.glyph().is_none());
        assert!(picker.hit_regions().is_empty());
        assert!(picker.needs_repaint());
    }

    #[test]
    fn origin_maps_all_nine_cells() {
        let glyph = glyph_with_bounds();
        let mut picker = AlignmentPicker::new();
        picker.set_glyph(&glyph);

        // Bounds are (left 10, bottom -20, right 110, top 80).
        let xs = [10.0, 60.0, 110.0];
        let ys = [80.0, 30.0, -20.0];
        for alignment in 0..9u8 {
            picker.set_alignment(Some(alignment));
            let expected = (xs[(alignment % 3) as usize], ys[(alignment / 3) as usize]);
            assert_eq!(picker.origin(), expected, "alignment {alignment}");
        }
    }

    #[test]
    fn origin_is_zero_without_selection_glyph_or_bounds() {
        let mut picker = AlignmentPicker::new();
        assert_eq!(picker.origin(), (0.0, 0.0));

        // Selection but no glyph.
        picker.set_alignment(Some(4));
        assert_eq!(picker.origin(), (0.0, 0.0));

        // Glyph without bounds.
        let empty = Rc::new(BoxGlyph { bounds: None });
        picker.set_glyph(&empty);
        assert_eq!(picker.origin(), (0.0, 0.0));

        // Glyph with bounds but no selection.
        let glyph = glyph_with_bounds();
        picker.set_glyph(&glyph);
        picker.set_alignment(None);
        assert_eq!(picker.origin(), (0.0, 0.0));
    }

    #[test]
    fn dropping_the_glyph_dissolves_the_association() {
        let mut picker = AlignmentPicker::new();
        picker.set_alignment(Some(0));
        {
            let glyph = glyph_with_bounds();
            picker.set_glyph(&glyph);
            assert_eq!(picker.origin(), (10.0, 80.0));
        }
        assert!(picker.glyph().is_none());
        assert_eq!(picker.origin(), (0.0, 0.0));
    }

    #[test]
    fn clear_glyph_drops_the_association() {
        let glyph = glyph_with_bounds();
        let mut picker = AlignmentPicker::new();
        picker.set_glyph(&glyph);
        picker.clear_glyph();
        assert!(picker.glyph().is_none());
    }

    #[test]
    fn replacing_the_glyph_swaps_the_association() {
        struct FixedBox;
        impl HasBounds for FixedBox {
            fn bounds(&self) -> Option<Bounds> {
                Some(Bounds::new(0.0, 0.0, 40.0, 40.0))
            }
        }

        let mut picker = AlignmentPicker::new();
        picker.set_alignment(Some(8));
        let first = glyph_with_bounds();
        picker.set_glyph(&first);
        assert_eq!(picker.origin(), (110.0, -20.0));

        // A different glyph type behind the same association.
        let second = Rc::new(FixedBox);
        picker.set_glyph(&second);
        assert_eq!(picker.origin(), (40.0, 0.0));
    }

    #[test]
    fn press_selects_and_toggles_off() {
        let mut picker = AlignmentPicker::new();
        let regions = spread_regions();
        picker.set_hit_regions(regions.clone());

        let status = picker.press(PointerButton::Primary, center_of(&regions, 2));
        assert_eq!(status, EventStatus::Handled);
        assert_eq!(picker.alignment(), Some(2));

        // Same cell again clears the selection.
        picker.press(PointerButton::Primary, center_of(&regions, 2));
        assert_eq!(picker.alignment(), None);
    }

    #[test]
    fn press_on_other_cell_replaces_selection() {
        let mut picker = AlignmentPicker::new();
        let regions = spread_regions();
        picker.set_hit_regions(regions.clone());

        picker.press(PointerButton::Primary, center_of(&regions, 2));
        picker.press(PointerButton::Primary, center_of(&regions, 5));
        assert_eq!(picker.alignment(), Some(5));
    }

    #[test]
    fn press_outside_regions_is_consumed_without_change() {
        let mut picker = AlignmentPicker::new();
        picker.set_hit_regions(spread_regions());
        picker.set_alignment(Some(3));

        let status = picker.press(PointerButton::Primary, Point::new(500.0, 500.0));
        assert_eq!(status, EventStatus::Handled);
        assert_eq!(picker.alignment(), Some(3));
    }

    #[test]
    fn non_primary_press_is_ignored() {
        let mut picker = AlignmentPicker::new();
        let regions = spread_regions();
        picker.set_hit_regions(regions.clone());

        let status = picker.press(PointerButton::Secondary, center_of(&regions, 0));
        assert_eq!(status, EventStatus::Ignored);
        assert_eq!(picker.alignment(), None);

        let status = picker.press(PointerButton::Auxiliary, center_of(&regions, 0));
        assert_eq!(status, EventStatus::Ignored);
        assert_eq!(picker.alignment(), None);
    }

    #[test]
    fn press_before_first_paint_does_nothing() {
        let mut picker = AlignmentPicker::new();
        let status = picker.press(PointerButton::Primary, Point::new(15.0, 15.0));
        assert_eq!(status, EventStatus::Handled);
        assert_eq!(picker.alignment(), None);
    }

    #[test]
    fn hit_test_returns_first_match_in_scan_order() {
        let mut picker = AlignmentPicker::new();
        // All nine regions concentric, as a degenerate layout produces.
        picker.set_hit_regions(vec![Circle::new(5.0, 5.0, 2.5); 9]);
        assert_eq!(picker.hit_test(Point::new(5.0, 5.0)), Some(0));
    }

    #[test]
    fn color_setters_request_repaint() {
        let mut picker = AlignmentPicker::new();
        picker.set_hit_regions(spread_regions());
        assert!(!picker.needs_repaint());

        picker.set_color(Color::from_rgba8(0, 0, 0, 255));
        assert!(picker.needs_repaint());

        picker.set_hit_regions(spread_regions());
        picker.set_selected_color(Color::from_rgba8(255, 0, 0, 255));
        assert!(picker.needs_repaint());
    }

    #[test]
    fn set_alignment_does_not_request_repaint() {
        let mut picker = AlignmentPicker::new();
        picker.set_hit_regions(spread_regions());
        picker.set_alignment(Some(1));
        assert!(!picker.needs_repaint());
    }

    #[test]
    fn toggling_via_press_requests_repaint() {
        let mut picker = AlignmentPicker::new();
        let regions = spread_regions();
        picker.set_hit_regions(regions.clone());
        picker.press(PointerButton::Primary, center_of(&regions, 1));
        assert!(picker.needs_repaint());
    }
}
