//! The glowing border card
//!
//! A rounded card with an animated gradient stroke around its edge:
//! a filled backdrop, a thin fully-opaque border, a wider half-opacity
//! glow halo, and a child content slot inset so the halo stays visible
//! around it. The card only records draw operations; rasterization is
//! the UI layer's job.

use crate::glow::gradient::SweepGradient;
use crate::glow::painter::{Paint, Painter};
use crate::types::{Rgba, UnitRect};
use ratatui::{buffer::Buffer, layout::Rect};

/// Opacity of the glow stroke relative to the border stroke.
const GLOW_OPACITY: f32 = 0.5;

/// Child content of a card: anything that can draw itself into the
/// computed content bounds on the terminal buffer.
pub trait CardContent {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

impl<F> CardContent for F
where
    F: Fn(Rect, &mut Buffer),
{
    fn render(&self, area: Rect, buf: &mut Buffer) {
        self(area, buf)
    }
}

/// Content that fills its area with a single color.
pub struct Fill(pub Rgba);

impl CardContent for Fill {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let color = ratatui::style::Color::Rgb(self.0.r, self.0.g, self.0.b);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
    }
}

/// Content that draws nothing.
pub struct Empty;

impl CardContent for Empty {
    fn render(&self, _area: Rect, _buf: &mut Buffer) {}
}

/// A card with an animated glowing border.
pub struct GlowingBorderCard {
    border_color: Rgba,
    background_color: Rgba,
    border_width: f32,
    glow_radius: f32,
    corner_radius: f32,
    content: Box<dyn CardContent>,
}

impl Default for GlowingBorderCard {
    fn default() -> Self {
        Self {
            border_color: Rgba::hex(0x00FF00),
            background_color: Rgba::hex(0x121212),
            border_width: 2.0,
            glow_radius: 10.0,
            corner_radius: 16.0,
            content: Box::new(Empty),
        }
    }
}

impl GlowingBorderCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border_color(mut self, color: Rgba) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Rgba) -> Self {
        self.background_color = color;
        self
    }

    /// Border stroke width in units (negative values clamp to zero)
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }

    /// Glow stroke width in units (negative values clamp to zero)
    pub fn with_glow_radius(mut self, radius: f32) -> Self {
        self.glow_radius = radius.max(0.0);
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    pub fn with_content(mut self, content: impl CardContent + 'static) -> Self {
        self.content = Box::new(content);
        self
    }

    pub fn border_color(&self) -> Rgba {
        self.border_color
    }

    pub fn background_color(&self) -> Rgba {
        self.background_color
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn glow_radius(&self) -> f32 {
        self.glow_radius
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn content(&self) -> &dyn CardContent {
        self.content.as_ref()
    }

    /// Inset of the content area from the card bounds, on all four
    /// sides: the border plus half the glow, so the halo remains visible
    /// around the child.
    pub fn content_inset(&self) -> f32 {
        self.border_width + self.glow_radius / 2.0
    }

    /// Content bounds within the given card bounds
    pub fn content_bounds(&self, bounds: UnitRect) -> UnitRect {
        bounds.inset(self.content_inset())
    }

    /// Record one frame of this card at the given sweep progress.
    ///
    /// Order: background fill, border stroke, glow stroke, content.
    pub fn paint(&self, bounds: UnitRect, progress: f32, painter: &mut Painter) {
        let gradient = SweepGradient::of(self.border_color);

        painter.fill_round_rect(bounds, self.corner_radius, self.background_color);
        painter.stroke_round_rect(
            bounds,
            self.corner_radius,
            Paint::Gradient {
                gradient: gradient.clone(),
                progress,
            },
            self.border_width,
            1.0,
        );
        painter.stroke_round_rect(
            bounds,
            self.corner_radius,
            Paint::Gradient { gradient, progress },
            self.glow_radius,
            GLOW_OPACITY,
        );
        painter.content(self.content_bounds(bounds), self.corner_radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glow::painter::DrawOp;

    #[test]
    fn test_defaults() {
        let card = GlowingBorderCard::new();
        assert_eq!(card.border_color().to_hex(), "#00FF00");
        assert_eq!(card.background_color().to_hex(), "#121212");
        assert_eq!(card.border_width(), 2.0);
        assert_eq!(card.glow_radius(), 10.0);
        assert_eq!(card.corner_radius(), 16.0);
    }

    #[test]
    fn test_negative_inputs_clamp() {
        let card = GlowingBorderCard::new()
            .with_border_width(-4.0)
            .with_glow_radius(-1.0)
            .with_corner_radius(-16.0);
        assert_eq!(card.border_width(), 0.0);
        assert_eq!(card.glow_radius(), 0.0);
        assert_eq!(card.corner_radius(), 0.0);
        assert_eq!(card.content_inset(), 0.0);
    }

    #[test]
    fn test_content_inset_formula() {
        for (border, glow) in [(2.0f32, 8.0f32), (0.0, 12.0), (5.0, 0.0), (3.5, 7.0)] {
            let card = GlowingBorderCard::new()
                .with_border_width(border)
                .with_glow_radius(glow);
            assert_eq!(card.content_inset(), border + glow / 2.0);
        }
    }

    #[test]
    fn test_content_bounds_inset_on_all_sides() {
        let card = GlowingBorderCard::new()
            .with_border_width(2.0)
            .with_glow_radius(8.0);
        let bounds = UnitRect::new(10.0, 20.0, 200.0, 120.0);
        let content = card.content_bounds(bounds);
        assert_eq!(content.x - bounds.x, 6.0);
        assert_eq!(content.y - bounds.y, 6.0);
        assert_eq!(bounds.right() - content.right(), 6.0);
        assert_eq!(bounds.bottom() - content.bottom(), 6.0);
    }

    #[test]
    fn test_draw_order() {
        let card = GlowingBorderCard::new();
        let bounds = UnitRect::new(0.0, 0.0, 200.0, 120.0);
        let mut painter = Painter::new();
        card.paint(bounds, 0.25, &mut painter);

        let ops = painter.into_ops();
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[0], DrawOp::FillRoundRect { .. }));
        assert!(
            matches!(ops[1], DrawOp::StrokeRoundRect { opacity, .. } if opacity == 1.0),
            "border stroke must be fully opaque"
        );
        assert!(
            matches!(ops[2], DrawOp::StrokeRoundRect { opacity, .. } if opacity == 0.5),
            "glow stroke must be half opacity"
        );
        assert!(matches!(ops[3], DrawOp::Content { .. }));
    }

    #[test]
    fn test_stroke_widths_in_ops() {
        let card = GlowingBorderCard::new()
            .with_border_width(2.0)
            .with_glow_radius(12.0);
        let mut painter = Painter::new();
        card.paint(UnitRect::new(0.0, 0.0, 100.0, 50.0), 0.0, &mut painter);

        let widths: Vec<f32> = painter
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeRoundRect { stroke_width, .. } => Some(*stroke_width),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![2.0, 12.0]);
    }

    #[test]
    fn test_paint_never_panics_across_parameters() {
        // Degenerate geometry must degrade gracefully, not error
        for (w, h) in [(0.0f32, 0.0f32), (1.0, 1.0), (5000.0, 3000.0)] {
            for glow in [0.0f32, 8.0, 64.0] {
                let card = GlowingBorderCard::new().with_glow_radius(glow);
                let mut painter = Painter::new();
                card.paint(UnitRect::new(0.0, 0.0, w, h), -0.5, &mut painter);
                assert_eq!(painter.ops().len(), 4);
            }
        }
    }
}
