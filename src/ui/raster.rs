//! Unit-space to cell-grid rasterizer
//!
//! Executes a card's draw operations on the terminal buffer. A cell is a
//! coarse 8x16-unit box, so the stroke geometry collapses onto rings of
//! cells: opaque strokes become box-drawing lines, translucent strokes
//! become shade-glyph halos, and all alpha is composited in software
//! before a cell color is written.
//!
//! Ring layout, derived from the recorded stroke widths alone: the
//! border line sits inset from the widget edge by the distance the
//! widest stroke reaches beyond it, which leaves the margin cells free
//! for the outer halo. The content area renders last, clipped at least
//! one cell inside the border line.

use crate::glow::card::GlowingBorderCard;
use crate::glow::painter::{DrawOp, Paint, Painter};
use crate::types::{CellMetrics, Rgba, UnitRect};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Color,
};

/// Shade glyph for halo cells adjacent to the border line.
const HALO_NEAR: char = '▒';
/// Shade glyph for halo cells further out.
const HALO_FAR: char = '░';

/// Convert a composited (opaque) color to a terminal color
pub fn to_color(c: Rgba) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Renders cards onto the terminal grid.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    metrics: CellMetrics,
    backdrop: Rgba,
}

impl Rasterizer {
    pub fn new(metrics: CellMetrics, backdrop: Rgba) -> Self {
        Self { metrics, backdrop }
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Render one card into `area` at the given sweep progress.
    pub fn render_card(
        &self,
        card: &GlowingBorderCard,
        area: Rect,
        progress: f32,
        buf: &mut Buffer,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let card_width = area.width as f32 * self.metrics.units_per_col;
        let card_height = area.height as f32 * self.metrics.units_per_row;
        let bounds = UnitRect::new(0.0, 0.0, card_width, card_height);

        let mut painter = Painter::new();
        card.paint(bounds, progress, &mut painter);
        let ops = painter.into_ops();

        let geo = RingGeometry::from_ops(&ops, area, &self.metrics);
        let card_bg = card.background_color();

        for op in &ops {
            match op {
                DrawOp::FillRoundRect { color, .. } => {
                    self.fill_rect(geo.outline, *color, buf);
                }
                DrawOp::StrokeRoundRect {
                    paint,
                    stroke_width,
                    opacity,
                    corner_radius,
                    ..
                } => {
                    if *stroke_width <= 0.0 || geo.outline.width == 0 || geo.outline.height == 0 {
                        continue;
                    }
                    if *opacity >= 1.0 {
                        self.stroke_line(geo, paint, card_width, *corner_radius, card_bg, buf);
                    } else {
                        self.stroke_halo(geo, area, paint, card_width, *opacity, card_bg, buf);
                    }
                }
                DrawOp::Content { .. } => {
                    card.content().render(geo.content_area(area), buf);
                }
            }
        }
    }

    /// Fill a cell rectangle with an opaque background color
    fn fill_rect(&self, rect: Rect, color: Rgba, buf: &mut Buffer) {
        let bg = to_color(color.over(self.backdrop));
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_bg(bg);
                }
            }
        }
    }

    /// Draw the opaque border line on the outline ring
    fn stroke_line(
        &self,
        geo: RingGeometry,
        paint: &Paint,
        card_width: f32,
        corner_radius: f32,
        card_bg: Rgba,
        buf: &mut Buffer,
    ) {
        let rounded = corner_radius > 0.0;
        let outline = geo.outline;

        for (x, y) in perimeter_cells(outline) {
            let top = y == outline.top();
            let bottom = y == outline.bottom() - 1;
            let left = x == outline.left();
            let right = x == outline.right() - 1;

            let ch = match (top, bottom, left, right) {
                (true, _, true, _) => corner_char(rounded, 0),
                (true, _, _, true) => corner_char(rounded, 1),
                (_, true, true, _) => corner_char(rounded, 2),
                (_, true, _, true) => corner_char(rounded, 3),
                (true, ..) | (_, true, ..) => '─',
                _ => '│',
            };

            // Corner cells sit outside the rounded shape, so they blend
            // toward the screen backdrop instead of the card surface
            let is_corner = (top || bottom) && (left || right);
            let under = if is_corner && rounded {
                self.backdrop
            } else {
                card_bg
            };
            let fg = sample(paint, self.x_units(x, geo.area_left), card_width).over(under);

            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_fg(to_color(fg)).set_bg(to_color(under));
            }
        }
    }

    /// Draw the translucent glow halo around the border line
    fn stroke_halo(
        &self,
        geo: RingGeometry,
        area: Rect,
        paint: &Paint,
        card_width: f32,
        opacity: f32,
        card_bg: Rgba,
        buf: &mut Buffer,
    ) {
        let outline = geo.outline;

        // Outer halo: every cell of the widget area outside the outline
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if contains(outline, x, y) {
                    continue;
                }
                let d = ring_distance(outline, x, y);
                let ch = if d <= 1 { HALO_NEAR } else { HALO_FAR };
                let sampled = sample(paint, self.x_units(x, geo.area_left), card_width);
                let fg = sampled.with_alpha(sampled.a * opacity).over(self.backdrop);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch)
                        .set_fg(to_color(fg))
                        .set_bg(to_color(self.backdrop));
                }
            }
        }

        // Inner halo: one ring inside the border line, only where the
        // content area leaves it visible
        let inner = outline.inner(Margin::new(1, 1));
        if inner.width == 0 || inner.height == 0 || !geo.content_clears_inner_ring {
            return;
        }
        for (x, y) in perimeter_cells(inner) {
            let sampled = sample(paint, self.x_units(x, geo.area_left), card_width);
            let fg = sampled.with_alpha(sampled.a * opacity).over(card_bg);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(HALO_FAR)
                    .set_fg(to_color(fg))
                    .set_bg(to_color(card_bg));
            }
        }
    }

    /// Unit-space x of a cell column's center, relative to the card origin
    fn x_units(&self, x: u16, origin: u16) -> f32 {
        self.metrics.col_center_x(x.saturating_sub(origin))
    }
}

/// Cell-grid ring placement derived from the recorded stroke widths.
#[derive(Debug, Clone, Copy)]
struct RingGeometry {
    area_left: u16,
    outline: Rect,
    content_margin: (u16, u16),
    content_clears_inner_ring: bool,
}

impl RingGeometry {
    fn from_ops(ops: &[DrawOp], area: Rect, metrics: &CellMetrics) -> Self {
        let mut border_width = 0.0f32;
        let mut max_width = 0.0f32;
        let mut first_stroke = true;
        let mut content_offset = 0.0f32;

        for op in ops {
            match op {
                DrawOp::StrokeRoundRect { stroke_width, .. } => {
                    if first_stroke {
                        border_width = *stroke_width;
                        first_stroke = false;
                    }
                    max_width = max_width.max(*stroke_width);
                }
                DrawOp::Content { bounds, .. } => {
                    content_offset = bounds.x;
                }
                DrawOp::FillRoundRect { .. } => {}
            }
        }

        // How far the widest stroke reaches beyond the border line, on
        // each side of it
        let margin_units = ((max_width - border_width) / 2.0).max(0.0);
        let mx = metrics
            .cols(margin_units)
            .min(area.width.saturating_sub(2) / 2);
        let my = metrics
            .rows(margin_units)
            .min(area.height.saturating_sub(2) / 2);
        let outline = area.inner(Margin::new(mx, my));

        // Content stays at least one cell inside the border line
        let cx = metrics.cols(content_offset).max(mx + 1);
        let cy = metrics.rows(content_offset).max(my + 1);
        let content_clears_inner_ring = cx > mx + 1 && cy > my + 1;

        Self {
            area_left: area.left(),
            outline,
            content_margin: (cx, cy),
            content_clears_inner_ring,
        }
    }

    fn content_area(&self, area: Rect) -> Rect {
        let (cx, cy) = self.content_margin;
        area.inner(Margin::new(cx, cy))
    }
}

/// Sample a paint at a horizontal unit position on the card
fn sample(paint: &Paint, x_units: f32, card_width: f32) -> Rgba {
    match paint {
        Paint::Solid(color) => *color,
        Paint::Gradient { gradient, progress } => {
            gradient.color_at(x_units, card_width, *progress)
        }
    }
}

fn corner_char(rounded: bool, which: usize) -> char {
    const ROUND: [char; 4] = ['╭', '╮', '╰', '╯'];
    const SQUARE: [char; 4] = ['┌', '┐', '└', '┘'];
    if rounded {
        ROUND[which]
    } else {
        SQUARE[which]
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.left() && x < rect.right() && y >= rect.top() && y < rect.bottom()
}

/// Chebyshev-style distance from a cell to the nearest outline cell
fn ring_distance(outline: Rect, x: u16, y: u16) -> u16 {
    let dx = if x < outline.left() {
        outline.left() - x
    } else if x >= outline.right() {
        x + 1 - outline.right()
    } else {
        0
    };
    let dy = if y < outline.top() {
        outline.top() - y
    } else if y >= outline.bottom() {
        y + 1 - outline.bottom()
    } else {
        0
    };
    dx.max(dy)
}

/// All cells on the perimeter of a rectangle, each exactly once
fn perimeter_cells(rect: Rect) -> Vec<(u16, u16)> {
    let mut cells = Vec::new();
    if rect.width == 0 || rect.height == 0 {
        return cells;
    }
    for x in rect.left()..rect.right() {
        cells.push((x, rect.top()));
        if rect.height > 1 {
            cells.push((x, rect.bottom() - 1));
        }
    }
    if rect.width > 1 {
        for y in (rect.top() + 1)..rect.bottom().saturating_sub(1) {
            cells.push((rect.left(), y));
            cells.push((rect.right() - 1, y));
        }
    } else {
        for y in (rect.top() + 1)..rect.bottom().saturating_sub(1) {
            cells.push((rect.left(), y));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glow::card::{Fill, GlowingBorderCard};
    use crate::glow::demo;

    fn test_rasterizer() -> Rasterizer {
        Rasterizer::new(CellMetrics::default(), demo::BACKDROP)
    }

    fn demo_card() -> GlowingBorderCard {
        GlowingBorderCard::new()
            .with_glow_radius(8.0)
            .with_content(Fill(demo::CARD_FILL))
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).unwrap().symbol()
    }

    #[test]
    fn test_corner_glyphs_on_outline_ring() {
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        test_rasterizer().render_card(&demo_card(), area, 0.5, &mut buf);

        // Glow 8 vs border 2 leaves a one-cell halo margin on each side
        assert_eq!(symbol(&buf, 1, 1), "╭");
        assert_eq!(symbol(&buf, 18, 1), "╮");
        assert_eq!(symbol(&buf, 1, 6), "╰");
        assert_eq!(symbol(&buf, 18, 6), "╯");
        assert_eq!(symbol(&buf, 10, 1), "─");
        assert_eq!(symbol(&buf, 1, 3), "│");
    }

    #[test]
    fn test_outer_halo_uses_shade_glyphs() {
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        test_rasterizer().render_card(&demo_card(), area, 0.5, &mut buf);

        for (x, y) in [(0, 0), (10, 0), (19, 0), (0, 4), (19, 7)] {
            let s = symbol(&buf, x, y);
            assert!(s == "▒" || s == "░", "expected shade glyph at ({x},{y}), got {s:?}");
        }
    }

    #[test]
    fn test_content_fill_inside_border() {
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        test_rasterizer().render_card(&demo_card(), area, 0.5, &mut buf);

        // Content margin is two cells here: one halo ring plus the border
        let cell = buf.cell((10, 4)).unwrap();
        assert_eq!(cell.bg, Color::Rgb(0x12, 0x12, 0x12));
        assert_eq!(cell.symbol(), " ");
    }

    #[test]
    fn test_border_color_tracks_border_hue() {
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        // Progress 0.5 puts the gradient core mid-card
        test_rasterizer().render_card(&demo_card(), area, 0.5, &mut buf);

        match buf.cell((10, 1)).unwrap().fg {
            Color::Rgb(r, g, b) => {
                assert!(g > 200, "green border core should be bright, got g={g}");
                assert!(r < 40 && b < 40);
            }
            other => panic!("expected RGB fg, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_glow_puts_border_at_edge() {
        let card = GlowingBorderCard::new().with_glow_radius(0.0);
        let area = Rect::new(0, 0, 16, 6);
        let mut buf = Buffer::empty(area);
        test_rasterizer().render_card(&card, area, 0.0, &mut buf);

        assert_eq!(symbol(&buf, 0, 0), "╭");
        assert_eq!(symbol(&buf, 15, 5), "╯");
    }

    #[test]
    fn test_square_corners_without_radius() {
        let card = GlowingBorderCard::new()
            .with_glow_radius(0.0)
            .with_corner_radius(0.0);
        let area = Rect::new(0, 0, 16, 6);
        let mut buf = Buffer::empty(area);
        test_rasterizer().render_card(&card, area, 0.0, &mut buf);

        assert_eq!(symbol(&buf, 0, 0), "┌");
        assert_eq!(symbol(&buf, 15, 0), "┐");
    }

    #[test]
    fn test_never_writes_outside_area() {
        let full = Rect::new(0, 0, 30, 12);
        let area = Rect::new(5, 2, 20, 8);
        let mut buf = Buffer::empty(full);
        test_rasterizer().render_card(&demo_card(), area, 0.25, &mut buf);

        for y in full.top()..full.bottom() {
            for x in full.left()..full.right() {
                if contains(area, x, y) {
                    continue;
                }
                let cell = buf.cell((x, y)).unwrap();
                assert_eq!(cell.symbol(), " ", "cell ({x},{y}) was touched");
                assert_eq!(cell.bg, Color::Reset);
            }
        }
    }

    #[test]
    fn test_tiny_areas_do_not_panic() {
        let r = test_rasterizer();
        for (w, h) in [(0u16, 0u16), (1, 1), (2, 1), (1, 2), (3, 3)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            r.render_card(&demo_card(), area, 0.0, &mut buf);
        }
    }

    #[test]
    fn test_ring_distance() {
        let outline = Rect::new(2, 2, 6, 4);
        assert_eq!(ring_distance(outline, 1, 2), 1);
        assert_eq!(ring_distance(outline, 0, 0), 2);
        assert_eq!(ring_distance(outline, 8, 3), 1);
        assert_eq!(ring_distance(outline, 4, 3), 0);
    }

    #[test]
    fn test_perimeter_cells_unique() {
        let rect = Rect::new(0, 0, 4, 3);
        let cells = perimeter_cells(rect);
        let mut sorted = cells.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), cells.len());
        // 4x3 rect: 4+4 top/bottom rows + 2 side cells
        assert_eq!(cells.len(), 10);

        // Degenerate single-column rect has no duplicates either
        let thin = perimeter_cells(Rect::new(0, 0, 1, 4));
        let mut t = thin.clone();
        t.sort_unstable();
        t.dedup();
        assert_eq!(t.len(), thin.len());
        assert_eq!(thin.len(), 4);
    }
}
