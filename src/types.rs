//! Core data types for glowcard
//!
//! This module defines the shared building blocks used throughout the
//! application: colors with an alpha channel, rectangles in the
//! density-independent unit space the cards are specified in, and the
//! metrics that map that space onto the terminal cell grid.

/// An RGBA color in unit space.
///
/// Terminal cells have no alpha channel, so alpha is carried here and
/// composited in software before a color ever reaches the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0.0, 1.0].
    pub a: f32,
}

impl Rgba {
    /// Fully opaque color from individual channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Fully opaque color from a 0xRRGGBB literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same color with a different opacity (clamped to [0, 1])
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear interpolation between two colors, channel-wise
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composite this color over an opaque backdrop, yielding an opaque color
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let ch = |src: u8, dst: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
        Rgba::rgb(
            ch(self.r, backdrop.r),
            ch(self.g, backdrop.g),
            ch(self.b, backdrop.b),
        )
    }

    /// Format as #RRGGBB (alpha is not part of the hex form)
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A rectangle in unit space.
///
/// Widths and heights are kept non-negative; construction and insetting
/// clamp rather than error, matching the degrade-gracefully contract of
/// the card component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl UnitRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Shrink the rectangle by `d` units on all four sides.
    ///
    /// Collapses to a zero-sized rectangle at its center when the inset
    /// exceeds half the extent.
    pub fn inset(self, d: f32) -> Self {
        let d = d.max(0.0);
        let width = (self.width - 2.0 * d).max(0.0);
        let height = (self.height - 2.0 * d).max(0.0);
        let x = self.x + (self.width - width) / 2.0;
        let y = self.y + (self.height - height) / 2.0;
        Self { x, y, width, height }
    }

    pub fn right(self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(self) -> f32 {
        self.y + self.height
    }
}

/// Mapping between unit space and the terminal cell grid.
///
/// A terminal cell is treated as a nominal 8x16 unit box, so horizontal
/// and vertical extents convert with different divisors.
#[derive(Debug, Clone, Copy)]
pub struct CellMetrics {
    pub units_per_col: f32,
    pub units_per_row: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            units_per_col: 8.0,
            units_per_row: 16.0,
        }
    }
}

impl CellMetrics {
    /// Horizontal extent in columns, rounded up so any positive extent
    /// occupies at least one cell
    pub fn cols(&self, units: f32) -> u16 {
        span_to_cells(units, self.units_per_col)
    }

    /// Vertical extent in rows, rounded up
    pub fn rows(&self, units: f32) -> u16 {
        span_to_cells(units, self.units_per_row)
    }

    /// Horizontal position of a cell column's center, in units
    pub fn col_center_x(&self, col: u16) -> f32 {
        (col as f32 + 0.5) * self.units_per_col
    }
}

fn span_to_cells(units: f32, units_per_cell: f32) -> u16 {
    if units <= 0.0 {
        return 0;
    }
    (units / units_per_cell).ceil() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let green = Rgba::hex(0x00FF00);
        assert_eq!(green, Rgba::rgb(0, 255, 0));
        assert_eq!(green.to_hex(), "#00FF00");
        assert_eq!(Rgba::hex(0xA020F0).to_hex(), "#A020F0");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5).r, 100);
    }

    #[test]
    fn test_over_compositing() {
        let black = Rgba::rgb(0, 0, 0);
        let half_white = Rgba::rgb(255, 255, 255).with_alpha(0.5);
        let out = half_white.over(black);
        assert_eq!(out.a, 1.0);
        assert!(out.r >= 127 && out.r <= 128);

        // Fully opaque color replaces the backdrop entirely
        let red = Rgba::rgb(255, 0, 0);
        assert_eq!(red.over(black), red);
    }

    #[test]
    fn test_unit_rect_clamps_negative() {
        let r = UnitRect::new(0.0, 0.0, -10.0, 5.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 5.0);
    }

    #[test]
    fn test_inset() {
        let r = UnitRect::new(10.0, 10.0, 100.0, 60.0).inset(8.0);
        assert_eq!(r.x, 18.0);
        assert_eq!(r.y, 18.0);
        assert_eq!(r.width, 84.0);
        assert_eq!(r.height, 44.0);

        // Over-inset collapses at the center instead of going negative
        let tiny = UnitRect::new(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(tiny.width, 0.0);
        assert_eq!(tiny.height, 0.0);
        assert_eq!(tiny.x, 5.0);
    }

    #[test]
    fn test_cell_metrics_round_up() {
        let m = CellMetrics::default();
        // Card height from the demo screen: 120 units -> 8 rows
        assert_eq!(m.rows(120.0), 8);
        // Spacing: 16 units -> exactly 1 row, 2 cols
        assert_eq!(m.rows(16.0), 1);
        assert_eq!(m.cols(16.0), 2);
        // Any positive extent stays visible
        assert_eq!(m.rows(0.1), 1);
        assert_eq!(m.rows(0.0), 0);
    }
}
