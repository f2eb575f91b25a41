//! Traveling gradient for the glowing border
//!
//! A five-stop horizontal linear gradient built from a single border
//! color: a fully opaque core fading to 20% opacity on both sides. The
//! gradient window spans ±0.3 of the card width around the current sweep
//! progress, which makes the bright core appear to travel across the
//! border as progress advances.

use crate::types::Rgba;

/// Half-width of the gradient window as a fraction of the card width.
pub const HALF_WINDOW: f32 = 0.3;

/// Alpha values of the five gradient stops, left to right.
const STOP_ALPHAS: [f32; 5] = [0.2, 0.8, 1.0, 0.8, 0.2];

/// A color stop at a normalized offset within the gradient window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// The animated five-stop border gradient.
#[derive(Debug, Clone)]
pub struct SweepGradient {
    stops: [GradientStop; 5],
}

impl SweepGradient {
    /// Build the gradient for a border color
    pub fn of(border_color: Rgba) -> Self {
        let mut stops = [GradientStop {
            offset: 0.0,
            color: border_color,
        }; 5];
        for (i, alpha) in STOP_ALPHAS.iter().enumerate() {
            stops[i] = GradientStop {
                offset: i as f32 / (STOP_ALPHAS.len() - 1) as f32,
                color: border_color.with_alpha(*alpha),
            };
        }
        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop; 5] {
        &self.stops
    }

    /// Window x-offsets for a card of `width` units at sweep `progress`
    pub fn window(width: f32, progress: f32) -> (f32, f32) {
        (
            width * (progress - HALF_WINDOW),
            width * (progress + HALF_WINDOW),
        )
    }

    /// Sample the gradient at horizontal position `x` on a card of
    /// `width` units, at sweep `progress`.
    ///
    /// Positions outside the window clamp to the nearest edge stop, so
    /// the border never disappears entirely between sweeps.
    pub fn color_at(&self, x: f32, width: f32, progress: f32) -> Rgba {
        let (start, end) = Self::window(width, progress);
        let span = end - start;
        if span <= f32::EPSILON {
            return self.stops[self.stops.len() / 2].color;
        }

        let u = ((x - start) / span).clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if u <= hi.offset {
                let seg = hi.offset - lo.offset;
                let t = if seg <= f32::EPSILON {
                    0.0
                } else {
                    (u - lo.offset) / seg
                };
                return lo.color.lerp(hi.color, t);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}
