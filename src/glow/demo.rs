//! The demo screen composition
//!
//! Three glowing border cards stacked vertically on a black backdrop,
//! each full width and 120 units tall, spaced 16 units apart: a green,
//! a blue and a purple one with different glow radii.

use crate::glow::card::{Fill, GlowingBorderCard};
use crate::types::{Rgba, UnitRect};

/// Height of every demo card, in units.
pub const CARD_HEIGHT: f32 = 120.0;
/// Vertical gap between cards, in units.
pub const CARD_SPACING: f32 = 16.0;
/// Padding around the card stack, in units.
pub const SCREEN_PADDING: f32 = 16.0;
/// Demo screen backdrop.
pub const BACKDROP: Rgba = Rgba::rgb(0, 0, 0);
/// Placeholder background inside each card.
pub const CARD_FILL: Rgba = Rgba::hex(0x121212);

/// Border color and glow radius of each demo card, top to bottom.
const CARD_SPECS: [(u32, f32); 3] = [
    (0x00FF00, 8.0),  // green
    (0x00AAFF, 12.0), // blue
    (0xA020F0, 10.0), // purple
];

/// The application's sole screen: a static stack of three cards.
pub struct DemoGlowingBorders {
    cards: Vec<GlowingBorderCard>,
}

impl Default for DemoGlowingBorders {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGlowingBorders {
    pub fn new() -> Self {
        let cards = CARD_SPECS
            .iter()
            .map(|&(color, glow)| {
                GlowingBorderCard::new()
                    .with_border_color(Rgba::hex(color))
                    .with_glow_radius(glow)
                    .with_content(Fill(CARD_FILL))
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[GlowingBorderCard] {
        &self.cards
    }

    /// Unit-space bounds of each card within the given screen area:
    /// full available width, fixed height, stacked top to bottom.
    pub fn card_bounds(&self, screen: UnitRect) -> Vec<UnitRect> {
        let inner = screen.inset(SCREEN_PADDING);
        self.cards
            .iter()
            .enumerate()
            .map(|(i, _)| {
                UnitRect::new(
                    inner.x,
                    inner.y + i as f32 * (CARD_HEIGHT + CARD_SPACING),
                    inner.width,
                    CARD_HEIGHT,
                )
            })
            .collect()
    }

    /// Total height of the card stack including padding, in units
    pub fn stack_height(&self) -> f32 {
        let n = self.cards.len() as f32;
        2.0 * SCREEN_PADDING + n * CARD_HEIGHT + (n - 1.0).max(0.0) * CARD_SPACING
    }
}
