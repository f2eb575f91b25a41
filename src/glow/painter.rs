//! Draw-operation recorder
//!
//! The card describes itself as an ordered list of draw operations in
//! unit space; the terminal rasterizer executes them afterwards. Keeping
//! the frame as plain data separates what a frame contains from how a
//! backend puts it on screen, and makes the draw order itself testable.

use crate::glow::gradient::SweepGradient;
use crate::types::{Rgba, UnitRect};

/// How a shape is colored.
#[derive(Debug, Clone)]
pub enum Paint {
    Solid(Rgba),
    /// The animated border gradient, sampled per x-position at the
    /// recorded sweep progress.
    Gradient {
        gradient: SweepGradient,
        progress: f32,
    },
}

/// One drawing step of a card frame.
#[derive(Debug, Clone)]
pub enum DrawOp {
    FillRoundRect {
        bounds: UnitRect,
        corner_radius: f32,
        color: Rgba,
    },
    StrokeRoundRect {
        bounds: UnitRect,
        corner_radius: f32,
        paint: Paint,
        stroke_width: f32,
        opacity: f32,
    },
    /// Placeholder for the child content slot; carries the clipped
    /// content bounds the child must stay within.
    Content {
        bounds: UnitRect,
        corner_radius: f32,
    },
}

/// Records draw operations in issue order.
#[derive(Debug, Default)]
pub struct Painter {
    ops: Vec<DrawOp>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_round_rect(&mut self, bounds: UnitRect, corner_radius: f32, color: Rgba) {
        self.ops.push(DrawOp::FillRoundRect {
            bounds,
            corner_radius,
            color,
        });
    }

    pub fn stroke_round_rect(
        &mut self,
        bounds: UnitRect,
        corner_radius: f32,
        paint: Paint,
        stroke_width: f32,
        opacity: f32,
    ) {
        self.ops.push(DrawOp::StrokeRoundRect {
            bounds,
            corner_radius,
            paint,
            stroke_width: stroke_width.max(0.0),
            opacity: opacity.clamp(0.0, 1.0),
        });
    }

    pub fn content(&mut self, bounds: UnitRect, corner_radius: f32) {
        self.ops.push(DrawOp::Content {
            bounds,
            corner_radius,
        });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}
