// src/draw/mod.rs
// Step bar geometry and the nannou draw calls that emit it

pub mod step_bar_draw;

pub use step_bar_draw::{draw_node, node_bar_rects, BarLayout, BarRect};

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}
