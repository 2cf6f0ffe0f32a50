// src/draw/step_bar_draw.rs
//
// Geometry is computed in screen space (origin top-left, y down) and only
// converted to nannou space (origin at centre, y up) when drawing.

use nannou::prelude::*;

use super::DrawStyle;
use crate::utilities::{divide_scale, inverse};

/// Everything about the window and the column needed to place bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub width: f32,
    pub height: f32,
    pub nodes: usize,
    pub rects: usize,
    pub size_factor: f32,
}

impl BarLayout {
    // vertical distance between node centres
    pub fn gap(&self) -> f32 {
        self.height / (self.nodes + 1) as f32
    }

    pub fn size(&self) -> f32 {
        self.gap() / self.size_factor
    }

    // horizontal slide of a fully filled segment
    pub fn bar_step(&self) -> f32 {
        2.0 * self.size() * inverse(self.rects + 1)
    }

    pub fn stroke_weight(&self, stroke_factor: f32) -> f32 {
        self.width.min(self.height) / stroke_factor
    }

    pub fn node_origin(&self, index: usize) -> Point2 {
        let size = self.size();
        pt2(
            self.width / 2.0 - size,
            self.gap() * (index + 1) as f32 - size,
        )
    }

    pub fn to_nannou(&self, p: Point2) -> Point2 {
        pt2(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }
}

/// Axis aligned rectangle in screen space, top <= bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BarRect {
    fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point2 {
        pt2(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// The `rects` bars of node `index` at the given progress. Each segment
/// first slides right by up to one bar step, then grows upward by one size.
pub fn node_bar_rects(layout: &BarLayout, index: usize, progress: f32) -> Vec<BarRect> {
    let size = layout.size();
    let bar_step = layout.bar_step();
    let origin = layout.node_origin(index);

    let mut x = 0.0;
    let mut bars = Vec::with_capacity(layout.rects);
    for j in 0..layout.rects {
        let sc = divide_scale(progress, j, layout.rects);
        x += bar_step * divide_scale(sc, 0, 2);
        let rise = j as f32 * size + size * divide_scale(sc, 1, 2);

        let base = pt2(origin.x + x, origin.y);
        let tip = pt2(origin.x + x + size, origin.y - rise);
        bars.push(BarRect::from_corners(base, tip));
    }
    bars
}

pub fn draw_node(draw: &Draw, layout: &BarLayout, style: &DrawStyle, index: usize, progress: f32) {
    for bar in node_bar_rects(layout, index, progress) {
        let center = layout.to_nannou(bar.center());
        draw.rect()
            .xy(center)
            .w_h(bar.width(), bar.height())
            .no_fill()
            .stroke(style.color)
            .stroke_weight(style.stroke_weight)
            .caps_round();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn test_layout() -> BarLayout {
        BarLayout {
            width: 400.0,
            height: 600.0,
            nodes: 5,
            rects: 4,
            size_factor: 2.0,
        }
    }

    fn assert_close(actual: f32, expected: f32, what: &str) {
        assert!(
            (actual - expected).abs() < EPS,
            "{}: expected {}, got {}",
            what,
            expected,
            actual
        );
    }

    #[test]
    fn test_layout_metrics() {
        let layout = test_layout();
        assert_close(layout.gap(), 100.0, "gap");
        assert_close(layout.size(), 50.0, "size");
        assert_close(layout.bar_step(), 20.0, "bar step");
        assert_close(layout.stroke_weight(80.0), 5.0, "stroke");

        let origin = layout.node_origin(2);
        assert_close(origin.x, 150.0, "origin x");
        assert_close(origin.y, 250.0, "origin y");
    }

    #[test]
    fn test_idle_node_is_a_stack_at_origin() {
        let layout = test_layout();
        let bars = node_bar_rects(&layout, 0, 0.0);
        assert_eq!(bars.len(), 4);
        for (j, bar) in bars.iter().enumerate() {
            assert_close(bar.left, 150.0, "left");
            assert_close(bar.width(), 50.0, "width");
            assert_close(bar.bottom, 50.0, "bottom");
            assert_close(bar.height(), j as f32 * 50.0, "height");
        }
    }

    #[test]
    fn test_full_node_is_a_staircase() {
        let layout = test_layout();
        let bars = node_bar_rects(&layout, 0, 1.0);
        for (j, bar) in bars.iter().enumerate() {
            assert_close(bar.left, 150.0 + 20.0 * (j + 1) as f32, "left");
            assert_close(bar.height(), (j + 1) as f32 * 50.0, "height");
            assert_close(bar.bottom, 50.0, "bottom");
        }
    }

    #[test]
    fn test_partial_progress_moves_first_segment_only() {
        let layout = test_layout();
        // a quarter of the first segment: it has slid half way, not grown yet
        let bars = node_bar_rects(&layout, 1, 0.0625);
        assert_close(bars[0].left, 150.0 + 10.0, "first left");
        assert_close(bars[0].height(), 0.0, "first height");
        for bar in &bars[1..] {
            assert_close(bar.left, 160.0, "followers share the offset");
        }
        assert_close(bars[1].height(), 50.0, "second height");
    }

    #[test]
    fn test_to_nannou_flips_y_around_centre() {
        let layout = test_layout();
        let p = layout.to_nannou(pt2(0.0, 0.0));
        assert_close(p.x, -200.0, "x");
        assert_close(p.y, 300.0, "y");
        let c = layout.to_nannou(pt2(200.0, 300.0));
        assert_close(c.x, 0.0, "centre x");
        assert_close(c.y, 0.0, "centre y");
    }
}
