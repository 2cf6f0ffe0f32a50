// src/render/renderer.rs
// the renderer owns the bar group and its timer: taps start the timer, ticks
// advance the active node, and the first commit stops the timer again.

use nannou::prelude::*;
use std::time::Duration;
use tracing::{debug, info};

use crate::animation::{AnimationTimer, StepConfig};
use crate::config::{Config, ConfigError};
use crate::draw::{BarLayout, DrawStyle};
use crate::models::Traversal;
use crate::views::{BarGroup, GroupUpdate};

pub struct Renderer {
    timer: AnimationTimer,
    group: BarGroup,
    fore_color: Rgb,
    back_color: Rgb,
    stroke_factor: f32,
    size_factor: f32,
    rects: usize,
}

impl Renderer {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let anim = &config.animation;
        info!(
            nodes = anim.nodes,
            rects = anim.rects,
            tick_ms = anim.tick_ms,
            "building step bar renderer"
        );

        Ok(Self {
            timer: AnimationTimer::new(anim.tick_interval()),
            group: BarGroup::new(anim.nodes, StepConfig::from(anim)),
            fore_color: config.style.fore_rgb()?,
            back_color: config.style.back_rgb()?,
            stroke_factor: config.style.stroke_factor,
            size_factor: config.style.size_factor,
            rects: anim.rects,
        })
    }

    pub fn is_animating(&self) -> bool {
        self.timer.is_running()
    }

    pub fn group(&self) -> &BarGroup {
        &self.group
    }

    pub fn layout(&self, bounds: Rect) -> BarLayout {
        BarLayout {
            width: bounds.w(),
            height: bounds.h(),
            nodes: self.group.chain().len(),
            rects: self.rects,
            size_factor: self.size_factor,
        }
    }

    /// Starts the active node. Returns true when the timer was started and
    /// the host needs to begin redrawing.
    pub fn handle_tap(&mut self) -> bool {
        if !self.group.start_updating() {
            debug!(active = self.group.active(), "tap ignored, node already animating");
            return false;
        }
        self.timer.start()
    }

    /// Feeds frame time to the timer and runs every tick that is due.
    /// Returns the step event when a node committed during this frame.
    pub fn update(&mut self, dt: Duration) -> Option<GroupUpdate> {
        self.timer.advance(dt);
        while self.timer.take_tick() {
            match self.group.update() {
                GroupUpdate::Progressed { .. } => {}
                GroupUpdate::Idle => {
                    self.timer.stop();
                    return None;
                }
                stepped => {
                    self.timer.stop();
                    return Some(stepped);
                }
            }
        }
        None
    }

    pub fn render(&self, draw: &Draw, bounds: Rect) {
        draw.background().color(self.back_color);

        let layout = self.layout(bounds);
        let style = DrawStyle {
            color: self.fore_color,
            stroke_weight: layout.stroke_weight(self.stroke_factor),
        };
        self.group.draw(draw, &layout, &style);
    }

    pub fn debug_text(&self) -> String {
        let traversal = match self.group.traversal() {
            Traversal::Forward => "forward",
            Traversal::Backward => "backward",
        };
        let mut text = format!(
            "active: {}  traversal: {}  timer: {}",
            self.group.active(),
            traversal,
            if self.timer.is_running() { "on" } else { "off" }
        );
        for node in self.group.chain().iter() {
            text.push_str(&format!("\n{}: {:.2}", node.index, node.state.progress()));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_until_step(renderer: &mut Renderer) -> GroupUpdate {
        for _ in 0..100_000 {
            if let Some(update) = renderer.update(FRAME) {
                return update;
            }
            assert!(renderer.is_animating());
        }
        panic!("renderer never stepped");
    }

    #[test]
    fn test_idle_renderer_does_nothing() {
        let mut renderer = Renderer::new(&Config::default()).unwrap();
        assert!(!renderer.is_animating());
        assert_eq!(renderer.update(Duration::from_secs(5)), None);
        assert_eq!(renderer.group().active(), 0);
    }

    #[test]
    fn test_tap_runs_one_node_then_stops() {
        let mut renderer = Renderer::new(&Config::default()).unwrap();
        assert!(renderer.handle_tap());
        assert!(renderer.is_animating());

        let update = run_until_step(&mut renderer);
        assert!(matches!(
            update,
            GroupUpdate::Stepped {
                index: 0,
                active: 1,
                ..
            }
        ));
        assert!(!renderer.is_animating());
        assert_eq!(renderer.group().traversal(), Traversal::Forward);

        // no more progress without another tap
        assert_eq!(renderer.update(Duration::from_secs(1)), None);
        assert_eq!(
            renderer.group().chain().get(1).map(|n| n.state.progress()),
            Some(0.0)
        );

        assert!(renderer.handle_tap());
        let update = run_until_step(&mut renderer);
        assert!(matches!(
            update,
            GroupUpdate::Stepped {
                index: 1,
                active: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_tap_while_animating_is_ignored() {
        let mut renderer = Renderer::new(&Config::default()).unwrap();
        assert!(renderer.handle_tap());
        renderer.update(FRAME);
        assert!(!renderer.handle_tap());
        assert!(renderer.is_animating());
    }

    #[test]
    fn test_pacing_follows_tick_interval() {
        let mut config = Config::default();
        config.animation.tick_ms = 50;
        let mut renderer = Renderer::new(&config).unwrap();
        renderer.handle_tap();

        // the first tick fires immediately
        renderer.update(Duration::ZERO);
        let first = renderer.group().chain().get(0).map(|n| n.state.progress());
        assert!(first.is_some_and(|p| (p - 0.05).abs() < 1e-5));

        // 40ms later nothing more is due
        renderer.update(Duration::from_millis(40));
        let second = renderer.group().chain().get(0).map(|n| n.state.progress());
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.animation.nodes = 0;
        assert!(Renderer::new(&config).is_err());
    }

    #[test]
    fn test_layout_tracks_bounds() {
        let renderer = Renderer::new(&Config::default()).unwrap();
        let layout = renderer.layout(Rect::from_w_h(300.0, 600.0));
        assert_eq!(layout.width, 300.0);
        assert_eq!(layout.height, 600.0);
        assert_eq!(layout.nodes, 5);
        assert_eq!(layout.rects, 4);
    }

    #[test]
    fn test_debug_text_lists_every_node() {
        let renderer = Renderer::new(&Config::default()).unwrap();
        let text = renderer.debug_text();
        assert!(text.starts_with("active: 0  traversal: forward  timer: off"));
        assert_eq!(text.lines().count(), 6);
    }
}
