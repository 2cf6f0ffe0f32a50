// src/views/bar_group.rs
//
// The column of step bars. One node animates at a time; when it commits the
// active cursor moves to its neighbour, reversing at either end of the chain.

use nannou::prelude::*;
use tracing::debug;

use crate::animation::{StepConfig, StepUpdate};
use crate::draw::{draw_node, BarLayout, DrawStyle};
use crate::models::{ChainStep, NodeChain, Traversal};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupUpdate {
    Idle,
    Progressed { index: usize, progress: f32 },
    // node `index` committed at `value`; `active` is the new cursor
    Stepped {
        index: usize,
        value: f32,
        active: usize,
        reversed: bool,
    },
}

#[derive(Debug, Clone)]
pub struct BarGroup {
    chain: NodeChain,
    active: usize,
    traversal: Traversal,
    step_config: StepConfig,
}

impl BarGroup {
    pub fn new(nodes: usize, step_config: StepConfig) -> Self {
        Self {
            chain: NodeChain::new(nodes),
            active: 0,
            traversal: Traversal::Forward,
            step_config,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.chain
            .get(self.active)
            .is_some_and(|node| node.state.is_animating())
    }

    pub fn start_updating(&mut self) -> bool {
        match self.chain.get_mut(self.active) {
            Some(node) => node.state.start_updating(),
            None => false,
        }
    }

    pub fn update(&mut self) -> GroupUpdate {
        let index = self.active;
        let Some(node) = self.chain.get_mut(index) else {
            return GroupUpdate::Idle;
        };

        match node.state.update(&self.step_config) {
            StepUpdate::Idle => GroupUpdate::Idle,
            StepUpdate::Progressed(progress) => GroupUpdate::Progressed { index, progress },
            StepUpdate::Committed(value) => {
                let step = self.chain.get_next(index, self.traversal);
                let reversed = matches!(step, ChainStep::Boundary(_));
                if reversed {
                    self.traversal = self.traversal.flipped();
                    debug!(index, traversal = ?self.traversal, "reached end of chain, reversing");
                }
                self.active = step.index();
                debug!(index, value, active = self.active, "node committed");
                GroupUpdate::Stepped {
                    index,
                    value,
                    active: self.active,
                    reversed,
                }
            }
        }
    }

    pub fn draw(&self, draw: &Draw, layout: &BarLayout, style: &DrawStyle) {
        for node in self.chain.iter() {
            draw_node(draw, layout, style, node.index, node.state.progress());
        }
    }
}
