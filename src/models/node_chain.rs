// src/models/node_chain.rs
//
// The fixed column of step nodes. Nodes live in a Vec and neighbours are
// found by index, so "next" is index + 1 and "previous" is index - 1.

use crate::animation::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }
}

// Result of asking a node for its neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStep {
    Moved(usize),
    // no neighbour that way: stay on this index
    Boundary(usize),
}

impl ChainStep {
    pub fn index(self) -> usize {
        match self {
            ChainStep::Moved(i) | ChainStep::Boundary(i) => i,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StepNode {
    pub index: usize,
    pub state: StepState,
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<StepNode>,
}

impl NodeChain {
    /// Builds a chain of `count` idle nodes. A chain always has at least one node.
    pub fn new(count: usize) -> Self {
        let nodes = (0..count.max(1))
            .map(|index| StepNode {
                index,
                state: StepState::new(),
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepNode> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StepNode> {
        self.nodes.get_mut(index)
    }

    pub fn next(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.nodes.len()).then_some(next)
    }

    pub fn prev(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&i| i < self.nodes.len())
    }

    pub fn get_next(&self, index: usize, traversal: Traversal) -> ChainStep {
        let neighbour = match traversal {
            Traversal::Forward => self.next(index),
            Traversal::Backward => self.prev(index),
        };
        match neighbour {
            Some(i) => ChainStep::Moved(i),
            None => ChainStep::Boundary(index),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepNode> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_indices_are_sequential() {
        let chain = NodeChain::new(5);
        assert_eq!(chain.len(), 5);
        for (expected, node) in chain.iter().enumerate() {
            assert_eq!(node.index, expected);
            assert!(!node.state.is_animating());
        }
    }

    #[test]
    fn test_ends_have_no_outer_neighbour() {
        let chain = NodeChain::new(5);
        assert_eq!(chain.prev(0), None);
        assert_eq!(chain.next(4), None);
        assert_eq!(chain.next(0), Some(1));
        assert_eq!(chain.prev(4), Some(3));
    }

    #[test]
    fn test_get_next() {
        let chain = NodeChain::new(5);
        let tests = vec![
            // (index, traversal, expected)
            (0, Traversal::Forward, ChainStep::Moved(1)),
            (2, Traversal::Forward, ChainStep::Moved(3)),
            (2, Traversal::Backward, ChainStep::Moved(1)),
            (4, Traversal::Backward, ChainStep::Moved(3)),
            (4, Traversal::Forward, ChainStep::Boundary(4)),
            (0, Traversal::Backward, ChainStep::Boundary(0)),
        ];
        for (index, traversal, expected) in tests {
            assert_eq!(
                chain.get_next(index, traversal),
                expected,
                "Failed for index:{}, traversal:{:?}",
                index,
                traversal
            );
        }
    }

    #[test]
    fn test_single_node_chain_is_boundary_both_ways() {
        let chain = NodeChain::new(1);
        assert_eq!(chain.get_next(0, Traversal::Forward), ChainStep::Boundary(0));
        assert_eq!(chain.get_next(0, Traversal::Backward), ChainStep::Boundary(0));
    }

    #[test]
    fn test_zero_count_still_builds_one_node() {
        let chain = NodeChain::new(0);
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_traversal_flip() {
        assert_eq!(Traversal::Forward.flipped(), Traversal::Backward);
        assert_eq!(Traversal::Backward.flipped(), Traversal::Forward);
    }
}
