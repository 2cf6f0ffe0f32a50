pub mod node_chain;

pub use node_chain::{ChainStep, NodeChain, StepNode, Traversal};
