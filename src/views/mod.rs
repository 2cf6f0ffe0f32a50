// src/views/mod.rs

pub mod bar_group;

pub use bar_group::{BarGroup, GroupUpdate};
