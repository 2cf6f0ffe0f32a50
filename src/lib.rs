// src/lib.rs
//
// stepbar: a column of step bars that fill one node at a time when tapped,
// sweeping back and forth across the column.

pub mod animation;
pub mod config;
pub mod draw;
pub mod models;
pub mod render;
pub mod utilities;
pub mod views;
