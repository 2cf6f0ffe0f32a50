// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;
use std::time::Duration;

use super::ConfigError;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 800,
            title: "stepbar".to_string(),
            fullscreen: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub fore_color: String,
    pub back_color: String,
    pub stroke_factor: f32,
    pub size_factor: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fore_color: "#311B92".to_string(),
            back_color: "#BDBDBD".to_string(),
            stroke_factor: 90.0,
            size_factor: 2.9,
        }
    }
}

impl StyleConfig {
    pub fn fore_rgb(&self) -> Result<Rgb, ConfigError> {
        parse_hex_color(&self.fore_color)
    }

    pub fn back_rgb(&self) -> Result<Rgb, ConfigError> {
        parse_hex_color(&self.back_color)
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub nodes: usize,         // Bars in the column
    pub rects: usize,         // Segments per bar
    pub step_gap: f32,        // Progress per tick is step_gap / rects
    pub scale_divisor: f32,   // Quantizer used by the mirrored increment
    pub tick_ms: u64,         // Time between animation ticks
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            nodes: 5,
            rects: 4,
            step_gap: 0.2,
            scale_divisor: 0.51,
            tick_ms: 50,
        }
    }
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

// Accepts "#RRGGBB" or "RRGGBB"
pub fn parse_hex_color(hex: &str) -> Result<Rgb, ConfigError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::Color(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ConfigError::Color(hex.to_string()))
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Ok(rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}
