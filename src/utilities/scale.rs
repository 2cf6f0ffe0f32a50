// src/utilities/scale.rs
//
// Scale helpers that turn one node's progress into per-segment fill fractions.
// A single progress value sweeps across n segments: segment i only starts
// filling once segments 0..i are full.

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Quantizes a continuous value into a step index.
pub fn scale_factor(value: f32, divisor: f32) -> f32 {
    (value / divisor).floor()
}

/// Whatever is left of `value` once the first `i` of `n` shares are used up.
pub fn max_scale(value: f32, i: usize, n: usize) -> f32 {
    (value - i as f32 * inverse(n)).max(0.0)
}

/// Fill fraction of segment `i` of `n`, local to that segment.
pub fn divide_scale(value: f32, i: usize, n: usize) -> f32 {
    (inverse(n).min(max_scale(value, i, n)) * n as f32).clamp(0.0, 1.0)
}

pub fn mirror_value(value: f32, a: usize, b: usize, divisor: f32) -> f32 {
    let k = scale_factor(value, divisor);
    (1.0 - k) * inverse(a) + k * inverse(b)
}

/// Signed progress increment for one tick.
pub fn update_value(value: f32, dir: f32, a: usize, b: usize, divisor: f32, gap: f32) -> f32 {
    mirror_value(value, a, b, divisor) * dir * gap
}
