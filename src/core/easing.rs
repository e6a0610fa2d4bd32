//! Easing and interpolation helpers shared by every effect.

/// Standard cubic ease-in-out on \[0, 1\]. Inputs outside the range are
/// clamped first.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One step of a frame-rate dependent exponential follow: moves `current`
/// by `rate` of the remaining gap.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}
