//! Component generator functions.
//!
//! Generators are pure functions of (tick, spine, position) producing one
//! 8-bit channel value. They hold no state; a frame is fully reproducible
//! from the tick counter and the geometry.
//!
//! All periodic quantities use fixed-width wrapping integer arithmetic. The
//! streak formula uses the truncated (round-toward-zero) remainder: a
//! negative remainder falls outside the bright band and renders dark.

/// Tunable constants for the generator functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    /// Ticks per hue step of the rotation.
    pub rotate_period: u32,
    /// Width of the bright streak band, in lights.
    pub streak_length: u32,
    /// Ticks between streak re-triggers.
    pub streak_cycle: u32,
    /// Per-spine streak phase offset, in ticks.
    pub streak_offset: u32,
    /// Ticks per triangle-wave step.
    pub triangle_period: u32,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            rotate_period: 8,
            streak_length: 10,
            streak_cycle: 20,
            streak_offset: 7,
            triangle_period: 2,
        }
    }
}

/// A single channel generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Per-spine hue rotation around the color wheel.
    Rotate,
    /// Bright band traveling outward along each spine.
    Streak,
    /// Global triangle wave, identical for every light.
    Triangle,
    /// Fixed channel level.
    Constant(u8),
}

impl Generator {
    /// Sample the generator for one light.
    pub fn sample(
        self,
        tick: u32,
        spine: u8,
        position: u16,
        spine_count: u8,
        params: &GeneratorParams,
    ) -> u8 {
        match self {
            Self::Rotate => rotate(tick, spine, spine_count, params),
            Self::Streak => streak(tick, spine, position, params),
            Self::Triangle => triangle(tick, params),
            Self::Constant(value) => value,
        }
    }
}

/// Uniform hue rotation with a per-spine offset.
///
/// Every spine starts at a hue proportional to its index and all spines
/// rotate together; one full revolution takes
/// `rotate_period * spine_count` ticks.
#[allow(clippy::cast_possible_truncation)]
pub fn rotate(tick: u32, spine: u8, spine_count: u8, params: &GeneratorParams) -> u8 {
    let period = params.rotate_period.max(1);
    let step = u64::from(tick / period) + u64::from(spine);
    ((step * 255 / u64::from(spine_count.max(1))) % 255) as u8
}

/// Bright band of `streak_length` lights traveling outward along a spine.
///
/// Re-triggers every `streak_cycle` ticks; each spine is phase-shifted by
/// `spine * streak_offset` ticks. Lights outside the band are dark.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn streak(tick: u32, spine: u8, position: u16, params: &GeneratorParams) -> u8 {
    let cycle = i64::from(params.streak_cycle.max(1));
    let length = i64::from(params.streak_length.max(1));

    // Only the tick's phase within the cycle matters; reducing it first
    // keeps the re-trigger period exact while the counter grows.
    let phase = i64::from(tick) % cycle;
    let offset = i64::from(position) - phase - 1
        + i64::from(spine) * i64::from(params.streak_offset);

    // Truncated remainder: negative offsets stay negative and land below
    // the band threshold.
    let band = offset % cycle + 1 - length;
    if band <= 0 {
        return 0;
    }
    (band as u64 * 255 / length as u64).min(255) as u8
}

/// Global triangle wave between 0 and 255.
///
/// One full period takes `triangle_period * 255` ticks; independent of
/// spine and position.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn triangle(tick: u32, params: &GeneratorParams) -> u8 {
    let period = params.triangle_period.max(1);
    let value = ((tick / period) % 255) as i32 * 2 - 255;
    value.unsigned_abs() as u8
}
