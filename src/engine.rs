//! Pattern engine - the time-stepping core.
//!
//! The engine owns the tick counter, the active pattern selection, the
//! optional oscillating-rate modifier and the frame buffer. Each `tick()`
//! advances time and recomputes every light's HSV value from the active
//! pattern's generators; mirrored spine pairs are computed once and written
//! to both physical indices.
//!
//! The engine performs no I/O, never sleeps and never allocates after
//! construction. One instance per fixture or preview session; instances
//! share no state.

use libm::{roundf, sinf};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Hsv;
use crate::layout::{InvalidLayout, Layout};
use crate::pattern::{Pattern, PatternRegistry, UnknownPattern};

const OFF: Hsv = Hsv {
    hue: 0,
    sat: 0,
    val: 0,
};

/// Error returned when enabling the oscillating rate with a non-positive
/// period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPeriod;

/// Error returned when a caller-supplied buffer does not hold exactly
/// three bytes per light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Engine construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    Layout(InvalidLayout),
    Pattern(UnknownPattern),
}

impl From<InvalidLayout> for EngineError {
    fn from(error: InvalidLayout) -> Self {
        Self::Layout(error)
    }
}

impl From<UnknownPattern> for EngineError {
    fn from(error: UnknownPattern) -> Self {
        Self::Pattern(error)
    }
}

/// Sinusoidal time-dilation parameters.
#[derive(Debug, Clone, Copy)]
struct OscillatingRate {
    amplitude: f32,
    period: f32,
}

/// Pattern engine over a star layout.
///
/// `MAX_LEDS` is the compile-time frame buffer capacity; the layout's total
/// light count must fit within it.
pub struct Engine<'a, const MAX_LEDS: usize> {
    // Shared read-only configuration
    registry: &'a PatternRegistry,
    layout: Layout,

    // Internal state
    active: usize,
    tick: u32,
    oscillation: Option<OscillatingRate>,
    frame: [Hsv; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize> Engine<'a, MAX_LEDS> {
    /// Create an engine rendering `pattern` over `layout`.
    ///
    /// The frame buffer holds the pattern evaluated at tick 0 until the
    /// first `tick()`.
    pub fn new(
        layout: Layout,
        registry: &'a PatternRegistry,
        pattern: &str,
    ) -> Result<Self, EngineError> {
        let total = usize::from(layout.total_lights());
        if total > MAX_LEDS {
            return Err(InvalidLayout::CapacityExceeded {
                total: layout.total_lights(),
                capacity: MAX_LEDS,
            }
            .into());
        }
        let active = registry.index_of(pattern)?;

        let mut engine = Self {
            registry,
            layout,
            active,
            tick: 0,
            oscillation: None,
            frame: [OFF; MAX_LEDS],
        };
        engine.render();
        Ok(engine)
    }

    /// Advance time by one effective step and recompute the frame buffer.
    ///
    /// With oscillation disabled the step is 1. With oscillation enabled the
    /// step is `round(1 + amplitude * sin(2π * tick / period))`, clamped at
    /// 0 so time never runs backward. The counter wraps on overflow.
    pub fn tick(&mut self) {
        let step = self.effective_step();
        self.tick = self.tick.wrapping_add(step);
        self.render();
    }

    /// Switch the active pattern without resetting the tick counter.
    ///
    /// On failure the previous pattern stays active.
    pub fn set_pattern(&mut self, name: &str) -> Result<(), UnknownPattern> {
        self.active = self.registry.index_of(name)?;
        #[cfg(feature = "esp32-log")]
        println!("engine: pattern -> {}", name);
        Ok(())
    }

    /// Enable the sinusoidal time-dilation modifier.
    ///
    /// Replaces any previously enabled parameters.
    pub fn enable_oscillating_rate(
        &mut self,
        amplitude: f32,
        period: f32,
    ) -> Result<(), InvalidPeriod> {
        if !period.is_finite() || period <= 0.0 {
            return Err(InvalidPeriod);
        }
        self.oscillation = Some(OscillatingRate { amplitude, period });
        #[cfg(feature = "esp32-log")]
        println!("engine: oscillating rate on ({}, {})", amplitude, period);
        Ok(())
    }

    /// Revert to unit time steps. Idempotent.
    pub fn disable_oscillating_rate(&mut self) {
        self.oscillation = None;
    }

    /// Copy the current frame into `buffer`, three bytes (h, s, v) per
    /// light in light-index order.
    ///
    /// The buffer length must equal `total_lights() * 3` exactly; on
    /// failure it is left untouched.
    pub fn read_leds_into(&self, buffer: &mut [u8]) -> Result<(), BufferSizeMismatch> {
        let expected = usize::from(self.layout.total_lights()) * 3;
        if buffer.len() != expected {
            return Err(BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        for (bytes, hsv) in buffer.chunks_exact_mut(3).zip(self.leds()) {
            bytes[0] = hsv.hue;
            bytes[1] = hsv.sat;
            bytes[2] = hsv.val;
        }
        Ok(())
    }

    /// Borrowed view of the current frame, one HSV value per light.
    pub fn leds(&self) -> &[Hsv] {
        &self.frame[..usize::from(self.layout.total_lights())]
    }

    /// Name of the active pattern.
    pub fn active_pattern(&self) -> &'static str {
        self.registry.pattern_at(self.active).name
    }

    /// Registered pattern names in stable order.
    pub fn list_patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.list_patterns()
    }

    /// The underlying geometry, for rich queries (role resolution, mirror
    /// pairs).
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Total number of lights.
    pub fn total_lights(&self) -> u16 {
        self.layout.total_lights()
    }

    /// Number of spines.
    pub fn spine_count(&self) -> u8 {
        self.layout.spine_count()
    }

    /// Outward run length of a spine.
    pub fn spine_len(&self, spine: u8) -> u16 {
        self.layout.spine_len(spine)
    }

    /// Tip length of a spine.
    pub fn tip_len(&self, spine: u8) -> u16 {
        self.layout.tip_len(spine)
    }

    /// Arc length following a spine.
    pub fn arc_len(&self, spine: u8) -> u16 {
        self.layout.arc_len(spine)
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn effective_step(&self) -> u32 {
        let Some(rate) = self.oscillation else {
            return 1;
        };
        #[allow(clippy::cast_precision_loss)]
        let phase = self.tick as f32 / rate.period * core::f32::consts::TAU;
        let step = roundf(1.0 + rate.amplitude * sinf(phase));
        if step <= 0.0 { 0 } else { step as u32 }
    }

    /// Recompute every light from the active pattern.
    fn render(&mut self) {
        let pattern = self.registry.pattern_at(self.active);
        let spine_count = self.layout.spine_count();
        let tick = self.tick;

        for spine in 0..spine_count {
            let half = usize::from(self.layout.spine_len(spine));
            let tip = usize::from(self.layout.tip_len(spine));
            let arc = usize::from(self.layout.arc_len(spine));
            let base = usize::from(self.layout.base_of(spine));

            for position in 0..half {
                let color = shade(pattern, tick, spine_count, spine, position);
                self.frame[base + position] = color;
                // Mirror partner on the return run carries the same color.
                self.frame[base + half + tip + (half - 1 - position)] = color;
            }
            for position in 0..tip {
                // Tips continue the spine's outward position axis.
                self.frame[base + half + position] =
                    shade(pattern, tick, spine_count, spine, half + position);
            }
            for position in 0..arc {
                self.frame[base + half * 2 + tip + position] =
                    shade(pattern, tick, spine_count, spine, position);
            }
        }
    }
}

/// Evaluate a pattern's three generators for one light.
#[allow(clippy::cast_possible_truncation)]
fn shade(pattern: &Pattern, tick: u32, spine_count: u8, spine: u8, position: usize) -> Hsv {
    let position = position as u16;
    Hsv {
        hue: pattern
            .hue
            .sample(tick, spine, position, spine_count, &pattern.params),
        sat: pattern
            .saturation
            .sample(tick, spine, position, spine_count, &pattern.params),
        val: pattern
            .lightness
            .sample(tick, spine, position, spine_count, &pattern.params),
    }
}
