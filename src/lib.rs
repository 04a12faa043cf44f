#![no_std]

pub mod color;
pub mod engine;
pub mod frame_scheduler;
pub mod generator;
pub mod layout;
pub mod pattern;

pub use color::{Hsv, Rgb};
pub use engine::{BufferSizeMismatch, Engine, EngineError, InvalidPeriod};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use generator::{Generator, GeneratorParams};
pub use layout::{InvalidLayout, Layout, LayoutConfig, LightRole, SpineConfig};
pub use pattern::{Pattern, PatternRegistry, UnknownPattern};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
