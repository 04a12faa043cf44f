//! Pattern registry with compile-time known bindings.
//!
//! A pattern binds one generator to each HSV channel plus the constants the
//! generators read. The registry is a fixed, stable-ordered list built at
//! startup; patterns are never created at runtime.

use heapless::Vec;

use crate::generator::{Generator, GeneratorParams};

const PATTERN_NAME_CLASSIC: &str = "classic";
const PATTERN_NAME_COMET: &str = "comet";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_PULSE: &str = "pulse";

/// Maximum number of patterns a registry can hold.
pub const MAX_PATTERNS: usize = 16;

/// A named binding of three channel generators plus their constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub hue: Generator,
    pub saturation: Generator,
    pub lightness: Generator,
    pub params: GeneratorParams,
}

/// Error returned when a pattern name is not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownPattern;

/// Named, stable-ordered set of patterns; fixed after construction.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<Pattern, MAX_PATTERNS>,
}

impl PatternRegistry {
    /// Registry of the built-in patterns.
    ///
    /// `classic` binds rotating hue, triangle saturation and streak
    /// lightness; the other entries pin individual channels.
    pub fn builtin() -> Self {
        let defaults = GeneratorParams::default();
        let builtins = [
            Pattern {
                name: PATTERN_NAME_CLASSIC,
                hue: Generator::Rotate,
                saturation: Generator::Triangle,
                lightness: Generator::Streak,
                params: defaults,
            },
            Pattern {
                name: PATTERN_NAME_COMET,
                hue: Generator::Rotate,
                saturation: Generator::Constant(255),
                lightness: Generator::Streak,
                params: defaults,
            },
            Pattern {
                name: PATTERN_NAME_RAINBOW,
                hue: Generator::Rotate,
                saturation: Generator::Constant(255),
                lightness: Generator::Constant(255),
                params: defaults,
            },
            Pattern {
                name: PATTERN_NAME_PULSE,
                hue: Generator::Constant(160),
                saturation: Generator::Constant(255),
                lightness: Generator::Triangle,
                params: defaults,
            },
        ];
        let mut patterns = Vec::new();
        for pattern in builtins {
            // Cannot fail: the built-in list is shorter than MAX_PATTERNS.
            let _ = patterns.push(pattern);
        }
        Self { patterns }
    }

    /// Build a registry from a caller-supplied list.
    ///
    /// Returns `None` when the list is empty or exceeds [`MAX_PATTERNS`].
    pub fn from_patterns(patterns: &[Pattern]) -> Option<Self> {
        if patterns.is_empty() {
            return None;
        }
        let patterns = Vec::from_slice(patterns).ok()?;
        Some(Self { patterns })
    }

    /// Registered names in registration order; stable across calls.
    pub fn list_patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|pattern| pattern.name)
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Result<&Pattern, UnknownPattern> {
        self.patterns
            .iter()
            .find(|pattern| pattern.name == name)
            .ok_or(UnknownPattern)
    }

    pub(crate) fn index_of(&self, name: &str) -> Result<usize, UnknownPattern> {
        self.patterns
            .iter()
            .position(|pattern| pattern.name == name)
            .ok_or(UnknownPattern)
    }

    pub(crate) fn pattern_at(&self, index: usize) -> &Pattern {
        &self.patterns[index]
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
