//! Star geometry model.
//!
//! A star is a ring of spines radiating from a center. Each spine carries an
//! outward run of lights, an optional tip, a mirrored return run, and an
//! optional arc connecting it to the next spine. The physical strip order is:
//! spine 0 out, spine 0 tip, spine 0 back, arc 0, spine 1 out, ...
//!
//! The layout is validated once at construction and never mutated; all
//! queries are pure.

use heapless::Vec;

/// Maximum number of spines a layout can describe.
pub const MAX_SPINES: usize = 32;

/// Segment lengths of a single spine.
///
/// `half_len` is the length of the outward run before mirroring; the return
/// run has the same length. `tip_len` and `arc_len` may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpineConfig {
    pub half_len: u16,
    pub tip_len: u16,
    pub arc_len: u16,
}

/// Geometry configuration prior to validation.
///
/// `total_lights` is the declared strip length; construction fails when it
/// does not match the sum of the per-spine segments.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    pub spines: Vec<SpineConfig, MAX_SPINES>,
    pub total_lights: u16,
}

impl LayoutConfig {
    /// Uniform geometry: every spine shares the same segment lengths.
    ///
    /// This mirrors the fixed hardware configuration; the total is derived.
    /// Returns `None` when `spine_count` exceeds [`MAX_SPINES`].
    pub fn uniform(spine_count: u8, half_len: u16, tip_len: u16, arc_len: u16) -> Option<Self> {
        if usize::from(spine_count) > MAX_SPINES {
            return None;
        }
        let mut spines = Vec::new();
        for _ in 0..spine_count {
            let _ = spines.push(SpineConfig {
                half_len,
                tip_len,
                arc_len,
            });
        }
        let per_spine = u32::from(half_len) * 2 + u32::from(tip_len) + u32::from(arc_len);
        let total = per_spine * u32::from(spine_count);
        u16::try_from(total).ok().map(|total_lights| Self {
            spines,
            total_lights,
        })
    }
}

/// Error raised at construction when the geometry is inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidLayout {
    /// Layout describes no spines.
    NoSpines,
    /// A spine's outward run is empty.
    ZeroHalfLength { spine: u8 },
    /// A spine's outward run has odd length; mirroring requires even.
    OddHalfLength { spine: u8, half_len: u16 },
    /// Declared total does not match the sum of the segments.
    TotalMismatch { declared: u16, computed: u32 },
    /// Total exceeds the engine's compile-time light capacity.
    CapacityExceeded { total: u16, capacity: usize },
}

/// Role of a single light within the star.
///
/// `position` counts from the spine root outward for spine runs, from the
/// innermost tip light for tips, and along the arc for arcs. A `SpineBack`
/// light reports the logical outward position it mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightRole {
    SpineOut { spine: u8, position: u16 },
    Tip { spine: u8, position: u16 },
    SpineBack { spine: u8, position: u16 },
    Arc { spine: u8, position: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spine {
    base: u16,
    half_len: u16,
    tip_len: u16,
    arc_len: u16,
}

impl Spine {
    const fn span(&self) -> u16 {
        self.half_len * 2 + self.tip_len + self.arc_len
    }
}

/// Validated, immutable star geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    spines: Vec<Spine, MAX_SPINES>,
    total_lights: u16,
}

impl Layout {
    /// Validate a configuration into a layout.
    pub fn new(config: &LayoutConfig) -> Result<Self, InvalidLayout> {
        if config.spines.is_empty() {
            return Err(InvalidLayout::NoSpines);
        }

        let mut spines: Vec<Spine, MAX_SPINES> = Vec::new();
        let mut base: u32 = 0;
        for (index, spine) in config.spines.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let spine_index = index as u8;
            if spine.half_len == 0 {
                return Err(InvalidLayout::ZeroHalfLength { spine: spine_index });
            }
            if !spine.half_len.is_multiple_of(2) {
                return Err(InvalidLayout::OddHalfLength {
                    spine: spine_index,
                    half_len: spine.half_len,
                });
            }
            let Ok(base16) = u16::try_from(base) else {
                break;
            };
            // Cannot overflow: same capacity as the config vec.
            let _ = spines.push(Spine {
                base: base16,
                half_len: spine.half_len,
                tip_len: spine.tip_len,
                arc_len: spine.arc_len,
            });
            base += u32::from(spine.half_len) * 2
                + u32::from(spine.tip_len)
                + u32::from(spine.arc_len);
        }

        if spines.len() != config.spines.len() || base != u32::from(config.total_lights) {
            return Err(InvalidLayout::TotalMismatch {
                declared: config.total_lights,
                computed: base,
            });
        }

        Ok(Self {
            spines,
            total_lights: config.total_lights,
        })
    }

    /// Total number of lights across all segments.
    pub const fn total_lights(&self) -> u16 {
        self.total_lights
    }

    /// Number of spines.
    #[allow(clippy::cast_possible_truncation)]
    pub fn spine_count(&self) -> u8 {
        self.spines.len() as u8
    }

    /// Outward run length of a spine (before mirroring).
    ///
    /// Panics if `spine` is out of range.
    pub fn spine_len(&self, spine: u8) -> u16 {
        self.spines[usize::from(spine)].half_len
    }

    /// Tip length of a spine.
    ///
    /// Panics if `spine` is out of range.
    pub fn tip_len(&self, spine: u8) -> u16 {
        self.spines[usize::from(spine)].tip_len
    }

    /// Arc length following a spine.
    ///
    /// Panics if `spine` is out of range.
    pub fn arc_len(&self, spine: u8) -> u16 {
        self.spines[usize::from(spine)].arc_len
    }

    /// Linear index of a spine's first light.
    pub(crate) fn base_of(&self, spine: u8) -> u16 {
        self.spines[usize::from(spine)].base
    }

    /// Resolve a linear light index to its geometric role.
    ///
    /// Returns `None` for indices past the end of the strip.
    pub fn resolve(&self, index: u16) -> Option<LightRole> {
        let (spine_index, spine) = self.spine_at(index)?;
        let local = index - spine.base;

        let out_end = spine.half_len;
        let tip_end = out_end + spine.tip_len;
        let back_end = tip_end + spine.half_len;

        let role = if local < out_end {
            LightRole::SpineOut {
                spine: spine_index,
                position: local,
            }
        } else if local < tip_end {
            LightRole::Tip {
                spine: spine_index,
                position: local - out_end,
            }
        } else if local < back_end {
            // Mirror: the last back light sits at the spine root.
            LightRole::SpineBack {
                spine: spine_index,
                position: spine.half_len - 1 - (local - tip_end),
            }
        } else {
            LightRole::Arc {
                spine: spine_index,
                position: local - back_end,
            }
        };
        Some(role)
    }

    /// Mirror partner of a spine light.
    ///
    /// Returns `None` for tips, arcs and out-of-range indices; those lights
    /// have no partner.
    pub fn mirror_of(&self, index: u16) -> Option<u16> {
        let (_, spine) = self.spine_at(index)?;
        match self.resolve(index)? {
            LightRole::SpineOut { position, .. } => {
                Some(spine.base + spine.half_len + spine.tip_len + (spine.half_len - 1 - position))
            }
            LightRole::SpineBack { position, .. } => Some(spine.base + position),
            LightRole::Tip { .. } | LightRole::Arc { .. } => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn spine_at(&self, index: u16) -> Option<(u8, &Spine)> {
        if index >= self.total_lights {
            return None;
        }
        self.spines
            .iter()
            .enumerate()
            .find(|(_, spine)| index < spine.base + spine.span())
            .map(|(i, spine)| (i as u8, spine))
    }
}
