//! Zone layouts, per-zone state and the hardware command shape.
//!
//! A device exposes four physical regions (left-top, left-bottom, right-top,
//! right-bottom). Layouts group them into one, two or four logical zones.

use serde::Deserialize;

use crate::color::{BLACK, Rgb};

/// Maximum number of logical zones
pub const MAX_ZONES: usize = 4;

/// Brightness argument sent with every regular render (colors are pre-scaled).
pub const FULL_BRIGHTNESS: u8 = 255;

/// Set of physical regions addressed by one hardware write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneMask(u8);

impl ZoneMask {
    pub const NONE: Self = Self(0);
    pub const LEFT_TOP: Self = Self(0b0001);
    pub const LEFT_BOTTOM: Self = Self(0b0010);
    pub const RIGHT_TOP: Self = Self(0b0100);
    pub const RIGHT_BOTTOM: Self = Self(0b1000);
    pub const LEFT: Self = Self::LEFT_TOP.union(Self::LEFT_BOTTOM);
    pub const RIGHT: Self = Self::RIGHT_TOP.union(Self::RIGHT_BOTTOM);
    pub const ALL: Self = Self::LEFT.union(Self::RIGHT);

    /// Build a mask from raw bits, dropping bits outside the four regions.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// How the physical regions are grouped into logical zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneLayout {
    /// One zone covering every region
    All,
    /// Left and right halves
    #[default]
    TwoZone,
    /// Each corner on its own
    FourZone,
}

const ALL_MASKS: [ZoneMask; 1] = [ZoneMask::ALL];
const TWO_ZONE_MASKS: [ZoneMask; 2] = [ZoneMask::LEFT, ZoneMask::RIGHT];
const FOUR_ZONE_MASKS: [ZoneMask; 4] = [
    ZoneMask::LEFT_TOP,
    ZoneMask::LEFT_BOTTOM,
    ZoneMask::RIGHT_TOP,
    ZoneMask::RIGHT_BOTTOM,
];

impl ZoneLayout {
    pub const fn zone_count(self) -> usize {
        self.masks().len()
    }

    /// Hardware masks in zone index order.
    ///
    /// `FourZone` is ordered left-top, left-bottom, right-top, right-bottom.
    pub const fn masks(self) -> &'static [ZoneMask] {
        match self {
            Self::All => &ALL_MASKS,
            Self::TwoZone => &TWO_ZONE_MASKS,
            Self::FourZone => &FOUR_ZONE_MASKS,
        }
    }
}

/// Color and brightness owned by one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneState {
    pub color: Rgb,
    pub brightness: u8,
}

impl ZoneState {
    pub const fn new(color: Rgb, brightness: u8) -> Self {
        Self { color, brightness }
    }
}

/// Per-zone state for one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneColorState {
    layout: ZoneLayout,
    zones: [ZoneState; MAX_ZONES],
}

impl ZoneColorState {
    /// All zones black at full brightness.
    pub const fn new(layout: ZoneLayout) -> Self {
        Self {
            layout,
            zones: [ZoneState::new(BLACK, FULL_BRIGHTNESS); MAX_ZONES],
        }
    }

    /// Every zone of `layout` set to the same state.
    pub const fn filled(layout: ZoneLayout, state: ZoneState) -> Self {
        Self {
            layout,
            zones: [state; MAX_ZONES],
        }
    }

    pub const fn layout(&self) -> ZoneLayout {
        self.layout
    }

    /// Active zones in index order.
    pub fn zones(&self) -> &[ZoneState] {
        &self.zones[..self.layout.zone_count()]
    }

    /// Mutable access to the active zones.
    pub fn zones_mut(&mut self) -> &mut [ZoneState] {
        let count = self.layout.zone_count();
        &mut self.zones[..count]
    }

    pub fn zone(&self, index: usize) -> Option<ZoneState> {
        self.zones().get(index).copied()
    }
}

/// Instantaneous per-zone colors reported by a screen sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneColorSample {
    layout: ZoneLayout,
    colors: [Rgb; MAX_ZONES],
}

impl ZoneColorSample {
    /// Sample for the single-zone layout.
    pub const fn all(color: Rgb) -> Self {
        Self {
            layout: ZoneLayout::All,
            colors: [color, BLACK, BLACK, BLACK],
        }
    }

    pub const fn two_zone(left: Rgb, right: Rgb) -> Self {
        Self {
            layout: ZoneLayout::TwoZone,
            colors: [left, right, BLACK, BLACK],
        }
    }

    /// Corners in screen order; stored in zone index order.
    pub const fn four_zone(
        top_left: Rgb,
        top_right: Rgb,
        bottom_left: Rgb,
        bottom_right: Rgb,
    ) -> Self {
        Self {
            layout: ZoneLayout::FourZone,
            colors: [top_left, bottom_left, top_right, bottom_right],
        }
    }

    pub const fn layout(&self) -> ZoneLayout {
        self.layout
    }

    /// Colors in zone index order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors[..self.layout.zone_count()]
    }
}

/// A single hardware write: color and brightness for a set of regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneCommand {
    pub mask: ZoneMask,
    pub color: Rgb,
    pub brightness: u8,
}

impl ZoneCommand {
    pub const fn new(mask: ZoneMask, color: Rgb, brightness: u8) -> Self {
        Self {
            mask,
            color,
            brightness,
        }
    }

    /// All regions dark.
    pub const fn off() -> Self {
        Self::new(ZoneMask::ALL, BLACK, 0)
    }

    pub const fn is_off(&self) -> bool {
        self.color.r == 0 && self.color.g == 0 && self.color.b == 0 && self.brightness == 0
    }
}

/// Smoothed zone state plus a global scale, ready for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub zones: ZoneColorState,
    /// Global multiplier in `[0, 1]`
    pub scale: f32,
}

impl Frame {
    pub const fn new(zones: ZoneColorState, scale: f32) -> Self {
        Self { zones, scale }
    }

    /// One color across every region.
    pub const fn uniform(color: Rgb, brightness: u8) -> Self {
        Self::new(
            ZoneColorState::filled(ZoneLayout::All, ZoneState::new(color, brightness)),
            1.0,
        )
    }
}
