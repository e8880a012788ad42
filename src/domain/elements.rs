//! Element Definitions
//!
//! Every element maps onto one of five behavior classes. The class decides
//! how a particle moves and what it may push out of the way; the element
//! only tunes the numbers (gravity, speed, dispersion) and the palette.

use serde::Serialize;

pub type ElementId = u8;

pub const EL_EMPTY: ElementId = 0;
pub const EL_STONE: ElementId = 1;
pub const EL_WOOD: ElementId = 2;
pub const EL_BRICK: ElementId = 3;
pub const EL_SAND: ElementId = 4;
pub const EL_DIRT: ElementId = 5;
pub const EL_WATER: ElementId = 6;
pub const EL_STEAM: ElementId = 7;
pub const EL_HELIUM: ElementId = 8;
pub const EL_RAINBOW_SAND: ElementId = 9;

pub const ELEMENT_COUNT: usize = 10;

/// Closed set of movement state machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    Empty,
    ImmovableSolid,
    MovableSolid,
    Liquid,
    Gas,
}

impl BehaviorKind {
    /// Displacement rank: solid > liquid > gas > empty.
    #[inline]
    pub fn density_class(self) -> u8 {
        match self {
            BehaviorKind::Empty => 0,
            BehaviorKind::Gas => 1,
            BehaviorKind::Liquid => 2,
            BehaviorKind::MovableSolid => 3,
            BehaviorKind::ImmovableSolid => 4,
        }
    }

    /// Can a particle of class `self` swap into a cell holding `target`?
    ///
    /// Movers only push strictly lighter classes, and nothing pushes an
    /// immovable solid.
    #[inline]
    pub fn can_displace(self, target: BehaviorKind) -> bool {
        match self {
            BehaviorKind::Empty | BehaviorKind::ImmovableSolid => false,
            _ => target != BehaviorKind::ImmovableSolid && target.density_class() < self.density_class(),
        }
    }

    /// Vertical direction the class is pulled towards (+y is down).
    #[inline]
    pub fn fall_sign(self) -> i32 {
        match self {
            BehaviorKind::Gas => -1,
            _ => 1,
        }
    }
}

/// Static per-element tuning.
#[derive(Clone, Copy, Debug)]
pub struct ElementProps {
    pub key: &'static str,
    pub behavior: BehaviorKind,
    pub density: f32,
    /// Added to the fractional fall accumulator every tick.
    pub gravity: f32,
    /// Cap on |vy| in cells per tick.
    pub max_speed: f32,
    /// Lateral search range for liquids and gases.
    pub dispersion: u8,
}

pub static ELEMENT_DATA: [ElementProps; ELEMENT_COUNT] = [
    ElementProps { key: "empty", behavior: BehaviorKind::Empty, density: 0.0, gravity: 0.0, max_speed: 0.0, dispersion: 0 },
    ElementProps { key: "stone", behavior: BehaviorKind::ImmovableSolid, density: 100.0, gravity: 0.0, max_speed: 0.0, dispersion: 0 },
    ElementProps { key: "wood", behavior: BehaviorKind::ImmovableSolid, density: 100.0, gravity: 0.0, max_speed: 0.0, dispersion: 0 },
    ElementProps { key: "brick", behavior: BehaviorKind::ImmovableSolid, density: 100.0, gravity: 0.0, max_speed: 0.0, dispersion: 0 },
    ElementProps { key: "sand", behavior: BehaviorKind::MovableSolid, density: 1.6, gravity: 0.2, max_speed: 10.0, dispersion: 0 },
    ElementProps { key: "dirt", behavior: BehaviorKind::MovableSolid, density: 1.4, gravity: 0.2, max_speed: 10.0, dispersion: 0 },
    ElementProps { key: "water", behavior: BehaviorKind::Liquid, density: 1.0, gravity: 0.2, max_speed: 10.0, dispersion: 5 },
    ElementProps { key: "steam", behavior: BehaviorKind::Gas, density: 0.5, gravity: 0.1, max_speed: 4.0, dispersion: 3 },
    ElementProps { key: "helium", behavior: BehaviorKind::Gas, density: 0.2, gravity: 0.25, max_speed: 4.0, dispersion: 4 },
    ElementProps { key: "rainbow_sand", behavior: BehaviorKind::MovableSolid, density: 1.6, gravity: 0.2, max_speed: 10.0, dispersion: 0 },
];

/// Element tag stored in every cell.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Empty = EL_EMPTY,
    Stone = EL_STONE,
    Wood = EL_WOOD,
    Brick = EL_BRICK,
    Sand = EL_SAND,
    Dirt = EL_DIRT,
    Water = EL_WATER,
    Steam = EL_STEAM,
    Helium = EL_HELIUM,
    RainbowSand = EL_RAINBOW_SAND,
}

impl ElementKind {
    pub const ALL: [ElementKind; ELEMENT_COUNT] = [
        ElementKind::Empty,
        ElementKind::Stone,
        ElementKind::Wood,
        ElementKind::Brick,
        ElementKind::Sand,
        ElementKind::Dirt,
        ElementKind::Water,
        ElementKind::Steam,
        ElementKind::Helium,
        ElementKind::RainbowSand,
    ];

    /// Resolve a host-supplied id. Unknown ids yield `None`.
    #[inline]
    pub fn from_id(id: ElementId) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.props().key == key)
    }

    #[inline]
    pub fn id(self) -> ElementId {
        self as ElementId
    }

    #[inline]
    pub fn props(self) -> &'static ElementProps {
        &ELEMENT_DATA[self as usize]
    }

    #[inline]
    pub fn behavior(self) -> BehaviorKind {
        self.props().behavior
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == ElementKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_catalogue() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_id(kind.id()), Some(kind));
            assert_eq!(ElementKind::from_key(kind.props().key), Some(kind));
        }
        assert_eq!(ElementKind::from_id(ELEMENT_COUNT as u8), None);
        assert_eq!(ElementKind::from_id(255), None);
        assert_eq!(ElementKind::from_key("lava"), None);
    }

    #[test]
    fn displacement_follows_density_classes() {
        use BehaviorKind::*;

        assert!(MovableSolid.can_displace(Empty));
        assert!(MovableSolid.can_displace(Gas));
        assert!(MovableSolid.can_displace(Liquid));
        assert!(!MovableSolid.can_displace(MovableSolid));
        assert!(!MovableSolid.can_displace(ImmovableSolid));

        assert!(Liquid.can_displace(Empty));
        assert!(Liquid.can_displace(Gas));
        assert!(!Liquid.can_displace(Liquid));

        assert!(Gas.can_displace(Empty));
        assert!(!Gas.can_displace(Gas));
        assert!(!Gas.can_displace(Liquid));

        assert!(!ImmovableSolid.can_displace(Empty));
        assert!(!Empty.can_displace(Empty));
    }
}
