//! Element palettes in ABGR (little-endian 0xAABBGGRR -> bytes [R,G,B,A]),
//! so the colour buffer can be copied straight into canvas image data.

use super::elements::ElementKind;

/// RGB(10,10,10), opaque.
pub const BG_COLOR: u32 = 0xFF0A0A0A;

#[inline]
const fn abgr(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

const EMPTY: [u32; 1] = [BG_COLOR];
const STONE: [u32; 5] = [
    abgr(150, 150, 150),
    abgr(120, 120, 120),
    abgr(180, 180, 180),
    abgr(140, 140, 140),
    abgr(160, 160, 160),
];
const WOOD: [u32; 3] = [abgr(117, 76, 36), abgr(139, 101, 49), abgr(160, 120, 60)];
const BRICK: [u32; 3] = [abgr(156, 62, 42), abgr(142, 54, 38), abgr(170, 74, 52)];
const SAND: [u32; 5] = [
    abgr(240, 215, 150),
    abgr(230, 200, 120),
    abgr(220, 190, 100),
    abgr(210, 180, 80),
    abgr(200, 170, 60),
];
const DIRT: [u32; 5] = [
    abgr(96, 47, 18),
    abgr(135, 70, 32),
    abgr(110, 54, 25),
    abgr(145, 85, 40),
    abgr(90, 44, 20),
];
const WATER: [u32; 1] = [abgr(28, 85, 234)];
const STEAM: [u32; 2] = [abgr(200, 200, 200), abgr(210, 210, 215)];
const HELIUM: [u32; 1] = [abgr(174, 174, 174)];
// Walked in order, one entry per write.
const RAINBOW: [u32; 7] = [
    abgr(255, 0, 0),
    abgr(255, 127, 0),
    abgr(255, 255, 0),
    abgr(0, 255, 0),
    abgr(0, 0, 255),
    abgr(75, 0, 130),
    abgr(148, 0, 211),
];

pub fn palette(kind: ElementKind) -> &'static [u32] {
    match kind {
        ElementKind::Empty => &EMPTY,
        ElementKind::Stone => &STONE,
        ElementKind::Wood => &WOOD,
        ElementKind::Brick => &BRICK,
        ElementKind::Sand => &SAND,
        ElementKind::Dirt => &DIRT,
        ElementKind::Water => &WATER,
        ElementKind::Steam => &STEAM,
        ElementKind::Helium => &HELIUM,
        ElementKind::RainbowSand => &RAINBOW,
    }
}

/// Pick a palette entry for a freshly written cell.
///
/// `seed` only needs to vary between writes; the same seed always yields
/// the same colour so runs stay reproducible.
#[inline]
pub fn color_with_variation(kind: ElementKind, seed: u32) -> u32 {
    let colors = palette(kind);
    // Knuth multiplicative hash spreads neighbouring seeds across the palette.
    let h = seed.wrapping_mul(2_654_435_761) >> 16;
    colors[(h as usize) % colors.len()]
}

/// Elements whose palette is stepped through in order instead of hashed.
#[inline]
pub fn cycles_palette(kind: ElementKind) -> bool {
    matches!(kind, ElementKind::RainbowSand)
}

/// Entry `step` of the palette, wrapping at its length.
#[inline]
pub fn cycled_color(kind: ElementKind, step: u32) -> u32 {
    let colors = palette(kind);
    colors[(step as usize) % colors.len()]
}

#[inline]
pub fn is_color_of(kind: ElementKind, color: u32) -> bool {
    palette(kind).contains(&color)
}

/// Split an ABGR word into RGBA bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    color.to_le_bytes()
}
