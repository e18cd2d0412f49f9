//! Colors: the classification key for input maps and the render palette.
//!
//! Render colors are packed ABGR (little-endian bytes RR,GG,BB,AA) so the
//! buffer can be copied straight into canvas `ImageData`.

use super::cells::CellKind;

pub type Rgb = [u8; 3];

pub const DAM_KEY: Rgb = [0, 0, 0];
pub const TERRAIN_KEY: Rgb = [185, 122, 87];
pub const WATER_KEY: Rgb = [28, 32, 88];

pub const EMPTY_COLOR: Rgb = [255, 255, 255];
pub const DAM_COLOR: Rgb = [0, 0, 0];
pub const TERRAIN_COLOR: Rgb = TERRAIN_KEY;
const FLOODED_TINT: Rgb = [100, 80, 90];

/// Map an input pixel to its starting kind and depth. Unknown colors are empty.
#[inline]
pub fn classify_rgb(rgb: Rgb) -> (CellKind, f32) {
    match rgb {
        DAM_KEY => (CellKind::Dam, 0.0),
        TERRAIN_KEY => (CellKind::Terrain, 0.0),
        WATER_KEY => (CellKind::Water, 1.0),
        _ => (CellKind::Empty, 0.0),
    }
}

/// Shallow water is pale, deep water saturated blue.
pub fn water_color(depth: f32) -> Rgb {
    let dry = 1.0 - depth.clamp(0.0, 1.0);
    [
        (255.0 * dry) as u8,
        (255.0 * dry) as u8,
        (255.0 - 100.0 * dry) as u8,
    ]
}

pub fn flooded_color(depth: f32) -> Rgb {
    let w = water_color(depth);
    [
        ((w[0] as u16 + FLOODED_TINT[0] as u16) / 2) as u8,
        ((w[1] as u16 + FLOODED_TINT[1] as u16) / 2) as u8,
        ((w[2] as u16 + FLOODED_TINT[2] as u16) / 2) as u8,
    ]
}

pub fn cell_color(kind: CellKind, depth: f32) -> Rgb {
    match kind {
        CellKind::Dam => DAM_COLOR,
        CellKind::Terrain => TERRAIN_COLOR,
        CellKind::FloodedTerrain => flooded_color(depth),
        CellKind::Water => water_color(depth),
        CellKind::Empty => EMPTY_COLOR,
    }
}

/// `over` drawn on top of `base` with opacity `alpha` (0 = invisible).
#[inline]
pub fn blend(base: Rgb, over: Rgb, alpha: u8) -> Rgb {
    let a = alpha as u32;
    let mix = |b: u8, o: u8| ((o as u32 * a + b as u32 * (255 - a)) / 255) as u8;
    [mix(base[0], over[0]), mix(base[1], over[1]), mix(base[2], over[2])]
}

#[inline]
pub fn pack_abgr(rgb: Rgb) -> u32 {
    0xFF00_0000 | ((rgb[2] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[0] as u32
}
