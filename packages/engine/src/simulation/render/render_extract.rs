#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::palette::{blend, cell_color, pack_abgr};

use super::FloodCore;

/// Repaint every pixel from the current layers, with the overlay blended on
/// top when it is visible. Returns the buffer pointer for JS.
pub(super) fn refresh_colors(world: &mut FloodCore) -> *const u32 {
    let size = world.grid.size();
    if world.render.colors.len() != size {
        world.render.colors.resize(size, 0);
    }

    let kinds = world.grid.kinds();
    let depths = world.grid.depths();
    let overlay = world
        .overlay
        .as_ref()
        .filter(|_| world.render.overlay_visible)
        .map(|o| (o.pixels(), world.render.overlay_opacity));

    let paint = |(idx, out): (usize, &mut u32)| {
        let mut rgb = cell_color(kinds[idx], depths[idx]);
        if let Some((pixels, alpha)) = overlay {
            rgb = blend(rgb, pixels[idx], alpha);
        }
        *out = pack_abgr(rgb);
    };

    #[cfg(feature = "parallel")]
    world.render.colors.par_iter_mut().enumerate().for_each(paint);
    #[cfg(not(feature = "parallel"))]
    world.render.colors.iter_mut().enumerate().for_each(paint);

    world.render.colors.as_ptr()
}
