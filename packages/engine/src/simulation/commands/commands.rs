use crate::core::EngineError;
use crate::domain::cells::CellKind;

use super::FloodCore;

/// Circular brush: every in-bounds cell with dx² + dy² <= radius² gets `depth`,
/// and `kind` when one is given. Off-grid cells are skipped.
pub(super) fn apply_tool(
    world: &mut FloodCore,
    cx: i32,
    cy: i32,
    radius: i32,
    kind: Option<CellKind>,
    depth: f32,
) -> Result<u32, EngineError> {
    if radius < 1 {
        return Err(EngineError::invalid("brush radius", radius));
    }
    if !depth.is_finite() {
        return Err(EngineError::invalid("brush depth", depth));
    }
    let depth = depth.clamp(0.0, 1.0);

    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let r2 = r * r;
    let max_x = world.grid.width() as i64 - 1;
    let max_y = world.grid.height() as i64 - 1;

    let mut touched = 0u32;
    for y in (cy - r).max(0)..=(cy + r).min(max_y) {
        for x in (cx - r).max(0)..=(cx + r).min(max_x) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            match kind {
                Some(kind) => world.grid.set_cell(x, y, kind, depth),
                None => world.grid.set_depth(x, y, depth),
            }
            touched += 1;
        }
    }

    log::trace!("brush at ({cx}, {cy}) r={radius}: {touched} cells");
    Ok(touched)
}

pub(super) fn use_tool(world: &mut FloodCore, x: i32, y: i32) -> u32 {
    if !world.grid.in_bounds(x, y) {
        return 0;
    }
    let tool = world.tools.current();
    let (kind, depth) = tool.effect();
    let radius = world.tools.radius();
    match apply_tool(world, x, y, radius, kind, depth) {
        Ok(touched) => touched,
        Err(err) => {
            log::warn!("{tool} brush rejected: {err}");
            0
        }
    }
}
