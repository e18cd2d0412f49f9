use crate::systems::flood::{plan_step, TickSeed};

use super::{FloodCore, PerfTimer};

const LOG_EVERY: u64 = 120;

pub(super) fn step(world: &mut FloodCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.grid.size() as u32;
        // two layers (kind 1 + depth 4), double-buffered
        world.perf_stats.memory_bytes = (world.grid.size() as u32).saturating_mul(10);
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let seed = TickSeed::new(world.seed, world.frame);

    // === PLAN: read-only pass over the snapshot ===
    let (plan, plan_ms) = PerfTimer::measure(perf_on, || {
        plan_step(&world.grid, &world.rules, world.flow_speed, seed)
    });

    // === COMMIT: replay writes into fresh buffers, then swap ===
    let (next, commit_ms) = PerfTimer::measure(perf_on, || plan.commit_next(&world.grid));
    world.grid = next;

    let tally = plan.tally();
    world.last_tally = tally;

    if perf_on {
        world.perf_stats.plan_ms = plan_ms;
        world.perf_stats.commit_ms = commit_ms;
        world.perf_stats.record_tally(&tally);
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;

    if world.frame % LOG_EVERY == 0 {
        log::debug!(
            "frame {}: {} wet cells, {} spreads, {} conversions (+{} bundled)",
            world.frame,
            tally.wet_cells,
            tally.spreads,
            tally.conversions,
            tally.bundled
        );
    }
}
