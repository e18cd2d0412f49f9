use crate::core::EngineError;
use crate::domain::config::{FloodConfig, FloodRules, FlowSpeed};

use super::tools::ToolBox;
use super::FloodCore;

pub(super) fn set_flow_speed(world: &mut FloodCore, speed: f32) -> Result<(), EngineError> {
    world.flow_speed = FlowSpeed::new(speed)?;
    Ok(())
}

pub(super) fn set_flow_speed_clamped(world: &mut FloodCore, speed: f32) -> f32 {
    let applied = FlowSpeed::clamped(speed);
    if applied.get() != speed {
        log::warn!("flow speed {speed} clamped to {}", applied.get());
    }
    world.flow_speed = applied;
    applied.get()
}

pub(super) fn set_seed(world: &mut FloodCore, seed: u64) {
    world.seed = seed;
}

pub(super) fn set_rules(world: &mut FloodCore, rules: FloodRules) -> Result<(), EngineError> {
    rules.validate()?;
    world.rules = rules;
    Ok(())
}

pub(super) fn config(world: &FloodCore) -> FloodConfig {
    FloodConfig {
        flow_speed: world.flow_speed.get(),
        seed: world.seed,
        paused: world.paused,
        rules: world.rules,
        tools: world.tools.sizes(),
    }
}

/// All-or-nothing: nothing changes when `config` is invalid.
pub(super) fn apply_config(world: &mut FloodCore, config: &FloodConfig) -> Result<(), EngineError> {
    config.validate()?;
    let flow = config.flow()?;

    world.flow_speed = flow;
    world.seed = config.seed;
    world.paused = config.paused;
    world.rules = config.rules;

    let current = world.tools.current();
    world.tools = ToolBox::new(config.tools);
    world.tools.select(current);

    log::info!("config applied (flow {}, seed {:#x})", flow.get(), config.seed);
    Ok(())
}
