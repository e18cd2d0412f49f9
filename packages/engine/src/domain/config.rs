//! Simulation configuration
//!
//! Loaded from a camelCase JSON bundle; every field has a default so a partial
//! (or empty) object is a valid config.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

pub const MIN_FLOW_SPEED: f32 = 0.1;
pub const MAX_FLOW_SPEED: f32 = 3.0;
pub const MIN_TOOL_SIZE: u32 = 1;
pub const MAX_TOOL_SIZE: u32 = 50;
pub const DEFAULT_SEED: u64 = 0x00F1_00D5;

/// Strictly positive, finite multiplier on per-tick depth change.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FlowSpeed(f32);

impl FlowSpeed {
    pub fn new(value: f32) -> Result<Self, EngineError> {
        if value.is_finite() && value > 0.0 {
            Ok(FlowSpeed(value))
        } else {
            Err(EngineError::invalid("flow speed", value))
        }
    }

    /// Clamp into the slider range; never fails.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return FlowSpeed(MIN_FLOW_SPEED);
        }
        FlowSpeed(value.clamp(MIN_FLOW_SPEED, MAX_FLOW_SPEED))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for FlowSpeed {
    fn default() -> Self {
        FlowSpeed(1.0)
    }
}

/// Constants of the propagation rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloodRules {
    /// Depth lost per cell of outward spread, per unit flow speed.
    pub spread_decrease: f32,
    /// Minimum depth of freshly spread water.
    pub spread_floor: f32,
    /// Upward bias added to the neighbour mean during diffusion, per unit flow speed.
    pub diffusion_bias: f32,
    /// Every wet neighbour must reach this depth before terrain floods.
    pub flood_threshold: f32,
    /// Depth assigned to terrain when it floods.
    pub flooded_depth: f32,
}

impl Default for FloodRules {
    fn default() -> Self {
        Self {
            spread_decrease: 0.05,
            spread_floor: 0.2,
            diffusion_bias: 0.01,
            flood_threshold: 0.98,
            flooded_depth: 0.2,
        }
    }
}

impl FloodRules {
    pub fn validate(&self) -> Result<(), EngineError> {
        let unit = [
            ("spread floor", self.spread_floor),
            ("flood threshold", self.flood_threshold),
            ("flooded depth", self.flooded_depth),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::invalid(name, value));
            }
        }
        let rates = [
            ("spread decrease", self.spread_decrease),
            ("diffusion bias", self.diffusion_bias),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::invalid(name, value));
            }
        }
        Ok(())
    }
}

/// Brush diameters per tool, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolSizes {
    pub dam: u32,
    pub water: u32,
    pub terrain: u32,
    pub eraser: u32,
    pub soak: u32,
}

impl Default for ToolSizes {
    fn default() -> Self {
        Self {
            dam: 10,
            water: 15,
            terrain: 20,
            eraser: 10,
            soak: 15,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloodConfig {
    pub flow_speed: f32,
    pub seed: u64,
    pub paused: bool,
    pub rules: FloodRules,
    pub tools: ToolSizes,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            flow_speed: 1.0,
            seed: DEFAULT_SEED,
            paused: true,
            rules: FloodRules::default(),
            tools: ToolSizes::default(),
        }
    }
}

impl FloodConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: FloodConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        FlowSpeed::new(self.flow_speed)?;
        self.rules.validate()
    }

    pub fn flow(&self) -> Result<FlowSpeed, EngineError> {
        FlowSpeed::new(self.flow_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn flow_speed_rejects_non_positive() {
        assert!(FlowSpeed::new(0.5).is_ok());
        for bad in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let err = FlowSpeed::new(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        }
    }

    #[test]
    fn flow_speed_clamps_to_slider_range() {
        assert_eq!(FlowSpeed::clamped(0.0).get(), MIN_FLOW_SPEED);
        assert_eq!(FlowSpeed::clamped(9.0).get(), MAX_FLOW_SPEED);
        assert_eq!(FlowSpeed::clamped(1.5).get(), 1.5);
        assert_eq!(FlowSpeed::clamped(f32::NAN).get(), MIN_FLOW_SPEED);
    }

    #[test]
    fn empty_json_is_the_default_config() {
        let config = FloodConfig::from_json("{}").unwrap();
        assert_eq!(config, FloodConfig::default());
        assert!(config.paused);
        assert_eq!(config.rules.flood_threshold, 0.98);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            FloodConfig::from_json(r#"{"flowSpeed":2.5,"seed":7,"rules":{"spreadFloor":0.3}}"#)
                .unwrap();
        assert_eq!(config.flow_speed, 2.5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.rules.spread_floor, 0.3);
        assert_eq!(config.rules.spread_decrease, 0.05);
        assert_eq!(config.tools, ToolSizes::default());
    }

    #[test]
    fn bad_json_and_bad_values_are_rejected() {
        let err = FloodConfig::from_json("{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);

        let err = FloodConfig::from_json(r#"{"flowSpeed":0}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);

        let err = FloodConfig::from_json(r#"{"rules":{"floodThreshold":1.5}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn json_round_trip_keeps_camel_case_keys() {
        let json = FloodConfig::default().to_json();
        assert!(json.contains("\"flowSpeed\""));
        assert!(json.contains("\"floodThreshold\""));
        assert_eq!(FloodConfig::from_json(&json).unwrap(), FloodConfig::default());
    }
}
