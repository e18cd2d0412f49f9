//! Brush tools of the terrain painter.

use std::fmt;
use std::str::FromStr;

use crate::core::EngineError;
use crate::domain::cells::CellKind;
use crate::domain::config::{ToolSizes, MAX_TOOL_SIZE, MIN_TOOL_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    Dam,
    Water,
    Terrain,
    Eraser,
    /// Water-only brush: sets depth, leaves the kind alone.
    Soak,
}

impl Tool {
    pub const ALL: [Tool; 5] = [Tool::Dam, Tool::Water, Tool::Terrain, Tool::Eraser, Tool::Soak];

    /// Kind to paint (if any) and depth to set.
    pub fn effect(self) -> (Option<CellKind>, f32) {
        match self {
            Tool::Dam => (Some(CellKind::Dam), 0.0),
            Tool::Water => (Some(CellKind::Water), 1.0),
            Tool::Terrain => (Some(CellKind::Terrain), 0.0),
            Tool::Eraser => (Some(CellKind::Empty), 0.0),
            Tool::Soak => (None, 1.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Dam => "dam",
            Tool::Water => "water",
            Tool::Terrain => "terrain",
            Tool::Eraser => "eraser",
            Tool::Soak => "soak",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Tool::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| EngineError::UnknownTool(s.to_string()))
    }
}

/// Current tool plus a remembered brush size per tool.
#[derive(Clone, Debug)]
pub struct ToolBox {
    current: Tool,
    sizes: ToolSizes,
}

impl ToolBox {
    pub fn new(sizes: ToolSizes) -> Self {
        let mut tools = Self {
            current: Tool::Dam,
            sizes,
        };
        for tool in Tool::ALL {
            let size = tools.size_of(tool);
            *tools.slot(tool) = size.clamp(MIN_TOOL_SIZE, MAX_TOOL_SIZE);
        }
        tools
    }

    fn slot(&mut self, tool: Tool) -> &mut u32 {
        match tool {
            Tool::Dam => &mut self.sizes.dam,
            Tool::Water => &mut self.sizes.water,
            Tool::Terrain => &mut self.sizes.terrain,
            Tool::Eraser => &mut self.sizes.eraser,
            Tool::Soak => &mut self.sizes.soak,
        }
    }

    pub fn current(&self) -> Tool {
        self.current
    }

    pub fn select(&mut self, tool: Tool) {
        self.current = tool;
    }

    pub fn sizes(&self) -> ToolSizes {
        self.sizes
    }

    pub fn size_of(&self, tool: Tool) -> u32 {
        match tool {
            Tool::Dam => self.sizes.dam,
            Tool::Water => self.sizes.water,
            Tool::Terrain => self.sizes.terrain,
            Tool::Eraser => self.sizes.eraser,
            Tool::Soak => self.sizes.soak,
        }
    }

    pub fn size(&self) -> u32 {
        self.size_of(self.current)
    }

    /// Change the current tool's size by `delta`, clamped to the allowed range.
    /// Sizes below 4 all map to brush radius 1; see `radius`.
    pub fn adjust_size(&mut self, delta: i32) -> u32 {
        let current = self.current;
        let slot = self.slot(current);
        let next = (*slot as i64 + delta as i64).clamp(MIN_TOOL_SIZE as i64, MAX_TOOL_SIZE as i64);
        *slot = next as u32;
        *slot
    }

    /// Brush radius for the current tool: half the size, at least one cell.
    /// Sizes below 4 therefore share radius 1.
    pub fn radius(&self) -> i32 {
        (self.size() / 2).max(1) as i32
    }
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::new(ToolSizes::default())
    }
}
