use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::cells::CellKind;
use crate::domain::classify::RasterView;
use crate::domain::config::FloodConfig;

use super::perf_stats::PerfStats;
use super::tools::Tool;
use super::FloodCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Element count and byte length of a `len`-element buffer of `T`, as JS sees them.
pub(crate) fn buffer_span<T>(len: usize) -> Result<(u32, u32), EngineError> {
    let too_long = || EngineError::invalid("buffer length", len as f64);
    let bytes = len
        .checked_mul(std::mem::size_of::<T>())
        .ok_or_else(too_long)?;
    let elements = u32::try_from(len).map_err(|_| too_long())?;
    let bytes = u32::try_from(bytes).map_err(|_| too_long())?;
    Ok((elements, bytes))
}

/// Byte-level view of the shared buffers, for building typed arrays in JS.
#[wasm_bindgen]
pub struct AbiLayout {
    kinds_ptr: u32,
    kinds_len_elements: u32,
    kinds_len_bytes: u32,
    depth_ptr: u32,
    depth_len_elements: u32,
    depth_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn kinds_ptr(&self) -> u32 { self.kinds_ptr }
    #[wasm_bindgen(getter)]
    pub fn kinds_len_elements(&self) -> u32 { self.kinds_len_elements }
    #[wasm_bindgen(getter)]
    pub fn kinds_len_bytes(&self) -> u32 { self.kinds_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn depth_ptr(&self) -> u32 { self.depth_ptr }
    #[wasm_bindgen(getter)]
    pub fn depth_len_elements(&self) -> u32 { self.depth_len_elements }
    #[wasm_bindgen(getter)]
    pub fn depth_len_bytes(&self) -> u32 { self.depth_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }
}

#[wasm_bindgen]
pub struct FloodWorld {
    core: FloodCore,
}

#[wasm_bindgen]
impl FloodWorld {
    /// Empty, dry world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<FloodWorld, JsValue> {
        let core = FloodCore::try_new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Classify decoded RGB/RGBA pixels into a world. The optional overlay must
    /// match the map's dimensions and may have its own channel count (defaults
    /// to the map's); `config_json` may be partial.
    #[wasm_bindgen(js_name = fromImages)]
    pub fn from_images(
        width: u32,
        height: u32,
        channels: u8,
        map: &[u8],
        overlay: Option<Vec<u8>>,
        overlay_channels: Option<u8>,
        config_json: Option<String>,
    ) -> Result<FloodWorld, JsValue> {
        let config = match config_json {
            Some(json) => FloodConfig::from_json(&json).map_err(to_js)?,
            None => FloodConfig::default(),
        };
        let map = RasterView::new(width, height, channels, map).map_err(to_js)?;
        let overlay = overlay
            .as_deref()
            .map(|data| RasterView::new(width, height, overlay_channels.unwrap_or(channels), data))
            .transpose()
            .map_err(to_js)?;
        let core = FloodCore::from_rasters(&map, overlay.as_ref(), &config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Settings ===

    #[wasm_bindgen(getter)]
    pub fn flow_speed(&self) -> f32 { self.core.flow_speed() }

    /// Slider input; clamped to [0.1, 3.0]. Returns the applied value.
    pub fn set_flow_speed(&mut self, speed: f32) -> f32 {
        self.core.set_flow_speed_clamped(speed)
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 { self.core.seed() }

    pub fn set_seed(&mut self, seed: u64) {
        self.core.set_seed(seed);
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    /// Space bar. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.core.toggle_pause()
    }

    // === Simulation ===

    /// Advance one tick even when paused
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Per-frame driver: steps unless paused
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    pub fn reset(&mut self) {
        self.core.reset_to_initial();
    }

    /// Census as JSON: {"empty":..,"water":..,"terrain":..,"dam":..,"flooded":..,"totalDepth":..}
    pub fn census_json(&self) -> String {
        serde_json::to_string(&self.core.census()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Kind code at (x, y), or 255 off the grid
    pub fn cell_kind(&self, x: i32, y: i32) -> u8 {
        self.core.cell(x, y).map_or(u8::MAX, |(kind, _)| kind.id())
    }

    /// Water depth at (x, y), or 0 off the grid
    pub fn water_depth(&self, x: i32, y: i32) -> f32 {
        self.core.cell(x, y).map_or(0.0, |(_, depth)| depth)
    }

    // === Tool editor ===

    /// "dam", "water", "terrain", "eraser" or "soak"
    pub fn select_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let tool: Tool = name.parse().map_err(to_js)?;
        self.core.select_tool(tool);
        Ok(())
    }

    pub fn current_tool(&self) -> String {
        self.core.tools().current().name().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn tool_size(&self) -> u32 { self.core.tools().size() }

    /// Mouse wheel. Returns the new size.
    pub fn adjust_tool_size(&mut self, delta: i32) -> u32 {
        self.core.adjust_tool_size(delta)
    }

    /// Click/drag with the current tool. Returns cells painted.
    pub fn use_tool(&mut self, x: i32, y: i32) -> u32 {
        self.core.use_tool(x, y)
    }

    /// Raw brush: paints `kind` (omit to keep kinds) and `depth` in a disc
    pub fn apply_tool(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        kind: Option<u8>,
        depth: f32,
    ) -> Result<u32, JsValue> {
        let kind = match kind {
            Some(id) => Some(
                CellKind::from_id(id)
                    .ok_or_else(|| to_js(EngineError::invalid("cell kind", id)))?,
            ),
            None => None,
        };
        self.core.apply_tool(cx, cy, radius, kind, depth).map_err(to_js)
    }

    // === Rendering ===

    /// Repaint the color buffer; returns its pointer
    pub fn refresh_colors(&mut self) -> *const u32 {
        self.core.refresh_colors()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    /// Get pointer to kinds array (for JS rendering)
    pub fn kinds_ptr(&self) -> *const u8 {
        self.core.kinds_ptr()
    }

    /// Get pointer to depth array
    pub fn depth_ptr(&self) -> *const f32 {
        self.core.depth_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    #[wasm_bindgen(getter)]
    pub fn overlay_visible(&self) -> bool { self.core.overlay_visible() }

    pub fn toggle_overlay(&mut self) -> bool {
        self.core.toggle_overlay()
    }

    pub fn set_overlay_opacity(&mut self, opacity: u8) {
        self.core.set_overlay_opacity(opacity);
    }

    /// Pointers are 32-bit on wasm32; lengths that do not fit are an error.
    pub fn abi_layout(&self) -> Result<AbiLayout, JsValue> {
        let cells = self.core.cells_len();
        let (kinds_len_elements, kinds_len_bytes) = buffer_span::<u8>(cells).map_err(to_js)?;
        let (depth_len_elements, depth_len_bytes) = buffer_span::<f32>(cells).map_err(to_js)?;
        let (colors_len_elements, colors_len_bytes) =
            buffer_span::<u32>(self.core.colors().len()).map_err(to_js)?;
        Ok(AbiLayout {
            kinds_ptr: self.core.kinds_ptr() as u32,
            kinds_len_elements,
            kinds_len_bytes,
            depth_ptr: self.core.depth_ptr() as u32,
            depth_len_elements,
            depth_len_bytes,
            colors_ptr: self.core.colors_ptr() as u32,
            colors_len_elements,
            colors_len_bytes,
        })
    }
}
