#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use floodsim_engine::FloodWorld;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_steps_in_the_browser() {
    floodsim_engine::init();
    let mut world = FloodWorld::new(16, 16).unwrap();
    world.select_tool("water").unwrap();
    assert!(world.use_tool(8, 8) > 0);
    world.step();
    assert_eq!(world.frame(), 1);
    world.refresh_colors();
    assert!(!world.colors_ptr().is_null());
}

#[wasm_bindgen_test]
fn unknown_tool_is_an_error() {
    let mut world = FloodWorld::new(4, 4).unwrap();
    assert!(world.select_tool("flamethrower").is_err());
}
