use super::*;
use crate::core::ErrorKind;

fn basin(width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                grid.set_cell(x, y, CellKind::Dam, 0.0);
            }
        }
    }
    grid
}

fn running(grid: Grid) -> FloodCore {
    let config = FloodConfig {
        paused: false,
        ..FloodConfig::default()
    };
    FloodCore::from_grid(grid, &config).unwrap()
}

#[test]
fn new_world_starts_paused_and_dry() {
    let mut world = FloodCore::new(8, 6);
    assert!(world.is_paused());
    assert!(!world.tick());
    assert_eq!(world.frame(), 0);
    assert_eq!(world.census().empty, 48);
}

#[test]
fn tick_runs_only_when_unpaused() {
    let mut world = FloodCore::new(4, 4);
    assert!(!world.toggle_pause());
    assert!(world.tick());
    assert!(world.tick());
    assert_eq!(world.frame(), 2);

    world.set_paused(true);
    assert!(!world.tick());
    world.step();
    assert_eq!(world.frame(), 3);
}

#[test]
fn brush_paints_a_disc() {
    let mut world = FloodCore::new(11, 11);
    let painted = world.apply_tool(5, 5, 2, Some(CellKind::Water), 0.7).unwrap();
    assert_eq!(painted, 13);
    assert_eq!(world.cell(5, 5), Some((CellKind::Water, 0.7)));
    assert_eq!(world.cell(7, 5), Some((CellKind::Water, 0.7)));
    assert_eq!(world.cell(7, 7), Some((CellKind::Empty, 0.0)));
}

#[test]
fn brush_is_clipped_at_the_border() {
    let mut world = FloodCore::new(5, 5);
    let painted = world.apply_tool(0, 0, 1, Some(CellKind::Dam), 0.0).unwrap();
    assert_eq!(painted, 3);
    assert_eq!(world.census().dam, 3);

    // Entirely off the grid
    assert_eq!(world.apply_tool(-10, -10, 2, Some(CellKind::Dam), 0.0).unwrap(), 0);
}

#[test]
fn brush_rejects_bad_parameters() {
    let mut world = FloodCore::new(5, 5);
    let err = world.apply_tool(2, 2, 0, None, 1.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    let err = world.apply_tool(2, 2, 1, None, f32::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(world.census().total_depth, 0.0);
}

#[test]
fn brush_clamps_depth() {
    let mut world = FloodCore::new(3, 3);
    world.apply_tool(1, 1, 1, Some(CellKind::Water), 4.0).unwrap();
    assert_eq!(world.cell(1, 1), Some((CellKind::Water, 1.0)));
}

#[test]
fn soak_keeps_the_kind() {
    let mut grid = Grid::new(6, 6);
    grid.fill(CellKind::Terrain, 0.0);
    let mut world = running(grid);

    world.select_tool(Tool::Soak);
    assert!(world.use_tool(3, 3) > 0);
    assert_eq!(world.cell(3, 3), Some((CellKind::Terrain, 1.0)));
    assert_eq!(world.census().terrain, 36);
}

#[test]
fn use_tool_off_grid_does_nothing() {
    let mut world = FloodCore::new(6, 6);
    world.select_tool(Tool::Water);
    assert_eq!(world.use_tool(-1, 2), 0);
    assert_eq!(world.use_tool(2, 6), 0);
    assert_eq!(world.census().water, 0);
}

#[test]
fn use_tool_radius_follows_tool_size() {
    let mut world = FloodCore::new(40, 40);
    world.select_tool(Tool::Dam);
    world.adjust_tool_size(-100);
    // size 1 still paints radius 1
    assert_eq!(world.use_tool(20, 20), 5);
}

#[test]
fn reset_restores_classified_grid() {
    let mut grid = basin(7, 7);
    grid.set_cell(3, 3, CellKind::Water, 1.0);
    let initial = grid.clone();
    let mut world = running(grid);

    for _ in 0..5 {
        world.tick();
    }
    assert_ne!(world.grid(), &initial);

    world.reset_to_initial();
    assert_eq!(world.grid(), &initial);
    assert_eq!(world.frame(), 5);
}

#[test]
fn flow_speed_setters() {
    let mut world = FloodCore::new(2, 2);
    assert!(world.set_flow_speed(0.0).is_err());
    assert_eq!(world.flow_speed(), 1.0);
    world.set_flow_speed(2.0).unwrap();
    assert_eq!(world.flow_speed(), 2.0);
    assert_eq!(world.set_flow_speed_clamped(9.0), 3.0);
    assert_eq!(world.set_flow_speed_clamped(0.01), 0.1);
}

#[test]
fn invalid_config_changes_nothing() {
    let mut world = FloodCore::new(2, 2);
    let before = world.config();
    let err = world
        .load_config_json(r#"{"seed": 7, "flowSpeed": -1.0}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(world.config(), before);

    let err = world.load_config_json("not json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn config_round_trips_through_the_session() {
    let mut world = FloodCore::new(2, 2);
    world
        .load_config_json(r#"{"seed": 7, "paused": false, "tools": {"water": 30}}"#)
        .unwrap();
    assert_eq!(world.seed(), 7);
    assert!(!world.is_paused());
    assert_eq!(world.tools().size_of(Tool::Water), 30);
    assert_eq!(world.config().tools.water, 30);
}

#[test]
fn colors_follow_the_palette() {
    let mut world = FloodCore::new(3, 1);
    world.apply_tool(0, 0, 1, Some(CellKind::Dam), 0.0).unwrap();
    world.refresh_colors();
    assert_eq!(world.colors(), &[0xFF00_0000, 0xFF00_0000, 0xFFFF_FFFF]);
}

#[test]
fn overlay_is_blended_when_visible() {
    let map = [255u8, 255, 255];
    let over = [0u8, 0, 0];
    let map = RasterView::new(1, 1, 3, &map).unwrap();
    let over = RasterView::new(1, 1, 3, &over).unwrap();
    let mut world = FloodCore::from_rasters(&map, Some(&over), &FloodConfig::default()).unwrap();

    assert!(world.overlay_visible());
    world.set_overlay_opacity(255);
    world.refresh_colors();
    assert_eq!(world.colors()[0], 0xFF00_0000);

    world.set_overlay_opacity(128);
    world.refresh_colors();
    assert_eq!(world.colors()[0], 0xFF7F_7F7F);

    assert!(!world.toggle_overlay());
    world.refresh_colors();
    assert_eq!(world.colors()[0], 0xFFFF_FFFF);
}

#[test]
fn overlay_toggle_needs_an_overlay() {
    let mut world = FloodCore::new(2, 2);
    assert!(!world.overlay_visible());
    assert!(!world.toggle_overlay());
}

#[test]
fn perf_stats_are_zero_until_enabled() {
    let mut grid = basin(6, 6);
    grid.set_cell(2, 2, CellKind::Water, 1.0);
    let mut world = running(grid);

    world.step();
    assert_eq!(world.get_perf_stats().cells_processed(), 0);

    world.enable_perf_metrics(true);
    world.step();
    // the source spread into one neighbour on the first step
    let stats = world.get_perf_stats();
    assert_eq!(stats.cells_processed(), 2);
    assert_eq!(stats.wet_cells(), 2);
    assert_eq!(stats.grid_size(), 36);
}

#[test]
fn last_tally_describes_the_latest_step() {
    let mut grid = basin(5, 5);
    grid.set_cell(2, 2, CellKind::Water, 1.0);
    let mut world = running(grid);
    assert_eq!(world.last_tally(), StepTally::default());

    world.step();
    let tally = world.last_tally();
    assert_eq!(tally.wet_cells, 1);
    assert_eq!(tally.spreads, 1);
    assert_eq!(tally.conversions, 0);
}

#[test]
fn small_tool_sizes_share_radius_one() {
    for size in 1..=3 {
        let mut world = FloodCore::new(9, 9);
        world.select_tool(Tool::Dam);
        world.adjust_tool_size(-100);
        world.adjust_tool_size(size - 1);
        assert_eq!(world.tools().size(), size as u32);
        assert_eq!(world.use_tool(4, 4), 5, "size {size}");
    }
    let mut world = FloodCore::new(9, 9);
    world.adjust_tool_size(-100);
    world.adjust_tool_size(3);
    assert_eq!(world.use_tool(4, 4), 13);
}

#[test]
fn oversized_world_is_an_error() {
    let err = FloodCore::try_new(u32::MAX, u32::MAX).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(FloodCore::try_new(4, 3).unwrap().cells_len(), 12);
}

#[test]
fn buffer_spans_fit_in_u32() {
    assert_eq!(facade::buffer_span::<u8>(12).unwrap(), (12, 12));
    assert_eq!(facade::buffer_span::<f32>(12).unwrap(), (12, 48));
    assert_eq!(facade::buffer_span::<u32>(usize::MAX).unwrap_err().kind(), ErrorKind::InvalidParameter);
    let too_many = u32::MAX as usize / 4 + 1;
    assert!(facade::buffer_span::<f32>(too_many).is_err());
    assert!(facade::buffer_span::<u8>(too_many).is_ok());
}

#[test]
fn images_may_use_different_channel_counts() {
    let map = vec![255u8; 2 * 2 * 3];
    let overlay = vec![0u8, 0, 0, 255].repeat(4);
    let mut world = FloodWorld::from_images(2, 2, 3, &map, Some(overlay), Some(4), None).unwrap();
    assert!(world.overlay_visible());
    world.set_overlay_opacity(255);
    world.refresh_colors();
    assert_eq!(world.abi_layout().unwrap().colors_len_bytes(), 16);

    // Without an explicit count the overlay is read with the map's channels.
    let overlay = vec![0u8; 2 * 2 * 3];
    let world = FloodWorld::from_images(2, 2, 3, &map, Some(overlay), None, None).unwrap();
    assert_eq!(world.cells_len(), 4);
}
