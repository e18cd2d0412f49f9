//! Classifier - turns decoded map images into the initial grid
//!
//! The browser decodes the PNGs and hands over raw RGB or RGBA bytes; this
//! module only validates shapes and maps colors through the palette key.

use crate::core::EngineError;
use crate::domain::palette::{classify_rgb, Rgb};
use crate::grid::Grid;

/// Borrowed, row-major 8-bit raster with 3 (RGB) or 4 (RGBA) channels.
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a> {
    width: u32,
    height: u32,
    channels: usize,
    data: &'a [u8],
}

impl<'a> RasterView<'a> {
    pub fn new(width: u32, height: u32, channels: u8, data: &'a [u8]) -> Result<Self, EngineError> {
        if channels != 3 && channels != 4 {
            return Err(EngineError::invalid("channel count", channels));
        }
        let channels = channels as usize;
        // at most 4 bytes per cell, same as the depth layer
        let expected = Grid::cell_count(width, height)? * channels;
        if data.len() != expected {
            return Err(EngineError::LayerLength {
                what: "raster bytes",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    /// Pixels in row-major order, alpha dropped.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + 'a {
        let data: &'a [u8] = self.data;
        data.chunks_exact(self.channels)
            .map(|px| [px[0], px[1], px[2]])
    }
}

/// Image drawn over the simulation for orientation; never read by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Overlay {
    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

/// Output of classification: the starting grid plus the optional overlay.
#[derive(Clone, Debug)]
pub struct ClassifiedMap {
    pub grid: Grid,
    pub overlay: Option<Overlay>,
}

pub fn classify(map: &RasterView, overlay: Option<&RasterView>) -> Result<ClassifiedMap, EngineError> {
    if let Some(over) = overlay {
        if over.width != map.width || over.height != map.height {
            return Err(EngineError::ShapeMismatch {
                what: "overlay raster",
                expected_width: map.width,
                expected_height: map.height,
                actual_width: over.width,
                actual_height: over.height,
            });
        }
    }

    let (kinds, depth): (Vec<_>, Vec<_>) = map.pixels().map(classify_rgb).unzip();
    let grid = Grid::from_layers(map.width, map.height, kinds, depth)?;

    let overlay = overlay.map(|over| Overlay {
        width: over.width,
        height: over.height,
        pixels: over.pixels().collect(),
    });

    log::info!(
        "classified {}x{} map ({} wet cells){}",
        map.width,
        map.height,
        grid.census().wet_cells(),
        if overlay.is_some() { " with overlay" } else { "" }
    );

    Ok(ClassifiedMap { grid, overlay })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::domain::cells::CellKind;

    #[test]
    fn rgba_map_is_classified_by_exact_color() {
        #[rustfmt::skip]
        let bytes = [
            0, 0, 0, 255,      185, 122, 87, 255,
            28, 32, 88, 255,   12, 200, 7, 255,
        ];
        let map = RasterView::new(2, 2, 4, &bytes).unwrap();
        let out = classify(&map, None).unwrap();
        assert_eq!(
            out.grid.kinds(),
            &[CellKind::Dam, CellKind::Terrain, CellKind::Water, CellKind::Empty]
        );
        assert_eq!(out.grid.depths(), &[0.0, 0.0, 1.0, 0.0]);
        assert!(out.overlay.is_none());
    }

    #[test]
    fn overlay_must_match_map_dimensions() {
        let map_bytes = vec![255u8; 4 * 2 * 3];
        let over_bytes = vec![10u8; 2 * 4 * 3];
        let map = RasterView::new(4, 2, 3, &map_bytes).unwrap();
        let over = RasterView::new(2, 4, 3, &over_bytes).unwrap();
        let err = classify(&map, Some(&over)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn overlay_pixels_are_kept_without_alpha() {
        let map_bytes = vec![255u8; 2 * 3];
        let over_bytes = [1u8, 2, 3, 99, 4, 5, 6, 99];
        let map = RasterView::new(2, 1, 3, &map_bytes).unwrap();
        let over = RasterView::new(2, 1, 4, &over_bytes).unwrap();
        let out = classify(&map, Some(&over)).unwrap();
        assert_eq!(out.overlay.unwrap().pixels(), &[[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn raster_validation() {
        assert_eq!(
            RasterView::new(2, 2, 2, &[0; 8]).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            RasterView::new(2, 2, 3, &[0; 11]).unwrap_err().kind(),
            ErrorKind::ShapeMismatch
        );
        assert_eq!(
            RasterView::new(u32::MAX, u32::MAX, 4, &[]).unwrap_err().kind(),
            ErrorKind::InvalidParameter
        );
    }
}
