//! Grid - Structure of Arrays for the two co-indexed simulation layers
//!
//! kinds[]  - what occupies the cell
//! depth[]  - water depth in [0, 1], meaningful for water and flooded terrain
//!
//! Both layers are created together and never resized; every constructor
//! checks they agree with `width * height`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::EngineError;
use crate::domain::cells::CellKind;

mod indexing;
mod accessors;
mod neighbors;
mod census;

pub use census::Census;
pub use neighbors::{WetNeighbors, VON_NEUMANN};

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub(crate) kinds: Vec<CellKind>,
    pub(crate) depth: Vec<f32>,
}

impl Grid {
    /// Cell count for a `width` x `height` grid, if both layers of that size
    /// fit in the address space (32-bit on wasm32).
    pub fn cell_count(width: u32, height: u32) -> Result<usize, EngineError> {
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| {
                n.checked_mul(std::mem::size_of::<f32>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| EngineError::invalid("grid cell count", width as f64 * height as f64))
    }

    /// All-empty, dry grid; fails when the dimensions do not fit in memory.
    pub fn try_new(width: u32, height: u32) -> Result<Self, EngineError> {
        let size = Self::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            size,
            kinds: vec![CellKind::Empty; size],
            depth: vec![0.0; size],
        })
    }

    /// All-empty, dry grid.
    ///
    /// # Panics
    /// When `width * height` overflows the address space; see `try_new`.
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("Grid::new({width}, {height}): {err}"),
        }
    }

    /// Build a grid from row-major layers, rejecting layers of the wrong length.
    pub fn from_layers(
        width: u32,
        height: u32,
        kinds: Vec<CellKind>,
        depth: Vec<f32>,
    ) -> Result<Self, EngineError> {
        let size = Self::cell_count(width, height)?;
        if kinds.len() != size {
            return Err(EngineError::LayerLength {
                what: "kind layer",
                expected: size,
                actual: kinds.len(),
            });
        }
        if depth.len() != size {
            return Err(EngineError::LayerLength {
                what: "depth layer",
                expected: size,
                actual: depth.len(),
            });
        }
        Ok(Self {
            width,
            height,
            size,
            kinds,
            depth,
        })
    }

    /// Same as `from_layers` for buffers the engine derived from this grid's shape.
    pub(crate) fn with_layers_of(&self, kinds: Vec<CellKind>, depth: Vec<f32>) -> Self {
        debug_assert_eq!(kinds.len(), self.size);
        debug_assert_eq!(depth.len(), self.size);
        Self {
            width: self.width,
            height: self.height,
            size: self.size,
            kinds,
            depth,
        }
    }

    /// Pull every depth back into [0, 1]; NaN collapses to 0.
    pub fn clamp_depths(&mut self) {
        #[inline]
        fn clamp_unit(d: &mut f32) {
            *d = if d.is_nan() { 0.0 } else { d.clamp(0.0, 1.0) };
        }

        #[cfg(feature = "parallel")]
        {
            self.depth.par_iter_mut().for_each(clamp_unit);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.depth.iter_mut().for_each(clamp_unit);
        }
    }
}
