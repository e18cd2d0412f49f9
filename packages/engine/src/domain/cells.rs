//! Cell kinds
//!
//! The numeric codes are part of the JS ABI: the renderer reads the kind
//! layer straight out of linear memory through `kinds_ptr`.

pub type KindId = u8;

pub const KIND_EMPTY: KindId = 0;
pub const KIND_WATER: KindId = 3;
pub const KIND_TERRAIN: KindId = 4;
pub const KIND_DAM: KindId = 5;
pub const KIND_FLOODED: KindId = 6;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    #[default]
    Empty = KIND_EMPTY,
    Water = KIND_WATER,
    Terrain = KIND_TERRAIN,
    /// Impermeable; the engine never changes a dam cell.
    Dam = KIND_DAM,
    FloodedTerrain = KIND_FLOODED,
}

impl CellKind {
    #[inline]
    pub fn id(self) -> KindId {
        self as KindId
    }

    pub fn from_id(id: KindId) -> Option<Self> {
        match id {
            KIND_EMPTY => Some(CellKind::Empty),
            KIND_WATER => Some(CellKind::Water),
            KIND_TERRAIN => Some(CellKind::Terrain),
            KIND_DAM => Some(CellKind::Dam),
            KIND_FLOODED => Some(CellKind::FloodedTerrain),
            _ => None,
        }
    }

    /// Water and flooded terrain carry a meaningful depth and drive the spread rule.
    #[inline]
    pub fn holds_water(self) -> bool {
        matches!(self, CellKind::Water | CellKind::FloodedTerrain)
    }

    /// Cells a neighbouring water cell may spread into.
    #[inline]
    pub fn accepts_spread(self) -> bool {
        matches!(self, CellKind::Empty | CellKind::FloodedTerrain)
    }
}
