/// Block type enumeration
/// Using u8 representation matching the on-sprite ids

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockType {
    Air = 0,
    Bedrock = 1,
    Stone = 2,
    Sand = 3,
    Dirt = 4,
    Grass = 5,
    Glass = 11,
    Ice = 12,
    Leaves = 13,
    Water = 20,
}

pub const BLOCK_TYPE_COUNT: usize = 10;

/// One past the highest assigned id; raw ids are sparse.
pub const BLOCK_ID_RANGE: usize = 21;

// Lookup table over the raw id range - eliminates branches in the
// culling loop. Unassigned ids decode to Air via from_u8 and can never
// reach these rows through a BlockType value.
const BLOCK_IS_OPAQUE_LUT: [bool; BLOCK_ID_RANGE] = [
    false, // 0 Air
    true,  // 1 Bedrock
    true,  // 2 Stone
    true,  // 3 Sand
    true,  // 4 Dirt
    true,  // 5 Grass
    false, false, false, false, false, // 6..=10 unassigned
    false, // 11 Glass
    false, // 12 Ice
    false, // 13 Leaves
    false, false, false, false, false, false, // 14..=19 unassigned
    false, // 20 Water
];

impl BlockType {
    pub const ALL: [BlockType; BLOCK_TYPE_COUNT] = [
        BlockType::Air,
        BlockType::Bedrock,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Glass,
        BlockType::Ice,
        BlockType::Leaves,
        BlockType::Water,
    ];

    /// Fast lookup-table based opacity check - no branches.
    /// Opaque types block the neighbor probes of the visibility pass and
    /// are the only types with a sprite.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        BLOCK_IS_OPAQUE_LUT[self as usize]
    }

    #[inline]
    pub const fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    /// Non-air types that light passes through (glass, ice, leaves, water).
    /// They count as open space for neighbor probes and are never drawn.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        !self.is_air() && !self.is_opaque()
    }

    /// Cell index into the horizontal sprite strip, equal to the raw id.
    /// Cell 0 belongs to Air and is never referenced; types without a
    /// sprite return None and are skipped by the renderer.
    #[inline]
    pub const fn sprite_cell(self) -> Option<u32> {
        if self.is_opaque() {
            Some(self as u32)
        } else {
            None
        }
    }

    /// Convert from u8 to BlockType
    /// Returns Air for unassigned ids
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => BlockType::Air,
            1 => BlockType::Bedrock,
            2 => BlockType::Stone,
            3 => BlockType::Sand,
            4 => BlockType::Dirt,
            5 => BlockType::Grass,
            11 => BlockType::Glass,
            12 => BlockType::Ice,
            13 => BlockType::Leaves,
            20 => BlockType::Water,
            _ => BlockType::Air, // Default to Air for invalid values
        }
    }
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::Air
    }
}
