/// Cardinal yaw rotation for the isometric-style projection.
/// The world only ever turns in 90 degree steps, so the transform is an
/// exact integer rotation with no trigonometry and no rounding error.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

pub const ROTATION_COUNT: usize = 4;

impl Rotation {
    pub const ALL: [Rotation; ROTATION_COUNT] = [
        Rotation::R0,
        Rotation::R90,
        Rotation::R180,
        Rotation::R270,
    ];

    /// Rotate grid coordinates (x, y) counterclockwise by this angle.
    /// Exact integer mapping; four successive 90 degree steps return
    /// the input unchanged.
    #[inline]
    pub const fn rotate(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Rotation::R0 => (x, y),
            Rotation::R90 => (-y, x),
            Rotation::R180 => (-x, -y),
            Rotation::R270 => (y, -x),
        }
    }

    /// Step 90 degrees counterclockwise, wrapping 270 -> 0.
    #[inline]
    pub const fn rotated_ccw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Step 90 degrees clockwise, wrapping 0 -> 270.
    #[inline]
    pub const fn rotated_cw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R270,
            Rotation::R90 => Rotation::R0,
            Rotation::R180 => Rotation::R90,
            Rotation::R270 => Rotation::R180,
        }
    }

    /// Angle in degrees, for logging.
    #[inline]
    pub const fn degrees(self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation::R0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_maps_axes() {
        assert_eq!(Rotation::R90.rotate(1, 0), (0, 1));
        assert_eq!(Rotation::R90.rotate(0, 1), (-1, 0));
        assert_eq!(Rotation::R180.rotate(3, -2), (-3, 2));
        assert_eq!(Rotation::R270.rotate(1, 0), (0, -1));
    }

    #[test]
    fn identity_rotation_is_noop() {
        for x in -5..5 {
            for y in -5..5 {
                assert_eq!(Rotation::R0.rotate(x, y), (x, y));
            }
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for (x, y) in [(0, 0), (7, 3), (-4, 9), (123, -456)] {
            let mut p = (x, y);
            for _ in 0..4 {
                p = Rotation::R90.rotate(p.0, p.1);
            }
            assert_eq!(p, (x, y), "four 90 degree turns must return the input");
        }
    }

    #[test]
    fn ccw_and_cw_are_inverse() {
        for rotation in Rotation::ALL {
            assert_eq!(rotation.rotated_ccw().rotated_cw(), rotation);
            assert_eq!(rotation.rotated_cw().rotated_ccw(), rotation);
        }
    }

    #[test]
    fn ccw_wraps_past_270() {
        assert_eq!(Rotation::R270.rotated_ccw(), Rotation::R0);
        assert_eq!(Rotation::R0.rotated_cw(), Rotation::R270);
    }
}
