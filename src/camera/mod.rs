/// Camera system: a screen-space pan offset plus a cardinal yaw.
/// Arrow keys scroll the viewport; Q/E snap the world a quarter turn.
use crate::projection::Rotation;
use glam::IVec2;

/// Pixels the camera moves per fixed tick while a direction is held.
pub const PAN_STEP: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Top-left corner of the viewport in world screen pixels.
    pub offset: IVec2,
    /// Quarter-turn yaw applied to the whole world before projection.
    pub yaw: Rotation,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset: IVec2::ZERO,
            yaw: Rotation::R0,
        }
    }

    #[inline]
    pub fn pan(&mut self, delta: IVec2) {
        self.offset += delta;
    }

    /// Turn the world 90 degrees counterclockwise (the E key).
    pub fn rotate_ccw(&mut self) {
        self.yaw = self.yaw.rotated_ccw();
    }

    /// Turn the world 90 degrees clockwise (the Q key).
    pub fn rotate_cw(&mut self) {
        self.yaw = self.yaw.rotated_cw();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera controller - handles input state
pub struct CameraController {
    pub up_pressed: bool,
    pub down_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            up_pressed: false,
            down_pressed: false,
            left_pressed: false,
            right_pressed: false,
        }
    }

    /// Apply one fixed tick of held-key panning to the camera.
    /// Opposite keys cancel out.
    pub fn apply_to(&self, camera: &mut Camera) {
        let mut delta = IVec2::ZERO;

        if self.up_pressed {
            delta.y -= PAN_STEP;
        }
        if self.down_pressed {
            delta.y += PAN_STEP;
        }
        if self.left_pressed {
            delta.x -= PAN_STEP;
        }
        if self.right_pressed {
            delta.x += PAN_STEP;
        }

        camera.pan(delta);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_pan_one_pixel_per_tick() {
        let mut camera = Camera::new();
        let mut controller = CameraController::new();
        controller.right_pressed = true;
        controller.down_pressed = true;

        for _ in 0..10 {
            controller.apply_to(&mut camera);
        }
        assert_eq!(camera.offset, IVec2::new(10, 10));

        controller.left_pressed = true; // cancels right
        controller.apply_to(&mut camera);
        assert_eq!(camera.offset, IVec2::new(10, 11));
    }

    #[test]
    fn rotate_commands_wrap_around() {
        let mut camera = Camera::new();
        for _ in 0..4 {
            camera.rotate_ccw();
        }
        assert_eq!(camera.yaw, Rotation::R0, "four E presses are a full turn");

        camera.rotate_cw();
        assert_eq!(camera.yaw, Rotation::R270, "Q from 0 wraps to 270");
    }
}
