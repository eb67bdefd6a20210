//! Pointer smoothing.

/// Per-tick easing applied to the pointer.
pub const POINTER_EASING: f32 = 0.06;

/// Pointer position in normalized `[-1, 1]` coordinates, +y up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    target_x: f32,
    target_y: f32,
}

impl Pointer {
    pub fn set_target(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.target_x = x.clamp(-1.0, 1.0);
            self.target_y = y.clamp(-1.0, 1.0);
        }
    }

    /// Map a cursor position in host pixels to the normalized target.
    ///
    /// A zero-sized region leaves the target unchanged.
    pub fn set_target_from_cursor(&mut self, px: f64, py: f64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let x = (px / width as f64 - 0.5) * 2.0;
        let y = -(py / height as f64 - 0.5) * 2.0;
        self.set_target(x as f32, y as f32);
    }

    pub fn target(&self) -> [f32; 2] {
        [self.target_x, self.target_y]
    }

    pub fn update(&mut self) {
        self.x += (self.target_x - self.x) * POINTER_EASING;
        self.y += (self.target_y - self.y) * POINTER_EASING;
    }

    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

// =============================================================================
// Tests
// =============================================================================
