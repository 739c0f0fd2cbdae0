use crate::model::Vector2;

/// Pointer and scroll input for one frame.
///
/// Edge flags (`mouse_pressed`, `mouse_released`) and accumulators
/// (`mouse_delta`, `wheel`) cover only the current frame; `mouse_down` and
/// `mouse_position` persist between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Last known pointer position.
    pub mouse_position: Vector2,
    /// Pointer movement while the left button was held this frame.
    pub mouse_delta: Vector2,
    /// Left button currently held.
    pub mouse_down: bool,
    /// Left button went down this frame.
    pub mouse_pressed: bool,
    /// Left button went up this frame.
    pub mouse_released: bool,
    /// Where the current (or just finished) press started.
    pub press_origin: Option<Vector2>,
    /// Scroll amount in lines; positive scrolls towards the top.
    pub wheel: f32,
}

impl InputState {
    /// Reset per-frame edges before collecting a new frame's events.
    pub fn begin_frame(&mut self) {
        self.mouse_delta = Vector2::ZERO;
        self.mouse_pressed = false;
        self.mouse_released = false;
        self.wheel = 0.0;
        if !self.mouse_down {
            self.press_origin = None;
        }
    }

    /// Record a left-button press at `position`.
    pub fn press(&mut self, position: Vector2) {
        self.mouse_position = position;
        self.mouse_down = true;
        self.mouse_pressed = true;
        self.press_origin = Some(position);
    }

    /// Record pointer movement with the button held.
    pub fn drag_to(&mut self, position: Vector2) {
        self.mouse_delta += position - self.mouse_position;
        self.mouse_position = position;
    }

    /// Record a left-button release at `position`.
    pub fn release(&mut self, position: Vector2) {
        self.mouse_position = position;
        self.mouse_down = false;
        self.mouse_released = true;
    }

    /// Whether the press that is held (or was released this frame) started
    /// inside `bounds`.
    pub fn pressed_inside(&self, bounds: &crate::model::Rect) -> bool {
        self.press_origin.is_some_and(|origin| bounds.contains(origin))
    }
}
