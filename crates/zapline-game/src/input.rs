//! Input system with action-based mapping
//!
//! Translates raw keyboard events into game actions and exposes the
//! normalized horizontal axis the locomotion core consumes. The jump action
//! is edge-triggered: it appears in `just_pressed` for exactly one frame per
//! key press, and the input layer never clears the controller's jump latch.

use std::collections::{HashMap, HashSet};

use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move left (A / left arrow by default)
    MoveLeft,
    /// Move right (D / right arrow by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Pause/unpause (Escape by default)
    Pause,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    /// Normalized horizontal movement axis in [-1, 1]
    pub fn horizontal_axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.is_held(InputAction::MoveLeft) {
            axis -= 1.0;
        }
        if self.is_held(InputAction::MoveRight) {
            axis += 1.0;
        }
        axis
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.held.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Key to action mappings
    bindings: HashMap<KeyCode, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::Escape, InputAction::Pause);

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.bindings.insert(key, action);
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if let Some(action) = self.bindings.get_key_action(key_code) {
                match element_state {
                    ElementState::Pressed => {
                        if !self.state.held.contains(&action) {
                            self.state.just_pressed.insert(action);
                        }
                        self.state.held.insert(action);
                    }
                    ElementState::Released => {
                        self.state.held.remove(&action);
                        self.state.just_released.insert(action);
                    }
                }
            }
        }
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(
            bindings.get_key_action(KeyCode::KeyA),
            Some(InputAction::MoveLeft)
        );
        assert_eq!(
            bindings.get_key_action(KeyCode::Space),
            Some(InputAction::Jump)
        );
    }

    #[test]
    fn test_horizontal_axis() {
        let mut state = InputState::new();
        assert_eq!(state.horizontal_axis(), 0.0);

        state.held.insert(InputAction::MoveRight);
        assert_eq!(state.horizontal_axis(), 1.0);

        state.held.insert(InputAction::MoveLeft);
        assert_eq!(state.horizontal_axis(), 0.0);

        state.held.remove(&InputAction::MoveRight);
        assert_eq!(state.horizontal_axis(), -1.0);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut handler = InputHandler::new();

        handler.handle_keyboard(
            PhysicalKey::Code(KeyCode::Space),
            ElementState::Pressed,
        );
        assert!(handler.state.is_just_pressed(InputAction::Jump));

        // Key repeat while held must not re-trigger
        handler.end_frame();
        handler.handle_keyboard(
            PhysicalKey::Code(KeyCode::Space),
            ElementState::Pressed,
        );
        assert!(!handler.state.is_just_pressed(InputAction::Jump));
        assert!(handler.state.is_held(InputAction::Jump));
    }
}
