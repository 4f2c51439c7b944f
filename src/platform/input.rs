//! Edge-detecting input adapter
//!
//! Device listeners report key down/up between ticks. The adapter keeps held
//! controls as levels and turns each confirm press into a single one-shot
//! command, so keyboard auto-repeat never fires begin/restart twice.

use crate::sim::TickInput;

/// Logical controls, independent of device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// ENTER/SPACE or the on-screen start button
    Confirm,
    Thrust,
    RotateLeft,
    RotateRight,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Enter" | "NumpadEnter" | "Space" => Some(Key::Confirm),
            "ArrowUp" | "KeyW" => Some(Key::Thrust),
            "ArrowLeft" | "KeyA" => Some(Key::RotateLeft),
            "ArrowRight" | "KeyD" => Some(Key::RotateRight),
            _ => None,
        }
    }
}

/// Accumulates device events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    thrust: bool,
    rotate_left: bool,
    rotate_right: bool,
    confirm_held: bool,
    confirm_pending: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Confirm => {
                // Auto-repeat arrives as repeated downs without an up
                if !self.confirm_held {
                    self.confirm_pending = true;
                }
                self.confirm_held = true;
            }
            Key::Thrust => self.thrust = true,
            Key::RotateLeft => self.rotate_left = true,
            Key::RotateRight => self.rotate_right = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Confirm => self.confirm_held = false,
            Key::Thrust => self.thrust = false,
            Key::RotateLeft => self.rotate_left = false,
            Key::RotateRight => self.rotate_right = false,
        }
    }

    /// Release everything (focus lost, touch cancelled)
    pub fn release_all(&mut self) {
        *self = Self {
            confirm_pending: self.confirm_pending,
            ..Self::default()
        };
    }

    /// Snapshot for the next tick; consumes the pending confirm
    pub fn take_tick_input(&mut self) -> TickInput {
        let confirm = std::mem::take(&mut self.confirm_pending);
        TickInput {
            thrust: self.thrust,
            rotate_left: self.rotate_left,
            rotate_right: self.rotate_right,
            begin: confirm,
            restart: confirm,
        }
    }
}
