use std::collections::HashMap;

/// Index of a connected game controller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GamepadId(pub u32);

/// Controller button identifier, laid out like a standard dual-stick pad.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GamepadButton {
    South,
    East,
    West,
    North,
    LeftBumper,
    RightBumper,
    Back,
    Start,
    Guide,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

/// Controller axis identifier. Values are normalized to -1..1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GamepadAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}

/// Raw controller event fed to [`InputState`](super::InputState) by whatever
/// backend the host application wires up.
#[derive(Debug, Clone, PartialEq)]
pub enum GamepadEvent {
    Connected(GamepadId),
    Disconnected(GamepadId),
    Button {
        pad: GamepadId,
        button: GamepadButton,
        down: bool,
    },
    Axis {
        pad: GamepadId,
        axis: GamepadAxis,
        value: f32,
    },
}

/// Per-controller held-button and axis state, with a previous-tick snapshot
/// for edge queries.
#[derive(Debug, Default, Clone)]
pub struct GamepadState {
    pub(super) buttons: HashMap<GamepadButton, bool>,
    pub(super) prev_buttons: HashMap<GamepadButton, bool>,
    pub(super) axes: HashMap<GamepadAxis, f32>,
}

impl GamepadState {
    pub fn button_down(&self, button: GamepadButton) -> bool {
        self.buttons.get(&button).copied().unwrap_or(false)
    }

    pub fn button_pressed(&self, button: GamepadButton) -> bool {
        self.button_down(button) && !self.prev_buttons.get(&button).copied().unwrap_or(false)
    }

    pub fn button_released(&self, button: GamepadButton) -> bool {
        !self.button_down(button) && self.prev_buttons.get(&button).copied().unwrap_or(false)
    }

    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }

    pub(super) fn snapshot(&mut self) {
        self.prev_buttons = self.buttons.clone();
    }
}
