use std::collections::{HashMap, HashSet, VecDeque};

use crate::coords::Vec2;

use super::gamepad::{GamepadEvent, GamepadId, GamepadState};
use super::types::{Key, MouseButton};

/// Polled input state for a single window.
///
/// `snapshot` must run once at the start of every fixed update; it rolls the
/// current state into the previous-tick copy and clears the per-tick streams
/// (typed text, wheel delta, disconnect queue is drained separately).
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashSet<Key>,
    prev_keys: HashSet<Key>,
    buttons: HashSet<MouseButton>,
    prev_buttons: HashSet<MouseButton>,

    /// Cursor position in logical pixels, bottom-left origin.
    mouse_pos: Vec2,
    prev_mouse_pos: Vec2,
    wheel: f32,
    typed: String,

    pads: HashMap<GamepadId, GamepadState>,
    disconnects: VecDeque<GamepadId>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls current state into the previous-tick snapshot and clears the
    /// per-tick streams.
    pub fn snapshot(&mut self) {
        self.prev_keys = self.keys.clone();
        self.prev_buttons = self.buttons.clone();
        self.prev_mouse_pos = self.mouse_pos;
        self.wheel = 0.0;
        self.typed.clear();
        for pad in self.pads.values_mut() {
            pad.snapshot();
        }
    }

    // ── event intake (called by the runtime) ──────────────────────────────

    pub fn apply_key(&mut self, key: Key, down: bool) {
        if down {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    pub fn apply_button(&mut self, button: MouseButton, down: bool) {
        if down {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(&button);
        }
    }

    pub fn apply_mouse_move(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
    }

    pub fn apply_wheel(&mut self, delta: f32) {
        self.wheel += delta;
    }

    pub fn apply_text(&mut self, text: &str) {
        // Keep control characters out of the typed stream; widgets handle
        // backspace and enter through key state.
        self.typed.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Stuck-state guard: focus loss releases everything.
    pub fn apply_focus_lost(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }

    pub fn apply_gamepad(&mut self, ev: GamepadEvent) {
        match ev {
            GamepadEvent::Connected(id) => {
                log::info!("gamepad {} connected", id.0);
                self.pads.entry(id).or_default();
            }
            GamepadEvent::Disconnected(id) => {
                log::info!("gamepad {} disconnected", id.0);
                self.pads.remove(&id);
                self.disconnects.push_back(id);
            }
            GamepadEvent::Button { pad, button, down } => {
                self.pads.entry(pad).or_default().buttons.insert(button, down);
            }
            GamepadEvent::Axis { pad, axis, value } => {
                self.pads.entry(pad).or_default().axes.insert(axis, value);
            }
        }
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    pub fn key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// True for the single tick in which the key went down.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key) && !self.prev_keys.contains(&key)
    }

    /// True for the single tick in which the key came up.
    pub fn key_released(&self, key: Key) -> bool {
        !self.keys.contains(&key) && self.prev_keys.contains(&key)
    }

    /// Printable characters committed since the last snapshot.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    // ── mouse ─────────────────────────────────────────────────────────────

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button) && !self.prev_buttons.contains(&button)
    }

    pub fn button_released(&self, button: MouseButton) -> bool {
        !self.buttons.contains(&button) && self.prev_buttons.contains(&button)
    }

    /// Cursor position in logical pixels, bottom-left origin.
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    pub fn mouse_moved(&self) -> bool {
        self.mouse_pos != self.prev_mouse_pos
    }

    /// Vertical wheel travel since the last snapshot, in lines.
    pub fn wheel(&self) -> f32 {
        self.wheel
    }

    // ── gamepads ──────────────────────────────────────────────────────────

    pub fn gamepad(&self, id: GamepadId) -> Option<&GamepadState> {
        self.pads.get(&id)
    }

    pub fn gamepads(&self) -> impl Iterator<Item = (GamepadId, &GamepadState)> {
        self.pads.iter().map(|(id, s)| (*id, s))
    }

    /// Pops the next controller lost since the last drain, if any.
    ///
    /// Scenes poll this once per update so a disconnect can pause the game
    /// even when it happens between ticks.
    pub fn next_disconnect(&mut self) -> Option<GamepadId> {
        self.disconnects.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::gamepad::GamepadButton;

    // ── edge queries ──────────────────────────────────────────────────────

    #[test]
    fn press_reads_for_one_tick() {
        let mut s = InputState::new();
        s.snapshot();
        s.apply_key(Key::Space, true);
        assert!(s.key_pressed(Key::Space));
        assert!(s.key_down(Key::Space));

        s.snapshot();
        assert!(!s.key_pressed(Key::Space));
        assert!(s.key_down(Key::Space));
    }

    #[test]
    fn release_reads_for_one_tick() {
        let mut s = InputState::new();
        s.apply_key(Key::A, true);
        s.snapshot();
        s.apply_key(Key::A, false);
        assert!(s.key_released(Key::A));
        s.snapshot();
        assert!(!s.key_released(Key::A));
    }

    #[test]
    fn button_edges_mirror_keys() {
        let mut s = InputState::new();
        s.snapshot();
        s.apply_button(MouseButton::Left, true);
        assert!(s.button_pressed(MouseButton::Left));
        s.snapshot();
        s.apply_button(MouseButton::Left, false);
        assert!(s.button_released(MouseButton::Left));
    }

    // ── per-tick streams ──────────────────────────────────────────────────

    #[test]
    fn typed_text_clears_on_snapshot() {
        let mut s = InputState::new();
        s.apply_text("ab");
        s.apply_text("c\u{8}");
        assert_eq!(s.typed(), "abc");
        s.snapshot();
        assert_eq!(s.typed(), "");
    }

    #[test]
    fn wheel_accumulates_within_tick() {
        let mut s = InputState::new();
        s.apply_wheel(1.0);
        s.apply_wheel(0.5);
        assert_eq!(s.wheel(), 1.5);
        s.snapshot();
        assert_eq!(s.wheel(), 0.0);
    }

    #[test]
    fn mouse_moved_compares_snapshots() {
        let mut s = InputState::new();
        s.snapshot();
        assert!(!s.mouse_moved());
        s.apply_mouse_move(Vec2::new(3.0, 4.0));
        assert!(s.mouse_moved());
        s.snapshot();
        assert!(!s.mouse_moved());
    }

    // ── focus loss ────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_releases_held_input() {
        let mut s = InputState::new();
        s.apply_key(Key::W, true);
        s.apply_button(MouseButton::Left, true);
        s.apply_focus_lost();
        assert!(!s.key_down(Key::W));
        assert!(!s.button_down(MouseButton::Left));
    }

    // ── gamepads ──────────────────────────────────────────────────────────

    #[test]
    fn gamepad_connect_and_buttons() {
        let mut s = InputState::new();
        let id = GamepadId(0);
        s.apply_gamepad(GamepadEvent::Connected(id));
        s.snapshot();
        s.apply_gamepad(GamepadEvent::Button {
            pad: id,
            button: GamepadButton::South,
            down: true,
        });
        let pad = s.gamepad(id).unwrap();
        assert!(pad.button_pressed(GamepadButton::South));
    }

    #[test]
    fn disconnect_queue_drains_once() {
        let mut s = InputState::new();
        let id = GamepadId(2);
        s.apply_gamepad(GamepadEvent::Connected(id));
        s.apply_gamepad(GamepadEvent::Disconnected(id));
        assert!(s.gamepad(id).is_none());
        assert_eq!(s.next_disconnect(), Some(id));
        assert_eq!(s.next_disconnect(), None);
    }
}
