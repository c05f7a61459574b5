/// Interaction reported by a widget.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WidgetEvent {
    /// Cursor left a button, or a text box lost focus.
    Unselected,
    /// Cursor entered a button, or a text box gained focus.
    Selected,
    /// A button completed a press-release inside its bounds.
    Clicked,
    /// A switch turned off.
    Off,
    /// A switch turned on.
    On,
    /// A slider or cycle committed a new value.
    Set,
    /// Enter was pressed in a focused text box.
    Entered,
}

/// A widget event tagged with its group and component IDs.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UiEvent {
    pub group: u32,
    pub cmpt: u32,
    pub event: WidgetEvent,
}
