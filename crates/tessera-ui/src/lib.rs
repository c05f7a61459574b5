//! Retained widget groups on top of `tessera-engine`.
//!
//! A [`UiGroup`] owns a flat list of widgets sharing one pipeline and font.
//! Each frame the scene fans the group out over draw / process_input /
//! update; widgets report interactions as [`WidgetEvent`] values which the
//! group tags with IDs and hands back as [`UiEvent`]s. There is no callback
//! registration: scenes poll the returned events.

pub mod event;
pub mod group;
pub mod widget;
pub mod widgets;

pub use event::{UiEvent, WidgetEvent};
pub use group::UiGroup;
pub use widget::{GroupStyle, UiInput, Widget};
pub use widgets::{Button, Cycle, Label, Slider, Switch, TextBox};
