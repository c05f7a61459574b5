//! Window runtime: winit event loop, frame driver, buffered window commands.

mod runtime;

pub use runtime::App;

/// Buffered window requests.
///
/// Scene callbacks cannot touch the window directly; they queue commands here
/// and the runtime applies them after the callback returns.
#[derive(Default)]
pub struct WindowCommands {
    commands: Vec<WindowCommand>,
}

pub(crate) enum WindowCommand {
    SetTitle(String),
    SetDims(u32, u32),
    SetFullscreen(bool),
    Exit,
}

impl WindowCommands {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(WindowCommand::SetTitle(title.into()));
    }

    /// Requests a new inner size in logical pixels.
    pub fn set_dims(&mut self, width: u32, height: u32) {
        self.commands.push(WindowCommand::SetDims(width, height));
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.commands.push(WindowCommand::SetFullscreen(fullscreen));
    }

    /// Asks the runtime to shut down after this frame.
    pub fn exit(&mut self) {
        self.commands.push(WindowCommand::Exit);
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, WindowCommand> {
        self.commands.drain(..)
    }
}
