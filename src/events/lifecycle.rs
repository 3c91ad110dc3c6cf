//! Lifecycle notifications published by the shell.

use std::fmt;

/// Tag of a lifecycle occurrence. Events carry no payload; subscribers read
/// whatever state they need from the objects they captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The player chose "New Game" on the menu.
    NewGame,
    /// The player chose "Load Game". Nothing subscribes yet.
    LoadGame,
    /// The player opened the settings screen. Nothing subscribes yet.
    Settings,
    /// The drawable area changed size.
    WindowResized,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::NewGame => "NewGame",
            EventKind::LoadGame => "LoadGame",
            EventKind::Settings => "Settings",
            EventKind::WindowResized => "WindowResized",
        };
        f.write_str(name)
    }
}
