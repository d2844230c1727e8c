use crossterm::event::{KeyCode, KeyModifiers};

/// Every event the application loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessages {
    ButtonPress((KeyCode, KeyModifiers)),
    Resize(u16, u16),
}
