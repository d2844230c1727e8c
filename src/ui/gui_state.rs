use std::collections::HashSet;

use super::layout::LayoutDimensions;

pub mod nav;

pub use nav::NavPanel;

/// The application gui state can be in multiple of these states at the same time
/// The input handler operates differently depending upon current Status
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Status {
    Help,
    Error,
}

/// Global gui_state, owned by the input handler
#[derive(Debug, Default, Clone)]
pub struct GuiState {
    nav: NavPanel,
    status: HashSet<Status>,
    layout: LayoutDimensions,
}

impl GuiState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            layout: LayoutDimensions::new(width, height),
            ..Self::default()
        }
    }

    /// nav
    pub const fn get_current_nav(&self) -> NavPanel {
        self.nav
    }

    pub fn set_nav(&mut self, nav_panel: NavPanel) {
        self.nav = nav_panel;
    }

    pub fn next_panel(&mut self) {
        self.nav = self.nav.next();
    }

    pub fn previous_panel(&mut self) {
        self.nav = self.nav.previous();
    }

    /// Check if the given panel currently has focus
    pub fn is_selected(&self, nav_panel: NavPanel) -> bool {
        self.nav == nav_panel
    }

    /// layout
    pub const fn get_layout(&self) -> LayoutDimensions {
        self.layout
    }

    /// Replace the layout entirely, from a new terminal size
    pub fn set_layout(&mut self, width: u16, height: u16) {
        self.layout = LayoutDimensions::new(width, height);
    }

    /// Check if the current gui_status contains any of the given status'
    pub fn status_contains(&self, status: &[Status]) -> bool {
        status.iter().any(|i| self.status.contains(i))
    }

    /// Remove a gui_status from the current gui_status HashSet
    pub fn status_del(&mut self, status: Status) {
        self.status.remove(&status);
    }

    /// Insert a gui_status into the current gui_status HashSet
    pub fn status_push(&mut self, status: Status) {
        self.status.insert(status);
    }
}
