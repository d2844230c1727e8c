use crossterm::event::{KeyCode, KeyModifiers};
use tracing::debug;

pub use message::InputMessages;

use crate::{
    app_data::AppData,
    docker_data::{CommandRunner, DockerData, DockerMessage},
    ui::{GuiState, NavPanel, Status},
};

mod message;

/// Owns all application state, and applies every input event to it, strictly in arrival order
#[derive(Debug)]
pub struct InputHandler<R: CommandRunner> {
    app_data: AppData,
    docker: DockerData<R>,
    gui_state: GuiState,
    is_running: bool,
}

impl<R: CommandRunner> InputHandler<R> {
    /// Initialize self, fetching containers & images before the first frame is drawn
    pub fn init(app_data: AppData, docker: DockerData<R>, size: (u16, u16)) -> Self {
        let mut inner = Self {
            app_data,
            docker,
            gui_state: GuiState::new(size.0, size.1),
            is_running: true,
        };
        inner.resize(size.0, size.1);
        inner.send_docker(DockerMessage::Update);
        inner
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    #[cfg(test)]
    pub const fn app_data(&self) -> &AppData {
        &self.app_data
    }

    #[cfg(test)]
    pub const fn gui_state(&self) -> &GuiState {
        &self.gui_state
    }

    #[cfg(test)]
    pub const fn docker(&self) -> &DockerData<R> {
        &self.docker
    }

    /// Everything the draw functions need, table state has to be mutable for ratatui
    pub fn draw_state(&mut self) -> (&mut AppData, &GuiState) {
        (&mut self.app_data, &self.gui_state)
    }

    pub fn handle(&mut self, message: InputMessages) {
        match message {
            InputMessages::ButtonPress((key_code, key_modifier)) => {
                self.button_press(key_code, key_modifier);
            }
            InputMessages::Resize(width, height) => self.resize(width, height),
        }
    }

    /// Recalculate the layout only, data is refreshed solely by an explicit request
    fn resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "resize");
        self.gui_state.set_layout(width, height);
        self.app_data
            .detail_data
            .set_height(self.gui_state.get_layout().detail_height);
    }

    /// Execute a docker message, and show the error popup if it failed
    fn send_docker(&mut self, message: DockerMessage) {
        debug!(?message, "docker message");
        self.docker.handle_message(message, &mut self.app_data);
        if self.app_data.get_error().is_some() {
            self.gui_state.status_push(Status::Error);
        }
    }

    fn quit(&mut self) {
        self.is_running = false;
    }

    /// Handle any keyboard button events
    fn button_press(&mut self, key_code: KeyCode, key_modifier: KeyModifiers) {
        // Always just quit on Ctrl + c/C or q/Q
        let is_c = || key_code == KeyCode::Char('c') || key_code == KeyCode::Char('C');
        let is_q = || key_code == KeyCode::Char('q') || key_code == KeyCode::Char('Q');
        if key_modifier == KeyModifiers::CONTROL && is_c() || is_q() {
            self.quit();
            return;
        }

        if self.gui_state.status_contains(&[Status::Error]) {
            if let KeyCode::Char('c' | 'C') = key_code {
                self.app_data.remove_error();
                self.gui_state.status_del(Status::Error);
            }
        } else if self.gui_state.status_contains(&[Status::Help]) {
            match key_code {
                KeyCode::Char('h' | 'H') | KeyCode::Esc | KeyCode::Enter => {
                    self.gui_state.status_del(Status::Help);
                }
                _ => (),
            }
        } else {
            match key_code {
                KeyCode::Tab => self.gui_state.next_panel(),
                KeyCode::BackTab => self.gui_state.previous_panel(),
                KeyCode::Enter => self.enter(),
                KeyCode::Char('h' | 'H') => self.gui_state.status_push(Status::Help),
                KeyCode::Char('r' | 'R') => self.send_docker(DockerMessage::Update),
                KeyCode::Up | KeyCode::Char('k') => self.previous(1),
                KeyCode::Down | KeyCode::Char('j') => self.next(1),
                KeyCode::PageUp => self.previous(self.page_size()),
                KeyCode::PageDown => self.next(self.page_size()),
                KeyCode::Home | KeyCode::Char('g') => self.start(),
                KeyCode::End | KeyCode::Char('G') => self.end(),
                _ => (),
            }
        }
    }

    /// Show logs or inspect output for the selected row, then focus the details panel
    /// Does nothing if the focused list is empty, or details already has focus
    fn enter(&mut self) {
        let message = match self.gui_state.get_current_nav() {
            NavPanel::Containers => self
                .app_data
                .container_data
                .selected_container()
                .map(|i| DockerMessage::Logs(i.id.clone())),
            NavPanel::Images => self
                .app_data
                .image_data
                .selected_image()
                .map(|i| DockerMessage::Inspect(i.id.clone())),
            NavPanel::Details => None,
        };
        if let Some(message) = message {
            self.send_docker(message);
            self.gui_state.set_nav(NavPanel::Details);
        }
    }

    /// Number of visible rows in the focused panel
    fn page_size(&self) -> usize {
        let layout = self.gui_state.get_layout();
        let rows = match self.gui_state.get_current_nav() {
            NavPanel::Containers => layout.container_rows(),
            NavPanel::Images => layout.image_rows(),
            NavPanel::Details => layout.detail_height,
        };
        usize::from(rows.max(1))
    }

    /// Change state to next, depending which panel is currently in focus
    fn next(&mut self, n: usize) {
        match self.gui_state.get_current_nav() {
            NavPanel::Containers => self.app_data.container_data.containers_forward(n),
            NavPanel::Images => self.app_data.image_data.images_forward(n),
            NavPanel::Details => self.app_data.detail_data.scroll_down(n),
        }
    }

    /// Change state to previous, depending which panel is currently in focus
    fn previous(&mut self, n: usize) {
        match self.gui_state.get_current_nav() {
            NavPanel::Containers => self.app_data.container_data.containers_back(n),
            NavPanel::Images => self.app_data.image_data.images_back(n),
            NavPanel::Details => self.app_data.detail_data.scroll_up(n),
        }
    }

    fn start(&mut self) {
        match self.gui_state.get_current_nav() {
            NavPanel::Containers => self.app_data.container_data.containers_start(),
            NavPanel::Images => self.app_data.image_data.images_start(),
            NavPanel::Details => self.app_data.detail_data.scroll_start(),
        }
    }

    fn end(&mut self) {
        match self.gui_state.get_current_nav() {
            NavPanel::Containers => self.app_data.container_data.containers_end(),
            NavPanel::Images => self.app_data.image_data.images_end(),
            NavPanel::Details => self.app_data.detail_data.scroll_end(),
        }
    }
}
