use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tracing::error;

use crate::{
    app_data::AppData,
    app_error::AppError,
    docker_data::CommandRunner,
    input_handler::{InputHandler, InputMessages},
};

pub use self::color_match::*;
pub use self::gui_state::{GuiState, NavPanel, Status};

mod color_match;
mod draw_blocks;
mod gui_state;
pub mod layout;

pub struct Ui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl Ui {
    /// Setup the terminal, execute the drawing loop until a quit key is pressed, then restore the terminal
    pub fn create<R: CommandRunner>(input_handler: &mut InputHandler<R>, theme: Theme) -> Result<()> {
        let terminal = match Self::setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                disable_raw_mode().ok();
                return Err(e.context("unable to initialise terminal"));
            }
        };
        let mut ui = Self { terminal, theme };
        let output = ui.gui_loop(input_handler);
        if let Err(e) = ui.reset_terminal() {
            error!("{e}");
        }
        Ok(output?)
    }

    /// Setup the terminal for full-screen drawing mode
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    /// reset the terminal back to default settings
    pub fn reset_terminal(&mut self) -> Result<()> {
        self.terminal.clear()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("unable to leave alternate screen")?;
        disable_raw_mode()?;
        Ok(self.terminal.show_cursor()?)
    }

    /// The loop for drawing the main UI to the terminal
    /// Blocks on the next event, so nothing is redrawn until there is something new to draw
    fn gui_loop<R: CommandRunner>(&mut self, input_handler: &mut InputHandler<R>) -> Result<(), AppError> {
        while input_handler.is_running() {
            let (app_data, gui_state) = input_handler.draw_state();
            if self
                .terminal
                .draw(|frame| draw_frame(frame, app_data, gui_state, &self.theme))
                .is_err()
            {
                return Err(AppError::Terminal);
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    input_handler.handle(InputMessages::ButtonPress((key.code, key.modifiers)));
                }
                Ok(Event::Resize(width, height)) => {
                    input_handler.handle(InputMessages::Resize(width, height));
                }
                Ok(_) => (),
                Err(e) => {
                    error!("{e}");
                    return Err(AppError::Terminal);
                }
            }
        }
        Ok(())
    }
}

/// Draw the main ui to a frame of the terminal
/// Focus styling is worked out here, every frame, from the current NavPanel
pub fn draw_frame(f: &mut Frame, app_data: &mut AppData, gui_state: &GuiState, theme: &Theme) {
    let whole = f.area();
    // The layout may lag behind the real frame until the resize event has been handled
    let fit = |area: Rect| Some(area.intersection(whole)).filter(|i| !i.is_empty());
    let areas = gui_state.get_layout().areas();

    if let Some(area) = fit(areas.containers) {
        draw_blocks::containers(f, area, app_data, gui_state, theme);
    }
    if let Some(area) = fit(areas.images) {
        draw_blocks::images(f, area, app_data, gui_state, theme);
    }
    if let Some(area) = fit(areas.details) {
        draw_blocks::details(f, area, app_data, gui_state, theme);
    }
    if let Some(area) = fit(areas.key_bar) {
        draw_blocks::key_bar(f, area, app_data, gui_state, theme);
    }

    if gui_state.status_contains(&[Status::Help]) {
        draw_blocks::help_box(f, theme);
    }

    if let Some(error) = app_data.get_error() {
        draw_blocks::error(f, error, theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, style::Color};

    use super::*;
    use crate::{
        app_data::{AppData, DetailKind},
        app_error::AppError,
        parse_args::CliArgs,
    };

    fn app_data() -> AppData {
        let mut app_data = AppData::default(CliArgs::default());
        app_data.container_data.set_containers(vec![
            serde_json::from_str(
                r#"{"ID":"c1","Names":"web","Image":"nginx:latest","Status":"Up 2 hours","State":"running"}"#,
            )
            .unwrap(),
            serde_json::from_str(
                r#"{"ID":"c2","Names":"db","Image":"postgres:16","Status":"Exited (0)","State":"exited"}"#,
            )
            .unwrap(),
        ]);
        app_data
    }

    /// Render a single frame, returning the buffer one String per row
    fn render(
        app_data: &mut AppData,
        gui_state: &GuiState,
        theme: &Theme,
        size: (u16, u16),
    ) -> (Vec<String>, ratatui::buffer::Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(size.0, size.1)).unwrap();
        terminal
            .draw(|f| draw_frame(f, app_data, gui_state, theme))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let rows = buffer
            .content()
            .chunks(usize::from(size.0))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect();
        (rows, buffer)
    }

    #[test]
    fn draws_every_panel() {
        let mut app_data = app_data();
        let gui_state = GuiState::new(100, 30);
        let (rows, _) = render(&mut app_data, &gui_state, &Theme::default(), (100, 30));
        let screen = rows.join("\n");
        assert!(screen.contains("Containers 1/2"));
        assert!(screen.contains("Images"));
        assert!(screen.contains("no images found"));
        assert!(screen.contains("Details"));
        assert!(screen.contains("Select a container or image"));
        assert!(screen.contains("web"));
        assert!(screen.contains("db"));
        assert!(rows[29].contains("docker"));
        assert!(rows[29].contains("logs"));
    }

    #[test]
    fn focus_border_follows_nav() {
        let theme = Theme::default();
        let mut app_data = app_data();
        let mut gui_state = GuiState::new(80, 24);
        let areas = gui_state.get_layout().areas();

        let (_, buffer) = render(&mut app_data, &gui_state, &theme, (80, 24));
        assert_eq!(buffer[(areas.containers.x, areas.containers.y)].fg, theme.border_focused.fg.unwrap_or(Color::Reset));
        assert_eq!(buffer[(areas.details.x, areas.details.y)].fg, theme.border.fg.unwrap_or(Color::Reset));

        gui_state.set_nav(NavPanel::Details);
        let (_, buffer) = render(&mut app_data, &gui_state, &theme, (80, 24));
        assert_eq!(buffer[(areas.containers.x, areas.containers.y)].fg, theme.border.fg.unwrap_or(Color::Reset));
        assert_eq!(buffer[(areas.details.x, areas.details.y)].fg, theme.border_focused.fg.unwrap_or(Color::Reset));
    }

    #[test]
    fn draws_detail_content() {
        let mut app_data = app_data();
        app_data
            .detail_data
            .set_content(DetailKind::Logs, "web", String::from("GET / 200\nGET /health 200"));
        app_data.detail_data.set_height(21);
        let mut gui_state = GuiState::new(80, 24);
        gui_state.set_nav(NavPanel::Details);
        let (rows, _) = render(&mut app_data, &gui_state, &Theme::default(), (80, 24));
        let screen = rows.join("\n");
        assert!(screen.contains("Logs - web 1/2"));
        assert!(screen.contains("GET /health 200"));
        assert!(rows[23].contains("scroll"));
    }

    #[test]
    fn draws_error_popup() {
        let mut app_data = app_data();
        app_data.set_error(AppError::ImageList(String::from("permission denied")));
        let gui_state = GuiState::new(80, 24);
        let (rows, _) = render(&mut app_data, &gui_state, &Theme::monochrome(), (80, 24));
        let screen = rows.join("\n");
        assert!(screen.contains("Unable to list images:"));
        assert!(screen.contains("permission denied"));
        assert!(screen.contains("( c ) to clear error"));
    }

    #[test]
    fn draws_help_popup() {
        let mut app_data = app_data();
        let mut gui_state = GuiState::new(100, 40);
        gui_state.status_push(Status::Help);
        let (rows, _) = render(&mut app_data, &gui_state, &Theme::default(), (100, 40));
        assert!(rows.join("\n").contains("refresh containers & images"));
    }

    #[test]
    fn stale_layout_does_not_panic() {
        let mut app_data = app_data();
        let gui_state = GuiState::new(200, 60);
        render(&mut app_data, &gui_state, &Theme::default(), (30, 8));
        let gui_state = GuiState::new(2, 2);
        render(&mut app_data, &gui_state, &Theme::default(), (2, 2));
    }
}
