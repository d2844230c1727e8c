use ratatui::style::{Color, Modifier, Style};

/// Every colour & style used when drawing, passed into the draw functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub header: Style,
    pub selected: Style,
    pub key: Style,
    pub key_description: Style,
    pub popup: Style,
    pub error: Style,
    colored_state: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Indexed(241)),
            border_focused: Style::default().fg(Color::Indexed(99)),
            title: Style::default()
                .fg(Color::Indexed(205))
                .add_modifier(Modifier::BOLD),
            header: Style::default()
                .fg(Color::Indexed(39))
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(Color::Indexed(42))
                .add_modifier(Modifier::BOLD),
            key: Style::default().fg(Color::Indexed(99)),
            key_description: Style::default().fg(Color::Indexed(241)),
            popup: Style::default().bg(Color::Magenta).fg(Color::Black),
            error: Style::default().bg(Color::Red).fg(Color::White),
            colored_state: true,
        }
    }
}

impl Theme {
    /// No colours at all, focus & selection shown with modifiers only
    pub fn monochrome() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            border: Style::default(),
            border_focused: bold,
            title: bold,
            header: bold,
            selected: Style::default().add_modifier(Modifier::REVERSED),
            key: bold,
            key_description: Style::default(),
            popup: Style::default().add_modifier(Modifier::REVERSED),
            error: Style::default().add_modifier(Modifier::REVERSED),
            colored_state: false,
        }
    }

    pub const fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }

    /// Colour for a container state, which is free text from the runtime
    pub fn state_style(&self, state: &str) -> Style {
        if !self.colored_state {
            return Style::default();
        }
        let color = match state.to_lowercase().as_str() {
            "running" | "healthy" => Color::Green,
            "paused" => Color::Yellow,
            "restarting" | "created" => Color::Blue,
            "exited" | "dead" | "removing" => Color::Red,
            _ => Color::Reset,
        };
        Style::default().fg(color)
    }
}

pub mod log_sanitizer {
    use cansi::{v3::categorise_text, Color as CansiColor, Intensity};
    use ratatui::{
        style::{Color, Modifier, Style},
        text::{Line, Span},
    };

    /// Tabs expanded, carriage returns removed, so the viewport width matches the text width
    fn normalise(input: &str) -> String {
        input.replace('\t', "    ").replace('\r', "")
    }

    /// Attempt to colorize the given string to ratatui standards
    pub fn colorize_logs(input: &str) -> Vec<Line<'static>> {
        input
            .lines()
            .map(|line| {
                let line = normalise(line);
                Line::from(
                    categorise_text(&line)
                        .into_iter()
                        .map(|i| {
                            let mut style = Style::default()
                                .fg(i.fg.map_or(Color::Reset, color_ansi_to_tui))
                                .bg(i.bg.map_or(Color::Reset, color_ansi_to_tui));
                            match i.intensity {
                                Some(Intensity::Bold) => style = style.add_modifier(Modifier::BOLD),
                                Some(Intensity::Faint) => style = style.add_modifier(Modifier::DIM),
                                _ => (),
                            }
                            if i.italic == Some(true) {
                                style = style.add_modifier(Modifier::ITALIC);
                            }
                            if i.underline == Some(true) {
                                style = style.add_modifier(Modifier::UNDERLINED);
                            }
                            if i.reversed == Some(true) {
                                style = style.add_modifier(Modifier::REVERSED);
                            }
                            if i.strikethrough == Some(true) {
                                style = style.add_modifier(Modifier::CROSSED_OUT);
                            }
                            Span::styled(i.text.to_owned(), style)
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    /// Remove all ansi formatting from a given string
    pub fn remove_ansi(input: &str) -> Vec<Line<'static>> {
        input
            .lines()
            .map(|line| {
                let line = normalise(line);
                Line::from(
                    categorise_text(&line)
                        .into_iter()
                        .map(|i| i.text)
                        .collect::<String>(),
                )
            })
            .collect()
    }

    /// Change from ansi to ratatui colors
    const fn color_ansi_to_tui(color: CansiColor) -> Color {
        match color {
            CansiColor::Black => Color::Black,
            CansiColor::Red => Color::Red,
            CansiColor::Green => Color::Green,
            CansiColor::Yellow => Color::Yellow,
            CansiColor::Blue => Color::Blue,
            CansiColor::Magenta => Color::Magenta,
            CansiColor::Cyan => Color::Cyan,
            CansiColor::White => Color::White,
            CansiColor::BrightBlack => Color::DarkGray,
            CansiColor::BrightRed => Color::LightRed,
            CansiColor::BrightGreen => Color::LightGreen,
            CansiColor::BrightYellow => Color::LightYellow,
            CansiColor::BrightBlue => Color::LightBlue,
            CansiColor::BrightMagenta => Color::LightMagenta,
            CansiColor::BrightCyan => Color::LightCyan,
            CansiColor::BrightWhite => Color::Gray,
        }
    }
}
