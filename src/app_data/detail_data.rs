use ratatui::text::Line;

use crate::ui::log_sanitizer;

/// What the detail pane is currently showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailKind {
    #[default]
    Empty,
    Logs,
    Inspect,
}

impl DetailKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Empty => "Details",
            Self::Logs => "Logs",
            Self::Inspect => "Inspect",
        }
    }
}

/// Detail pane model, a scrollable viewport over raw text
#[derive(Debug, Clone, Default)]
pub struct DetailData {
    kind: DetailKind,
    name: String,
    content: String,
    lines: Vec<Line<'static>>,
    offset: usize,
    height: usize,
    color: bool,
}

impl DetailData {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Replace the content wholesale, scroll position goes back to the top
    pub fn set_content(&mut self, kind: DetailKind, name: &str, content: String) {
        self.lines = if self.color {
            log_sanitizer::colorize_logs(&content)
        } else {
            log_sanitizer::remove_ansi(&content)
        };
        self.kind = kind;
        self.name = name.to_owned();
        self.content = content;
        self.offset = 0;
    }

    pub const fn kind(&self) -> DetailKind {
        self.kind
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Title for the details panel, e.g. "Logs - web 10/200"
    pub fn get_title(&self) -> String {
        match self.kind {
            DetailKind::Empty => self.kind.title().to_owned(),
            kind if self.lines.is_empty() => format!("{} - {}", kind.title(), self.name),
            kind => format!(
                "{} - {} {}/{}",
                kind.title(),
                self.name,
                self.offset + 1,
                self.lines.len()
            ),
        }
    }

    /// Set the number of visible rows, from the current layout
    pub fn set_height(&mut self, height: u16) {
        self.height = usize::from(height);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Only the lines that fit inside the viewport
    pub fn visible_lines(&self) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(self.offset)
            .take(self.height)
            .cloned()
            .collect()
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_start(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_end(&mut self) {
        self.offset = self.max_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> String {
        (1..=n)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn starts_empty() {
        let detail = DetailData::new(false);
        assert_eq!(detail.kind(), DetailKind::Empty);
        assert!(detail.content().is_empty());
        assert_eq!(detail.get_title(), "Details");
        assert!(detail.visible_lines().is_empty());
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut detail = DetailData::new(false);
        detail.set_height(4);
        detail.set_content(DetailKind::Logs, "web", numbered(10));
        detail.scroll_up(3);
        assert_eq!(detail.offset(), 0);
        detail.scroll_down(100);
        assert_eq!(detail.offset(), 6);
        assert_eq!(detail.visible_lines().len(), 4);
        assert_eq!(detail.visible_lines()[3].to_string(), "line 10");
        detail.scroll_up(4);
        assert_eq!(detail.offset(), 2);
        detail.scroll_start();
        assert_eq!(detail.offset(), 0);
        detail.scroll_down(4);
        assert_eq!(detail.offset(), 4);
        detail.scroll_end();
        assert_eq!(detail.offset(), 6);
    }

    #[test]
    fn new_content_resets_scroll() {
        let mut detail = DetailData::new(false);
        detail.set_height(2);
        detail.set_content(DetailKind::Logs, "web", numbered(10));
        detail.scroll_end();
        assert_ne!(detail.offset(), 0);
        detail.set_content(DetailKind::Inspect, "nginx:latest", numbered(3));
        assert_eq!(detail.offset(), 0);
        assert_eq!(detail.content(), "line 1\nline 2\nline 3");
        assert_eq!(detail.get_title(), "Inspect - nginx:latest 1/3");
    }

    #[test]
    fn scrolling_does_not_change_content() {
        let mut detail = DetailData::new(false);
        detail.set_height(1);
        detail.set_content(DetailKind::Logs, "web", numbered(3));
        detail.scroll_down(1);
        assert_eq!(detail.content(), numbered(3));
        assert_eq!(detail.visible_lines()[0].to_string(), "line 2");
    }

    #[test]
    fn growing_viewport_keeps_offset_valid() {
        let mut detail = DetailData::new(false);
        detail.set_height(2);
        detail.set_content(DetailKind::Logs, "web", numbered(5));
        detail.scroll_end();
        assert_eq!(detail.offset(), 3);
        detail.set_height(10);
        assert_eq!(detail.offset(), 0);
    }

    #[test]
    fn empty_output_title() {
        let mut detail = DetailData::new(false);
        detail.set_content(DetailKind::Logs, "web", String::new());
        assert_eq!(detail.get_title(), "Logs - web");
    }
}
