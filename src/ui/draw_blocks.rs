use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::{
    app_data::{AppData, ContainerItem, DetailKind, ImageItem},
    app_error::AppError,
};

use super::{GuiState, NavPanel, Theme};

const LOGO: &str = r#"    .___.________
  __| _/|   ____/______
 / __ | |____  \\_  __ \
/ /_/ | /       \|  | \/
\____ |/______  /|__|
     \/       \/        "#;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
const ELLIPSIS: char = '…';

/// Widest line, in chars
fn max_line_width(text: &str) -> usize {
    text.lines()
        .map(|i| i.chars().count())
        .max()
        .unwrap_or_default()
}

/// Fit text into a column, leaving a single space between columns
fn truncate(text: &str, width: u16) -> String {
    let max = usize::from(width.saturating_sub(1));
    if text.chars().count() > max {
        text.chars()
            .take(max.saturating_sub(1))
            .chain(std::iter::once(ELLIPSIS))
            .take(max)
            .collect()
    } else {
        text.to_owned()
    }
}

/// Generate block, the border style depends on whether the panel has focus
fn generate_block(
    title: &str,
    panel: NavPanel,
    gui_state: &GuiState,
    theme: &Theme,
) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(gui_state.is_selected(panel)))
        .title(Span::styled(format!(" {} ", title.trim()), theme.title))
}

/// Header row of a table, one cell per column
fn header_row(headers: &[&str], widths: &[u16], theme: &Theme) -> Row<'static> {
    Row::new(
        headers
            .iter()
            .zip(widths)
            .map(|(header, width)| Cell::from(truncate(header, *width))),
    )
    .style(theme.header)
}

/// Centered placeholder, used when a panel has nothing to show
fn placeholder(f: &mut Frame, area: Rect, block: Block<'static>, text: &'static str) {
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Draw the containers panel
pub fn containers(
    f: &mut Frame,
    area: Rect,
    app_data: &mut AppData,
    gui_state: &GuiState,
    theme: &Theme,
) {
    let panel = NavPanel::Containers;
    let title = format!(
        "{} {}",
        panel.title(),
        app_data.container_data.container_title()
    );
    let block = generate_block(&title, panel, gui_state, theme);

    if app_data.container_data.get_container_len() == 0 {
        placeholder(f, area, block, "no containers running");
        return;
    }

    let widths = gui_state.get_layout().container_widths();
    let rows = app_data
        .container_data
        .get_container_items()
        .iter()
        .map(|i| {
            let state_style = theme.state_style(&i.state);
            Row::new(i.row().iter().zip(widths).enumerate().map(
                |(index, (text, width))| {
                    let cell = Cell::from(truncate(text, width));
                    // Status & State
                    if index == 2 || index == 4 {
                        cell.style(state_style)
                    } else {
                        cell
                    }
                },
            ))
        })
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths.map(Constraint::Length))
        .header(header_row(&ContainerItem::HEADERS, &widths, theme))
        .block(block)
        .column_spacing(0)
        .row_highlight_style(theme.selected);

    f.render_stateful_widget(table, area, app_data.container_data.get_container_state());
}

/// Draw the images panel
pub fn images(
    f: &mut Frame,
    area: Rect,
    app_data: &mut AppData,
    gui_state: &GuiState,
    theme: &Theme,
) {
    let panel = NavPanel::Images;
    let title = format!("{} {}", panel.title(), app_data.image_data.image_title());
    let block = generate_block(&title, panel, gui_state, theme);

    if app_data.image_data.get_image_len() == 0 {
        placeholder(f, area, block, "no images found");
        return;
    }

    let widths = gui_state.get_layout().image_widths();
    let rows = app_data
        .image_data
        .get_image_items()
        .iter()
        .map(|i| {
            Row::new(
                i.row()
                    .iter()
                    .zip(widths)
                    .map(|(text, width)| Cell::from(truncate(text, width))),
            )
        })
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths.map(Constraint::Length))
        .header(header_row(&ImageItem::HEADERS, &widths, theme))
        .block(block)
        .column_spacing(0)
        .row_highlight_style(theme.selected);

    f.render_stateful_widget(table, area, app_data.image_data.get_image_state());
}

/// Draw the details panel, only the visible slice of lines is handed to ratatui
pub fn details(f: &mut Frame, area: Rect, app_data: &AppData, gui_state: &GuiState, theme: &Theme) {
    let detail = &app_data.detail_data;
    let block = generate_block(&detail.get_title(), NavPanel::Details, gui_state, theme);

    match detail.kind() {
        DetailKind::Empty => placeholder(f, area, block, "Select a container or image"),
        DetailKind::Logs if detail.line_count() == 0 => placeholder(f, area, block, "no logs found"),
        DetailKind::Inspect if detail.line_count() == 0 => {
            placeholder(f, area, block, "no output found");
        }
        _ => f.render_widget(Paragraph::new(detail.visible_lines()).block(block), area),
    }
}

/// Draw the key hints for the focused panel, along a single line
pub fn key_bar(f: &mut Frame, area: Rect, app_data: &AppData, gui_state: &GuiState, theme: &Theme) {
    let mut spans = vec![Span::styled(format!(" {} ", app_data.args.bin), theme.title)];
    for action in gui_state.get_current_nav().actions() {
        spans.push(Span::styled(format!(" {} ", action.key()), theme.key));
        spans.push(Span::styled(action.label(), theme.key_description));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Keys, and what they do, listed in the help popup
const HELP_KEYS: [(&str, &str); 7] = [
    ("tab / shift+tab", "change panels"),
    ("↑ ↓ / k j", "change selected line, or scroll details"),
    ("PgUp PgDn", "move a page at a time"),
    ("Home End / g G", "jump to the first or last line"),
    ("enter", "show container logs or image inspect"),
    ("r", "refresh containers & images"),
    ("h", "toggle this help information"),
];

/// Logo, description, then one row per key, keys right aligned into a single column
fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let key_width = HELP_KEYS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or_default();

    let mut lines = vec![Line::default()];
    lines.extend(LOGO.lines().map(|i| Line::from(i).centered()));
    lines.push(Line::default());
    lines.push(Line::from(DESCRIPTION).centered());
    lines.push(Line::default());
    lines.extend(HELP_KEYS.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(format!(" {key:>key_width$} "), theme.key),
            Span::styled(format!(" {description} "), theme.key_description),
        ])
    }));
    lines.push(Line::from(format!(" q or ctrl+c to quit {NAME} at any time")).centered());
    lines
}

/// Draw the help box in the centre of the screen
pub fn help_box(f: &mut Frame, theme: &Theme) {
    let lines = help_lines(theme);
    let width = lines.iter().map(Line::width).max().unwrap_or_default() + 4;
    let area = popup(lines.len() + 2, width, f.area());

    let block = Block::default()
        .title(format!(" {NAME} {VERSION} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let paragraph = Paragraph::new(lines).style(theme.popup).block(block);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Draw an error popup over whole screen
pub fn error(f: &mut Frame, error: &AppError, theme: &Theme) {
    let text = format!("\n{error}\n\n ( c ) to clear error\n ( q ) to quit {NAME}");
    // margin either side, borders above & below
    let area = popup(text.lines().count() + 3, max_line_width(&text) + 8, f.area());

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.error)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Error ")
                .title_alignment(Alignment::Center),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Draw a box in the centre of the given Rect, based on max line width + number of lines
fn popup(text_lines: usize, text_width: usize, r: Rect) -> Rect {
    let height = u16::try_from(text_lines).unwrap_or(u16::MAX).min(r.height);
    let width = u16::try_from(text_width).unwrap_or(u16::MAX).min(r.width);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}
