// UI module for rendering the TUI.
// Picks one of the loading, error, or content views from store state.

mod list;

use std::time::Instant;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::store::PostState;

/// Which view the surface shows. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// Not yet mounted in a live terminal.
    Blank,
    Loading,
    Error(&'a str),
    Content,
}

impl<'a> View<'a> {
    /// Loading wins over error, error wins over content.
    pub fn of(mounted: bool, state: &'a PostState) -> Self {
        if !mounted {
            View::Blank
        } else if state.is_loading {
            View::Loading
        } else if let Some(error) = state.error.as_deref() {
            View::Error(error)
        } else {
            View::Content
        }
    }
}

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App, state: &PostState) {
    let area = frame.area();
    match View::of(app.mounted, state) {
        View::Blank => return,
        View::Loading => list::render_loading(frame, area),
        View::Error(error) => list::render_error(frame, area, error),
        View::Content => draw_content(frame, app, state, area),
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_content(frame: &mut Frame, app: &mut App, state: &PostState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // List and detail
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(frame, state, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    list::render_posts_list(frame, state, &mut app.cursor, panes[0]);
    list::render_post_detail(frame, state.selected_post.as_ref(), panes[1]);

    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the title, last-updated time, and the refresh control.
fn draw_header(frame: &mut Frame, state: &PostState, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(21)])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        "Posts",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(last_updated) = &state.last_updated {
        lines.push(Line::from(Span::styled(
            format!("Last updated: {}", last_updated),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), columns[0]);

    let button = Paragraph::new(Line::from(vec![
        Span::styled(" r ", Style::default().fg(Color::Black).bg(Color::Blue)),
        Span::styled(
            " Refresh Posts",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(button, columns[1]);
}

/// Draw the status bar with keybinding hints and refresh countdown.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↵ "),
        Span::styled("Select", Style::default().fg(Color::DarkGray)),
        Span::raw("  Esc "),
        Span::styled("Clear", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let refresh = match app.next_refresh_in(Instant::now()) {
        Some(remaining) => format!("  Auto-refresh in {}s", remaining.as_secs()),
        None => "  Auto-refresh off".to_string(),
    };
    hints.push(Span::styled(refresh, Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 46.min(area.width);
    let popup_height = 14.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(k, Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  ↑/↓ or j/k    ", "Move cursor"),
        key("  Home/End g/G  ", "Jump to first/last"),
        key("  Enter/Space   ", "Select post"),
        key("  Esc           ", "Clear selection"),
        key("  r             ", "Refresh posts"),
        key("  C             ", "Clear cache and reload"),
        key("  ?             ", "Show/hide this help"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
