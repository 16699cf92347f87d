// Posts list rendering.
// Provides the list, detail pane, and the full-area loading and error views.

use ratatui::{prelude::*, widgets::*};

use crate::api::Post;
use crate::state::PostCursor;
use crate::store::PostState;

/// Render the full-area loading view.
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("⏳ Loading...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, centered_line(area));
}

/// Render the full-area error view.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ Error: {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(text, centered_line(area));
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default().borders(Borders::ALL).title(" Posts ");
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

/// Render the posts list with the cursor highlight and the selected marker.
pub fn render_posts_list(frame: &mut Frame, state: &PostState, cursor: &mut PostCursor, area: Rect) {
    if state.posts.is_empty() {
        render_empty(frame, area, "No posts");
        return;
    }

    let items: Vec<ListItem> = state
        .posts
        .iter()
        .map(|post| {
            let selected = state.is_selected(post);
            let (marker, style) = if selected {
                (
                    "● ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("#{:<4}", post.id), Style::default().fg(Color::DarkGray)),
                Span::styled(post.title.clone(), style),
            ]))
        })
        .collect();

    let title = format!(" Posts ({}) ", state.posts.len());
    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut cursor.list_state);
}

/// Render the detail pane for the selected post.
pub fn render_post_detail(frame: &mut Frame, post: Option<&Post>, area: Rect) {
    let Some(post) = post else {
        let block = Block::default().borders(Borders::ALL).title(" Selected ");
        let text = Paragraph::new("Press Enter to select a post")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Post #{} ", post.id));

    let lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            post.body.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let text = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}

/// One-line-high strip through the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);
    chunks[1]
}
