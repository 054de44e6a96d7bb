//! The display component: renders whatever record the store currently
//! holds. It owns no session data of its own; everything comes through the
//! context handle on each draw.

use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Session;
    let block = Block::default()
        .title(" Session ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match state.session.get_state() {
        Ok(record) => {
            let status = if record.logged_in {
                Span::styled("● logged in", Theme::logged_in())
            } else {
                Span::styled("○ logged out", Theme::logged_out())
            };

            let username = field_span(&record.username);
            let email = field_span(&record.email);

            vec![
                Line::from(status),
                Line::from(""),
                Line::from(vec![Span::styled("username  ", Theme::label()), username]),
                Line::from(vec![Span::styled("email     ", Theme::label()), email]),
                Line::from(""),
                Line::from(Span::styled("F2     toggle login", Theme::hint())),
                Line::from(Span::styled("/help  all commands", Theme::hint())),
            ]
        }
        Err(e) => vec![
            Line::from(Span::styled(
                format!("{}", e),
                Theme::error_message(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "No store was provided to this panel.",
                Theme::hint(),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_span(value: &str) -> Span<'static> {
    if value.is_empty() {
        Span::styled("(unset)", Theme::value_unset())
    } else {
        Span::styled(value.to_string(), Theme::value())
    }
}
