use crate::app::state::{AppState, EntryKind, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Activity;
    let title = if state.activity.scroll_offset > 0 {
        format!(" Activity (scrolled +{}) ", state.activity.scroll_offset)
    } else {
        " Activity ".to_string()
    };
    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Show the newest entries, shifted up by the scroll offset.
    let entries = &state.activity.entries;
    let height = inner.height as usize;
    let end = entries.len().saturating_sub(state.activity.scroll_offset);
    let start = end.saturating_sub(height);

    let lines: Vec<Line> = entries[start..end]
        .iter()
        .map(|entry| {
            let style = match entry.kind {
                EntryKind::System => Theme::system_message(),
                EntryKind::Change => Theme::change_message(),
                EntryKind::Error => Theme::error_message(),
            };
            let marker = match entry.kind {
                EntryKind::System => "*** ",
                EntryKind::Change => "--> ",
                EntryKind::Error => "!!! ",
            };
            Line::from(vec![
                Span::styled(format!("{} ", entry.timestamp), Theme::timestamp()),
                Span::styled(marker, style),
                Span::styled(entry.text.as_str(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
