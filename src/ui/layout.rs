use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub session_panel: Rect,
    pub activity: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: session panel | activity + input
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(34), // Session panel
            Constraint::Min(30),    // Right content
        ])
        .split(content);

    let session_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    // Right panel: activity | input
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Activity log
            Constraint::Length(3), // Input box
        ])
        .split(right_panel);

    AppLayout {
        session_panel,
        activity: right_chunks[0],
        input_box: right_chunks[1],
        status_bar,
    }
}
