use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MainLayout {
    pub body_area: Rect,
    pub footer_area: Rect,
}

pub fn get_main_layout(area: Rect) -> MainLayout {
    // Footer needs 1 line at the bottom always.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        body_area: chunks[0],
        footer_area: chunks[1],
    }
}

pub struct AboutLayout {
    pub header: Rect,
    pub description: Rect,
    pub toggle: Rect,
    pub links_header: Rect,
    pub links: Rect,
}

/// Split the inside of the About block. The toggle row collapses to zero
/// height when there is no button.
pub fn get_about_layout(area: Rect, has_toggle: bool) -> AboutLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                          // Token title + spacing
            Constraint::Min(1),                             // Description
            Constraint::Length(if has_toggle { 1 } else { 0 }), // Show more / Hide
            Constraint::Length(1),                          // Spacer
            Constraint::Length(1),                          // "Links"
            Constraint::Length(1),                          // Link row
        ])
        .split(area);

    AboutLayout {
        header: chunks[0],
        description: chunks[1],
        toggle: chunks[2],
        links_header: chunks[4],
        links: chunks[5],
    }
}
