use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, app: &App) {
    if let Some(ref toast) = app.toast {
        let theme = &app.theme;

        // Auto-dismiss handled in App::on_tick()
        let message = &toast.message;
        let width = (message.width() as u16 + 6).min(f.area().width.saturating_sub(4));
        let height = 3;
        let x = f.area().width.saturating_sub(width + 1); // Top-right fixed
        let y = 1;

        // Clip to screen bounds to avoid panic
        let visible_area = Rect::new(x, y, width, height).intersection(f.area());
        if visible_area.is_empty() {
            return;
        }

        f.render_widget(Clear, visible_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .style(Style::default().bg(Color::Reset));

        let style = Style::default().fg(theme.blue).add_modifier(Modifier::BOLD);

        let text = Paragraph::new(Line::from(vec![Span::styled(message.as_str(), style)]))
            .alignment(Alignment::Center)
            .block(block);

        f.render_widget(text, visible_area);
    }
}
