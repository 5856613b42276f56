use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Key bindings shown in the help popup, as (keys, description).
pub fn keyhint_rows(app: &App) -> Vec<(String, &'static str)> {
    let keys = &app.keys;
    let mut rows = vec![
        (
            keys.display(&keys.toggle_description),
            "Show more / Hide",
        ),
        (
            format!(
                "{}/{}",
                keys.display(&keys.scroll_down),
                keys.display(&keys.scroll_up)
            ),
            "Scroll description",
        ),
        (
            format!(
                "{}/{}",
                keys.display(&keys.link_prev),
                keys.display(&keys.link_next)
            ),
            "Select link",
        ),
        (keys.display(&keys.open_link), "Open link"),
        (format!("1-{}", app.panel.links().len()), "Open link N"),
    ];

    if app.tokens.len() > 1 {
        rows.push((
            format!(
                "{}/{}",
                keys.display(&keys.token_next),
                keys.display(&keys.token_prev)
            ),
            "Next / previous token",
        ));
    }

    rows.push((keys.display(&keys.toggle_keyhints), "Toggle help"));
    rows.push((keys.display(&keys.quit), "Quit"));
    rows
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let rows = keyhint_rows(app);

    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<7} ", key),
                    Style::default()
                        .fg(theme.green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  ", Style::default().fg(theme.overlay)),
                Span::styled(*desc, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    // Fit content exactly
    let content_width = rows
        .iter()
        .map(|(k, d)| 2 + k.chars().count().max(7) + 2 + d.len())
        .max()
        .unwrap_or(20);

    let max_height = f.area().height.saturating_sub(4);
    let popup_height = (lines.len() as u16 + 2).min(max_height); // +2 for borders
    let popup_width = (content_width as u16 + 4).min(f.area().width.saturating_sub(2));

    // Position at bottom-right
    let popup_x = f.area().width.saturating_sub(popup_width + 1);
    let popup_y = f.area().height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(" Keys ")
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::TokenProfile;
    use crate::app::config::UserConfig;
    use crate::chain::Chain;
    use crate::ui::theme::Theme;

    fn app_with(count: usize) -> App {
        let tokens = (0..count)
            .map(|i| TokenProfile::new(&format!("0x{}", i), Chain::Polygon))
            .collect();
        App::new(tokens, UserConfig::default(), Theme::default()).unwrap()
    }

    #[test]
    fn test_token_keys_only_with_several_tokens() {
        let single = keyhint_rows(&app_with(1));
        assert!(!single.iter().any(|(_, d)| d.contains("token")));

        let many = keyhint_rows(&app_with(3));
        assert!(many.iter().any(|(k, _)| k == "Tab/S-Tab"));
    }

    #[test]
    fn test_link_count_hint() {
        let rows = keyhint_rows(&app_with(1));
        assert!(rows.iter().any(|(k, d)| k == "1-2" && *d == "Open link N"));
    }
}
