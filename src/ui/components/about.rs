use crate::about::NO_INFO_PLACEHOLDER;
use crate::app::App;
use crate::chain::{chain_name_to_id, get_chain_info};
use crate::ui::layout;
use crate::ui::utils::{fit_width, short_address};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = about_block(app);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = layout::get_about_layout(inner, app.panel.toggle_label().is_some());

    // A resize can leave the old offset past the end of the text
    app.description_area = chunks.description;
    app.description_scroll = app.description_scroll.min(app.max_description_scroll());

    let theme = &app.theme;
    let panel = &app.panel;
    let token = panel.token();
    let toggle_label = panel.toggle_label();

    // Token title
    let chain_label = get_chain_info(chain_name_to_id(token.chain))
        .map(|info| info.label.to_string())
        .unwrap_or_else(|| token.chain.to_string());
    let header = Line::from(vec![
        Span::styled(
            token.title(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} · {}", chain_label, short_address(&token.address)),
            Style::default().fg(theme.overlay),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks.header);

    // Description or placeholder
    let description = match panel.display_text() {
        Some(text) => Paragraph::new(Text::from(text.into_owned()))
            .style(Style::default().fg(theme.text)),
        None => Paragraph::new(NO_INFO_PLACEHOLDER).style(Style::default().fg(theme.overlay)),
    };
    f.render_widget(
        description
            .wrap(Wrap { trim: false })
            .scroll((app.description_scroll, 0)),
        chunks.description,
    );

    if let Some(label) = toggle_label {
        let button = Line::from(vec![
            Span::styled(
                label,
                Style::default()
                    .fg(theme.subtext)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  ({})", app.keys.display(&app.keys.toggle_description)),
                Style::default().fg(theme.overlay),
            ),
        ]);
        f.render_widget(Paragraph::new(button), chunks.toggle);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            "Links",
            Style::default().fg(theme.subtext).add_modifier(Modifier::BOLD),
        )),
        chunks.links_header,
    );

    // Links row, each entry clipped to an even share of the width
    let links = panel.links();
    let share = if links.is_empty() {
        0
    } else {
        (chunks.links.width as usize / links.len()).saturating_sub(2)
    };
    let mut spans = Vec::new();
    for (i, link) in links.iter().enumerate() {
        let style = if i == app.selected_link {
            Style::default()
                .fg(theme.base)
                .bg(theme.blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.blue)
        };
        let label = format!("{} {}", i + 1, link.name);
        spans.push(Span::styled(fit_width(&label, share), style));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks.links);
}

fn about_block(app: &App) -> Block<'static> {
    let theme = &app.theme;

    let title = Line::from(vec![Span::styled(
        " About ",
        Style::default()
            .fg(theme.magenta)
            .add_modifier(Modifier::BOLD),
    )]);

    let position = if app.tokens.len() > 1 {
        Line::from(Span::styled(
            format!(" {}/{} ", app.current_token + 1, app.tokens.len()),
            Style::default().fg(theme.overlay),
        ))
        .alignment(Alignment::Right)
    } else {
        Line::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Left)
        .title_bottom(position)
        .border_style(Style::default().fg(theme.magenta))
        .style(Style::default().bg(Color::Reset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::TokenProfile;
    use crate::app::config::UserConfig;
    use crate::chain::Chain;
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_for(token: TokenProfile) -> App {
        App::new(vec![token], UserConfig::default(), Theme::default()).unwrap()
    }

    #[test]
    fn test_placeholder_without_description() {
        let mut app = app_for(TokenProfile::new("0xABC", Chain::Ethereum));
        let out = screen(&mut app, 100, 12);
        assert!(out.contains(NO_INFO_PLACEHOLDER));
        assert!(!out.contains("Show more"));
        assert!(out.contains("Etherscan"));
        assert!(out.contains("More analytics"));
    }

    #[test]
    fn test_long_description_shows_button() {
        let mut token = TokenProfile::new("0xABC", Chain::Ethereum);
        token.description = Some("governance ".repeat(60));
        let mut app = app_for(token);

        let out = screen(&mut app, 100, 20);
        assert!(out.contains("Show more"));

        app.toggle_description();
        let out = screen(&mut app, 100, 20);
        assert!(out.contains("Hide"));
    }

    #[test]
    fn test_short_description_stays_visible_after_scrolling() {
        let mut token = TokenProfile::new("0xABC", Chain::Ethereum);
        token.description = Some("A single line about the token.".to_string());
        let mut app = app_for(token);

        screen(&mut app, 80, 12);
        for _ in 0..50 {
            app.scroll_down();
        }
        assert_eq!(app.description_scroll, 0);

        let out = screen(&mut app, 80, 12);
        assert!(out.contains("A single line about the token."));
    }

    #[test]
    fn test_scroll_stops_at_last_line() {
        let mut token = TokenProfile::new("0xABC", Chain::Ethereum);
        token.description = Some("governance ".repeat(60));
        let mut app = app_for(token);
        app.toggle_description();

        screen(&mut app, 40, 12);
        let max = app.max_description_scroll();
        assert!(max > 0);
        for _ in 0..100 {
            app.scroll_down();
        }
        assert_eq!(app.description_scroll, max);

        // Growing the terminal pulls the offset back
        screen(&mut app, 200, 40);
        assert_eq!(app.description_scroll, 0);
    }
}
