use crate::app::App;
use crate::error::{AboutError, AboutResult};
use crossterm::event::{KeyCode, KeyEvent};

/// Opens a resource link outside the terminal.
pub trait LinkOpener {
    fn open(&self, url: &str) -> AboutResult<()>;
}

/// Hands URLs to the platform's default browser.
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> AboutResult<()> {
        open::that_detached(url).map_err(|e| AboutError::OpenLink {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

fn open_link(app: &mut App, index: usize, opener: &dyn LinkOpener) {
    let Some(link) = app.panel.links().get(index).cloned() else {
        return;
    };
    app.selected_link = index;

    match opener.open(&link.url) {
        Ok(()) => {
            tracing::info!(url = %link.url, name = %link.name, "opened link");
            app.show_toast(&format!("↗ {}", link.name));
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to open link");
            app.show_toast(&format!("❌ {}", e));
        }
    }
}

pub fn handle_key(key: KeyEvent, app: &mut App, opener: &dyn LinkOpener) {
    let keys = app.keys.clone();

    // Quit ('q'), closing the help popup first
    if keys.matches(key, &keys.quit) || key.code == KeyCode::Esc {
        if app.show_keyhints {
            app.show_keyhints = false;
        } else if key.code != KeyCode::Esc {
            app.is_running = false;
        }
        return;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return;
    }

    if keys.matches(key, &keys.toggle_description) {
        app.toggle_description();
        return;
    }

    if keys.matches(key, &keys.scroll_down) || keys.matches(key, &keys.scroll_down_alt) {
        app.scroll_down();
        return;
    }

    if keys.matches(key, &keys.scroll_up) || keys.matches(key, &keys.scroll_up_alt) {
        app.scroll_up();
        return;
    }

    if keys.matches(key, &keys.link_next) || keys.matches(key, &keys.link_next_alt) {
        app.select_next_link();
        return;
    }

    if keys.matches(key, &keys.link_prev) || keys.matches(key, &keys.link_prev_alt) {
        app.select_prev_link();
        return;
    }

    if keys.matches(key, &keys.open_link) {
        let selected = app.selected_link;
        open_link(app, selected, opener);
        return;
    }

    if keys.matches(key, &keys.token_next) {
        app.next_token();
        return;
    }

    if keys.matches(key, &keys.token_prev) {
        app.prev_token();
        return;
    }

    // '1'..'9' open a link directly
    if let KeyCode::Char(ch) = key.code {
        if let Some(digit) = ch.to_digit(10).filter(|d| *d >= 1) {
            open_link(app, digit as usize - 1, opener);
        }
    }
}
