use super::config::UserConfig;
use super::keys::KeyConfig;
use crate::about::{AboutPanel, ResourceLink, TokenProfile};
use crate::chain::BuiltinChains;
use crate::error::{AboutError, AboutResult};
use crate::ui::theme::Theme;
use crate::ui::utils::wrapped_line_count;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

const TOAST_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub is_running: bool,

    /// Every token given on the command line or in the token file
    pub tokens: Vec<TokenProfile>,
    pub current_token: usize,
    /// Rebuilt whenever `current_token` changes
    pub panel: AboutPanel,
    pub truncate_limit: usize,

    /// UI State
    pub selected_link: usize,
    pub description_scroll: u16,
    /// Last area the description was drawn into, empty before the first draw
    pub description_area: Rect,
    pub show_keyhints: bool, // Help popup visible
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(tokens: Vec<TokenProfile>, config: UserConfig, theme: Theme) -> AboutResult<Self> {
        let first = tokens.first().cloned().ok_or(AboutError::MissingToken)?;
        let panel = AboutPanel::new(first, config.truncate_limit, &BuiltinChains);

        Ok(Self {
            theme,
            keys: config.keys,
            is_running: true,
            tokens,
            current_token: 0,
            panel,
            truncate_limit: config.truncate_limit,
            selected_link: 0,
            description_scroll: 0,
            description_area: Rect::default(),
            show_keyhints: false,
            toast: None,
        })
    }

    fn show_token(&mut self, index: usize) {
        self.current_token = index;
        self.panel = AboutPanel::new(
            self.tokens[index].clone(),
            self.truncate_limit,
            &BuiltinChains,
        );
        self.selected_link = 0;
        self.description_scroll = 0;
        tracing::info!(
            index,
            address = %self.panel.token().address,
            chain = %self.panel.token().chain,
            "showing token"
        );
    }

    pub fn next_token(&mut self) {
        if self.tokens.len() > 1 {
            self.show_token((self.current_token + 1) % self.tokens.len());
        }
    }

    pub fn prev_token(&mut self) {
        if self.tokens.len() > 1 {
            let index = if self.current_token == 0 {
                self.tokens.len() - 1
            } else {
                self.current_token - 1
            };
            self.show_token(index);
        }
    }

    /// Flip show-more/hide. Only long descriptions have the button.
    pub fn toggle_description(&mut self) -> bool {
        if !self.panel.should_truncate() {
            return false;
        }
        self.panel.toggle();
        self.description_scroll = 0;
        true
    }

    /// Furthest the description can scroll while its last line stays visible.
    pub fn max_description_scroll(&self) -> u16 {
        let Some(text) = self.panel.display_text() else {
            return 0;
        };
        let area = self.description_area;
        let hidden = if area.width == 0 {
            text.lines().count().saturating_sub(1)
        } else {
            wrapped_line_count(&text, area.width).saturating_sub(area.height as usize)
        };
        u16::try_from(hidden).unwrap_or(u16::MAX)
    }

    pub fn scroll_down(&mut self) {
        let max = self.max_description_scroll();
        self.description_scroll = self.description_scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.description_scroll = self.description_scroll.saturating_sub(1);
    }

    pub fn select_next_link(&mut self) {
        let count = self.panel.links().len();
        if count > 0 {
            self.selected_link = (self.selected_link + 1) % count;
        }
    }

    pub fn select_prev_link(&mut self) {
        let count = self.panel.links().len();
        if count > 0 {
            self.selected_link = if self.selected_link == 0 {
                count - 1
            } else {
                self.selected_link - 1
            };
        }
    }

    pub fn selected_link(&self) -> Option<&ResourceLink> {
        self.panel.links().get(self.selected_link)
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast {
            message: message.to_string(),
            deadline: Instant::now() + TOAST_DURATION,
        });
    }

    /// Called every tick to update state
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
    }
}
