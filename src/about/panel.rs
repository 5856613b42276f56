use super::links::{build_resource_links, ResourceLink};
use super::token::TokenProfile;
use super::truncate::{should_truncate, truncate_description};
use super::view::DescriptionView;
use crate::chain::ChainDirectory;
use std::borrow::Cow;

pub const NO_INFO_PLACEHOLDER: &str = "No token information available";

/// The About section for one token.
///
/// Owns the collapse flag for as long as the token is on screen; showing a
/// different token means building a new panel, which starts collapsed.
#[derive(Debug, Clone)]
pub struct AboutPanel {
    token: TokenProfile,
    limit: usize,
    view: DescriptionView,
    links: Vec<ResourceLink>,
}

impl AboutPanel {
    pub fn new<D>(token: TokenProfile, limit: usize, directory: &D) -> Self
    where
        D: ChainDirectory + ?Sized,
    {
        let token = token.normalized();
        let links = build_resource_links(
            directory,
            &token.address,
            token.chain,
            token.homepage_url.as_deref(),
            token.twitter_name.as_deref(),
        );
        Self {
            token,
            limit,
            view: DescriptionView::default(),
            links,
        }
    }

    pub fn token(&self) -> &TokenProfile {
        &self.token
    }

    pub fn view(&self) -> DescriptionView {
        self.view
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn has_description(&self) -> bool {
        self.token.description.is_some()
    }

    pub fn should_truncate(&self) -> bool {
        self.token
            .description
            .as_deref()
            .is_some_and(|desc| should_truncate(desc, self.limit))
    }

    /// Text for the description area, `None` when the placeholder is shown.
    pub fn display_text(&self) -> Option<Cow<'_, str>> {
        let desc = self.token.description.as_deref()?;
        if self.should_truncate() && self.view.is_collapsed() {
            Some(Cow::Owned(truncate_description(desc, self.limit)))
        } else {
            Some(Cow::Borrowed(desc))
        }
    }

    /// Label of the show-more/hide button, `None` when no button is shown.
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.should_truncate().then(|| self.view.button_label())
    }

    pub fn toggle(&mut self) {
        self.view = self.view.toggled();
        tracing::debug!(address = %self.token.address, view = ?self.view, "description toggled");
    }

    pub fn links(&self) -> &[ResourceLink] {
        &self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::links::ResourceKind;
    use crate::chain::{BuiltinChains, Chain};

    fn token_with(description: Option<&str>) -> TokenProfile {
        let mut token = TokenProfile::new("0xAbC", Chain::Ethereum);
        token.description = description.map(str::to_string);
        token
    }

    #[test]
    fn test_no_description_shows_placeholder_and_no_button() {
        let panel = AboutPanel::new(token_with(None), 400, &BuiltinChains);
        assert!(!panel.has_description());
        assert!(panel.display_text().is_none());
        assert!(panel.toggle_label().is_none());
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let panel = AboutPanel::new(token_with(Some("")), 400, &BuiltinChains);
        assert!(panel.display_text().is_none());
    }

    #[test]
    fn test_short_description_has_no_toggle() {
        let mut panel = AboutPanel::new(token_with(Some("Short and sweet.")), 400, &BuiltinChains);
        assert_eq!(panel.display_text().as_deref(), Some("Short and sweet."));
        assert!(panel.toggle_label().is_none());

        panel.toggle();
        assert_eq!(panel.display_text().as_deref(), Some("Short and sweet."));
    }

    #[test]
    fn test_long_description_toggles() {
        let text = "lorem ipsum ".repeat(50);
        let mut panel = AboutPanel::new(token_with(Some(&text)), 400, &BuiltinChains);

        let collapsed = panel.display_text().unwrap().into_owned();
        assert!(collapsed.ends_with("..."));
        assert_eq!(panel.toggle_label(), Some("Show more"));

        panel.toggle();
        assert_eq!(panel.display_text().as_deref(), Some(text.as_str()));
        assert_eq!(panel.toggle_label(), Some("Hide"));

        panel.toggle();
        assert_eq!(panel.display_text().unwrap(), collapsed);
    }

    #[test]
    fn test_links_follow_token_fields() {
        let mut token = token_with(None);
        token.twitter_name = Some("abc".to_string());
        let panel = AboutPanel::new(token, 400, &BuiltinChains);
        let kinds: Vec<_> = panel.links().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![ResourceKind::Explorer, ResourceKind::Analytics, ResourceKind::Twitter]
        );
    }
}
