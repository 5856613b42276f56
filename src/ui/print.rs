//! Plain-text rendering of the About panel for `--print`.

use crate::about::{AboutPanel, NO_INFO_PLACEHOLDER};
use std::fmt::Write;

pub fn render_plain(panel: &AboutPanel) -> String {
    let token = panel.token();
    let mut out = String::new();

    let _ = writeln!(out, "About {}", token.title());
    let _ = writeln!(out);
    match panel.display_text() {
        Some(text) => {
            let _ = writeln!(out, "{}", text);
        }
        None => {
            let _ = writeln!(out, "{}", NO_INFO_PLACEHOLDER);
        }
    }
    if let Some(label) = panel.toggle_label() {
        let _ = writeln!(out, "[{}]", label);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Links");
    for link in panel.links() {
        let _ = writeln!(out, "  {}: {}", link.name, link.url);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::TokenProfile;
    use crate::chain::{BuiltinChains, Chain};

    #[test]
    fn test_plain_without_description() {
        let mut token = TokenProfile::new("0xAB", Chain::Ethereum);
        token.symbol = Some("AB".to_string());
        let panel = AboutPanel::new(token, 400, &BuiltinChains);

        let out = render_plain(&panel);
        assert!(out.starts_with("About AB\n"));
        assert!(out.contains(NO_INFO_PLACEHOLDER));
        assert!(!out.contains("[Show more]"));
        assert!(out.contains("  Etherscan: https://etherscan.io/token/0xAB\n"));
        assert!(out.contains("  More analytics: https://info.uniswap.org/#/tokens/0xab\n"));
    }

    #[test]
    fn test_plain_collapsed_and_expanded() {
        let mut token = TokenProfile::new("0xAB", Chain::Celo);
        token.description = Some("celo ".repeat(100));
        let mut panel = AboutPanel::new(token, 400, &BuiltinChains);

        let collapsed = render_plain(&panel);
        assert!(collapsed.contains("...\n[Show more]\n"));

        panel.toggle();
        let expanded = render_plain(&panel);
        assert!(expanded.contains("[Hide]"));
        assert!(!expanded.contains("..."));
    }
}
