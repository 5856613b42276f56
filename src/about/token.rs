use crate::chain::Chain;
use crate::error::{AboutError, AboutResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the About panel is given about one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenProfile {
    pub address: String,
    pub chain: Chain,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage_url: Option<String>,
    /// Handle without the leading `@`
    #[serde(default)]
    pub twitter_name: Option<String>,
}

impl TokenProfile {
    pub fn new(address: &str, chain: Chain) -> Self {
        Self {
            address: address.to_string(),
            chain,
            name: None,
            symbol: None,
            description: None,
            homepage_url: None,
            twitter_name: None,
        }
    }

    /// Empty strings count as absent, matching how the data API leaves
    /// fields blank.
    pub fn normalized(mut self) -> Self {
        self.name = non_empty(self.name);
        self.symbol = non_empty(self.symbol);
        self.description = non_empty(self.description);
        self.homepage_url = non_empty(self.homepage_url);
        self.twitter_name = non_empty(self.twitter_name);
        self
    }

    /// "Uniswap (UNI)", falling back to whatever is known.
    pub fn title(&self) -> String {
        match (&self.name, &self.symbol) {
            (Some(name), Some(symbol)) => format!("{} ({})", name, symbol),
            (Some(name), None) => name.clone(),
            (None, Some(symbol)) => symbol.clone(),
            (None, None) => self.address.clone(),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenFile {
    #[serde(default)]
    pub tokens: Vec<TokenProfile>,
}

impl TokenFile {
    /// Parse a `.toml` or `.json` token file. At least one token is required.
    pub fn load(path: &Path) -> AboutResult<Vec<TokenProfile>> {
        let content = fs::read_to_string(path).map_err(|source| AboutError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let file: TokenFile = match ext.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| AboutError::TokenFileParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            "json" => serde_json::from_str(&content).map_err(|e| AboutError::TokenFileParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            other => return Err(AboutError::UnsupportedFormat(other.to_string())),
        };

        if file.tokens.is_empty() {
            return Err(AboutError::EmptyTokenFile(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), count = file.tokens.len(), "loaded token file");
        Ok(file.tokens.into_iter().map(TokenProfile::normalized).collect())
    }
}
