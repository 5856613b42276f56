use crate::about::{TokenFile, TokenProfile};
use crate::chain::Chain;
use crate::error::{AboutError, AboutResult};
use clap::Parser;
use std::path::PathBuf;

/// token-about - the About panel of a token, in your terminal
#[derive(Parser, Debug)]
#[command(name = "token-about", version, about)]
pub struct Args {
    /// Token contract address
    #[arg(long, short = 'a', requires = "chain")]
    pub address: Option<String>,

    /// Chain the token lives on
    #[arg(long, short = 'c', value_enum, conflicts_with = "token_file")]
    pub chain: Option<Chain>,

    /// Token description text
    #[arg(long, short = 'd', conflicts_with = "token_file")]
    pub description: Option<String>,

    /// Project homepage URL
    #[arg(long, conflicts_with = "token_file")]
    pub homepage: Option<String>,

    /// Twitter handle, without the leading @
    #[arg(long, conflicts_with = "token_file")]
    pub twitter: Option<String>,

    /// Load one or more tokens from a .toml or .json file
    #[arg(long, short = 'f', conflicts_with = "address")]
    pub token_file: Option<PathBuf>,

    /// Use this config file instead of ~/.config/token-about/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the panel as plain text and exit
    #[arg(long, short = 'p')]
    pub print: bool,

    /// With --print, show the full description
    #[arg(long, requires = "print")]
    pub expanded: bool,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// Tokens to show, from the token file or the inline flags.
    pub fn tokens(&self) -> AboutResult<Vec<TokenProfile>> {
        if let Some(path) = &self.token_file {
            return TokenFile::load(path);
        }

        match (&self.address, self.chain) {
            (Some(address), Some(chain)) => {
                let mut token = TokenProfile::new(address, chain);
                token.description = self.description.clone();
                token.homepage_url = self.homepage.clone();
                token.twitter_name = self.twitter.clone();
                Ok(vec![token.normalized()])
            }
            _ => Err(AboutError::MissingToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_token() {
        let args = Args::parse_from([
            "token-about",
            "--address",
            "0xABC",
            "--chain",
            "optimism",
            "--twitter",
            "op",
            "--homepage",
            "",
        ]);
        let tokens = args.tokens().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].chain, Chain::Optimism);
        assert_eq!(tokens[0].twitter_name.as_deref(), Some("op"));
        assert_eq!(tokens[0].homepage_url, None);
    }

    #[test]
    fn test_missing_token() {
        let args = Args::parse_from(["token-about", "--print"]);
        assert!(matches!(args.tokens(), Err(AboutError::MissingToken)));
    }

    #[test]
    fn test_address_requires_chain() {
        assert!(Args::try_parse_from(["token-about", "--address", "0x1"]).is_err());
    }

    #[test]
    fn test_inline_fields_conflict_with_token_file() {
        for flag in ["--description", "--homepage", "--twitter"] {
            let result =
                Args::try_parse_from(["token-about", "--token-file", "tokens.toml", flag, "x"]);
            assert!(result.is_err(), "{} was accepted with --token-file", flag);
        }
        assert!(Args::try_parse_from([
            "token-about",
            "--token-file",
            "tokens.toml",
            "--chain",
            "celo"
        ])
        .is_err());
    }

    #[test]
    fn test_expanded_requires_print() {
        assert!(Args::try_parse_from(["token-about", "--expanded"]).is_err());
    }
}
