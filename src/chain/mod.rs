//! Supported chains and the lookups the About panel needs from them.

pub mod explorer;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use explorer::{ExplorerDataType, ExplorerLink};

pub type ChainId = u64;

/// Chains a token can live on, named as the token data API names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Chain {
    Ethereum,
    EthereumGoerli,
    Optimism,
    Arbitrum,
    Polygon,
    Celo,
}

impl Chain {
    pub const ALL: [Chain; 6] = [
        Chain::Ethereum,
        Chain::EthereumGoerli,
        Chain::Optimism,
        Chain::Arbitrum,
        Chain::Polygon,
        Chain::Celo,
    ];
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Chain::Ethereum => "Ethereum",
            Chain::EthereumGoerli => "Görli",
            Chain::Optimism => "Optimism",
            Chain::Arbitrum => "Arbitrum",
            Chain::Polygon => "Polygon",
            Chain::Celo => "Celo",
        };
        f.write_str(label)
    }
}

pub fn chain_name_to_id(chain: Chain) -> ChainId {
    match chain {
        Chain::Ethereum => 1,
        Chain::EthereumGoerli => 5,
        Chain::Optimism => 10,
        Chain::Arbitrum => 42161,
        Chain::Polygon => 137,
        Chain::Celo => 42220,
    }
}

/// Static metadata for a chain id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    pub label: &'static str,
    /// Base URL of the analytics site, ends with a slash
    pub info_link: &'static str,
    pub explorer: &'static str,
    pub explorer_name: &'static str,
}

pub(crate) static MAINNET: ChainInfo = ChainInfo {
    label: "Ethereum",
    info_link: "https://info.uniswap.org/#/",
    explorer: "https://etherscan.io",
    explorer_name: "Etherscan",
};

static GOERLI: ChainInfo = ChainInfo {
    label: "Görli",
    info_link: "https://info.uniswap.org/#/",
    explorer: "https://goerli.etherscan.io",
    explorer_name: "Etherscan",
};

static OPTIMISM: ChainInfo = ChainInfo {
    label: "Optimism",
    info_link: "https://info.uniswap.org/#/optimism/",
    explorer: "https://optimistic.etherscan.io",
    explorer_name: "Optimistic Etherscan",
};

static ARBITRUM: ChainInfo = ChainInfo {
    label: "Arbitrum",
    info_link: "https://info.uniswap.org/#/arbitrum/",
    explorer: "https://arbiscan.io",
    explorer_name: "Arbiscan",
};

static POLYGON: ChainInfo = ChainInfo {
    label: "Polygon",
    info_link: "https://info.uniswap.org/#/polygon/",
    explorer: "https://polygonscan.com",
    explorer_name: "Polygonscan",
};

static CELO: ChainInfo = ChainInfo {
    label: "Celo",
    info_link: "https://info.uniswap.org/#/celo/",
    explorer: "https://celoscan.io",
    explorer_name: "Celoscan",
};

pub fn get_chain_info(chain_id: ChainId) -> Option<&'static ChainInfo> {
    match chain_id {
        1 => Some(&MAINNET),
        5 => Some(&GOERLI),
        10 => Some(&OPTIMISM),
        42161 => Some(&ARBITRUM),
        137 => Some(&POLYGON),
        42220 => Some(&CELO),
        _ => None,
    }
}

/// The three lookups the About panel consumes.
///
/// `BuiltinChains` answers from the static tables above; tests and
/// embedders can substitute their own directory.
pub trait ChainDirectory {
    fn chain_id(&self, chain: Chain) -> ChainId;
    fn chain_info(&self, chain_id: ChainId) -> Option<&ChainInfo>;
    fn explorer_link(&self, chain_id: ChainId, data: &str, kind: ExplorerDataType) -> ExplorerLink;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinChains;

impl ChainDirectory for BuiltinChains {
    fn chain_id(&self, chain: Chain) -> ChainId {
        chain_name_to_id(chain)
    }

    fn chain_info(&self, chain_id: ChainId) -> Option<&ChainInfo> {
        get_chain_info(chain_id)
    }

    fn explorer_link(&self, chain_id: ChainId, data: &str, kind: ExplorerDataType) -> ExplorerLink {
        explorer::resolve_explorer_link(chain_id, data, kind)
    }
}
