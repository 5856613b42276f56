use super::{get_chain_info, ChainId, MAINNET};

const ARBITRUM_ONE: ChainId = 42161;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerDataType {
    Transaction,
    Token,
    Address,
    Block,
}

/// A resolved block-explorer page and the explorer's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLink {
    pub url: String,
    pub name: String,
}

/// Build the explorer URL for `data` (a tx hash, address or block number).
/// Chains without a known explorer fall back to Etherscan.
pub fn resolve_explorer_link(
    chain_id: ChainId,
    data: &str,
    kind: ExplorerDataType,
) -> ExplorerLink {
    let info = get_chain_info(chain_id).unwrap_or_else(|| {
        tracing::warn!(chain_id, "no explorer known for chain, using Etherscan");
        &MAINNET
    });
    let prefix = info.explorer;

    let url = if chain_id == ARBITRUM_ONE {
        // Arbiscan has no dedicated token page
        match kind {
            ExplorerDataType::Transaction => format!("{}/tx/{}", prefix, data),
            ExplorerDataType::Token | ExplorerDataType::Address => {
                format!("{}/address/{}", prefix, data)
            }
            ExplorerDataType::Block => format!("{}/block/{}", prefix, data),
        }
    } else {
        match kind {
            ExplorerDataType::Transaction => format!("{}/tx/{}", prefix, data),
            ExplorerDataType::Token => format!("{}/token/{}", prefix, data),
            ExplorerDataType::Address => format!("{}/address/{}", prefix, data),
            ExplorerDataType::Block => format!("{}/block/{}", prefix, data),
        }
    };

    ExplorerLink {
        url,
        name: info.explorer_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNI: &str = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";

    #[test]
    fn test_mainnet_token_link() {
        let link = resolve_explorer_link(1, UNI, ExplorerDataType::Token);
        assert_eq!(link.url, format!("https://etherscan.io/token/{}", UNI));
        assert_eq!(link.name, "Etherscan");
    }

    #[test]
    fn test_arbitrum_token_uses_address_page() {
        let link = resolve_explorer_link(42161, UNI, ExplorerDataType::Token);
        assert_eq!(link.url, format!("https://arbiscan.io/address/{}", UNI));
        assert_eq!(link.name, "Arbiscan");
    }

    #[test]
    fn test_other_data_types() {
        let tx = resolve_explorer_link(10, "0xabc", ExplorerDataType::Transaction);
        assert_eq!(tx.url, "https://optimistic.etherscan.io/tx/0xabc");

        let block = resolve_explorer_link(137, "123", ExplorerDataType::Block);
        assert_eq!(block.url, "https://polygonscan.com/block/123");
    }

    #[test]
    fn test_unknown_chain_falls_back_to_etherscan() {
        let link = resolve_explorer_link(999_999, UNI, ExplorerDataType::Address);
        assert_eq!(link.url, format!("https://etherscan.io/address/{}", UNI));
    }
}
