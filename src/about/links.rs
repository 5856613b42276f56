use crate::chain::{Chain, ChainDirectory, ChainId, ExplorerDataType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Explorer,
    Analytics,
    Website,
    Twitter,
}

/// One entry of the links row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub kind: ResourceKind,
    pub name: String,
    pub url: String,
}

impl ResourceLink {
    fn new(kind: ResourceKind, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            url: url.into(),
        }
    }
}

pub fn twitter_url(handle: &str) -> String {
    format!("https://twitter.com/{}", handle)
}

/// `{info_link}tokens/{address}` with the address lowercased, or `None`
/// when the directory knows nothing about the chain.
pub fn info_link<D: ChainDirectory + ?Sized>(
    directory: &D,
    address: &str,
    chain_id: ChainId,
) -> Option<String> {
    let base = directory.chain_info(chain_id)?.info_link;
    Some(format!("{}tokens/{}", base, address.to_lowercase()))
}

/// Links in display order: explorer, analytics, then website and Twitter
/// when present.
pub fn build_resource_links<D: ChainDirectory + ?Sized>(
    directory: &D,
    address: &str,
    chain: Chain,
    homepage_url: Option<&str>,
    twitter_name: Option<&str>,
) -> Vec<ResourceLink> {
    let chain_id = directory.chain_id(chain);
    let explorer = directory.explorer_link(chain_id, address, ExplorerDataType::Token);

    let mut links = vec![ResourceLink::new(ResourceKind::Explorer, explorer.name, explorer.url)];

    match info_link(directory, address, chain_id) {
        Some(url) => links.push(ResourceLink::new(
            ResourceKind::Analytics,
            "More analytics",
            url,
        )),
        None => tracing::warn!(%chain, chain_id, "no analytics site for chain, skipping link"),
    }

    if let Some(homepage) = homepage_url {
        links.push(ResourceLink::new(ResourceKind::Website, "Website", homepage));
    }
    if let Some(handle) = twitter_name {
        links.push(ResourceLink::new(ResourceKind::Twitter, "Twitter", twitter_url(handle)));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{BuiltinChains, ChainInfo, ExplorerLink};

    const ADDRESS: &str = "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984";

    fn kinds(links: &[ResourceLink]) -> Vec<ResourceKind> {
        links.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_all_links_in_order() {
        let links = build_resource_links(
            &BuiltinChains,
            ADDRESS,
            Chain::Ethereum,
            Some("https://uniswap.org"),
            Some("Uniswap"),
        );
        assert_eq!(
            kinds(&links),
            vec![
                ResourceKind::Explorer,
                ResourceKind::Analytics,
                ResourceKind::Website,
                ResourceKind::Twitter
            ]
        );
        assert_eq!(links[2].url, "https://uniswap.org");
        assert_eq!(links[3].url, "https://twitter.com/Uniswap");
    }

    #[test]
    fn test_twitter_without_homepage() {
        let links =
            build_resource_links(&BuiltinChains, ADDRESS, Chain::Polygon, None, Some("uni"));
        assert_eq!(
            kinds(&links),
            vec![ResourceKind::Explorer, ResourceKind::Analytics, ResourceKind::Twitter]
        );
        assert_eq!(links[0].name, "Polygonscan");
    }

    #[test]
    fn test_analytics_link_lowercases_address() {
        let links = build_resource_links(&BuiltinChains, ADDRESS, Chain::Optimism, None, None);
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].name, "More analytics");
        assert_eq!(
            links[1].url,
            "https://info.uniswap.org/#/optimism/tokens/0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"
        );
    }

    struct NoInfoChains;

    impl ChainDirectory for NoInfoChains {
        fn chain_id(&self, _chain: Chain) -> ChainId {
            7
        }

        fn chain_info(&self, _chain_id: ChainId) -> Option<&ChainInfo> {
            None
        }

        fn explorer_link(
            &self,
            _chain_id: ChainId,
            data: &str,
            _kind: ExplorerDataType,
        ) -> ExplorerLink {
            ExplorerLink {
                url: format!("https://scan.example/{}", data),
                name: "Scan".to_string(),
            }
        }
    }

    #[test]
    fn test_missing_chain_info_skips_analytics() {
        let links = build_resource_links(
            &NoInfoChains,
            "0xAB",
            Chain::Celo,
            Some("https://x.io"),
            None,
        );
        assert_eq!(kinds(&links), vec![ResourceKind::Explorer, ResourceKind::Website]);
        assert_eq!(links[0].url, "https://scan.example/0xAB");
    }
}
