/// Builds Solana Explorer links for the cluster the dashboard talks to.
#[derive(Debug, Clone)]
pub struct Explorer {
    cluster: String,
}

const EXPLORER_URL: &str = "https://explorer.solana.com";
const LINK_TEXT_LEN: usize = 25;

impl Explorer {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
        }
    }

    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}{}", EXPLORER_URL, address, self.cluster_query())
    }

    pub fn tx_url(&self, signature: &str) -> String {
        format!("{}/tx/{}{}", EXPLORER_URL, signature, self.cluster_query())
    }

    /// HTML anchor for an address, text cut to the first 25 characters.
    pub fn address_link(&self, address: &str) -> String {
        anchor(&self.address_url(address), address)
    }

    pub fn tx_link(&self, signature: &str) -> String {
        anchor(&self.tx_url(signature), signature)
    }

    fn cluster_query(&self) -> String {
        // Explorer defaults to mainnet
        if self.cluster.is_empty() || self.cluster == "mainnet-beta" {
            String::new()
        } else {
            format!("?cluster={}", self.cluster)
        }
    }
}

fn anchor(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}...</a>", href, link_text(text))
}

fn link_text(text: &str) -> &str {
    match text.char_indices().nth(LINK_TEXT_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
