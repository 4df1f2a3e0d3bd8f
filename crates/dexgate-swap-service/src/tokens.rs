// ----- standard library imports
// ----- extra library imports
use dexgate_webapi::swap::TokenSummary;
use thiserror::Error;
// ----- local imports

/// symbol a taker uses to sell the chain's native asset
pub const NATIVE_TOKEN_SYMBOL: &str = "ETH";
/// the native asset is quoted through its wrapped token
pub const WRAPPED_NATIVE_TOKEN_SYMBOL: &str = "WETH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "u64")]
pub enum ChainId {
    Mainnet = 1,
    Kovan = 42,
    Ganache = 1337,
}

#[derive(Debug, Error)]
#[error("unsupported chain id {0}")]
pub struct UnsupportedChainId(pub u64);

impl std::convert::TryFrom<u64> for ChainId {
    type Error = UnsupportedChainId;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(ChainId::Mainnet),
            42 => Ok(ChainId::Kovan),
            1337 => Ok(ChainId::Ganache),
            _ => Err(UnsupportedChainId(id)),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Could not find token {0}")]
    UnknownToken(String),
}

/// deployment address on every supported chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAddresses {
    pub mainnet: String,
    pub kovan: String,
    pub ganache: String,
}

impl ChainAddresses {
    fn new(mainnet: &str, kovan: &str, ganache: &str) -> Self {
        Self {
            mainnet: String::from(mainnet),
            kovan: String::from(kovan),
            ganache: String::from(ganache),
        }
    }

    pub fn on(&self, chain: ChainId) -> &str {
        match chain {
            ChainId::Mainnet => &self.mainnet,
            ChainId::Kovan => &self.kovan,
            ChainId::Ganache => &self.ganache,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub symbol: String,
    pub addresses: ChainAddresses,
}

impl TokenMetadata {
    fn new(symbol: &str, addresses: ChainAddresses) -> Self {
        Self {
            symbol: String::from(symbol),
            addresses,
        }
    }

    pub fn address(&self, chain: ChainId) -> &str {
        self.addresses.on(chain)
    }
}

/// tokens the gateway quotes out of the box, in listing order
pub fn default_token_metadata() -> Vec<TokenMetadata> {
    vec![
        TokenMetadata::new(
            "DAI",
            ChainAddresses::new(
                "0x6b175474e89094c44da98b954eedeac495271d0f",
                "0x4f96fe3b7a6cf9725f59d353f723c1bdb64ca6aa",
                "0x34d402f14d58e001d8efbe6585051bf9706aa064",
            ),
        ),
        TokenMetadata::new(
            "REP",
            ChainAddresses::new(
                "0x1985365e9f78359a9b6ad760e32412f4a445e862",
                "0x8cb3971b8eb709c14616bd556ff6683019e90d9c",
                // ganache snapshot dummy tokens
                "0x25b8fe1de9daf8ba351890744ff28cf7dfa8f5e3",
            ),
        ),
        TokenMetadata::new(
            "USDC",
            ChainAddresses::new(
                "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
                "0x75b0622cec14130172eae9cf166b92e5c112faff",
                "0xcdb594a32b1cc3479d8746279712c39d18a07fc0",
            ),
        ),
        TokenMetadata::new(
            "WETH",
            ChainAddresses::new(
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
                "0xd0a1e359811322d97991e03f863a0c30c2cf029c",
                "0x0b1ba0af832d7c05fd64161e0db78e85978e8082",
            ),
        ),
        TokenMetadata::new(
            "ZRX",
            ChainAddresses::new(
                "0xe41d2489571d322189246dafa5ebde1f4699f498",
                "0x2002d3812f58e35f0ea1ffbf80a75a38c32175fa",
                "0x871dd7c2b4b25e1aa18728e9d5f2af4c4e431f5c",
            ),
        ),
    ]
}

pub fn is_token_address(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// resolves a symbol (or a literal address) to the token address on `chain`
pub fn find_token_address(
    tokens: &[TokenMetadata],
    symbol_or_address: &str,
    chain: ChainId,
) -> Result<String, LookupError> {
    if is_token_address(symbol_or_address) {
        return Ok(symbol_or_address.to_lowercase());
    }
    let symbol = if symbol_or_address == NATIVE_TOKEN_SYMBOL {
        WRAPPED_NATIVE_TOKEN_SYMBOL
    } else {
        symbol_or_address
    };
    tokens
        .iter()
        .find(|token| token.symbol.eq_ignore_ascii_case(symbol))
        .map(|token| String::from(token.address(chain)))
        .ok_or_else(|| LookupError::UnknownToken(String::from(symbol_or_address)))
}

pub fn token_summaries(tokens: &[TokenMetadata], chain: ChainId) -> Vec<TokenSummary> {
    tokens
        .iter()
        .map(|token| TokenSummary {
            symbol: token.symbol.clone(),
            address: String::from(token.address(chain)),
        })
        .collect()
}
