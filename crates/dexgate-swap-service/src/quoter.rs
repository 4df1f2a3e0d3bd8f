// ----- standard library imports
// ----- extra library imports
use anyhow::anyhow;
use async_trait::async_trait;
use dexgate_webapi::errors::RevertReason;
use dexgate_webapi::swap::SwapQuote;
// ----- local imports
use crate::service::{CalculateSwapQuoteParams, QuoterError, QuoterResult, SwapQuoter};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RestQuoterConfig {
    pub base_url: reqwest::Url,
}

/// error body of the quoting engine
#[derive(Debug, serde::Deserialize)]
struct UpstreamErrorReply {
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    revert: Option<RevertReason>,
}

/// Forwards quote calculations to an upstream quoting engine over HTTP.
#[derive(Debug, Clone)]
pub struct RestQuoter {
    cl: reqwest::Client,
    base: reqwest::Url,
}

impl RestQuoter {
    pub fn new(cfg: RestQuoterConfig) -> Self {
        let mut base = cfg.base_url;
        // endpoints join relative to the configured path prefix
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            cl: reqwest::Client::new(),
            base,
        }
    }
}

#[async_trait]
impl SwapQuoter for RestQuoter {
    async fn calculate_swap_quote(
        &self,
        params: &CalculateSwapQuoteParams,
    ) -> QuoterResult<SwapQuote> {
        let url = self.base.join("v1/quote").expect("quote relative path");
        let res = self
            .cl
            .post(url)
            .json(params)
            .send()
            .await
            .map_err(|e| QuoterError::Upstream(e.into()))?;
        let status = res.status();
        if status.is_success() {
            return res
                .json::<SwapQuote>()
                .await
                .map_err(|e| QuoterError::Upstream(e.into()));
        }

        let reply = res.json::<UpstreamErrorReply>().await.map_err(|e| {
            QuoterError::Upstream(anyhow!("quoting engine replied {status}: {e}"))
        })?;
        tracing::debug!("quoting engine replied {status} with code {}", reply.code);
        if let Some(revert) = reply.revert {
            return Err(QuoterError::Revert(revert));
        }
        // the code leads the message, classification relies on it
        if reply.message.is_empty() {
            Err(QuoterError::Upstream(anyhow!(reply.code)))
        } else {
            Err(QuoterError::Upstream(anyhow!(
                "{}: {}",
                reply.code,
                reply.message
            )))
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use dummy::DummyQuoter;

#[cfg(any(test, feature = "test-utils"))]
mod dummy {
    use super::*;
    use crate::service::{ASSET_UNAVAILABLE, INSUFFICIENT_ASSET_LIQUIDITY};
    use dexgate_webapi::amount::Amount;
    use dexgate_webapi::swap::LiquiditySource;
    use rust_decimal::Decimal;

    const EXCHANGE_PROXY: &str = "0xdef1c0ded9bec7f1a1670819833240f027b25eff";
    const DEFAULT_GAS_PRICE: u64 = 1_000_000_000;
    const ESTIMATED_GAS: u64 = 150_000;

    /// Quotes every pair 1:1 against a fixed liquidity cap.
    #[derive(Debug, Clone)]
    pub struct DummyQuoter {
        pub liquidity_cap: Amount,
    }

    impl Default for DummyQuoter {
        fn default() -> Self {
            // one million tokens of 18 decimals
            Self {
                liquidity_cap: Amount::from(1_000_000_000_000_000_000_000_000_u128),
            }
        }
    }

    #[async_trait]
    impl SwapQuoter for DummyQuoter {
        async fn calculate_swap_quote(
            &self,
            params: &CalculateSwapQuoteParams,
        ) -> QuoterResult<SwapQuote> {
            if params.sell_token_address == params.buy_token_address {
                return Err(QuoterError::Upstream(anyhow!(
                    "{ASSET_UNAVAILABLE}: no pair for {}",
                    params.sell_token_address
                )));
            }
            let amount = params
                .buy_amount
                .or(params.sell_amount)
                .unwrap_or(Amount::ZERO);
            if amount > self.liquidity_cap {
                return Err(QuoterError::Upstream(anyhow!(
                    "{INSUFFICIENT_ASSET_LIQUIDITY}: {amount} exceeds {}",
                    self.liquidity_cap
                )));
            }
            let guaranteed_price = (Decimal::ONE - params.slippage_percentage).max(Decimal::ZERO);
            let value = if params.is_eth_sell {
                amount
            } else {
                Amount::ZERO
            };
            Ok(SwapQuote {
                price: Decimal::ONE,
                guaranteed_price,
                to: String::from(EXCHANGE_PROXY),
                data: String::from("0x"),
                value,
                gas_price: params
                    .gas_price
                    .unwrap_or(Amount::from(DEFAULT_GAS_PRICE)),
                gas: Amount::from(ESTIMATED_GAS),
                protocol_fee: Amount::ZERO,
                buy_amount: amount,
                sell_amount: amount,
                buy_token_address: params.buy_token_address.clone(),
                sell_token_address: params.sell_token_address.clone(),
                sources: vec![LiquiditySource {
                    name: String::from("Dummy"),
                    proportion: Decimal::ONE,
                }],
            })
        }
    }
}
