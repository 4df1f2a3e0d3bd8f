// ----- standard library imports
use std::sync::Arc;
// ----- extra library imports
use async_trait::async_trait;
use dexgate_webapi::amount::Amount;
use dexgate_webapi::errors::{QuoteField, RevertReason, ValidationErrorCode};
use dexgate_webapi::swap::{SwapQuote, TokenSummary};
use rust_decimal::Decimal;
use thiserror::Error;
// ----- local imports
use crate::error::{Error, Result};
use crate::params::SwapQuoteRequestParams;
use crate::tokens::{self, ChainId, TokenMetadata};

/// code prefixed to the quoter's message when no route can fill the amount
pub const INSUFFICIENT_ASSET_LIQUIDITY: &str = "INSUFFICIENT_ASSET_LIQUIDITY";
/// code prefixed to the quoter's message when one side of the pair has no liquidity at all
pub const ASSET_UNAVAILABLE: &str = "ASSET_UNAVAILABLE";

#[derive(Debug, Error)]
pub enum QuoterError {
    /// the quoter already produced an API error, it goes out untouched
    #[error(transparent)]
    Api(#[from] Error),
    #[error("execution reverted: {0}")]
    Revert(RevertReason),
    #[error("{0}")]
    Upstream(anyhow::Error),
}
pub type QuoterResult<T> = std::result::Result<T, QuoterError>;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSwapQuoteParams {
    pub sell_token_address: String,
    pub buy_token_address: String,
    pub sell_amount: Option<Amount>,
    pub buy_amount: Option<Amount>,
    /// taker address
    pub from: Option<String>,
    #[serde(rename = "isETHSell")]
    pub is_eth_sell: bool,
    pub slippage_percentage: Decimal,
    pub gas_price: Option<Amount>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SwapQuoter: Send + Sync {
    async fn calculate_swap_quote(
        &self,
        params: &CalculateSwapQuoteParams,
    ) -> QuoterResult<SwapQuote>;
}

#[derive(Clone)]
pub struct Service<Quoter> {
    pub quoter: Quoter,
    pub chain_id: ChainId,
    pub default_slippage: Decimal,
    pub tokens: Arc<[TokenMetadata]>,
}

impl<Quoter> Service<Quoter> {
    fn resolve(&self, symbol: &str, field: QuoteField) -> Result<String> {
        tokens::find_token_address(&self.tokens, symbol, self.chain_id).map_err(|e| {
            Error::validation(field, ValidationErrorCode::TokenNotSupported, e.to_string())
        })
    }

    pub fn tokens(&self) -> Vec<TokenSummary> {
        tokens::token_summaries(&self.tokens, self.chain_id)
    }
}

impl<Quoter> Service<Quoter>
where
    Quoter: SwapQuoter,
{
    pub async fn quote(&self, params: &SwapQuoteRequestParams) -> Result<SwapQuote> {
        let is_eth_sell = params.is_eth_sell();
        let sell_token_address = self.resolve(&params.sell_token, QuoteField::SellToken)?;
        let buy_token_address = self.resolve(&params.buy_token, QuoteField::BuyToken)?;
        tracing::debug!(
            sell_token = %sell_token_address,
            buy_token = %buy_token_address,
            is_eth_sell,
            "Requesting swap quote"
        );

        let request = CalculateSwapQuoteParams {
            sell_token_address,
            buy_token_address,
            sell_amount: params.sell_amount,
            buy_amount: params.buy_amount,
            from: params.taker_address.clone(),
            is_eth_sell,
            slippage_percentage: params.slippage_percentage,
            gas_price: params.gas_price,
        };
        self.quoter
            .calculate_swap_quote(&request)
            .await
            .map_err(|e| classify_quote_error(e, params))
    }
}

/// Maps a quoter failure onto the API error taxonomy.
///
/// Precedence: already classified, revert, known code prefixes, everything else.
pub fn classify_quote_error(err: QuoterError, params: &SwapQuoteRequestParams) -> Error {
    let err = match err {
        QuoterError::Api(api) => return api,
        QuoterError::Revert(revert) => return Error::Revert(revert),
        QuoterError::Upstream(err) => err,
    };
    let message = err.to_string();
    if message.starts_with(INSUFFICIENT_ASSET_LIQUIDITY) {
        let field = if params.buy_amount.is_some() {
            QuoteField::BuyAmount
        } else {
            QuoteField::SellAmount
        };
        return Error::validation(field, ValidationErrorCode::ValueOutOfRange, message);
    }
    if message.starts_with(ASSET_UNAVAILABLE) {
        return Error::validation(
            QuoteField::Token,
            ValidationErrorCode::ValueOutOfRange,
            message,
        );
    }
    tracing::info!(error = ?err, "Unclassified swap quote failure");
    Error::InternalServer(message)
}
