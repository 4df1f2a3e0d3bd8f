// ----- standard library imports
// ----- extra library imports
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
// ----- local imports
use crate::amount::Amount;

// ----- end imports

///--------------------------- Swap quote
/// raw query string of `GET /swap/quote`, every value still unparsed
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SwapQuoteQuery {
    /// symbol or address of the token to sell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_token: Option<String>,
    /// symbol or address of the token to buy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_token: Option<String>,
    /// amount of `sellToken` in base units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_amount: Option<String>,
    /// amount of `buyToken` in base units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker_address: Option<String>,
    /// maximum tolerated price movement as a fraction, e.g. `0.03`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LiquiditySource {
    pub name: String,
    pub proportion: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuote {
    pub price: Decimal,
    pub guaranteed_price: Decimal,
    /// contract the taker should send the transaction to
    pub to: String,
    /// hex encoded calldata
    pub data: String,
    /// native asset value to attach to the transaction
    #[schema(value_type = String)]
    pub value: Amount,
    #[schema(value_type = String)]
    pub gas_price: Amount,
    #[schema(value_type = String)]
    pub gas: Amount,
    #[schema(value_type = String)]
    pub protocol_fee: Amount,
    #[schema(value_type = String)]
    pub buy_amount: Amount,
    #[schema(value_type = String)]
    pub sell_amount: Amount,
    pub buy_token_address: String,
    pub sell_token_address: String,
    pub sources: Vec<LiquiditySource>,
}

///--------------------------- Token list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenSummary {
    pub symbol: String,
    pub address: String,
}
