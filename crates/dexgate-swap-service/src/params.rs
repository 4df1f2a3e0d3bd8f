// ----- standard library imports
use std::str::FromStr;
// ----- extra library imports
use dexgate_webapi::amount::{Amount, AmountParseError};
use dexgate_webapi::errors::{QuoteField, ValidationErrorCode, ValidationErrorItem};
use dexgate_webapi::swap::SwapQuoteQuery;
use rust_decimal::Decimal;
// ----- local imports
use crate::error::{Error, Result};
use crate::tokens::NATIVE_TOKEN_SYMBOL;

/// default tolerated price movement, 20%
pub const DEFAULT_SLIPPAGE_PERCENTAGE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuoteRequestParams {
    pub sell_token: String,
    pub buy_token: String,
    pub sell_amount: Option<Amount>,
    pub buy_amount: Option<Amount>,
    pub taker_address: Option<String>,
    pub slippage_percentage: Decimal,
    pub gas_price: Option<Amount>,
}

impl SwapQuoteRequestParams {
    /// Type-coerces the raw query string.
    ///
    /// Absent amounts stay unset. No business rule is checked here: whether
    /// exactly one of `sellAmount`/`buyAmount` is given is left to the quoter.
    /// Values that are not numbers at all are reported, all fields at once.
    pub fn parse(query: SwapQuoteQuery, default_slippage: Decimal) -> Result<Self> {
        let SwapQuoteQuery {
            sell_token,
            buy_token,
            sell_amount,
            buy_amount,
            taker_address,
            slippage_percentage,
            gas_price,
        } = query;

        let mut failures = Vec::new();
        let sell_token = required(sell_token, QuoteField::SellToken, &mut failures);
        let buy_token = required(buy_token, QuoteField::BuyToken, &mut failures);
        let sell_amount = amount(sell_amount, QuoteField::SellAmount, &mut failures);
        let buy_amount = amount(buy_amount, QuoteField::BuyAmount, &mut failures);
        let gas_price = amount(gas_price, QuoteField::GasPrice, &mut failures);
        let slippage_percentage = decimal(
            slippage_percentage,
            QuoteField::SlippagePercentage,
            &mut failures,
        )
        .unwrap_or(default_slippage);

        if !failures.is_empty() {
            return Err(Error::Validation(failures));
        }
        Ok(Self {
            sell_token: sell_token.unwrap_or_default(),
            buy_token: buy_token.unwrap_or_default(),
            sell_amount,
            buy_amount,
            taker_address,
            slippage_percentage,
            gas_price,
        })
    }

    pub fn is_eth_sell(&self) -> bool {
        self.sell_token == NATIVE_TOKEN_SYMBOL
    }
}

fn required(
    value: Option<String>,
    field: QuoteField,
    failures: &mut Vec<ValidationErrorItem>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            failures.push(ValidationErrorItem {
                field,
                code: ValidationErrorCode::RequiredField,
                reason: format!("requires property \"{field}\""),
            });
            None
        }
    }
}

fn amount(
    value: Option<String>,
    field: QuoteField,
    failures: &mut Vec<ValidationErrorItem>,
) -> Option<Amount> {
    let raw = value?;
    match Amount::from_str(&raw) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            let code = match e {
                AmountParseError::Overflow(_) => ValidationErrorCode::ValueOutOfRange,
                AmountParseError::NotANumber(_) | AmountParseError::Fractional(_) => {
                    ValidationErrorCode::IncorrectFormat
                }
            };
            failures.push(ValidationErrorItem {
                field,
                code,
                reason: e.to_string(),
            });
            None
        }
    }
}

fn decimal(
    value: Option<String>,
    field: QuoteField,
    failures: &mut Vec<ValidationErrorItem>,
) -> Option<Decimal> {
    let raw = value?;
    match Decimal::from_str(&raw).or_else(|_| Decimal::from_scientific(&raw)) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            failures.push(ValidationErrorItem {
                field,
                code: ValidationErrorCode::IncorrectFormat,
                reason: format!("{raw} is not a number"),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(sell_token: &str, buy_token: &str) -> SwapQuoteQuery {
        SwapQuoteQuery {
            sell_token: Some(String::from(sell_token)),
            buy_token: Some(String::from(buy_token)),
            ..Default::default()
        }
    }

    #[test]
    fn default_slippage_is_twenty_percent() {
        assert_eq!(DEFAULT_SLIPPAGE_PERCENTAGE, Decimal::from_str("0.2").unwrap());
    }

    #[test]
    fn parse_without_slippage_uses_default() {
        let params =
            SwapQuoteRequestParams::parse(query("DAI", "WETH"), DEFAULT_SLIPPAGE_PERCENTAGE)
                .unwrap();
        assert_eq!(params.slippage_percentage, DEFAULT_SLIPPAGE_PERCENTAGE);
    }

    #[test]
    fn parse_with_slippage() {
        let mut q = query("DAI", "WETH");
        q.slippage_percentage = Some(String::from("0.03"));
        let params = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap();
        assert_eq!(params.slippage_percentage, Decimal::from_str("0.03").unwrap());
    }

    #[test]
    fn parse_leaves_absent_amounts_unset() {
        let mut q = query("DAI", "WETH");
        q.sell_amount = Some(String::from("1000000000000000000"));
        let params = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap();
        assert_eq!(params.sell_amount, Some(Amount::from(1_000_000_000_000_000_000_u64)));
        assert_eq!(params.buy_amount, None);
        assert_eq!(params.gas_price, None);
        assert_eq!(params.taker_address, None);
    }

    #[test]
    fn parse_accepts_scientific_amounts() {
        let mut q = query("DAI", "WETH");
        q.buy_amount = Some(String::from("1e18"));
        q.gas_price = Some(String::from("20000000000"));
        let params = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap();
        assert_eq!(params.buy_amount, Some(Amount::from(1_000_000_000_000_000_000_u64)));
        assert_eq!(params.gas_price, Some(Amount::from(20_000_000_000_u64)));
    }

    #[test]
    fn parse_amounts_beyond_96_bits() {
        let mut q = query("SHIB", "WETH");
        q.sell_amount = Some(String::from("1000000000000000000000000000000"));
        q.buy_amount = Some(String::from("1e30"));
        let params = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap();
        assert_eq!(params.sell_amount, params.buy_amount);
        assert_eq!(
            params.sell_amount.unwrap().to_string(),
            "1000000000000000000000000000000"
        );
    }

    #[test]
    fn parse_amount_beyond_uint256_is_out_of_range() {
        let mut q = query("DAI", "WETH");
        q.sell_amount = Some(String::from("1e80"));
        q.buy_amount = Some(String::from("0.5"));
        let err = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap_err();
        let items = match err {
            Error::Validation(items) => items,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].field, QuoteField::SellAmount);
        assert_eq!(items[0].code, ValidationErrorCode::ValueOutOfRange);
        assert_eq!(items[1].field, QuoteField::BuyAmount);
        assert_eq!(items[1].code, ValidationErrorCode::IncorrectFormat);
    }

    #[test]
    fn parse_does_not_require_exactly_one_amount() {
        let mut q = query("DAI", "WETH");
        q.sell_amount = Some(String::from("1"));
        q.buy_amount = Some(String::from("2"));
        let params = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap();
        assert!(params.sell_amount.is_some() && params.buy_amount.is_some());
    }

    #[test]
    fn parse_reports_every_malformed_field() {
        let mut q = query("DAI", "WETH");
        q.sell_amount = Some(String::from("lots"));
        q.gas_price = Some(String::from("fast"));
        let err = SwapQuoteRequestParams::parse(q, DEFAULT_SLIPPAGE_PERCENTAGE).unwrap_err();
        let items = match err {
            Error::Validation(items) => items,
            other => panic!("expected validation error, got {other:?}"),
        };
        let fields: Vec<_> = items.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec![QuoteField::SellAmount, QuoteField::GasPrice]);
        assert!(items
            .iter()
            .all(|i| i.code == ValidationErrorCode::IncorrectFormat));
    }

    #[test]
    fn parse_missing_tokens() {
        let err = SwapQuoteRequestParams::parse(SwapQuoteQuery::default(), DEFAULT_SLIPPAGE_PERCENTAGE)
            .unwrap_err();
        let items = match err {
            Error::Validation(items) => items,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].field, QuoteField::SellToken);
        assert_eq!(items[0].code, ValidationErrorCode::RequiredField);
        assert_eq!(items[1].field, QuoteField::BuyToken);
    }

    #[test]
    fn eth_sell_flag() {
        let params =
            SwapQuoteRequestParams::parse(query("ETH", "DAI"), DEFAULT_SLIPPAGE_PERCENTAGE)
                .unwrap();
        assert!(params.is_eth_sell());
        for symbol in ["WETH", "DAI", "eth"] {
            let params =
                SwapQuoteRequestParams::parse(query(symbol, "ZRX"), DEFAULT_SLIPPAGE_PERCENTAGE)
                    .unwrap();
            assert!(!params.is_eth_sell());
        }
    }
}
