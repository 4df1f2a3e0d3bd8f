// ----- standard library imports
// ----- extra library imports
use axum::extract::{Json, Query, State};
use dexgate_webapi::{errors as web_errors, swap as web_swap};
// ----- local imports
use crate::error::Result;
use crate::params::SwapQuoteRequestParams;
use crate::service::{Service, SwapQuoter};

///--------------------------- Swap quote
#[utoipa::path(
    get,
    path = "/swap/quote",
    params(web_swap::SwapQuoteQuery),
    responses (
        (status = 200, description = "Successful response", body = web_swap::SwapQuote, content_type = "application/json"),
        (status = 400, description = "Invalid request or reverting swap", body = web_errors::ErrorReply, content_type = "application/json"),
        (status = 500, description = "Quote could not be computed", body = web_errors::ErrorReply, content_type = "application/json"),
    )
)]
#[tracing::instrument(level = tracing::Level::DEBUG, skip(ctrl))]
pub async fn get_swap_quote<Quoter>(
    State(ctrl): State<Service<Quoter>>,
    Query(query): Query<web_swap::SwapQuoteQuery>,
) -> Result<Json<web_swap::SwapQuote>>
where
    Quoter: SwapQuoter,
{
    tracing::debug!("Received swap quote request");

    let params = SwapQuoteRequestParams::parse(query, ctrl.default_slippage)?;
    let quote = ctrl.quote(&params).await?;
    Ok(Json(quote))
}

///--------------------------- Token list
#[utoipa::path(
    get,
    path = "/swap/tokens",
    responses (
        (status = 200, description = "Successful response", body = Vec<web_swap::TokenSummary>, content_type = "application/json"),
    )
)]
#[tracing::instrument(level = tracing::Level::DEBUG, skip(ctrl))]
pub async fn list_tokens<Quoter>(
    State(ctrl): State<Service<Quoter>>,
) -> Json<Vec<web_swap::TokenSummary>> {
    Json(ctrl.tokens())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_SLIPPAGE_PERCENTAGE;
    use crate::quoter::DummyQuoter;
    use crate::tokens::{self, ChainId};
    use axum::http::StatusCode;
    use dexgate_webapi::amount::Amount;
    use rust_decimal::Decimal;
    use dexgate_webapi::errors::{ErrorReply, GeneralErrorCode, QuoteField, ValidationErrorCode};

    fn server(chain_id: ChainId) -> axum_test::TestServer {
        let srvc = Service {
            quoter: DummyQuoter::default(),
            chain_id,
            default_slippage: DEFAULT_SLIPPAGE_PERCENTAGE,
            tokens: tokens::default_token_metadata().into(),
        };
        axum_test::TestServer::new(crate::routes::<_, DummyQuoter>(srvc)).expect("test server")
    }

    #[tokio::test]
    async fn quote_eth_sell() {
        let server = server(ChainId::Mainnet);
        let response = server
            .get("/swap/quote")
            .add_query_param("sellToken", "ETH")
            .add_query_param("buyToken", "DAI")
            .add_query_param("sellAmount", "1000000000000000000")
            .await;
        response.assert_status_ok();
        let quote: web_swap::SwapQuote = response.json();
        assert_eq!(quote.value, Amount::from(1_000_000_000_000_000_000_u64));
        assert_eq!(
            quote.sell_token_address,
            "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
        );
        // default slippage of 20%
        assert_eq!(quote.guaranteed_price, Decimal::ONE - DEFAULT_SLIPPAGE_PERCENTAGE);
    }

    #[tokio::test]
    async fn quote_insufficient_liquidity() {
        let server = server(ChainId::Mainnet);
        let response = server
            .get("/swap/quote")
            .add_query_param("sellToken", "DAI")
            .add_query_param("buyToken", "ZRX")
            .add_query_param("buyAmount", "1e25")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let reply: ErrorReply = response.json();
        assert_eq!(reply.code, GeneralErrorCode::ValidationError);
        assert_eq!(reply.validation_errors[0].field, QuoteField::BuyAmount);
        assert_eq!(
            reply.validation_errors[0].code,
            ValidationErrorCode::ValueOutOfRange
        );
    }

    #[tokio::test]
    async fn quote_same_token_is_unavailable() {
        let server = server(ChainId::Mainnet);
        let response = server
            .get("/swap/quote")
            .add_query_param("sellToken", "ETH")
            .add_query_param("buyToken", "WETH")
            .add_query_param("sellAmount", "1")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let reply: ErrorReply = response.json();
        assert_eq!(reply.validation_errors[0].field, QuoteField::Token);
    }

    #[tokio::test]
    async fn quote_unsupported_token() {
        let server = server(ChainId::Ganache);
        let response = server
            .get("/swap/quote")
            .add_query_param("sellToken", "DOGE")
            .add_query_param("buyToken", "DAI")
            .add_query_param("sellAmount", "1")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let reply: ErrorReply = response.json();
        assert_eq!(reply.validation_errors[0].field, QuoteField::SellToken);
        assert_eq!(
            reply.validation_errors[0].code,
            ValidationErrorCode::TokenNotSupported
        );
    }

    #[tokio::test]
    async fn quote_missing_buy_token() {
        let server = server(ChainId::Mainnet);
        let response = server
            .get("/swap/quote")
            .add_query_param("sellToken", "DAI")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let reply: ErrorReply = response.json();
        assert_eq!(reply.validation_errors.len(), 1);
        assert_eq!(reply.validation_errors[0].field, QuoteField::BuyToken);
        assert_eq!(
            reply.validation_errors[0].code,
            ValidationErrorCode::RequiredField
        );
    }

    #[tokio::test]
    async fn tokens_for_kovan() {
        let server = server(ChainId::Kovan);
        let response = server.get("/swap/tokens").await;
        response.assert_status_ok();
        let summaries: Vec<web_swap::TokenSummary> = response.json();
        let table = tokens::default_token_metadata();
        assert_eq!(summaries.len(), table.len());
        for (summary, token) in summaries.iter().zip(table.iter()) {
            assert_eq!(summary.symbol, token.symbol);
            assert_eq!(summary.address, token.address(ChainId::Kovan));
        }
    }

    #[tokio::test]
    async fn openapi_document_lists_both_endpoints() {
        let server = server(ChainId::Mainnet);
        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status_ok();
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"].get("/swap/quote").is_some());
        assert!(doc["paths"].get("/swap/tokens").is_some());
    }
}
