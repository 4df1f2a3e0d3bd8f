// ----- standard library imports
// ----- extra library imports
use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use rust_decimal::Decimal;
use utoipa::OpenApi;
// ----- local modules
mod error;
mod params;
mod quoter;
mod service;
mod tokens;
mod web;
// ----- local imports

pub use tokens::ChainId;

pub type ProdSwapQuoter = quoter::RestQuoter;
pub type ProdSwapService = service::Service<ProdSwapQuoter>;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct AppConfig {
    chain_id: ChainId,
    #[serde(default = "default_slippage_percentage")]
    default_slippage_percentage: Decimal,
    quoter: quoter::RestQuoterConfig,
}

fn default_slippage_percentage() -> Decimal {
    params::DEFAULT_SLIPPAGE_PERCENTAGE
}

#[derive(Clone, FromRef)]
pub struct AppController {
    swap: ProdSwapService,
}

impl AppController {
    pub fn new(cfg: AppConfig) -> Self {
        let AppConfig {
            chain_id,
            default_slippage_percentage,
            quoter,
        } = cfg;

        let srv = ProdSwapService {
            quoter: ProdSwapQuoter::new(quoter),
            chain_id,
            default_slippage: default_slippage_percentage,
            tokens: tokens::default_token_metadata().into(),
        };
        Self { swap: srv }
    }
}

pub fn routes<Cntrlr, Quoter>(ctrl: Cntrlr) -> Router
where
    Quoter: service::SwapQuoter + Clone + Send + Sync + 'static,
    service::Service<Quoter>: FromRef<Cntrlr>,
    Cntrlr: Send + Sync + Clone + 'static,
{
    let swagger = utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/swap/quote", get(web::get_swap_quote::<Quoter>))
        .route("/swap/tokens", get(web::list_tokens::<Quoter>))
        .with_state(ctrl)
        .merge(swagger)
}

#[derive(utoipa::OpenApi)]
#[openapi(
    components(schemas(
        dexgate_webapi::errors::ErrorReply,
        dexgate_webapi::errors::QuoteField,
        dexgate_webapi::errors::RevertReason,
        dexgate_webapi::errors::ValidationErrorItem,
        dexgate_webapi::swap::LiquiditySource,
        dexgate_webapi::swap::SwapQuote,
        dexgate_webapi::swap::TokenSummary,
    ),),
    paths(crate::web::get_swap_quote, crate::web::list_tokens,)
)]
struct ApiDoc;

#[cfg(feature = "test-utils")]
pub mod test_utils {
    use super::*;

    pub use crate::quoter::DummyQuoter;
    pub type TestSwapService = service::Service<DummyQuoter>;

    #[derive(Clone, FromRef)]
    pub struct AppController {
        swap: TestSwapService,
    }

    impl AppController {
        pub fn new(chain_id: ChainId, quoter: DummyQuoter) -> Self {
            let srv = TestSwapService {
                quoter,
                chain_id,
                default_slippage: params::DEFAULT_SLIPPAGE_PERCENTAGE,
                tokens: tokens::default_token_metadata().into(),
            };
            Self { swap: srv }
        }
    }

    impl Default for AppController {
        fn default() -> Self {
            Self::new(ChainId::Mainnet, DummyQuoter::default())
        }
    }

    pub fn build_test_server() -> axum_test::TestServer {
        build_test_server_with(AppController::default())
    }

    pub fn build_test_server_with(cntrl: AppController) -> axum_test::TestServer {
        let cfg = axum_test::TestServerConfig {
            transport: Some(axum_test::Transport::HttpRandomPort),
            ..Default::default()
        };
        axum_test::TestServer::new_with_config(routes::<_, DummyQuoter>(cntrl), cfg)
            .expect("failed to start test server")
    }
}
