// ----- standard library imports
// ----- extra library imports
use dexgate_webapi::errors::{ErrorReply, GeneralErrorCode, RevertReason, ValidationErrorItem};
use dexgate_webapi::swap as web_swap;
use thiserror::Error;
// ----- local modules
// ----- local imports
pub use reqwest::Url;

pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid request {0:?}")]
    Validation(Vec<ValidationErrorItem>),
    #[error("swap would revert {0}")]
    Revert(RevertReason),
    #[error("server error {0}")]
    Internal(String),

    #[error("internal error {0}")]
    Reqwest(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct SwapClient {
    cl: reqwest::Client,
    base: reqwest::Url,
}

impl SwapClient {
    pub fn new(base: reqwest::Url) -> Self {
        Self {
            cl: reqwest::Client::new(),
            base,
        }
    }

    pub async fn quote(&self, query: &web_swap::SwapQuoteQuery) -> Result<web_swap::SwapQuote> {
        let url = self.base.join("/swap/quote").expect("quote relative path");
        let res = self.cl.get(url).query(query).send().await?;
        if !res.status().is_success() {
            return Err(Self::reply_error(res).await);
        }
        let quote = res.json::<web_swap::SwapQuote>().await?;
        Ok(quote)
    }

    pub async fn tokens(&self) -> Result<Vec<web_swap::TokenSummary>> {
        let url = self.base.join("/swap/tokens").expect("tokens relative path");
        let res = self.cl.get(url).send().await?.error_for_status()?;
        let tokens = res.json::<Vec<web_swap::TokenSummary>>().await?;
        Ok(tokens)
    }

    async fn reply_error(res: reqwest::Response) -> Error {
        let status = res.status();
        let reply = match res.json::<ErrorReply>().await {
            Ok(reply) => reply,
            Err(e) => return Error::Reqwest(e),
        };
        match (reply.code, reply.values) {
            (GeneralErrorCode::ValidationError, _) => Error::Validation(reply.validation_errors),
            (GeneralErrorCode::TransactionInvalid, Some(revert)) => Error::Revert(revert),
            _ => Error::Internal(format!("{status}: {}", reply.reason)),
        }
    }
}
