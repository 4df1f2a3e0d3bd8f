// ----- standard library imports
// ----- extra library imports
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use utoipa::ToSchema;
// ----- local imports

// ----- end imports

/// top level code of every error reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum GeneralErrorCode {
    ValidationError = 100,
    InternalError = 104,
    TransactionInvalid = 106,
}

/// per-field code inside `validationErrors`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum ValidationErrorCode {
    RequiredField = 1000,
    IncorrectFormat = 1001,
    ValueOutOfRange = 1004,
    TokenNotSupported = 1009,
}

/// request fields a validation error can point at
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, strum::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum QuoteField {
    SellToken,
    BuyToken,
    SellAmount,
    BuyAmount,
    SlippagePercentage,
    GasPrice,
    /// either side of the pair, when the quoter cannot tell which one
    Token,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorItem {
    pub field: QuoteField,
    #[schema(value_type = u16)]
    pub code: ValidationErrorCode,
    pub reason: String,
}

/// on-chain revert as reported by the quoting engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RevertReason {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// raw revert data, hex encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl std::fmt::Display for RevertReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}({})", self.name, message),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReply {
    #[schema(value_type = u16)]
    pub code: GeneralErrorCode,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<ValidationErrorItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<RevertReason>,
}
