//! Response envelope markers shared by every endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of the `status` field carried by every JSON response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
    ValidationError,
    Warning,
    PartialSuccess,
}
