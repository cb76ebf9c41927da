pub mod user;

use serde::Serialize;
use utoipa::ToSchema;

/// Error body shape shared by every failing response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Email already registered")]
    pub detail: String,
}
