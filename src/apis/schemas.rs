use serde::Serialize;
use utoipa::ToSchema;

// ------------------------------------------ General Error API ------------------------------------------
// Shared error body. Relay failures are reported with this shape at status 200,
// validation failures at status 400.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
