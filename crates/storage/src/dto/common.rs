use serde::Deserialize;
use utoipa::IntoParams;

fn default_limit() -> i64 {
    100
}

/// Offset/limit pagination accepted by every list endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Rows to skip
    #[serde(default)]
    pub offset: i64,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: i64,
}
