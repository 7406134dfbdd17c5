use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful single-payload response: `{"success": true, "data": ...}`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Successful collection response without pagination.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CollectionResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Failure response: `{"success": false}` with an optional short message.
///
/// Internal details never reach this type; they are logged server-side.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorDto {
    pub fn new() -> Self {
        Self {
            success: false,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl Default for ErrorDto {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty object returned as `data` by delete endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct EmptyDto {}

/// Page reference inside a pagination summary.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
pub struct PageRefDto {
    pub page: u64,
    pub limit: u64,
}

/// Pagination summary; an absent key means there is no such page.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, ToSchema)]
pub struct PaginationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRefDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRefDto>,
}
