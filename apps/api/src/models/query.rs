use serde::{Deserialize, Serialize};

/// Body of `POST /query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Envelope shared by every successful API response.
#[derive(Debug, Clone, Serialize)]
pub struct BaseResponse<T: Serialize> {
    pub status_code: u16,
    pub description: String,
    pub data: Option<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryResults {
    pub results: String,
}

impl<T: Serialize> BaseResponse<T> {
    pub fn ok(description: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 200,
            description: description.into(),
            data: Some(data),
        }
    }
}
