use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of a successful create response carrying the generated key.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedDto<T> {
    pub id: T,
}

/// Body identifying an existing record, e.g. the user who just logged in.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdDto<T> {
    pub id: T,
}
