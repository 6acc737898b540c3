use serde::Serialize;

/// Body returned by a successful profile update
#[derive(Debug, Serialize)]
pub struct UpdateResultResponse {
    pub result: &'static str,
}

impl UpdateResultResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
