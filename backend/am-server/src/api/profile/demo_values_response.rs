use serde::Serialize;

/// Fixed demo payload served by `/vals`
#[derive(Debug, Serialize)]
pub struct DemoValuesResponse {
    pub a: &'static str,
}

impl Default for DemoValuesResponse {
    fn default() -> Self {
        Self { a: "100" }
    }
}
