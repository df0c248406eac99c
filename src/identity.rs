/// Labels the backend reports about itself in every greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    pub message: String,
    pub service: String,
    pub language: String,
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self {
            message: "Hello from the Rust backend!".to_string(),
            service: "Axum HTTP Server".to_string(),
            language: "Rust".to_string(),
        }
    }
}
