use crate::modules::accounts::core::ports::{HashError, PasswordHasher};
use tokio::sync::Mutex;

/// Hasher double that returns a fixed value (or a fixed error) and records its inputs.
pub struct StubPasswordHasher {
    output: String,
    failure: Option<HashError>,
    calls: Mutex<Vec<String>>,
}

impl Default for StubPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StubPasswordHasher {
    pub fn new() -> Self {
        Self::returning("hashed_password")
    }

    pub fn returning(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: HashError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        self.calls.lock().await.push(plaintext.to_string());
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.output.clone()),
        }
    }
}
