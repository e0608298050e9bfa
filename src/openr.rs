use async_trait::async_trait;
use openrouter_rs::{OpenRouterClient, api::chat::*, types::Role};
use secrecy::ExposeSecret;

use crate::common::{AdvisorError, ApiKey, mask_key_secure};
use crate::dispatch::RemoteModel;

/// Non-streaming chat completion against OpenRouter. One request, one
/// plain-text answer; every failure mode (transport, auth, quota,
/// malformed payload) is flattened into [`AdvisorError::Remote`].
pub struct OpenRouterModel {
    api_key: ApiKey,
    model: String,
}

impl OpenRouterModel {
    pub fn new(api_key: ApiKey, model: String) -> Self {
        Self { api_key, model }
    }
}

#[async_trait]
impl RemoteModel for OpenRouterModel {
    async fn call(&self, prompt: &str) -> Result<String, AdvisorError> {
        if !self.api_key.is_set {
            return Err(AdvisorError::MissingCredential);
        }

        // log the first two and last two characters of the key in case we
        // are not sure whether the right key is used
        log::debug!("using key: {}", mask_key_secure(
            self.api_key.key.expose_secret()));

        let client = OpenRouterClient::builder()
            .api_key(self.api_key.key.expose_secret())
            .build()
            .map_err(|e| AdvisorError::Remote(e.to_string()))?;

        let request = ChatCompletionRequest::builder()
            .model(self.model.clone())
            .messages(vec![Message::new(Role::User, prompt)])
            .build()
            .map_err(|e| AdvisorError::Remote(e.to_string()))?;

        let response = client.send_chat_completion(&request).await
            .map_err(|e| AdvisorError::Remote(e.to_string()))?;

        match response.choices.first().and_then(|choice| choice.content()) {
            Some(answer) if !answer.is_empty() => Ok(answer.to_string()),
            _ => Err(AdvisorError::EmptyReply),
        }
    }
}
