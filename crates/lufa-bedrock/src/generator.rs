//! The structured-generation capability and its Bedrock implementation.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use lufa_core::schema::SchemaDescriptor;
use tracing::{info, warn};

use crate::error::TransportError;
use crate::prompt::build_system_prompt;
use crate::tokens;

const DEFAULT_MAX_TOKENS: i32 = 8192;

/// A text-generation service that accepts a prompt plus a shape description
/// and returns text expected to decode to that shape.
///
/// `Ok(None)` means the call completed but produced no payload.
#[async_trait]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Option<String>, TransportError>;
}

/// [`StructuredGenerator`] backed by the Bedrock Converse API.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
    max_tokens: i32,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), model_id)
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Upper bound on generated tokens. A plan cut off by this limit decodes
    /// as a malformed payload.
    pub fn with_max_tokens(mut self, max_tokens: i32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl StructuredGenerator for BedrockGenerator {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Option<String>, TransportError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| TransportError(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(build_system_prompt(schema)))
            .messages(message)
            .inference_config(
                InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| TransportError(e.into_service_error().to_string()))?;

        if let Some(usage) = response.usage() {
            let usage = tokens::usage_for(&self.model_id, tokens::extract_token_count(usage));
            info!(
                model_id = %self.model_id,
                input_tokens = usage.tokens.input,
                output_tokens = usage.tokens.output,
                cost_usd = usage.cost_usd,
                stop_reason = ?response.stop_reason(),
                "converse call settled"
            );
        }

        let Some(output_message) = response.output().and_then(|o| o.as_message().ok()) else {
            warn!(model_id = %self.model_id, "no message in converse response");
            return Ok(None);
        };

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }
}
