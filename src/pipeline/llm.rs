//! Completion call: build the two-message exchange and ask the provider.
//!
//! Prompt selection lives in [`crate::prompts`] and provider plumbing in
//! [`crate::provider`]; this module only decides what goes on the wire.
//! There is exactly one attempt per analysis. A failure goes straight back
//! to the user, who can press the button again.

use crate::config::AnalysisConfig;
use crate::error::ProviderError;
use crate::provider::{ChatMessage, ChatProvider, ChatResponse, CompletionOptions};
use std::time::Instant;
use tracing::{debug, warn};

/// Build the request messages.
///
/// ## Message Layout
///
/// 1. **System message**: the prompt text exactly as it sits in the editor
/// 2. **User message**: the full extracted document text
pub fn build_messages(prompt: &str, document_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(prompt),
        ChatMessage::user(document_text),
    ]
}

/// Build `CompletionOptions` from the analysis config.
pub fn build_options(config: &AnalysisConfig) -> CompletionOptions {
    CompletionOptions {
        model: config.model.clone(),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}

/// Send the document to the provider and return its trimmed answer.
pub async fn request_analysis(
    provider: &dyn ChatProvider,
    document_text: &str,
    config: &AnalysisConfig,
) -> Result<ChatResponse, ProviderError> {
    let start = Instant::now();
    let messages = build_messages(&config.prompt, document_text);
    let options = build_options(config);

    match provider.chat(&messages, &options).await {
        Ok(mut response) => {
            debug!(
                "{}: {} input tokens, {} output tokens, {:?}",
                provider.name(),
                response.prompt_tokens,
                response.completion_tokens,
                start.elapsed()
            );
            response.content = response.content.trim().to_string();
            Ok(response)
        }
        Err(e) => {
            warn!("{}: completion failed: {}", provider.name(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Role;

    #[test]
    fn build_options_defaults() {
        let config = AnalysisConfig::default();
        let opts = build_options(&config);
        assert_eq!(opts.model, "llama3-8b-8192");
        assert_eq!(opts.temperature, 0.7);
        assert_eq!(opts.max_tokens, 1500);
    }

    #[test]
    fn system_then_user() {
        let msgs = build_messages("You are [role].", "page one page two");
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].role, Role::System);
        assert_eq!(msgs[0].content, "You are [role].");
        assert_eq!(msgs[1].role, Role::User);
        assert_eq!(msgs[1].content, "page one page two");
    }
}
