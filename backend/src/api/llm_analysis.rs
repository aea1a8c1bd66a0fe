use async_trait::async_trait;
use openai_api_rs::v1::{api::OpenAIClient, chat_completion};
use thiserror::Error;

use crate::config::AnalysisConfig;
use crate::models::analysis_models::AnalysisJob;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to create LLM client: {0}")]
    Client(String),
    #[error("LLM request failed: {0}")]
    Request(String),
    #[error("LLM returned no content")]
    EmptyResponse,
}

/// Turns one questionnaire answer into a short assessment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Analyst: Send + Sync {
    async fn analyze(&self, job: AnalysisJob) -> Result<String, AnalysisError>;
}

const SYSTEM_PROMPT: &str = "You are SAGIM, an export consultant for Italian small and medium-sized enterprises. \
You receive one question from the SAGIM onboarding questionnaire together with the company's answer. \
Assess what the answer reveals about the company's readiness to export: target markets, products, risks, \
and any missing information worth asking about later. Reply in Italian with at most five short bullet points.";

pub fn build_messages(question: &str, answer: &str) -> Vec<chat_completion::ChatCompletionMessage> {
    vec![
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::system,
            content: chat_completion::Content::Text(SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        chat_completion::ChatCompletionMessage {
            role: chat_completion::MessageRole::user,
            content: chat_completion::Content::Text(format!(
                "Domanda: {}\n\nRisposta dell'azienda: {}",
                question, answer
            )),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

/// Analyst backed by an OpenAI-compatible chat-completion endpoint.
pub struct LlmAnalyst {
    config: AnalysisConfig,
}

impl LlmAnalyst {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    fn create_client(&self) -> Result<OpenAIClient, AnalysisError> {
        OpenAIClient::builder()
            .with_endpoint(self.config.api_url.clone())
            .with_api_key(self.config.api_key.clone())
            .build()
            .map_err(|e| AnalysisError::Client(e.to_string()))
    }
}

#[async_trait]
impl Analyst for LlmAnalyst {
    async fn analyze(&self, job: AnalysisJob) -> Result<String, AnalysisError> {
        let mut client = self.create_client()?;

        let request = chat_completion::ChatCompletionRequest::new(
            self.config.model.clone(),
            build_messages(&job.question, &job.answer),
        )
        .max_tokens(400);

        let result = client
            .chat_completion(request)
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        result
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or(AnalysisError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_question_and_answer_verbatim() {
        let messages = build_messages("In che settore operi?", "  Agroalimentare ");
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[0].role, chat_completion::MessageRole::system));
        match &messages[1].content {
            chat_completion::Content::Text(text) => {
                assert!(text.contains("Domanda: In che settore operi?"));
                assert!(text.contains("Risposta dell'azienda:   Agroalimentare "));
            }
            _ => panic!("user message should be plain text"),
        }
    }

    #[test]
    fn client_builds_from_config() {
        let analyst = LlmAnalyst::new(AnalysisConfig {
            api_url: "https://api.regolo.ai/v1".to_string(),
            api_key: "secret".to_string(),
            model: "Llama-3.3-70B-Instruct".to_string(),
        });
        assert!(analyst.create_client().is_ok());
    }
}
