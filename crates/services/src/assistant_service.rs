use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// The doubt-clarifier persona sent with every student question.
const TEACHER_PROMPT: &str = "You are a professional Grade 8 ICT teacher. \
The student is asking about the Grade 8 ICT syllabus.\n\
Syllabus Modules:\n\
1. HTML/CSS: div, class, flexbox, forms, inputs, images, links, CSS types.\n\
2. Python: variables (str, int, float), math operators, if/elif/else logic.\n\
3. JavaScript/p5.js: setup(), draw(), mouseX, mouseY, arrays, DOM manipulation.\n\n\
Instructions:\n\
1. Answer in 5-20 lines.\n\
2. Explain WHY and HOW using Grade 8 appropriate concepts.\n\
3. Use a teacher-like, calm, professional tone.\n\
4. If the question is unclear, rephrase it using one of the syllabus concepts.\n\
5. Do not refuse to answer.\n\
6. Try explaining in points";

#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AssistantConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("STUDIO_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("STUDIO_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("STUDIO_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// The "Doubt Clarifier": answers free-text student questions through an
/// OpenAI-compatible chat endpoint. Stateless; it never touches the
/// progress store.
#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    config: Option<AssistantConfig>,
}

impl AssistantService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AssistantConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Ask the teacher assistant a question.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` when the service is disabled, the request
    /// fails, or the response is empty.
    pub async fn ask(&self, question: &str) -> Result<String, AssistantError> {
        let config = self.config.as_ref().ok_or(AssistantError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: TEACHER_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: question.to_string(),
                },
            ],
            temperature: 0.4,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
