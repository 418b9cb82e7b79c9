//! Post Generation — orchestrates a single post or a sequential batch.
//!
//! Flow: build_prompt → CompletionClient::complete → format_post.
//!
//! Any completion failure is logged here with its cause and surfaced to the
//! caller as a generic `AppError::Generation`. A batch stops at the first
//! failure.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::formatter::format_post;
use crate::generation::prompts::{build_prompt, variation_theme};
use crate::generation::tone::Tone;
use crate::llm_client::prompts::POST_WRITER_SYSTEM;
use crate::llm_client::{CompletionClient, LlmClient, MODEL};

pub const DEFAULT_MAX_LENGTH: usize = 280;

const GENERATION_FAILED: &str = "Failed to generate post with OpenAI";

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Options for generating one post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationRequest {
    pub theme: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl GenerationRequest {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            keywords: Vec::new(),
            tone: Tone::default(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// A finished post draft.
///
/// `content` is at most `max_length` characters and `character_count` is its
/// length in characters. `hashtags` carry no `#` and number at most three.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPost {
    pub content: String,
    pub hashtags: Vec<String>,
    pub character_count: usize,
    pub tone: Tone,
}

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

pub struct PostGenerator {
    client: Arc<dyn CompletionClient>,
}

impl PostGenerator {
    /// Builds a generator backed by the real completion endpoint.
    /// Fails with `AppError::Config` before any network activity if the
    /// API key is missing.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::from_env()?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &Config) -> Self {
        let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_base_url);
        info!("LLM client initialized (model: {MODEL}, endpoint: {})", llm.endpoint());
        Self::new(Arc::new(llm))
    }

    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generates a single post.
    pub async fn generate_post(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPost, AppError> {
        let prompt = build_prompt(
            &request.theme,
            &request.keywords,
            request.tone,
            request.max_length,
        );

        let raw = self
            .client
            .complete(POST_WRITER_SYSTEM, &prompt)
            .await
            .map_err(|e| {
                error!(error = %e, theme = %request.theme, "Error generating post");
                AppError::Generation(GENERATION_FAILED.to_string())
            })?;

        let post = format_post(&raw, &request.keywords, request.max_length, request.tone);
        info!(
            characters = post.character_count,
            hashtags = post.hashtags.len(),
            tone = %post.tone,
            "Generated post"
        );

        Ok(post)
    }

    /// Generates `count` variations one after another, each with the theme
    /// suffixed by its 1-based variation index.
    pub async fn generate_posts(
        &self,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<Vec<GeneratedPost>, AppError> {
        let mut posts = Vec::with_capacity(count);

        for index in 1..=count {
            info!("Generating variation {}/{}", index, count);
            let variation = GenerationRequest {
                theme: variation_theme(&request.theme, index),
                ..request.clone()
            };
            posts.push(self.generate_post(&variation).await?);
        }

        Ok(posts)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
