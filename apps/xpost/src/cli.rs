//! Command-line surface: argument parsing, invocation, and output rendering.
//!
//! Progress goes to stderr; the post(s) go to stdout so the output can be
//! piped.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::generation::generator::{
    GeneratedPost, GenerationRequest, PostGenerator, DEFAULT_MAX_LENGTH,
};
use crate::generation::tone::Tone;

/// Generate X (Twitter) post drafts with an LLM.
#[derive(Debug, Parser)]
#[command(
    name = "xpost",
    version,
    about = "Generate X (Twitter) post drafts with an LLM",
    after_help = "Example: xpost \"AIの未来について\" テクノロジー 未来"
)]
pub struct Cli {
    /// Theme of the post
    pub theme: String,

    /// Keywords to weave into the post; each also becomes a hashtag
    pub keywords: Vec<String>,

    /// Tone of voice: casual, formal or humorous
    #[arg(long, default_value_t = Tone::Casual)]
    pub tone: Tone,

    /// Maximum post length in characters
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Number of variations to generate
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.theme.clone())
            .with_keywords(self.keywords.iter().cloned())
            .with_tone(self.tone)
            .with_max_length(self.max_length)
    }
}

/// Runs the CLI against the given generator and returns the text to print.
pub async fn run(cli: &Cli, generator: &PostGenerator) -> Result<String> {
    let request = cli.request();
    info!(
        theme = %request.theme,
        keywords = request.keywords.len(),
        tone = %request.tone,
        count = cli.count,
        "Generating posts"
    );

    let posts = if cli.count > 1 {
        generator.generate_posts(&request, cli.count as usize).await?
    } else {
        vec![generator.generate_post(&request).await?]
    };

    if cli.json {
        render_json(&posts)
    } else {
        Ok(render_text(&posts, request.max_length))
    }
}

/// A single post renders as an object, a batch as an array.
pub fn render_json(posts: &[GeneratedPost]) -> Result<String> {
    let json = match posts {
        [post] => serde_json::to_string_pretty(post)?,
        _ => serde_json::to_string_pretty(posts)?,
    };
    Ok(json)
}

pub fn render_text(posts: &[GeneratedPost], max_length: usize) -> String {
    if let [post] = posts {
        return render_post(post, max_length);
    }

    posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            format!(
                "── バリエーション {} ──\n{}",
                i + 1,
                render_post(post, max_length)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_post(post: &GeneratedPost, max_length: usize) -> String {
    let hashtags = post
        .hashtags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "📝 生成された投稿:\n{}\n\n🏷️ ハッシュタグ: {}\n📊 文字数: {}/{}\n🎭 トーン: {}",
        post.content, hashtags, post.character_count, max_length, post.tone
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, MockCompletionClient};
    use std::sync::Arc;

    fn sample_post(content: &str) -> GeneratedPost {
        GeneratedPost {
            content: content.to_string(),
            hashtags: vec!["テクノロジー".into(), "AI".into()],
            character_count: content.chars().count(),
            tone: Tone::Casual,
        }
    }

    #[test]
    fn test_parse_theme_and_keywords() {
        let cli = Cli::try_parse_from(["xpost", "AIの未来について", "テクノロジー", "未来"]).unwrap();
        assert_eq!(cli.theme, "AIの未来について");
        assert_eq!(cli.keywords, vec!["テクノロジー", "未来"]);
        assert_eq!(cli.tone, Tone::Casual);
        assert_eq!(cli.max_length, 280);
        assert_eq!(cli.count, 1);
        assert!(!cli.json);
    }

    #[test]
    fn test_missing_theme_is_usage_error() {
        let err = Cli::try_parse_from(["xpost"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_options() {
        let cli = Cli::try_parse_from([
            "xpost",
            "--tone",
            "humorous",
            "--max-length",
            "140",
            "--count",
            "2",
            "--json",
            "月曜日",
        ])
        .unwrap();
        assert_eq!(cli.tone, Tone::Humorous);
        assert_eq!(cli.max_length, 140);
        assert_eq!(cli.count, 2);
        assert!(cli.json);

        let request = cli.request();
        assert_eq!(request.theme, "月曜日");
        assert!(request.keywords.is_empty());
    }

    #[test]
    fn test_invalid_tone_and_zero_count_rejected() {
        assert!(Cli::try_parse_from(["xpost", "--tone", "angry", "テーマ"]).is_err());
        assert!(Cli::try_parse_from(["xpost", "--count", "0", "テーマ"]).is_err());
    }

    #[test]
    fn test_render_text_single_post() {
        let text = render_text(&[sample_post("こんにちは")], 280);
        assert!(text.starts_with("📝 生成された投稿:\nこんにちは"));
        assert!(text.contains("🏷️ ハッシュタグ: #テクノロジー #AI"));
        assert!(text.contains("📊 文字数: 5/280"));
        assert!(text.ends_with("🎭 トーン: casual"));
    }

    #[test]
    fn test_render_text_batch_numbers_variations() {
        let text = render_text(&[sample_post("一"), sample_post("二")], 280);
        assert!(text.contains("── バリエーション 1 ──"));
        assert!(text.contains("── バリエーション 2 ──"));
    }

    #[test]
    fn test_render_json_object_for_single_array_for_batch() {
        let single = render_json(&[sample_post("一")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&single).unwrap();
        assert!(value.is_object());
        assert_eq!(value["content"], "一");

        let batch = render_json(&[sample_post("一"), sample_post("二")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&batch).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_run_renders_generated_post() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_, _| Ok("AIで未来が変わる！".to_string()));
        let generator = PostGenerator::new(Arc::new(mock));

        let cli = Cli::try_parse_from(["xpost", "AIの未来", "テクノロジー"]).unwrap();
        let output = run(&cli, &generator).await.unwrap();

        assert!(output.contains("AIで未来が変わる！"));
        assert!(output.contains("#テクノロジー #AI"));
        assert!(output.contains("📊 文字数: 10/280"));
    }

    #[tokio::test]
    async fn test_run_propagates_generation_failure() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(|_, _| Err(LlmError::EmptyContent));
        let generator = PostGenerator::new(Arc::new(mock));

        let cli = Cli::try_parse_from(["xpost", "テーマ"]).unwrap();
        let err = run(&cli, &generator).await.unwrap_err();
        assert!(err.to_string().contains("Failed to generate post"));
    }
}
