// Prompt template for post generation.
// The matching system prompt lives in llm_client::prompts.

use crate::generation::tone::Tone;

/// Post generation prompt template.
/// Replace: {theme}, {keywords_line}, {tone_description}, {max_length}
pub const POST_PROMPT_TEMPLATE: &str = "以下の条件でX（Twitter）の投稿を1つ生成してください：

テーマ: {theme}
{keywords_line}
トーン: {tone_description}
文字数制限: {max_length}文字以内

要件:
- 自然で魅力的な日本語の投稿文
- Xのスタイルに適した書き方
- ハッシュタグは含めない（別途追加）
- 絵文字を適切に使用
- 読者が共感しやすい内容

投稿文のみを出力してください。";

/// Suffix appended to the theme for each iteration of a batch.
pub const VARIATION_SUFFIX_TEMPLATE: &str = " (バリエーション {index})";

/// Renders the user prompt for a single post.
pub fn build_prompt(theme: &str, keywords: &[String], tone: Tone, max_length: usize) -> String {
    let keywords_line = if keywords.is_empty() {
        String::new()
    } else {
        format!("キーワード: {}", keywords.join(", "))
    };

    POST_PROMPT_TEMPLATE
        .replace("{keywords_line}", &keywords_line)
        .replace("{tone_description}", tone.description())
        .replace("{max_length}", &max_length.to_string())
        // theme last so user text containing a placeholder is never expanded
        .replace("{theme}", theme)
}

/// Theme decorated with a 1-based variation index.
pub fn variation_theme(theme: &str, index: usize) -> String {
    format!(
        "{theme}{}",
        VARIATION_SUFFIX_TEMPLATE.replace("{index}", &index.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_fields() {
        let keywords = vec!["テクノロジー".to_string(), "未来".to_string()];
        let prompt = build_prompt("AIの未来", &keywords, Tone::Formal, 140);

        assert!(prompt.contains("テーマ: AIの未来"));
        assert!(prompt.contains("キーワード: テクノロジー, 未来"));
        assert!(prompt.contains("トーン: 丁寧でフォーマルな"));
        assert!(prompt.contains("文字数制限: 140文字以内"));
        assert!(prompt.ends_with("投稿文のみを出力してください。"));
    }

    #[test]
    fn test_prompt_without_keywords_has_blank_keyword_line() {
        let prompt = build_prompt("朝ごはん", &[], Tone::Casual, 280);
        assert!(!prompt.contains("キーワード"));
        assert!(prompt.contains("テーマ: 朝ごはん\n\nトーン: カジュアルで親しみやすい"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let keywords = vec!["猫".to_string()];
        assert_eq!(
            build_prompt("ペット", &keywords, Tone::Humorous, 100),
            build_prompt("ペット", &keywords, Tone::Humorous, 100)
        );
    }

    #[test]
    fn test_theme_placeholder_text_is_not_expanded() {
        let prompt = build_prompt("{max_length}", &[], Tone::Casual, 280);
        assert!(prompt.contains("テーマ: {max_length}"));
    }

    #[test]
    fn test_variation_theme_is_one_based() {
        assert_eq!(variation_theme("テスト", 1), "テスト (バリエーション 1)");
        assert_eq!(variation_theme("テスト", 2), "テスト (バリエーション 2)");
    }
}
