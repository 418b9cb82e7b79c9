// Shared system prompt for post generation.
// The user-side prompt template lives in generation::prompts.

/// System instruction framing every completion as X post generation.
pub const POST_WRITER_SYSTEM: &str =
    "あなたはX（Twitter）の投稿を生成する専門AIです。自然で魅力的な投稿を作成してください。";
