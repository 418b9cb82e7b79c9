//! Tone — stylistic register requested for a post, and its prompt phrasing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Casual,
    Formal,
    Humorous,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Casual, Tone::Formal, Tone::Humorous];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Formal => "formal",
            Tone::Humorous => "humorous",
        }
    }

    /// Phrase used in the prompt to describe the requested register.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Casual => "カジュアルで親しみやすい",
            Tone::Formal => "丁寧でフォーマルな",
            Tone::Humorous => "ユーモラスで楽しい",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tone '{s}' (expected casual, formal or humorous)"))
    }
}
