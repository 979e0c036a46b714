use serde::{Deserialize, Serialize};

pub const ALPHABET_TYPE: &str = "alphabet";
pub const GRAMMAR_TYPE: &str = "grammar";

const EXAMPLE_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetContent {
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl AlphabetContent {
    /// Pairs each character with its description. A surplus entry on either
    /// side is paired with an empty string.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        let len = self.characters.len().max(self.descriptions.len());
        (0..len).map(move |idx| {
            (
                self.characters.get(idx).map(String::as_str).unwrap_or(""),
                self.descriptions.get(idx).map(String::as_str).unwrap_or(""),
            )
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarContent {
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl GrammarContent {
    pub fn parsed_examples(&self) -> impl Iterator<Item = GrammarExample<'_>> {
        self.examples.iter().map(|e| GrammarExample::parse(e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarExample<'a> {
    pub text: &'a str,
    pub translation: &'a str,
}

impl<'a> GrammarExample<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(EXAMPLE_SEPARATOR) {
            Some((text, translation)) => Self {
                text: text.trim(),
                translation: translation.trim(),
            },
            None => Self {
                text: raw.trim(),
                translation: "",
            },
        }
    }
}

/// Type-specific lesson payload, keyed by the lesson's `type` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonContent {
    Alphabet(AlphabetContent),
    Grammar(GrammarContent),
    /// Any other lesson type; the payload is kept verbatim.
    Other { kind: String, raw: String },
}

impl LessonContent {
    /// Builds the variant for `kind` from its serialized payload. Malformed
    /// JSON for a known type yields that type's empty content.
    pub fn parse(kind: &str, raw: &str) -> Self {
        match kind {
            ALPHABET_TYPE => Self::Alphabet(serde_json::from_str(raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "malformed alphabet content, treating as empty");
                AlphabetContent::default()
            })),
            GRAMMAR_TYPE => Self::Grammar(serde_json::from_str(raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "malformed grammar content, treating as empty");
                GrammarContent::default()
            })),
            other => Self::Other {
                kind: other.to_string(),
                raw: raw.to_string(),
            },
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Alphabet(_) => ALPHABET_TYPE,
            Self::Grammar(_) => GRAMMAR_TYPE,
            Self::Other { kind, .. } => kind,
        }
    }

    /// The JSON string carried in the `content` field on the wire.
    pub fn to_json_string(&self) -> String {
        let encoded = match self {
            Self::Alphabet(content) => serde_json::to_string(content),
            Self::Grammar(content) => serde_json::to_string(content),
            Self::Other { raw, .. } => return raw.clone(),
        };
        // Vec<String> structs always serialize.
        encoded.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLesson {
    pub title: String,
    pub content: LessonContent,
    pub order: i32,
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub content: LessonContent,
    pub order: i32,
    pub audio_url: Option<String>,
}

impl Lesson {
    pub fn kind(&self) -> &str {
        self.content.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub id: u32,
    pub lesson_id: u32,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}
