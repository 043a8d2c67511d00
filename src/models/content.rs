use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit of servable content.
///
/// Topics are a closed set: the menu tree and the intent rules can only
/// point at one of these, and a [`ContentCatalog`](crate::catalog::ContentCatalog)
/// must define every one of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Weather,
    Prices,
    Farming,
    Border,
    Documents,
    Routes,
    Culture,
    PhrasesSwahili,
    PhrasesLuganda,
    Emergency,
    Help,
    Goodbye,
    /// Fallback for messages that match no intent rule.
    General,
}

impl Topic {
    pub const ALL: [Topic; 13] = [
        Self::Weather,
        Self::Prices,
        Self::Farming,
        Self::Border,
        Self::Documents,
        Self::Routes,
        Self::Culture,
        Self::PhrasesSwahili,
        Self::PhrasesLuganda,
        Self::Emergency,
        Self::Help,
        Self::Goodbye,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Prices => "prices",
            Self::Farming => "farming",
            Self::Border => "border",
            Self::Documents => "documents",
            Self::Routes => "routes",
            Self::Culture => "culture",
            Self::PhrasesSwahili => "phrases_swahili",
            Self::PhrasesLuganda => "phrases_luganda",
            Self::Emergency => "emergency",
            Self::Help => "help",
            Self::Goodbye => "goodbye",
            Self::General => "general",
        }
    }

    /// Reply keyword shown to message-channel users when this topic is
    /// offered as a suggestion.
    pub fn keyword(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Position of this topic in [`Topic::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder in an entry body that is replaced by the caller's message.
pub const MESSAGE_PLACEHOLDER: &str = "{message}";

/// Preformatted content for one topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub topic: Topic,
    pub body: String,
    /// Topics offered as next suggestions, in display order.
    #[serde(default)]
    pub related_topics: Vec<Topic>,
}

impl ContentEntry {
    pub fn new(topic: Topic, body: impl Into<String>, related_topics: Vec<Topic>) -> Self {
        Self {
            topic,
            body: body.into(),
            related_topics,
        }
    }

    /// Render the body, substituting [`MESSAGE_PLACEHOLDER`] with `message`.
    pub fn render(&self, message: &str) -> String {
        self.body.replace(MESSAGE_PLACEHOLDER, message)
    }
}
