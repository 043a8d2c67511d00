//! Keyword intent routing for the message channel.
//!
//! Rules are evaluated in declaration order and the first match wins, so a
//! message mentioning both weather and prices is a weather message. A message
//! that matches nothing goes to the fallback topic; classification never fails.

use crate::models::Topic;

/// Routes messages containing any of `keywords` to `topic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    pub topic: Topic,
    keywords: Vec<String>,
}

impl IntentRule {
    pub fn new<I, S>(topic: Topic, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            topic,
            keywords: keywords
                .into_iter()
                .map(|k| Into::<String>::into(k).to_lowercase())
                .collect(),
        }
    }

    /// `normalized` must already be lowercased and trimmed.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<IntentRule>,
    fallback: Topic,
}

impl IntentRouter {
    pub fn new(rules: Vec<IntentRule>, fallback: Topic) -> Self {
        Self { rules, fallback }
    }

    /// The reference rule table.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                IntentRule::new(
                    Topic::Weather,
                    ["weather", "rain", "forecast", "temperature", "sunny"],
                ),
                IntentRule::new(
                    Topic::Prices,
                    ["price", "market", "maize", "beans", "sell", "buy", "cost"],
                ),
                IntentRule::new(
                    Topic::Border,
                    ["border", "customs", "trade", "export", "import", "crossing"],
                ),
                IntentRule::new(
                    Topic::Culture,
                    ["culture", "language", "greet", "swahili", "luganda", "phrase", "tradition"],
                ),
                IntentRule::new(Topic::Help, ["help", "menu", "start", "info"]),
                IntentRule::new(
                    Topic::Farming,
                    ["farm", "plant", "crop", "seed", "fertilizer", "harvest"],
                ),
                IntentRule::new(
                    Topic::Routes,
                    ["route", "travel", "road", "bus", "journey", "transport"],
                ),
                IntentRule::new(
                    Topic::Emergency,
                    ["emergency", "police", "ambulance", "fire", "sos", "accident"],
                ),
            ],
            Topic::General,
        )
    }

    pub fn classify(&self, message: &str) -> Topic {
        let normalized = normalize(message);
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.topic)
            .unwrap_or(self.fallback)
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn fallback(&self) -> Topic {
        self.fallback
    }
}

fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}
