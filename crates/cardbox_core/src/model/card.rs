//! Card domain model.
//!
//! # Responsibility
//! - Define the reading-card record and its serialized shape.
//! - Keep the persisted schema loadable from the legacy dataset.
//!
//! # Invariants
//! - `id` is unique within a collection and never reused for another card.
//! - `created_at` is immutable after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a card.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Values are epoch-millisecond-scale integers, strictly increasing by
/// creation order.
pub type CardId = u64;

/// A single reading card: title, free-text body and user tags.
///
/// The serde aliases accept the field names the original dataset was stored
/// under (`titulo`, `conteudo`, `dataCriacao`), so a pre-existing blob loads
/// without migration. New payloads are written with the English names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable id, strictly monotonic by creation order.
    pub id: CardId,
    /// Display title. Trimming and validation are caller concerns.
    #[serde(alias = "titulo")]
    pub title: String,
    /// Free-form body text, may be empty.
    #[serde(alias = "conteudo", default)]
    pub content: String,
    /// Ordered tag list; duplicates within one card are kept as given.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp (ISO-8601 in the persisted payload).
    #[serde(alias = "dataCriacao")]
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Creates a card with the given id and the current wall-clock timestamp.
    ///
    /// # Invariants
    /// - The caller is responsible for `id` uniqueness (see the store's id
    ///   generator).
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags,
            created_at: Utc::now(),
        }
    }

    /// Returns whether this card carries the given tag (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::Card;

    #[test]
    fn has_tag_matches_exactly() {
        let card = Card::new(1, "Dune", "", vec!["scifi".into(), "classic".into()]);
        assert!(card.has_tag("scifi"));
        assert!(!card.has_tag("sci"));
        assert!(!card.has_tag("SCIFI"));
    }

    #[test]
    fn legacy_field_names_deserialize() {
        let raw = r#"{
            "id": 1714567890123,
            "titulo": "Dom Casmurro",
            "conteudo": "Capitu",
            "tags": ["romance"],
            "dataCriacao": "2024-05-01T12:11:30.123Z"
        }"#;
        let card: Card = serde_json::from_str(raw).expect("legacy payload should load");
        assert_eq!(card.id, 1_714_567_890_123);
        assert_eq!(card.title, "Dom Casmurro");
        assert_eq!(card.content, "Capitu");
        assert_eq!(card.tags, vec!["romance".to_string()]);
    }

    #[test]
    fn serializes_with_english_field_names() {
        let card = Card::new(7, "t", "c", vec![]);
        let json = serde_json::to_string(&card).expect("card should serialize");
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"created_at\""));
        assert!(!json.contains("titulo"));
    }
}
