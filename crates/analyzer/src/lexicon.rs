use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::{AnalyzerError, Result};

#[derive(Debug, Deserialize)]
struct LexiconFile {
    custom_toxic_phrases: Vec<String>,
    #[serde(default)]
    modifiers: Vec<String>,
}

/// Hand-curated toxic phrases that flag a text regardless of model scores.
///
/// Each phrase matches on its own or preceded by any modifier, as whole
/// words and ignoring case.
#[derive(Debug, Clone, Default)]
pub struct PhraseLexicon {
    pattern: Option<Regex>,
    phrases: usize,
}

impl PhraseLexicon {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(phrases: &[String], modifiers: &[String]) -> Result<Self> {
        let mut alternatives = Vec::new();
        let mut count = 0;
        for phrase in phrases {
            let base = phrase.trim().to_lowercase();
            if base.is_empty() {
                continue;
            }
            count += 1;
            alternatives.push(regex::escape(&base));
            for modifier in modifiers {
                let modifier = modifier.trim().to_lowercase();
                if !modifier.is_empty() {
                    alternatives.push(regex::escape(&format!("{} {}", modifier, base)));
                }
            }
        }

        if alternatives.is_empty() {
            return Ok(Self::empty());
        }

        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
            .map_err(|e| AnalyzerError::LexiconError(e.to_string()))?;

        Ok(Self {
            pattern: Some(pattern),
            phrases: count,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::new(&file.custom_toxic_phrases, &file.modifiers)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.phrases
    }

    pub fn is_empty(&self) -> bool {
        self.phrases == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> PhraseLexicon {
        PhraseLexicon::from_json(
            r#"{"custom_toxic_phrases": ["loser", "nobody likes you"], "modifiers": ["such a"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_matches_phrase_case_insensitively() {
        assert!(lexicon().matches("What a LOSER"));
        assert!(lexicon().matches("honestly nobody likes you."));
    }

    #[test]
    fn test_matches_modified_phrase() {
        assert!(lexicon().matches("you are such a loser"));
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert!(!lexicon().matches("the losers bracket starts at noon"));
        assert!(!lexicon().matches("closer to home"));
    }

    #[test]
    fn test_special_characters_are_literal() {
        let lexicon = PhraseLexicon::new(&["l.ser".to_string()], &[]).unwrap();
        assert!(lexicon.matches("such a l.ser"));
        assert!(!lexicon.matches("such a loser"));
    }

    #[test]
    fn test_empty_lexicon_never_matches() {
        let lexicon = PhraseLexicon::empty();
        assert!(lexicon.is_empty());
        assert!(!lexicon.matches("loser"));
    }

    #[test]
    fn test_missing_modifiers_default_to_none() {
        let lexicon = PhraseLexicon::from_json(r#"{"custom_toxic_phrases": ["freak"]}"#).unwrap();
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.matches("total freak"));
    }

    #[test]
    fn test_blank_phrases_are_not_counted() {
        let lexicon = PhraseLexicon::from_json(
            r#"{"custom_toxic_phrases": ["loser", "  ", "", "freak"], "modifiers": ["total"]}"#,
        )
        .unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.matches("total freak"));

        let blank = PhraseLexicon::new(&[" ".to_string()], &[]).unwrap();
        assert!(blank.is_empty());
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        assert!(PhraseLexicon::from_json(r#"{"phrases": []}"#).is_err());
    }

    #[test]
    fn test_bundled_lexicon_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/toxic_words.json");
        let lexicon = PhraseLexicon::load(path).unwrap();
        assert!(!lexicon.is_empty());
        assert!(lexicon.matches("you are such a loser"));
    }
}
