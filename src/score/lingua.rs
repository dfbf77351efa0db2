use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

use super::WordScorer;
use crate::layout::Script;

/// Scorer backed by `lingua`'s statistical language models.
///
/// Heavier to build than [`super::BuiltinScorer`] (the models are loaded
/// once, at construction), but considerably better on short real-world
/// vocabulary. Only English and Russian models are compiled in.
pub struct LinguaScorer {
    detector: LanguageDetector,
}

impl LinguaScorer {
    pub fn new() -> Self {
        let detector =
            LanguageDetectorBuilder::from_languages(&[Language::English, Language::Russian])
                .with_minimum_relative_distance(0.20)
                .build();
        Self { detector }
    }
}

impl Default for LinguaScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordScorer for LinguaScorer {
    fn score(&self, token: &str, script: Script) -> f64 {
        let language = match script {
            Script::Latin => Language::English,
            Script::Cyrillic => Language::Russian,
            Script::Other => return 0.0,
        };
        self.detector.compute_language_confidence(token, language)
    }
}
