use super::WordScorer;
use crate::layout::Script;

/// Dependency-free scorer built from per-script shape checks.
///
/// A token scores as a plausible word when its letters belong to the script,
/// it contains a vowel, its consonant runs stay short, and its bigrams look
/// like the script's common ones. A small exception list catches real words
/// the statistics misjudge. Exact-match hits score `1.0`; everything else is
/// a bigram-frequency ratio on top of a fixed base.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinScorer;

/// Floor for any token that passes the script and vowel gates.
const BASE_SCORE: f64 = 0.3;

/// Longest consonant run seen in ordinary words of either script.
const MAX_CONSONANT_RUN: usize = 4;

/// Common English bigrams, by corpus frequency.
#[rustfmt::skip]
const LATIN_BIGRAMS: &[(char, char)] = &[
    ('t','h'), ('h','e'), ('i','n'), ('e','r'), ('a','n'), ('r','e'), ('o','n'),
    ('a','t'), ('e','n'), ('n','d'), ('t','i'), ('e','s'), ('o','r'), ('t','e'),
    ('o','f'), ('e','d'), ('i','s'), ('i','t'), ('a','l'), ('a','r'), ('s','t'),
    ('t','o'), ('n','t'), ('n','g'), ('s','e'), ('h','a'), ('a','s'), ('o','u'),
    ('i','o'), ('l','e'), ('v','e'), ('c','o'), ('m','e'), ('d','e'), ('h','i'),
    ('r','i'), ('r','o'), ('i','c'), ('n','e'), ('e','a'), ('r','a'), ('c','e'),
    ('l','l'), ('e','l'), ('l','o'), ('h','o'), ('b','e'), ('c','h'), ('s','h'),
    ('u','r'), ('l','i'), ('w','o'), ('m','a'), ('e','t'), ('u','s'), ('l','a'),
];

/// Common Russian bigrams, by corpus frequency.
#[rustfmt::skip]
const CYRILLIC_BIGRAMS: &[(char, char)] = &[
    ('с','т'), ('н','о'), ('т','о'), ('н','а'), ('е','н'), ('н','и'), ('о','в'),
    ('к','о'), ('р','а'), ('в','о'), ('о','с'), ('р','е'), ('е','р'), ('п','о'),
    ('о','л'), ('а','т'), ('е','т'), ('а','н'), ('о','м'), ('а','л'), ('е','л'),
    ('л','о'), ('п','р'), ('р','и'), ('и','в'), ('в','е'), ('к','а'), ('о','р'),
    ('т','а'), ('л','ь'), ('н','е'), ('г','о'), ('и','т'), ('о','д'), ('а','к'),
    ('т','и'), ('и','с'), ('т','р'), ('д','а'), ('б','о'), ('л','и'), ('в','а'),
];

/// Real words the shape checks would score too low.
const LATIN_EXCEPTIONS: &[&str] = &[
    "a", "i", "id", "ok", "hi", "my", "no", "yes", "why", "linux", "hello",
];
const CYRILLIC_EXCEPTIONS: &[&str] = &[
    "а", "и", "я", "о", "у", "в", "да", "но", "не", "нет", "привет", "спасибо",
];

impl WordScorer for BuiltinScorer {
    fn score(&self, token: &str, script: Script) -> f64 {
        let letters = letters_of(token);
        if letters.is_empty() {
            return 0.0;
        }
        match script {
            Script::Latin => score_latin(&letters),
            Script::Cyrillic => score_cyrillic(&letters),
            Script::Other => 0.0,
        }
    }
}

/// Lowercased alphabetic code points of the token; apostrophes, hyphens,
/// digits and punctuation carry no wordness signal and are dropped.
fn letters_of(token: &str) -> Vec<char> {
    token
        .chars()
        .filter(|ch| ch.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

fn score_latin(letters: &[char]) -> f64 {
    if letters.iter().any(|ch| !ch.is_ascii_alphabetic()) {
        return 0.0;
    }
    let word: String = letters.iter().collect();
    if LATIN_EXCEPTIONS.contains(&word.as_str()) {
        return 1.0;
    }
    if !letters.iter().copied().any(is_latin_vowel) {
        return 0.0;
    }
    // 'y' intentionally treated as consonant here to reduce false positives.
    let run = max_consonant_run(letters, is_latin_vowel);
    let rare = letters
        .iter()
        .filter(|&&ch| matches!(ch, 'j' | 'q' | 'x' | 'z'))
        .count();
    let mut score = BASE_SCORE + (1.0 - BASE_SCORE) * bigram_ratio(letters, LATIN_BIGRAMS);
    if run > MAX_CONSONANT_RUN {
        score -= 0.5;
    }
    if rare > 1 {
        score -= 0.2;
    }
    score.clamp(0.0, 1.0)
}

fn score_cyrillic(letters: &[char]) -> f64 {
    if letters
        .iter()
        .any(|&ch| !crate::layout::is_cyrillic_letter(ch))
    {
        return 0.0;
    }
    let word: String = letters.iter().collect();
    if CYRILLIC_EXCEPTIONS.contains(&word.as_str()) {
        return 1.0;
    }
    if !letters.iter().copied().any(is_cyrillic_vowel) {
        return 0.0;
    }
    let run = max_consonant_run(letters, is_cyrillic_vowel);
    let mut score = BASE_SCORE + (1.0 - BASE_SCORE) * bigram_ratio(letters, CYRILLIC_BIGRAMS);
    if run > MAX_CONSONANT_RUN {
        score -= 0.5;
    }
    score.clamp(0.0, 1.0)
}

fn is_latin_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_cyrillic_vowel(ch: char) -> bool {
    matches!(
        ch,
        'а' | 'е' | 'ё' | 'и' | 'о' | 'у' | 'ы' | 'э' | 'ю' | 'я'
    )
}

fn max_consonant_run(letters: &[char], is_vowel: fn(char) -> bool) -> usize {
    let mut run = 0usize;
    let mut max = 0usize;
    for &ch in letters {
        if is_vowel(ch) {
            run = 0;
        } else {
            run += 1;
            max = max.max(run);
        }
    }
    max
}

/// Share of adjacent letter pairs found in the script's common-bigram table.
fn bigram_ratio(letters: &[char], table: &[(char, char)]) -> f64 {
    if letters.len() < 2 {
        return 0.0;
    }
    let hits = letters
        .windows(2)
        .filter(|pair| table.contains(&(pair[0], pair[1])))
        .count();
    hits as f64 / (letters.len() - 1) as f64
}
