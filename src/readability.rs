//! Reading-ease scoring behind a swappable interface.
//!
//! The clarity score asks a [`ReadabilityScorer`] for a reading-ease value on the usual 0-100
//! scale (higher reads more easily). A scorer may decline by returning `None`, in which case the
//! engine falls back to [`SentenceLengthApprox`], which always answers. Any
//! `Fn(&str) -> Option<f64>` closure is a scorer, so tests can substitute fixed values.

/// Source of a reading-ease estimate for prose.
pub trait ReadabilityScorer: Send + Sync {
    /// Reading ease of `text` in 0-100, or `None` if this scorer cannot rate it.
    fn reading_ease(&self, text: &str) -> Option<f64>;
}

impl<F> ReadabilityScorer for F
where
    F: Fn(&str) -> Option<f64> + Send + Sync,
{
    fn reading_ease(&self, text: &str) -> Option<f64> {
        self(text)
    }
}

const TERMINATORS: [char; 3] = ['.', '!', '?'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Sentence and word counts for a piece of prose.
pub struct SentenceStats {
    /// Runs of text ending in `.`, `!` or `?` that contain at least one word.
    pub sentences: usize,
    /// Words across those sentences.
    pub words: usize,
}

impl SentenceStats {
    /// Count sentences in `text`. Text without any terminator has no sentences.
    #[must_use]
    pub fn of(text: &str) -> Self {
        if !text.contains(TERMINATORS) {
            return Self::default();
        }
        text.split(TERMINATORS)
            .map(|segment| segment.split_whitespace().count())
            .filter(|&words| words > 0)
            .fold(Self::default(), |stats, words| Self {
                sentences: stats.sentences + 1,
                words: stats.words + words,
            })
    }

    /// Mean words per sentence, if there are any sentences.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_length(&self) -> Option<f64> {
        (self.sentences > 0).then(|| self.words as f64 / self.sentences as f64)
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Coarse ease bands from the ratio of words to sentence terminators.
pub struct SentenceLengthApprox;

impl SentenceLengthApprox {
    /// Ease band for `text`: 80 for short sentences, 60 for moderate, 40 for long, 50 if unknown.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn approximate(text: &str) -> f64 {
        let sentences = text.chars().filter(|c| TERMINATORS.contains(c)).count();
        let words = text.split_whitespace().count();
        if sentences == 0 || words == 0 {
            return 50.0;
        }
        let words_per_sentence = words as f64 / sentences as f64;
        if words_per_sentence < 10.0 {
            80.0
        } else if words_per_sentence < 20.0 {
            60.0
        } else {
            40.0
        }
    }
}

impl ReadabilityScorer for SentenceLengthApprox {
    fn reading_ease(&self, text: &str) -> Option<f64> {
        Some(Self::approximate(text))
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Flesch reading ease with a vowel-group syllable estimate.
pub struct FleschReadingEase;

impl ReadabilityScorer for FleschReadingEase {
    #[allow(clippy::cast_precision_loss)]
    fn reading_ease(&self, text: &str) -> Option<f64> {
        let stats = SentenceStats::of(text);
        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|token| token.chars().any(char::is_alphabetic))
            .collect();
        if stats.sentences == 0 || words.is_empty() {
            return None;
        }
        let syllables: usize = words.iter().map(|word| syllables(word)).sum();
        let words_per_sentence = words.len() as f64 / stats.sentences as f64;
        let syllables_per_word = syllables as f64 / words.len() as f64;
        let ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        Some(ease.clamp(0.0, 100.0))
    }
}

/// Estimates syllables as runs of vowels, discounting a silent trailing `e`.
fn syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    let is_vowel = |c: &char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut previous_vowel = false;
    for c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }
    let silent_e = letters.ends_with(&['e']) && !letters.ends_with(&['l', 'e']);
    if silent_e && groups > 1 {
        groups -= 1;
    }
    groups.max(1)
}

#[cfg(test)]
#[path = "tests/readability.rs"]
mod tests;
