use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

/// Stock English stopword list applied when no custom set is supplied.
const STANDARD_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k",
    "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of",
    "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll",
    "she's", "should", "shouldn't", "since", "so", "some", "such", "than", "that", "that's",
    "the", "their", "theirs", "them", "themselves", "then", "there", "there's", "therefore",
    "these", "they", "they'd", "they'll", "they're", "they've", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
    "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where", "where's",
    "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
    "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// A case-insensitive set of words excluded from frequency counting.
#[derive(Clone, Debug, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The stock English stopword list.
    pub fn standard() -> Self {
        let mut set = Self::empty();
        set.extend(STANDARD_STOPWORDS.iter().copied());
        set
    }

    /// An empty set; nothing is excluded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add words to the set; entries are lowercased on insert.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            self.words.insert(w.as_ref().to_lowercase());
        }
    }

    /// Whether `word` (already lowercased by the tokenizer) is excluded.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split text into countable tokens.
///
/// Tokens are runs of alphanumeric or apostrophe characters, lowercased, with
/// surrounding apostrophes and a trailing `'s` stripped. Tokens shorter than
/// two characters and pure-number tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            for lower in ch.to_lowercase() {
                cur.push(lower);
            }
        } else {
            flush_token(&mut tokens, &mut cur);
        }
    }
    flush_token(&mut tokens, &mut cur);
    tokens
}

fn flush_token(tokens: &mut Vec<String>, cur: &mut String) {
    let raw = std::mem::take(cur);
    let mut word = raw.trim_matches('\'');
    if let Some(stripped) = word.strip_suffix("'s") {
        word = stripped;
    }
    if word.chars().count() < 2 {
        return;
    }
    if word.chars().all(|c| c.is_numeric()) {
        return;
    }
    tokens.push(word.to_string());
}

/// Word-occurrence counts with a deterministic most-common ordering.
#[derive(Clone, Debug, Default)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    /// Count the tokens of a single text, skipping stopwords.
    pub fn from_text(text: &str, stopwords: &StopwordSet) -> Self {
        let mut counts = HashMap::new();
        for token in tokenize(text) {
            if stopwords.contains(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count tokens across many texts in parallel.
    ///
    /// Fan-out is per text with a commutative merge, so the result is
    /// identical to counting the concatenation sequentially.
    pub fn from_texts<T>(texts: &[T], stopwords: &StopwordSet) -> Self
    where
        T: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|t| Self::from_text(t.as_ref(), stopwords))
            .reduce(Self::default, Self::merged)
    }

    fn merged(mut self, other: Self) -> Self {
        for (word, n) in other.counts {
            *self.counts.entry(word).or_insert(0) += n;
        }
        self
    }

    /// Occurrences of `word`.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no words were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, ordered by count descending and then by
    /// word ascending so ties break deterministically.
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(w, c)| (w.clone(), *c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
#[path = "../tests/unit/freq.rs"]
mod tests;
