//! Keyword extraction for prompt enrichment.

use std::collections::HashSet;

/// Common English words dropped before keywords are joined.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "for", "nor", "on", "in", "at", "to", "from", "of",
    "with", "by", "about", "as", "is", "are", "was", "were", "be", "been", "being", "this",
    "that", "these", "those", "it", "its", "he", "she", "they", "we", "you", "your", "my", "our",
    "their", "his", "her", "itself", "himself", "herself", "themselves", "ourselves",
    "yourselves", "myself", "i", "me", "us", "them", "what", "which", "who", "whom", "whose",
    "where", "when", "why", "how", "any", "some", "such", "no", "not", "only", "own", "same",
    "so", "than", "too", "very", "can", "will", "just", "don", "should", "now",
];

const MIN_KEYWORD_CHARS: usize = 3;

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract a comma-joined list of distinct keywords from `text`.
///
/// Lowercases the input, splits on whitespace (and commas, so the output can
/// be fed back in), drops tokens shorter than three characters and stop
/// words, then de-duplicates in first-seen order. Empty input yields `""`.
pub fn extract_keywords(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();
    let keywords: Vec<&str> = lowered
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS && !is_stop_word(w))
        .filter(|w| seen.insert(*w))
        .collect();
    keywords.join(", ")
}

/// Keywords for `topic`, or the raw topic when nothing survives extraction.
pub fn keywords_or_topic(topic: &str) -> String {
    let keywords = extract_keywords(topic);
    if keywords.is_empty() {
        topic.to_owned()
    } else {
        keywords
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn token_set(s: &str) -> HashSet<String> {
        s.split(", ")
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        assert_eq!(
            extract_keywords("The future of AI in Healthcare"),
            "future, healthcare"
        );
    }

    #[test]
    fn deduplicates_preserving_first_seen_order() {
        assert_eq!(
            extract_keywords("Coffee beans and more coffee BEANS roasting"),
            "coffee, beans, more, roasting"
        );
    }

    #[test]
    fn empty_and_blank_input_yield_empty_output() {
        assert_eq!(extract_keywords(""), "");
        assert_eq!(extract_keywords("   \t\n "), "");
    }

    #[test]
    fn only_stop_words_falls_back_to_topic() {
        assert_eq!(extract_keywords("how to be"), "");
        assert_eq!(keywords_or_topic("how to be"), "how to be");
    }

    #[test]
    fn extraction_is_idempotent_on_its_output() {
        let topics = [
            "Sustainable fashion trends for the modern shopper",
            "coffee, tea and the art of brewing",
            "Rust async runtimes: tokio vs async-std",
            "AI",
        ];
        for topic in topics {
            let once = extract_keywords(topic);
            let twice = extract_keywords(&once);
            assert_eq!(token_set(&once), token_set(&twice), "topic: {topic}");
        }
    }

    #[test]
    fn comma_joined_topics_split_into_keywords() {
        assert_eq!(extract_keywords("coffee,tea"), "coffee, tea");
        assert_eq!(extract_keywords("AI,ML,data"), "data");
        assert_eq!(extract_keywords("rust-lang: tokio.rs"), "rust-lang:, tokio.rs");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert_eq!(extract_keywords("ÅÖ café"), "café");
    }
}
