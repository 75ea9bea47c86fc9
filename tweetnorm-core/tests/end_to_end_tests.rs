//! End-to-end tests for the tweet normalization pipeline

use tweetnorm_core::*;

const TWEET: &str = "Die @bedcon ist die großartigste #Konferenz des Jahres. http://bedcon.org";

fn tweet_chain() -> ChainNormalizer {
    ChainNormalizer::new(vec![
        Box::new(LowercaseNormalizer::new()),
        Box::new(UnicodeRangeNormalizer::new(CodeRange::EMOTICONS, "")),
        Box::new(RegexNormalizer::url("").unwrap()),
        Box::new(
            StringSetNormalizer::new(
                [
                    "?", ".", ",", "@", "-", "/", ":", "#", "!", "(", ")", "[", "]", "¿",
                ],
                "",
            )
            .unwrap(),
        ),
    ])
}

#[test]
fn test_tweet_is_denoised() {
    let normalized = tweet_chain().normalize(TWEET);

    assert_eq!(normalized, "die bedcon ist die großartigste konferenz des jahres ");
    assert!(!normalized.chars().any(char::is_uppercase));
    assert!(!normalized.contains("http"));
    assert!(!normalized.contains("bedcon.org"));
    for symbol in PUNCTUATION {
        assert!(!normalized.contains(symbol), "found {symbol:?}");
    }
    assert!(!normalized.chars().any(|c| CodeRange::EMOTICONS.contains(c)));
}

#[test]
fn test_tweet_with_emoticon() {
    let tweet = "Die @bedcon ist die großartigste #Konferenz dieses Jahr. \u{1F60D} http://bedcon.org";
    let normalized = tweet_chain().normalize(tweet);
    assert_eq!(normalized, "die bedcon ist die großartigste konferenz dieses jahr  ");
}

#[test]
fn test_character_bigrams_cover_normalized_text() {
    let normalized = tweet_chain().normalize(TWEET);
    let tokenizer = NGramTokenizer::new(BIGRAM, Level::Character).unwrap();
    let bigrams = tokenizer.tokenize(&normalized);

    let length = normalized.chars().count();
    assert_eq!(bigrams.len(), length - 1);
    assert_eq!(bigrams.first().map(String::as_str), Some("di"));
    assert_eq!(bigrams.last().map(String::as_str), Some("s "));
    assert!(bigrams.contains(&"ßa".to_string()));

    // First char of every bigram, plus the final char, rebuilds the text
    let mut rebuilt: String = bigrams.iter().filter_map(|b| b.chars().next()).collect();
    rebuilt.extend(bigrams.last().and_then(|b| b.chars().last()));
    assert_eq!(rebuilt, normalized);
}

#[test]
fn test_word_bigrams_of_tweet() {
    let normalized = tweet_chain().normalize(TWEET);
    let tokenizer = NGramTokenizer::new(BIGRAM, Level::Word).unwrap();
    let bigrams = tokenizer.tokenize(&normalized);

    assert_eq!(bigrams[0], "die bedcon");
    assert_eq!(bigrams[1], "bedcon ist");
    // Trailing space leaves an empty final word
    assert_eq!(bigrams.last().map(String::as_str), Some("jahres "));
}

#[test]
fn test_preset_matches_hand_built_chain() {
    let pipeline = presets::pipeline("tweet").unwrap();
    let output = pipeline.process(TWEET);

    assert_eq!(output.normalized, tweet_chain().normalize(TWEET));
    assert_eq!(
        output.ngrams,
        NGramTokenizer::new(BIGRAM, Level::Character)
            .unwrap()
            .tokenize(&output.normalized)
    );
}

#[test]
fn test_normalization_is_idempotent_on_tweet() {
    let chain = tweet_chain();
    let once = chain.normalize(TWEET);
    assert_eq!(chain.normalize(&once), once);
}

#[test]
fn test_words_preset_drops_transport_symbols() {
    let pipeline = presets::pipeline("words").unwrap();
    let output = pipeline.process("On my way \u{1F697} to #RustConf!");
    assert_eq!(output.normalized, "on my way  to rustconf");
    assert_eq!(
        output.ngrams,
        vec!["on my", "my way", "way ", " to", "to rustconf"]
    );
}
