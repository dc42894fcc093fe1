//! Property and scenario tests for the text splitter.

use docrag::TextSplitter;
use proptest::prelude::*;

/// **Property: chunker termination and bounds**
/// *For any* text containing at least one non-whitespace character and
/// any `0 <= overlap < size`, splitting SHALL terminate, produce at
/// least one chunk, and every chunk SHALL be non-empty, at most `size`
/// characters long, and present in the input text.
mod prop_chunker_bounds {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn chunks_are_bounded_and_from_the_input(
            text in "[a-zA-Z0-9 .!?\n]{1,500}",
            size in 1usize..64,
            overlap_frac in 0usize..64,
        ) {
            prop_assume!(text.chars().any(|c| !c.is_whitespace()));
            let overlap = overlap_frac % size;

            let splitter = TextSplitter::new(size, overlap).unwrap();
            let chunks: Vec<String> = splitter.split(&text).collect();

            prop_assert!(!chunks.is_empty(), "non-whitespace input must yield a chunk");
            for chunk in &chunks {
                prop_assert!(!chunk.trim().is_empty());
                prop_assert!(
                    chunk.chars().count() <= size,
                    "chunk of {} chars exceeds size {}",
                    chunk.chars().count(),
                    size,
                );
                prop_assert!(text.contains(chunk.as_str()), "chunk not found in input");
            }
        }
    }
}

/// **Property: multi-byte safety**
/// Splitting never panics on char boundaries and the size bound is
/// measured in characters for arbitrary unicode input.
mod prop_unicode_safety {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn unicode_input_never_panics(
            text in "\\PC{1,200}",
            size in 1usize..32,
        ) {
            let splitter = TextSplitter::new(size, size / 2).unwrap();
            for chunk in splitter.split(&text) {
                prop_assert!(chunk.chars().count() <= size);
            }
        }
    }
}

/// With distinct characters and no separators the splitter degrades to
/// hard cuts, making chunk positions recoverable: consecutive chunks
/// overlap by exactly `overlap` characters and together cover the
/// whole input.
#[test]
fn hard_cut_chunks_overlap_exactly_and_cover_input() {
    let text: String = "0123456789abcdefghijklmnopqrstuvwxyz".to_string();
    let size = 10;
    let overlap = 3;

    let splitter = TextSplitter::new(size, overlap).unwrap();
    let chunks: Vec<String> = splitter.split(&text).collect();

    let mut prev_end = 0;
    for chunk in &chunks {
        let start = text.find(chunk.as_str()).unwrap();
        if prev_end > 0 {
            assert_eq!(prev_end - start, overlap, "unexpected overlap before {chunk:?}");
        }
        prev_end = start + chunk.len();
    }
    assert_eq!(prev_end, text.len(), "chunks must cover the input");
}

#[test]
fn sample_sentences_stay_within_twenty_characters() {
    let text = "Cats are mammals. Dogs are mammals. Cars are vehicles.";
    let splitter = TextSplitter::new(20, 5).unwrap();
    let chunks: Vec<String> = splitter.split(text).collect();

    assert!(chunks.len() >= 2, "expected at least two chunks, got {chunks:?}");
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 20, "{chunk:?} exceeds 20 characters");
    }
    assert!(chunks.iter().any(|c| c == "Cats are mammals."));
    assert!(chunks.iter().any(|c| c == "Dogs are mammals."));
}

#[test]
fn splits_at_sentence_boundaries_before_spaces() {
    let text = "One sentence here. Another one follows here.";
    let splitter = TextSplitter::new(25, 0).unwrap();
    let chunks: Vec<String> = splitter.split(text).collect();
    assert_eq!(chunks[0], "One sentence here.");
}
