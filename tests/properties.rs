//! Invariants that must hold for any input text.

use docgrade::{AnalysisResult, DocumentAnalyzer};
use proptest::prelude::*;

const EXAMPLE_BLOCK: &str = "\n\n```\nlet x = 1;\n```\n";

fn analyze(text: &str) -> AnalysisResult {
    DocumentAnalyzer::new().unwrap().analyze(text)
}

/// Markdown-ish text: headers, sentences and blank lines from a small alphabet.
fn markdownish() -> impl Strategy<Value = String> {
    "[a-z#. \n]{0,400}"
}

/// Documents assembled line by line from headers, list items, paragraphs and blank lines.
fn document_lines() -> impl Strategy<Value = Vec<String>> {
    let line = prop_oneof![
        "#{1,3} [a-z ]{1,20}",
        "- [a-z .]{1,20}",
        "[a-z .]{1,40}",
        Just(String::new()),
    ];
    prop::collection::vec(line, 0..30)
}

/// `lines` with the example block spliced in before line `at`.
fn with_example_at(lines: &[String], at: usize) -> String {
    let at = at.min(lines.len());
    let mut spliced: Vec<&str> = lines.iter().take(at).map(String::as_str).collect();
    spliced.extend(["", "```", "let x = 1;", "```", ""]);
    spliced.extend(lines.iter().skip(at).map(String::as_str));
    spliced.join("\n")
}

proptest! {
    #[test]
    fn scores_stay_in_range(text in "\\PC*") {
        let result = analyze(&text);

        for score in [
            result.overall_score,
            result.scores.structure,
            result.scores.content,
            result.scores.clarity,
            result.scores.context,
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn sections_and_words_are_consistent(text in markdownish()) {
        let result = analyze(&text);
        let section_words: usize = result.sections.iter().map(|s| s.word_count).sum();

        prop_assert_eq!(result.metrics.total_sections, result.sections.len());
        prop_assert_eq!(
            result.metrics.preamble_words + section_words,
            result.metrics.total_words
        );
        prop_assert!(result.metrics.hierarchy_depth <= 6);
        for (index, section) in result.sections.iter().enumerate() {
            prop_assert_eq!(section.order_index, index);
            prop_assert!((1..=6).contains(&section.level));
        }
    }

    #[test]
    fn analysis_is_idempotent(text in markdownish()) {
        let analyzer = DocumentAnalyzer::new().unwrap();

        prop_assert_eq!(analyzer.analyze(&text), analyzer.analyze(&text));
    }

    #[test]
    fn adding_an_example_never_lowers_content_or_clarity(text in markdownish()) {
        let before = analyze(&text);
        let after = analyze(&format!("{text}{EXAMPLE_BLOCK}"));

        prop_assert!(after.scores.content >= before.scores.content);
        prop_assert!(after.scores.clarity >= before.scores.clarity);
    }

    #[test]
    fn inserting_an_example_never_lowers_content_or_clarity(
        lines in document_lines(),
        at in 0usize..30,
    ) {
        let before = analyze(&lines.join("\n"));
        let after = analyze(&with_example_at(&lines, at));

        prop_assert!(after.metrics.has_code_blocks);
        prop_assert!(after.scores.content >= before.scores.content);
        prop_assert!(after.scores.clarity >= before.scores.clarity);
    }
}
