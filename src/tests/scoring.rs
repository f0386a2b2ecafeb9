use super::{ScoringEngine, Scores};
use crate::metrics::Metrics;
use crate::outline::OutlineParser;
use crate::thresholds::{Thresholds, Weights};

fn baseline() -> Metrics {
    Metrics {
        total_words: 1500,
        total_sections: 6,
        max_section_words: 300,
        avg_section_words: 250.0,
        hierarchy_depth: 2,
        has_code_blocks: false,
        has_appendices: false,
        preamble_words: 0,
        code_blocks: 0,
        code_words: 0,
        oversized_sections: 0,
        skipped_levels: 0,
        list_items: 0,
    }
}

fn empty() -> Metrics {
    Metrics {
        total_words: 0,
        total_sections: 0,
        max_section_words: 0,
        avg_section_words: 0.0,
        hierarchy_depth: 0,
        ..baseline()
    }
}

fn fixed_ease(ease: f64) -> ScoringEngine {
    ScoringEngine::default().with_readability(move |_: &str| Some(ease))
}

fn sentence(words: usize) -> String {
    format!("{}.", vec!["word"; words].join(" "))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_structure_without_sections_is_zero() {
    assert_close(ScoringEngine::default().structure(&empty()), 0.0);
}

#[test]
fn test_structure_ideal_document() {
    assert_close(ScoringEngine::default().structure(&baseline()), 100.0);
}

#[test]
fn test_structure_penalises_deep_nesting() {
    let engine = ScoringEngine::default();
    let five = Metrics {
        hierarchy_depth: 5,
        ..baseline()
    };
    let seven = Metrics {
        hierarchy_depth: 7,
        ..baseline()
    };

    assert_close(engine.structure(&five), 85.0);
    assert_close(engine.structure(&seven), 70.0);
}

#[test]
fn test_structure_section_count_has_diminishing_returns() {
    let engine = ScoringEngine::default();
    let few = Metrics {
        total_sections: 3,
        ..baseline()
    };
    let many = Metrics {
        total_sections: 12,
        ..baseline()
    };
    let too_many = Metrics {
        total_sections: 25,
        ..baseline()
    };

    assert_close(engine.structure(&few), 80.0);
    assert_close(engine.structure(&many), engine.structure(&baseline()));
    assert_close(engine.structure(&too_many), 95.0);
}

#[test]
fn test_structure_penalises_imbalance() {
    let lopsided = Metrics {
        max_section_words: 1000,
        avg_section_words: 250.0,
        oversized_sections: 1,
        ..baseline()
    };

    assert_close(ScoringEngine::default().structure(&lopsided), 75.0);
}

#[test]
fn test_structure_penalises_skipped_levels() {
    let skipping = Metrics {
        skipped_levels: 2,
        ..baseline()
    };

    assert_close(ScoringEngine::default().structure(&skipping), 90.0);
}

#[test]
fn test_content_band() {
    let engine = ScoringEngine::default();
    let at = |total_words| Metrics {
        total_words,
        ..baseline()
    };

    assert_close(engine.content(&at(0)), 0.0);
    assert_close(engine.content(&at(500)), 35.0);
    assert_close(engine.content(&at(1000)), 70.0);
    assert_close(engine.content(&at(2000)), 70.0);
    assert_close(engine.content(&at(4000)), 35.0);
}

#[test]
fn test_content_decays_smoothly() {
    let engine = ScoringEngine::default();
    let at = |total_words| Metrics {
        total_words,
        ..baseline()
    };

    assert!(engine.content(&at(999)) < engine.content(&at(1000)));
    assert!(engine.content(&at(999)) > engine.content(&at(900)));
    assert!(engine.content(&at(2001)) < engine.content(&at(2000)));
    assert!(engine.content(&at(2001)) > engine.content(&at(2500)));
}

#[test]
fn test_content_bonuses() {
    let engine = ScoringEngine::default();
    let with_code = Metrics {
        has_code_blocks: true,
        ..baseline()
    };
    let with_both = Metrics {
        has_code_blocks: true,
        has_appendices: true,
        ..baseline()
    };

    assert_close(engine.content(&with_code), 90.0);
    assert_close(engine.content(&with_both), 100.0);
}

#[test]
fn test_content_ignores_code_words() {
    let code_heavy = Metrics {
        total_words: 1500,
        code_words: 1000,
        has_code_blocks: true,
        ..baseline()
    };

    assert_close(ScoringEngine::default().content(&code_heavy), 35.0 + 20.0);
}

#[test]
fn test_clarity_of_empty_document_is_zero() {
    assert_close(fixed_ease(65.0).clarity(&empty(), ""), 0.0);
}

#[test]
fn test_clarity_with_injected_scorer() {
    let prose = sentence(15);
    let aided = Metrics {
        has_code_blocks: true,
        has_appendices: true,
        list_items: 3,
        ..baseline()
    };

    assert_close(fixed_ease(65.0).clarity(&baseline(), &prose), 70.0);
    assert_close(fixed_ease(65.0).clarity(&aided, &prose), 100.0);
    assert_close(fixed_ease(40.0).clarity(&baseline(), &prose), 33.0 + 15.0);
}

#[test]
fn test_clarity_sentence_length_bands() {
    let engine = fixed_ease(65.0);

    assert_close(engine.clarity(&baseline(), &sentence(5)), 55.0 + 10.0);
    assert_close(engine.clarity(&baseline(), &sentence(22)), 55.0 + 8.0);
    assert_close(engine.clarity(&baseline(), &sentence(30)), 55.0);
    assert_close(engine.clarity(&baseline(), "no terminators"), 55.0 + 5.0);
}

#[test]
fn test_clarity_falls_back_when_scorer_declines() {
    let declining = ScoringEngine::default().with_readability(|_: &str| -> Option<f64> { None });
    let broken = ScoringEngine::default().with_readability(|_: &str| Some(f64::NAN));
    let prose = sentence(15);

    // 15 words per full stop is the 60-point band of the approximation.
    assert_close(declining.clarity(&baseline(), &prose), 70.0);
    assert_close(broken.clarity(&baseline(), &prose), 70.0);
}

#[test]
fn test_context_rewards_front_loaded_keywords() {
    let parser = OutlineParser::markdown().unwrap();
    let full = parser.parse(
        "# Overview\nThe project goal uses a framework with security requirements because of a past decision.\n",
    );
    let partial = parser.parse("# Overview\nThe project is small.\n");
    let engine = ScoringEngine::default();

    assert_close(engine.context(&full), 70.0 + 21.0);
    assert_close(engine.context(&partial), 17.5 + 21.0);
}

#[test]
fn test_context_only_reads_leading_sections() {
    let parser = OutlineParser::markdown().unwrap();
    let late = parser.parse("# A\nx\n# B\nx\n# C\nx\n# D\nproject framework security because\n");

    assert_close(ScoringEngine::default().context(&late), 21.0);
}

#[test]
fn test_context_counts_titles() {
    let parser = OutlineParser::markdown().unwrap();
    let titled = parser.parse("# Tech Stack\nx\n# Constraints\nx\n");

    assert_close(ScoringEngine::default().context(&titled), 35.0 + 21.0);
}

#[test]
fn test_context_without_sections_is_zero() {
    let parser = OutlineParser::markdown().unwrap();
    let outline = parser.parse("project goal framework security because");

    assert_close(ScoringEngine::default().context(&outline), 0.0);
}

#[test]
fn test_context_size_factor() {
    let parser = OutlineParser::markdown().unwrap();
    let body = vec!["word"; 600].join(" ");
    let sized_text = format!("# Project\n{body}\n");
    let sized = parser.parse(&sized_text);
    let long_body = vec!["word"; 1600].join(" ");
    let oversized_text = format!("# Project\n{long_body}\n");
    let oversized = parser.parse(&oversized_text);
    let engine = ScoringEngine::default();

    assert_close(engine.context(&sized), 17.5 + 30.0);
    assert_close(engine.context(&oversized), 17.5 + 27.0);
}

#[test]
fn test_overall_weighting() {
    let engine = ScoringEngine::default();
    let structure_only = Scores {
        structure: 100.0,
        content: 0.0,
        clarity: 0.0,
        context: 0.0,
    };
    let perfect = Scores {
        structure: 100.0,
        content: 100.0,
        clarity: 100.0,
        context: 100.0,
    };

    assert_close(engine.overall(&structure_only), 25.0);
    assert_close(engine.overall(&perfect), 100.0);
}

#[test]
fn test_overall_rounds_to_one_decimal() {
    let scores = Scores {
        structure: 33.3,
        content: 66.7,
        clarity: 12.1,
        context: 90.9,
    };
    let overall = ScoringEngine::default().overall(&scores);

    assert_close(overall, (overall * 10.0).round() / 10.0);
    assert_close(overall, 49.5);
}

#[test]
fn test_weights_are_normalised() {
    let doubled = Weights {
        structure: 2.0,
        content: 2.0,
        clarity: 2.0,
        context: 2.0,
    };
    let zero = Weights {
        structure: 0.0,
        content: 0.0,
        clarity: 0.0,
        context: 0.0,
    };
    let scores = Scores {
        structure: 80.0,
        content: 60.0,
        clarity: 40.0,
        context: 20.0,
    };

    assert_close(ScoringEngine::new(Thresholds::default(), doubled).overall(&scores), 50.0);
    assert_close(ScoringEngine::new(Thresholds::default(), zero).overall(&scores), 50.0);
}

#[test]
fn test_score_applies_all_dimensions() {
    let parser = OutlineParser::markdown().unwrap();
    let outline = parser.parse("# Overview\nThe project goal.\n");
    let metrics = Metrics::collect(&outline, &Thresholds::default());
    let scores = fixed_ease(65.0).score(&metrics, &outline);

    for value in [scores.structure, scores.content, scores.clarity, scores.context] {
        assert!((0.0..=100.0).contains(&value));
        assert_close(value, (value * 10.0).round() / 10.0);
    }
}

#[test]
fn test_thresholds_keep_custom_readability() {
    let strict = Thresholds {
        max_hierarchy_depth: 1,
        ..Thresholds::default()
    };
    let engine = fixed_ease(65.0).with_thresholds(strict);
    let deep = Metrics {
        hierarchy_depth: 2,
        ..baseline()
    };

    assert_close(engine.structure(&deep), 85.0);
    assert_close(engine.clarity(&baseline(), &sentence(15)), 70.0);
}
