//! Integration tests for end-to-end terminology verification.

use termcheck::error::{Result, TermcheckError};
use termcheck::highlight::{HighlightConfig, Highlighter};
use termcheck::profile::{Language, LanguageProfile};
use termcheck::verify::{MatchResult, TermVerifier, verify_terms};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

/// A small development corpus: sentence pairs with deliberately mixed
/// terminology quality.
fn sample_bitext() -> Vec<(String, String)> {
    pairs(&[
        (
            "Original texts are usually good texts, but sometimes are bad texts.",
            "Переведенные тексты - это обычно плохие тексты, но иногда - хорошие тексты.",
        ),
        (
            "Completion of the Project was certified by the Committee.",
            "Завершение Проекта было подтверждено Комитетом.",
        ),
        (
            "The Agency Agreement entered into force.",
            "Документ вступил в силу.",
        ),
        (
            "The five boxing wizards jump quickly.",
            "Некоторый текст",
        ),
    ])
}

fn sample_glossary() -> Vec<(String, String)> {
    pairs(&[
        ("Agency Agreement", "Агентский договор"),
        ("Completion", "Завершение"),
        ("Completion of the Project", "Завершение Проекта"),
    ])
}

#[test]
fn test_successes_over_sample_corpus() -> Result<()> {
    let results = verify_terms("eng-rus", &sample_bitext(), &sample_glossary(), true)?;

    // Entry 2 uses "Completion" and "Completion of the Project", and its
    // target carries both approved translations. Glossary input order is
    // preserved within the entry.
    let keys: Vec<(u32, &str)> = results
        .iter()
        .map(|r| (r.bitext_id, r.source_term.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![(2, "Completion"), (2, "Completion of the Project")]
    );

    let phrase = &results[1];
    assert_eq!(
        phrase.source_snippet,
        "<b>Completion of the Project</b> was certified by the Committee."
    );
    assert_eq!(
        phrase.target_snippet,
        "<b>Завершение Проекта</b> было подтверждено Комитетом."
    );

    Ok(())
}

#[test]
fn test_errors_over_sample_corpus() -> Result<()> {
    let results = verify_terms("eng-rus", &sample_bitext(), &sample_glossary(), false)?;

    // Entry 3 uses "Agency Agreement" but its target dropped the approved
    // translation entirely.
    assert_eq!(results.len(), 1);
    let error = &results[0];
    assert_eq!(error.bitext_id, 3);
    assert_eq!(error.source_term, "Agency Agreement");
    assert_eq!(
        error.source_snippet,
        "The <b>Agency Agreement</b> entered into force."
    );
    // Unmatched target sentences are rendered verbatim.
    assert_eq!(error.target_snippet, "Документ вступил в силу.");

    Ok(())
}

#[test]
fn test_successes_and_errors_partition_source_matches() -> Result<()> {
    let bitext = sample_bitext();
    let glossary = sample_glossary();

    let successes = verify_terms("eng-rus", &bitext, &glossary, true)?;
    let errors = verify_terms("eng-rus", &bitext, &glossary, false)?;

    let key = |r: &MatchResult| (r.bitext_id, r.source_term.clone(), r.target_term.clone());
    let success_keys: Vec<_> = successes.iter().map(key).collect();
    let error_keys: Vec<_> = errors.iter().map(key).collect();

    for k in &success_keys {
        assert!(!error_keys.contains(k), "pair reported in both modes: {k:?}");
    }
    assert_eq!(success_keys.len() + error_keys.len(), 3);

    Ok(())
}

#[test]
fn test_inflected_forms_match_both_languages() -> Result<()> {
    let bitext = pairs(&[(
        "Both completions were recorded.",
        "Оба завершения были зафиксированы.",
    )]);
    let glossary = pairs(&[("Completion", "Завершение")]);

    let results = verify_terms("eng-rus", &bitext, &glossary, true)?;

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].source_snippet,
        "Both <b>completions</b> were recorded."
    );
    assert_eq!(
        results[0].target_snippet,
        "Оба <b>завершения</b> были зафиксированы."
    );

    Ok(())
}

#[test]
fn test_apostrophe_terms_tokenize_as_one_word() -> Result<()> {
    let bitext = pairs(&[(
        "The Foreign Partners' Entrance Consideration was paid in full.",
        "Плата за Вхождение Иностранных Партнеров внесена полностью.",
    )]);
    let glossary = pairs(&[(
        "Foreign Partners' Entrance Consideration",
        "Плата за Вхождение Иностранных Партнеров",
    )]);

    let results = verify_terms("eng-rus", &bitext, &glossary, true)?;

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].source_snippet,
        "The <b>Foreign Partners' Entrance Consideration</b> was paid in full."
    );

    Ok(())
}

#[test]
fn test_empty_inputs() -> Result<()> {
    let empty: Vec<(String, String)> = Vec::new();

    assert!(verify_terms("eng-rus", &sample_bitext(), &empty, true)?.is_empty());
    assert!(verify_terms("eng-rus", &empty, &sample_glossary(), false)?.is_empty());

    Ok(())
}

#[test]
fn test_unsupported_direction_reports_config_error() {
    let err = verify_terms("fra-eng", &sample_bitext(), &sample_glossary(), true).unwrap_err();

    assert!(matches!(err, TermcheckError::Config(_)));
    assert!(err.to_string().contains("fra-eng"));
}

#[test]
fn test_rus_eng_direction_swaps_profiles() -> Result<()> {
    let bitext = pairs(&[(
        "Завершение Проекта было подтверждено.",
        "Completion of the Project was certified.",
    )]);
    let glossary = pairs(&[("Завершение Проекта", "Completion of the Project")]);

    let results = verify_terms("rus-eng", &bitext, &glossary, true)?;

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].source_snippet,
        "<b>Завершение Проекта</b> было подтверждено."
    );

    Ok(())
}

#[test]
fn test_custom_highlighter_and_synonym_profiles() -> Result<()> {
    let verifier = TermVerifier::new(
        LanguageProfile::new(Language::English),
        LanguageProfile::new(Language::Russian)
            .with_synonyms(vec![vec!["завершение".to_string(), "окончание".to_string()]]),
    )
    .with_highlighter(Highlighter::new(HighlightConfig::new().tag("mark")));

    let bitext = pairs(&[(
        "The project reached Completion on time.",
        "Проект достиг окончания в срок.",
    )]);
    let glossary = pairs(&[("Completion", "Завершение")]);

    let results = verifier.verify(&bitext, &glossary, true)?;

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].target_snippet,
        "Проект достиг <mark>окончания</mark> в срок."
    );

    Ok(())
}

#[test]
fn test_large_corpus_keeps_id_order() -> Result<()> {
    let mut bitext = Vec::new();
    for i in 0..200 {
        if i % 3 == 0 {
            bitext.push((
                format!("Sentence {i} mentions Completion explicitly."),
                format!("Предложение {i} упоминает Завершение."),
            ));
        } else {
            bitext.push((format!("Sentence {i} is plain."), format!("Предложение {i}.")));
        }
    }
    let glossary = pairs(&[("Completion", "Завершение")]);

    let results = verify_terms("eng-rus", &bitext, &glossary, true)?;

    assert_eq!(results.len(), 67);
    let ids: Vec<u32> = results.iter().map(|r| r.bitext_id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    Ok(())
}
