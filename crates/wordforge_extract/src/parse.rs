//! Shape parsing for raw completion text.
//!
//! These functions are pure: raw text in, [`Extraction`] out. A shape
//! mismatch is never an error here; the text comes back verbatim inside the
//! fallback so callers can log or relay exactly what the model said.

use wordforge_core::{Definition, Extraction, Fallback, Quiz, VocabList};

/// Interprets raw text as a JSON array of vocabulary words.
///
/// Tolerates one level of double encoding: when the completion is a JSON
/// string whose contents are themselves a JSON array, the inner document is
/// decoded again. The final value must be a non-empty array of strings.
pub fn vocab_list(raw: &str) -> Extraction<VocabList> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return Extraction::Fallback(Fallback::unparseable(raw)),
    };

    let value = match value {
        serde_json::Value::String(inner) => match serde_json::from_str(&inner) {
            Ok(value) => value,
            Err(_) => return Extraction::Fallback(Fallback::unparseable(raw)),
        },
        other => other,
    };

    let words: Vec<String> = match serde_json::from_value(value) {
        Ok(words) => words,
        Err(_) => return Extraction::Fallback(Fallback::unparseable(raw)),
    };

    match VocabList::new(words) {
        Some(list) => Extraction::Success(list),
        None => Extraction::Fallback(Fallback::unparseable(raw)),
    }
}

/// Interprets raw text as a JSON definition object.
///
/// The fallback is degraded rather than empty: it carries a best-effort
/// [`Definition`] built from the raw text with newlines flattened to spaces
/// and the ends trimmed. When nothing printable remains the definition
/// reads `"Definition unavailable."`.
pub fn definition(word: &str, raw: &str) -> Extraction<Definition> {
    match serde_json::from_str::<Definition>(raw) {
        Ok(parsed) => Extraction::Success(parsed),
        Err(_) => {
            let degraded = degraded_definition(word, raw);
            Extraction::Fallback(Fallback::unparseable_with(raw, degraded))
        }
    }
}

/// Interprets raw text as a JSON quiz object.
///
/// Field presence is the whole validation: options A through D must all be
/// present and `correctAnswer` must name one of them, or deserialization
/// fails and the text becomes a fallback.
pub fn quiz(raw: &str) -> Extraction<Quiz> {
    match serde_json::from_str::<Quiz>(raw) {
        Ok(parsed) => Extraction::Success(parsed),
        Err(_) => Extraction::Fallback(Fallback::unparseable(raw)),
    }
}

fn degraded_definition(word: &str, raw: &str) -> Definition {
    let flattened = raw.replace('\n', " ");
    let trimmed = flattened.trim();
    let text = if trimmed.is_empty() {
        "Definition unavailable.".to_string()
    } else {
        trimmed.to_string()
    };

    Definition::builder()
        .word(word)
        .definition(text)
        .build()
        .expect("Valid Definition")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordforge_core::FallbackReason;

    #[test]
    fn well_formed_array_parses_to_the_same_words() {
        let outcome = vocab_list(r#"["abate", "acrimony", "benevolent"]"#);
        let list = outcome.success().expect("success");
        assert_eq!(list.words(), ["abate", "acrimony", "benevolent"]);
    }

    #[test]
    fn double_encoded_array_is_unwrapped_once() {
        let outcome = vocab_list(r#""[\"abate\", \"acrimony\"]""#);
        let list = outcome.success().expect("success");
        assert_eq!(list.words(), ["abate", "acrimony"]);
    }

    #[test]
    fn non_json_text_falls_back_with_verbatim_raw() {
        let raw = "Here are some words: abate, acrimony";
        let outcome = vocab_list(raw);
        let fallback = outcome.fallback().expect("fallback");
        assert_eq!(*fallback.reason(), FallbackReason::Unparseable);
        assert_eq!(fallback.raw_text(), raw);
    }

    #[test]
    fn empty_array_is_not_a_success() {
        let outcome = vocab_list("[]");
        assert!(!outcome.is_success());
    }

    #[test]
    fn array_of_non_strings_falls_back() {
        assert!(!vocab_list("[1, 2, 3]").is_success());
        assert!(!vocab_list(r#"{"words": ["abate"]}"#).is_success());
    }

    #[test]
    fn definition_fallback_flattens_newlines_and_trims() {
        let outcome = definition("abate", "  To become\nless intense.\n");
        let fallback = outcome.fallback().expect("fallback");
        let degraded = fallback.degraded().as_ref().expect("degraded payload");
        assert_eq!(degraded.word(), "abate");
        assert_eq!(degraded.definition(), "To become less intense.");
        assert_eq!(fallback.raw_text(), "  To become\nless intense.\n");
    }

    #[test]
    fn definition_fallback_leaves_interior_spacing_alone() {
        let outcome = definition("abate", "lessen,  diminish\n\nwane");
        let fallback = outcome.fallback().expect("fallback");
        let degraded = fallback.degraded().as_ref().expect("degraded payload");
        assert_eq!(degraded.definition(), "lessen,  diminish  wane");
    }

    #[test]
    fn blank_definition_fallback_reads_unavailable() {
        let outcome = definition("abate", "   \n\t  ");
        let fallback = outcome.fallback().expect("fallback");
        let degraded = fallback.degraded().as_ref().expect("degraded payload");
        assert_eq!(degraded.definition(), "Definition unavailable.");
    }

    #[test]
    fn definition_object_parses_as_success() {
        let outcome = definition(
            "abate",
            r#"{"word": "abate", "definition": "To become less intense."}"#,
        );
        let parsed = outcome.success().expect("success");
        assert_eq!(parsed.word(), "abate");
    }

    #[test]
    fn quiz_with_all_fields_parses() {
        let raw = r#"{
            "question": "What is the best definition of 'abate'?",
            "options": {"A": "a", "B": "b", "C": "c", "D": "d"},
            "correctAnswer": "C"
        }"#;
        let quiz = quiz(raw).success().expect("success");
        assert_eq!(quiz.answer_text(), "c");
    }

    #[test]
    fn quiz_missing_an_option_falls_back() {
        let raw = r#"{
            "question": "q",
            "options": {"A": "a", "B": "b", "D": "d"},
            "correctAnswer": "A"
        }"#;
        let fallback = quiz(raw).fallback().expect("fallback");
        assert_eq!(fallback.raw_text(), raw);
        assert!(fallback.degraded().is_none());
    }

    #[test]
    fn quiz_answer_outside_abcd_falls_back() {
        let raw = r#"{
            "question": "q",
            "options": {"A": "a", "B": "b", "C": "c", "D": "d"},
            "correctAnswer": "E"
        }"#;
        assert!(!quiz(raw).is_success());
    }
}
