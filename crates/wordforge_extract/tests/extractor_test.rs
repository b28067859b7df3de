use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use wordforge_core::{AnswerKey, FallbackReason, GenerateRequest, GenerateResponse};
use wordforge_error::{ChatError, ChatErrorKind, WordforgeErrorKind, WordforgeResult};
use wordforge_extract::Extractor;
use wordforge_interface::TextGenerator;

/// Mock generator that returns a canned completion and counts calls.
struct MockGenerator {
    response: String,
    calls: AtomicUsize,
}

impl MockGenerator {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _req: &GenerateRequest) -> WordforgeResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GenerateResponse::new(self.response.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Mock generator that fails every call with an upstream API error.
struct FailingGenerator {
    status: u16,
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _req: &GenerateRequest) -> WordforgeResult<GenerateResponse> {
        Err(ChatError::new(ChatErrorKind::Api {
            status: self.status,
            message: "rate limited".to_string(),
        })
        .into())
    }

    fn provider_name(&self) -> &'static str {
        "mock-failing"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

#[tokio::test]
async fn test_vocab_array_completion_succeeds() {
    let extractor = Extractor::new(MockGenerator::new(
        r#"["abate", "acrimony", "benevolent"]"#,
    ));

    let outcome = extractor.vocab_list(3).await.expect("no transport error");
    let list = outcome.success().expect("success");
    assert_eq!(list.words(), ["abate", "acrimony", "benevolent"]);
}

#[tokio::test]
async fn test_double_encoded_vocab_completion_succeeds() {
    let extractor = Extractor::new(MockGenerator::new(r#""[\"abate\", \"acrimony\"]""#));

    let outcome = extractor.vocab_list(2).await.expect("no transport error");
    let list = outcome.success().expect("success");
    assert_eq!(list.words(), ["abate", "acrimony"]);
}

#[tokio::test]
async fn test_prose_vocab_completion_falls_back_verbatim() {
    let raw = "Sure! Here are some great words: abate, acrimony.";
    let extractor = Extractor::new(MockGenerator::new(raw));

    let outcome = extractor.vocab_list(2).await.expect("no transport error");
    let fallback = outcome.fallback().expect("fallback");
    assert_eq!(*fallback.reason(), FallbackReason::Unparseable);
    assert_eq!(fallback.raw_text(), raw);
}

#[tokio::test]
async fn test_definition_fallback_carries_degraded_payload() {
    let extractor = Extractor::new(MockGenerator::new("not json at all"));

    let outcome = extractor
        .definition("abate")
        .await
        .expect("no transport error");
    let fallback = outcome.fallback().expect("fallback");
    let degraded = fallback.degraded().as_ref().expect("degraded payload");

    assert_eq!(degraded.word(), "abate");
    assert_eq!(degraded.definition(), "not json at all");
    assert_eq!(fallback.raw_text(), "not json at all");
}

#[tokio::test]
async fn test_quiz_completion_with_all_fields_succeeds() {
    let extractor = Extractor::new(MockGenerator::new(
        r#"{
            "question": "What is the best definition of 'abate'?",
            "options": {
                "A": "To increase in intensity",
                "B": "To become less intense",
                "C": "To confuse or perplex",
                "D": "To support or encourage"
            },
            "correctAnswer": "B"
        }"#,
    ));

    let outcome = extractor.quiz("abate").await.expect("no transport error");
    let quiz = outcome.success().expect("success");
    assert_eq!(*quiz.correct_answer(), AnswerKey::B);
    assert_eq!(quiz.answer_text(), "To become less intense");
}

#[tokio::test]
async fn test_quiz_missing_option_falls_back() {
    let extractor = Extractor::new(MockGenerator::new(
        r#"{"question": "q", "options": {"A": "a", "B": "b", "C": "c"}, "correctAnswer": "A"}"#,
    ));

    let outcome = extractor.quiz("abate").await.expect("no transport error");
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_upstream_429_propagates_as_error_not_fallback() {
    let extractor = Extractor::new(FailingGenerator { status: 429 });

    let err = extractor.quiz("abate").await.expect_err("transport error");
    match err.kind() {
        WordforgeErrorKind::Chat(chat_err) => {
            assert_eq!(chat_err.kind.status(), Some(429));
        }
        other => panic!("expected chat error, got {other}"),
    }
}

#[tokio::test]
async fn test_fallback_still_dispatches_exactly_once() {
    let extractor = Extractor::new(MockGenerator::new("garbage"));

    let outcome = extractor.vocab_list(5).await.expect("no transport error");
    assert!(!outcome.is_success());
    assert_eq!(extractor.generator().call_count(), 1);
}
