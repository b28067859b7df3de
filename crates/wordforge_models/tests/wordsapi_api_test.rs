use wordforge_interface::DictionaryLookup;
use wordforge_models::WordsApiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_wordsapi_definitions_lookup() {
    dotenvy::dotenv().ok();

    let client = WordsApiClient::from_env().expect("WORDS_API_KEY must be set for API tests");

    let body = client
        .definitions("example")
        .await
        .expect("API call succeeded");

    println!("Response: {}", body);
    assert!(body.get("definitions").is_some());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_wordsapi_full_word_document_lookup() {
    dotenvy::dotenv().ok();

    let client = WordsApiClient::from_env().expect("WORDS_API_KEY must be set for API tests");

    let body = client.word("example").await.expect("API call succeeded");

    println!("Response: {}", body);
    assert_eq!(body.get("word").and_then(|w| w.as_str()), Some("example"));
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_wordsapi_unknown_word_surfaces_upstream_status() {
    dotenvy::dotenv().ok();

    let client = WordsApiClient::from_env().expect("WORDS_API_KEY must be set for API tests");

    let err = client
        .definitions("zzzzqqqqxxxx")
        .await
        .expect_err("nonsense word should not resolve");

    println!("Error: {}", err);
}
