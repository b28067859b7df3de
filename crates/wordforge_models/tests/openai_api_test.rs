use wordforge_core::{GenerateRequest, Message};
use wordforge_interface::TextGenerator;
use wordforge_models::OpenAiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_simple_generation() {
    dotenvy::dotenv().ok();

    let client = OpenAiClient::from_env().expect("OPENAI_API_KEY must be set for API tests");

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("Say 'test' and nothing else.")])
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    assert!(!response.text().is_empty());
    println!("Response: {}", response.text());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_openai_json_array_instruction() {
    dotenvy::dotenv().ok();

    let client = OpenAiClient::from_env().expect("OPENAI_API_KEY must be set for API tests");

    let request = GenerateRequest::builder()
        .messages(vec![
            Message::system("You respond with JSON only, no prose."),
            Message::user("Return a JSON array of exactly 3 English words."),
        ])
        .temperature(Some(0.3))
        .max_tokens(Some(100))
        .build()
        .expect("Valid request");

    let response = client.generate(&request).await.expect("API call succeeded");

    println!("Response: {}", response.text());
    assert!(!response.text().is_empty());
}
