use mockito::{Matcher, Server, ServerGuard};
use recipe_lens::config::{ProviderConfig, RecaptchaConfig, YoutubeConfig};
use recipe_lens::{AppConfig, ImageSource, RecipeLens, RecipeLensError};
use serde_json::json;

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

const ANSWER: &str = "Chicken Tikka Masala\n\nIngredients:\n- 1 lb chicken thighs\n- 1 cup yogurt\n\nInstructions:\n1. Marinate the chicken\n2. Simmer in sauce\n\nEquipment Needed:\n- Dutch oven\n\nNutritional Information:\n- Calories: 450\n\nNotes:\n- Serve with naan";

fn gemini_body(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

fn test_config(server: &ServerGuard) -> AppConfig {
    let mut config = AppConfig {
        youtube: YoutubeConfig {
            api_key: Some("yt-key".to_string()),
            base_url: Some(server.url()),
        },
        recaptcha: RecaptchaConfig {
            secret_key: Some("secret".to_string()),
            verify_url: Some(format!("{}/siteverify", server.url())),
            min_score: None,
        },
        ..Default::default()
    };
    config.providers.insert(
        "google".to_string(),
        ProviderConfig {
            api_key: Some("gemini-key".to_string()),
            base_url: Some(server.url()),
            ..ProviderConfig::for_model("gemini-1.5-flash")
        },
    );
    config
}

fn dish_photo() -> ImageSource {
    ImageSource::DataUrl("data:image/jpeg;base64,/9j/4AAQSkZJRg==".to_string())
}

#[tokio::test]
async fn test_dish_photo_to_enriched_recipe() {
    let mut server = Server::new_async().await;
    let gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), "gemini-key".into()))
        .match_body(Matcher::Regex("Consider these additional characteristics or flavors: smoky".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_body(ANSWER))
        .create_async()
        .await;
    let youtube = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "Chicken Tikka Masala recipe".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": [{"id": {"videoId": "tikka42"}}]}"#)
        .create_async()
        .await;

    let generated = RecipeLens::builder()
        .config(test_config(&server))
        .dish_image(dish_photo())
        .characteristics("smoky")
        .with_enrichment()
        .build()
        .await
        .unwrap();

    let recipe = generated.recipe;
    assert_eq!(recipe.name, "Chicken Tikka Masala");
    assert_eq!(recipe.ingredients, vec!["1 lb chicken thighs", "1 cup yogurt"]);
    assert_eq!(recipe.instructions, vec!["Marinate the chicken", "Simmer in sauce"]);
    assert_eq!(recipe.notes, vec!["Serve with naan"]);

    let enrichment = generated.enrichment.unwrap();
    assert_eq!(
        enrichment.video_url.as_deref(),
        Some("https://www.youtube.com/embed/tikka42")
    );
    assert_eq!(enrichment.equipment_links.len(), 1);
    assert_eq!(enrichment.equipment_links[0].item, "Dutch oven");
    assert!(enrichment.equipment_links[0].url.contains("k=Dutch+oven"));

    gemini.assert_async().await;
    youtube.assert_async().await;
}

#[tokio::test]
async fn test_ingredient_list_without_enrichment() {
    let mut server = Server::new_async().await;
    let gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .match_body(Matcher::Regex("from these ingredients: tofu, bok choy".to_string()))
        .with_status(200)
        .with_body(gemini_body("Tofu Stir Fry\n\nIngredients:\n- tofu\n- bok choy"))
        .create_async()
        .await;

    let generated = RecipeLens::builder()
        .config(test_config(&server))
        .ingredients(["tofu", " bok choy "])
        .build()
        .await
        .unwrap();

    assert_eq!(generated.recipe.name, "Tofu Stir Fry");
    assert!(generated.enrichment.is_none());
    gemini.assert_async().await;
}

#[tokio::test]
async fn test_rejected_recaptcha_skips_generation() {
    let mut server = Server::new_async().await;
    let verify = server
        .mock("POST", "/siteverify")
        .with_status(200)
        .with_body(r#"{"success": false}"#)
        .create_async()
        .await;
    let gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = RecipeLens::builder()
        .config(test_config(&server))
        .dish_image(dish_photo())
        .recaptcha_token("bad-token")
        .build()
        .await;

    assert!(matches!(result, Err(RecipeLensError::RecaptchaFailed)));
    verify.assert_async().await;
    gemini.assert_async().await;
}

#[tokio::test]
async fn test_accepted_recaptcha_continues() {
    let mut server = Server::new_async().await;
    let _verify = server
        .mock("POST", "/siteverify")
        .with_status(200)
        .with_body(r#"{"success": true}"#)
        .create_async()
        .await;
    let _gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(gemini_body(ANSWER))
        .create_async()
        .await;

    let generated = RecipeLens::builder()
        .config(test_config(&server))
        .dish_image(dish_photo())
        .recaptcha_token("good-token")
        .build()
        .await
        .unwrap();

    assert_eq!(generated.recipe.name, "Chicken Tikka Masala");
}

#[tokio::test]
async fn test_unusable_answer_is_reported() {
    let mut server = Server::new_async().await;
    let _gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(gemini_body("Ingredients:\n\nInstructions:"))
        .create_async()
        .await;

    let result = RecipeLens::builder()
        .config(test_config(&server))
        .dish_image(dish_photo())
        .build()
        .await;

    assert!(matches!(result, Err(RecipeLensError::NoRecipeGenerated)));
}

#[tokio::test]
async fn test_provider_failure_propagates() {
    let mut server = Server::new_async().await;
    let _gemini = server
        .mock("POST", GEMINI_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let result = RecipeLens::builder()
        .config(test_config(&server))
        .dish_image(dish_photo())
        .build()
        .await;

    match result {
        Err(RecipeLensError::Provider(message)) => assert!(message.contains("500")),
        other => panic!("expected provider error, got {:?}", other.map(|g| g.recipe)),
    }
}

/// Requires GOOGLE_API_KEY and a real photo at RECIPE_LENS_SAMPLE_IMAGE
#[tokio::test]
#[ignore]
async fn test_real_gemini_dish_photo() {
    let path = std::env::var("RECIPE_LENS_SAMPLE_IMAGE").unwrap();
    let recipe = recipe_lens::generate_from_dish_photo(&path).await.unwrap();
    assert!(!recipe.name.is_empty());
    assert!(!recipe.ingredients.is_empty());
}
