use recipe_import::config::Settings;
use recipe_import::server;
use serde_json::{json, Value};

/// Serve the app on an ephemeral port and hand back its base URL.
async fn spawn_app() -> String {
    let app = server::router(&Settings::default()).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <script type="application/ld+json">{json_ld}</script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/import"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.headers()["content-type"], "application/json");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "No URL provided"}));
}

#[tokio::test]
async fn test_empty_url_is_rejected() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/import"))
        .json(&json!({"url": ""}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "No URL provided"}));
}

#[tokio::test]
async fn test_fetch_failure_maps_to_opaque_error() {
    // The upstream page 404s; the client only ever sees the generic message
    let mut upstream = mockito::Server::new_async().await;
    let _m = upstream
        .mock("GET", "/gone")
        .with_status(404)
        .with_body("not found")
        .create();

    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/import"))
        .json(&json!({"url": format!("{}/gone", upstream.url())}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to extract recipe"}));
}

#[tokio::test]
async fn test_unfetchable_url_maps_to_opaque_error() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/import"))
        .json(&json!({"url": "not-a-valid-url"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Failed to extract recipe"}));
}

#[tokio::test]
async fn test_import_returns_normalized_recipe() {
    let mut upstream = mockito::Server::new_async().await;
    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": "Weeknight Carbonara",
        "image": "https://example.com/carbonara.jpg",
        "prepTime": "PT10M",
        "cookTime": "PT20M",
        "recipeYield": "4",
        "recipeCuisine": "Italian",
        "keywords": "pasta, quick",
        "nutrition": {
            "calories": "600 calories",
            "proteinContent": "25 g",
            "carbohydrateContent": "70 g",
            "fatContent": "22 g"
        },
        "recipeIngredient": ["200 g spaghetti", "2 eggs", "100 g pancetta"],
        "recipeInstructions": [
            "Boil the pasta.",
            "Crisp the pancetta.",
            "Toss with beaten eggs off the heat."
        ]
    }
    "#;
    let _m = upstream
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_html(json_ld))
        .create();

    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/import"))
        .json(&json!({"url": format!("{}/recipe", upstream.url())}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();

    // Field names are camelCase on the wire
    assert!(body["id"]
        .as_str()
        .unwrap()
        .starts_with("weeknight_carbonara_"));
    assert_eq!(body["title"], "Weeknight Carbonara");
    assert_eq!(body["thumbnail"], "https://example.com/carbonara.jpg");
    assert_eq!(body["cookTime"], 20);
    assert_eq!(body["prepTime"], 10);
    assert_eq!(body["servings"], 4);
    assert_eq!(body["difficulty"], "unknown");
    assert_eq!(body["cuisine"], "Italian");
    assert_eq!(body["tags"], json!(["pasta", "quick"]));
    assert_eq!(
        body["nutrition"],
        json!({"calories": 600, "protein": 25, "carbs": 70, "fat": 22})
    );
    assert_eq!(
        body["ingredients"][0],
        json!({"name": "200 g spaghetti", "quantity": 1, "unit": ""})
    );
    assert_eq!(body["instructions"].as_array().unwrap().len(), 3);
    assert!(body.get("cook_time").is_none());
    assert!(body.get("prep_time").is_none());
}

#[tokio::test]
async fn test_import_falls_back_without_structured_data() {
    let mut upstream = mockito::Server::new_async().await;
    let html = r#"
    <!DOCTYPE html>
    <html>
    <body>
        <h1>Plain Buttered Noodles</h1>
        <li class="ingredient">egg noodles</li>
        <li class="ingredient">butter</li>
    </body>
    </html>
    "#;
    let _m = upstream
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(html)
        .create();

    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{app}/import"))
        .json(&json!({"url": format!("{}/recipe", upstream.url())}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Plain Buttered Noodles");
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 2);
}
