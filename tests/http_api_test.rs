use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use small_cookbook::{create_router, Cookbook};
use tower::ServiceExt;

async fn send(router: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = router.clone().oneshot(request).await?;

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    Ok((status, json))
}

async fn post_json(router: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?;
    send(router, request).await
}

async fn get_summary(router: &Router, name: &str) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("/summary?name={}", name.replace(' ', "%20")))
        .body(Body::empty())?;
    send(router, request).await
}

async fn add(router: &Router, entry: Value) -> Result<()> {
    let (status, body) = post_json(router, "/entry", entry.clone()).await?;
    assert_eq!(status, StatusCode::OK, "{} -> {}", entry, body);
    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let router = create_router(Cookbook::new());
    let request = Request::builder().uri("/health").body(Body::empty())?;

    let (status, body) = send(&router, request).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
    Ok(())
}

#[tokio::test]
async fn test_parse_normalizes_handwriting() -> Result<()> {
    let router = create_router(Cookbook::new());

    let (status, body) = post_json(&router, "/parse", json!({ "input": "Riz@z RISO00tto!" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Rizz Risotto" }));

    let (status, body) = post_json(&router, "/parse", json!({ "input": "--__" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unparseable_name");

    let (status, _) = post_json(&router, "/parse", json!({})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_parse_rejects_bad_bodies_with_json_error() -> Result<()> {
    let router = create_router(Cookbook::new());

    let (status, body) = post_json(&router, "/parse", json!({ "input": 5 })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unparseable_name");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("not json at all"))?;
    let (status, body) = send(&router, request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unparseable_name");
    assert!(body["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_entry_rejections_carry_specific_codes() -> Result<()> {
    let router = create_router(Cookbook::new());
    add(&router, json!({ "type": "ingredient", "name": "Egg", "cookTime": 6 })).await?;

    let cases = vec![
        (json!({ "type": "pudding", "name": "Flan", "cookTime": 1 }), "malformed_entry"),
        (json!(["not", "an", "object"]), "malformed_entry"),
        (json!({ "type": "recipe", "name": "Egg", "requiredItems": [] }), "duplicate_name"),
        (json!({ "type": "recipe", "name": "Cake", "requiredItems": [{ "name": "Egg", "quantity": 0 }] }), "invalid_required_items"),
        (
            json!({ "type": "recipe", "name": "Cake", "requiredItems": [
                { "name": "Egg", "quantity": 1 },
                { "name": "Egg", "quantity": 2 }
            ] }),
            "duplicate_required_item",
        ),
        (json!({ "type": "ingredient", "name": "Beef", "cookTime": -1 }), "invalid_cost"),
    ];

    for (entry, code) in cases {
        let (status, body) = post_json(&router, "/entry", entry.clone()).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", entry);
        assert_eq!(body["error"], code, "{}", entry);
        assert!(body["message"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_body_is_malformed() -> Result<()> {
    let router = create_router(Cookbook::new());
    let request = Request::builder()
        .method(Method::POST)
        .uri("/entry")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ \"type\": "))?;

    let (status, body) = send(&router, request).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "malformed_entry");
    Ok(())
}

#[tokio::test]
async fn test_summary_of_nested_recipe() -> Result<()> {
    let router = create_router(Cookbook::new());

    add(&router, json!({
        "type": "recipe",
        "name": "Skibidi Spaghetti",
        "requiredItems": [
            { "name": "Meatball", "quantity": 3 },
            { "name": "Pasta", "quantity": 1 },
            { "name": "Tomato", "quantity": 2 }
        ]
    }))
    .await?;
    add(&router, json!({
        "type": "recipe",
        "name": "Meatball",
        "requiredItems": [
            { "name": "Beef", "quantity": 2 },
            { "name": "Egg", "quantity": 1 }
        ]
    }))
    .await?;
    add(&router, json!({
        "type": "recipe",
        "name": "Pasta",
        "requiredItems": [
            { "name": "Flour", "quantity": 3 },
            { "name": "Egg", "quantity": 1 }
        ]
    }))
    .await?;
    add(&router, json!({ "type": "ingredient", "name": "Beef", "cookTime": 5 })).await?;
    add(&router, json!({ "type": "ingredient", "name": "Egg", "cookTime": 3 })).await?;
    add(&router, json!({ "type": "ingredient", "name": "Flour", "cookTime": 0 })).await?;
    add(&router, json!({ "type": "ingredient", "name": "Tomato", "cookTime": 2 })).await?;

    let (status, body) = get_summary(&router, "Skibidi Spaghetti").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Skibidi Spaghetti");
    // Meatball 3 * (2*5 + 3) + Pasta (0 + 3) + Tomato 2*2
    assert_eq!(body["cookTime"].as_f64(), Some(46.0));

    let ingredients: Vec<(String, f64)> = body["ingredients"]
        .as_array()
        .expect("ingredients array")
        .iter()
        .map(|i| {
            (
                i["name"].as_str().unwrap().to_string(),
                i["quantity"].as_f64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        ingredients,
        vec![
            ("Beef".to_string(), 6.0),
            ("Egg".to_string(), 4.0),
            ("Flour".to_string(), 3.0),
            ("Tomato".to_string(), 2.0),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_summary_failures() -> Result<()> {
    let router = create_router(Cookbook::new());
    add(&router, json!({ "type": "ingredient", "name": "Egg", "cookTime": 1 })).await?;
    add(&router, json!({ "type": "recipe", "name": "X", "requiredItems": [{ "name": "Y", "quantity": 1 }] })).await?;
    add(&router, json!({ "type": "recipe", "name": "Y", "requiredItems": [{ "name": "X", "quantity": 1 }] })).await?;
    add(&router, json!({ "type": "recipe", "name": "Toast", "requiredItems": [{ "name": "Bread", "quantity": 1 }] })).await?;

    let (status, body) = get_summary(&router, "Egg").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not_found");

    let (status, body) = get_summary(&router, "Nope").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not_found");

    let (status, body) = get_summary(&router, "X").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cyclic_reference");

    let (status, body) = get_summary(&router, "Toast").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unresolved_requirement");
    assert!(body["message"].as_str().unwrap().contains("Bread"));

    let request = Request::builder().uri("/summary").body(Body::empty())?;
    let (status, body) = send(&router, request).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "not_found");
    Ok(())
}

#[tokio::test]
async fn test_zero_cost_summary_is_ok() -> Result<()> {
    let router = create_router(Cookbook::new());
    add(&router, json!({ "type": "ingredient", "name": "Water", "cookTime": 0 })).await?;
    add(&router, json!({ "type": "recipe", "name": "Ice", "requiredItems": [{ "name": "Water", "quantity": 2 }] })).await?;

    let (status, body) = get_summary(&router, "Ice").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cookTime"].as_f64(), Some(0.0));
    assert_eq!(body["ingredients"][0]["quantity"].as_f64(), Some(2.0));
    Ok(())
}

#[tokio::test]
async fn test_summary_too_large_to_represent_is_an_error() -> Result<()> {
    let router = create_router(Cookbook::new());
    add(&router, json!({ "type": "ingredient", "name": "Gold", "cookTime": 1e308 })).await?;
    add(&router, json!({ "type": "recipe", "name": "Crown", "requiredItems": [{ "name": "Gold", "quantity": 1e308 }] })).await?;

    let (status, body) = get_summary(&router, "Crown").await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cost_overflow");
    assert!(body["message"].as_str().unwrap().contains("Crown"));
    Ok(())
}
