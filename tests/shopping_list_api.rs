use axum::http::StatusCode;
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_unknown_user_has_empty_list_and_history() {
    let app = helpers::create_app();

    let (status, body) = helpers::get(&app, "/api/shopping-list/ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = helpers::get(&app, "/api/history/ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_add_merges_and_returns_full_list() {
    let app = helpers::create_app();

    let (status, body) = helpers::post(&app, "/api/shopping-list/u1/add", json!({"name": "Milk"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["items"][0]["qty"], 1);
    assert_eq!(body["items"][0]["category"], "Dairy");

    let (_, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/add",
        json!({"name": "milk", "qty": 2}),
    )
    .await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["name"], "Milk");
    assert_eq!(body["items"][0]["qty"], 3);

    let (_, list) = helpers::get(&app, "/api/shopping-list/u1").await;
    assert_eq!(list, body["items"]);
}

#[tokio::test]
async fn test_add_rejects_blank_name() {
    let app = helpers::create_app();

    for name in ["", "   "] {
        let (status, body) = helpers::post(
            &app,
            "/api/shopping-list/u1/add",
            json!({"name": name, "qty": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Item name required"));
    }

    let (_, list) = helpers::get(&app, "/api/shopping-list/u1").await;
    assert_eq!(list, json!([]));
    let (_, history) = helpers::get(&app, "/api/history/u1").await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_add_rejects_oversized_qty() {
    let app = helpers::create_app();

    let (status, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/add",
        json!({"name": "Milk", "qty": i64::MAX}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Quantity must be between"));

    let (_, history) = helpers::get(&app, "/api/history/u1").await;
    assert_eq!(history, json!([]));
}

#[tokio::test]
async fn test_remove_flow() {
    let app = helpers::create_app();

    let (status, _) = helpers::post(&app, "/api/shopping-list/u1/remove", json!({"name": "Tea"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    helpers::post(&app, "/api/shopping-list/u1/add", json!({"name": "Tea", "qty": 2})).await;
    helpers::post(&app, "/api/shopping-list/u1/add", json!({"name": "Soap"})).await;

    let (status, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/remove",
        json!({"name": "tea", "qty": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(helpers::names(&body["items"]), ["Soap"]);

    let (status, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/remove",
        json!({"name": "pears"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(helpers::names(&body["items"]), ["Soap"]);
}

#[tokio::test]
async fn test_replace_and_clear() {
    let app = helpers::create_app();

    let (status, body) = helpers::post(
        &app,
        "/api/shopping-list/u1",
        json!({"items": [
            {"id": "a1", "name": "Bread", "qty": 2, "category": "Bakery"},
            {"name": "Widget", "qty": 1},
            {"name": "Gadget"}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success"}));

    let (_, list) = helpers::get(&app, "/api/shopping-list/u1").await;
    assert_eq!(helpers::names(&list), ["Bread", "Widget", "Gadget"]);
    assert_eq!(list[2]["qty"], 1);
    assert_eq!(list[0]["id"], "a1");
    assert_eq!(list[1]["category"], "Other");
    assert!(list[1]["id"].as_str().is_some_and(|id| !id.is_empty()));

    let (_, subs) = helpers::get(&app, "/api/shopping-list/u1/substitutes").await;
    assert_eq!(
        subs,
        json!([{"base": "Bread", "subs": ["whole wheat bread", "multigrain bread"]}])
    );

    let (status, body) = helpers::post_empty(&app, "/api/shopping-list/u1/clear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success"}));

    let (_, list) = helpers::get(&app, "/api/shopping-list/u1").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_history_ranking_and_limit() {
    let app = helpers::create_app();

    for (name, qty) in [("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5), ("f", 6)] {
        helpers::post(
            &app,
            "/api/shopping-list/u1/add",
            json!({"name": name, "qty": qty}),
        )
        .await;
    }
    helpers::post(&app, "/api/shopping-list/u1/remove", json!({"name": "f", "qty": 6})).await;

    let (_, history) = helpers::get(&app, "/api/history/u1").await;
    assert_eq!(history, json!(["f", "e", "d", "c", "b"]));

    let (_, history) = helpers::get(&app, "/api/history/u1?limit=2").await;
    assert_eq!(history, json!(["f", "e"]));
}

#[tokio::test]
async fn test_command_add_remove_search() {
    let app = helpers::create_app();

    let (status, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/command",
        json!({"text": "I need 2 apples"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["command"], json!({"type": "add", "item": "apples", "qty": 2}));
    assert_eq!(body["items"][0]["category"], "Produce");

    let (_, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/command",
        json!({"text": "remove 1 apples"}),
    )
    .await;
    assert_eq!(body["items"][0]["qty"], 1);

    let (_, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/command",
        json!({"text": "find milk under $2"}),
    )
    .await;
    assert_eq!(body["command"]["type"], "search");
    assert_eq!(helpers::names(&body["results"]), ["Milk"]);
    assert!(body.get("items").is_none());

    let (_, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/command",
        json!({"text": "clear list"}),
    )
    .await;
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_command_unknown_and_blank() {
    let app = helpers::create_app();

    let (status, body) = helpers::post(
        &app,
        "/api/shopping-list/u1/command",
        json!({"text": "sing a song"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"command": {"type": "unknown", "raw": "sing a song"}}));

    let (status, _) = helpers::post(&app, "/api/shopping-list/u1/command", json!({"text": " "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
