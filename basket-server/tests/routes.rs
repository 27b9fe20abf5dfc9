use basket_challenges::{Catalog, Item};
use basket_server::{bind_address, load_catalog, routes};
use basket_structs::config::ServerConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use warp::http::StatusCode;

fn grocery_routes(
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    routes(Arc::new(Catalog::grocery()))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_index_lists_catalog() {
    let resp = warp::test::request()
        .method("GET")
        .path("/")
        .reply(&grocery_routes())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let items = body_json(resp.body());
    assert_eq!(items.as_array().unwrap().len(), 15);
    assert_eq!(items[0]["name"], "Milk");
}

#[tokio::test]
async fn test_get_item() {
    let resp = warp::test::request()
        .method("GET")
        .path("/item/3")
        .reply(&grocery_routes())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp.body()),
        json!({"id": 3, "name": "Eggs", "value": 9, "weight": 1, "price": 3.0})
    );
}

#[tokio::test]
async fn test_get_missing_item() {
    let resp = warp::test::request()
        .method("GET")
        .path("/item/999")
        .reply(&grocery_routes())
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp.body()), json!({"error": "Item not found"}));
}

#[tokio::test]
async fn test_optimize_knapsack() {
    let resp = warp::test::request()
        .method("POST")
        .path("/optimize")
        .json(&json!({"max_weight": 10, "max_price": 20.0, "algorithm": "knapsack"}))
        .reply(&grocery_routes())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let selections = body_json(resp.body());
    let selections = selections.as_array().unwrap();
    assert_eq!(selections.len(), 1);
    assert_eq!(selections[0]["total_value"], 49);
    assert_eq!(selections[0]["total_weight"], 10);
    assert_eq!(selections[0]["total_price"], 19.5);
    assert_eq!(selections[0]["items"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_optimize_enumerators_return_top_ten() {
    for algorithm in ["bfs", "dfs"] {
        let resp = warp::test::request()
            .method("POST")
            .path("/optimize")
            .json(&json!({"max_weight": "10", "max_price": "20", "algorithm": algorithm}))
            .reply(&grocery_routes())
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let selections = body_json(resp.body());
        let values: Vec<u64> = selections
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["total_value"].as_u64().unwrap())
            .collect();
        assert_eq!(values, vec![49, 48, 48, 48, 47, 47, 47, 47, 47, 47]);
    }
}

#[tokio::test]
async fn test_optimize_with_empty_body_uses_defaults() {
    let resp = warp::test::request()
        .method("POST")
        .path("/optimize")
        .json(&json!({}))
        .reply(&grocery_routes())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body())[0]["total_value"], 49);
}

#[tokio::test]
async fn test_optimize_zero_budget() {
    let resp = warp::test::request()
        .method("POST")
        .path("/optimize")
        .json(&json!({"max_weight": 1, "max_price": 0.0, "algorithm": "bfs"}))
        .reply(&grocery_routes())
        .await;
    assert_eq!(
        body_json(resp.body()),
        json!([{"items": [], "total_weight": 0, "total_price": 0.0, "total_value": 0}])
    );
}

#[tokio::test]
async fn test_optimize_rejects_get() {
    let resp = warp::test::request()
        .method("GET")
        .path("/optimize")
        .reply(&grocery_routes())
        .await;
    assert!(!resp.status().is_success());
}

#[tokio::test]
async fn test_routes_with_substituted_catalog() {
    let catalog = Catalog::new(vec![Item::new(21, "Tea", 4, 1, 2.25)]).unwrap();
    let filter = routes(Arc::new(catalog));
    let resp = warp::test::request()
        .method("GET")
        .path("/item/21")
        .reply(&filter)
        .await;
    assert_eq!(body_json(resp.body())["price"], 2.25);
    let resp = warp::test::request()
        .method("GET")
        .path("/item/3")
        .reply(&filter)
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_bind_address() {
    let addr = bind_address(&ServerConfig::default()).unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:5000");
    let config = ServerConfig {
        host: "localhost".to_string(),
        ..ServerConfig::default()
    };
    assert!(bind_address(&config).is_err());
}

#[test]
fn test_load_catalog_defaults_to_grocery() {
    assert_eq!(load_catalog(None).unwrap(), Catalog::grocery());
    assert!(load_catalog(Some(std::path::Path::new("/nonexistent.json"))).is_err());
}
