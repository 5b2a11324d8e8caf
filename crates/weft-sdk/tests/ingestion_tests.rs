//! JSON ingestion and normalisation tests

use weft_sdk::{Engine, EngineError, EvalError, Value, ValueKind};

#[tokio::test]
async fn test_scalars_convert_by_json_type() {
    let engine = Engine::new();
    let value = engine
        .ingest_json(&serde_json::json!({
            "flag": true,
            "count": 7,
            "ratio": 0.25,
            "label": "plain",
            "nothing": null
        }))
        .await
        .unwrap();

    assert_eq!(value.get_path("flag").unwrap().kind(), ValueKind::Bool);
    assert_eq!(value.get_path("count").unwrap(), &Value::Integer(7));
    assert_eq!(value.get_path("ratio").unwrap().kind(), ValueKind::Decimal);
    assert_eq!(value.get_path("label").unwrap(), &Value::from("plain"));
    assert_eq!(value.get_path("nothing").unwrap(), &Value::Null);
}

#[tokio::test]
async fn test_empty_array_maps_to_null() {
    let engine = Engine::new();
    let value = engine
        .ingest_json(&serde_json::json!({"items": []}))
        .await
        .unwrap();
    assert_eq!(value.get_path("items").unwrap(), &Value::Null);
}

#[tokio::test]
async fn test_insertion_order_is_preserved() {
    let engine = Engine::new();
    let value = engine
        .ingest_json_str(r#"{"z": 1, "a": 2, "m": 3}"#)
        .await
        .unwrap();
    let keys: Vec<String> = value
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[tokio::test]
async fn test_template_leaves_are_normalised_recursively() {
    let engine = Engine::new();
    let value = engine
        .ingest_json(&serde_json::json!({
            "top": "@add(1, 2)",
            "nested": {"list": ["@toUpper('x')", {"deep": "@createArray(1)"}]}
        }))
        .await
        .unwrap();

    assert_eq!(value.get_path("top").unwrap(), &Value::Integer(3));
    let list = value.get_path("nested/list").unwrap().as_array().unwrap();
    assert_eq!(list[0], Value::from("X"));
    assert_eq!(
        list[1].get_path("deep").unwrap(),
        &Value::Array(vec![Value::Integer(1)])
    );
}

#[tokio::test]
async fn test_interpolation_inside_leaf_produces_string() {
    let engine = Engine::new();
    let value = engine
        .ingest_json(&serde_json::json!({"label": "sum=@{add(2, 2)}!"}))
        .await
        .unwrap();
    assert_eq!(value.get_path("label").unwrap(), &Value::from("sum=4!"));
}

#[tokio::test]
async fn test_escaped_at_collapses_during_normalisation() {
    let engine = Engine::new();
    let value = engine
        .ingest_json(&serde_json::json!({"handle": "user@@example"}))
        .await
        .unwrap();
    assert_eq!(value.get_path("handle").unwrap(), &Value::from("user@example"));
}

#[tokio::test]
async fn test_plain_strings_pass_verbatim() {
    let engine = Engine::new();
    let value = engine
        .ingest_json(&serde_json::json!({"note": "nothing to expand"}))
        .await
        .unwrap();
    assert_eq!(
        value.get_path("note").unwrap(),
        &Value::from("nothing to expand")
    );
}

#[tokio::test]
async fn test_normalised_results_are_not_re_normalised() {
    // The evaluated template emits a string that itself looks like a
    // template; it must come back untouched.
    let engine = Engine::builder()
        .with_fn("template", |_| Ok(Value::from("@add(1, 1)")))
        .build();
    let value = engine
        .ingest_json(&serde_json::json!({"raw": "@template()"}))
        .await
        .unwrap();
    assert_eq!(value.get_path("raw").unwrap(), &Value::from("@add(1, 1)"));
}

#[tokio::test]
async fn test_evaluation_error_in_leaf_aborts_ingestion() {
    let engine = Engine::new();
    let error = engine
        .ingest_json(&serde_json::json!({"bad": "@nope()"}))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        EngineError::Eval(EvalError::UnknownFunction(name)) if name == "nope"
    ));
}

#[tokio::test]
async fn test_ingested_values_feed_accessors() {
    let engine = Engine::new();
    let payload = engine
        .ingest_json(&serde_json::json!({"rows": [{"id": 1}, {"id": 2}]}))
        .await
        .unwrap();

    let engine = Engine::builder()
        .with_fn("payload", move |_| Ok(payload.clone()))
        .build();
    let value = engine
        .evaluate_to_value("@payload().rows[1].id")
        .await
        .unwrap();
    assert_eq!(value, Value::Integer(2));
}
