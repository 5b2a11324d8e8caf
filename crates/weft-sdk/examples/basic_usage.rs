//! Basic usage example for weft-sdk
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use weft_sdk::{Engine, Value};

#[tokio::main]
async fn main() -> Result<(), weft_sdk::EngineError> {
    println!("=== Weft Engine Basic Usage Example ===\n");

    // Example 1: bare expressions
    println!("1. Bare Expressions:");
    let engine = Engine::new();
    let greeting = engine
        .evaluate_to_string("@concat('hello ', toUpper('world'))")
        .await?;
    println!("   @concat('hello ', toUpper('world')) -> {greeting}");
    let sum = engine.evaluate_to_value("@add(40, 2)").await?;
    println!("   @add(40, 2) -> {sum}\n");

    // Example 2: joined strings with @{...} splices
    println!("2. Joined Strings:");
    let banner = engine
        .evaluate_to_string("build @{guid('n')} at @{utcNow()}")
        .await?;
    println!("   build @{{guid('n')}} at @{{utcNow()}} -> {banner}\n");

    // Example 3: a host-registered function plus accessors
    println!("3. Host Functions and Accessors:");
    let engine = Engine::builder()
        .with_fn("settings", |_| {
            let node = serde_json::json!({"retries": [1, 2, 5], "mode": "fast"});
            Ok(Value::from_json(&node)?)
        })
        .with_macro("#mode", "@settings().mode")
        .build();
    let engine = Arc::new(engine);

    let retry = engine.evaluate_to_value("@settings().retries[2]").await?;
    println!("   @settings().retries[2] -> {retry}");
    let missing = engine.evaluate_to_value("@settings()?['absent']").await?;
    println!("   @settings()?['absent'] -> {missing}");
    let mode = engine.evaluate_to_string("#mode").await?;
    println!("   #mode -> {mode}\n");

    // Example 4: templates inside ingested JSON
    println!("4. JSON Ingestion with Normalisation:");
    let payload = engine
        .ingest_json_str(r#"{"label": "sum=@{add(1, 2)}", "raw": "@createArray(1, 2)"}"#)
        .await?;
    println!("   ingested -> {payload}");

    Ok(())
}
