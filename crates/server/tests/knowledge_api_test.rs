//! # Knowledge API Tests
//!
//! Direct search and lookup endpoints. None of these may reach the model.

mod common;

use common::TestApp;
use serde_json::Value;

/// A corpus of `count` guides that all match the query "benefit".
fn benefit_corpus(count: usize) -> String {
    let mut yaml = String::from("entries:\n");
    for i in 0..count {
        yaml.push_str(&format!(
            "  - id: guide-{i}\n    category: guide\n    title: Guide {i}\n    content: Details for section {i}.\n    keywords: [benefit]\n"
        ));
    }
    yaml
}

async fn count_for(app: &TestApp, path: &str) -> anyhow::Result<Option<u64>> {
    let body: Value = app.client.get(app.url(path)).send().await?.json().await?;
    Ok(body["count"].as_u64())
}

#[tokio::test]
async fn test_search_returns_ranked_results() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;
    let completion = app.mock_completion("unused");

    let response = app
        .client
        .get(app.url("/support-chat/knowledge"))
        .query(&[("q", "postal code")])
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["query"], "postal code");

    let results = body["results"].as_array().expect("results is an array");
    assert_eq!(body["count"].as_u64(), Some(results.len() as u64));
    assert_eq!(results[0]["id"], "rule-postal-code");
    assert_eq!(results[0]["category"], "validation-rule");
    assert!(results[0]["title"].is_string());
    assert!(results[0]["content"].is_string());

    let scores: Vec<f64> = results
        .iter()
        .map(|r| r["score"].as_f64().expect("score is a number"))
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

    completion.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_search_requires_query() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    for path in ["/support-chat/knowledge", "/support-chat/knowledge?q=%20%20"] {
        let response = app.client.get(app.url(path)).send().await?;
        assert_eq!(response.status().as_u16(), 400, "path {path}");
        let body: Value = response.json().await?;
        assert!(body["error"].is_string());
    }

    let response = app
        .client
        .get(app.url("/support-chat/knowledge?q=caseworker&limit=lots"))
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 400);
    Ok(())
}

#[tokio::test]
async fn test_search_limit_defaults_and_clamps() -> anyhow::Result<()> {
    let corpus = benefit_corpus(25);
    let app = TestApp::spawn_with_knowledge(Some(&corpus)).await?;

    assert_eq!(count_for(&app, "/support-chat/knowledge?q=benefit").await?, Some(5));
    assert_eq!(
        count_for(&app, "/support-chat/knowledge?q=benefit&limit=12").await?,
        Some(12)
    );
    assert_eq!(
        count_for(&app, "/support-chat/knowledge?q=benefit&limit=500").await?,
        Some(20)
    );
    assert_eq!(
        count_for(&app, "/support-chat/knowledge?q=benefit&limit=0").await?,
        Some(0)
    );
    Ok(())
}

#[tokio::test]
async fn test_search_keeps_load_order_for_ties() -> anyhow::Result<()> {
    let corpus = benefit_corpus(4);
    let app = TestApp::spawn_with_knowledge(Some(&corpus)).await?;

    let body: Value = app
        .client
        .get(app.url("/support-chat/knowledge?q=benefit"))
        .send()
        .await?
        .json()
        .await?;

    let ids: Vec<&str> = body["results"]
        .as_array()
        .expect("results is an array")
        .iter()
        .filter_map(|r| r["id"].as_str())
        .collect();
    assert_eq!(ids, ["guide-0", "guide-1", "guide-2", "guide-3"]);
    Ok(())
}

#[tokio::test]
async fn test_get_entry_by_id() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .get(app.url("/support-chat/knowledge/term-caseworker"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["id"], "term-caseworker");
    assert_eq!(body["category"], "terminology");
    assert!(body["keywords"].is_array());
    assert!(body["relatedEntries"].is_array());
    Ok(())
}

#[tokio::test]
async fn test_get_missing_entry_is_not_found() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .get(app.url("/support-chat/knowledge/no-such-entry"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await?;
    assert_eq!(body, serde_json::json!({ "error": "Knowledge entry not found" }));
    Ok(())
}

#[tokio::test]
async fn test_root_and_health() -> anyhow::Result<()> {
    let app = TestApp::spawn().await?;

    let health = app.client.get(app.url("/health")).send().await?;
    assert_eq!(health.status().as_u16(), 200);
    assert_eq!(health.text().await?, "OK");

    let root = app.client.get(app.url("/")).send().await?;
    assert_eq!(root.status().as_u16(), 200);
    assert!(root.text().await?.contains("formaid"));
    Ok(())
}
