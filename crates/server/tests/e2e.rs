use std::net::SocketAddr;

use configs::StoreConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::in_memory(&StoreConfig { seed_demo_data: true });
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_employee_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let base = format!("{}/api/v1/employees", app.base_url);

    let res = c
        .post(&base)
        .json(&json!({"firstName": "Linus", "lastName": "Torvalds", "email": "linus@example.com", "appliedPromocodesCount": 0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().expect("id").to_string();

    let res = c
        .put(format!("{base}/{id}"))
        .json(&json!({"firstName": "Linus", "lastName": "Torvalds", "email": "torvalds@example.com", "appliedPromocodesCount": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let full = c.get(format!("{base}/{id}")).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(full["email"], "torvalds@example.com");
    assert_eq!(full["appliedPromocodesCount"], 1);

    let res = c.delete(format!("{base}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{base}/short/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
