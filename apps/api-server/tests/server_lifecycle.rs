//! Server lifecycle tests: start against a connection config, stop, and
//! verify full teardown.

use api_server::config::AppConfig;
use api_server::server::run_with_state;
use api_server::state::AppState;

fn ephemeral_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: None,
    }
}

#[actix_rt::test]
async fn run_and_close_round_trip() {
    let state = AppState::in_memory();
    let server = run_with_state(&ephemeral_config(), state).unwrap();
    let url = format!("http://{}/health", server.addr());

    let res = reqwest::get(&url).await.unwrap();
    assert_eq!(res.status(), 200);

    server.close().await;

    // the listener is gone after close
    assert!(reqwest::get(&url).await.is_err());
}

#[actix_rt::test]
async fn run_server_honours_test_environment_config() {
    // TEST_DATABASE_URL selects the store here; unset it falls back to the
    // in-memory repository.
    let config = AppConfig::from_test_env();
    let server = api_server::server::run_server(&config).await.unwrap();

    let res = reqwest::get(format!("http://{}/health", server.addr()))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    server.close().await;
}

#[actix_rt::test]
async fn server_answers_posts_routes_end_to_end() {
    let state = AppState::in_memory();
    let server = run_with_state(&ephemeral_config(), state).unwrap();
    let base = format!("http://{}", server.addr());

    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{base}/posts"))
        .json(&serde_json::json!({
            "title": "Over the wire",
            "content": "Posted through a real socket.",
            "author": {"firstName": "Grace", "lastName": "Hopper"}
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["author"], "Grace Hopper");

    let listed: serde_json::Value = client
        .get(format!("{base}/posts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    server.close().await;
}
