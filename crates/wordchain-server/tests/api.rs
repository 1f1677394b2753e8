use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wordchain_application::GameUseCase;
use wordchain_core::config::HttpConfig;
use wordchain_core::{ChainSampler, Result, WordChainError, WordPair, WordPairRepository};
use wordchain_infrastructure::InMemoryWordPairRepository;
use wordchain_server::{AppState, build_router};

struct DownRepository;

#[async_trait]
impl WordPairRepository for DownRepository {
    async fn list_all(&self) -> Result<Vec<WordPair>> {
        Err(WordChainError::data_source_unavailable("connection refused"))
    }

    async fn check_available(&self) -> Result<()> {
        Err(WordChainError::data_source_unavailable("connection refused"))
    }

    async fn add_all(&self, _pairs: &[WordPair]) -> Result<usize> {
        Err(WordChainError::data_source_unavailable("connection refused"))
    }

    async fn clear(&self) -> Result<()> {
        Err(WordChainError::data_source_unavailable("connection refused"))
    }
}

fn berry_pairs() -> Vec<WordPair> {
    vec![
        WordPair::new("Straw", "Berry"),
        WordPair::new("Berry", "Jam"),
        WordPair::new("Jam", "Session"),
        WordPair::new("Session", "Musician"),
        WordPair::new("Musician", "Straw"),
    ]
}

fn app_with(repository: Arc<dyn WordPairRepository>, http: HttpConfig) -> Router {
    let game = GameUseCase::new(repository, ChainSampler::default());
    build_router(AppState::new(game, http))
}

fn app(pairs: Vec<WordPair>) -> Router {
    app_with(
        Arc::new(InMemoryWordPairRepository::with_pairs(pairs)),
        HttpConfig::default(),
    )
}

async fn json_body(res: Response) -> Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn new_game_returns_chain_and_hints() {
    let res = app(berry_pairs())
        .oneshot(get("/api/game/new"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["success"], true);
    let chain: Vec<String> = serde_json::from_value(body["chain"].clone()).unwrap();
    assert_eq!(chain.len(), 5);
    assert_eq!(body["firstWord"], chain[0]);
    assert_eq!(body["lastWord"], chain[4]);

    let hints: Vec<String> = serde_json::from_value(body["hints"].clone()).unwrap();
    assert_eq!(hints.len(), 3);
    for (hint, word) in hints.iter().zip(&chain[1..4]) {
        assert_eq!(hint.len(), 1);
        assert!(word.starts_with(hint.as_str()));
    }
}

#[tokio::test]
async fn new_game_on_empty_corpus_is_500() {
    let res = app(Vec::new())
        .oneshot(get("/api/game/new"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(res).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "No word pairs in database" })
    );
}

#[tokio::test]
async fn new_game_when_exhausted_is_500() {
    let res = app(vec![WordPair::new("dead", "end")])
        .oneshot(get("/api/game/new"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Could not generate valid chain after 100 attempts"
    );
}

#[tokio::test]
async fn new_game_when_source_down_is_503() {
    let res = app_with(Arc::new(DownRepository), HttpConfig::default())
        .oneshot(get("/api/game/new"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(res).await["success"], false);
}

#[tokio::test]
async fn validate_correct_guess() {
    let res = app(Vec::new())
        .oneshot(post_json(
            "/api/game/validate",
            json!({
                "word": "Berry ",
                "position": 1,
                "chain": ["straw", "berry", "jam", "session", "musician"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(res).await,
        json!({ "success": true, "valid": true, "correctWord": "berry" })
    );
}

#[tokio::test]
async fn validate_wrong_guess_reveals_correct_word() {
    let res = app(Vec::new())
        .oneshot(post_json(
            "/api/game/validate",
            json!({
                "word": "jelly",
                "position": 2,
                "chain": ["straw", "berry", "Jam", "session", "musician"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["correctWord"], "jam");
}

#[tokio::test]
async fn validate_missing_fields_is_400() {
    let chain = json!(["a", "b", "c", "d", "e"]);
    let bodies = [
        json!({ "position": 1, "chain": chain }),
        json!({ "word": "", "position": 1, "chain": chain }),
        json!({ "word": "b", "chain": chain }),
        json!({ "word": "b", "position": 1 }),
    ];

    for body in bodies {
        let res = app(Vec::new())
            .oneshot(post_json("/api/game/validate", body))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(res).await,
            json!({ "success": false, "error": "Missing required fields" })
        );
    }
}

#[tokio::test]
async fn validate_unparsable_body_is_400() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/game/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let res = app(Vec::new()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "Missing required fields");
}

#[tokio::test]
async fn validate_out_of_range_position_is_400() {
    let res = app(Vec::new())
        .oneshot(post_json(
            "/api/game/validate",
            json!({ "word": "b", "position": 9, "chain": ["a", "b", "c", "d", "e"] }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = json_body(res).await;
    assert_eq!(body["success"], false);
    assert_ne!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let res = app(Vec::new()).oneshot(get("/api/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn wildcard_cors_allows_any_origin() {
    let req = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let res = app(Vec::new()).oneshot(req).await.unwrap();
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn preflight_is_204() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/game/validate")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let res = app(Vec::new()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(
        res.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .contains("POST")
    );
}

#[tokio::test]
async fn restricted_cors_echoes_only_listed_origins() {
    let http = HttpConfig {
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        ..HttpConfig::default()
    };
    let repository: Arc<dyn WordPairRepository> = Arc::new(InMemoryWordPairRepository::new());

    let allowed = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let res = app_with(repository.clone(), http.clone())
        .oneshot(allowed)
        .await
        .unwrap();
    assert_eq!(
        res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );

    let denied = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let res = app_with(repository, http).oneshot(denied).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let req = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let res = app(Vec::new()).oneshot(req).await.unwrap();
    assert_eq!(res.headers()["x-request-id"], "abc-123");

    let res = app(Vec::new()).oneshot(get("/api/health")).await.unwrap();
    let generated = res.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}
