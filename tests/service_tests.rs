//! UrlService flows: result, user-facing message and action-log line

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use linkdeck::client::{HttpUrlApi, UrlApi};
use linkdeck::errors::{LinkdeckError, Result};
use linkdeck::models::{CreationRequest, UrlRecord};
use linkdeck::services::{MessageLevel, Notice, RATE_LIMIT_MESSAGE, UrlService};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FRONTEND: &str = "http://short.test";

/// How every call of the fake backend ends
#[derive(Clone)]
enum Behaviour {
    Ok,
    RateLimited,
    Api(u16, &'static str),
    Transport(&'static str),
}

struct FakeApi {
    behaviour: Behaviour,
    records: Vec<UrlRecord>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            records: vec![UrlRecord::new("abc", "https://a.com", "1", "")],
            calls: Mutex::new(Vec::new()),
        }
    }

    fn outcome<T>(&self, call: String, ok: T) -> Result<T> {
        self.calls.lock().unwrap().push(call);
        match self.behaviour {
            Behaviour::Ok => Ok(ok),
            Behaviour::RateLimited => Err(LinkdeckError::RateLimited),
            Behaviour::Api(status, body) => Err(LinkdeckError::api(status, body)),
            Behaviour::Transport(msg) => Err(LinkdeckError::transport(msg)),
        }
    }
}

#[async_trait]
impl UrlApi for FakeApi {
    async fn create(&self, request: &CreationRequest) -> Result<String> {
        self.outcome(format!("create {}", request.url), "abc123".to_string())
    }

    async fn list_page(&self, page: usize, size: usize) -> Result<Vec<UrlRecord>> {
        self.outcome(format!("list {} {}", page, size), self.records.clone())
    }

    async fn delete(&self, shortened_url: &str) -> Result<()> {
        self.outcome(format!("delete {}", shortened_url), ())
    }

    async fn resolve(&self, shortened_url: &str) -> Result<String> {
        self.outcome(
            format!("resolve {}", shortened_url),
            "https://target.example".to_string(),
        )
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

fn make_service(behaviour: Behaviour) -> (UrlService, Arc<FakeApi>) {
    let api = Arc::new(FakeApi::new(behaviour));
    (UrlService::new(api.clone(), FRONTEND), api)
}

fn request() -> CreationRequest {
    CreationRequest::new("https://example.com")
}

// =============================================================================
// list
// =============================================================================

#[tokio::test]
async fn test_list_success_has_no_message() {
    let (service, api) = make_service(Behaviour::Ok);
    let outcome = service.fetch_page(2, 10).await;

    assert_eq!(outcome.result.unwrap().len(), 1);
    assert_eq!(outcome.notice, None);
    assert_eq!(outcome.action, "Fetched URLs (page 3)");
    assert_eq!(api.calls.lock().unwrap().as_slice(), ["list 2 10"]);
}

#[tokio::test]
async fn test_list_failures() {
    let (service, _) = make_service(Behaviour::RateLimited);
    let outcome = service.fetch_page(0, 10).await;
    assert_eq!(outcome.notice, Some(Notice::error(RATE_LIMIT_MESSAGE)));
    assert_eq!(outcome.action, "Failed to fetch URLs: Rate limit exceeded");

    let (service, _) = make_service(Behaviour::Api(500, "boom"));
    let outcome = service.fetch_page(0, 10).await;
    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error fetching URLs: 500 - boom"))
    );
    assert_eq!(outcome.action, "Failed to fetch URLs: 500");

    // JSON 错误体取 error 字段，没有时保留原文
    let (service, _) = make_service(Behaviour::Api(500, r#"{"error":"DB down"}"#));
    let outcome = service.fetch_page(0, 10).await;
    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error fetching URLs: 500 - DB down"))
    );

    let (service, _) = make_service(Behaviour::Api(500, r#"{"code":7}"#));
    let outcome = service.fetch_page(0, 10).await;
    assert_eq!(
        outcome.notice,
        Some(Notice::error(r#"Error fetching URLs: 500 - {"code":7}"#))
    );

    let (service, _) = make_service(Behaviour::Transport("connection refused"));
    let outcome = service.fetch_page(0, 10).await;
    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error fetching URLs: connection refused"))
    );
    assert_eq!(outcome.action, "Failed to fetch URLs: connection refused");
}

// =============================================================================
// create
// =============================================================================

#[tokio::test]
async fn test_shorten_success_builds_share_link() {
    let (service, _) = make_service(Behaviour::Ok);
    let outcome = service.shorten(&request()).await;

    assert_eq!(outcome.notice, Some(Notice::success("URL shortened successfully!")));
    assert_eq!(outcome.action, "Shortened URL: https://example.com");
    let link = outcome.result.unwrap();
    assert_eq!(link.identifier, "abc123");
    assert_eq!(link.short_url, "http://short.test/redirect/abc123");
    assert_eq!(link.original_url, "https://example.com");
}

#[tokio::test]
async fn test_shorten_failures() {
    let cases = [
        (
            Behaviour::RateLimited,
            RATE_LIMIT_MESSAGE,
            "Failed to shorten URL: Rate limit exceeded",
        ),
        (
            Behaviour::Api(400, r#"{"error":"Invalid URL"}"#),
            "Error: Invalid URL",
            "Failed to shorten URL: 400",
        ),
        (
            Behaviour::Api(409, r#"{"message":"taken"}"#),
            r#"Error: {"message":"taken"}"#,
            "Failed to shorten URL: 409",
        ),
        (
            Behaviour::Api(500, "Internal Server Error"),
            "Error shortening URL: 500 - Internal Server Error",
            "Failed to shorten URL: 500",
        ),
        (
            Behaviour::Api(502, "null"),
            "Error shortening URL: 502 - null",
            "Failed to shorten URL: 502",
        ),
        (
            Behaviour::Transport("timed out"),
            "Error connecting to server: timed out",
            "Failed to shorten URL: timed out",
        ),
    ];

    for (behaviour, message, action) in cases {
        let (service, _) = make_service(behaviour);
        let outcome = service.shorten(&request()).await;
        assert!(!outcome.is_ok());
        assert_eq!(outcome.notice, Some(Notice::error(message)));
        assert_eq!(outcome.action, action);
    }
}

// =============================================================================
// delete
// =============================================================================

#[tokio::test]
async fn test_delete_texts() {
    let (service, api) = make_service(Behaviour::Ok);
    let outcome = service.delete("abc").await;
    assert!(outcome.is_ok());
    assert_eq!(outcome.notice, Some(Notice::success("URL deleted successfully")));
    assert_eq!(outcome.action, "Deleted URL: abc");
    assert_eq!(api.calls.lock().unwrap().as_slice(), ["delete abc"]);

    let (service, _) = make_service(Behaviour::Api(404, "nope"));
    let outcome = service.delete("abc").await;
    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error deleting URL: 404 - nope"))
    );
    assert_eq!(outcome.action, "Failed to delete URL: 404");

    let (service, _) = make_service(Behaviour::Api(403, r#"{"error":"Not owner"}"#));
    let outcome = service.delete("abc").await;
    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error deleting URL: 403 - Not owner"))
    );
    assert_eq!(outcome.action, "Failed to delete URL: 403");

    let (service, _) = make_service(Behaviour::RateLimited);
    let outcome = service.delete("abc").await;
    assert_eq!(outcome.action, "Failed to delete URL: Rate limit exceeded");

    let (service, _) = make_service(Behaviour::Transport("reset"));
    let outcome = service.delete("abc").await;
    assert_eq!(outcome.notice, Some(Notice::error("Error deleting URL: reset")));
    assert_eq!(outcome.action, "Failed to delete URL: reset");
}

// =============================================================================
// resolve
// =============================================================================

#[tokio::test]
async fn test_resolve_accepts_full_share_link() {
    let (service, api) = make_service(Behaviour::Ok);
    let outcome = service.resolve("http://short.test/redirect/abc/").await;

    assert_eq!(outcome.result.as_deref(), Ok("https://target.example"));
    assert_eq!(outcome.action, "Resolved abc -> https://target.example");
    let notice = outcome.notice.unwrap();
    assert_eq!(notice.level, MessageLevel::Info);
    assert_eq!(notice.text, "Redirects to https://target.example");
    assert_eq!(api.calls.lock().unwrap().as_slice(), ["resolve abc"]);
}

#[tokio::test]
async fn test_resolve_empty_input_never_calls_backend() {
    let (service, api) = make_service(Behaviour::Ok);
    let outcome = service.resolve("   ").await;

    assert!(matches!(outcome.result, Err(LinkdeckError::Validation(_))));
    assert!(api.calls.lock().unwrap().is_empty());
}

#[test]
fn test_share_link() {
    let (service, _) = make_service(Behaviour::Ok);
    assert_eq!(service.share_link("xyz"), "http://short.test/redirect/xyz");
    assert_eq!(service.api_name(), "fake");
}

// =============================================================================
// Full stack over HTTP
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_json_error_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error":"Alias already in use"}"#),
        )
        .mount(&server)
        .await;

    let api = HttpUrlApi::new(&format!("{}/api", server.uri()), Duration::from_secs(5));
    let service = UrlService::new(Arc::new(api), FRONTEND);
    let outcome = service.shorten(&request()).await;

    assert_eq!(outcome.notice, Some(Notice::error("Error: Alias already in use")));
    assert_eq!(outcome.action, "Failed to shorten URL: 400");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_plain_error_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let api = HttpUrlApi::new(&format!("{}/api", server.uri()), Duration::from_secs(5));
    let service = UrlService::new(Arc::new(api), FRONTEND);
    let outcome = service.fetch_page(0, 10).await;

    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error fetching URLs: 503 - Service Unavailable"))
    );
    assert_eq!(outcome.action, "Failed to fetch URLs: 503");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_error_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"error":"DB down"}"#))
        .mount(&server)
        .await;

    let api = HttpUrlApi::new(&format!("{}/api", server.uri()), Duration::from_secs(5));
    let service = UrlService::new(Arc::new(api), FRONTEND);
    let outcome = service.fetch_page(0, 10).await;

    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error fetching URLs: 500 - DB down"))
    );
    assert_eq!(outcome.action, "Failed to fetch URLs: 500");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_json_error_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/abc"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"Not owner"}"#))
        .mount(&server)
        .await;

    let api = HttpUrlApi::new(&format!("{}/api", server.uri()), Duration::from_secs(5));
    let service = UrlService::new(Arc::new(api), FRONTEND);
    let outcome = service.delete("abc").await;

    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error deleting URL: 400 - Not owner"))
    );
    assert_eq!(outcome.action, "Failed to delete URL: 400");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_null_error_body_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500).set_body_string("null"))
        .mount(&server)
        .await;

    let api = HttpUrlApi::new(&format!("{}/api", server.uri()), Duration::from_secs(5));
    let service = UrlService::new(Arc::new(api), FRONTEND);
    let outcome = service.shorten(&request()).await;

    assert_eq!(
        outcome.notice,
        Some(Notice::error("Error shortening URL: 500 - null"))
    );
}
