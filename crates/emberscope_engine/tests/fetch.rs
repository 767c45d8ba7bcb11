use std::time::Duration;

use emberscope_engine::{ApiFetcher, FailureKind, FetchSettings, ReqwestFetcher};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings::default()).expect("client")
}

fn parse(raw: &str) -> Url {
    raw.parse().expect("test url")
}

#[tokio::test]
async fn get_json_decodes_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "flamebearer": { "names": ["total"] },
            "timeline": { "samples": [1, 2, 3] },
        })))
        .mount(&server)
        .await;

    let url = parse(&format!("{}/render?query=app.cpu", server.uri()));
    let data = fetcher()
        .get_json(url, CancellationToken::new())
        .await
        .expect("fetch ok");

    assert_eq!(data["timeline"]["samples"], json!([1, 2, 3]));
}

#[tokio::test]
async fn get_json_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = parse(&format!("{}/render", server.uri()));
    let err = fetcher()
        .get_json(url, CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn get_json_fails_on_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let url = parse(&format!("{}/labels", server.uri()));
    let err = fetcher()
        .get_json(url, CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn get_json_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/render"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).expect("client");
    let url = parse(&format!("{}/render", server.uri()));
    let err = fetcher
        .get_json(url, CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn pre_cancelled_token_short_circuits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let url = parse(&format!("{}/render", server.uri()));
    let err = fetcher().get_json(url, cancel).await.unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn cancellation_mid_flight_wins_the_race() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/render"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(200))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let url = parse(&format!("{}/render", server.uri()));

    let fetcher = fetcher();
    let (result, _) = tokio::join!(fetcher.get_json(url, cancel), async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    assert!(result.unwrap_err().is_cancelled());
}
