use std::time::Duration;

use shortener_core::ShortenFailure;
use shortener_engine::{FailureKind, ReqwestShortener, Shortener, ShortenerSettings};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn shortener_for(server: &MockServer) -> ReqwestShortener {
    ReqwestShortener::new(ShortenerSettings {
        endpoint: format!("{}/shorten", server.uri()),
        ..ShortenerSettings::default()
    })
    .expect("valid endpoint")
}

#[tokio::test]
async fn posts_long_url_as_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(query_param("long_url", "https://example.com/a/b?x=1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                r#"{"short_url":"https://sho.rt/abc"}"#,
                "application/json",
            ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let shortener = shortener_for(&server);
    let short = shortener
        .shorten("https://example.com/a/b?x=1")
        .await
        .expect("shorten ok");
    assert_eq!(short, "https://sho.rt/abc");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[test]
fn request_url_percent_encodes_the_long_url() {
    let shortener = ReqwestShortener::new(ShortenerSettings {
        endpoint: "https://api.example.com/shorten".into(),
        ..ShortenerSettings::default()
    })
    .unwrap();

    let url = shortener.request_url("https://example.com/a/b?x=1&y=2");
    assert_eq!(
        url.as_str(),
        "https://api.example.com/shorten?long_url=https%3A%2F%2Fexample.com%2Fa%2Fb%3Fx%3D1%26y%3D2"
    );
}

#[test]
fn request_url_encodes_like_a_uri_component() {
    let shortener = ReqwestShortener::new(ShortenerSettings {
        endpoint: "https://api.example.com/shorten".into(),
        ..ShortenerSettings::default()
    })
    .unwrap();

    let url = shortener.request_url("https://my_host.example.io/with space~(x)*!");
    assert_eq!(
        url.as_str(),
        "https://api.example.com/shorten?long_url=https%3A%2F%2Fmy_host.example.io%2Fwith%20space~(x)*!"
    );
}

#[test]
fn request_url_keeps_existing_endpoint_query() {
    let shortener = ReqwestShortener::new(ShortenerSettings {
        endpoint: "https://api.example.com/shorten?key=abc".into(),
        ..ShortenerSettings::default()
    })
    .unwrap();

    let url = shortener.request_url("https://example.com/a b");
    assert_eq!(
        url.as_str(),
        "https://api.example.com/shorten?key=abc&long_url=https%3A%2F%2Fexample.com%2Fa%20b"
    );
}

#[tokio::test]
async fn space_in_long_url_reaches_the_server_as_percent_twenty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"short_url":"https://sho.rt/sp"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    shortener_for(&server)
        .shorten("https://example.com/with space")
        .await
        .expect("shorten ok");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(
        requests[0].url.query(),
        Some("long_url=https%3A%2F%2Fexample.com%2Fwith%20space")
    );
}

#[tokio::test]
async fn error_status_carries_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(500).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = shortener_for(&server)
        .shorten("https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "rate limited");
    assert_eq!(
        err.to_failure(),
        ShortenFailure::Api {
            status: 500,
            body: "rate limited".into()
        }
    );
}

#[tokio::test]
async fn payload_without_short_url_is_malformed() {
    let server = MockServer::start().await;
    for (route, body) in [
        ("/missing", r#"{"url":"https://sho.rt/abc"}"#),
        ("/wrong-type", r#"{"short_url":42}"#),
        ("/empty", r#"{"short_url":""}"#),
        ("/not-json", "<html>ok</html>"),
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }

    for route in ["/missing", "/wrong-type", "/empty", "/not-json"] {
        let shortener = ReqwestShortener::new(ShortenerSettings {
            endpoint: format!("{}{}", server.uri(), route),
            ..ShortenerSettings::default()
        })
        .unwrap();
        let err = shortener.shorten("https://example.com").await.unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse, "route {route}");
        assert_eq!(err.to_failure(), ShortenFailure::MalformedResponse);
    }
}

#[tokio::test]
async fn configured_timeout_maps_to_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(r#"{"short_url":"https://sho.rt/slow"}"#),
        )
        .mount(&server)
        .await;

    let shortener = ReqwestShortener::new(ShortenerSettings {
        endpoint: format!("{}/shorten", server.uri()),
        request_timeout: Some(Duration::from_millis(50)),
    })
    .unwrap();

    let err = shortener.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.to_failure(), ShortenFailure::Transport);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/shorten", listener.local_addr().unwrap());
    drop(listener);

    let shortener = ReqwestShortener::new(ShortenerSettings {
        endpoint,
        ..ShortenerSettings::default()
    })
    .unwrap();
    let err = shortener.shorten("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.to_failure(), ShortenFailure::Transport);
}

#[test]
fn endpoint_must_be_an_http_url() {
    for endpoint in ["not a url", "ftp://example.com/shorten"] {
        let err = ReqwestShortener::new(ShortenerSettings {
            endpoint: endpoint.into(),
            ..ShortenerSettings::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidEndpoint);
    }
}
