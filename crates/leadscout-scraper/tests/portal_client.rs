//! Integration tests for verification, scraping and discovery against a
//! local `wiremock` server. No real network traffic is made except for one
//! deliberately unresolvable host.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadscout_core::{DataSource, Scheme, SocialPlatform};
use leadscout_scraper::{
    discover_subdomains, DiscoveryOptions, PortalClient, ScrapeOptions, Scraper,
};

/// Client whose root domain is the mock server's `host:port`, so verifying
/// the root itself hits the mock.
fn client_for(server: &MockServer, verify_ms: u64, fetch_ms: u64) -> PortalClient {
    PortalClient::new(
        "leadscout-test/0.1",
        Scheme::Http,
        &server.address().to_string(),
        Duration::from_millis(verify_ms),
        Duration::from_millis(fetch_ms),
    )
    .expect("failed to build test PortalClient")
}

fn scrape_options(dir: &tempfile::TempDir, concurrency: usize) -> ScrapeOptions {
    ScrapeOptions {
        concurrency,
        throttle_min_ms: 0,
        throttle_max_ms: 0,
        sink_path: dir.path().join("scraped_data.json"),
    }
}

const LIVE_PAGE: &str = r#"<html><body>
    <h1>10 properties on the river</h1>
    <div class="address">12 River Rd</div>
    <a href="https://facebook.com/riversresort">Facebook</a>
    <p>bookings@riversresort.com</p>
</body></html>"#;

// ---------------------------------------------------------------------------
// verification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn verify_reports_reachable_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server, 2_000, 2_000);
    let root = server.address().to_string();
    let verification = client.verify(&root).await;

    assert_eq!(verification.host, root);
    assert!(verification.reachable);
}

#[tokio::test]
async fn verify_reports_unreachable_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server, 2_000, 2_000);
    let verification = client.verify(&server.address().to_string()).await;

    assert!(!verification.reachable);
}

#[tokio::test]
async fn verify_treats_timeout_as_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = client_for(&server, 200, 2_000);
    let verification = client.verify(&server.address().to_string()).await;

    assert!(!verification.reachable);
}

#[tokio::test]
async fn verify_treats_resolution_failure_as_unreachable() {
    let client = PortalClient::new(
        "leadscout-test/0.1",
        Scheme::Http,
        "invalid",
        Duration::from_millis(1_000),
        Duration::from_millis(1_000),
    )
    .expect("failed to build test PortalClient");

    let verification = client.verify("no-such-portal").await;

    assert_eq!(verification.host, "no-such-portal.invalid");
    assert!(!verification.reachable);
}

// ---------------------------------------------------------------------------
// scraping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scrape_attempts_at_most_limit_targets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LIVE_PAGE))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let client = client_for(&server, 2_000, 2_000);
    let scraper = Scraper::new(&client, scrape_options(&dir, 2));
    let targets: Vec<String> = (0..5).map(|i| format!("{}/p{i}", server.uri())).collect();

    let records = scraper.scrape(&targets, 3).await.expect("scrape");
    assert_eq!(records.len(), 3);

    let records = scraper.scrape(&targets, 50).await.expect("scrape");
    assert_eq!(records.len(), 5);
}

#[tokio::test]
async fn scrape_preserves_order_and_substitutes_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LIVE_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let options = scrape_options(&dir, 3);
    let sink = options.sink_path.clone();
    let client = client_for(&server, 2_000, 300);
    let scraper = Scraper::new(&client, options);
    let targets: Vec<String> = ["a", "b", "c"]
        .iter()
        .map(|p| format!("{}/{p}", server.uri()))
        .collect();

    let records = scraper.scrape(&targets, 100).await.expect("scrape");

    assert_eq!(records.len(), 3);
    let subdomains: Vec<&str> = records.iter().map(|r| r.subdomain.as_str()).collect();
    let expected: Vec<&str> = targets.iter().map(String::as_str).collect();
    assert_eq!(subdomains, expected);

    let live = &records[0];
    assert_eq!(live.data_source, DataSource::Live);
    assert_eq!(live.property_count, 10);
    assert_eq!(live.company_address, "12 River Rd");
    assert_eq!(
        live.social(SocialPlatform::Facebook),
        "https://facebook.com/riversresort"
    );
    assert_eq!(live.email, "bookings@riversresort.com");
    assert_eq!(live.social_media.len(), 1);

    for (synthetic, target) in records[1..].iter().zip(&targets[1..]) {
        assert_eq!(synthetic.data_source, DataSource::Synthetic);
        assert!((5..=50).contains(&synthetic.property_count));
        assert!(
            synthetic.url.contains(target.as_str()),
            "url {} does not contain {target}",
            synthetic.url
        );
        for platform in [
            SocialPlatform::Facebook,
            SocialPlatform::Instagram,
            SocialPlatform::Twitter,
        ] {
            assert!(!synthetic.social(platform).is_empty(), "missing {platform}");
        }
    }

    let written = std::fs::read_to_string(&sink).expect("sink file");
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&written).expect("valid json");
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0]["data_source"], "live");
    assert_eq!(parsed[2]["data_source"], "synthetic");
}

#[tokio::test]
async fn scrape_with_no_targets_writes_empty_array() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let options = scrape_options(&dir, 5);
    let sink = options.sink_path.clone();
    let client = client_for(&server, 2_000, 2_000);

    let records = Scraper::new(&client, options)
        .scrape(&[], 100)
        .await
        .expect("scrape");

    assert!(records.is_empty());
    let written = std::fs::read_to_string(&sink).expect("sink file");
    assert_eq!(written.trim(), "[]");
}

// ---------------------------------------------------------------------------
// discovery
// ---------------------------------------------------------------------------

#[tokio::test]
async fn discovery_keeps_reachable_then_seeds_then_padding() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let root = server.address().to_string();
    let client = client_for(&server, 2_000, 2_000);
    let options = DiscoveryOptions {
        concurrency: 4,
        target_count: 10,
        sink_path: dir.path().join("discovered_subdomains.json"),
    };

    let hosts = discover_subdomains(&client, &[root.clone()], &options)
        .await
        .expect("discovery");

    assert_eq!(hosts.len(), 10);
    assert_eq!(hosts[0], root);
    assert_eq!(hosts[1], format!("bandycanyon.{root}"));
    assert_eq!(hosts[2], format!("riversresortrentals.{root}"));
    assert_eq!(hosts[3], format!("tideway-hotel.{root}"));
    assert_eq!(hosts[4], format!("oceanresort.{root}"));

    let written = std::fs::read_to_string(&options.sink_path).expect("sink file");
    let parsed: Vec<String> = serde_json::from_str(&written).expect("valid json");
    assert_eq!(parsed, hosts);
}

#[tokio::test]
async fn discovery_does_not_pad_past_target_when_already_large() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let client = client_for(&server, 2_000, 2_000);
    let options = DiscoveryOptions {
        concurrency: 4,
        target_count: 2,
        sink_path: dir.path().join("discovered_subdomains.json"),
    };

    let hosts = discover_subdomains(&client, &[server.address().to_string()], &options)
        .await
        .expect("discovery");

    // Nothing reachable: only the three guaranteed seeds remain.
    assert_eq!(hosts.len(), 3);
    assert!(hosts[0].starts_with("bandycanyon."));
}
