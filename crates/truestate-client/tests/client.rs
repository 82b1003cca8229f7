//! Transport tests against a local listener serving canned responses.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use truestate_client::{ClientConfig, ClientError, SalesClient, SalesSource};
use truestate_model::{FilterGroup, SalesFilters, SalesQuery};

/// Serves a single HTTP response and returns the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

fn client_for(base_url: &str) -> SalesClient {
    SalesClient::new(&ClientConfig::with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn decodes_rows_and_total() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"data":[{"transaction_id":"T-1","customer_name":"Asha","final_amount":120.5}],"total":237}"#,
    )
    .await;

    let query = SalesQuery::default()
        .apply_filters(SalesFilters::default().with(FilterGroup::Region, ["North", "East"]))
        .submit_search("Asha");
    let page = client_for(&base_url).fetch_sales(&query).await.unwrap();

    assert_eq!(page.total, 237);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].customer_name.as_deref(), Some("Asha"));

    let request_line = server.await.unwrap();
    assert!(request_line.starts_with("GET /api/sales/?page=1&limit=50&search=Asha"));
    assert!(request_line.contains("regions=East%2CNorth"));
}

#[tokio::test]
async fn missing_fields_default_to_empty() {
    let (base_url, server) = serve_once("200 OK", r#"{"message":"ok"}"#).await;

    let page = client_for(&base_url)
        .fetch_sales(&SalesQuery::default())
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base_url, server) = serve_once("500 Internal Server Error", "boom").await;

    let err = client_for(&base_url)
        .fetch_sales(&SalesQuery::default())
        .await
        .unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&base_url)
        .fetch_sales(&SalesQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[test]
fn request_url_snapshot() {
    let client = client_for("https://sales.example.com/api");
    let query = SalesQuery::default()
        .apply_filters(
            SalesFilters::default()
                .with(FilterGroup::Category, ["Home & Kitchen"])
                .with(FilterGroup::Tag, ["Bulk Order"]),
        )
        .change_page(3);
    insta::assert_snapshot!(
        client.request_url(&query).as_str(),
        @"https://sales.example.com/api/sales/?page=3&limit=50&sort_field=date&sort_order=desc&categories=Home+%26+Kitchen&tags=Bulk+Order"
    );
}
