// SPDX-License-Identifier: MPL-2.0
//! `HttpGalleryClient` against a local mock of the gallery API.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use iced_gallery::application::port::GallerySource;
use iced_gallery::domain::gallery::{PageRequest, PageSize};
use iced_gallery::error::FetchError;
use iced_gallery::infrastructure::http::{ClientSettings, HttpGalleryClient};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    addr
}

fn client(addr: SocketAddr, timeout: Duration) -> HttpGalleryClient {
    HttpGalleryClient::new(ClientSettings {
        base_url: format!("http://{addr}"),
        service_key: "test/key==".to_string(),
        timeout,
    })
    .expect("client should build")
}

fn page_body(count: usize) -> String {
    let items: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "galContentId": n.to_string(),
                "galContentTypeId": "17",
                "galTitle": format!("Photo {n}"),
                "galWebImageUrl": format!("http://tong.visitkorea.or.kr/{n}.jpg"),
                "galCreatedtime": "20100420024817",
                "galModifiedtime": "20150401160102",
                "galPhotographyMonth": "201004",
                "galPhotographyLocation": "Seoul",
                "galPhotographer": "Korea Tourism Organization",
                "galSearchKeyword": "seoul, tower"
            })
        })
        .collect();

    json!({
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": {
                "items": { "item": items },
                "numOfRows": count,
                "pageNo": 1,
                "totalCount": 5000
            }
        }
    })
    .to_string()
}

fn request() -> PageRequest {
    PageRequest::first(PageSize::new(10))
}

#[tokio::test]
async fn ok_response_yields_items_in_order() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/galleryList1",
            get(
                |State(captured): State<Captured>,
                 Query(query): Query<HashMap<String, String>>| async move {
                    captured.lock().unwrap().push(query);
                    page_body(10)
                },
            ),
        )
        .with_state(captured.clone());
    let addr = serve(router).await;

    let items = client(addr, Duration::from_secs(5))
        .fetch_page(request())
        .await
        .expect("page should load");

    assert_eq!(items.len(), 10);
    let ids: Vec<_> = items.iter().map(|item| item.content_id().to_string()).collect();
    let expected: Vec<_> = (1..=10).map(|n| n.to_string()).collect();
    assert_eq!(ids, expected);
    assert_eq!(items[0].title(), "Photo 1");
    assert_eq!(items[0].details().photographer.as_deref(), Some("Korea Tourism Organization"));

    let queries = captured.lock().unwrap();
    let query = &queries[0];
    assert_eq!(query["pageNo"], "1");
    assert_eq!(query["numOfRows"], "10");
    assert_eq!(query["MobileOS"], "AND");
    assert_eq!(query["MobileApp"], "app");
    assert_eq!(query["arrange"], "A");
    assert_eq!(query["_type"], "json");
    assert_eq!(query["serviceKey"], "test/key==");
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let router = Router::new().route(
        "/galleryList1",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = serve(router).await;

    let result = client(addr, Duration::from_secs(5)).fetch_page(request()).await;

    assert_eq!(result, Err(FetchError::Server(500)));
    assert_eq!(
        result.unwrap_err().user_message(),
        "server error: 500"
    );
}

#[tokio::test]
async fn slow_server_times_out_as_network_error() {
    let router = Router::new().route(
        "/galleryList1",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            page_body(1)
        }),
    );
    let addr = serve(router).await;

    let result = client(addr, Duration::from_millis(300))
        .fetch_page(request())
        .await;

    let error = result.expect_err("request should time out");
    assert_eq!(error, FetchError::Network("timeout".into()));
    assert_eq!(error.user_message(), "network error: timeout");
}

#[tokio::test]
async fn empty_item_list_is_no_data() {
    let router = Router::new().route(
        "/galleryList1",
        get(|| async {
            json!({
                "response": {
                    "header": { "resultCode": "0000", "resultMsg": "OK" },
                    "body": { "items": "", "numOfRows": 10, "pageNo": 1, "totalCount": 0 }
                }
            })
            .to_string()
        }),
    );
    let addr = serve(router).await;

    let result = client(addr, Duration::from_secs(5)).fetch_page(request()).await;

    assert_eq!(result, Err(FetchError::Empty));
    assert_eq!(result.unwrap_err().user_message(), "no data available");
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let router = Router::new().route(
        "/galleryList1",
        get(|| async { "<OpenAPI_ServiceResponse><cmmMsgHeader/></OpenAPI_ServiceResponse>" }),
    );
    let addr = serve(router).await;

    let result = client(addr, Duration::from_secs(5)).fetch_page(request()).await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result = client(addr, Duration::from_secs(2)).fetch_page(request()).await;

    match result {
        Err(FetchError::Network(detail)) => {
            assert!(detail.starts_with("connection failed"));
            assert!(!detail.contains("test/key"));
            assert!(!detail.contains("test%2Fkey"));
        }
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn image_bytes_are_downloaded() {
    let router = Router::new()
        .route("/photo.jpg", get(|| async { vec![0xFF_u8, 0xD8, 0xFF, 0xE0] }))
        .route(
            "/missing.jpg",
            get(|| async { (StatusCode::NOT_FOUND, "gone") }),
        );
    let addr = serve(router).await;
    let client = client(addr, Duration::from_secs(5));

    let bytes = client
        .fetch_image(&format!("http://{addr}/photo.jpg"))
        .await
        .expect("image should load");
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);

    let missing = client.fetch_image(&format!("http://{addr}/missing.jpg")).await;
    assert_eq!(missing, Err(FetchError::Server(404)));
}
