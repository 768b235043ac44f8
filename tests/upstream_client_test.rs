//! # 上游客户端集成测试
//!
//! 用 wiremock 模拟 PDDikti 目录API，验证URL构造、编码、
//! 截断规则与错误映射

use pddikti_proxy::config::UpstreamConfig;
use pddikti_proxy::upstream::{DetailKind, DirectoryClient, PddiktiClient, SearchKind};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PddiktiClient {
    let config = UpstreamConfig {
        base_url: server.uri(),
        ..UpstreamConfig::default()
    };
    PddiktiClient::new(&config).unwrap()
}

fn records(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({"id": i, "nama": format!("record-{i}")})).collect()
}

#[tokio::test]
async fn fetch_status_returns_parsed_root() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let status = client_for(&server).fetch_status().await.unwrap();
    assert_eq!(status, json!({"status": "ok"}));
}

#[tokio::test]
async fn fetch_status_maps_non_200_to_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_status().await.unwrap_err();
    assert_eq!(err.client_message(), "HTTP 500");
}

#[tokio::test]
async fn search_truncates_flat_result_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/mhs/ridwan/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": records(12)})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .search(SearchKind::Student, "ridwan", 5)
        .await
        .unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn search_percent_encodes_spaces_and_non_ascii() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/mhs/ridwan%20halim/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search/dosen/s%C3%A9na/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .search(SearchKind::Student, "ridwan halim", 20)
        .await
        .unwrap();
    client
        .search(SearchKind::Lecturer, "séna", 20)
        .await
        .unwrap();
}

#[tokio::test]
async fn search_all_truncates_each_category_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/all/ab/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"mahasiswa": records(10), "dosen": records(1)}
        })))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .search(SearchKind::All, "ab", 3)
        .await
        .unwrap();
    // 每个类别独立截断；类别间合计不受 limit 约束
    assert_eq!(body["data"]["mahasiswa"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["dosen"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_uses_expected_slug_per_kind() {
    let server = MockServer::start().await;
    for slug in ["mhs", "dosen", "prodi", "pt", "all"] {
        Mock::given(method("GET"))
            .and(path(format!("/search/{slug}/bandung/")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    for kind in [
        SearchKind::Student,
        SearchKind::Lecturer,
        SearchKind::Program,
        SearchKind::Institution,
        SearchKind::All,
    ] {
        client.search(kind, "bandung", 20).await.unwrap();
    }
}

#[tokio::test]
async fn search_maps_non_200_to_no_data_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/pt/bandung/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(SearchKind::Institution, "bandung", 20)
        .await
        .unwrap_err();
    assert_eq!(err.client_message(), "HTTP 404: no data found");
}

#[tokio::test]
async fn search_maps_malformed_json_to_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/mhs/ridwan/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(SearchKind::Student, "ridwan", 20)
        .await
        .unwrap_err();
    assert!(err.client_message().starts_with("Error: "));
}

#[tokio::test]
async fn detail_uses_per_kind_paths() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mhs/detail/abc-1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nama": "Budi"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dosen/profile/xyz-2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nama": "Siti"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let student = client.detail(DetailKind::Student, "abc-1").await.unwrap();
    assert_eq!(student, json!({"nama": "Budi"}));
    let lecturer = client.detail(DetailKind::Lecturer, "xyz-2").await.unwrap();
    assert_eq!(lecturer, json!({"nama": "Siti"}));
}

#[tokio::test]
async fn detail_maps_non_200_to_no_data_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mhs/detail/missing/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .detail(DetailKind::Student, "missing")
        .await
        .unwrap_err();
    assert_eq!(err.client_message(), "no data found");
}
