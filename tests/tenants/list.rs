use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use serde_json::json;

use apigw_routemgmt::{tenants, Client, Credentials};

#[tokio::test]
async fn valid_list() {
    let mock_server = MockServer::start().await;

    let response_body = json!([
        {
            "id": "tenant-1",
            "namespace": "guest",
            "tenantInstance": "openwhisk",
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/v2/tenants"))
        .and(query_param("namespace", "guest"))
        .and(query_param("tenantInstance", "openwhisk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&mock_server)
        .await;

    let client = Client::new(Credentials::new(mock_server.uri()));

    let result = match tenants::list(&client, "guest", "openwhisk").await {
        Err(e) => {
            assert!(false, "Should not return error: {}", e);
            return;
        }
        Ok(t) => t,
    };

    assert_eq!(1, result.len());
    assert_eq!("tenant-1", result[0].id);
    assert_eq!("guest", result[0].namespace);
    assert_eq!("openwhisk", result[0].instance);
}

#[tokio::test]
async fn no_matching_tenants() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/tenants"))
        .and(query_param("namespace", "nobody"))
        .and(query_param("tenantInstance", "openwhisk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = Client::new(Credentials::new(mock_server.uri()));

    let result = match tenants::list(&client, "nobody", "openwhisk").await {
        Err(e) => {
            assert!(false, "Should not return error: {}", e);
            return;
        }
        Ok(t) => t,
    };

    assert!(result.is_empty());
}
