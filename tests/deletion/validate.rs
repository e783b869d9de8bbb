use apigw_routemgmt::deletion::{validate, DeleteRequest, DEFAULT_TENANT_INSTANCE};
use apigw_routemgmt::Error;

fn minimal_request() -> DeleteRequest {
    DeleteRequest {
        gw_url: Some("http://gateway.example".to_string()),
        ow_user: Some("guest".to_string()),
        basepath: Some("/hello".to_string()),
        ..Default::default()
    }
}

fn expect_input_error(result: Result<impl std::fmt::Debug, Error>, expected: &str) {
    let err = match result {
        Err(e) => e,
        Ok(v) => {
            assert!(false, "Should not validate: {:?}", v);
            return;
        }
    };

    assert!(matches!(err, Error::Input(_)));
    assert_eq!(expected, err.to_string());
}

#[test]
fn missing_parameter_object() {
    expect_input_error(validate(None), "Internal error: no message");
}

#[test]
fn missing_gw_url() {
    let mut request = minimal_request();
    request.gw_url = None;

    expect_input_error(validate(Some(request)), "gwUrl is required");
}

#[test]
fn empty_gw_url_counts_as_missing() {
    let mut request = minimal_request();
    request.gw_url = Some("".to_string());

    expect_input_error(validate(Some(request)), "gwUrl is required");
}

#[test]
fn missing_namespace() {
    let mut request = minimal_request();
    request.ow_user = None;
    request.namespace = None;

    expect_input_error(validate(Some(request)), "__ow_user is required");
}

#[test]
fn missing_basepath() {
    let mut request = minimal_request();
    request.basepath = None;

    expect_input_error(validate(Some(request)), "basepath is required");
}

#[test]
fn operation_without_relpath() {
    let mut request = minimal_request();
    request.operation = Some("get".to_string());

    expect_input_error(validate(Some(request)), "operation requires relpath");
}

#[test]
fn override_namespace_wins() {
    let mut request = minimal_request();
    request.ow_user = Some("privileged".to_string());
    request.namespace = Some("plain".to_string());

    let params = validate(Some(request)).unwrap();

    assert_eq!("privileged", params.namespace);
}

#[test]
fn plain_namespace_used_without_override() {
    let mut request = minimal_request();
    request.ow_user = None;
    request.namespace = Some("plain".to_string());

    let params = validate(Some(request)).unwrap();

    assert_eq!("plain", params.namespace);
}

#[test]
fn tenant_instance_defaults() {
    let params = validate(Some(minimal_request())).unwrap();

    assert_eq!(DEFAULT_TENANT_INSTANCE, params.tenant_instance);
}

#[test]
fn explicit_tenant_instance_is_kept() {
    let mut request = minimal_request();
    request.tenant_instance = Some("custom".to_string());

    let params = validate(Some(request)).unwrap();

    assert_eq!("custom", params.tenant_instance);
}

#[test]
fn operation_is_lower_cased() {
    let mut request = minimal_request();
    request.relpath = Some("/a".to_string());
    request.operation = Some("GET".to_string());

    let params = validate(Some(request)).unwrap();

    let selector = params.selector.unwrap();
    assert_eq!("/a", selector.relpath);
    assert_eq!(Some("get".to_string()), selector.operation);
}

#[test]
fn relpath_alone_selects_the_whole_path() {
    let mut request = minimal_request();
    request.relpath = Some("/a".to_string());

    let params = validate(Some(request)).unwrap();

    let selector = params.selector.unwrap();
    assert_eq!("/a", selector.relpath);
    assert_eq!(None, selector.operation);
}

#[test]
fn no_relpath_means_whole_api() {
    let params = validate(Some(minimal_request())).unwrap();

    assert!(params.selector.is_none());
}
