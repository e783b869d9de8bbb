use crate::endpoints::EndpointSelector;
use crate::Credentials;
use crate::Error;

use serde::Deserialize;

/// The tenant instance assumed when the caller does not name one
pub const DEFAULT_TENANT_INSTANCE: &str = "openwhisk";

/// The raw invocation parameters of a deletion, exactly as the caller
/// provides them. Everything is optional here, validation decides what is
/// actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteRequest {
    /// The base URL of the gateway management endpoint
    #[serde(rename = "gwUrl")]
    pub gw_url: Option<String>,
    /// The user for basic-auth against the gateway, only used when a
    /// password is given as well
    #[serde(rename = "gwUser")]
    pub gw_user: Option<String>,
    /// The password for basic-auth against the gateway
    #[serde(rename = "gwPwd")]
    pub gw_pwd: Option<String>,
    /// The namespace as set by the controller on behalf of the
    /// authenticated subject, always wins over `namespace`
    #[serde(rename = "__ow_user")]
    pub ow_user: Option<String>,
    /// The namespace as named by the caller directly
    pub namespace: Option<String>,
    /// The tenant instance within the namespace
    #[serde(rename = "tenantInstance")]
    pub tenant_instance: Option<String>,
    /// The basepath identifying the API
    pub basepath: Option<String>,
    /// A path within the API, present for partial deletion only
    pub relpath: Option<String>,
    /// An http method under `relpath`, matched case-insensitively
    pub operation: Option<String>,
}

/// The validated and normalized form of a deletion request, every field
/// the rest of the workflow needs, resolved exactly once
#[derive(Debug)]
pub struct DeleteParams {
    /// How to reach and authorize against the gateway
    pub credentials: Credentials,
    /// The canonical namespace, the override already applied
    pub namespace: String,
    /// The tenant instance, defaulted when absent
    pub tenant_instance: String,
    /// The basepath identifying the API
    pub basepath: String,
    /// The endpoint to remove, absent for a whole-API deletion
    pub selector: Option<EndpointSelector>,
}

/// Checks the raw parameters and normalizes them into [`DeleteParams`].
///
/// The rules are checked in a fixed order and the first violation is
/// returned, no request is made to the gateway from here.
pub fn validate(params: Option<DeleteRequest>) -> Result<DeleteParams, Error> {
    let params = match params {
        None => return Err(Error::Input("Internal error: no message".to_string())),
        Some(p) => p,
    };

    let gw_url = match non_empty(&params.gw_url) {
        None => return Err(Error::Input("gwUrl is required".to_string())),
        Some(u) => u.to_string(),
    };

    // The controller-set namespace is authoritative, the plain field only
    // counts when no override is present
    let namespace = match non_empty(&params.ow_user).or_else(|| non_empty(&params.namespace)) {
        None => return Err(Error::Input("__ow_user is required".to_string())),
        Some(n) => n.to_string(),
    };

    let basepath = match non_empty(&params.basepath) {
        None => return Err(Error::Input("basepath is required".to_string())),
        Some(b) => b.to_string(),
    };

    let relpath = non_empty(&params.relpath).map(str::to_string);
    let operation = non_empty(&params.operation).map(|o| o.to_ascii_lowercase());

    if operation.is_some() && relpath.is_none() {
        return Err(Error::Input("operation requires relpath".to_string()));
    }

    let selector = relpath.map(|relpath| EndpointSelector { relpath, operation });

    let credentials = match (non_empty(&params.gw_user), non_empty(&params.gw_pwd)) {
        (Some(user), Some(pwd)) => Credentials::with_basic_auth(gw_url, user, pwd),
        _ => Credentials::new(gw_url),
    };

    let tenant_instance = non_empty(&params.tenant_instance)
        .unwrap_or(DEFAULT_TENANT_INSTANCE)
        .to_string();

    Ok(DeleteParams {
        credentials,
        namespace,
        tenant_instance,
        basepath,
        selector,
    })
}

// Callers commonly pass empty strings for fields they mean to omit
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
