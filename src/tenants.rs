use crate::Client;
use crate::Error;

use serde::Deserialize;

/// A single gateway tenant, the owner of every API published for one
/// (namespace, instance) pair
#[derive(Debug, Clone, Deserialize)]
pub struct Tenant {
    /// The opaque id the gateway assigned to this tenant
    pub id: String,
    /// The namespace this tenant belongs to
    pub namespace: String,
    /// The instance name separating tenants that share a namespace
    #[serde(rename = "tenantInstance")]
    pub instance: String,
}

/// This function is used to load all tenants from the gateway that match
/// the given namespace and instance
pub async fn list(client: &Client, namespace: &str, instance: &str) -> Result<Vec<Tenant>, Error> {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("namespace", namespace)
        .append_pair("tenantInstance", instance)
        .finish();
    let path = format!("tenants?{}", query);

    let response = match client
        .gateway_request::<String>(reqwest::Method::GET, &path, None)
        .await
    {
        Err(e) => return Err(e),
        Ok(r) => r,
    };

    let tenants = match response.json::<Vec<Tenant>>().await {
        Err(e) => return Err(Error::from(e)),
        Ok(t) => t,
    };

    Ok(tenants)
}
