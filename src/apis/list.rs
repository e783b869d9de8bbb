use crate::apis::GatewayApi;
use crate::Client;
use crate::Error;

/// This function is used to load all APIs of the given tenant that match
/// the given basepath
pub async fn list(
    client: &Client,
    tenant_id: &str,
    basepath: &str,
) -> Result<Vec<GatewayApi>, Error> {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("basePath", basepath)
        .finish();
    let path = format!("tenants/{}/apis?{}", tenant_id, query);

    let response = match client
        .gateway_request::<String>(reqwest::Method::GET, &path, None)
        .await
    {
        Err(e) => return Err(e),
        Ok(r) => r,
    };

    let apis = match response.json::<Vec<GatewayApi>>().await {
        Err(e) => return Err(Error::from(e)),
        Ok(a) => a,
    };

    Ok(apis)
}
