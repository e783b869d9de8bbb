use crate::endpoints::EndpointDocument;
use crate::Client;
use crate::Error;

use serde::Serialize;

#[derive(Serialize)]
struct ReplaceBody<'a> {
    #[serde(rename = "tenantId")]
    tenant_id: &'a str,
    #[serde(rename = "openApiDoc")]
    open_api_doc: &'a EndpointDocument,
}

/// This function is used to republish an API with the given endpoint
/// document. The gateway only supports full replacement, the document
/// passed here completely supersedes whatever was published before.
pub async fn replace(
    client: &Client,
    tenant_id: &str,
    document: &EndpointDocument,
    api_id: &str,
) -> Result<(), Error> {
    let path = format!("apis/{}", api_id);

    let req_body = ReplaceBody {
        tenant_id,
        open_api_doc: document,
    };

    match client
        .gateway_request(reqwest::Method::PUT, &path, Some(&req_body))
        .await
    {
        Err(e) => Err(e),
        Ok(_) => Ok(()),
    }
}
