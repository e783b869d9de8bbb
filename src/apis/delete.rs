use crate::Client;
use crate::Error;

/// This removes the entire API, all of its paths and operations stop being
/// served by the gateway
pub async fn delete(client: &Client, api_id: &str) -> Result<(), Error> {
    let path = format!("apis/{}", api_id);

    match client
        .gateway_request::<String>(reqwest::Method::DELETE, &path, None)
        .await
    {
        Err(e) => Err(e),
        Ok(_) => Ok(()),
    }
}
