use crate::core::YfError;
use crate::core::request::ApiRequest;
use crate::core::YfClient;

/// Send a built request as-is and hand back whatever the transport returned.
pub(crate) async fn send(client: &YfClient, req: ApiRequest) -> Result<reqwest::Response, YfError> {
    let (method, url, headers) = req.into_parts();

    #[cfg(feature = "tracing")]
    tracing::debug!(%method, url = %url, "sending request");

    let resp = client
        .http()
        .request(method, url)
        .headers(headers)
        .send()
        .await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = resp.status().as_u16(), url = %resp.url(), "response received");

    Ok(resp)
}

/// Fail with [`YfError::Status`] on a non-2xx response, otherwise read the body as text.
pub(crate) async fn success_text(resp: reqwest::Response) -> Result<String, YfError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(YfError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
