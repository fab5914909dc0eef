use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::config::CONFIG;
use crate::generator::{GenerateError, ImageRef};
use crate::utils::http::get_http_client;

pub fn build_image_url(prompt: &str, width: u32, height: u32) -> Result<Url, GenerateError> {
    let mut url = Url::parse(&CONFIG.pollinations_base_url)
        .map_err(|err| GenerateError::Backend(format!("Invalid Pollinations base URL: {err}")))?;

    url.path_segments_mut()
        .map_err(|_| GenerateError::Backend("Pollinations base URL cannot carry a path".to_string()))?
        .push("prompt")
        .push(prompt);

    url.query_pairs_mut()
        .append_pair("width", &width.to_string())
        .append_pair("height", &height.to_string())
        .append_pair("nologo", "true");

    Ok(url)
}

// The service renders on first fetch, so generation is a pre-fetch of the
// deterministic image URL; the caller keeps the URL, not the bytes.
pub async fn generate(prompt: &str, width: u32, height: u32) -> Result<ImageRef, GenerateError> {
    let url = build_image_url(prompt, width, height)?.to_string();
    let deadline = Duration::from_secs(CONFIG.generation_timeout_secs);

    let outcome = tokio::time::timeout(deadline, prefetch_image(&url, deadline)).await;
    match outcome {
        Ok(Ok(())) => Ok(ImageRef::Url(url)),
        Ok(Err(err)) => Err(err),
        Err(_) => Err(GenerateError::Timeout),
    }
}

async fn prefetch_image(url: &str, deadline: Duration) -> Result<(), GenerateError> {
    let client = get_http_client();
    let response = client
        .get(url)
        .timeout(deadline)
        .send()
        .await
        .map_err(|err| {
            if err.is_timeout() {
                GenerateError::Timeout
            } else {
                warn!("Pollinations request failed to send: {err}");
                GenerateError::Backend("Failed to generate image with Pollinations".to_string())
            }
        })?;

    if !response.status().is_success() {
        let status = response.status();
        warn!("Pollinations returned status {status} for generation request");
        return Err(GenerateError::Backend(
            "Failed to generate image with Pollinations".to_string(),
        ));
    }

    let bytes = response.bytes().await.map_err(|err| {
        warn!("Failed to read Pollinations response body: {err}");
        GenerateError::Backend("Failed to generate image with Pollinations".to_string())
    })?;

    match infer::get(&bytes) {
        Some(kind) if kind.mime_type().starts_with("image/") => Ok(()),
        _ => {
            warn!("Pollinations response did not decode as an image ({} bytes)", bytes.len());
            Err(GenerateError::Backend(
                "Pollinations returned a non-image response".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_percent_encodes_the_prompt_segment() {
        let url = build_image_url("misty harbor, 35mm film", 1024, 683).unwrap();
        let rendered = url.as_str();
        assert!(rendered.contains("/prompt/misty%20harbor,%2035mm%20film"));
        assert!(rendered.contains("width=1024"));
        assert!(rendered.contains("height=683"));
        assert!(rendered.contains("nologo=true"));
    }

    #[test]
    fn image_url_keeps_the_prompt_in_one_path_segment() {
        let url = build_image_url("slash/heavy prompt", 512, 512).unwrap();
        assert!(url.as_str().contains("slash%2Fheavy%20prompt"));
    }
}
