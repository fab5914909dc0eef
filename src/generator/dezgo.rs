use tracing::warn;

use crate::config::CONFIG;
use crate::generator::{GenerateError, ImageRef};
use crate::utils::http::get_http_client;

// Dezgo's free tier caps output at 512px on either axis.
pub const MAX_DIMENSION: u32 = 512;

const GUIDANCE: f64 = 7.5;
const STEPS: u32 = 30;

pub fn clamp_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width.min(MAX_DIMENSION), height.min(MAX_DIMENSION))
}

pub async fn generate(prompt: &str, width: u32, height: u32) -> Result<ImageRef, GenerateError> {
    let (width, height) = clamp_dimensions(width, height);
    let url = format!("{}/text2image", CONFIG.dezgo_base_url.trim_end_matches('/'));

    let form = [
        ("prompt", prompt.to_string()),
        ("width", width.to_string()),
        ("height", height.to_string()),
        ("guidance", GUIDANCE.to_string()),
        ("steps", STEPS.to_string()),
    ];

    let client = get_http_client();
    let response = client.post(&url).form(&form).send().await.map_err(|err| {
        warn!("Dezgo request failed to send: {err}");
        GenerateError::Backend(
            "Failed to generate image with Dezgo. Try Pollinations instead.".to_string(),
        )
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("Dezgo API error: status={status}, body={}", body.chars().take(500).collect::<String>());
        return Err(GenerateError::Backend(
            "Failed to generate image with Dezgo. Try Pollinations instead.".to_string(),
        ));
    }

    let bytes = response.bytes().await.map_err(|err| {
        warn!("Failed to read Dezgo response body: {err}");
        GenerateError::Backend(
            "Failed to generate image with Dezgo. Try Pollinations instead.".to_string(),
        )
    })?;

    Ok(ImageRef::Bytes(bytes.to_vec()))
}
