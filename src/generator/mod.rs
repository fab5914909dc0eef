pub mod dezgo;
pub mod pollinations;

use tracing::debug;

use crate::prompt::{build_prompt, PhotoParameters};
use crate::utils::timing::log_generation_timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Pollinations,
    Dezgo,
}

impl Service {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "pollinations" => Some(Service::Pollinations),
            "dezgo" => Some(Service::Dezgo),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Service::Pollinations => "pollinations",
            Service::Dezgo => "dezgo",
        }
    }

    fn connecting_message(&self) -> &'static str {
        match self {
            Service::Pollinations => "Connecting to Pollinations AI...",
            Service::Dezgo => "Connecting to Dezgo AI...",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Unknown AI service: {0}")]
    UnknownService(String),
    #[error("{0}")]
    Backend(String),
    #[error("Image generation timed out")]
    Timeout,
}

#[derive(Debug, Clone)]
pub enum ImageRef {
    Url(String),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub image: ImageRef,
    pub service: Service,
}

pub async fn generate(
    service: &str,
    params: &PhotoParameters,
    mut on_progress: impl FnMut(&str),
) -> Result<GenerationResult, GenerateError> {
    on_progress("Building prompt...");
    let prompt = build_prompt(params);
    debug!("Generated prompt: {prompt}");

    let (width, height) = params.format.unwrap_or_default().dimensions();

    on_progress("Generating image...");

    let resolved = Service::from_key(service)
        .ok_or_else(|| GenerateError::UnknownService(service.to_string()))?;
    on_progress(resolved.connecting_message());

    let image = match resolved {
        Service::Pollinations => {
            log_generation_timing("pollinations", "generate", || {
                pollinations::generate(&prompt, width, height)
            })
            .await?
        }
        Service::Dezgo => {
            log_generation_timing("dezgo", "generate", || dezgo::generate(&prompt, width, height))
                .await?
        }
    };

    on_progress("Image ready!");
    Ok(GenerationResult { image, service: resolved })
}

pub fn prompt_preview(params: &PhotoParameters) -> String {
    build_prompt(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_keys_parse_case_insensitively() {
        assert_eq!(Service::from_key("Pollinations"), Some(Service::Pollinations));
        assert_eq!(Service::from_key(" dezgo "), Some(Service::Dezgo));
        assert_eq!(Service::from_key("nano-banana"), None);
    }

    #[tokio::test]
    async fn unknown_service_rejects_before_any_network_call() {
        let params = PhotoParameters::default();
        let mut progress = Vec::new();
        let err = generate("imaginary", &params, |status| {
            progress.push(status.to_string())
        })
        .await
        .unwrap_err();

        assert!(matches!(err, GenerateError::UnknownService(ref name) if name == "imaginary"));
        // The dispatcher got as far as prompt building and dimension
        // resolution, never to a connecting message.
        assert_eq!(progress, vec!["Building prompt...", "Generating image..."]);
    }

    #[test]
    fn preview_matches_the_built_prompt() {
        let params = PhotoParameters::default();
        assert_eq!(prompt_preview(&params), build_prompt(&params));
    }
}
