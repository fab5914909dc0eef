use std::env;

use anyhow::Result;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub default_service: String,
    pub generation_timeout_secs: u64,
    pub pollinations_base_url: String,
    pub dezgo_base_url: String,
    pub nominatim_base_url: String,
    pub open_meteo_base_url: String,
    pub ip_api_base_url: String,
    pub emailjs_base_url: String,
    pub emailjs_public_key: String,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub output_dir: String,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            default_service: env_string("DEFAULT_AI_SERVICE", "pollinations").to_lowercase(),
            generation_timeout_secs: env_u64("GENERATION_TIMEOUT_SECS", 120),
            pollinations_base_url: env_string(
                "POLLINATIONS_BASE_URL",
                "https://image.pollinations.ai",
            ),
            dezgo_base_url: env_string("DEZGO_BASE_URL", "https://api.dezgo.com"),
            nominatim_base_url: env_string(
                "NOMINATIM_BASE_URL",
                "https://nominatim.openstreetmap.org",
            ),
            open_meteo_base_url: env_string("OPEN_METEO_BASE_URL", "https://api.open-meteo.com"),
            ip_api_base_url: env_string("IP_API_BASE_URL", "http://ip-api.com"),
            emailjs_base_url: env_string("EMAILJS_BASE_URL", "https://api.emailjs.com"),
            emailjs_public_key: env_string("EMAILJS_PUBLIC_KEY", ""),
            emailjs_service_id: env_string("EMAILJS_SERVICE_ID", ""),
            emailjs_template_id: env_string("EMAILJS_TEMPLATE_ID", ""),
            output_dir: env_string("OUTPUT_DIR", "captures"),
        })
    }
}
