use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::CONFIG;
use crate::utils::http::get_http_client;

#[derive(Debug, Clone)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

impl Location {
    pub fn coordinates(&self) -> String {
        format_coordinates(self.latitude, self.longitude)
    }
}

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    let lat_dir = if latitude >= 0.0 { "N" } else { "S" };
    let lon_dir = if longitude >= 0.0 { "E" } else { "W" };
    format!(
        "{:.4}\u{b0}{}, {:.4}\u{b0}{}",
        latitude.abs(),
        lat_dir,
        longitude.abs(),
        lon_dir
    )
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

async fn locate_by_ip() -> Result<(f64, f64)> {
    let client = get_http_client();
    let url = format!("{}/json", CONFIG.ip_api_base_url.trim_end_matches('/'));
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("IP geolocation failed with status {}", response.status()));
    }

    let payload = response.json::<IpApiResponse>().await?;
    if payload.status != "success" {
        return Err(anyhow!(
            "IP geolocation failed: {}",
            payload.message.unwrap_or_else(|| "unknown error".to_string())
        ));
    }

    match (payload.lat, payload.lon) {
        (Some(lat), Some(lon)) => Ok((lat, lon)),
        _ => Err(anyhow!("IP geolocation response missing coordinates")),
    }
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    address: Option<NominatimAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    village: Option<String>,
    #[serde(default)]
    municipality: Option<String>,
    #[serde(default)]
    county: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

fn pick_city(address: &NominatimAddress) -> String {
    address
        .city
        .as_deref()
        .or(address.town.as_deref())
        .or(address.village.as_deref())
        .or(address.municipality.as_deref())
        .or(address.county.as_deref())
        .unwrap_or("Unknown")
        .to_string()
}

async fn reverse_geocode(latitude: f64, longitude: f64) -> Result<NominatimAddress> {
    let client = get_http_client();
    let url = format!(
        "{}/reverse?format=json&lat={latitude}&lon={longitude}&zoom=10&accept-language=en",
        CONFIG.nominatim_base_url.trim_end_matches('/')
    );
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!("Reverse geocoding failed with status {}", response.status()));
    }

    let payload = response.json::<NominatimResponse>().await?;
    Ok(payload.address.unwrap_or_default())
}

// Reverse-geocode failure is non-fatal: the capture proceeds with generic
// location phrasing.
pub async fn resolve(coordinates: Option<(f64, f64)>) -> Result<Location> {
    let (latitude, longitude) = match coordinates {
        Some(pair) => pair,
        None => {
            info!("No coordinates supplied, falling back to IP geolocation");
            locate_by_ip().await?
        }
    };

    match reverse_geocode(latitude, longitude).await {
        Ok(address) => Ok(Location {
            latitude,
            longitude,
            city: pick_city(&address),
            country: address.country.unwrap_or_else(|| "Unknown".to_string()),
        }),
        Err(err) => {
            warn!("Reverse geocoding error: {err}");
            Ok(Location {
                latitude,
                longitude,
                city: "Unknown Location".to_string(),
                country: String::new(),
            })
        }
    }
}
