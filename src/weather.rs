use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::utils::http::get_http_client;

#[derive(Debug, Clone)]
pub struct Weather {
    pub temperature_c: i32,
    pub condition: &'static str,
    pub humidity_pct: u32,
    pub wind_speed_kmh: i32,
    pub wind_direction_deg: f64,
    pub is_day: bool,
    pub emoji: &'static str,
}

impl Weather {
    pub fn wind_cardinal(&self) -> &'static str {
        cardinal_direction(self.wind_direction_deg)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: u32,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
    is_day: u8,
}

// WMO weather interpretation codes, day and night emoji per code.
fn interpret_weather_code(code: u32) -> (&'static str, &'static str, &'static str) {
    match code {
        0 => ("Clear sky", "\u{2600}\u{fe0f}", "\u{1F319}"),
        1 => ("Mainly clear", "\u{1F324}\u{fe0f}", "\u{1F319}"),
        2 => ("Partly cloudy", "\u{26C5}", "\u{2601}\u{fe0f}"),
        3 => ("Overcast", "\u{2601}\u{fe0f}", "\u{2601}\u{fe0f}"),
        45 => ("Fog", "\u{1F32B}\u{fe0f}", "\u{1F32B}\u{fe0f}"),
        48 => ("Depositing rime fog", "\u{1F32B}\u{fe0f}", "\u{1F32B}\u{fe0f}"),
        51 => ("Light drizzle", "\u{1F326}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        53 => ("Moderate drizzle", "\u{1F326}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        55 => ("Dense drizzle", "\u{1F327}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        56 => ("Light freezing drizzle", "\u{1F327}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        57 => ("Dense freezing drizzle", "\u{1F327}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        61 => ("Slight rain", "\u{1F326}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        63 => ("Moderate rain", "\u{1F327}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        65 => ("Heavy rain", "\u{1F327}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        66 => ("Light freezing rain", "\u{1F328}\u{fe0f}", "\u{1F328}\u{fe0f}"),
        67 => ("Heavy freezing rain", "\u{1F328}\u{fe0f}", "\u{1F328}\u{fe0f}"),
        71 => ("Slight snow", "\u{1F328}\u{fe0f}", "\u{1F328}\u{fe0f}"),
        73 => ("Moderate snow", "\u{2744}\u{fe0f}", "\u{2744}\u{fe0f}"),
        75 => ("Heavy snow", "\u{2744}\u{fe0f}", "\u{2744}\u{fe0f}"),
        77 => ("Snow grains", "\u{1F328}\u{fe0f}", "\u{1F328}\u{fe0f}"),
        80 => ("Slight rain showers", "\u{1F326}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        81 => ("Moderate rain showers", "\u{1F327}\u{fe0f}", "\u{1F327}\u{fe0f}"),
        82 => ("Violent rain showers", "\u{26C8}\u{fe0f}", "\u{26C8}\u{fe0f}"),
        85 => ("Slight snow showers", "\u{1F328}\u{fe0f}", "\u{1F328}\u{fe0f}"),
        86 => ("Heavy snow showers", "\u{2744}\u{fe0f}", "\u{2744}\u{fe0f}"),
        95 => ("Thunderstorm", "\u{26C8}\u{fe0f}", "\u{26C8}\u{fe0f}"),
        96 => ("Thunderstorm with slight hail", "\u{26C8}\u{fe0f}", "\u{26C8}\u{fe0f}"),
        99 => ("Thunderstorm with heavy hail", "\u{26C8}\u{fe0f}", "\u{26C8}\u{fe0f}"),
        _ => ("Unknown", "\u{1F321}\u{fe0f}", "\u{1F321}\u{fe0f}"),
    }
}

pub fn cardinal_direction(degrees: f64) -> &'static str {
    const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let index = ((degrees / 45.0).round() as usize) % 8;
    DIRECTIONS[index]
}

pub async fn fetch_weather(latitude: f64, longitude: f64) -> Result<Weather> {
    let client = get_http_client();
    let url = format!(
        "{}/v1/forecast?latitude={latitude}&longitude={longitude}&current=temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,wind_direction_10m,is_day",
        CONFIG.open_meteo_base_url.trim_end_matches('/')
    );

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(anyhow!("Weather API request failed with status {}", response.status()));
    }

    let payload = response.json::<ForecastResponse>().await?;
    let current = payload.current;
    let is_day = current.is_day == 1;
    let (condition, day_emoji, night_emoji) = interpret_weather_code(current.weather_code);

    Ok(Weather {
        temperature_c: current.temperature_2m.round() as i32,
        condition,
        humidity_pct: current.relative_humidity_2m.round() as u32,
        wind_speed_kmh: current.wind_speed_10m.round() as i32,
        wind_direction_deg: current.wind_direction_10m,
        is_day,
        emoji: if is_day { day_emoji } else { night_emoji },
    })
}
