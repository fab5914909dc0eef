use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local};
use tracing::info;

use crate::generator::ImageRef;
use crate::geolocation::Location;
use crate::prompt::PhotoParameters;
use crate::utils::http::get_http_client;
use crate::weather::Weather;

pub struct CaptureRecord<'a> {
    pub location: &'a Location,
    pub weather: &'a Weather,
    pub params: &'a PhotoParameters,
    pub service: &'a str,
    pub prompt: &'a str,
    pub captured_at: DateTime<Local>,
}

fn safe(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

pub fn build_info_text(record: &CaptureRecord<'_>) -> String {
    let params = record.params;
    let film_name = params
        .film
        .map(|film| film.display_name())
        .unwrap_or("analog film");
    let format_key = params.format.unwrap_or_default().key();
    let season = params
        .season
        .map(|season| season.name())
        .unwrap_or("N/A");
    let period = params
        .time_of_day
        .as_ref()
        .map(|time_of_day| time_of_day.period.label())
        .unwrap_or("N/A");
    let moon = params
        .moon_phase
        .map(|moon| moon.name())
        .unwrap_or("N/A");

    format!(
        "================================================================================\n\
         \u{20}                          GEOPHOTO - PHOTO DATA\n\
         ================================================================================\n\
         \n\
         CAPTURE INFORMATION\n\
         -------------------\n\
         Date & Time: {date_time}\n\
         Location: {city}, {country}\n\
         Coordinates: {coordinates}\n\
         Season: {season}\n\
         Time of Day: {period}\n\
         Moon Phase: {moon}\n\
         \n\
         WEATHER CONDITIONS\n\
         ------------------\n\
         Condition: {condition}\n\
         Temperature: {temperature}\u{b0}C\n\
         Humidity: {humidity}%\n\
         Wind: {wind_speed} km/h {wind_dir}\n\
         Day/Night: {day_night}\n\
         \n\
         CAMERA SETTINGS\n\
         ---------------\n\
         Film: {film}\n\
         Format: {format}\n\
         Aperture: {aperture}\n\
         Shutter Speed: {shutter}\n\
         ISO: {iso}\n\
         \n\
         USER CAPTION\n\
         ------------\n\
         {caption}\n\
         \n\
         AI SERVICE\n\
         ----------\n\
         Service: {service}\n\
         \n\
         GENERATED PROMPT\n\
         ----------------\n\
         {prompt}\n\
         \n\
         ================================================================================\n\
         \u{20}                      Generated with GeoPhoto v{version}\n\
         ================================================================================",
        date_time = record.captured_at.format("%A, %B %-d, %Y %H:%M:%S"),
        city = safe(&record.location.city, "Unknown"),
        country = safe(&record.location.country, "Unknown"),
        coordinates = record.location.coordinates(),
        season = season,
        period = period,
        moon = moon,
        condition = record.weather.condition,
        temperature = record.weather.temperature_c,
        humidity = record.weather.humidity_pct,
        wind_speed = record.weather.wind_speed_kmh,
        wind_dir = record.weather.wind_cardinal(),
        day_night = if record.weather.is_day { "Day" } else { "Night" },
        film = film_name,
        format = format_key,
        aperture = safe(&params.aperture, "N/A"),
        shutter = safe(&params.shutter, "N/A"),
        iso = safe(&params.iso, "N/A"),
        caption = safe(&params.caption, "(No caption provided)"),
        service = record.service,
        prompt = record.prompt,
        version = env!("CARGO_PKG_VERSION"),
    )
}

pub fn build_prompt_text(record: &CaptureRecord<'_>) -> String {
    format!(
        "GEOPHOTO - AI PROMPT\n\
         Generated: {date_time}\n\
         Location: {city}, {country}\n\
         \n\
         ================================================================================\n\
         PROMPT\n\
         ================================================================================\n\
         \n\
         {prompt}\n\
         \n\
         ================================================================================",
        date_time = record.captured_at.format("%A, %B %-d, %Y %H:%M:%S"),
        city = safe(&record.location.city, "Unknown"),
        country = safe(&record.location.country, "Unknown"),
        prompt = record.prompt,
    )
}

pub fn slug(value: &str) -> String {
    let collapsed = value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if collapsed.is_empty() {
        "unknown".to_string()
    } else {
        collapsed
    }
}

pub fn file_stem(city: &str, captured_at: &DateTime<Local>) -> String {
    format!(
        "geophoto-{}-{}-{}",
        slug(city),
        captured_at.format("%Y-%m-%d"),
        captured_at.format("%H-%M")
    )
}

fn extension_for(bytes: &[u8]) -> &'static str {
    match infer::get(bytes) {
        Some(kind) if kind.mime_type() == "image/png" => "png",
        Some(kind) if kind.mime_type() == "image/webp" => "webp",
        _ => "jpg",
    }
}

pub async fn save_image(dir: &Path, stem: &str, image: &ImageRef) -> Result<PathBuf> {
    let bytes = match image {
        ImageRef::Bytes(bytes) => bytes.clone(),
        ImageRef::Url(url) => {
            let response = get_http_client()
                .get(url)
                .send()
                .await
                .context("Failed to download generated image")?;
            if !response.status().is_success() {
                return Err(anyhow!(
                    "Failed to download generated image (status {})",
                    response.status()
                ));
            }
            response.bytes().await?.to_vec()
        }
    };

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{stem}.{}", extension_for(&bytes)));
    tokio::fs::write(&path, &bytes).await?;
    info!("Saved image to {}", path.display());
    Ok(path)
}

pub async fn save_text(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(name);
    tokio::fs::write(&path, content).await?;
    info!("Saved {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::{time_of_day_for, MoonPhase, Season};
    use crate::catalog::{FilmFormat, FilmStock};
    use crate::prompt::{LocationInfo, WeatherInfo};
    use chrono::TimeZone;

    fn sample_record<'a>(
        location: &'a Location,
        weather: &'a Weather,
        params: &'a PhotoParameters,
    ) -> CaptureRecord<'a> {
        CaptureRecord {
            location,
            weather,
            params,
            service: "pollinations",
            prompt: "test prompt",
            captured_at: Local.with_ymd_and_hms(2025, 10, 4, 17, 30, 0).unwrap(),
        }
    }

    fn sample_location() -> Location {
        Location {
            latitude: 41.9028,
            longitude: 12.4964,
            city: "Rome".to_string(),
            country: "Italy".to_string(),
        }
    }

    fn sample_weather() -> Weather {
        Weather {
            temperature_c: 21,
            condition: "Clear sky",
            humidity_pct: 40,
            wind_speed_kmh: 12,
            wind_direction_deg: 90.0,
            is_day: true,
            emoji: "\u{2600}\u{fe0f}",
        }
    }

    #[test]
    fn info_text_carries_capture_weather_and_settings_sections() {
        let location = sample_location();
        let weather = sample_weather();
        let params = PhotoParameters {
            film: Some(FilmStock::KodakPortra400),
            format: Some(FilmFormat::Standard35mm),
            iso: "200".to_string(),
            aperture: "f/2.8".to_string(),
            shutter: "1/125s".to_string(),
            season: Some(Season::Autumn),
            moon_phase: Some(MoonPhase::Full),
            time_of_day: Some(time_of_day_for(17, true)),
            location: Some(LocationInfo {
                city: "Rome".to_string(),
                country: "Italy".to_string(),
            }),
            weather: Some(WeatherInfo {
                condition: "Clear sky".to_string(),
                is_day: true,
            }),
            ..Default::default()
        };
        let text = build_info_text(&sample_record(&location, &weather, &params));

        assert!(text.contains("Location: Rome, Italy"));
        assert!(text.contains("Coordinates: 41.9028\u{b0}N, 12.4964\u{b0}E"));
        assert!(text.contains("Season: Autumn"));
        assert!(text.contains("Moon Phase: Full Moon"));
        assert!(text.contains("Film: Kodak Portra 400"));
        assert!(text.contains("Wind: 12 km/h E"));
        assert!(text.contains("(No caption provided)"));
        assert!(text.contains("Service: pollinations"));
        assert!(text.contains("test prompt"));
    }

    #[test]
    fn filename_slug_collapses_whitespace_and_lowercases() {
        assert_eq!(slug("New  York"), "new-york");
        assert_eq!(slug("Rome"), "rome");
        assert_eq!(slug("  "), "unknown");
    }

    #[test]
    fn file_stem_embeds_city_date_and_time() {
        let at = Local.with_ymd_and_hms(2025, 10, 4, 17, 30, 0).unwrap();
        assert_eq!(file_stem("Rome", &at), "geophoto-rome-2025-10-04-17-30");
    }
}
