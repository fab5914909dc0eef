use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::{Local, Timelike, Utc};
use dotenvy::dotenv;
use tracing::{error, warn};

mod astro;
mod catalog;
mod config;
mod email;
mod generator;
mod geolocation;
mod prompt;
mod report;
mod utils;
mod weather;

use catalog::{FilmFormat, FilmStock, Filter, Grain, Vignette};
use config::CONFIG;
use email::EmailRequest;
use generator::ImageRef;
use prompt::{LocationInfo, PhotoParameters, WeatherInfo};
use report::CaptureRecord;
use utils::logging::init_logging;

#[derive(Debug)]
struct CliArgs {
    preview: bool,
    service: String,
    film: String,
    format: String,
    iso: String,
    aperture: String,
    shutter: String,
    filter: String,
    grain: String,
    vignette: String,
    caption: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    country: Option<String>,
    output_dir: Option<PathBuf>,
    email_to: Option<String>,
    email_copy: Option<String>,
    email_message: Option<String>,
}

fn usage() -> String {
    let films = FilmStock::ALL
        .iter()
        .map(|film| film.key())
        .collect::<Vec<_>>()
        .join(", ");
    let formats = FilmFormat::ALL
        .iter()
        .map(|format| format.key())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Usage: geophoto [preview] [options]\n\
         \n\
         Modes:\n\
         \u{20} (default)            capture: locate, fetch weather, generate and save a photo\n\
         \u{20} preview              print the generated prompt without calling any service\n\
         \n\
         Options:\n\
         \u{20} --service <name>     AI service: pollinations or dezgo (default: {service})\n\
         \u{20} --film <key>         film stock key (default: kodak-portra-400)\n\
         \u{20} --format <key>       film format key (default: 35mm)\n\
         \u{20} --iso <value>        ISO display value (default: 200)\n\
         \u{20} --aperture <value>   aperture display value (default: f/2.8)\n\
         \u{20} --shutter <value>    shutter display value (default: 1/125s)\n\
         \u{20} --filter <key>       none|warm|cool|sepia|green|orange|red-bw|yellow-bw\n\
         \u{20} --grain <key>        none|fine|medium|heavy|extreme\n\
         \u{20} --vignette <key>     none|light|medium|strong\n\
         \u{20} --caption <text>     caption woven into the prompt (200 chars max)\n\
         \u{20} --lat <deg>          latitude override (requires --lon)\n\
         \u{20} --lon <deg>          longitude override (requires --lat)\n\
         \u{20} --city <name>        city override\n\
         \u{20} --country <name>     country override\n\
         \u{20} --output <dir>       output directory (default: {output})\n\
         \u{20} --email-to <addr>    email the capture via EmailJS\n\
         \u{20} --email-copy <addr>  send a copy to a second address\n\
         \u{20} --email-message <t>  custom email message\n\
         \n\
         Film stocks: {films}\n\
         Formats: {formats}",
        service = CONFIG.default_service,
        output = CONFIG.output_dir,
        films = films,
        formats = formats,
    )
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        preview: false,
        service: CONFIG.default_service.clone(),
        film: "kodak-portra-400".to_string(),
        format: "35mm".to_string(),
        iso: "200".to_string(),
        aperture: "f/2.8".to_string(),
        shutter: "1/125s".to_string(),
        filter: "none".to_string(),
        grain: "fine".to_string(),
        vignette: "light".to_string(),
        caption: String::new(),
        lat: None,
        lon: None,
        city: None,
        country: None,
        output_dir: None,
        email_to: None,
        email_copy: None,
        email_message: None,
    };

    let mut index = 1;
    if args.get(index).map(|value| value.as_str()) == Some("preview") {
        parsed.preview = true;
        index += 1;
    }

    fn take<'a>(args: &'a [String], index: &mut usize, flag: &str) -> Result<&'a str> {
        *index += 1;
        args.get(*index)
            .map(|value| value.as_str())
            .ok_or_else(|| anyhow!("Missing value for {flag}"))
    }

    while index < args.len() {
        match args[index].as_str() {
            "--service" => parsed.service = take(args, &mut index, "--service")?.to_lowercase(),
            "--film" => parsed.film = take(args, &mut index, "--film")?.to_string(),
            "--format" => parsed.format = take(args, &mut index, "--format")?.to_string(),
            "--iso" => parsed.iso = take(args, &mut index, "--iso")?.to_string(),
            "--aperture" => parsed.aperture = take(args, &mut index, "--aperture")?.to_string(),
            "--shutter" => parsed.shutter = take(args, &mut index, "--shutter")?.to_string(),
            "--filter" => parsed.filter = take(args, &mut index, "--filter")?.to_string(),
            "--grain" => parsed.grain = take(args, &mut index, "--grain")?.to_string(),
            "--vignette" => parsed.vignette = take(args, &mut index, "--vignette")?.to_string(),
            "--caption" => parsed.caption = take(args, &mut index, "--caption")?.to_string(),
            "--lat" => {
                let value = take(args, &mut index, "--lat")?;
                parsed.lat = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| anyhow!("Invalid --lat value: {value}"))?,
                );
            }
            "--lon" => {
                let value = take(args, &mut index, "--lon")?;
                parsed.lon = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| anyhow!("Invalid --lon value: {value}"))?,
                );
            }
            "--city" => parsed.city = Some(take(args, &mut index, "--city")?.to_string()),
            "--country" => parsed.country = Some(take(args, &mut index, "--country")?.to_string()),
            "--output" => {
                parsed.output_dir = Some(PathBuf::from(take(args, &mut index, "--output")?))
            }
            "--email-to" => parsed.email_to = Some(take(args, &mut index, "--email-to")?.to_string()),
            "--email-copy" => {
                parsed.email_copy = Some(take(args, &mut index, "--email-copy")?.to_string())
            }
            "--email-message" => {
                parsed.email_message = Some(take(args, &mut index, "--email-message")?.to_string())
            }
            "--help" | "-h" => return Err(anyhow!(usage())),
            other => return Err(anyhow!("Unknown argument: {other}\n{}", usage())),
        }
        index += 1;
    }

    if parsed.lat.is_some() != parsed.lon.is_some() {
        return Err(anyhow!("--lat and --lon must be provided together"));
    }

    Ok(parsed)
}

fn parse_film(key: &str) -> Option<FilmStock> {
    let film = FilmStock::from_key(key);
    if film.is_none() && !key.trim().is_empty() {
        warn!("Unknown film stock '{key}', falling back to generic analog film");
    }
    film
}

fn parse_format(key: &str) -> Option<FilmFormat> {
    let format = FilmFormat::from_key(key);
    if format.is_none() && !key.trim().is_empty() {
        warn!("Unknown format '{key}', falling back to 35mm dimensions");
    }
    format
}

fn photo_parameters(
    args: &CliArgs,
    location: Option<LocationInfo>,
    weather: Option<WeatherInfo>,
    season: Option<astro::Season>,
    moon_phase: Option<astro::MoonPhase>,
    time_of_day: Option<astro::TimeOfDay>,
) -> PhotoParameters {
    PhotoParameters {
        location,
        weather,
        film: parse_film(&args.film),
        format: parse_format(&args.format),
        iso: args.iso.clone(),
        aperture: args.aperture.clone(),
        shutter: args.shutter.clone(),
        filter: Filter::from_key(&args.filter),
        grain: Grain::from_key(&args.grain),
        vignette: Vignette::from_key(&args.vignette),
        caption: args.caption.clone(),
        season,
        moon_phase,
        time_of_day,
    }
}

fn location_from_overrides(args: &CliArgs) -> Option<LocationInfo> {
    if args.city.is_none() && args.country.is_none() {
        return None;
    }
    Some(LocationInfo {
        city: args.city.clone().unwrap_or_default(),
        country: args.country.clone().unwrap_or_default(),
    })
}

// Preview never touches the network: astro context comes from the local
// clock, the season only when a latitude was supplied.
fn run_preview(args: &CliArgs) {
    let now = Local::now();
    let assumed_day = (6..=19).contains(&now.hour());
    let params = photo_parameters(
        args,
        location_from_overrides(args),
        None,
        args.lat.map(|lat| astro::season_for(now.date_naive(), lat)),
        Some(astro::moon_phase_for(Utc::now())),
        Some(astro::time_of_day_for(now.hour(), assumed_day)),
    );
    println!("{}", generator::prompt_preview(&params));
}

async fn run_capture(args: &CliArgs) -> Result<()> {
    let coordinates = args.lat.zip(args.lon);

    println!("Detecting your location...");
    let mut location = geolocation::resolve(coordinates).await?;
    if let Some(city) = &args.city {
        location.city = city.clone();
    }
    if let Some(country) = &args.country {
        location.country = country.clone();
    }
    println!(
        "  {}, {} ({})",
        location.city,
        location.country,
        location.coordinates()
    );

    println!("Fetching weather data...");
    let weather = weather::fetch_weather(location.latitude, location.longitude).await?;
    println!(
        "  {} {}, {}\u{b0}C, humidity {}%, wind {} km/h {}",
        weather.emoji,
        weather.condition,
        weather.temperature_c,
        weather.humidity_pct,
        weather.wind_speed_kmh,
        weather.wind_cardinal()
    );

    let now = Local::now();
    let season = astro::season_for(now.date_naive(), location.latitude);
    let moon_phase = astro::moon_phase_for(Utc::now());
    let time_of_day = astro::time_of_day_for(now.hour(), weather.is_day);
    println!(
        "  {} {} | {} | {}",
        moon_phase.emoji(),
        moon_phase.name(),
        season.name(),
        time_of_day.period.label()
    );

    let params = photo_parameters(
        args,
        Some(LocationInfo {
            city: location.city.clone(),
            country: location.country.clone(),
        }),
        Some(WeatherInfo {
            condition: weather.condition.to_string(),
            is_day: weather.is_day,
        }),
        Some(season),
        Some(moon_phase),
        Some(time_of_day.clone()),
    );

    let generated_prompt = generator::prompt_preview(&params);
    let result = generator::generate(&args.service, &params, |status| println!("  {status}")).await?;

    let record = CaptureRecord {
        location: &location,
        weather: &weather,
        params: &params,
        service: result.service.key(),
        prompt: &generated_prompt,
        captured_at: now,
    };

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&CONFIG.output_dir));
    let stem = report::file_stem(&location.city, &now);

    let image_path = report::save_image(&output_dir, &stem, &result.image).await?;
    report::save_text(
        &output_dir,
        &format!("{stem}-info.txt"),
        &report::build_info_text(&record),
    )
    .await?;
    report::save_text(
        &output_dir,
        &format!("{stem}-prompt.txt"),
        &report::build_prompt_text(&record),
    )
    .await?;

    if let Some(to_email) = &args.email_to {
        if email::is_configured() {
            let image_url = match &result.image {
                ImageRef::Url(url) => Some(url.as_str()),
                ImageRef::Bytes(_) => None,
            };
            let request = EmailRequest {
                to_email,
                message: args.email_message.as_deref(),
                image_url,
                record: &record,
            };
            let sent = email::send_emails(&request, args.email_copy.as_deref()).await?;
            println!("  Sent {sent} email(s)");
        } else {
            warn!("EmailJS is not configured; skipping email delivery");
            println!("  EmailJS is not configured; skipping email");
        }
    }

    println!();
    println!("Saved {}", image_path.display());
    println!(
        "{}, {} | {} | {} | {}",
        location.city,
        location.country,
        record
            .params
            .film
            .map(|film| film.display_name())
            .unwrap_or("analog film"),
        season.name(),
        time_of_day.period.label()
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _guards = init_logging();

    let args: Vec<String> = std::env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if parsed.preview {
        run_preview(&parsed);
        return Ok(());
    }

    if let Err(err) = run_capture(&parsed).await {
        error!("Capture failed: {err}");
        eprintln!("Capture failed: {err}");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(parts: &[&str]) -> Vec<String> {
        std::iter::once("geophoto")
            .chain(parts.iter().copied())
            .map(|part| part.to_string())
            .collect()
    }

    #[test]
    fn defaults_match_the_wizard_presets() {
        let parsed = parse_args(&to_args(&[])).unwrap();
        assert!(!parsed.preview);
        assert_eq!(parsed.film, "kodak-portra-400");
        assert_eq!(parsed.format, "35mm");
        assert_eq!(parsed.iso, "200");
        assert_eq!(parsed.aperture, "f/2.8");
        assert_eq!(parsed.shutter, "1/125s");
        assert_eq!(parsed.grain, "fine");
        assert_eq!(parsed.vignette, "light");
    }

    #[test]
    fn preview_mode_and_overrides_parse() {
        let parsed = parse_args(&to_args(&[
            "preview", "--city", "Rome", "--country", "Italy", "--film", "cinestill-800t",
        ]))
        .unwrap();
        assert!(parsed.preview);
        assert_eq!(parsed.city.as_deref(), Some("Rome"));
        assert_eq!(parsed.country.as_deref(), Some("Italy"));
        assert_eq!(parsed.film, "cinestill-800t");
    }

    #[test]
    fn latitude_without_longitude_is_rejected() {
        let err = parse_args(&to_args(&["--lat", "41.9"])).unwrap_err();
        assert!(err.to_string().contains("--lat and --lon"));
    }

    #[test]
    fn unknown_flags_are_rejected_with_usage() {
        let err = parse_args(&to_args(&["--frame", "35mm"])).unwrap_err();
        assert!(err.to_string().contains("Unknown argument: --frame"));
    }

    #[test]
    fn unknown_service_is_accepted_at_parse_time() {
        // Service identifiers are validated at generation time, not here.
        let parsed = parse_args(&to_args(&["--service", "imaginary"])).unwrap();
        assert_eq!(parsed.service, "imaginary");
    }
}
