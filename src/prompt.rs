use crate::astro::{MoonPhase, Season, TimeOfDay};
use crate::catalog::{landmark_phrase, FilmFormat, FilmStock, Filter, Grain, Vignette};

pub const MAX_CAPTION_CHARS: usize = 200;

const GENERIC_LOCATION: &str = "scenic urban or natural landscape";
const SCENE_CONSTRAINTS: &str =
    "wide angle view, natural composition, no visible text or signage";
const CLOSING_QUALITY: &str =
    "professional landscape photography, high quality, detailed, analog film aesthetic, authentic location";

#[derive(Debug, Clone, Default)]
pub struct LocationInfo {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone)]
pub struct WeatherInfo {
    pub condition: String,
    pub is_day: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PhotoParameters {
    pub location: Option<LocationInfo>,
    pub weather: Option<WeatherInfo>,
    pub film: Option<FilmStock>,
    pub format: Option<FilmFormat>,
    pub iso: String,
    pub aperture: String,
    pub shutter: String,
    pub filter: Option<Filter>,
    pub grain: Option<Grain>,
    pub vignette: Option<Vignette>,
    pub caption: String,
    pub season: Option<Season>,
    pub moon_phase: Option<MoonPhase>,
    pub time_of_day: Option<TimeOfDay>,
}

fn framing_fragment(format: Option<FilmFormat>) -> String {
    match format {
        Some(format) => format!("Beautiful {} landscape photograph", format.description()),
        None => "Beautiful landscape photograph".to_string(),
    }
}

fn location_fragment(location: Option<&LocationInfo>) -> String {
    let Some(location) = location else {
        return GENERIC_LOCATION.to_string();
    };

    let city = location.city.trim();
    let country = location.country.trim();
    if city.is_empty() && country.is_empty() {
        return GENERIC_LOCATION.to_string();
    }

    let place = [city, country]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    format!("{place}, featuring {}", landmark_phrase(country, city))
}

fn truncate_caption(caption: &str) -> String {
    let trimmed = caption.trim();
    if trimmed.chars().count() <= MAX_CAPTION_CHARS {
        return trimmed.to_string();
    }
    trimmed.chars().take(MAX_CAPTION_CHARS).collect()
}

fn weather_fragment(weather: &WeatherInfo) -> String {
    if weather.condition.trim().is_empty() {
        return String::new();
    }
    let daylight = if weather.is_day { "daytime" } else { "nighttime" };
    format!("{daylight}, {} weather", weather.condition.trim().to_lowercase())
}

// Moonlight only shows up in a dusk or night sky; daylight drops the
// fragment no matter the phase.
fn moon_fragment(moon: Option<MoonPhase>, time_of_day: Option<&TimeOfDay>) -> String {
    use crate::astro::DayPeriod;

    let Some(moon) = moon else {
        return String::new();
    };
    let Some(time_of_day) = time_of_day else {
        return String::new();
    };
    if !matches!(time_of_day.period, DayPeriod::Night | DayPeriod::Dusk) {
        return String::new();
    }

    match moon {
        MoonPhase::Full => "full moon illuminating the scene".to_string(),
        MoonPhase::New => "moonless dark sky".to_string(),
        other => format!("{} in the sky", other.name().to_lowercase()),
    }
}

fn technical_fragment(iso: &str, aperture: &str, shutter: &str) -> String {
    if iso.trim().is_empty() && aperture.trim().is_empty() && shutter.trim().is_empty() {
        return String::new();
    }
    format!(
        "shot at {}, {} exposure, ISO {}",
        aperture.trim(),
        shutter.trim(),
        iso.trim()
    )
}

pub fn build_prompt(params: &PhotoParameters) -> String {
    let film_name = params
        .film
        .map(|film| film.display_name())
        .unwrap_or("analog film");
    let film_style = params.film.map(|film| film.style()).unwrap_or("");

    let fragments = [
        framing_fragment(params.format),
        location_fragment(params.location.as_ref()),
        truncate_caption(&params.caption),
        params
            .season
            .map(|season| season.prompt_description().to_string())
            .unwrap_or_default(),
        params
            .time_of_day
            .as_ref()
            .map(|time_of_day| time_of_day.description.to_string())
            .unwrap_or_default(),
        params
            .weather
            .as_ref()
            .map(weather_fragment)
            .unwrap_or_default(),
        moon_fragment(params.moon_phase, params.time_of_day.as_ref()),
        SCENE_CONSTRAINTS.to_string(),
        format!("shot on {film_name}"),
        film_style.to_string(),
        technical_fragment(&params.iso, &params.aperture, &params.shutter),
        params.filter.map(|filter| filter.phrase().to_string()).unwrap_or_default(),
        params.grain.map(|grain| grain.phrase().to_string()).unwrap_or_default(),
        params
            .vignette
            .map(|vignette| vignette.phrase().to_string())
            .unwrap_or_default(),
        CLOSING_QUALITY.to_string(),
    ];

    fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::{time_of_day_for, DayPeriod};

    fn rome_params() -> PhotoParameters {
        PhotoParameters {
            location: Some(LocationInfo {
                city: "Rome".to_string(),
                country: "Italy".to_string(),
            }),
            weather: Some(WeatherInfo {
                condition: "Clear".to_string(),
                is_day: true,
            }),
            film: FilmStock::from_key("kodak-portra-400"),
            format: FilmFormat::from_key("35mm"),
            iso: "200".to_string(),
            aperture: "f/2.8".to_string(),
            shutter: "1/125s".to_string(),
            filter: Filter::from_key("none"),
            grain: Grain::from_key("fine"),
            vignette: Vignette::from_key("light"),
            ..Default::default()
        }
    }

    #[test]
    fn all_absent_parameters_still_yield_framing_and_closing() {
        let prompt = build_prompt(&PhotoParameters::default());
        assert!(prompt.starts_with("Beautiful landscape photograph"));
        assert!(prompt.ends_with(CLOSING_QUALITY));
        assert!(prompt.contains(GENERIC_LOCATION));
        assert!(prompt.contains("shot on analog film"));
        assert!(!prompt.contains("weather"));
        assert!(!prompt.contains("season"));
        assert!(!prompt.contains("moon"));
        assert!(!prompt.contains("shot at"));
    }

    #[test]
    fn caption_is_capped_at_two_hundred_chars() {
        let long_caption = "x".repeat(450);
        let params = PhotoParameters {
            caption: long_caption.clone(),
            ..Default::default()
        };
        let prompt = build_prompt(&params);
        assert!(prompt.contains(&"x".repeat(MAX_CAPTION_CHARS)));
        assert!(!prompt.contains(&"x".repeat(MAX_CAPTION_CHARS + 1)));
    }

    #[test]
    fn moon_fragment_requires_night_or_dusk() {
        let mut params = PhotoParameters {
            moon_phase: Some(MoonPhase::WaxingCrescent),
            time_of_day: Some(time_of_day_for(13, true)),
            ..Default::default()
        };
        assert!(!build_prompt(&params).contains("waxing crescent in the sky"));

        params.time_of_day = Some(time_of_day_for(22, false));
        assert!(build_prompt(&params).contains("waxing crescent in the sky"));

        params.time_of_day = Some(time_of_day_for(19, false));
        assert_eq!(params.time_of_day.as_ref().unwrap().period, DayPeriod::Dusk);
        assert!(build_prompt(&params).contains("waxing crescent in the sky"));

        params.moon_phase = None;
        assert!(!build_prompt(&params).contains("in the sky"));
    }

    #[test]
    fn full_and_new_moons_use_their_fixed_phrases() {
        let mut params = PhotoParameters {
            moon_phase: Some(MoonPhase::Full),
            time_of_day: Some(time_of_day_for(22, false)),
            ..Default::default()
        };
        assert!(build_prompt(&params).contains("full moon illuminating the scene"));

        params.moon_phase = Some(MoonPhase::New);
        assert!(build_prompt(&params).contains("moonless dark sky"));
    }

    #[test]
    fn location_tiers_select_city_then_country_then_generic() {
        let rome = build_prompt(&rome_params());
        assert!(rome.contains("Rome, Italy, featuring Colosseum area"));

        let mut params = rome_params();
        params.location = Some(LocationInfo {
            city: "Unknown City".to_string(),
            country: "Italy".to_string(),
        });
        let country_level = build_prompt(&params);
        assert!(country_level.contains("Unknown City, Italy, featuring Renaissance architecture"));
        assert!(!country_level.contains("Colosseum"));

        params.location = None;
        let generic = build_prompt(&params);
        assert!(generic.contains(GENERIC_LOCATION));
        assert!(!generic.contains("Italy"));
    }

    #[test]
    fn empty_city_with_catalogued_country_takes_the_country_branch() {
        let mut params = rome_params();
        params.location = Some(LocationInfo {
            city: String::new(),
            country: "Italy".to_string(),
        });
        let fragment = location_fragment(params.location.as_ref());
        assert!(fragment.starts_with("Italy, featuring Renaissance architecture"));
    }

    #[test]
    fn fragment_order_is_stable_across_presence_combinations() {
        let mut params = rome_params();
        params.season = Some(Season::Autumn);
        params.time_of_day = Some(time_of_day_for(15, true));
        let prompt = build_prompt(&params);

        let season_at = prompt.find("autumn season").unwrap();
        let time_at = prompt.find("afternoon light").unwrap();
        let weather_at = prompt.find("daytime, clear weather").unwrap();
        let film_at = prompt.find("shot on Kodak Portra 400").unwrap();
        assert!(season_at < time_at);
        assert!(time_at < weather_at);
        assert!(weather_at < film_at);

        // Dropping the middle fragments keeps the survivors in order.
        params.time_of_day = None;
        let prompt = build_prompt(&params);
        let season_at = prompt.find("autumn season").unwrap();
        let weather_at = prompt.find("daytime, clear weather").unwrap();
        assert!(season_at < weather_at);
    }

    #[test]
    fn rome_end_to_end_prompt_matches_the_pinned_head_and_tail() {
        let prompt = build_prompt(&rome_params());
        assert!(prompt.starts_with(
            "Beautiful 35mm film format landscape photograph, Rome, Italy, featuring Colosseum area, \
             Roman Forum ruins, baroque fountains, ancient temples, Spanish Steps, Tiber river, pine trees, "
        ));
        assert!(prompt.ends_with(
            "professional landscape photography, high quality, detailed, analog film aesthetic, authentic location"
        ));
        assert!(prompt.contains("shot at f/2.8, 1/125s exposure, ISO 200"));
        assert!(prompt.contains("subtle film grain"));
        assert!(prompt.contains("subtle vignette"));
    }

    #[test]
    fn unknown_film_key_degrades_to_generic_film() {
        let mut params = rome_params();
        params.film = FilmStock::from_key("not-a-film");
        let prompt = build_prompt(&params);
        assert!(prompt.contains("shot on analog film"));
        assert!(!prompt.contains("Kodak"));
    }
}
