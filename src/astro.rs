use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoonPhase::New => "\u{1F311}",
            MoonPhase::WaxingCrescent => "\u{1F312}",
            MoonPhase::FirstQuarter => "\u{1F313}",
            MoonPhase::WaxingGibbous => "\u{1F314}",
            MoonPhase::Full => "\u{1F315}",
            MoonPhase::WaningGibbous => "\u{1F316}",
            MoonPhase::LastQuarter => "\u{1F317}",
            MoonPhase::WaningCrescent => "\u{1F318}",
        }
    }
}

pub fn moon_phase_for(at: DateTime<Utc>) -> MoonPhase {
    // Reference new moon: 2000-01-06 18:14 UTC.
    let known_new_moon = Utc
        .with_ymd_and_hms(2000, 1, 6, 18, 14, 0)
        .single()
        .expect("valid reference new moon");

    let days_since = (at - known_new_moon).num_seconds() as f64 / 86_400.0;
    let fraction = (days_since / SYNODIC_MONTH_DAYS).rem_euclid(1.0);

    if fraction < 0.0625 {
        MoonPhase::New
    } else if fraction < 0.1875 {
        MoonPhase::WaxingCrescent
    } else if fraction < 0.3125 {
        MoonPhase::FirstQuarter
    } else if fraction < 0.4375 {
        MoonPhase::WaxingGibbous
    } else if fraction < 0.5625 {
        MoonPhase::Full
    } else if fraction < 0.6875 {
        MoonPhase::WaningGibbous
    } else if fraction < 0.8125 {
        MoonPhase::LastQuarter
    } else if fraction < 0.9375 {
        MoonPhase::WaningCrescent
    } else {
        MoonPhase::New
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    pub fn prompt_description(&self) -> &'static str {
        match self {
            Season::Spring => "spring season, blooming flowers, fresh green leaves, mild weather",
            Season::Summer => "summer season, bright sunlight, lush vegetation, warm atmosphere",
            Season::Autumn => "autumn season, golden and red foliage, falling leaves, warm colors",
            Season::Winter => "winter season, bare trees, cold atmosphere, muted colors",
        }
    }
}

pub fn season_for(date: NaiveDate, latitude: f64) -> Season {
    let month = date.month();
    let day = date.day();
    let northern = latitude >= 0.0;

    // Approximate equinox/solstice boundaries.
    let northern_season = if (month == 3 && day >= 20) || month == 4 || month == 5 || (month == 6 && day < 21)
    {
        Season::Spring
    } else if (month == 6 && day >= 21) || month == 7 || month == 8 || (month == 9 && day < 22) {
        Season::Summer
    } else if (month == 9 && day >= 22) || month == 10 || month == 11 || (month == 12 && day < 21) {
        Season::Autumn
    } else {
        Season::Winter
    };

    if northern {
        northern_season
    } else {
        match northern_season {
            Season::Spring => Season::Autumn,
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Dawn,
    Morning,
    LateMorning,
    Midday,
    Afternoon,
    GoldenHour,
    Dusk,
    Night,
}

impl DayPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            DayPeriod::Dawn => "dawn",
            DayPeriod::Morning => "morning",
            DayPeriod::LateMorning => "late morning",
            DayPeriod::Midday => "midday",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::GoldenHour => "golden hour",
            DayPeriod::Dusk => "dusk",
            DayPeriod::Night => "night",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDay {
    pub period: DayPeriod,
    pub description: &'static str,
}

pub fn time_of_day_for(hour: u32, is_day: bool) -> TimeOfDay {
    let (period, description) = match hour {
        5..=6 => (
            DayPeriod::Dawn,
            "early morning dawn, soft pink and orange sky, golden hour beginning",
        ),
        7..=9 => (DayPeriod::Morning, "morning light, soft shadows, fresh atmosphere"),
        10..=11 => (
            DayPeriod::LateMorning,
            "late morning, bright daylight, clear visibility",
        ),
        12..=13 => (DayPeriod::Midday, "midday sun, harsh shadows, bright exposure"),
        14..=16 => (
            DayPeriod::Afternoon,
            "afternoon light, warm tones, long shadows beginning",
        ),
        17..=18 => (
            DayPeriod::GoldenHour,
            "golden hour, warm golden light, long dramatic shadows, magic hour",
        ),
        19..=20 => (
            DayPeriod::Dusk,
            "dusk, blue hour, twilight sky, city lights beginning",
        ),
        _ => (
            DayPeriod::Night,
            if is_day {
                "evening atmosphere"
            } else {
                "nighttime, dark sky, city lights, artificial illumination"
            },
        ),
    };

    TimeOfDay { period, description }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_is_a_new_moon() {
        let at = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
        assert_eq!(moon_phase_for(at), MoonPhase::New);
    }

    #[test]
    fn half_synodic_month_later_is_a_full_moon() {
        let at = Utc.with_ymd_and_hms(2000, 1, 21, 7, 0, 0).unwrap();
        assert_eq!(moon_phase_for(at), MoonPhase::Full);
    }

    #[test]
    fn dates_before_the_reference_still_resolve() {
        let at = Utc.with_ymd_and_hms(1999, 12, 22, 12, 0, 0).unwrap();
        // Half a cycle before the reference new moon.
        assert_eq!(moon_phase_for(at), MoonPhase::Full);
    }

    #[test]
    fn july_is_summer_in_the_north_and_winter_in_the_south() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        assert_eq!(season_for(date, 48.8), Season::Summer);
        assert_eq!(season_for(date, -33.9), Season::Winter);
    }

    #[test]
    fn season_boundaries_follow_the_solstice_days() {
        let before = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let after = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        assert_eq!(season_for(before, 10.0), Season::Spring);
        assert_eq!(season_for(after, 10.0), Season::Summer);
    }

    #[test]
    fn evening_hours_map_to_dusk_then_night() {
        assert_eq!(time_of_day_for(19, false).period, DayPeriod::Dusk);
        assert_eq!(time_of_day_for(21, false).period, DayPeriod::Night);
        assert_eq!(time_of_day_for(3, false).period, DayPeriod::Night);
    }

    #[test]
    fn night_description_softens_while_the_weather_api_reports_day() {
        assert_eq!(time_of_day_for(21, true).description, "evening atmosphere");
        assert!(time_of_day_for(21, false).description.starts_with("nighttime"));
    }
}
