#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmStock {
    KodakPortra400,
    KodakEktar100,
    KodakTriX400,
    KodakGold200,
    FujiVelvia50,
    FujiSuperia400,
    IlfordHp5,
    Cinestill800T,
    AgfaVista200,
    Polaroid600,
}

impl FilmStock {
    pub const ALL: [FilmStock; 10] = [
        FilmStock::KodakPortra400,
        FilmStock::KodakEktar100,
        FilmStock::KodakTriX400,
        FilmStock::KodakGold200,
        FilmStock::FujiVelvia50,
        FilmStock::FujiSuperia400,
        FilmStock::IlfordHp5,
        FilmStock::Cinestill800T,
        FilmStock::AgfaVista200,
        FilmStock::Polaroid600,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "kodak-portra-400" => Some(FilmStock::KodakPortra400),
            "kodak-ektar-100" => Some(FilmStock::KodakEktar100),
            "kodak-trix-400" => Some(FilmStock::KodakTriX400),
            "kodak-gold-200" => Some(FilmStock::KodakGold200),
            "fuji-velvia-50" => Some(FilmStock::FujiVelvia50),
            "fuji-superia-400" => Some(FilmStock::FujiSuperia400),
            "ilford-hp5" => Some(FilmStock::IlfordHp5),
            "cinestill-800t" => Some(FilmStock::Cinestill800T),
            "agfa-vista-200" => Some(FilmStock::AgfaVista200),
            "polaroid-600" => Some(FilmStock::Polaroid600),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FilmStock::KodakPortra400 => "kodak-portra-400",
            FilmStock::KodakEktar100 => "kodak-ektar-100",
            FilmStock::KodakTriX400 => "kodak-trix-400",
            FilmStock::KodakGold200 => "kodak-gold-200",
            FilmStock::FujiVelvia50 => "fuji-velvia-50",
            FilmStock::FujiSuperia400 => "fuji-superia-400",
            FilmStock::IlfordHp5 => "ilford-hp5",
            FilmStock::Cinestill800T => "cinestill-800t",
            FilmStock::AgfaVista200 => "agfa-vista-200",
            FilmStock::Polaroid600 => "polaroid-600",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilmStock::KodakPortra400 => "Kodak Portra 400",
            FilmStock::KodakEktar100 => "Kodak Ektar 100",
            FilmStock::KodakTriX400 => "Kodak Tri-X 400",
            FilmStock::KodakGold200 => "Kodak Gold 200",
            FilmStock::FujiVelvia50 => "Fuji Velvia 50",
            FilmStock::FujiSuperia400 => "Fuji Superia 400",
            FilmStock::IlfordHp5 => "Ilford HP5 Plus",
            FilmStock::Cinestill800T => "Cinestill 800T",
            FilmStock::AgfaVista200 => "Agfa Vista 200",
            FilmStock::Polaroid600 => "Polaroid 600",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            FilmStock::KodakPortra400 => {
                "warm tones, soft skin tones, natural colors, slight orange cast, professional portrait film look, subtle grain"
            }
            FilmStock::KodakEktar100 => {
                "highly saturated colors, vibrant, punchy contrast, fine grain, vivid reds and greens, landscape photography style"
            }
            FilmStock::KodakTriX400 => {
                "black and white, high contrast, classic grain structure, deep blacks, bright highlights, street photography aesthetic"
            }
            FilmStock::KodakGold200 => {
                "warm golden tones, consumer film aesthetic, nostalgic colors, yellow-green shadows, classic 80s family photo look"
            }
            FilmStock::FujiVelvia50 => {
                "extremely saturated colors, vivid greens and blues, high contrast, dramatic landscape style, slide film look"
            }
            FilmStock::FujiSuperia400 => {
                "cool tones, cyan shadows, muted colors, Japanese film aesthetic, slightly desaturated, everyday photography"
            }
            FilmStock::IlfordHp5 => {
                "black and white, medium contrast, fine grain, wide tonal range, classic documentary photography look"
            }
            FilmStock::Cinestill800T => {
                "cinematic tungsten film, orange and teal color palette, halation around lights, night photography, movie-like aesthetic"
            }
            FilmStock::AgfaVista200 => {
                "pastel colors, faded vintage look, soft contrast, dreamy aesthetic, light leaks, lo-fi photography"
            }
            FilmStock::Polaroid600 => {
                "instant film look, slightly faded colors, soft focus, white frame border, nostalgic polaroid aesthetic, unique color cast"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilmFormat {
    #[default]
    Standard35mm,
    Square6x6,
    Medium6x7,
    Large4x5,
    Polaroid,
    Pocket110,
    HalfFrame,
    Panoramic,
}

impl FilmFormat {
    pub const ALL: [FilmFormat; 8] = [
        FilmFormat::Standard35mm,
        FilmFormat::Square6x6,
        FilmFormat::Medium6x7,
        FilmFormat::Large4x5,
        FilmFormat::Polaroid,
        FilmFormat::Pocket110,
        FilmFormat::HalfFrame,
        FilmFormat::Panoramic,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "35mm" => Some(FilmFormat::Standard35mm),
            "6x6" => Some(FilmFormat::Square6x6),
            "6x7" => Some(FilmFormat::Medium6x7),
            "4x5" => Some(FilmFormat::Large4x5),
            "polaroid" => Some(FilmFormat::Polaroid),
            "110" => Some(FilmFormat::Pocket110),
            "half-frame" => Some(FilmFormat::HalfFrame),
            "panoramic" => Some(FilmFormat::Panoramic),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FilmFormat::Standard35mm => "35mm",
            FilmFormat::Square6x6 => "6x6",
            FilmFormat::Medium6x7 => "6x7",
            FilmFormat::Large4x5 => "4x5",
            FilmFormat::Polaroid => "polaroid",
            FilmFormat::Pocket110 => "110",
            FilmFormat::HalfFrame => "half-frame",
            FilmFormat::Panoramic => "panoramic",
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            FilmFormat::Standard35mm => (1024, 683),
            FilmFormat::Square6x6 => (1024, 1024),
            FilmFormat::Medium6x7 => (1024, 878),
            FilmFormat::Large4x5 => (1024, 819),
            FilmFormat::Polaroid => (1024, 1024),
            FilmFormat::Pocket110 => (1024, 768),
            FilmFormat::HalfFrame => (768, 1024),
            FilmFormat::Panoramic => (1024, 378),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FilmFormat::Standard35mm => "35mm film format",
            FilmFormat::Square6x6 => "medium format square",
            FilmFormat::Medium6x7 => "medium format 6x7",
            FilmFormat::Large4x5 => "large format 4x5",
            FilmFormat::Polaroid => "polaroid instant film",
            FilmFormat::Pocket110 => "110 pocket film format",
            FilmFormat::HalfFrame => "half frame vertical",
            FilmFormat::Panoramic => "panoramic XPan format",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    None,
    Warm,
    Cool,
    Sepia,
    Green,
    Orange,
    RedBw,
    YellowBw,
}

impl Filter {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "none" => Some(Filter::None),
            "warm" => Some(Filter::Warm),
            "cool" => Some(Filter::Cool),
            "sepia" => Some(Filter::Sepia),
            "green" => Some(Filter::Green),
            "orange" => Some(Filter::Orange),
            "red-bw" => Some(Filter::RedBw),
            "yellow-bw" => Some(Filter::YellowBw),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Filter::None => "",
            Filter::Warm => "warm color temperature, orange tint, golden hour lighting",
            Filter::Cool => "cool color temperature, blue tint, shade lighting",
            Filter::Sepia => "sepia toned, vintage brown tint, antique photograph look",
            Filter::Green => "green color cast, forest tones",
            Filter::Orange => "orange color cast, sunset tones",
            Filter::RedBw => "black and white with red filter, dramatic sky, high contrast",
            Filter::YellowBw => "black and white with yellow filter, natural contrast, classic landscape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grain {
    None,
    Fine,
    Medium,
    Heavy,
    Extreme,
}

impl Grain {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "none" => Some(Grain::None),
            "fine" => Some(Grain::Fine),
            "medium" => Some(Grain::Medium),
            "heavy" => Some(Grain::Heavy),
            "extreme" => Some(Grain::Extreme),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Grain::None => "",
            Grain::Fine => "subtle film grain",
            Grain::Medium => "visible film grain texture",
            Grain::Heavy => "heavy film grain, grainy",
            Grain::Extreme => "extremely grainy, lo-fi, noisy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vignette {
    None,
    Light,
    Medium,
    Strong,
}

impl Vignette {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "none" => Some(Vignette::None),
            "light" => Some(Vignette::Light),
            "medium" => Some(Vignette::Medium),
            "strong" => Some(Vignette::Strong),
            _ => None,
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Vignette::None => "",
            Vignette::Light => "subtle vignette",
            Vignette::Medium => "noticeable vignette darkening corners",
            Vignette::Strong => "heavy vignette, dark corners, spotlight effect",
        }
    }
}

pub const GENERIC_LANDMARKS: &str =
    "local landmarks, characteristic architecture, natural scenery";

// City phrases win over the country-level phrase; an uncatalogued country
// falls through to the generic phrase.
pub fn landmark_phrase(country: &str, city: &str) -> &'static str {
    match country {
        "Italy" => match city {
            "Rome" => {
                "Colosseum area, Roman Forum ruins, baroque fountains, ancient temples, Spanish Steps, Tiber river, pine trees"
            }
            "Florence" => {
                "Duomo cathedral dome, Ponte Vecchio bridge, Renaissance palaces, Arno river, Tuscan hills"
            }
            "Venice" => {
                "Grand Canal, gondolas, St Mark's Square, Rialto bridge, weathered palazzo facades"
            }
            "Milan" => "gothic Duomo spires, Galleria arcades, tram lines, fashion district streets",
            _ => "Renaissance architecture, historic piazzas, terracotta rooftops, cypress trees, Mediterranean light",
        },
        "France" => match city {
            "Paris" => {
                "Eiffel Tower, Haussmann boulevards, Seine riverbanks, cafe terraces, zinc rooftops"
            }
            "Nice" => "Promenade des Anglais, azure coastline, pastel old town facades, palm trees",
            "Lyon" => "Renaissance traboules, Saone riverbanks, Fourviere basilica on the hill",
            _ => "chateau towers, lavender fields, village squares, stone farmhouses, plane tree avenues",
        },
        "United Kingdom" => match city {
            "London" => {
                "Big Ben, Thames riverside, red buses and phone boxes, Georgian terraces, royal parks"
            }
            "Edinburgh" => "castle on the crag, Royal Mile closes, Georgian New Town, Arthur's Seat",
            _ => "rolling green hills, stone cottages, hedgerows, castle ruins, dramatic coastline",
        },
        "United States" => match city {
            "New York" => {
                "Manhattan skyline, brownstone stoops, fire escapes, yellow cabs, steam rising from streets"
            }
            "San Francisco" => {
                "Golden Gate Bridge, painted Victorian houses, steep streets, cable cars, rolling fog"
            }
            "Chicago" => "elevated train tracks, lakefront skyline, steel and glass towers, river bridges",
            _ => "wide open highways, main street storefronts, big skies, national park vistas",
        },
        "Japan" => match city {
            "Tokyo" => {
                "neon-lit crossings, narrow izakaya alleys, temple gates between skyscrapers, railway overpasses"
            }
            "Kyoto" => "wooden machiya houses, torii gates, zen gardens, bamboo groves, temple pagodas",
            "Osaka" => "Dotonbori canal signs, street food stalls, castle grounds, retro shopping arcades",
            _ => "shrine gates, rice paddies, mountain backdrops, tiled roofs, cherry trees",
        },
        "Germany" => match city {
            "Berlin" => {
                "Brandenburg Gate, graffiti-covered wall segments, wide boulevards, courtyard blocks"
            }
            "Munich" => "Marienplatz towers, beer garden chestnut trees, Alpine foothills on the horizon",
            _ => "half-timbered houses, cathedral spires, river valleys, forest edges",
        },
        "Spain" => match city {
            "Barcelona" => {
                "Sagrada Familia spires, Gaudi mosaics, Gothic Quarter alleys, Mediterranean beachfront"
            }
            "Madrid" => "Gran Via facades, Retiro park avenues, tiled tapas bars, royal palace grounds",
            _ => "whitewashed villages, olive groves, plazas with fountains, Moorish arches",
        },
        "Netherlands" => match city {
            "Amsterdam" => {
                "canal ring houses, arched bridges, bicycles along the water, houseboat moorings"
            }
            _ => "windmills, tulip fields, flat polder horizons, gabled brick houses",
        },
        _ => GENERIC_LANDMARKS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_keys_round_trip() {
        for film in FilmStock::ALL {
            assert_eq!(FilmStock::from_key(film.key()), Some(film));
        }
    }

    #[test]
    fn unknown_film_key_parses_to_none() {
        assert_eq!(FilmStock::from_key("kodachrome-64"), None);
    }

    #[test]
    fn format_keys_round_trip() {
        for format in FilmFormat::ALL {
            assert_eq!(FilmFormat::from_key(format.key()), Some(format));
        }
    }

    #[test]
    fn default_format_is_35mm() {
        assert_eq!(FilmFormat::default(), FilmFormat::Standard35mm);
        assert_eq!(FilmFormat::default().dimensions(), (1024, 683));
    }

    #[test]
    fn none_effect_keys_yield_empty_phrases() {
        assert_eq!(Filter::from_key("none").unwrap().phrase(), "");
        assert_eq!(Grain::from_key("none").unwrap().phrase(), "");
        assert_eq!(Vignette::from_key("none").unwrap().phrase(), "");
    }

    #[test]
    fn landmark_lookup_prefers_exact_city() {
        let phrase = landmark_phrase("Italy", "Rome");
        assert!(phrase.starts_with("Colosseum area"));
    }

    #[test]
    fn landmark_lookup_falls_back_to_country_level() {
        let phrase = landmark_phrase("Italy", "Unknown City");
        assert!(phrase.contains("Renaissance architecture"));
        assert!(!phrase.contains("Colosseum"));
    }

    #[test]
    fn landmark_lookup_falls_back_to_generic() {
        assert_eq!(landmark_phrase("Atlantis", "Lost City"), GENERIC_LANDMARKS);
    }
}
