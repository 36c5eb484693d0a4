//! Field classification, human labels, and the weather icon table.

/// The closed set of formatting categories a field key can fall into.
///
/// Classification is by key, never by value shape, so the formatter's rule
/// table stays exhaustive and testable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `forecastDate`: YYYYMMDD or a generically parseable date.
    Date,
    /// `minTemp` / `maxTemp`: scalar or `{value, unit}` record.
    Temperature,
    /// `forecastMaxtemp` / `forecastMintemp`: like [`Temperature`](Self::Temperature)
    /// but a bare scalar never gets a unit inferred.
    ForecastTemperature,
    /// `humidity`: `{min, max}` record rendered as a percent range.
    HumidityRange,
    /// `forecastMaxrh` / `forecastMinrh`: one-sided relative humidity,
    /// `%` appended even to bare scalars.
    SingleSidedRh,
    /// Anything else.
    Other,
}

impl FieldKind {
    pub fn of(key: &str) -> Self {
        match key {
            "forecastDate" => Self::Date,
            "minTemp" | "maxTemp" => Self::Temperature,
            "forecastMaxtemp" | "forecastMintemp" => Self::ForecastTemperature,
            "humidity" => Self::HumidityRange,
            "forecastMaxrh" | "forecastMinrh" => Self::SingleSidedRh,
            _ => Self::Other,
        }
    }
}

/// Human label for a known field key; unknown keys render under the raw key.
pub fn field_label(key: &str) -> Option<&'static str> {
    match key {
        "forecastDate" => Some("Date"),
        "week" => Some("Day"),
        "forecastWeather" => Some("Weather"),
        "minTemp" => Some("Min Temperature"),
        "maxTemp" => Some("Max Temperature"),
        "humidity" => Some("Humidity"),
        "wind" => Some("Wind"),
        "forecastWind" => Some("Wind Forecast"),
        "forecastMaxtemp" => Some("Max Temp"),
        "forecastMintemp" => Some("Min Temp"),
        "forecastMaxrh" => Some("Max Relative Humidity"),
        "forecastMinrh" => Some("Min Relative Humidity"),
        "Forecast" => Some("Forecast"),
        "PSR" => Some("Probability of Significant Rain"),
        _ => None,
    }
}

/// Keys the feed has been seen using to carry the icon code, highest
/// priority first. Filtered out of the detail listing.
pub const ICON_KEYS: [&str; 5] =
    ["ForecastIcon", "forecastIcon", "icon", "Icon", "WeatherIcon"];

pub fn is_icon_key(key: &str) -> bool {
    ICON_KEYS.contains(&key)
}

/// A rendered stand-in for one of the observatory's weather icon images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherIcon {
    pub glyph: &'static str,
    pub label: &'static str,
}

/// Icon table for the HKO icon code range.
/// See: https://www.hko.gov.hk/textonly/v2/explain/wxicon_e.htm
pub fn weather_icon(code: u16) -> Option<WeatherIcon> {
    let (glyph, label) = match code {
        50 => ("☀", "Sunny"),
        51 => ("🌤", "Sunny Periods"),
        52 => ("⛅", "Sunny Intervals"),
        53 => ("🌦", "Sunny Periods with A Few Showers"),
        54 => ("🌦", "Sunny Intervals with Showers"),
        60 => ("☁", "Cloudy"),
        61 => ("☁", "Overcast"),
        62 => ("🌧", "Light Rain"),
        63 => ("🌧", "Rain"),
        64 => ("🌧", "Heavy Rain"),
        65 => ("⛈", "Thunderstorms"),
        70..=75 => ("🌙", "Fine"),
        76 => ("⛅", "Mainly Cloudy"),
        77 => ("🌤", "Mainly Fine"),
        80 => ("💨", "Windy"),
        81 => ("🏜", "Dry"),
        82 => ("💧", "Humid"),
        83 => ("🌫", "Fog"),
        84 => ("🌫", "Mist"),
        85 => ("🌫", "Haze"),
        90 => ("🌡", "Hot"),
        91 => ("🌡", "Warm"),
        92 => ("❄", "Cool"),
        93 => ("❄", "Cold"),
        _ => return None,
    };
    Some(WeatherIcon { glyph, label })
}
