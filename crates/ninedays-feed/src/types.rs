use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::fields;

/// One day's forecast as delivered by the feed.
///
/// The key set is open and the value shapes are inconsistent upstream: the
/// same logical field may arrive as a bare scalar one day and as a
/// `{value, unit}` or `{min, max}` record the next. Fields are kept as raw
/// JSON in feed order and only normalized at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForecastDay(Map<String, Value>);

impl ForecastDay {
    /// Look up a raw field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields in feed order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Fields to show in the detail card: feed order, icon carriers skipped.
    pub fn display_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(key, _)| !fields::is_icon_key(key))
    }

    /// The weather icon code, wherever the feed chose to put it this time.
    ///
    /// Accepts both numeric and numeric-string values.
    pub fn icon_code(&self) -> Option<u16> {
        fields::ICON_KEYS.iter().find_map(|key| {
            match self.0.get(*key)? {
                Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
                Value::String(s) => s.parse().ok(),
                _ => None,
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ForecastDay {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// A malformed list element (null, or not an object at all) becomes an empty
// day rather than failing the whole bulletin; it renders with no fields.
impl<'de> Deserialize<'de> for ForecastDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Ok(Self::default()),
        }
    }
}

/// The full forecast bulletin.
///
/// Both keys are optional upstream; a bulletin with no `weatherForecast`
/// behaves as an empty list.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedBulletin {
    #[serde(default)]
    pub general_situation: Option<String>,
    #[serde(default)]
    pub weather_forecast: Vec<ForecastDay>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use serde_json::json;

    fn day(value: Value) -> ForecastDay {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn preserves_field_order() {
        let day = day(json!({
            "forecastDate": "20241215",
            "week": "Sunday",
            "forecastWeather": "Sunny",
            "PSR": "Low"
        }));
        let keys: Vec<_> = day.fields().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["forecastDate", "week", "forecastWeather", "PSR"]);
    }

    #[test]
    fn null_list_element_becomes_empty_day() {
        let bulletin: FeedBulletin = serde_json::from_value(json!({
            "generalSituation": "Fine.",
            "weatherForecast": [null, {"week": "Monday"}, 42]
        }))
        .unwrap();
        assert_eq!(bulletin.weather_forecast.len(), 3);
        assert!(bulletin.weather_forecast[0].is_empty());
        assert!(!bulletin.weather_forecast[1].is_empty());
        assert!(bulletin.weather_forecast[2].is_empty());
    }

    #[test]
    fn missing_weather_forecast_is_empty_list() {
        let bulletin: FeedBulletin =
            serde_json::from_value(json!({"generalSituation": "Fine."})).unwrap();
        assert!(bulletin.weather_forecast.is_empty());
        assert_eq!(bulletin.general_situation.as_deref(), Some("Fine."));
    }

    #[test]
    fn missing_general_situation_is_none() {
        let bulletin: FeedBulletin =
            serde_json::from_value(json!({"weatherForecast": []})).unwrap();
        assert!(bulletin.general_situation.is_none());
    }

    #[test]
    fn icon_code_from_any_carrier_key() {
        assert_eq!(day(json!({"ForecastIcon": 51})).icon_code(), Some(51));
        assert_eq!(day(json!({"forecastIcon": 64})).icon_code(), Some(64));
        assert_eq!(day(json!({"icon": "63"})).icon_code(), Some(63));
        assert_eq!(day(json!({"WeatherIcon": 90})).icon_code(), Some(90));
        assert_eq!(day(json!({"week": "Sunday"})).icon_code(), None);
    }

    #[test]
    fn first_icon_carrier_wins() {
        let day = day(json!({"forecastIcon": 60, "ForecastIcon": 51}));
        assert_eq!(day.icon_code(), Some(51));
    }

    #[test]
    fn display_fields_skip_icon_carriers() {
        let day = day(json!({"week": "Sunday", "ForecastIcon": 51, "PSR": "Low"}));
        let keys: Vec<_> = day.display_fields().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["week", "PSR"]);
    }
}
