//! Forecast feed access for ninedays
//!
//! Fetches the Hong Kong Observatory 9-day forecast bulletin, normalizes
//! its mixed-shape fields into display strings, and provides a bounded
//! cursor over the forecast list.

pub mod client;
pub mod error;
pub mod fields;
pub mod format;
pub mod navigator;
pub mod types;

pub use client::{endpoint_for_lang, FeedClient, DEFAULT_ENDPOINT};
pub use error::FeedError;
pub use fields::{field_label, weather_icon, FieldKind, WeatherIcon};
pub use format::format_field;
pub use navigator::ForecastNavigator;
pub use types::{FeedBulletin, ForecastDay};
