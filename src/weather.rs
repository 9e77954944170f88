//! Current weather at an observer's location.
//!
//! The solar calculator does not depend on this module. It only fixes the shape of a
//! weather report so a position and the conditions at the same place can be presented
//! together. Fetching the report is left to a [`WeatherProvider`] implementation.

/// Weather conditions reported for a location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherCondition {
    /// Name of the reporting city
    pub city: String,
    /// Air temperature in degrees Celsius
    pub temperature_celsius: f64,
    /// Free-text sky condition, e.g. "Partly Cloudy"
    pub condition: String,
    /// Free-text wind report, e.g. "Wind: W at 14 km/h"
    pub wind_condition: String,
    /// Free-text humidity report, e.g. "Humidity: 62%"
    pub humidity: String,
}

/// Source of current weather conditions.
///
/// Lookups are best effort: any failure is reported as `None`.
pub trait WeatherProvider {
    /// Current conditions at the given coordinates in degrees.
    fn current_conditions(&self, latitude: f64, longitude: f64) -> Option<WeatherCondition>;
}

impl<P: WeatherProvider + ?Sized> WeatherProvider for &P {
    fn current_conditions(&self, latitude: f64, longitude: f64) -> Option<WeatherCondition> {
        (**self).current_conditions(latitude, longitude)
    }
}
