use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of daily records in a forecast window.
pub const FORECAST_DAYS: usize = 7;

/// Number of hourly records attached to each day.
pub const HOURLY_SLOTS: usize = 8;

/// First hour of the hourly strip ("8:00").
pub const FIRST_HOUR: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    PartlyCloudy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::PartlyCloudy => "Partly Cloudy",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Sunny,
            Condition::Cloudy,
            Condition::Rainy,
            Condition::PartlyCloudy,
        ]
    }

    pub fn icon(&self) -> ConditionIcon {
        ConditionIcon::for_label(self.as_str())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to a condition in the card, carousel and hourly strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionIcon {
    Sun,
    Cloud,
    CloudRain,
    /// Lighter cloud used for "Partly Cloudy".
    CloudGray,
}

impl ConditionIcon {
    /// Fixed label-to-icon table. Labels that name no known condition fall
    /// back to the sun icon.
    pub fn for_label(label: &str) -> Self {
        match label {
            "Sunny" => ConditionIcon::Sun,
            "Cloudy" => ConditionIcon::Cloud,
            "Rainy" => ConditionIcon::CloudRain,
            "Partly Cloudy" => ConditionIcon::CloudGray,
            _ => ConditionIcon::Sun,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConditionIcon::Sun => "sun",
            ConditionIcon::Cloud => "cloud",
            ConditionIcon::CloudRain => "cloud-rain",
            ConditionIcon::CloudGray => "cloud-gray",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionIcon::Sun => "☀",
            ConditionIcon::Cloud => "☁",
            ConditionIcon::CloudRain => "🌧",
            ConditionIcon::CloudGray => "⛅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Hour label such as "8:00".
    pub time: String,
    pub temperature_c: i32,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub is_today: bool,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub condition: Condition,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub precipitation_pct: u8,
    pub hourly: Vec<HourlyForecast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_labels() {
        let labels: Vec<&str> = Condition::all().iter().map(Condition::as_str).collect();
        assert_eq!(labels, ["Sunny", "Cloudy", "Rainy", "Partly Cloudy"]);
        assert_eq!(Condition::PartlyCloudy.to_string(), "Partly Cloudy");
    }

    #[test]
    fn icon_table_matches_conditions() {
        assert_eq!(Condition::Sunny.icon(), ConditionIcon::Sun);
        assert_eq!(Condition::Cloudy.icon(), ConditionIcon::Cloud);
        assert_eq!(Condition::Rainy.icon(), ConditionIcon::CloudRain);
        assert_eq!(Condition::PartlyCloudy.icon(), ConditionIcon::CloudGray);
    }

    #[test]
    fn unrecognized_label_falls_back_to_sun() {
        assert_eq!(ConditionIcon::for_label("Foggy"), ConditionIcon::Sun);
        assert_eq!(ConditionIcon::for_label(""), ConditionIcon::Sun);
        // the table is exact on labels
        assert_eq!(ConditionIcon::for_label("cloudy"), ConditionIcon::Sun);
    }

    #[test]
    fn plain_names_match_serialized_icons() {
        let icons = [
            ConditionIcon::Sun,
            ConditionIcon::Cloud,
            ConditionIcon::CloudRain,
            ConditionIcon::CloudGray,
        ];

        for icon in icons {
            let json = serde_json::to_value(icon).expect("icon serializes");
            assert_eq!(json.as_str(), Some(icon.name()));
        }
    }
}
