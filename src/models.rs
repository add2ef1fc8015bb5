//! Data models for travel requests, itinerary plans, and the expense ledger
//!
//! This module contains the data structures exchanged between the prompt
//! builder, the Gemini client, the response parser, and the application
//! state. Wire names on plan documents are camelCase to match the JSON
//! schema the model is instructed to produce.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transport labels offered by the form. A suggestion set only; the
/// request accepts any free-form label.
pub const TRANSPORT_OPTIONS: [&str; 4] = ["Uçak", "Tren", "Otobüs", "Araba"];

/// A single stop on the requested trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Country name as entered by the user
    pub country: String,
    /// City name as entered by the user
    pub city: String,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

/// Trip parameters collected from the user, consumed once per plan request
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelRequest {
    /// Ordered stops; must be non-empty with non-empty country and city
    pub destinations: Vec<Destination>,
    /// Start date display string (required, format not enforced)
    pub start_date: String,
    /// End date display string (required; ordering against the start date
    /// is advisory only)
    pub end_date: String,
    /// Transport label, usually one of [`TRANSPORT_OPTIONS`]
    pub transport: String,
}

/// Map coordinates
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Map coordinates tagged with the city they belong to
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityLocation {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

/// A source the model grounded its answer on
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// One scheduled activity inside a day plan
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Display time, e.g. "09:00"
    pub time: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Free-form detail lines
    pub details: Vec<String>,
    /// Map position when the model provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Itinerary for a single day of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyPlan {
    /// 1-based day number; uniqueness and contiguity are advisory
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
}

/// A local dish recommendation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalCuisine {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// Weather condition icons the renderer understands
///
/// Values outside the closed set deserialize to [`WeatherIconType::Cloudy`],
/// the generic cloud the renderer falls back to. The icon is a rendering
/// hint, never a reason to reject a plan.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherIconType {
    Sunny,
    PartlyCloudy,
    Rainy,
    Snowy,
    Thunderstorm,
    Foggy,
    #[default]
    #[serde(other)]
    Cloudy,
}

/// Forecast for a single hour of a day
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HourlyForecast {
    /// Display time, e.g. "09:00"
    pub time: String,
    /// Display temperature, e.g. "18°C"
    pub temperature: String,
    pub icon: WeatherIconType,
}

/// Forecast for a single day of the trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    /// Display date, e.g. "15 Mart"
    pub date: String,
    pub day_of_week: String,
    pub temperature: String,
    /// Human-readable condition, e.g. "Güneşli"
    pub condition: String,
    pub icon: WeatherIconType,
    pub hourly: Vec<HourlyForecast>,
}

/// The itinerary document produced wholesale by the plan client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlan {
    pub city_name: String,
    pub country_name: String,
    /// Display date range, e.g. "15-20 Mart 2024"
    pub travel_dates: String,
    pub trip_image_url: String,
    /// Ordered day plans; day numbers should run contiguously from 1
    pub daily_itinerary: Vec<DailyPlan>,
    pub local_cuisine: Vec<LocalCuisine>,
    /// May be empty
    pub important_notes: Vec<String>,
    pub weather_forecast: Vec<WeatherForecast>,
    /// Per-city map coordinates when the model provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<CityLocation>>,
    /// Sources the model grounded the plan on, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding_sources: Option<Vec<GroundingSource>>,
}

impl TravelPlan {
    /// Check the advisory day-numbering invariant: unique values forming a
    /// contiguous range starting at 1. Violations are reported, not
    /// rejected.
    #[must_use]
    pub fn has_contiguous_days(&self) -> bool {
        let mut days: Vec<u32> = self.daily_itinerary.iter().map(|d| d.day).collect();
        days.sort_unstable();
        days.dedup();
        days.len() == self.daily_itinerary.len()
            && days.first() == Some(&1)
            && days.last() == Some(&(days.len() as u32))
    }
}

/// Direction of a ledger entry
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Income,
    Expense,
}

/// Closed expense category set, serialized with the display labels the
/// original form uses
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCategory {
    #[serde(rename = "Konaklama")]
    Accommodation,
    #[serde(rename = "Yemek")]
    Food,
    #[serde(rename = "Ulaşım")]
    Transport,
    #[serde(rename = "Eğlence")]
    Entertainment,
    #[serde(rename = "Alışveriş")]
    Shopping,
    #[serde(rename = "Diğer")]
    Other,
}

impl ExpenseCategory {
    /// Display label, matching the wire value
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "Konaklama",
            ExpenseCategory::Food => "Yemek",
            ExpenseCategory::Transport => "Ulaşım",
            ExpenseCategory::Entertainment => "Eğlence",
            ExpenseCategory::Shopping => "Alışveriş",
            ExpenseCategory::Other => "Diğer",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the trip expense ledger
///
/// Entries are appended and removed by id, never mutated in place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    /// Unique within the session, assigned by the ledger at creation
    pub id: u64,
    pub description: String,
    /// Non-negative amount
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    /// Present only for [`ExpenseKind::Expense`] entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    pub created_at: DateTime<Utc>,
}

impl ExpenseItem {
    /// Format the amount with the entry's sign, e.g. "-100.00"
    #[must_use]
    pub fn signed_amount(&self) -> String {
        match self.kind {
            ExpenseKind::Income => format!("+{:.2}", self.amount),
            ExpenseKind::Expense => format!("-{:.2}", self.amount),
        }
    }
}
