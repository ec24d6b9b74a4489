use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripError;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Please provide all required fields: city, days, and budget";
pub const INVALID_DAYS_MESSAGE: &str = "Please provide a valid number of days";
pub const INVALID_BUDGET_MESSAGE: &str =
    "Please provide a valid budget: cheap, moderate, or luxury";

/// Longest trip a single request may ask for. Larger counts are rejected with
/// `INVALID_DAYS_MESSAGE` before any prompt or fallback is built.
pub const MAX_DAYS: u32 = 30;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Cheap,
    Moderate,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Cheap => "cheap",
            BudgetTier::Moderate => "moderate",
            BudgetTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cheap" => Ok(BudgetTier::Cheap),
            "moderate" => Ok(BudgetTier::Moderate),
            "luxury" => Ok(BudgetTier::Luxury),
            _ => Err(TripError::invalid(INVALID_BUDGET_MESSAGE)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Canonical order of the slots within a day.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Activity {
    pub time: TimeSlot,
    pub title: String,
    pub description: String,
    pub cost: String, // Free-form, e.g. "$30-50"
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Day {
    pub day: u32,
    pub activities: [Activity; 3],
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub city: String,
    #[serde(rename = "numDays")]
    pub num_days: u32,
    pub budget: BudgetTier,
    pub days: Vec<Day>,
}

/// A validated request for an itinerary. Only `ItineraryRequest::new` builds one,
/// so the day count that drives the generators is always within `1..=MAX_DAYS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    destination: String,
    day_count: u32,
    budget_tier: BudgetTier,
}

impl ItineraryRequest {
    pub fn new(
        destination: impl Into<String>,
        day_count: u32,
        budget_tier: BudgetTier,
    ) -> Result<Self, TripError> {
        let destination = destination.into().trim().to_string();
        if destination.is_empty() {
            return Err(TripError::invalid(MISSING_FIELDS_MESSAGE));
        }
        if !(1..=MAX_DAYS).contains(&day_count) {
            return Err(TripError::invalid(INVALID_DAYS_MESSAGE));
        }

        Ok(Self {
            destination,
            day_count,
            budget_tier,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn budget_tier(&self) -> BudgetTier {
        self.budget_tier
    }
}

/*
    Body of POST /api/trip/generate. `days` arrives either as a number or as a
    numeric string depending on the client.
*/
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct GenerateTripInput {
    pub city: Option<String>,
    pub days: Option<serde_json::Value>,
    pub budget: Option<String>,
}

impl GenerateTripInput {
    pub fn into_request(self) -> Result<ItineraryRequest, TripError> {
        let city = self
            .city
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| TripError::invalid(MISSING_FIELDS_MESSAGE))?;
        let days = self
            .days
            .filter(|d| !is_blank_value(d))
            .ok_or_else(|| TripError::invalid(MISSING_FIELDS_MESSAGE))?;
        let budget = self
            .budget
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| TripError::invalid(MISSING_FIELDS_MESSAGE))?;

        let day_count = parse_day_count(&days)?;
        let budget_tier = budget.parse::<BudgetTier>()?;

        ItineraryRequest::new(city, day_count, budget_tier)
    }
}

// `0` and `false` count as absent, like an empty string
fn is_blank_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => true,
        serde_json::Value::String(s) => s.trim().is_empty(),
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Accepts an integer in `1..=MAX_DAYS` given as a JSON number or a numeric string.
pub fn parse_day_count(value: &serde_json::Value) -> Result<u32, TripError> {
    let parsed = match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                    .map(|f| f as i64)
            }
        }
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|d| u32::try_from(d).ok())
        .filter(|d| (1..=MAX_DAYS).contains(d))
        .ok_or_else(|| TripError::invalid(INVALID_DAYS_MESSAGE))
}
