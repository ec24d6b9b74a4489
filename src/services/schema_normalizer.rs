//! Repairs a model's JSON answer into a complete `Itinerary`.
//!
//! Parsing is two-phase: the text is first deserialized into a `days` list of JSON
//! objects (the only step that can reject the response outright), then every day is
//! rebuilt slot by slot from known field names so the result always has the fixed shape.

use serde::Deserialize;
use thiserror::Error;

use crate::models::itinerary::{Activity, Day, Itinerary, ItineraryRequest, TimeSlot};

const PLACEHOLDER_COST: &str = "Varies";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed model response: {0}")]
pub struct MalformedResponse(pub String);

type Fields = serde_json::Map<String, serde_json::Value>;

// Each key list is read in order; the first non-blank value wins
const ACTIVITY_LIST_KEYS: [&str; 2] = ["activities", "schedule"];
const TIME_KEYS: [&str; 5] = ["time", "timeSlot", "time_slot", "slot", "period"];
const TITLE_KEYS: [&str; 3] = ["title", "name", "activity"];
const DESCRIPTION_KEYS: [&str; 3] = ["description", "details", "summary"];
const COST_KEYS: [&str; 4] = ["cost", "price", "estimatedCost", "estimated_cost"];

#[derive(Debug, Deserialize)]
struct RawItinerary {
    days: Vec<Fields>,
}

fn parse_raw(text: &str) -> Result<RawItinerary, MalformedResponse> {
    let first_error = match serde_json::from_str::<RawItinerary>(text) {
        Ok(raw) => return Ok(raw),
        Err(e) => e,
    };

    // Second chance for an object wrapped in prose
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(raw) = serde_json::from_str::<RawItinerary>(&text[start..=end]) {
                return Ok(raw);
            }
        }
    }

    Err(MalformedResponse(first_error.to_string()))
}

// Scalars become text (a cost of 45 reads as "45"); null, arrays, objects and blank
// strings count as missing
fn lenient_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field_text(fields: &Fields, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(lenient_text)
}

fn activity_list(day: &Fields) -> Vec<&Fields> {
    ACTIVITY_LIST_KEYS
        .iter()
        .filter_map(|key| day.get(*key))
        .find_map(|value| value.as_array())
        .map(|entries| entries.iter().filter_map(|entry| entry.as_object()).collect())
        .unwrap_or_default()
}

fn placeholder_text(slot: TimeSlot) -> (&'static str, &'static str) {
    match slot {
        TimeSlot::Morning => ("Morning Activity", "Explore the city"),
        TimeSlot::Afternoon => ("Afternoon Activity", "Local experience"),
        TimeSlot::Evening => ("Evening Activity", "Night entertainment"),
    }
}

/// First activity whose time label contains the slot name, ignoring case.
/// "Morning/Afternoon combo" matches both slots. This is a heuristic, not a classifier.
fn find_slot<'a>(slot: TimeSlot, activities: &[&'a Fields]) -> Option<&'a Fields> {
    let needle = slot.as_str().to_lowercase();
    activities.iter().copied().find(|activity| {
        field_text(activity, &TIME_KEYS).is_some_and(|time| time.to_lowercase().contains(&needle))
    })
}

fn normalize_activity(slot: TimeSlot, activities: &[&Fields]) -> Activity {
    let (default_title, default_description) = placeholder_text(slot);
    let missing = Fields::new();
    let raw = find_slot(slot, activities).unwrap_or(&missing);

    Activity {
        time: slot,
        title: field_text(raw, &TITLE_KEYS).unwrap_or_else(|| default_title.to_string()),
        description: field_text(raw, &DESCRIPTION_KEYS)
            .unwrap_or_else(|| default_description.to_string()),
        cost: field_text(raw, &COST_KEYS).unwrap_or_else(|| PLACEHOLDER_COST.to_string()),
    }
}

fn normalize_day(day_number: u32, raw: &Fields) -> Day {
    let activities = activity_list(raw);

    Day {
        day: day_number,
        activities: TimeSlot::ALL.map(|slot| normalize_activity(slot, &activities)),
    }
}

/// Builds an itinerary with exactly `request.day_count()` days from sanitized model text.
///
/// Day numbers come from position, never from the payload. A response with fewer days
/// than requested is rejected rather than padded; extra days are dropped.
pub fn normalize_itinerary(
    text: &str,
    request: &ItineraryRequest,
) -> Result<Itinerary, MalformedResponse> {
    let raw = parse_raw(text)?;
    let wanted = request.day_count() as usize;

    if raw.days.len() < wanted {
        return Err(MalformedResponse(format!(
            "expected {} days, response had {}",
            wanted,
            raw.days.len()
        )));
    }

    let days = raw
        .days
        .into_iter()
        .take(wanted)
        .zip(1..)
        .map(|(day, number)| normalize_day(number, &day))
        .collect();

    Ok(Itinerary {
        city: request.destination().to_string(),
        num_days: request.day_count(),
        budget: request.budget_tier(),
        days,
    })
}
