use crate::models::itinerary::{Activity, BudgetTier, Day, Itinerary, ItineraryRequest, TimeSlot};

fn slot_content(slot: TimeSlot) -> (&'static str, &'static str) {
    match slot {
        TimeSlot::Morning => ("City Exploration", "Explore the city's main attractions"),
        TimeSlot::Afternoon => ("Local Experience", "Experience local culture and cuisine"),
        TimeSlot::Evening => ("Entertainment", "Enjoy local entertainment"),
    }
}

/// Cost range for a slot at a budget tier.
pub fn slot_cost(slot: TimeSlot, budget: BudgetTier) -> &'static str {
    match (slot, budget) {
        (TimeSlot::Morning, BudgetTier::Cheap) => "$0-20",
        (TimeSlot::Morning, BudgetTier::Moderate) => "$30-50",
        (TimeSlot::Morning, BudgetTier::Luxury) => "$100+",
        (TimeSlot::Afternoon, BudgetTier::Cheap) => "$10-30",
        (TimeSlot::Afternoon, BudgetTier::Moderate) => "$40-60",
        (TimeSlot::Afternoon, BudgetTier::Luxury) => "$150+",
        (TimeSlot::Evening, BudgetTier::Cheap) => "$15-25",
        (TimeSlot::Evening, BudgetTier::Moderate) => "$50-70",
        (TimeSlot::Evening, BudgetTier::Luxury) => "$200+",
    }
}

/// Itinerary built without the model. Every day carries the same three activities;
/// only the day number changes.
pub fn fallback_itinerary(request: &ItineraryRequest) -> Itinerary {
    let budget = request.budget_tier();
    let activities = TimeSlot::ALL.map(|slot| {
        let (title, description) = slot_content(slot);
        Activity {
            time: slot,
            title: title.to_string(),
            description: description.to_string(),
            cost: slot_cost(slot, budget).to_string(),
        }
    });

    let days = (1..=request.day_count())
        .map(|day| Day {
            day,
            activities: activities.clone(),
        })
        .collect();

    Itinerary {
        city: request.destination().to_string(),
        num_days: request.day_count(),
        budget,
        days,
    }
}
