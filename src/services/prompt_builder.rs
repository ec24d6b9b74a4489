use crate::models::itinerary::ItineraryRequest;

const ITINERARY_SHAPE: &str = r#"{
  "days": [
    {
      "day": 1,
      "activities": [
        {
          "time": "Morning",
          "title": "Activity Name",
          "description": "Brief activity description",
          "cost": "Estimated cost"
        },
        {
          "time": "Afternoon",
          "title": "Activity Name",
          "description": "Brief activity description",
          "cost": "Estimated cost"
        },
        {
          "time": "Evening",
          "title": "Activity Name",
          "description": "Brief activity description",
          "cost": "Estimated cost"
        }
      ]
    }
  ]
}"#;

/// Instruction asking the model for a JSON itinerary in the shape the normalizer reads.
pub fn build_itinerary_prompt(request: &ItineraryRequest) -> String {
    let days = request.day_count();
    let plural = if days == 1 { "" } else { "s" };

    format!(
        "Create a {days}-day travel itinerary for {city} with {budget} budget. \
Format the response as a JSON object with this exact structure:
{shape}

Important:
1. Return ONLY valid JSON, no additional text or markdown
2. Include exactly {days} day{plural} in the \"days\" array
3. Include exactly 3 activities per day (Morning, Afternoon, Evening)
4. Keep descriptions concise
5. Include realistic costs based on the {budget} budget level
6. Make sure the JSON is properly formatted with no trailing commas",
        days = days,
        plural = plural,
        city = request.destination(),
        budget = request.budget_tier(),
        shape = ITINERARY_SHAPE,
    )
}

pub fn build_chat_prompt(message: &str) -> String {
    format!(
        "You are a helpful travel assistant. The user has asked: \"{}\".
Provide a helpful, concise response focusing on travel advice, recommendations, or trip planning.
Format your response in a clean, readable way:
- Use bullet points (•) instead of asterisks (*)
- Use proper spacing and line breaks
- Keep paragraphs short and readable
- Use emojis sparingly to make the response more engaging
- Keep your response under 200 words
- Make it engaging and informative",
        message.trim()
    )
}
