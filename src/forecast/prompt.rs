use crate::models::reading::Reading;

/// Forecast prompt. The model is asked for JSON only, in the shape
/// [`crate::forecast::Forecast`] deserializes.
pub fn build_forecast_prompt(reading: &Reading, location: &str, language: &str) -> String {
    format!(
        "Latest data: PM2.5 = {} µg/m³, Hardness = {} mg/L, Temp = {}°C, pH = {}, Location: {}\n\
         Predict PM2.5 and Hardness 6, 12 and 24 hours ahead,\n\
         and give a short recommendation in {}.\n\
         Answer with JSON only:\n\
         {{\n\
         \x20 \"forecast\": [{{\"hours\":6,\"pm25\":...,\"hardness\":...}}, ...],\n\
         \x20 \"alert\": \"alert message\",\n\
         \x20 \"recommend\": \"recommendation\"\n\
         }}\n",
        reading.pm25, reading.hardness, reading.temperature, reading.ph, location, language
    )
}

pub fn build_question_prompt(
    question: &str,
    reading: &Reading,
    location: &str,
    language: &str,
) -> String {
    format!(
        "You are an environmental expert in {location}. Answer briefly and in a friendly tone, in {language}: {}\n\
         Latest data: PM2.5={}, Hardness={} mg/L, Location: {location}",
        question.trim(),
        reading.pm25,
        reading.hardness,
    )
}
