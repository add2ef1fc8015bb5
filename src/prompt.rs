//! Plan request validation and prompt construction
//!
//! Turns a validated [`TravelRequest`] into the deterministic natural
//! language prompt and the fixed generation parameters sent to the Gemini
//! API. Pure functions only; nothing here touches the network.

use serde::Serialize;

use crate::Result;
use crate::error::GezginError;
use crate::models::TravelRequest;

/// Sampling parameters sent with every plan request
///
/// Constants of the system, not user-configurable. Serializes to the
/// camelCase `generationConfig` object the Gemini API expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// The fixed configuration used for every request, biased toward
    /// well-formed structured output.
    pub const FIXED: GenerationParams = GenerationParams {
        temperature: 0.9,
        top_k: 1,
        top_p: 1.0,
        max_output_tokens: 4096,
    };
}

/// The JSON document shape the model is instructed to fill in
const RESPONSE_TEMPLATE: &str = r#"{
  "cityName": "şehir adı",
  "countryName": "ülke adı",
  "travelDates": "tarih aralığı (Örn: 15-20 Mart 2024)",
  "tripImageUrl": "https://images.pexels.com/photos/[şehir ile ilgili uygun fotoğraf ID]/pexels-photo.jpeg",
  "dailyItinerary": [
    {
      "day": 1,
      "title": "Günün başlığı",
      "activities": [
        {
          "time": "09:00",
          "name": "Aktivite adı",
          "description": "Aktivite açıklaması",
          "imageUrl": "https://images.pexels.com/photos/[ID]/pexels-photo.jpeg",
          "details": ["detay 1", "detay 2"]
        }
      ]
    }
  ],
  "localCuisine": [
    {
      "name": "Yemek adı",
      "description": "Yemek açıklaması",
      "imageUrl": "https://images.pexels.com/photos/[ID]/pexels-photo.jpeg"
    }
  ],
  "importantNotes": ["not 1", "not 2"],
  "weatherForecast": [
    {
      "date": "15 Mart",
      "dayOfWeek": "Pazartesi",
      "temperature": "22°C",
      "condition": "Güneşli",
      "icon": "SUNNY",
      "hourly": [
        {
          "time": "09:00",
          "temperature": "18°C",
          "icon": "SUNNY"
        }
      ]
    }
  ]
}"#;

/// Validate a travel request before any prompt is built.
///
/// Collects every missing field into a single [`GezginError::Validation`]
/// so the user can fix the whole form in one pass. No network call is made
/// for an invalid request.
pub fn validate(request: &TravelRequest) -> Result<()> {
    let mut missing = Vec::new();

    if request.destinations.is_empty() {
        missing.push("at least one destination".to_string());
    }
    for (index, destination) in request.destinations.iter().enumerate() {
        if destination.country.trim().is_empty() {
            missing.push(format!("destination {} country", index + 1));
        }
        if destination.city.trim().is_empty() {
            missing.push(format!("destination {} city", index + 1));
        }
    }
    if request.start_date.trim().is_empty() {
        missing.push("start date".to_string());
    }
    if request.end_date.trim().is_empty() {
        missing.push("end date".to_string());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GezginError::validation(format!(
            "missing {}",
            missing.join(", ")
        )))
    }
}

/// Build the plan prompt for a request.
///
/// Guards with [`validate`], then produces a deterministic prompt that
/// names every destination and the transport mode, spells out the expected
/// JSON schema, and instructs the model to answer with the JSON document
/// only.
pub fn build_prompt(request: &TravelRequest) -> Result<String> {
    validate(request)?;

    let destinations_text = request
        .destinations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ve ");

    Ok(format!(
        "Sen bir profesyonel seyahat planlamacısısın. {destinations} için {start} ile {end} \
         tarihleri arasında {transport} ile yapılacak bir seyahat planı oluştur.\n\
         \n\
         Lütfen aşağıdaki JSON formatında bir plan oluştur:\n\
         \n\
         {template}\n\
         \n\
         Sadece JSON formatında yanıt ver, başka açıklama ekleme. \
         Tüm imageUrl alanları için gerçek Pexels fotoğraf URL'leri kullan.",
        destinations = destinations_text,
        start = request.start_date,
        end = request.end_date,
        transport = request.transport,
        template = RESPONSE_TEMPLATE,
    ))
}
