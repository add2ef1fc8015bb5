//! Integration tests for the plan request flow
//!
//! Drive the full submit -> generate -> parse -> results -> expenses loop
//! the way the rendering layer does, with a stub generator standing in for
//! the network.

use async_trait::async_trait;
use rstest::rstest;

use gezgin::{
    Destination, ExpenseCategory, ExpenseKind, GezginError, PlanGenerator, Planner, TravelPlan,
    TravelRequest, View, WeatherIconType, parse_plan,
};

/// A model reply the way Gemini actually returns it: fenced JSON inside
/// chatty prose.
const CANNED_REPLY: &str = r#"Elbette! İşte seyahat planınız:

```json
{
  "cityName": "Roma",
  "countryName": "İtalya",
  "travelDates": "15-20 Mart 2024",
  "tripImageUrl": "https://images.pexels.com/photos/2064827/pexels-photo.jpeg",
  "dailyItinerary": [
    {
      "day": 1,
      "title": "Antik Roma",
      "activities": [
        {
          "time": "09:00",
          "name": "Kolezyum",
          "description": "Antik amfitiyatro turu",
          "imageUrl": "https://images.pexels.com/photos/2064828/pexels-photo.jpeg",
          "details": ["Bilet önceden alınmalı", "Rehberli tur önerilir"]
        }
      ]
    },
    {
      "day": 2,
      "title": "Vatikan",
      "activities": []
    }
  ],
  "localCuisine": [
    {
      "name": "Carbonara",
      "description": "Klasik Roma makarnası",
      "imageUrl": "https://images.pexels.com/photos/2064829/pexels-photo.jpeg"
    }
  ],
  "importantNotes": ["Pazartesi müzeler kapalı"],
  "weatherForecast": [
    {
      "date": "15 Mart",
      "dayOfWeek": "Cuma",
      "temperature": "18°C",
      "condition": "Güneşli",
      "icon": "SUNNY",
      "hourly": [
        {"time": "09:00", "temperature": "14°C", "icon": "HAIL"}
      ]
    }
  ]
}
```

İyi yolculuklar!"#;

/// Stand-in for the Gemini client: parses a canned reply or fails with a
/// transport error, without touching the network.
struct StubGenerator {
    fail: bool,
}

#[async_trait]
impl PlanGenerator for StubGenerator {
    async fn generate_plan(&self, request: &TravelRequest) -> gezgin::Result<TravelPlan> {
        gezgin::build_prompt(request)?;
        if self.fail {
            return Err(GezginError::transport("stub: endpoint unreachable"));
        }
        parse_plan(CANNED_REPLY)
    }
}

fn request() -> TravelRequest {
    TravelRequest {
        destinations: vec![Destination {
            country: "İtalya".to_string(),
            city: "Roma".to_string(),
        }],
        start_date: "2024-03-15".to_string(),
        end_date: "2024-03-20".to_string(),
        transport: "Uçak".to_string(),
    }
}

/// The whole happy path: form to results to the ledger and back to a
/// clean form.
#[tokio::test]
async fn test_full_plan_and_expense_flow() {
    let generator = StubGenerator { fail: false };
    let mut planner = Planner::new();

    assert_eq!(planner.view(), View::Form);
    assert!(planner.submit());
    assert_eq!(planner.view(), View::Loading);

    let outcome = generator.generate_plan(&request()).await;
    planner.finish(outcome);

    assert_eq!(planner.view(), View::Results);
    let plan = planner.plan().expect("plan should be present");
    assert_eq!(plan.city_name, "Roma");
    assert_eq!(plan.daily_itinerary.len(), 2);
    assert!(plan.has_contiguous_days());
    // The unknown hourly icon was coerced, not rejected.
    assert_eq!(
        plan.weather_forecast[0].hourly[0].icon,
        WeatherIconType::Cloudy
    );

    planner.show_expenses();
    assert_eq!(planner.view(), View::Expenses);

    planner.add_expense(
        "Hotel",
        100.0,
        ExpenseKind::Expense,
        Some(ExpenseCategory::Accommodation),
    );
    planner.add_expense("Salary", 500.0, ExpenseKind::Income, None);
    let totals = planner.totals();
    assert_eq!(totals.income, 500.0);
    assert_eq!(totals.expense, 100.0);
    assert_eq!(totals.balance, 400.0);

    planner.back();
    assert_eq!(planner.view(), View::Results);

    planner.reset();
    assert_eq!(planner.view(), View::Form);
    assert!(planner.plan().is_none());
    assert!(planner.expenses().is_empty());
}

/// A transport failure lands back on the form with a display message and
/// leaves the results views unreachable.
#[tokio::test]
async fn test_failed_request_returns_to_form() {
    let generator = StubGenerator { fail: true };
    let mut planner = Planner::new();

    planner.submit();
    let outcome = generator.generate_plan(&request()).await;
    planner.finish(outcome);

    assert_eq!(planner.view(), View::Form);
    assert!(planner.plan().is_none());
    let message = planner.error().expect("error message should be attached");
    assert!(message.contains("tekrar deneyin"), "got: {message}");

    planner.show_expenses();
    assert_eq!(planner.view(), View::Form);
}

/// Invalid requests never reach the generator's network path.
#[rstest]
#[case::empty_city("", "İtalya")]
#[case::empty_country("Roma", "")]
#[tokio::test]
async fn test_invalid_request_is_rejected_before_generation(
    #[case] city: &str,
    #[case] country: &str,
) {
    let generator = StubGenerator { fail: false };
    let mut req = request();
    req.destinations[0] = Destination {
        country: country.to_string(),
        city: city.to_string(),
    };

    let err = generator.generate_plan(&req).await.unwrap_err();
    assert!(matches!(err, GezginError::Validation { .. }));
}

/// A failure, then a successful resubmission, recovers completely.
#[tokio::test]
async fn test_resubmit_after_failure_recovers() {
    let mut planner = Planner::new();

    planner.submit();
    planner.finish(
        StubGenerator { fail: true }
            .generate_plan(&request())
            .await,
    );
    assert_eq!(planner.view(), View::Form);
    assert!(planner.error().is_some());

    planner.submit();
    assert!(planner.error().is_none());
    planner.finish(
        StubGenerator { fail: false }
            .generate_plan(&request())
            .await,
    );
    assert_eq!(planner.view(), View::Results);
    assert!(planner.plan().is_some());
}
