use serde_json::Value;

use linguacards_lib::flashcards::{Flashcard, ReviewOutcome, StatsReport};

/// A card, with its due flag when known
pub fn card_value(card: &Flashcard, due: Option<bool>) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(card)?;
    if let (Some(due), Value::Object(map)) = (due, &mut value) {
        map.insert("due".to_string(), Value::Bool(due));
    }
    Ok(value)
}

/// The stats report. An empty set has no percentage.
pub fn stats_value(stats: Option<&StatsReport>) -> serde_json::Result<Value> {
    match stats {
        Some(report) => serde_json::to_value(report),
        None => Ok(serde_json::json!({
            "totalCards": 0,
            "masteredCards": 0,
            "masteryPercent": null,
            "dueCards": 0,
        })),
    }
}

pub fn outcome_value(outcome: &ReviewOutcome) -> serde_json::Result<Value> {
    serde_json::to_value(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    fn dog() -> Flashcard {
        let mut card = Flashcard::new(
            "dog".to_string(),
            "perro".to_string(),
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        );
        card.correct_count = 2;
        card
    }

    #[test]
    fn test_card_value() {
        let value = card_value(&dog(), None).unwrap();
        assert_eq!(value["front"], "dog");
        assert_eq!(value["back"], "perro");
        assert_eq!(value["correctCount"], 2);
        assert_eq!(value["lastReview"], "2023-11-14T22:13:20Z");
        assert!(value.get("due").is_none());
    }

    #[test]
    fn test_card_value_with_due_flag() {
        let value = card_value(&dog(), Some(true)).unwrap();
        assert_eq!(value["due"], true);
    }

    #[test]
    fn test_stats_value_no_cards() {
        let value = stats_value(None).unwrap();
        assert_eq!(
            value,
            json!({
                "totalCards": 0,
                "masteredCards": 0,
                "masteryPercent": null,
                "dueCards": 0,
            })
        );
    }

    #[test]
    fn test_stats_value_report() {
        let report = StatsReport {
            total_cards: 4,
            mastered_cards: 1,
            mastery_percent: 25,
            due_cards: 3,
        };
        assert_eq!(
            stats_value(Some(&report)).unwrap(),
            json!({
                "totalCards": 4,
                "masteredCards": 1,
                "masteryPercent": 25,
                "dueCards": 3,
            })
        );
    }

    #[test]
    fn test_outcome_value() {
        assert_eq!(
            outcome_value(&ReviewOutcome::NothingDue).unwrap(),
            json!({ "outcome": "nothingDue" })
        );
        assert_eq!(
            outcome_value(&ReviewOutcome::Completed { due: 3, reviewed: 2, correct: 1 }).unwrap(),
            json!({ "outcome": "completed", "due": 3, "reviewed": 2, "correct": 1 })
        );
    }
}
