//! Mastery statistics

use chrono::{DateTime, Utc};

use super::algorithm::{is_due, is_mastered};
use super::models::{Flashcard, StatsReport};

/// Build the report, or `None` when there are no cards to report on
pub fn compute_stats(cards: &[Flashcard], now: DateTime<Utc>) -> Option<StatsReport> {
    let total_cards = cards.len();
    if total_cards == 0 {
        return None;
    }

    let mastered_cards = cards.iter().filter(|c| is_mastered(c)).count();
    let due_cards = cards.iter().filter(|c| is_due(c, now)).count();

    Some(StatsReport {
        total_cards,
        mastered_cards,
        mastery_percent: mastered_cards * 100 / total_cards,
        due_cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cards_with_counts(counts: &[u32]) -> Vec<Flashcard> {
        let t0 = DateTime::from_timestamp(1_000_000, 0).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let mut card = Flashcard::new(format!("w{}", i), format!("t{}", i), t0);
                card.correct_count = *count;
                card
            })
            .collect()
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_000_010, 0).unwrap()
    }

    #[test]
    fn test_no_cards() {
        assert_eq!(compute_stats(&[], now()), None);
    }

    #[test]
    fn test_percent_truncates() {
        let cards = cards_with_counts(&[3, 0, 1]);
        let stats = compute_stats(&cards, now()).unwrap();

        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.mastered_cards, 1);
        // 100 / 3 = 33.33...
        assert_eq!(stats.mastery_percent, 33);
        assert_eq!(stats.due_cards, 2);
    }

    #[test]
    fn test_all_mastered() {
        let cards = cards_with_counts(&[3, 4, 10]);
        let stats = compute_stats(&cards, now()).unwrap();

        assert_eq!(stats.mastered_cards, 3);
        assert_eq!(stats.mastery_percent, 100);
        assert_eq!(stats.due_cards, 0);
    }

    #[test]
    fn test_due_includes_expired_mastered_cards() {
        let cards = cards_with_counts(&[5, 5]);
        let later = now() + Duration::days(2);
        let stats = compute_stats(&cards, later).unwrap();

        assert_eq!(stats.mastered_cards, 2);
        assert_eq!(stats.due_cards, 2);
    }

    #[test]
    fn test_mastered_never_exceeds_total() {
        for n in 1..20u32 {
            let counts: Vec<u32> = (0..n).collect();
            let stats = compute_stats(&cards_with_counts(&counts), now()).unwrap();
            assert!(stats.mastered_cards <= stats.total_cards);
            assert_eq!(
                stats.mastery_percent,
                stats.mastered_cards * 100 / stats.total_cards
            );
        }
    }
}
