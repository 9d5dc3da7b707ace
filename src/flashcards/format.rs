//! Plain-text card layout
//!
//! Each card is three lines:
//! ```text
//! <front>
//! <back>
//! <correct_count> <last_review_unix_secs>
//! ```
//!
//! Parsing is best effort. It stops at the first record that is truncated or
//! whose counter line does not hold two integers; that record and anything
//! after it are dropped without an error.

use chrono::DateTime;

use super::models::Flashcard;

/// Serialize cards in insertion order
pub fn render_cards(cards: &[Flashcard]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&card.front);
        out.push('\n');
        out.push_str(&card.back);
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            card.correct_count,
            card.last_review.timestamp()
        ));
    }
    out
}

/// Parse as many well-formed records as the content holds
pub fn parse_cards(content: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut lines = content.lines();

    while let Some(front) = lines.next() {
        let Some(back) = lines.next() else {
            log::warn!("Dropping truncated record {:?} (missing answer)", front);
            break;
        };
        let Some(counters) = lines.next() else {
            log::warn!("Dropping truncated record {:?} (missing counters)", front);
            break;
        };
        let Some((correct_count, last_review)) = parse_counters(counters) else {
            log::warn!("Dropping malformed record {:?}: {:?}", front, counters);
            break;
        };

        cards.push(Flashcard {
            front: front.to_string(),
            back: back.to_string(),
            correct_count,
            last_review,
        });
    }

    cards
}

fn parse_counters(line: &str) -> Option<(u32, chrono::DateTime<chrono::Utc>)> {
    let mut parts = line.split_whitespace();
    let count = parts.next()?.parse::<u32>().ok()?;
    let secs = parts.next()?.parse::<i64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let last_review = DateTime::from_timestamp(secs, 0)?;
    Some((count, last_review))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(front: &str, back: &str, count: u32, secs: i64) -> Flashcard {
        Flashcard {
            front: front.to_string(),
            back: back.to_string(),
            correct_count: count,
            last_review: DateTime::from_timestamp(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_render_layout() {
        let cards = vec![card("dog", "perro", 0, 1_700_000_000), card("cat", "gato", 4, 1_700_000_500)];
        assert_eq!(
            render_cards(&cards),
            "dog\nperro\n0 1700000000\ncat\ngato\n4 1700000500\n"
        );
    }

    #[test]
    fn test_render_then_parse_preserves_order() {
        let cards = vec![
            card("house", "casa", 2, 1_700_000_000),
            card("dog", "perro", 0, 1_600_000_000),
            card("dog", "can", 9, 1_650_000_000),
            card("two words", "dos palabras", 1, 0),
        ];

        assert_eq!(parse_cards(&render_cards(&cards)), cards);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_cards("").is_empty());
    }

    #[test]
    fn test_parse_drops_truncated_trailing_record() {
        let content = "dog\nperro\n1 1700000000\ncat\ngato\n";
        let cards = parse_cards(content);

        assert_eq!(cards, vec![card("dog", "perro", 1, 1_700_000_000)]);
    }

    #[test]
    fn test_parse_drops_record_with_only_front() {
        let cards = parse_cards("dog\nperro\n1 1700000000\ncat");
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_parse_stops_at_malformed_counters() {
        let content = "dog\nperro\nthree 1700000000\ncat\ngato\n0 1700000000\n";
        assert!(parse_cards(content).is_empty());

        let content = "dog\nperro\n2 1700000000\ncat\ngato\n-1 1700000000\n";
        assert_eq!(parse_cards(content).len(), 1);
    }

    #[test]
    fn test_parse_accepts_crlf_and_extra_spacing() {
        let content = "dog\r\nperro\r\n  3   1700000000 \r\n";
        assert_eq!(parse_cards(content), vec![card("dog", "perro", 3, 1_700_000_000)]);
    }

    #[test]
    fn test_parse_keeps_inner_whitespace_of_text() {
        let content = " el perro \nthe  dog\n0 1\n";
        let cards = parse_cards(content);
        assert_eq!(cards[0].front, " el perro ");
        assert_eq!(cards[0].back, "the  dog");
    }
}
