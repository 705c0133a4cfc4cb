//! Personality quiz scoring: point weights, types, and pure scoring logic.
//!
//! Maps a list of answered questions onto a four-category point tally, then
//! derives each category's percentage share and the primary personality
//! (the highest-scoring category).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Point weights
// ---------------------------------------------------------------------------

/// Points awarded to every listed category for a single-choice answer.
pub const SINGLE_POINTS: i32 = 6;
/// Points awarded to every listed category for a tie (multi-select) answer.
pub const TIE_POINTS: i32 = 3;
/// Points awarded to the first-ranked category of a ranked answer.
pub const RANK_FIRST_POINTS: i32 = 4;
/// Points awarded to the second-ranked category of a ranked answer.
pub const RANK_SECOND_POINTS: i32 = 2;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// One of the four fixed personality categories.
///
/// Declaration order doubles as the deterministic tie-break order: when two
/// categories share the maximum point total, the earlier one wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 4] = [Category::A, Category::B, Category::C, Category::D];

    /// Parse a category from its single-letter wire code.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "A" => Ok(Category::A),
            "B" => Ok(Category::B),
            "C" => Ok(Category::C),
            "D" => Ok(Category::D),
            other => Err(CoreError::InvalidData(format!(
                "Unknown personality category '{other}'. Must be one of: A, B, C, D"
            ))),
        }
    }

    /// Single-letter code used in API payloads and the database.
    pub fn code(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }
}

// ---------------------------------------------------------------------------
// Answer types
// ---------------------------------------------------------------------------

/// How a question's listed categories are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerType {
    /// Single choice: +6 to every listed category.
    Single,
    /// Tie / multi-select: +3 to every listed category.
    Tie,
    /// Ranked: +4 to the first listed category, +2 to the second.
    Rank,
}

impl AnswerType {
    /// Parse an answer type from its integer wire code (0, 1, or 2).
    pub fn from_code(code: i16) -> Result<Self, CoreError> {
        match code {
            0 => Ok(AnswerType::Single),
            1 => Ok(AnswerType::Tie),
            2 => Ok(AnswerType::Rank),
            other => Err(CoreError::InvalidData(format!(
                "Unknown answer type {other}. Must be 0 (single), 1 (tie), or 2 (rank)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Answer items
// ---------------------------------------------------------------------------

/// One answered quiz question as submitted by the client.
///
/// `answer` holds category letters in choice order; for ranked answers the
/// order is the ranking. Serialized camelCase to match the wire format, and
/// stored as-is in the onboarding record's `detailed_qa` column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerItem {
    pub question_number: i32,
    pub answer: Vec<String>,
    /// Raw wire code; converted via [`AnswerType::from_code`] during scoring.
    pub answer_type: i16,
}

// ---------------------------------------------------------------------------
// Point tally
// ---------------------------------------------------------------------------

/// Integer point totals per category, zero-initialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointTally {
    scores: [i32; 4],
}

impl PointTally {
    /// Current score for a category.
    pub fn get(&self, category: Category) -> i32 {
        self.scores[category as usize]
    }

    /// Add points to a category.
    pub fn add(&mut self, category: Category, points: i32) {
        self.scores[category as usize] += points;
    }

    /// Sum of all category scores.
    pub fn total(&self) -> i32 {
        self.scores.iter().sum()
    }
}

/// Percentage share per category, keyed in tie-break order.
pub type PercentageMap = BTreeMap<Category, f64>;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Compute the point tally for a list of answered questions.
///
/// Fails with [`CoreError::InvalidData`] on an unknown answer-type code, an
/// unknown category letter, or a ranked answer listing fewer than two
/// choices. Ranked entries beyond the second are ignored.
pub fn calculate_points(answers: &[AnswerItem]) -> Result<PointTally, CoreError> {
    let mut tally = PointTally::default();

    for item in answers {
        match AnswerType::from_code(item.answer_type)? {
            AnswerType::Single => {
                for code in &item.answer {
                    tally.add(Category::from_code(code)?, SINGLE_POINTS);
                }
            }
            AnswerType::Tie => {
                for code in &item.answer {
                    tally.add(Category::from_code(code)?, TIE_POINTS);
                }
            }
            AnswerType::Rank => {
                if item.answer.len() < 2 {
                    return Err(CoreError::InvalidData(format!(
                        "Ranked answer for question {} must list at least 2 choices, got {}",
                        item.question_number,
                        item.answer.len()
                    )));
                }
                tally.add(Category::from_code(&item.answer[0])?, RANK_FIRST_POINTS);
                tally.add(Category::from_code(&item.answer[1])?, RANK_SECOND_POINTS);
            }
        }
    }

    Ok(tally)
}

/// Derive each category's percentage share and the primary personality.
///
/// Shares are `value / total * 100` rounded to one decimal place. A zero
/// total is not an error: every share is 0.0 and the winner falls back to
/// the first category in tie-break order. Ties for the maximum are broken
/// by declaration order (first-seen maximum wins).
pub fn calculate_percentage(tally: &PointTally) -> (PercentageMap, Category) {
    let total = tally.total();

    let mut percentages = PercentageMap::new();
    for category in Category::ALL {
        let share = if total > 0 {
            round_one_decimal(f64::from(tally.get(category)) / f64::from(total) * 100.0)
        } else {
            0.0
        };
        percentages.insert(category, share);
    }

    let mut winner = Category::A;
    for category in Category::ALL {
        if tally.get(category) > tally.get(winner) {
            winner = category;
        }
    }

    (percentages, winner)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn item(answer: &[&str], answer_type: i16) -> AnswerItem {
        AnswerItem {
            question_number: 1,
            answer: answer.iter().map(|s| s.to_string()).collect(),
            answer_type,
        }
    }

    #[test]
    fn single_answer_adds_six_to_each_listed_category() {
        let tally = calculate_points(&[item(&["A", "B"], 0)]).unwrap();
        assert_eq!(tally.get(Category::A), 6);
        assert_eq!(tally.get(Category::B), 6);
        assert_eq!(tally.get(Category::C), 0);
        assert_eq!(tally.get(Category::D), 0);
    }

    #[test]
    fn tie_answer_adds_three_to_each_listed_category() {
        let tally = calculate_points(&[item(&["A", "C"], 1)]).unwrap();
        assert_eq!(tally.get(Category::A), 3);
        assert_eq!(tally.get(Category::C), 3);
        assert_eq!(tally.get(Category::B), 0);
        assert_eq!(tally.get(Category::D), 0);
    }

    #[test]
    fn rank_answer_weights_first_and_second_choice() {
        let tally = calculate_points(&[item(&["B", "D"], 2)]).unwrap();
        assert_eq!(tally.get(Category::B), 4);
        assert_eq!(tally.get(Category::D), 2);
        assert_eq!(tally.get(Category::A), 0);
        assert_eq!(tally.get(Category::C), 0);
    }

    #[test]
    fn rank_entries_beyond_the_second_are_ignored() {
        let tally = calculate_points(&[item(&["B", "D", "A", "C"], 2)]).unwrap();
        assert_eq!(tally.get(Category::B), 4);
        assert_eq!(tally.get(Category::D), 2);
        assert_eq!(tally.get(Category::A), 0);
        assert_eq!(tally.get(Category::C), 0);
    }

    #[test]
    fn single_answer_example_scores_and_wins() {
        // items=[{answer:[A], answerType:0}] -> points A:6, everything else 0,
        // percentage A:100.0, winner A.
        let tally = calculate_points(&[item(&["A"], 0)]).unwrap();
        assert_eq!(tally.get(Category::A), 6);
        assert_eq!(tally.total(), 6);

        let (percentages, winner) = calculate_percentage(&tally);
        assert_eq!(percentages[&Category::A], 100.0);
        assert_eq!(percentages[&Category::B], 0.0);
        assert_eq!(percentages[&Category::C], 0.0);
        assert_eq!(percentages[&Category::D], 0.0);
        assert_eq!(winner, Category::A);
    }

    #[test]
    fn weights_accumulate_across_items() {
        let tally = calculate_points(&[
            item(&["A"], 0),
            item(&["A", "B"], 1),
            item(&["B", "A"], 2),
        ])
        .unwrap();
        assert_eq!(tally.get(Category::A), 6 + 3 + 2);
        assert_eq!(tally.get(Category::B), 3 + 4);
        assert_eq!(tally.total(), 18);
    }

    #[test]
    fn zero_total_yields_zero_percentages_and_first_category_wins() {
        let tally = PointTally::default();
        let (percentages, winner) = calculate_percentage(&tally);

        for category in Category::ALL {
            assert_eq!(percentages[&category], 0.0);
        }
        assert_eq!(winner, Category::A);
    }

    #[test]
    fn tied_maximum_goes_to_earlier_category() {
        // B and D tie at 3 points each; B is earlier in declaration order.
        let tally = calculate_points(&[item(&["B", "D"], 1)]).unwrap();
        let (_, winner) = calculate_percentage(&tally);
        assert_eq!(winner, Category::B);
    }

    #[test]
    fn percentages_sum_to_roughly_one_hundred() {
        let tally = calculate_points(&[
            item(&["A"], 0),
            item(&["B", "C"], 1),
            item(&["D", "C"], 2),
        ])
        .unwrap();
        let (percentages, _) = calculate_percentage(&tally);
        let sum: f64 = percentages.values().sum();
        assert!(
            (sum - 100.0).abs() < 0.5,
            "percentage shares should sum to ~100, got {sum}"
        );
    }

    #[test]
    fn unknown_answer_type_is_rejected() {
        let err = calculate_points(&[item(&["A"], 7)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }

    #[test]
    fn unknown_category_letter_is_rejected() {
        let err = calculate_points(&[item(&["E"], 0)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }

    #[test]
    fn rank_with_fewer_than_two_choices_is_rejected() {
        let err = calculate_points(&[item(&["B"], 2)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));

        let err = calculate_points(&[item(&[], 2)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidData(_)));
    }

    #[test]
    fn answer_item_wire_format_is_camel_case() {
        let parsed: AnswerItem = serde_json::from_str(
            r#"{"questionNumber": 3, "answer": ["B", "D"], "answerType": 2}"#,
        )
        .unwrap();
        assert_eq!(parsed.question_number, 3);
        assert_eq!(parsed.answer, vec!["B", "D"]);
        assert_eq!(parsed.answer_type, 2);

        let json = serde_json::to_value(&parsed).unwrap();
        assert!(json.get("questionNumber").is_some());
        assert!(json.get("answerType").is_some());
    }

    #[test]
    fn percentage_map_serializes_with_letter_keys() {
        let tally = calculate_points(&[item(&["A"], 0), item(&["B"], 0)]).unwrap();
        let (percentages, _) = calculate_percentage(&tally);
        let json = serde_json::to_value(&percentages).unwrap();
        assert_eq!(json["A"], 50.0);
        assert_eq!(json["B"], 50.0);
        assert_eq!(json["C"], 0.0);
        assert_eq!(json["D"], 0.0);
    }
}
