//! Candidate filtering
//!
//! Narrows a candidate list to the words consistent with one resolved guess
//! row. The row is compiled once into per-slot constraints, then every word
//! is tested against them in order; the first failing slot rejects the word.
//!
//! | State | A word passes slot `i` when |
//! |---|---|
//! | `PresentHere` | `word[i] == L` |
//! | `Absent` | `L` does not occur in the word |
//! | `PresentWrongSpot` | `L` occurs in the word and `word[i] != L` |
//! | `AbsentHereButElsewhere` | `word[i] != L` |

use crate::core::{GuessRow, LetterState};
use log::trace;

/// What one slot of a resolved row demands of a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotConstraint {
    /// The letter must be at this position
    Here { index: usize, letter: char },
    /// The letter must not occur anywhere
    Nowhere { letter: char },
    /// The letter must occur, but not at this position
    ElsewhereNotHere { index: usize, letter: char },
    /// The letter must not be at this position
    NotHere { index: usize, letter: char },
}

impl SlotConstraint {
    /// Constraint for one slot, `None` for an empty slot
    #[must_use]
    pub fn for_slot(index: usize, letter: Option<char>, state: LetterState) -> Option<Self> {
        let letter = letter?;
        Some(match state {
            LetterState::PresentHere => Self::Here { index, letter },
            LetterState::Absent => Self::Nowhere { letter },
            LetterState::PresentWrongSpot => Self::ElsewhereNotHere { index, letter },
            LetterState::AbsentHereButElsewhere => Self::NotHere { index, letter },
        })
    }

    /// Whether `word` satisfies this constraint
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        match *self {
            Self::Here { index, letter } => word.chars().nth(index) == Some(letter),
            Self::Nowhere { letter } => !word.contains(letter),
            Self::ElsewhereNotHere { index, letter } => {
                word.contains(letter) && word.chars().nth(index) != Some(letter)
            }
            Self::NotHere { index, letter } => word.chars().nth(index) != Some(letter),
        }
    }
}

/// Compile a row into its slot constraints
///
/// The row is resolved first (on a private copy), so passing a row that has
/// not been through [`GuessRow::derive_states`] is safe.
#[must_use]
pub fn constraints(row: &GuessRow) -> Vec<SlotConstraint> {
    row.derived()
        .letters()
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| SlotConstraint::for_slot(index, slot.character(), slot.state()))
        .collect()
}

/// Whether `word` passes every slot of an already compiled row
#[must_use]
pub fn accepts(word: &str, constraints: &[SlotConstraint]) -> bool {
    constraints.iter().all(|constraint| {
        let ok = constraint.accepts(word);
        if !ok {
            trace!("{word}: rejected by {constraint:?}");
        }
        ok
    })
}

/// Iterate over the candidates consistent with `row`, in input order
pub fn filter_iter<'a, S: AsRef<str>>(
    candidates: &'a [S],
    row: &GuessRow,
) -> impl Iterator<Item = &'a str> + use<'a, S> {
    let constraints = constraints(row);
    candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(move |word| accepts(word, &constraints))
}

/// The candidates consistent with `row`, in input order
///
/// The result is always a subsequence of `candidates`: nothing is added,
/// reordered or deduplicated.
///
/// # Examples
/// ```
/// use wordle_filter::core::{GuessRow, RawState::*};
/// use wordle_filter::filter::filter;
///
/// let row = GuessRow::from_feedback(
///     "CRANE",
///     &[PresentHere, PresentHere, PresentHere, Absent, PresentHere],
/// ).unwrap();
///
/// // N is gray, so CRANE itself is ruled out
/// assert_eq!(filter(&["CRANE", "CRATE", "TRACE"], &row), vec!["CRATE"]);
/// ```
#[must_use]
pub fn filter<S: AsRef<str>>(candidates: &[S], row: &GuessRow) -> Vec<String> {
    filter_iter(candidates, row).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawState::{self, Absent, PresentHere, PresentWrongSpot};

    fn row(word: &str, feedback: &[RawState]) -> GuessRow {
        GuessRow::from_feedback(word, feedback).unwrap()
    }

    fn is_subsequence(sub: &[String], of: &[&str]) -> bool {
        let mut rest = of.iter();
        sub.iter()
            .all(|word| rest.any(|candidate| *candidate == word.as_str()))
    }

    #[test]
    fn exact_positions_with_gray_letter() {
        let r = row(
            "CRANE",
            &[PresentHere, PresentHere, PresentHere, Absent, PresentHere],
        );
        // The gray N excludes CRANE itself
        assert_eq!(filter(&["CRANE", "CRATE", "TRACE"], &r), vec!["CRATE"]);
    }

    #[test]
    fn all_green_keeps_only_the_guess() {
        let r = row("CRANE", &[PresentHere; 5]);
        assert_eq!(filter(&["CRANE", "CRATE", "TRACE"], &r), vec!["CRANE"]);
    }

    #[test]
    fn present_wrong_spot_example() {
        // T yellow at index 0; the other letters are unused elsewhere
        let r = row(
            "TQXJZ",
            &[PresentWrongSpot, Absent, Absent, Absent, Absent],
        );
        assert_eq!(
            filter(&["STALE", "TOAST", "LATTE"], &r),
            vec!["STALE", "LATTE"]
        );
    }

    #[test]
    fn full_absence_example() {
        let r = row("ZQQQQ", &[Absent; 5]);
        let words = ["CRANE", "CRATE", "TRACE"];
        assert_eq!(filter(&words, &r), words.to_vec());

        let words = ["CRANE", "BLAZE", "TRACE", "ZEBRA"];
        assert_eq!(filter(&words, &r), vec!["CRANE", "TRACE"]);
    }

    #[test]
    fn duplicate_absent_only_excludes_its_position() {
        // A yellow at 0, A gray at 1: A must occur, but not at 0 or 1
        let r = row("AA", &[PresentWrongSpot, Absent]);
        assert_eq!(filter(&["BA", "AB", "AA", "BB"], &r), Vec::<String>::new());

        let r = row("AAB", &[PresentWrongSpot, Absent, Absent]);
        assert_eq!(filter(&["CCA", "ACC", "CAC", "BCA"], &r), vec!["CCA"]);
    }

    #[test]
    fn lowercase_duplicate_only_excludes_its_position() {
        let r = row("ee", &[PresentHere, Absent]);
        assert_eq!(filter(&["ex", "ee", "xe"], &r), vec!["ex"]);
        assert_eq!(
            filter(&["EX", "EE", "XE"], &row("EE", &[PresentHere, Absent])),
            vec!["EX"]
        );
    }

    #[test]
    fn underived_row_is_resolved_internally() {
        let r = row("EE", &[PresentHere, Absent]);
        // Without derivation the gray E would reject every word containing E
        assert_eq!(filter(&["EX", "EE", "XE"], &r), vec!["EX"]);
        assert_eq!(r.get(1).unwrap().state(), LetterState::Absent);
    }

    #[test]
    fn empty_slots_are_no_op() {
        let mut r = GuessRow::new(5);
        r.set_character(0, 'C').unwrap();
        r.set_state(0, PresentHere).unwrap();

        let words = ["CRANE", "CRATE", "TRACE"];
        assert_eq!(filter(&words, &r), vec!["CRANE", "CRATE"]);
        assert_eq!(filter(&words, &GuessRow::new(5)), words.to_vec());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let r = row("CRANE", &[Absent; 5]);
        let empty: [&str; 0] = [];
        assert!(filter(&empty, &r).is_empty());
    }

    #[test]
    fn output_is_subsequence_of_input() {
        let words = [
            "CRANE", "SLATE", "IRATE", "CRATE", "GRATE", "TRACE", "STALE", "LATTE", "TOAST",
        ];
        let rows = [
            row("CRANE", &[Absent, PresentWrongSpot, PresentHere, Absent, PresentHere]),
            row("TOAST", &[PresentWrongSpot, Absent, PresentWrongSpot, Absent, Absent]),
            row("LATTE", &[Absent, PresentWrongSpot, Absent, PresentHere, PresentHere]),
            row("SASSY", &[Absent; 5]),
        ];

        for r in &rows {
            let result = filter(&words, r);
            assert!(result.len() <= words.len());
            assert!(is_subsequence(&result, &words), "{result:?} for {r}");
        }
    }

    #[test]
    fn constraints_skip_empty_slots() {
        let mut r = GuessRow::new(3);
        r.set_character(2, 'A').unwrap();
        assert_eq!(
            constraints(&r),
            vec![SlotConstraint::Nowhere { letter: 'A' }]
        );
    }

    #[test]
    fn slot_constraint_rules() {
        let here = SlotConstraint::Here {
            index: 1,
            letter: 'R',
        };
        assert!(here.accepts("CRANE"));
        assert!(!here.accepts("CARE"));

        let nowhere = SlotConstraint::Nowhere { letter: 'Z' };
        assert!(nowhere.accepts("CRANE"));
        assert!(!nowhere.accepts("BLAZE"));

        let elsewhere = SlotConstraint::ElsewhereNotHere {
            index: 0,
            letter: 'T',
        };
        assert!(elsewhere.accepts("STALE"));
        assert!(!elsewhere.accepts("TOAST"));
        assert!(!elsewhere.accepts("CRANE"));

        let not_here = SlotConstraint::NotHere {
            index: 0,
            letter: 'T',
        };
        assert!(not_here.accepts("CRANE"));
        assert!(not_here.accepts("STALE"));
        assert!(!not_here.accepts("TOAST"));
    }
}
