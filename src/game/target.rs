//! Target word selection
//!
//! The daily target is a pure function of the calendar date: the number of
//! whole days elapsed since 2022-01-01 local time indexes the target list.
//! Indices outside the list (including pre-epoch dates) wrap modulo the list
//! length, so the schedule cycles instead of running off the end.

use crate::core::Word;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Milliseconds per scheduling day
pub const DAY_LENGTH_MS: i64 = 86_400_000;

/// Error selecting a target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// No target words to choose from
    EmptyList,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyList => write!(f, "Target word list is empty"),
        }
    }
}

impl std::error::Error for TargetError {}

/// Which puzzle a session is playing, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    /// The scheduled puzzle for a day index
    Daily(i64),
    /// A practice game with a random or chosen target
    Practice,
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily(index) => write!(f, "Daily #{index}"),
            Self::Practice => write!(f, "Practice"),
        }
    }
}

/// The scheduling epoch: 2022-01-01 00:00 local time
fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 1, 1)
        .expect("valid calendar date")
        .and_hms_opt(0, 0, 0)
        .expect("valid midnight time")
}

/// Current local wall-clock time
#[must_use]
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Whole days elapsed since the epoch (negative before it)
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::game::day_index;
///
/// let noon = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(day_index(noon), 0);
/// ```
#[must_use]
pub fn day_index(now: NaiveDateTime) -> i64 {
    (now - epoch()).num_milliseconds().div_euclid(DAY_LENGTH_MS)
}

/// The scheduled target for a day index, wrapping modulo the list length
///
/// # Errors
/// Returns `TargetError::EmptyList` when `targets` is empty.
pub fn for_day(targets: &[Word], index: i64) -> Result<&Word, TargetError> {
    if targets.is_empty() {
        return Err(TargetError::EmptyList);
    }
    let len = i64::try_from(targets.len()).expect("list length fits in i64");
    let wrapped = index.rem_euclid(len) as usize;
    Ok(&targets[wrapped])
}

/// Today's scheduled target
///
/// # Errors
/// Returns `TargetError::EmptyList` when `targets` is empty.
pub fn daily(targets: &[Word], now: NaiveDateTime) -> Result<&Word, TargetError> {
    for_day(targets, day_index(now))
}

/// A uniformly random practice target
///
/// # Errors
/// Returns `TargetError::EmptyList` when `targets` is empty.
pub fn random(targets: &[Word]) -> Result<&Word, TargetError> {
    targets
        .choose(&mut rand::rng())
        .ok_or(TargetError::EmptyList)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn day_index_on_epoch_day() {
        assert_eq!(day_index(at(2022, 1, 1, 0)), 0);
        assert_eq!(day_index(at(2022, 1, 1, 23)), 0);
    }

    #[test]
    fn day_index_counts_whole_days() {
        assert_eq!(day_index(at(2022, 1, 2, 0)), 1);
        assert_eq!(day_index(at(2022, 1, 31, 12)), 30);
        assert_eq!(day_index(at(2023, 1, 1, 0)), 365);
    }

    #[test]
    fn day_index_negative_before_epoch() {
        assert_eq!(day_index(at(2021, 12, 31, 23)), -1);
        assert_eq!(day_index(at(2021, 12, 30, 0)), -2);
    }

    #[test]
    fn for_day_indexes_in_schedule_order() {
        let targets = words(&["crane", "slate", "audio"]);
        assert_eq!(for_day(&targets, 0).unwrap().text(), "crane");
        assert_eq!(for_day(&targets, 1).unwrap().text(), "slate");
        assert_eq!(for_day(&targets, 2).unwrap().text(), "audio");
    }

    #[test]
    fn for_day_wraps_past_the_end() {
        let targets = words(&["crane", "slate", "audio"]);
        assert_eq!(for_day(&targets, 3).unwrap().text(), "crane");
        assert_eq!(for_day(&targets, 5).unwrap().text(), "audio");
    }

    #[test]
    fn for_day_wraps_negative_indices() {
        let targets = words(&["crane", "slate", "audio"]);
        assert_eq!(for_day(&targets, -1).unwrap().text(), "audio");
        assert_eq!(for_day(&targets, -3).unwrap().text(), "crane");
    }

    #[test]
    fn for_day_empty_list_errors() {
        assert_eq!(for_day(&[], 0), Err(TargetError::EmptyList));
    }

    #[test]
    fn daily_selects_by_date() {
        let targets = words(&["crane", "slate", "audio"]);
        assert_eq!(daily(&targets, at(2022, 1, 1, 9)).unwrap().text(), "crane");
        assert_eq!(daily(&targets, at(2022, 1, 2, 9)).unwrap().text(), "slate");
    }

    #[test]
    fn random_draws_from_the_list() {
        let targets = words(&["crane"]);
        assert_eq!(random(&targets).unwrap().text(), "crane");
        assert_eq!(random(&[]), Err(TargetError::EmptyList));
    }

    #[test]
    fn puzzle_labels() {
        assert_eq!(Puzzle::Daily(42).to_string(), "Daily #42");
        assert_eq!(Puzzle::Practice.to_string(), "Practice");
    }
}
