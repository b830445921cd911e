//! Fuzzy subsequence matching.
//!
//! A source fuzzily matches a target when every character of the source
//! appears in the target in the same order, with anything in between:
//! `"rsp"` matches `"raspberry"`, `"rps"` does not.
//!
//! The `_fold` variants compare characters case-insensitively.

use std::cmp::Ordering;

/// A fuzzy match together with its edit distance from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank<'a> {
    /// The matching target.
    pub target: &'a str,
    /// Levenshtein distance between source and target.
    pub distance: usize,
    /// Position of the target in the searched list.
    pub index: usize,
}

impl Ord for Rank<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Rank<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether `source` is a subsequence of `target`.
pub fn matches(source: &str, target: &str) -> bool {
    is_subsequence(source.chars(), target.chars())
}

/// Whether `source` is a subsequence of `target`, ignoring case.
pub fn matches_fold(source: &str, target: &str) -> bool {
    is_subsequence(fold(source), fold(target))
}

/// All targets that `source` matches, in their original order.
pub fn find<'a, T: AsRef<str>>(source: &str, targets: &'a [T]) -> Vec<&'a str> {
    collect(source, targets, matches)
}

/// All targets that `source` matches ignoring case, in their original order.
pub fn find_fold<'a, T: AsRef<str>>(source: &str, targets: &'a [T]) -> Vec<&'a str> {
    collect(source, targets, matches_fold)
}

/// Matching targets ordered by edit distance, closest first.
pub fn rank_find<'a, T: AsRef<str>>(source: &str, targets: &'a [T]) -> Vec<Rank<'a>> {
    rank(source, targets, matches, strsim::levenshtein)
}

/// Matching targets ordered by case-insensitive edit distance.
pub fn rank_find_fold<'a, T: AsRef<str>>(source: &str, targets: &'a [T]) -> Vec<Rank<'a>> {
    rank(source, targets, matches_fold, |s, t| {
        strsim::levenshtein(&fold(s).collect::<String>(), &fold(t).collect::<String>())
    })
}

fn collect<'a, T: AsRef<str>>(
    source: &str,
    targets: &'a [T],
    test: fn(&str, &str) -> bool,
) -> Vec<&'a str> {
    targets
        .iter()
        .map(|target| target.as_ref())
        .filter(|target| test(source, target))
        .collect()
}

fn rank<'a, T: AsRef<str>>(
    source: &str,
    targets: &'a [T],
    test: fn(&str, &str) -> bool,
    distance: impl Fn(&str, &str) -> usize,
) -> Vec<Rank<'a>> {
    let mut ranks: Vec<Rank<'a>> = targets
        .iter()
        .map(|target| target.as_ref())
        .enumerate()
        .filter(|(_, target)| test(source, target))
        .map(|(index, target)| Rank {
            target,
            distance: distance(source, target),
            index,
        })
        .collect();
    ranks.sort();
    ranks
}

/// Lowercase one character at a time, so no context-dependent rules apply.
pub(crate) fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn is_subsequence(
    mut source: impl Iterator<Item = char>,
    mut target: impl Iterator<Item = char>,
) -> bool {
    source.all(|wanted| target.any(|c| c == wanted))
}
