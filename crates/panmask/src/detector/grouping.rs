//! Digit grouping check

use crate::company::CardCompany;

/// Lengths of the digit clusters in `raw`
///
/// Candidates contain only digits and line noise, so every non-empty run of
/// non-digits separates two clusters.
pub fn group_lengths(raw: &str) -> Vec<usize> {
    raw.split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .map(str::len)
        .collect()
}

/// True if `raw` is ungrouped or printed the way `company` prints its numbers
///
/// Only the first `shape.len()` clusters are compared; anything after that is
/// unconstrained, which covers the longer variants of a network.
pub fn valid_grouping(raw: &str, company: Option<CardCompany>) -> bool {
    let groups = group_lengths(raw);
    if groups.len() == 1 {
        return true;
    }

    let Some(company) = company else {
        return false;
    };

    company
        .shapes()
        .iter()
        .any(|shape| groups.len() >= shape.len() && groups[..shape.len()] == **shape)
}
