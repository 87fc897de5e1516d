// Present/absent combinations for placeholders sharing one namespace

use std::collections::HashSet;

use crate::error::{Result, UrlTemplateError};

// Combinations are enumerated over a bitmask, one bit per placeholder.
const MAX_NAMES_PER_NAMESPACE: usize = 16;

/// All subsets of namespace placeholders a matcher has to try, ordered from
/// fully present to fully omitted so that longer matches win. Names missing
/// from `optional` are kept in every combination; when nothing is optional a
/// single all-present combination is returned.
pub fn optionality_combinations<'a>(
    names: &[&'a str],
    optional: &HashSet<String>,
) -> Result<Vec<Vec<&'a str>>> {
    if names.len() > MAX_NAMES_PER_NAMESPACE {
        return Err(UrlTemplateError::Configuration(format!(
            "too many placeholders in one namespace: {} (limit {MAX_NAMES_PER_NAMESPACE})",
            names.len()
        )));
    }

    // bit set = the placeholder may be omitted; first name is the highest bit
    let mask: u32 = names
        .iter()
        .enumerate()
        .filter(|(_, name)| optional.contains(**name))
        .fold(0, |mask, (index, _)| {
            mask | 1 << (names.len() - 1 - index)
        });
    if mask == 0 {
        return Ok(vec![names.to_vec()]);
    }

    let mut seen = HashSet::new();
    let mut combinations = Vec::new();
    for variant in 0..1u32 << names.len() {
        let omitted = variant & mask;
        if !seen.insert(omitted) {
            continue;
        }
        let combination: Vec<&str> = names
            .iter()
            .enumerate()
            .filter(|(index, _)| omitted & 1 << (names.len() - 1 - index) == 0)
            .map(|(_, name)| *name)
            .collect();
        combinations.push(combination);
    }
    Ok(combinations)
}
