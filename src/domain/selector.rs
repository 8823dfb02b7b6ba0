use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Count must be at least 1")]
    ZeroCount,

    #[error("No user agents to select from")]
    EmptySource,
}

/// Pick `count` random user agents using the operating system CSPRNG
pub fn select_random(list: &[String], count: usize) -> Result<Vec<String>, SelectionError> {
    select(list, count, &mut OsRng)
}

/// Pick `count` user agents from `list` in draw order.
///
/// When `count` is smaller than the list the picks are distinct, found by
/// redrawing on collision. Otherwise every pick is an independent draw and
/// duplicates may appear, including when `count == list.len()`.
pub fn select<R>(list: &[String], count: usize, rng: &mut R) -> Result<Vec<String>, SelectionError>
where
    R: Rng + CryptoRng,
{
    if count == 0 {
        return Err(SelectionError::ZeroCount);
    }
    if list.is_empty() {
        return Err(SelectionError::EmptySource);
    }

    if count >= list.len() {
        let selected = (0..count)
            .map(|_| list[rng.gen_range(0..list.len())].clone())
            .collect();
        return Ok(selected);
    }

    let mut used = HashSet::with_capacity(count);
    let mut selected = Vec::with_capacity(count);

    while selected.len() < count {
        let idx = rng.gen_range(0..list.len());
        if used.insert(idx) {
            selected.push(list[idx].clone());
        }
    }

    Ok(selected)
}
