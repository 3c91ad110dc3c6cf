//! Plain-text tile maps.
//!
//! A map file is a grid of non-negative integer tile ids: rows separated by
//! newlines, columns by runs of whitespace.
//!
//! ```text
//! 1 1 1 1
//! 1 2 2 1
//! 1 1 1 1
//! ```
//!
//! Leading and trailing whitespace of the whole file is ignored. Every row
//! must have as many columns as the first one.

use crate::error::{GameError, GameResult};

/// Column and row count of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapDimensions {
    pub columns: usize,
    pub rows: usize,
}

/// Parse every whitespace separated token as a tile id.
///
/// Fails on the first token that is not a non-negative integer, naming it.
pub fn parse_tile_ids(text: &str) -> GameResult<Vec<u32>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| GameError::UnrecognizedMapElement(token.to_string()))
        })
        .collect()
}

/// Distinct ids in ascending order.
pub fn distinct_tile_ids(ids: &[u32]) -> Vec<u32> {
    let mut distinct = ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
}

/// Rows of the map, outer whitespace trimmed.
pub fn map_rows(text: &str) -> impl Iterator<Item = &str> {
    text.trim().lines()
}

/// Measure the grid and check that it is rectangular.
///
/// The first row's column count is authoritative; a row with a different
/// count fails with [`GameError::MalformedMap`].
pub fn measure(map_name: &str, text: &str) -> GameResult<MapDimensions> {
    let mut rows = map_rows(text);
    let columns = rows.next().map_or(0, |row| row.split_whitespace().count());
    let mut count = 1;
    for (index, row) in rows.enumerate() {
        let found = row.split_whitespace().count();
        if found != columns {
            return Err(GameError::MalformedMap {
                map: map_name.to_string(),
                row: index + 1,
                expected: columns,
                found,
            });
        }
        count += 1;
    }
    Ok(MapDimensions {
        columns,
        rows: count,
    })
}

/// Iterate over `(row, column, token)` for every cell of the map text.
///
/// Tokens are yielded as written; callers parse them.
pub fn cells(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    map_rows(text).enumerate().flat_map(|(row, line)| {
        line.split_whitespace()
            .enumerate()
            .map(move |(column, token)| (row, column, token))
    })
}
