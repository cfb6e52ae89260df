//! Benchmark key profiles for array-string-map.
//!
//! - [`grid_keys`]: every `[x, y]` coordinate of a square grid as `Vec<i32>`
//! - [`coord_keys`]: the same coordinates as inline `SmallVec` keys
//! - [`populated_map`]: a map pre-filled from [`grid_keys`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use array_string_map::ArrayStringMap;
use smallvec::{smallvec, SmallVec};

/// A 2D coordinate key stored inline for up to 4 dimensions.
pub type Coord = SmallVec<[i32; 4]>;

/// All `[x, y]` coordinates of a `side` x `side` grid, row-major.
pub fn grid_keys(side: i32) -> Vec<Vec<i32>> {
    (0..side)
        .flat_map(|y| (0..side).map(move |x| vec![x, y]))
        .collect()
}

/// Same coordinates as [`grid_keys`], as [`Coord`] keys.
pub fn coord_keys(side: i32) -> Vec<Coord> {
    (0..side)
        .flat_map(|y| (0..side).map(move |x| -> Coord { smallvec![x, y] }))
        .collect()
}

/// A map holding every [`grid_keys`] coordinate, valued by its row-major index.
pub fn populated_map(side: i32) -> ArrayStringMap<Vec<i32>, usize> {
    grid_keys(side)
        .into_iter()
        .enumerate()
        .map(|(index, key)| (key, index))
        .collect()
}
