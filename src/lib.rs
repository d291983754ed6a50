//! In-memory phrase-search engine over a single text of wide code
//! units.
//!
//! The construction algorithm is based on SAIS as described in
//! [Two Efficient Algorithms for Linear Time Suffix Array
//! Construction](https://ieeexplore.ieee.org/document/5582081), generalized
//! from a byte alphabet to arbitrary 32-bit code units. A suffix array
//! locates literal substrings by double binary search, and a
//! proximity-aware AND/OR combinator merges their occurrence lists.
//!
//! ```
//! use suffix_phrase::{build_index, and_of};
//!
//! let text: Vec<u32> = "banana".chars().map(|c| c as u32).collect();
//! let index = build_index(text);
//!
//! let pat: Vec<u32> = "ana".chars().map(|c| c as u32).collect();
//! assert_eq!(index.search(&pat), vec![1, 3]);
//!
//! let group = and_of(vec![
//!     "ana".chars().map(|c| c as u32).collect::<Vec<u32>>(),
//!     "na".chars().map(|c| c as u32).collect::<Vec<u32>>(),
//! ]);
//! assert_eq!(index.search_group(&group, 1), vec![1, 3]);
//! ```

mod alphabet;
mod combine;
mod index;
mod lcp;
mod locate;
mod query;
mod sais;
mod utils;

pub use alphabet::{Alphabet, CodeUnit};
pub use index::{build_index, Index, DEFAULT_MD};
pub use query::{and_of, or_of, Group, Kind};
