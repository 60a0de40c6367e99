//! Formatting and string helpers for profiling reports.
//!
//! Everything here is a pure function apart from [`ident::random_id`], which
//! reads the clock and a thread-local RNG.

pub mod config;
pub mod dates;
pub mod duration;
pub mod error;
pub mod hash;
pub mod ident;
pub mod strings;

pub use dates::{format_date, format_time, Zone};
pub use duration::{format_duration, DurationStyle};
pub use error::{Error, Result};
pub use hash::hash_code;
pub use ident::{generate_id, random_id, IdStrategy};
pub use strings::{commas_to_vec, limit};
