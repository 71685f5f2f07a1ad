//! Axis unification and series alignment.

mod align;
mod axis;

pub use align::{align_series, check_duplicates, DuplicateKey, DuplicatePolicy, SeriesIndex};
pub use axis::unify_axis;
