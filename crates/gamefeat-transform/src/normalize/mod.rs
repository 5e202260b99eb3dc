//! Scalar normalizers: pure, total functions over raw cell shapes.
//!
//! Every parser in this module degrades on bad input instead of erroring;
//! the pipeline's no-panic guarantee rests on that.

pub mod list;
pub mod name;
pub mod range;
pub mod year;

pub use list::{parse_list, parse_list_str};
pub use name::feature_name;
pub use range::parse_owner_range;
pub use year::extract_year;
