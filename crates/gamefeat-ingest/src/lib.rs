pub mod csv_table;
pub mod error;
pub mod values;

pub use csv_table::{RawTable, load_raw_frame, read_raw_table, table_to_frame};
pub use error::{IngestError, Result};
pub use values::{
    any_to_bool, any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty, parse_bool,
    parse_f64, parse_i64,
};
