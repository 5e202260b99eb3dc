pub mod entry;
pub mod ids;
pub mod schema;
pub mod table;
pub mod value;

pub use entry::{CanonicalEntry, Catalog};
pub use ids::AppId;
pub use schema::ColumnRole;
pub use table::{FeatureRow, FeatureTable};
pub use value::FeatureValue;
