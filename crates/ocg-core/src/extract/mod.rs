pub mod name;
pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;

pub use name::path_to_name;
pub use operation::{
    DEFAULT_TAG, ExtractOptions, extract_operations, extract_operations_with_options,
};
pub use parameter::normalize_parameter;
pub use response::normalize_response;
pub use schema::validate_schema;
