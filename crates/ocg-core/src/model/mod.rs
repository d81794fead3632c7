pub mod document;
pub mod operation;
pub mod parameter;
pub mod schema;

pub use document::Document;
pub use operation::{HttpMethod, Operation, OperationResponse};
pub use parameter::{Parameter, ParameterLocation, ParameterType};
pub use schema::{SchemaType, TypeSchema};
