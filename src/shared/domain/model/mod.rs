pub mod diagnostic;
pub mod resource_schema;
