pub const PETSTORE_SCHEMA: &str = include_str!("petstore.graphqle");

pub mod generated;
