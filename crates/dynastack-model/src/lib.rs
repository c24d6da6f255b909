//! DynamoDB model types for DynaStack.
//!
//! One plain data shape per request, per response and per nested value
//! object of the 2012-08-10 DynamoDB API, plus the service error kinds and
//! the operation enum. Shapes carry no behavior beyond construction,
//! comparison, hashing, debug rendering and serde.
//!
//! ```
//! use dynastack_model::input::CreateTableInput;
//! use dynastack_model::types::{
//!     AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
//! };
//!
//! let input = CreateTableInput::new(
//!     "users",
//!     vec![KeySchemaElement::new("pk", KeyType::Hash)],
//!     vec![AttributeDefinition::new("pk", ScalarAttributeType::S)],
//! )
//! .with_provisioned_throughput(ProvisionedThroughput::new(5, 10));
//! assert_eq!(input.table_name(), Some(&"users".to_owned()));
//! ```
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]

mod shape;

pub mod attribute_value;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod pagination;
pub mod timestamp;
pub mod types;

pub use attribute_value::AttributeValue;
pub use error::{DynamoDBError, DynamoDBErrorCode, ModelError};
pub use operations::DynamoDBOperation;
pub use pagination::Paginate;
pub use timestamp::Timestamp;
