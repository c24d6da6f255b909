//! DynamoDB `awsJson1_0` codec and client for DynaStack.
//!
//! This crate turns model inputs into HTTP requests and HTTP responses into
//! model outputs, providing:
//!
//! - **Target**: builds and resolves the `X-Amz-Target` header
//! - **Request**: binds each input to its operation and output, and marshals it
//! - **Response**: decodes outputs and service errors, checks `x-amz-crc32`
//! - **Client**: typed operation methods over a pluggable [`Transport`]
#![allow(clippy::doc_markdown)]

pub mod client;
pub mod config;
pub mod request;
pub mod response;
pub mod target;

pub use client::{DynamoDBClient, Transport, TransportFuture};
pub use config::ClientConfig;
pub use request::{DynamoDBRequest, build_request};
pub use response::{error_to_response, json_response, parse_error, parse_response};
pub use target::{resolve_operation, target_header};
