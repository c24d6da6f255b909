//! `X-Amz-Target` handling.
//!
//! DynamoDB uses the `awsJson1_0` protocol where all requests are `POST /`
//! with the operation specified in the `X-Amz-Target` header:
//!
//! ```text
//! X-Amz-Target: DynamoDB_20120810.CreateTable
//! ```

use dynastack_model::error::DynamoDBError;
use dynastack_model::operations::DynamoDBOperation;

/// Header carrying the target operation.
pub const TARGET_HEADER: &str = "x-amz-target";

/// The expected prefix for the `X-Amz-Target` header value.
pub const TARGET_PREFIX: &str = "DynamoDB_20120810.";

/// Build the `X-Amz-Target` value for an operation.
#[must_use]
pub fn target_header(op: DynamoDBOperation) -> String {
    format!("{TARGET_PREFIX}{}", op.as_str())
}

/// Resolve a DynamoDB operation from request headers.
///
/// Extracts the operation from the `X-Amz-Target` header, validates the
/// format, and maps it to a [`DynamoDBOperation`] enum variant.
pub fn resolve_operation(headers: &http::HeaderMap) -> Result<DynamoDBOperation, DynamoDBError> {
    let target = headers
        .get(TARGET_HEADER)
        .ok_or_else(DynamoDBError::missing_action)?;

    let target_str = target
        .to_str()
        .map_err(|_| DynamoDBError::missing_action())?;

    let operation_name = target_str
        .strip_prefix(TARGET_PREFIX)
        .ok_or_else(|| DynamoDBError::unknown_operation(target_str))?;

    DynamoDBOperation::from_name(operation_name)
        .ok_or_else(|| DynamoDBError::unknown_operation(target_str))
}

#[cfg(test)]
mod tests {
    use dynastack_model::error::DynamoDBErrorCode;

    use super::*;

    fn headers_with_target(target: &str) -> http::HeaderMap {
        let mut map = http::HeaderMap::new();
        map.insert(TARGET_HEADER, http::HeaderValue::from_str(target).unwrap());
        map
    }

    #[test]
    fn test_should_build_target_header() {
        assert_eq!(
            target_header(DynamoDBOperation::DescribeGlobalTableSettings),
            "DynamoDB_20120810.DescribeGlobalTableSettings"
        );
    }

    #[test]
    fn test_should_resolve_every_operation() {
        for op in DynamoDBOperation::ALL {
            let headers = headers_with_target(&target_header(*op));
            let resolved = resolve_operation(&headers).unwrap();
            assert_eq!(resolved, *op, "failed for {op}");
        }
    }

    #[test]
    fn test_should_error_on_missing_target() {
        let headers = http::HeaderMap::new();
        let err = resolve_operation(&headers).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::MissingAction);
    }

    #[test]
    fn test_should_error_on_wrong_prefix() {
        let headers = headers_with_target("DynamoDBStreams_20120810.ListStreams");
        let err = resolve_operation(&headers).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::UnrecognizedClientException);
    }

    #[test]
    fn test_should_error_on_unknown_operation() {
        let headers = headers_with_target("DynamoDB_20120810.TransactGetItems");
        let err = resolve_operation(&headers).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::UnrecognizedClientException);
        assert!(err.message.contains("TransactGetItems"));
    }
}
