//! Response unmarshalling and error formatting.
//!
//! Success bodies decode into the operation's output type. Error bodies
//! follow the `awsJson1_0` error shape:
//!
//! ```json
//! {
//!   "__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
//!   "message": "Requested resource not found"
//! }
//! ```
//!
//! The service is inconsistent about `message` versus `Message`; both are
//! accepted.

use bytes::Bytes;
use serde::Deserialize;

use dynastack_model::error::{DynamoDBError, DynamoDBErrorCode};

use crate::config::ClientConfig;
use crate::request::DynamoDBRequest;

/// Content type for DynamoDB JSON requests and responses.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Header carrying the service-assigned request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Header carrying the CRC32 of the response body.
pub const CRC32_HEADER: &str = "x-amz-crc32";

/// Header some gateways use for the error code instead of `__type`.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    message: Option<String>,
    #[serde(rename = "Message")]
    capitalized_message: Option<String>,
}

/// Unmarshal an HTTP response into the output of `I`.
///
/// Non-2xx responses become a [`DynamoDBError`] carrying the service's
/// code, message, status and request id. When CRC checking is enabled and
/// the response carries `x-amz-crc32`, a mismatching body is rejected with
/// `SerializationException` before it is decoded.
pub fn parse_response<I: DynamoDBRequest>(
    config: &ClientConfig,
    response: http::Response<Bytes>,
) -> Result<I::Output, DynamoDBError> {
    let (parts, body) = response.into_parts();
    let op = I::OPERATION;
    let request_id = header_str(&parts.headers, REQUEST_ID_HEADER).map(ToOwned::to_owned);

    if config.verify_crc32 {
        verify_crc32(&parts.headers, &body)
            .map_err(|err| attach_request_id(err, request_id.as_deref()))?;
    }

    if !parts.status.is_success() {
        let err = parse_error(parts.status, &parts.headers, &body);
        tracing::warn!(
            operation = %op,
            status = parts.status.as_u16(),
            code = %err.code,
            request_id = request_id.as_deref().unwrap_or("-"),
            "DynamoDB returned an error",
        );
        return Err(attach_request_id(err, request_id.as_deref()));
    }

    tracing::debug!(operation = %op, bytes = body.len(), "unmarshalling DynamoDB response");
    let json = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}".as_slice()
    } else {
        &body[..]
    };
    serde_json::from_slice(json).map_err(|e| {
        let err = DynamoDBError::serialization_exception(format!(
            "failed to decode {op} response: {e}"
        ))
        .with_source(e);
        attach_request_id(err, request_id.as_deref())
    })
}

/// Decode an error response body into a [`DynamoDBError`].
///
/// The code comes from `__type`, falling back to the `x-amzn-errortype`
/// header, then to the status class. A body that is not JSON is kept as
/// the message.
#[must_use]
pub fn parse_error(
    status: http::StatusCode,
    headers: &http::HeaderMap,
    body: &[u8],
) -> DynamoDBError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();

    let code = parsed
        .error_type
        .as_deref()
        .or_else(|| header_str(headers, ERROR_TYPE_HEADER))
        .map_or_else(
            || {
                if status.is_server_error() {
                    DynamoDBErrorCode::InternalServerError
                } else {
                    DynamoDBErrorCode::Unknown
                }
            },
            DynamoDBErrorCode::from_error_type,
        );

    let message = parsed.message.or(parsed.capitalized_message).unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body).trim().to_owned();
        if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or(code.as_str())
                .to_owned()
        } else {
            text
        }
    });

    DynamoDBError::with_message(code, message).with_status(status)
}

/// Serialize a DynamoDB error into a JSON body in the service's format.
#[must_use]
pub fn error_to_json(error: &DynamoDBError) -> Vec<u8> {
    serde_json::json!({
        "__type": error.error_type(),
        "Message": error.message,
    })
    .to_string()
    .into_bytes()
}

/// Build a complete error response, as the service would send it.
#[must_use]
pub fn error_to_response(error: &DynamoDBError, request_id: &str) -> http::Response<Bytes> {
    let mut response = json_response(error_to_json(error), request_id);
    *response.status_mut() = error.status_code;
    response
}

/// Build a success response from JSON bytes, with request id and CRC32 headers.
#[must_use]
pub fn json_response(json: Vec<u8>, request_id: &str) -> http::Response<Bytes> {
    let crc = crc32fast::hash(&json);
    let mut response = http::Response::new(Bytes::from(json));

    let headers = response.headers_mut();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static(CONTENT_TYPE),
    );
    headers.insert(CRC32_HEADER, http::HeaderValue::from(crc));
    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, hv);
    }

    response
}

fn verify_crc32(headers: &http::HeaderMap, body: &[u8]) -> Result<(), DynamoDBError> {
    let Some(expected) = header_str(headers, CRC32_HEADER) else {
        return Ok(());
    };
    let actual = crc32fast::hash(body);
    match expected.trim().parse::<u32>() {
        Ok(expected) if expected == actual => Ok(()),
        _ => {
            tracing::warn!(expected, actual, "DynamoDB response failed CRC32 check");
            Err(DynamoDBError::serialization_exception(format!(
                "CRC32 mismatch: header {expected}, body {actual}"
            )))
        }
    }
}

fn attach_request_id(err: DynamoDBError, request_id: Option<&str>) -> DynamoDBError {
    match request_id {
        Some(id) => err.with_request_id(id),
        None => err,
    }
}

fn header_str<'a>(headers: &'a http::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
