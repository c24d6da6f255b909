//! DynamoDB error types.
//!
//! Service errors arrive as JSON with a `__type` field holding the
//! fully-qualified exception name (`com.amazonaws.dynamodb.v20120810#Code`)
//! and a human-readable message. [`DynamoDBErrorCode`] names every exception
//! the 2012-08-10 API can return; [`DynamoDBError`] pairs a code with its
//! message and HTTP metadata.

use std::fmt;

/// Namespace prefix shared by DynamoDB service exceptions.
const ERROR_NAMESPACE: &str = "com.amazonaws.dynamodb.v20120810#";

/// Well-known DynamoDB error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DynamoDBErrorCode {
    /// The backup is being created or deleted and cannot be used.
    BackupInUseException,
    /// The backup does not exist.
    BackupNotFoundException,
    /// A condition expression evaluated to false.
    ConditionalCheckFailedException,
    /// Continuous backups are not enabled on the table.
    ContinuousBackupsUnavailableException,
    /// A global table with this name already exists.
    GlobalTableAlreadyExistsException,
    /// The global table does not exist.
    GlobalTableNotFoundException,
    /// The requested index does not exist.
    IndexNotFoundException,
    /// Internal server error.
    InternalServerError,
    /// The restore time lies outside the recovery window.
    InvalidRestoreTimeException,
    /// An item collection exceeded 10 GB.
    ItemCollectionSizeLimitExceededException,
    /// Too many concurrent control-plane operations.
    LimitExceededException,
    /// Point-in-time recovery is not enabled on the table.
    PointInTimeRecoveryUnavailableException,
    /// Provisioned throughput exceeded.
    ProvisionedThroughputExceededException,
    /// The replica already exists in the global table.
    ReplicaAlreadyExistsException,
    /// The replica does not exist in the global table.
    ReplicaNotFoundException,
    /// The resource is being created, updated or deleted.
    ResourceInUseException,
    /// The resource does not exist.
    ResourceNotFoundException,
    /// The restore target table already exists.
    TableAlreadyExistsException,
    /// The table is in a state that does not allow the operation.
    TableInUseException,
    /// The source table does not exist.
    TableNotFoundException,
    /// Validation error.
    #[default]
    ValidationException,
    /// The request or response body could not be (de)serialized.
    SerializationException,
    /// Missing `X-Amz-Target` header.
    MissingAction,
    /// Access denied.
    AccessDeniedException,
    /// Unknown operation or client.
    UnrecognizedClientException,
    /// An exception name this model does not know.
    Unknown,
}

impl DynamoDBErrorCode {
    /// Every code with a fixed wire name, in declaration order.
    pub const ALL: &[Self] = &[
        Self::BackupInUseException,
        Self::BackupNotFoundException,
        Self::ConditionalCheckFailedException,
        Self::ContinuousBackupsUnavailableException,
        Self::GlobalTableAlreadyExistsException,
        Self::GlobalTableNotFoundException,
        Self::IndexNotFoundException,
        Self::InternalServerError,
        Self::InvalidRestoreTimeException,
        Self::ItemCollectionSizeLimitExceededException,
        Self::LimitExceededException,
        Self::PointInTimeRecoveryUnavailableException,
        Self::ProvisionedThroughputExceededException,
        Self::ReplicaAlreadyExistsException,
        Self::ReplicaNotFoundException,
        Self::ResourceInUseException,
        Self::ResourceNotFoundException,
        Self::TableAlreadyExistsException,
        Self::TableInUseException,
        Self::TableNotFoundException,
        Self::ValidationException,
        Self::SerializationException,
        Self::MissingAction,
        Self::AccessDeniedException,
        Self::UnrecognizedClientException,
    ];

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackupInUseException => "BackupInUseException",
            Self::BackupNotFoundException => "BackupNotFoundException",
            Self::ConditionalCheckFailedException => "ConditionalCheckFailedException",
            Self::ContinuousBackupsUnavailableException => "ContinuousBackupsUnavailableException",
            Self::GlobalTableAlreadyExistsException => "GlobalTableAlreadyExistsException",
            Self::GlobalTableNotFoundException => "GlobalTableNotFoundException",
            Self::IndexNotFoundException => "IndexNotFoundException",
            Self::InternalServerError => "InternalServerError",
            Self::InvalidRestoreTimeException => "InvalidRestoreTimeException",
            Self::ItemCollectionSizeLimitExceededException => {
                "ItemCollectionSizeLimitExceededException"
            }
            Self::LimitExceededException => "LimitExceededException",
            Self::PointInTimeRecoveryUnavailableException => {
                "PointInTimeRecoveryUnavailableException"
            }
            Self::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            Self::ReplicaAlreadyExistsException => "ReplicaAlreadyExistsException",
            Self::ReplicaNotFoundException => "ReplicaNotFoundException",
            Self::ResourceInUseException => "ResourceInUseException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::TableAlreadyExistsException => "TableAlreadyExistsException",
            Self::TableInUseException => "TableInUseException",
            Self::TableNotFoundException => "TableNotFoundException",
            Self::ValidationException => "ValidationException",
            Self::SerializationException => "SerializationException",
            Self::MissingAction => "MissingAction",
            Self::AccessDeniedException => "AccessDeniedException",
            Self::UnrecognizedClientException => "UnrecognizedClientException",
            Self::Unknown => "UnknownError",
        }
    }

    /// Returns the fully-qualified error type string for the JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> String {
        match self {
            Self::ValidationException => "com.amazon.coral.validate#ValidationException".to_owned(),
            Self::AccessDeniedException | Self::UnrecognizedClientException => {
                format!("com.amazon.coral.service#{}", self.as_str())
            }
            _ => format!("{ERROR_NAMESPACE}{}", self.as_str()),
        }
    }

    /// Parse a `__type` value (qualified or bare) into an error code.
    ///
    /// Anything after the last `#` is matched against the known names;
    /// unmatched names yield [`DynamoDBErrorCode::Unknown`].
    #[must_use]
    pub fn from_error_type(error_type: &str) -> Self {
        let name = error_type
            .rsplit_once('#')
            .map_or(error_type, |(_, name)| name);
        // Some gateways append a colon-separated URL after the name.
        let name = name.split(':').next().unwrap_or(name).trim();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == name)
            .unwrap_or(Self::Unknown)
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for DynamoDBErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DynamoDB error response.
#[derive(Debug)]
pub struct DynamoDBError {
    /// The error code.
    pub code: DynamoDBErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The `x-amzn-requestid` of the failed call, when known.
    pub request_id: Option<String>,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for DynamoDBError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamoDBError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for DynamoDBError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl DynamoDBError {
    /// Create a new `DynamoDBError` from an error code.
    #[must_use]
    pub fn new(code: DynamoDBErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new `DynamoDBError` with a custom message.
    #[must_use]
    pub fn with_message(code: DynamoDBErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            request_id: None,
            source: None,
        }
    }

    /// Override the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Attach the request id reported by the service.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error response.
    #[must_use]
    pub fn error_type(&self) -> String {
        self.code.error_type()
    }

    // -- Convenience constructors --

    /// Resource is being created, updated or deleted.
    #[must_use]
    pub fn resource_in_use(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ResourceInUseException, message)
    }

    /// Table or resource not found.
    #[must_use]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ResourceNotFoundException, message)
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ValidationException, message)
    }

    /// Serialization error.
    #[must_use]
    pub fn serialization_exception(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::SerializationException, message)
    }

    /// Internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::InternalServerError, message)
    }

    /// Missing action header.
    #[must_use]
    pub fn missing_action() -> Self {
        Self::with_message(
            DynamoDBErrorCode::MissingAction,
            "Missing required header: X-Amz-Target",
        )
    }

    /// Unknown operation.
    #[must_use]
    pub fn unknown_operation(target: &str) -> Self {
        Self::with_message(
            DynamoDBErrorCode::UnrecognizedClientException,
            format!("Unrecognized operation: {target}"),
        )
    }
}

/// Errors raised while assembling a shape on the client side.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// `add_*_entry` was called with a key the map already holds.
    #[error("duplicated keys ({key}) are provided for {field}")]
    DuplicateKey {
        /// Name of the map-valued field.
        field: &'static str,
        /// The offending key.
        key: String,
    },
}

/// Create a `DynamoDBError` from an error code.
///
/// # Examples
///
/// ```
/// use dynastack_model::dynamodb_error;
/// use dynastack_model::error::DynamoDBErrorCode;
///
/// let err = dynamodb_error!(BackupInUseException);
/// assert_eq!(err.code, DynamoDBErrorCode::BackupInUseException);
///
/// let err = dynamodb_error!(GlobalTableNotFoundException, "Global table not found");
/// assert_eq!(err.message, "Global table not found");
/// ```
#[macro_export]
macro_rules! dynamodb_error {
    ($code:ident) => {
        $crate::error::DynamoDBError::new($crate::error::DynamoDBErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::DynamoDBError::with_message($crate::error::DynamoDBErrorCode::$code, $msg)
    };
}
