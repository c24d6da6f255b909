//! Request marshalling.
//!
//! Every input type is bound to its operation and output type through
//! [`DynamoDBRequest`]; [`build_request`] turns an input into the
//! `POST /` request the service expects.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use dynastack_model::error::DynamoDBError;
use dynastack_model::input::{
    BatchGetItemInput, BatchWriteItemInput, CreateBackupInput, CreateGlobalTableInput,
    CreateTableInput, DeleteBackupInput, DeleteItemInput, DeleteTableInput, DescribeBackupInput,
    DescribeContinuousBackupsInput, DescribeGlobalTableInput, DescribeGlobalTableSettingsInput,
    DescribeLimitsInput, DescribeTableInput, DescribeTimeToLiveInput, GetItemInput,
    ListBackupsInput, ListGlobalTablesInput, ListTablesInput, ListTagsOfResourceInput,
    PutItemInput, QueryInput, RestoreTableFromBackupInput, RestoreTableToPointInTimeInput,
    ScanInput, TagResourceInput, UntagResourceInput, UpdateContinuousBackupsInput,
    UpdateGlobalTableInput, UpdateGlobalTableSettingsInput, UpdateItemInput, UpdateTableInput,
    UpdateTimeToLiveInput,
};
use dynastack_model::operations::DynamoDBOperation;
use dynastack_model::output::{
    BatchGetItemOutput, BatchWriteItemOutput, CreateBackupOutput, CreateGlobalTableOutput,
    CreateTableOutput, DeleteBackupOutput, DeleteItemOutput, DeleteTableOutput,
    DescribeBackupOutput, DescribeContinuousBackupsOutput, DescribeGlobalTableOutput,
    DescribeGlobalTableSettingsOutput, DescribeLimitsOutput, DescribeTableOutput,
    DescribeTimeToLiveOutput, GetItemOutput, ListBackupsOutput, ListGlobalTablesOutput,
    ListTablesOutput, ListTagsOfResourceOutput, PutItemOutput, QueryOutput,
    RestoreTableFromBackupOutput, RestoreTableToPointInTimeOutput, ScanOutput, TagResourceOutput,
    UntagResourceOutput, UpdateContinuousBackupsOutput, UpdateGlobalTableOutput,
    UpdateGlobalTableSettingsOutput, UpdateItemOutput, UpdateTableOutput, UpdateTimeToLiveOutput,
};

use crate::config::ClientConfig;
use crate::response::CONTENT_TYPE;
use crate::target::{TARGET_HEADER, target_header};

/// Header carrying a unique id for each client invocation.
pub const INVOCATION_ID_HEADER: &str = "amz-sdk-invocation-id";

/// An input type that can be sent to DynamoDB.
pub trait DynamoDBRequest: Serialize {
    /// The output the service answers with.
    type Output: DeserializeOwned;

    /// The operation this input belongs to.
    const OPERATION: DynamoDBOperation;
}

macro_rules! impl_request {
    ($($input:ident => $output:ident: $op:ident),+ $(,)?) => {
        $(
            impl DynamoDBRequest for $input {
                type Output = $output;
                const OPERATION: DynamoDBOperation = DynamoDBOperation::$op;
            }
        )+
    };
}

impl_request! {
    BatchGetItemInput => BatchGetItemOutput: BatchGetItem,
    BatchWriteItemInput => BatchWriteItemOutput: BatchWriteItem,
    CreateBackupInput => CreateBackupOutput: CreateBackup,
    CreateGlobalTableInput => CreateGlobalTableOutput: CreateGlobalTable,
    CreateTableInput => CreateTableOutput: CreateTable,
    DeleteBackupInput => DeleteBackupOutput: DeleteBackup,
    DeleteItemInput => DeleteItemOutput: DeleteItem,
    DeleteTableInput => DeleteTableOutput: DeleteTable,
    DescribeBackupInput => DescribeBackupOutput: DescribeBackup,
    DescribeContinuousBackupsInput => DescribeContinuousBackupsOutput: DescribeContinuousBackups,
    DescribeGlobalTableInput => DescribeGlobalTableOutput: DescribeGlobalTable,
    DescribeGlobalTableSettingsInput => DescribeGlobalTableSettingsOutput: DescribeGlobalTableSettings,
    DescribeLimitsInput => DescribeLimitsOutput: DescribeLimits,
    DescribeTableInput => DescribeTableOutput: DescribeTable,
    DescribeTimeToLiveInput => DescribeTimeToLiveOutput: DescribeTimeToLive,
    GetItemInput => GetItemOutput: GetItem,
    ListBackupsInput => ListBackupsOutput: ListBackups,
    ListGlobalTablesInput => ListGlobalTablesOutput: ListGlobalTables,
    ListTablesInput => ListTablesOutput: ListTables,
    ListTagsOfResourceInput => ListTagsOfResourceOutput: ListTagsOfResource,
    PutItemInput => PutItemOutput: PutItem,
    QueryInput => QueryOutput: Query,
    RestoreTableFromBackupInput => RestoreTableFromBackupOutput: RestoreTableFromBackup,
    RestoreTableToPointInTimeInput => RestoreTableToPointInTimeOutput: RestoreTableToPointInTime,
    ScanInput => ScanOutput: Scan,
    TagResourceInput => TagResourceOutput: TagResource,
    UntagResourceInput => UntagResourceOutput: UntagResource,
    UpdateContinuousBackupsInput => UpdateContinuousBackupsOutput: UpdateContinuousBackups,
    UpdateGlobalTableInput => UpdateGlobalTableOutput: UpdateGlobalTable,
    UpdateGlobalTableSettingsInput => UpdateGlobalTableSettingsOutput: UpdateGlobalTableSettings,
    UpdateItemInput => UpdateItemOutput: UpdateItem,
    UpdateTableInput => UpdateTableOutput: UpdateTable,
    UpdateTimeToLiveInput => UpdateTimeToLiveOutput: UpdateTimeToLive,
}

/// Marshal an input into an HTTP request for the configured endpoint.
///
/// The request is `POST <endpoint>/` with the JSON-encoded input as body.
/// Signing is left to the transport.
pub fn build_request<I: DynamoDBRequest>(
    config: &ClientConfig,
    input: &I,
) -> Result<http::Request<Bytes>, DynamoDBError> {
    let op = I::OPERATION;
    let body = serde_json::to_vec(input).map_err(|e| {
        DynamoDBError::serialization_exception(format!("failed to encode {op} request: {e}"))
            .with_source(e)
    })?;

    let uri = format!("{}/", config.endpoint_url());
    tracing::debug!(operation = %op, %uri, bytes = body.len(), "marshalled DynamoDB request");

    http::Request::builder()
        .method(http::Method::POST)
        .uri(&uri)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header(http::header::CONTENT_LENGTH, body.len())
        .header(TARGET_HEADER, target_header(op))
        .header(INVOCATION_ID_HEADER, uuid::Uuid::new_v4().to_string())
        .body(Bytes::from(body))
        .map_err(|e| DynamoDBError::validation(format!("invalid endpoint {uri}: {e}")).with_source(e))
}

#[cfg(test)]
mod tests {
    use dynastack_model::error::DynamoDBErrorCode;
    use dynastack_model::types::{KeySchemaElement, KeyType};

    use super::*;
    use crate::target::resolve_operation;

    fn local_config() -> ClientConfig {
        ClientConfig::builder()
            .endpoint(Some("http://localhost:4566".to_owned()))
            .build()
    }

    #[test]
    fn test_should_build_post_request_with_target() {
        let input = DescribeTableInput::new("users");
        let request = build_request(&local_config(), &input).unwrap();

        assert_eq!(*request.method(), http::Method::POST);
        assert_eq!(request.uri(), "http://localhost:4566/");
        assert_eq!(
            request.headers().get(http::header::CONTENT_TYPE).unwrap(),
            CONTENT_TYPE
        );
        assert_eq!(
            resolve_operation(request.headers()).unwrap(),
            DynamoDBOperation::DescribeTable
        );
        assert!(request.headers().contains_key(INVOCATION_ID_HEADER));
        assert_eq!(request.body().as_ref(), br#"{"TableName":"users"}"#);
    }

    #[test]
    fn test_should_encode_empty_input_as_empty_object() {
        let request = build_request(&local_config(), &DescribeLimitsInput::default()).unwrap();
        assert_eq!(request.body().as_ref(), b"{}");
        assert_eq!(
            request.headers().get(http::header::CONTENT_LENGTH).unwrap(),
            "2"
        );
    }

    #[test]
    fn test_should_use_regional_endpoint_by_default() {
        let input = CreateTableInput::default()
            .with_table_name("users")
            .with_key_schema(vec![KeySchemaElement::new("pk", KeyType::Hash)]);
        let request = build_request(&ClientConfig::default(), &input).unwrap();
        assert_eq!(
            request.uri(),
            "https://dynamodb.us-east-1.amazonaws.com/"
        );
    }

    #[test]
    fn test_should_reject_malformed_endpoint() {
        let config = ClientConfig::builder()
            .endpoint(Some("not a uri".to_owned()))
            .build();
        let err = build_request(&config, &ListTablesInput::default()).unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::ValidationException);
    }

    #[test]
    fn test_should_bind_inputs_to_operations() {
        assert_eq!(
            <QueryInput as DynamoDBRequest>::OPERATION,
            DynamoDBOperation::Query
        );
        assert_eq!(
            <UpdateGlobalTableSettingsInput as DynamoDBRequest>::OPERATION,
            DynamoDBOperation::UpdateGlobalTableSettings
        );
    }
}
