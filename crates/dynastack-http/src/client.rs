//! Typed DynamoDB client over a pluggable transport.
//!
//! The client marshals an input, hands the request to a [`Transport`], and
//! unmarshals the response. Signing, connection handling and retries belong
//! to the transport.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;

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
use crate::request::{DynamoDBRequest, build_request};
use crate::response::parse_response;

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<http::Response<Bytes>, DynamoDBError>> + Send + 'a>>;

/// Moves a marshalled request to the service and returns its raw response.
///
/// Implementations sign the request if needed and perform the network
/// exchange. Transport failures surface as [`DynamoDBError`].
pub trait Transport: Send + Sync {
    /// Send one request and wait for the full response.
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_> {
        (**self).send(request)
    }
}

/// A DynamoDB client bound to one endpoint and transport.
#[derive(Debug, Clone)]
pub struct DynamoDBClient<T> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl<T: Transport> DynamoDBClient<T> {
    /// Create a new client.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send any input and decode the matching output.
    pub async fn send<I: DynamoDBRequest>(&self, input: &I) -> Result<I::Output, DynamoDBError> {
        let op = I::OPERATION;
        let request = build_request(&self.config, input)?;
        tracing::debug!(operation = %op, "sending DynamoDB request");

        let response = self.transport.send(request).await.map_err(|err| {
            tracing::warn!(operation = %op, error = %err, "DynamoDB transport failed");
            err
        })?;

        parse_response::<I>(&self.config, response)
    }
}

macro_rules! client_operations {
    ($( $(#[$doc:meta])* $method:ident($input:ident) -> $output:ident; )+) => {
        impl<T: Transport> DynamoDBClient<T> {
            $(
                $(#[$doc])*
                pub async fn $method(&self, input: $input) -> Result<$output, DynamoDBError> {
                    self.send(&input).await
                }
            )+
        }
    };
}

client_operations! {
    /// Read items from one or more tables by primary key.
    batch_get_item(BatchGetItemInput) -> BatchGetItemOutput;
    /// Put or delete items in one or more tables.
    batch_write_item(BatchWriteItemInput) -> BatchWriteItemOutput;
    /// Create an on-demand backup of a table.
    create_backup(CreateBackupInput) -> CreateBackupOutput;
    /// Create a global table from existing regional tables.
    create_global_table(CreateGlobalTableInput) -> CreateGlobalTableOutput;
    /// Create a new table.
    create_table(CreateTableInput) -> CreateTableOutput;
    /// Delete an on-demand backup.
    delete_backup(DeleteBackupInput) -> DeleteBackupOutput;
    /// Delete an item by primary key.
    delete_item(DeleteItemInput) -> DeleteItemOutput;
    /// Delete a table.
    delete_table(DeleteTableInput) -> DeleteTableOutput;
    /// Describe an on-demand backup.
    describe_backup(DescribeBackupInput) -> DescribeBackupOutput;
    /// Describe continuous backups and point-in-time recovery.
    describe_continuous_backups(DescribeContinuousBackupsInput) -> DescribeContinuousBackupsOutput;
    /// Describe a global table.
    describe_global_table(DescribeGlobalTableInput) -> DescribeGlobalTableOutput;
    /// Describe the capacity settings of a global table.
    describe_global_table_settings(DescribeGlobalTableSettingsInput) -> DescribeGlobalTableSettingsOutput;
    /// Describe the account and table capacity limits.
    describe_limits(DescribeLimitsInput) -> DescribeLimitsOutput;
    /// Describe a table.
    describe_table(DescribeTableInput) -> DescribeTableOutput;
    /// Describe the Time to Live settings of a table.
    describe_time_to_live(DescribeTimeToLiveInput) -> DescribeTimeToLiveOutput;
    /// Get an item by primary key.
    get_item(GetItemInput) -> GetItemOutput;
    /// List on-demand backups.
    list_backups(ListBackupsInput) -> ListBackupsOutput;
    /// List global tables.
    list_global_tables(ListGlobalTablesInput) -> ListGlobalTablesOutput;
    /// List tables.
    list_tables(ListTablesInput) -> ListTablesOutput;
    /// List the tags of a resource.
    list_tags_of_resource(ListTagsOfResourceInput) -> ListTagsOfResourceOutput;
    /// Put (insert or replace) an item.
    put_item(PutItemInput) -> PutItemOutput;
    /// Query items by key condition.
    query(QueryInput) -> QueryOutput;
    /// Create a table from an on-demand backup.
    restore_table_from_backup(RestoreTableFromBackupInput) -> RestoreTableFromBackupOutput;
    /// Create a table from a point in time of another table.
    restore_table_to_point_in_time(RestoreTableToPointInTimeInput) -> RestoreTableToPointInTimeOutput;
    /// Scan all items in a table or index.
    scan(ScanInput) -> ScanOutput;
    /// Add tags to a resource.
    tag_resource(TagResourceInput) -> TagResourceOutput;
    /// Remove tags from a resource.
    untag_resource(UntagResourceInput) -> UntagResourceOutput;
    /// Enable or disable point-in-time recovery.
    update_continuous_backups(UpdateContinuousBackupsInput) -> UpdateContinuousBackupsOutput;
    /// Add or remove replicas of a global table.
    update_global_table(UpdateGlobalTableInput) -> UpdateGlobalTableOutput;
    /// Update the capacity settings of a global table.
    update_global_table_settings(UpdateGlobalTableSettingsInput) -> UpdateGlobalTableSettingsOutput;
    /// Update an item.
    update_item(UpdateItemInput) -> UpdateItemOutput;
    /// Update a table's throughput, indexes, streams or encryption.
    update_table(UpdateTableInput) -> UpdateTableOutput;
    /// Enable or disable Time to Live on a table.
    update_time_to_live(UpdateTimeToLiveInput) -> UpdateTimeToLiveOutput;
}
