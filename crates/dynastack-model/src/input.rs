//! DynamoDB input types, one per operation.
//!
//! Inputs use the same conventions as the shared shapes in [`crate::types`]:
//! every field is optional, unset fields are left out of the JSON payload,
//! and map-valued fields can be filled one entry at a time.

use std::collections::BTreeMap;

use crate::attribute_value::AttributeValue;
use crate::shape::{map_entries, shape};
use crate::timestamp::Timestamp;
use crate::types::{
    AttributeDefinition, AttributeValueUpdate, AutoScalingSettingsUpdate, BackupTypeFilter,
    Condition, ConditionalOperator, ExpectedAttributeValue, ExpressionAttributeNames,
    ExpressionAttributeValues, GlobalSecondaryIndex, GlobalSecondaryIndexUpdate,
    GlobalTableGlobalSecondaryIndexSettingsUpdate, Item, Key, KeySchemaElement, KeysAndAttributes,
    LocalSecondaryIndex, PointInTimeRecoverySpecification, ProvisionedThroughput, Replica,
    ReplicaSettingsUpdate, ReplicaUpdate, ReturnConsumedCapacity, ReturnItemCollectionMetrics,
    ReturnValue, SSESpecification, Select, StreamSpecification, Tag, TimeToLiveSpecification,
    WriteRequest,
};

// ---------------------------------------------------------------------------
// Table management
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `CreateTable` operation.
    #[derive(Eq, Hash)]
    pub struct CreateTableInput {
        /// The attributes that describe the key schema for the table and indexes.
        pub attribute_definitions: Vec<AttributeDefinition> => with_attribute_definitions,
        /// The name of the table to create.
        pub table_name: String => with_table_name,
        /// The primary key of the table.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// Local secondary indexes to create on the table.
        pub local_secondary_indexes: Vec<LocalSecondaryIndex> => with_local_secondary_indexes,
        /// Global secondary indexes to create on the table.
        pub global_secondary_indexes: Vec<GlobalSecondaryIndex> => with_global_secondary_indexes,
        /// The provisioned throughput of the table.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
        /// The stream settings of the table.
        pub stream_specification: StreamSpecification => with_stream_specification,
        /// The server-side encryption settings of the table.
        #[serde(rename = "SSESpecification")]
        pub sse_specification: SSESpecification => with_sse_specification,
    }
}

shape! {
    /// Input for the `DeleteTable` operation.
    #[derive(Eq, Hash)]
    pub struct DeleteTableInput {
        /// The name of the table to delete.
        pub table_name: String => with_table_name,
    }
}

shape! {
    /// Input for the `DescribeTable` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeTableInput {
        /// The name of the table to describe.
        pub table_name: String => with_table_name,
    }
}

shape! {
    /// Input for the `UpdateTable` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateTableInput {
        /// Attribute definitions, required when new index keys are introduced.
        pub attribute_definitions: Vec<AttributeDefinition> => with_attribute_definitions,
        /// The name of the table to update.
        pub table_name: String => with_table_name,
        /// The new provisioned throughput of the table.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
        /// Global secondary indexes to create, update or delete.
        pub global_secondary_index_updates: Vec<GlobalSecondaryIndexUpdate> => with_global_secondary_index_updates,
        /// The new stream settings of the table.
        pub stream_specification: StreamSpecification => with_stream_specification,
        /// The new server-side encryption settings of the table.
        #[serde(rename = "SSESpecification")]
        pub sse_specification: SSESpecification => with_sse_specification,
    }
}

shape! {
    /// Input for the `ListTables` operation.
    #[derive(Eq, Hash)]
    pub struct ListTablesInput {
        /// The first table name to evaluate, from a previous page.
        pub exclusive_start_table_name: String => with_exclusive_start_table_name,
        /// The maximum number of table names to return.
        pub limit: i32 => with_limit,
    }
}

shape! {
    /// Input for the `DescribeLimits` operation. It takes no parameters.
    #[derive(Eq, Hash)]
    pub struct DescribeLimitsInput {}
}

shape! {
    /// Input for the `DescribeTimeToLive` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeTimeToLiveInput {
        /// The name of the table.
        pub table_name: String => with_table_name,
    }
}

shape! {
    /// Input for the `UpdateTimeToLive` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateTimeToLiveInput {
        /// The name of the table.
        pub table_name: String => with_table_name,
        /// The TTL settings to apply.
        pub time_to_live_specification: TimeToLiveSpecification => with_time_to_live_specification,
    }
}

// ---------------------------------------------------------------------------
// Item operations
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `PutItem` operation.
    #[derive(Eq, Hash)]
    pub struct PutItemInput {
        /// The name of the table to write to.
        pub table_name: String => with_table_name,
        /// The item to put.
        pub item: Item => with_item,
        /// Legacy conditional expectations.
        pub expected: BTreeMap<String, ExpectedAttributeValue> => with_expected,
        /// Which item attributes to return.
        pub return_values: ReturnValue => with_return_values,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// Whether to return item collection metrics.
        pub return_item_collection_metrics: ReturnItemCollectionMetrics => with_return_item_collection_metrics,
        /// Legacy operator combining the `Expected` conditions.
        pub conditional_operator: ConditionalOperator => with_conditional_operator,
        /// A condition that must hold for the put to succeed.
        pub condition_expression: String => with_condition_expression,
        /// Substitution tokens for attribute names.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
        /// Substitution tokens for attribute values.
        pub expression_attribute_values: ExpressionAttributeValues => with_expression_attribute_values,
    }
}

map_entries! {
    PutItemInput {
        item: AttributeValue => add_item_entry, clear_item_entries;
        expected: ExpectedAttributeValue => add_expected_entry, clear_expected_entries;
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
        expression_attribute_values: AttributeValue => add_expression_attribute_values_entry, clear_expression_attribute_values_entries;
    }
}

shape! {
    /// Input for the `GetItem` operation.
    #[derive(Eq, Hash)]
    pub struct GetItemInput {
        /// The name of the table to read from.
        pub table_name: String => with_table_name,
        /// The primary key of the item.
        pub key: Key => with_key,
        /// Legacy list of attributes to return.
        pub attributes_to_get: Vec<String> => with_attributes_to_get,
        /// Whether to use a strongly consistent read.
        pub consistent_read: bool => with_consistent_read,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// The attributes to return, as a projection expression.
        pub projection_expression: String => with_projection_expression,
        /// Substitution tokens for attribute names.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
    }
}

map_entries! {
    GetItemInput {
        key: AttributeValue => add_key_entry, clear_key_entries;
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
    }
}

shape! {
    /// Input for the `UpdateItem` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateItemInput {
        /// The name of the table containing the item.
        pub table_name: String => with_table_name,
        /// The primary key of the item.
        pub key: Key => with_key,
        /// Legacy per-attribute updates.
        pub attribute_updates: BTreeMap<String, AttributeValueUpdate> => with_attribute_updates,
        /// Legacy conditional expectations.
        pub expected: BTreeMap<String, ExpectedAttributeValue> => with_expected,
        /// Legacy operator combining the `Expected` conditions.
        pub conditional_operator: ConditionalOperator => with_conditional_operator,
        /// Which item attributes to return.
        pub return_values: ReturnValue => with_return_values,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// Whether to return item collection metrics.
        pub return_item_collection_metrics: ReturnItemCollectionMetrics => with_return_item_collection_metrics,
        /// The update to apply, as an update expression.
        pub update_expression: String => with_update_expression,
        /// A condition that must hold for the update to succeed.
        pub condition_expression: String => with_condition_expression,
        /// Substitution tokens for attribute names.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
        /// Substitution tokens for attribute values.
        pub expression_attribute_values: ExpressionAttributeValues => with_expression_attribute_values,
    }
}

map_entries! {
    UpdateItemInput {
        key: AttributeValue => add_key_entry, clear_key_entries;
        attribute_updates: AttributeValueUpdate => add_attribute_updates_entry, clear_attribute_updates_entries;
        expected: ExpectedAttributeValue => add_expected_entry, clear_expected_entries;
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
        expression_attribute_values: AttributeValue => add_expression_attribute_values_entry, clear_expression_attribute_values_entries;
    }
}

shape! {
    /// Input for the `DeleteItem` operation.
    #[derive(Eq, Hash)]
    pub struct DeleteItemInput {
        /// The name of the table containing the item.
        pub table_name: String => with_table_name,
        /// The primary key of the item.
        pub key: Key => with_key,
        /// Legacy conditional expectations.
        pub expected: BTreeMap<String, ExpectedAttributeValue> => with_expected,
        /// Legacy operator combining the `Expected` conditions.
        pub conditional_operator: ConditionalOperator => with_conditional_operator,
        /// Which item attributes to return.
        pub return_values: ReturnValue => with_return_values,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// Whether to return item collection metrics.
        pub return_item_collection_metrics: ReturnItemCollectionMetrics => with_return_item_collection_metrics,
        /// A condition that must hold for the delete to succeed.
        pub condition_expression: String => with_condition_expression,
        /// Substitution tokens for attribute names.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
        /// Substitution tokens for attribute values.
        pub expression_attribute_values: ExpressionAttributeValues => with_expression_attribute_values,
    }
}

map_entries! {
    DeleteItemInput {
        key: AttributeValue => add_key_entry, clear_key_entries;
        expected: ExpectedAttributeValue => add_expected_entry, clear_expected_entries;
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
        expression_attribute_values: AttributeValue => add_expression_attribute_values_entry, clear_expression_attribute_values_entries;
    }
}

// ---------------------------------------------------------------------------
// Query & Scan
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `Query` operation.
    #[derive(Eq, Hash)]
    pub struct QueryInput {
        /// The name of the table to query.
        pub table_name: String => with_table_name,
        /// The name of an index to query instead of the table.
        pub index_name: String => with_index_name,
        /// Which attributes to return.
        pub select: Select => with_select,
        /// Legacy list of attributes to return.
        pub attributes_to_get: Vec<String> => with_attributes_to_get,
        /// The maximum number of items to evaluate.
        pub limit: i32 => with_limit,
        /// Whether to use strongly consistent reads.
        pub consistent_read: bool => with_consistent_read,
        /// Legacy key conditions.
        pub key_conditions: BTreeMap<String, Condition> => with_key_conditions,
        /// Legacy filter conditions on non-key attributes.
        pub query_filter: BTreeMap<String, Condition> => with_query_filter,
        /// Legacy operator combining the `QueryFilter` conditions.
        pub conditional_operator: ConditionalOperator => with_conditional_operator,
        /// Traverse the index in ascending (`true`) or descending order.
        pub scan_index_forward: bool => with_scan_index_forward,
        /// The key to start after, from a previous page.
        pub exclusive_start_key: Key => with_exclusive_start_key,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// The attributes to return, as a projection expression.
        pub projection_expression: String => with_projection_expression,
        /// A filter applied after the query, before results are returned.
        pub filter_expression: String => with_filter_expression,
        /// The key condition, as an expression.
        pub key_condition_expression: String => with_key_condition_expression,
        /// Substitution tokens for attribute names.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
        /// Substitution tokens for attribute values.
        pub expression_attribute_values: ExpressionAttributeValues => with_expression_attribute_values,
    }
}

map_entries! {
    QueryInput {
        key_conditions: Condition => add_key_conditions_entry, clear_key_conditions_entries;
        query_filter: Condition => add_query_filter_entry, clear_query_filter_entries;
        exclusive_start_key: AttributeValue => add_exclusive_start_key_entry, clear_exclusive_start_key_entries;
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
        expression_attribute_values: AttributeValue => add_expression_attribute_values_entry, clear_expression_attribute_values_entries;
    }
}

shape! {
    /// Input for the `Scan` operation.
    #[derive(Eq, Hash)]
    pub struct ScanInput {
        /// The name of the table to scan.
        pub table_name: String => with_table_name,
        /// The name of an index to scan instead of the table.
        pub index_name: String => with_index_name,
        /// Legacy list of attributes to return.
        pub attributes_to_get: Vec<String> => with_attributes_to_get,
        /// The maximum number of items to evaluate.
        pub limit: i32 => with_limit,
        /// Which attributes to return.
        pub select: Select => with_select,
        /// Legacy filter conditions.
        pub scan_filter: BTreeMap<String, Condition> => with_scan_filter,
        /// Legacy operator combining the `ScanFilter` conditions.
        pub conditional_operator: ConditionalOperator => with_conditional_operator,
        /// The key to start after, from a previous page.
        pub exclusive_start_key: Key => with_exclusive_start_key,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// The total number of segments of a parallel scan.
        pub total_segments: i32 => with_total_segments,
        /// The segment scanned by this request in a parallel scan.
        pub segment: i32 => with_segment,
        /// The attributes to return, as a projection expression.
        pub projection_expression: String => with_projection_expression,
        /// A filter applied after the scan, before results are returned.
        pub filter_expression: String => with_filter_expression,
        /// Substitution tokens for attribute names.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
        /// Substitution tokens for attribute values.
        pub expression_attribute_values: ExpressionAttributeValues => with_expression_attribute_values,
        /// Whether to use strongly consistent reads.
        pub consistent_read: bool => with_consistent_read,
    }
}

map_entries! {
    ScanInput {
        scan_filter: Condition => add_scan_filter_entry, clear_scan_filter_entries;
        exclusive_start_key: AttributeValue => add_exclusive_start_key_entry, clear_exclusive_start_key_entries;
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
        expression_attribute_values: AttributeValue => add_expression_attribute_values_entry, clear_expression_attribute_values_entries;
    }
}

// ---------------------------------------------------------------------------
// Batch operations
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `BatchGetItem` operation.
    #[derive(Eq, Hash)]
    pub struct BatchGetItemInput {
        /// Keys to fetch, per table.
        pub request_items: BTreeMap<String, KeysAndAttributes> => with_request_items,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
    }
}

map_entries! {
    BatchGetItemInput {
        request_items: KeysAndAttributes => add_request_items_entry, clear_request_items_entries;
    }
}

shape! {
    /// Input for the `BatchWriteItem` operation.
    #[derive(Eq, Hash)]
    pub struct BatchWriteItemInput {
        /// Puts and deletes to perform, per table.
        pub request_items: BTreeMap<String, Vec<WriteRequest>> => with_request_items,
        /// Whether to return consumed capacity.
        pub return_consumed_capacity: ReturnConsumedCapacity => with_return_consumed_capacity,
        /// Whether to return item collection metrics.
        pub return_item_collection_metrics: ReturnItemCollectionMetrics => with_return_item_collection_metrics,
    }
}

map_entries! {
    BatchWriteItemInput {
        request_items: Vec<WriteRequest> => add_request_items_entry, clear_request_items_entries;
    }
}

// ---------------------------------------------------------------------------
// Backups
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `CreateBackup` operation.
    #[derive(Eq, Hash)]
    pub struct CreateBackupInput {
        /// The name of the table to back up.
        pub table_name: String => with_table_name,
        /// The name of the backup.
        pub backup_name: String => with_backup_name,
    }
}

shape! {
    /// Input for the `DeleteBackup` operation.
    #[derive(Eq, Hash)]
    pub struct DeleteBackupInput {
        /// The ARN of the backup to delete.
        pub backup_arn: String => with_backup_arn,
    }
}

shape! {
    /// Input for the `DescribeBackup` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeBackupInput {
        /// The ARN of the backup to describe.
        pub backup_arn: String => with_backup_arn,
    }
}

shape! {
    /// Input for the `ListBackups` operation.
    #[derive(Eq, Hash)]
    pub struct ListBackupsInput {
        /// Only list backups of this table.
        pub table_name: String => with_table_name,
        /// The maximum number of backups to return.
        pub limit: i32 => with_limit,
        /// Only list backups created at or after this time.
        pub time_range_lower_bound: Timestamp => with_time_range_lower_bound,
        /// Only list backups created before this time.
        pub time_range_upper_bound: Timestamp => with_time_range_upper_bound,
        /// The backup to start after, from a previous page.
        pub exclusive_start_backup_arn: String => with_exclusive_start_backup_arn,
        /// Which kinds of backup to list.
        pub backup_type: BackupTypeFilter => with_backup_type,
    }
}

shape! {
    /// Input for the `DescribeContinuousBackups` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeContinuousBackupsInput {
        /// The name of the table.
        pub table_name: String => with_table_name,
    }
}

shape! {
    /// Input for the `UpdateContinuousBackups` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateContinuousBackupsInput {
        /// The name of the table.
        pub table_name: String => with_table_name,
        /// The point-in-time recovery setting to apply.
        pub point_in_time_recovery_specification: PointInTimeRecoverySpecification => with_point_in_time_recovery_specification,
    }
}

shape! {
    /// Input for the `RestoreTableFromBackup` operation.
    #[derive(Eq, Hash)]
    pub struct RestoreTableFromBackupInput {
        /// The name of the table to create from the backup.
        pub target_table_name: String => with_target_table_name,
        /// The ARN of the backup to restore.
        pub backup_arn: String => with_backup_arn,
    }
}

shape! {
    /// Input for the `RestoreTableToPointInTime` operation.
    #[derive(Eq, Hash)]
    pub struct RestoreTableToPointInTimeInput {
        /// The name of the table to restore.
        pub source_table_name: String => with_source_table_name,
        /// The name of the table to create.
        pub target_table_name: String => with_target_table_name,
        /// Restore to the latest restorable time instead of `RestoreDateTime`.
        pub use_latest_restorable_time: bool => with_use_latest_restorable_time,
        /// The point in time to restore to.
        pub restore_date_time: Timestamp => with_restore_date_time,
    }
}

// ---------------------------------------------------------------------------
// Global tables
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `CreateGlobalTable` operation.
    #[derive(Eq, Hash)]
    pub struct CreateGlobalTableInput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
        /// The regions in which to create replicas.
        pub replication_group: Vec<Replica> => with_replication_group,
    }
}

shape! {
    /// Input for the `DescribeGlobalTable` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeGlobalTableInput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
    }
}

shape! {
    /// Input for the `DescribeGlobalTableSettings` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeGlobalTableSettingsInput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
    }
}

shape! {
    /// Input for the `ListGlobalTables` operation.
    #[derive(Eq, Hash)]
    pub struct ListGlobalTablesInput {
        /// The first global table name to evaluate, from a previous page.
        pub exclusive_start_global_table_name: String => with_exclusive_start_global_table_name,
        /// The maximum number of global tables to return.
        pub limit: i32 => with_limit,
        /// Only list global tables with a replica in this region.
        pub region_name: String => with_region_name,
    }
}

shape! {
    /// Input for the `UpdateGlobalTable` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateGlobalTableInput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
        /// Replicas to add or remove.
        pub replica_updates: Vec<ReplicaUpdate> => with_replica_updates,
    }
}

shape! {
    /// Input for the `UpdateGlobalTableSettings` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateGlobalTableSettingsInput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
        /// Provisioned write capacity applied to every replica.
        pub global_table_provisioned_write_capacity_units: i64 => with_global_table_provisioned_write_capacity_units,
        /// Auto scaling of write capacity applied to every replica.
        pub global_table_provisioned_write_capacity_auto_scaling_settings_update:
            AutoScalingSettingsUpdate
            => with_global_table_provisioned_write_capacity_auto_scaling_settings_update,
        /// Write capacity settings per global secondary index.
        pub global_table_global_secondary_index_settings_update:
            Vec<GlobalTableGlobalSecondaryIndexSettingsUpdate>
            => with_global_table_global_secondary_index_settings_update,
        /// Capacity settings per replica.
        pub replica_settings_update: Vec<ReplicaSettingsUpdate> => with_replica_settings_update,
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

shape! {
    /// Input for the `TagResource` operation.
    #[derive(Eq, Hash)]
    pub struct TagResourceInput {
        /// The ARN of the resource to tag.
        pub resource_arn: String => with_resource_arn,
        /// The tags to add.
        pub tags: Vec<Tag> => with_tags,
    }
}

shape! {
    /// Input for the `UntagResource` operation.
    #[derive(Eq, Hash)]
    pub struct UntagResourceInput {
        /// The ARN of the resource to untag.
        pub resource_arn: String => with_resource_arn,
        /// The tag keys to remove.
        pub tag_keys: Vec<String> => with_tag_keys,
    }
}

shape! {
    /// Input for the `ListTagsOfResource` operation.
    #[derive(Eq, Hash)]
    pub struct ListTagsOfResourceInput {
        /// The ARN of the resource.
        pub resource_arn: String => with_resource_arn,
        /// The continuation token from a previous page.
        pub next_token: String => with_next_token,
    }
}

// ---------------------------------------------------------------------------
// Positional constructors
// ---------------------------------------------------------------------------

macro_rules! impl_new {
    ($($name:ident($with:ident)),+ $(,)?) => {
        $(
            impl $name {
                #[doc = concat!("Create the input via `", stringify!($with), "`.")]
                #[must_use]
                pub fn new(value: impl Into<String>) -> Self {
                    Self::default().$with(value)
                }
            }
        )+
    };
}

impl_new!(
    DeleteTableInput(with_table_name),
    DescribeTableInput(with_table_name),
    DescribeTimeToLiveInput(with_table_name),
    DescribeContinuousBackupsInput(with_table_name),
    DeleteBackupInput(with_backup_arn),
    DescribeBackupInput(with_backup_arn),
    DescribeGlobalTableInput(with_global_table_name),
    DescribeGlobalTableSettingsInput(with_global_table_name),
    ListTagsOfResourceInput(with_resource_arn),
);

impl CreateTableInput {
    /// Create the input with the table name, key schema and attribute
    /// definitions set.
    #[must_use]
    pub fn new(
        table_name: impl Into<String>,
        key_schema: Vec<KeySchemaElement>,
        attribute_definitions: Vec<AttributeDefinition>,
    ) -> Self {
        Self::default()
            .with_table_name(table_name)
            .with_key_schema(key_schema)
            .with_attribute_definitions(attribute_definitions)
    }
}

impl GetItemInput {
    /// Create the input with the table name and key set.
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self::default().with_table_name(table_name).with_key(key)
    }
}

impl PutItemInput {
    /// Create the input with the table name and item set.
    #[must_use]
    pub fn new(table_name: impl Into<String>, item: Item) -> Self {
        Self::default().with_table_name(table_name).with_item(item)
    }
}

impl DeleteItemInput {
    /// Create the input with the table name and key set.
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self::default().with_table_name(table_name).with_key(key)
    }
}
