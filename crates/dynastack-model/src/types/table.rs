//! Table descriptor family: key schema, indexes, streams, encryption, TTL,
//! restore provenance and the table description itself.

use super::{
    IndexStatus, KeyType, ProjectionType, ProvisionedThroughput, ProvisionedThroughputDescription,
    ScalarAttributeType, SseStatus, SseType, StreamViewType, TableStatus, TimeToLiveStatus,
};
use crate::shape::shape;
use crate::timestamp::Timestamp;

// ---------------------------------------------------------------------------
// Key schema & attributes
// ---------------------------------------------------------------------------

shape! {
    /// An element of the key schema for a table or index.
    #[derive(Eq, Hash)]
    pub struct KeySchemaElement {
        /// The name of the key attribute.
        pub attribute_name: String => with_attribute_name,
        /// The role of the attribute (`HASH` or `RANGE`).
        pub key_type: KeyType => with_key_type,
    }
}

impl KeySchemaElement {
    /// Create a key schema element from its two parts.
    #[must_use]
    pub fn new(attribute_name: impl Into<String>, key_type: impl Into<KeyType>) -> Self {
        Self::default()
            .with_attribute_name(attribute_name)
            .with_key_type(key_type)
    }
}

shape! {
    /// An attribute name and its scalar type, declared for key attributes.
    #[derive(Eq, Hash)]
    pub struct AttributeDefinition {
        /// The name of the attribute.
        pub attribute_name: String => with_attribute_name,
        /// The scalar data type of the attribute (`S`, `N`, or `B`).
        pub attribute_type: ScalarAttributeType => with_attribute_type,
    }
}

impl AttributeDefinition {
    /// Create an attribute definition from its two parts.
    #[must_use]
    pub fn new(
        attribute_name: impl Into<String>,
        attribute_type: impl Into<ScalarAttributeType>,
    ) -> Self {
        Self::default()
            .with_attribute_name(attribute_name)
            .with_attribute_type(attribute_type)
    }
}

shape! {
    /// Attributes copied (projected) from the table into an index.
    #[derive(Eq, Hash)]
    pub struct Projection {
        /// The set of attributes projected into the index.
        pub projection_type: ProjectionType => with_projection_type,
        /// The non-key attributes to project when the type is `INCLUDE`.
        pub non_key_attributes: Vec<String> => with_non_key_attributes,
    }
}

// ---------------------------------------------------------------------------
// Secondary indexes
// ---------------------------------------------------------------------------

shape! {
    /// Local secondary index definition (input for `CreateTable`).
    #[derive(Eq, Hash)]
    pub struct LocalSecondaryIndex {
        /// The name of the local secondary index.
        pub index_name: String => with_index_name,
        /// The key schema; the partition key must match the table's.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The attributes projected into this index.
        pub projection: Projection => with_projection,
    }
}

shape! {
    /// Local secondary index description (output from `DescribeTable`).
    #[derive(Eq, Hash)]
    pub struct LocalSecondaryIndexDescription {
        /// The name of the local secondary index.
        pub index_name: String => with_index_name,
        /// The key schema for this index.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The projection settings for this index.
        pub projection: Projection => with_projection,
        /// The total size of the index in bytes.
        pub index_size_bytes: i64 => with_index_size_bytes,
        /// The number of items in the index.
        pub item_count: i64 => with_item_count,
        /// The ARN of the index.
        pub index_arn: String => with_index_arn,
    }
}

shape! {
    /// Global secondary index definition (input for `CreateTable`).
    #[derive(Eq, Hash)]
    pub struct GlobalSecondaryIndex {
        /// The name of the global secondary index.
        pub index_name: String => with_index_name,
        /// The key schema for this index.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The attributes projected into this index.
        pub projection: Projection => with_projection,
        /// The provisioned throughput for this index.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
    }
}

shape! {
    /// Global secondary index description (output from `DescribeTable`).
    #[derive(Eq, Hash)]
    pub struct GlobalSecondaryIndexDescription {
        /// The name of the global secondary index.
        pub index_name: String => with_index_name,
        /// The key schema for this index.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The projection settings for this index.
        pub projection: Projection => with_projection,
        /// The current status of the index.
        pub index_status: IndexStatus => with_index_status,
        /// Whether the index is currently backfilling.
        pub backfilling: bool => with_backfilling,
        /// The provisioned throughput settings for this index.
        pub provisioned_throughput: ProvisionedThroughputDescription => with_provisioned_throughput,
        /// The total size of the index in bytes.
        pub index_size_bytes: i64 => with_index_size_bytes,
        /// The number of items in the index.
        pub item_count: i64 => with_item_count,
        /// The ARN of the index.
        pub index_arn: String => with_index_arn,
    }
}

shape! {
    /// Local secondary index as recorded in a backup.
    #[derive(Eq, Hash)]
    pub struct LocalSecondaryIndexInfo {
        /// The name of the local secondary index.
        pub index_name: String => with_index_name,
        /// The key schema for this index.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The projection settings for this index.
        pub projection: Projection => with_projection,
    }
}

shape! {
    /// Global secondary index as recorded in a backup.
    #[derive(Eq, Hash)]
    pub struct GlobalSecondaryIndexInfo {
        /// The name of the global secondary index.
        pub index_name: String => with_index_name,
        /// The key schema for this index.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The projection settings for this index.
        pub projection: Projection => with_projection,
        /// The provisioned throughput for this index.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
    }
}

shape! {
    /// One of create, update or delete for a global secondary index (`UpdateTable`).
    ///
    /// Exactly one action is expected to be set.
    #[derive(Eq, Hash)]
    pub struct GlobalSecondaryIndexUpdate {
        /// Change the provisioned throughput of an existing index.
        pub update: UpdateGlobalSecondaryIndexAction => with_update,
        /// Add a new index to the table.
        pub create: CreateGlobalSecondaryIndexAction => with_create,
        /// Remove an index from the table.
        pub delete: DeleteGlobalSecondaryIndexAction => with_delete,
    }
}

shape! {
    /// New global secondary index to add to an existing table.
    #[derive(Eq, Hash)]
    pub struct CreateGlobalSecondaryIndexAction {
        /// The name of the index to create.
        pub index_name: String => with_index_name,
        /// The key schema for the index.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The attributes projected into the index.
        pub projection: Projection => with_projection,
        /// The provisioned throughput for the index.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
    }
}

shape! {
    /// New provisioned throughput for an existing global secondary index.
    #[derive(Eq, Hash)]
    pub struct UpdateGlobalSecondaryIndexAction {
        /// The name of the index to update.
        pub index_name: String => with_index_name,
        /// The new provisioned throughput.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
    }
}

shape! {
    /// Global secondary index to remove from a table.
    #[derive(Eq, Hash)]
    pub struct DeleteGlobalSecondaryIndexAction {
        /// The name of the index to delete.
        pub index_name: String => with_index_name,
    }
}

// ---------------------------------------------------------------------------
// Streams, encryption, TTL
// ---------------------------------------------------------------------------

shape! {
    /// Stream settings for a table.
    #[derive(Eq, Hash)]
    pub struct StreamSpecification {
        /// Whether streams are enabled on the table.
        pub stream_enabled: bool => with_stream_enabled,
        /// What is written to the stream when an item is modified.
        pub stream_view_type: StreamViewType => with_stream_view_type,
    }
}

shape! {
    /// Requested server-side encryption settings (`CreateTable` / `UpdateTable`).
    #[derive(Eq, Hash)]
    pub struct SSESpecification {
        /// Whether server-side encryption is enabled.
        pub enabled: bool => with_enabled,
        /// The encryption type.
        #[serde(rename = "SSEType")]
        pub sse_type: SseType => with_sse_type,
        /// The KMS key to use for `KMS` encryption.
        #[serde(rename = "KMSMasterKeyId")]
        pub kms_master_key_id: String => with_kms_master_key_id,
    }
}

shape! {
    /// Current server-side encryption state of a table.
    #[derive(Eq, Hash)]
    pub struct SSEDescription {
        /// The current status of server-side encryption.
        pub status: SseStatus => with_status,
        /// The encryption type.
        #[serde(rename = "SSEType")]
        pub sse_type: SseType => with_sse_type,
        /// The KMS key ARN used for encryption.
        #[serde(rename = "KMSMasterKeyArn")]
        pub kms_master_key_arn: String => with_kms_master_key_arn,
    }
}

shape! {
    /// Requested Time to Live settings (`UpdateTimeToLive`).
    #[derive(Eq, Hash)]
    pub struct TimeToLiveSpecification {
        /// Whether TTL is to be enabled (`true`) or disabled (`false`).
        pub enabled: bool => with_enabled,
        /// The attribute holding the expiry timestamp.
        pub attribute_name: String => with_attribute_name,
    }
}

shape! {
    /// Current Time to Live state of a table.
    #[derive(Eq, Hash)]
    pub struct TimeToLiveDescription {
        /// The TTL status.
        pub time_to_live_status: TimeToLiveStatus => with_time_to_live_status,
        /// The attribute holding the expiry timestamp.
        pub attribute_name: String => with_attribute_name,
    }
}

// ---------------------------------------------------------------------------
// Restore provenance & table description
// ---------------------------------------------------------------------------

shape! {
    /// Where a restored table came from.
    #[derive(Eq, Hash)]
    pub struct RestoreSummary {
        /// The ARN of the backup the table was restored from.
        pub source_backup_arn: String => with_source_backup_arn,
        /// The ARN of the source table.
        pub source_table_arn: String => with_source_table_arn,
        /// The point in time the table was restored to.
        pub restore_date_time: Timestamp => with_restore_date_time,
        /// Whether the restore is still running.
        pub restore_in_progress: bool => with_restore_in_progress,
    }
}

shape! {
    /// Static and dynamic configuration of one table.
    ///
    /// Returned by `CreateTable`, `DescribeTable`, `UpdateTable`, `DeleteTable`
    /// and the restore operations.
    #[derive(Eq, Hash)]
    pub struct TableDescription {
        /// The attribute definitions for the table.
        pub attribute_definitions: Vec<AttributeDefinition> => with_attribute_definitions,
        /// The name of the table.
        pub table_name: String => with_table_name,
        /// The key schema for the table.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// The current status of the table.
        pub table_status: TableStatus => with_table_status,
        /// When the table was created.
        pub creation_date_time: Timestamp => with_creation_date_time,
        /// The provisioned throughput settings.
        pub provisioned_throughput: ProvisionedThroughputDescription => with_provisioned_throughput,
        /// The total size of the table in bytes.
        pub table_size_bytes: i64 => with_table_size_bytes,
        /// The number of items in the table.
        pub item_count: i64 => with_item_count,
        /// The ARN of the table.
        pub table_arn: String => with_table_arn,
        /// A unique identifier for the table.
        pub table_id: String => with_table_id,
        /// The local secondary indexes on the table.
        pub local_secondary_indexes: Vec<LocalSecondaryIndexDescription> => with_local_secondary_indexes,
        /// The global secondary indexes on the table.
        pub global_secondary_indexes: Vec<GlobalSecondaryIndexDescription> => with_global_secondary_indexes,
        /// The stream settings for the table.
        pub stream_specification: StreamSpecification => with_stream_specification,
        /// A timestamp label for the latest stream.
        pub latest_stream_label: String => with_latest_stream_label,
        /// The ARN of the latest stream.
        pub latest_stream_arn: String => with_latest_stream_arn,
        /// Restore provenance, for tables created by a restore.
        pub restore_summary: RestoreSummary => with_restore_summary,
        /// The server-side encryption state.
        #[serde(rename = "SSEDescription")]
        pub sse_description: SSEDescription => with_sse_description,
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

shape! {
    /// A key-value tag attached to a table or backup.
    #[derive(Eq, Hash)]
    pub struct Tag {
        /// The tag key.
        pub key: String => with_key,
        /// The tag value.
        pub value: String => with_value,
    }
}

impl Tag {
    /// Create a tag from a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }
}
