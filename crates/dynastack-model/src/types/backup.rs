//! On-demand backup and continuous backup shapes.

use super::{
    BackupStatus, BackupType, ContinuousBackupsStatus, GlobalSecondaryIndexInfo, KeySchemaElement,
    LocalSecondaryIndexInfo, PointInTimeRecoveryStatus, ProvisionedThroughput, SSEDescription,
    StreamSpecification, TimeToLiveDescription,
};
use crate::shape::shape;
use crate::timestamp::Timestamp;

shape! {
    /// Details of a backup: identity, size, status and timestamps.
    #[derive(Eq, Hash)]
    pub struct BackupDetails {
        /// The ARN of the backup.
        pub backup_arn: String => with_backup_arn,
        /// The name of the backup.
        pub backup_name: String => with_backup_name,
        /// The size of the backup in bytes.
        pub backup_size_bytes: i64 => with_backup_size_bytes,
        /// The current status of the backup.
        pub backup_status: BackupStatus => with_backup_status,
        /// Whether the backup was created by the user or the service.
        pub backup_type: BackupType => with_backup_type,
        /// When the backup was requested.
        pub backup_creation_date_time: Timestamp => with_backup_creation_date_time,
        /// When a system backup expires.
        pub backup_expiry_date_time: Timestamp => with_backup_expiry_date_time,
    }
}

shape! {
    /// One entry of a `ListBackups` response.
    #[derive(Eq, Hash)]
    pub struct BackupSummary {
        /// The name of the source table.
        pub table_name: String => with_table_name,
        /// The unique identifier of the source table.
        pub table_id: String => with_table_id,
        /// The ARN of the source table.
        pub table_arn: String => with_table_arn,
        /// The ARN of the backup.
        pub backup_arn: String => with_backup_arn,
        /// The name of the backup.
        pub backup_name: String => with_backup_name,
        /// When the backup was requested.
        pub backup_creation_date_time: Timestamp => with_backup_creation_date_time,
        /// When a system backup expires.
        pub backup_expiry_date_time: Timestamp => with_backup_expiry_date_time,
        /// The current status of the backup.
        pub backup_status: BackupStatus => with_backup_status,
        /// Whether the backup was created by the user or the service.
        pub backup_type: BackupType => with_backup_type,
        /// The size of the backup in bytes.
        pub backup_size_bytes: i64 => with_backup_size_bytes,
    }
}

shape! {
    /// Full description of a backup and the table it was taken from.
    #[derive(Eq, Hash)]
    pub struct BackupDescription {
        /// Details of the backup itself.
        pub backup_details: BackupDetails => with_backup_details,
        /// Details of the source table at backup time.
        pub source_table_details: SourceTableDetails => with_source_table_details,
        /// Features enabled on the source table at backup time.
        pub source_table_feature_details: SourceTableFeatureDetails => with_source_table_feature_details,
    }
}

shape! {
    /// Key schema, throughput and size of the table a backup was taken from.
    #[derive(Eq, Hash)]
    pub struct SourceTableDetails {
        /// The name of the table.
        pub table_name: String => with_table_name,
        /// The unique identifier of the table.
        pub table_id: String => with_table_id,
        /// The ARN of the table.
        pub table_arn: String => with_table_arn,
        /// The size of the table in bytes.
        pub table_size_bytes: i64 => with_table_size_bytes,
        /// The key schema of the table.
        pub key_schema: Vec<KeySchemaElement> => with_key_schema,
        /// When the table was created.
        pub table_creation_date_time: Timestamp => with_table_creation_date_time,
        /// The provisioned throughput of the table.
        pub provisioned_throughput: ProvisionedThroughput => with_provisioned_throughput,
        /// The number of items in the table.
        pub item_count: i64 => with_item_count,
    }
}

shape! {
    /// Indexes, streams, TTL and encryption of the table a backup was taken from.
    #[derive(Eq, Hash)]
    pub struct SourceTableFeatureDetails {
        /// The local secondary indexes at backup time.
        pub local_secondary_indexes: Vec<LocalSecondaryIndexInfo> => with_local_secondary_indexes,
        /// The global secondary indexes at backup time.
        pub global_secondary_indexes: Vec<GlobalSecondaryIndexInfo> => with_global_secondary_indexes,
        /// The stream settings at backup time.
        pub stream_description: StreamSpecification => with_stream_description,
        /// The TTL settings at backup time.
        pub time_to_live_description: TimeToLiveDescription => with_time_to_live_description,
        /// The encryption settings at backup time.
        #[serde(rename = "SSEDescription")]
        pub sse_description: SSEDescription => with_sse_description,
    }
}

shape! {
    /// Continuous backup and point-in-time recovery state of a table.
    #[derive(Eq, Hash)]
    pub struct ContinuousBackupsDescription {
        /// Whether continuous backups are enabled.
        pub continuous_backups_status: ContinuousBackupsStatus => with_continuous_backups_status,
        /// Point-in-time recovery details.
        pub point_in_time_recovery_description: PointInTimeRecoveryDescription => with_point_in_time_recovery_description,
    }
}

shape! {
    /// Point-in-time recovery state and restorable window.
    #[derive(Eq, Hash)]
    pub struct PointInTimeRecoveryDescription {
        /// Whether point-in-time recovery is enabled.
        pub point_in_time_recovery_status: PointInTimeRecoveryStatus => with_point_in_time_recovery_status,
        /// The earliest point in time the table can be restored to.
        pub earliest_restorable_date_time: Timestamp => with_earliest_restorable_date_time,
        /// The latest point in time the table can be restored to.
        pub latest_restorable_date_time: Timestamp => with_latest_restorable_date_time,
    }
}

shape! {
    /// Requested point-in-time recovery setting (`UpdateContinuousBackups`).
    #[derive(Eq, Hash)]
    pub struct PointInTimeRecoverySpecification {
        /// Whether to enable point-in-time recovery.
        pub point_in_time_recovery_enabled: bool => with_point_in_time_recovery_enabled,
    }
}

impl PointInTimeRecoverySpecification {
    /// Create a specification with the flag set.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self::default().with_point_in_time_recovery_enabled(enabled)
    }
}
