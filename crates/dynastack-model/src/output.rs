//! DynamoDB output types, one per operation.
//!
//! Outputs share the conventions of [`crate::types`]. Fields the service
//! leaves out of a response stay `None` after deserialization.

use std::collections::BTreeMap;

use crate::attribute_value::AttributeValue;
use crate::shape::{map_entries, shape};
use crate::types::{
    BackupDescription, BackupDetails, BackupSummary, ConsumedCapacity,
    ContinuousBackupsDescription, GlobalTable, GlobalTableDescription, Item,
    ItemCollectionMetrics, Key, KeysAndAttributes, ReplicaSettingsDescription, TableDescription,
    Tag, TimeToLiveDescription, TimeToLiveSpecification, WriteRequest,
};

// ---------------------------------------------------------------------------
// Table management
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `CreateTable` operation.
    #[derive(Eq, Hash)]
    pub struct CreateTableOutput {
        /// The description of the new table.
        pub table_description: TableDescription => with_table_description,
    }
}

shape! {
    /// Output of the `DeleteTable` operation.
    #[derive(Eq, Hash)]
    pub struct DeleteTableOutput {
        /// The description of the table being deleted.
        pub table_description: TableDescription => with_table_description,
    }
}

shape! {
    /// Output of the `DescribeTable` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeTableOutput {
        /// The description of the table.
        pub table: TableDescription => with_table,
    }
}

shape! {
    /// Output of the `UpdateTable` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateTableOutput {
        /// The description of the updated table.
        pub table_description: TableDescription => with_table_description,
    }
}

shape! {
    /// Output of the `ListTables` operation.
    #[derive(Eq, Hash)]
    pub struct ListTablesOutput {
        /// The table names on this page.
        pub table_names: Vec<String> => with_table_names,
        /// The last table name on this page; unset on the last page.
        pub last_evaluated_table_name: String => with_last_evaluated_table_name,
    }
}

shape! {
    /// Output of the `DescribeLimits` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeLimitsOutput {
        /// Maximum read capacity across all tables of the account.
        pub account_max_read_capacity_units: i64 => with_account_max_read_capacity_units,
        /// Maximum write capacity across all tables of the account.
        pub account_max_write_capacity_units: i64 => with_account_max_write_capacity_units,
        /// Maximum read capacity of one table and its indexes.
        pub table_max_read_capacity_units: i64 => with_table_max_read_capacity_units,
        /// Maximum write capacity of one table and its indexes.
        pub table_max_write_capacity_units: i64 => with_table_max_write_capacity_units,
    }
}

shape! {
    /// Output of the `DescribeTimeToLive` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeTimeToLiveOutput {
        /// The TTL state of the table.
        pub time_to_live_description: TimeToLiveDescription => with_time_to_live_description,
    }
}

shape! {
    /// Output of the `UpdateTimeToLive` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateTimeToLiveOutput {
        /// The TTL settings that were applied.
        pub time_to_live_specification: TimeToLiveSpecification => with_time_to_live_specification,
    }
}

// ---------------------------------------------------------------------------
// Item operations
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `PutItem` operation.
    #[derive(Eq, Hash)]
    pub struct PutItemOutput {
        /// The attributes requested through `ReturnValues`.
        pub attributes: Item => with_attributes,
        /// The capacity consumed by the operation.
        pub consumed_capacity: ConsumedCapacity => with_consumed_capacity,
        /// Item collection metrics, when requested.
        pub item_collection_metrics: ItemCollectionMetrics => with_item_collection_metrics,
    }
}

shape! {
    /// Output of the `GetItem` operation.
    #[derive(Eq, Hash)]
    pub struct GetItemOutput {
        /// The item; unset when no item matches the key.
        pub item: Item => with_item,
        /// The capacity consumed by the operation.
        pub consumed_capacity: ConsumedCapacity => with_consumed_capacity,
    }
}

shape! {
    /// Output of the `UpdateItem` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateItemOutput {
        /// The attributes requested through `ReturnValues`.
        pub attributes: Item => with_attributes,
        /// The capacity consumed by the operation.
        pub consumed_capacity: ConsumedCapacity => with_consumed_capacity,
        /// Item collection metrics, when requested.
        pub item_collection_metrics: ItemCollectionMetrics => with_item_collection_metrics,
    }
}

shape! {
    /// Output of the `DeleteItem` operation.
    #[derive(Eq, Hash)]
    pub struct DeleteItemOutput {
        /// The attributes requested through `ReturnValues`.
        pub attributes: Item => with_attributes,
        /// The capacity consumed by the operation.
        pub consumed_capacity: ConsumedCapacity => with_consumed_capacity,
        /// Item collection metrics, when requested.
        pub item_collection_metrics: ItemCollectionMetrics => with_item_collection_metrics,
    }
}

map_entries! {
    PutItemOutput {
        attributes: AttributeValue => add_attributes_entry, clear_attributes_entries;
    }
}

map_entries! {
    GetItemOutput {
        item: AttributeValue => add_item_entry, clear_item_entries;
    }
}

map_entries! {
    UpdateItemOutput {
        attributes: AttributeValue => add_attributes_entry, clear_attributes_entries;
    }
}

map_entries! {
    DeleteItemOutput {
        attributes: AttributeValue => add_attributes_entry, clear_attributes_entries;
    }
}

// ---------------------------------------------------------------------------
// Query & Scan
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `Query` operation.
    #[derive(Eq, Hash)]
    pub struct QueryOutput {
        /// The matching items.
        pub items: Vec<Item> => with_items,
        /// The number of items returned after filtering.
        pub count: i32 => with_count,
        /// The number of items evaluated before filtering.
        pub scanned_count: i32 => with_scanned_count,
        /// The key to resume from; unset on the last page.
        pub last_evaluated_key: Key => with_last_evaluated_key,
        /// The capacity consumed by the operation.
        pub consumed_capacity: ConsumedCapacity => with_consumed_capacity,
    }
}

shape! {
    /// Output of the `Scan` operation.
    #[derive(Eq, Hash)]
    pub struct ScanOutput {
        /// The matching items.
        pub items: Vec<Item> => with_items,
        /// The number of items returned after filtering.
        pub count: i32 => with_count,
        /// The number of items evaluated before filtering.
        pub scanned_count: i32 => with_scanned_count,
        /// The key to resume from; unset on the last page.
        pub last_evaluated_key: Key => with_last_evaluated_key,
        /// The capacity consumed by the operation.
        pub consumed_capacity: ConsumedCapacity => with_consumed_capacity,
    }
}

map_entries! {
    QueryOutput {
        last_evaluated_key: AttributeValue => add_last_evaluated_key_entry, clear_last_evaluated_key_entries;
    }
}

map_entries! {
    ScanOutput {
        last_evaluated_key: AttributeValue => add_last_evaluated_key_entry, clear_last_evaluated_key_entries;
    }
}

// ---------------------------------------------------------------------------
// Batch operations
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `BatchGetItem` operation.
    #[derive(Eq, Hash)]
    pub struct BatchGetItemOutput {
        /// The items found, per table.
        pub responses: BTreeMap<String, Vec<Item>> => with_responses,
        /// Keys that were not processed, per table, in request form.
        pub unprocessed_keys: BTreeMap<String, KeysAndAttributes> => with_unprocessed_keys,
        /// The capacity consumed, per table.
        pub consumed_capacity: Vec<ConsumedCapacity> => with_consumed_capacity,
    }
}

map_entries! {
    BatchGetItemOutput {
        responses: Vec<Item> => add_responses_entry, clear_responses_entries;
        unprocessed_keys: KeysAndAttributes => add_unprocessed_keys_entry, clear_unprocessed_keys_entries;
    }
}

shape! {
    /// Output of the `BatchWriteItem` operation.
    #[derive(Eq, Hash)]
    pub struct BatchWriteItemOutput {
        /// Writes that were not processed, per table, in request form.
        pub unprocessed_items: BTreeMap<String, Vec<WriteRequest>> => with_unprocessed_items,
        /// Item collection metrics, per table.
        pub item_collection_metrics: BTreeMap<String, Vec<ItemCollectionMetrics>> => with_item_collection_metrics,
        /// The capacity consumed, per table.
        pub consumed_capacity: Vec<ConsumedCapacity> => with_consumed_capacity,
    }
}

map_entries! {
    BatchWriteItemOutput {
        unprocessed_items: Vec<WriteRequest> => add_unprocessed_items_entry, clear_unprocessed_items_entries;
        item_collection_metrics: Vec<ItemCollectionMetrics> => add_item_collection_metrics_entry, clear_item_collection_metrics_entries;
    }
}

// ---------------------------------------------------------------------------
// Backups
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `CreateBackup` operation.
    #[derive(Eq, Hash)]
    pub struct CreateBackupOutput {
        /// Details of the new backup.
        pub backup_details: BackupDetails => with_backup_details,
    }
}

shape! {
    /// Output of the `DeleteBackup` operation.
    #[derive(Eq, Hash)]
    pub struct DeleteBackupOutput {
        /// Description of the deleted backup.
        pub backup_description: BackupDescription => with_backup_description,
    }
}

shape! {
    /// Output of the `DescribeBackup` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeBackupOutput {
        /// Description of the backup.
        pub backup_description: BackupDescription => with_backup_description,
    }
}

shape! {
    /// Output of the `ListBackups` operation.
    #[derive(Eq, Hash)]
    pub struct ListBackupsOutput {
        /// The backups on this page.
        pub backup_summaries: Vec<BackupSummary> => with_backup_summaries,
        /// The last backup ARN on this page; unset on the last page.
        pub last_evaluated_backup_arn: String => with_last_evaluated_backup_arn,
    }
}

shape! {
    /// Output of the `DescribeContinuousBackups` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeContinuousBackupsOutput {
        /// Continuous backup state of the table.
        pub continuous_backups_description: ContinuousBackupsDescription => with_continuous_backups_description,
    }
}

shape! {
    /// Output of the `UpdateContinuousBackups` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateContinuousBackupsOutput {
        /// Continuous backup state of the table after the update.
        pub continuous_backups_description: ContinuousBackupsDescription => with_continuous_backups_description,
    }
}

shape! {
    /// Output of the `RestoreTableFromBackup` operation.
    #[derive(Eq, Hash)]
    pub struct RestoreTableFromBackupOutput {
        /// The description of the table being restored.
        pub table_description: TableDescription => with_table_description,
    }
}

shape! {
    /// Output of the `RestoreTableToPointInTime` operation.
    #[derive(Eq, Hash)]
    pub struct RestoreTableToPointInTimeOutput {
        /// The description of the table being restored.
        pub table_description: TableDescription => with_table_description,
    }
}

// ---------------------------------------------------------------------------
// Global tables
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `CreateGlobalTable` operation.
    #[derive(Eq, Hash)]
    pub struct CreateGlobalTableOutput {
        /// Description of the new global table.
        pub global_table_description: GlobalTableDescription => with_global_table_description,
    }
}

shape! {
    /// Output of the `DescribeGlobalTable` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeGlobalTableOutput {
        /// Description of the global table.
        pub global_table_description: GlobalTableDescription => with_global_table_description,
    }
}

shape! {
    /// Output of the `UpdateGlobalTable` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateGlobalTableOutput {
        /// Description of the global table after the update.
        pub global_table_description: GlobalTableDescription => with_global_table_description,
    }
}

shape! {
    /// Output of the `ListGlobalTables` operation.
    #[derive(Eq, Hash)]
    pub struct ListGlobalTablesOutput {
        /// The global tables on this page.
        pub global_tables: Vec<GlobalTable> => with_global_tables,
        /// The last global table name on this page; unset on the last page.
        pub last_evaluated_global_table_name: String => with_last_evaluated_global_table_name,
    }
}

shape! {
    /// Output of the `DescribeGlobalTableSettings` operation.
    #[derive(Eq, Hash)]
    pub struct DescribeGlobalTableSettingsOutput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
        /// Capacity settings per replica.
        pub replica_settings: Vec<ReplicaSettingsDescription> => with_replica_settings,
    }
}

shape! {
    /// Output of the `UpdateGlobalTableSettings` operation.
    #[derive(Eq, Hash)]
    pub struct UpdateGlobalTableSettingsOutput {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
        /// Capacity settings per replica after the update.
        pub replica_settings: Vec<ReplicaSettingsDescription> => with_replica_settings,
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

shape! {
    /// Output of the `TagResource` operation. The response body is empty.
    #[derive(Eq, Hash)]
    pub struct TagResourceOutput {}
}

shape! {
    /// Output of the `UntagResource` operation. The response body is empty.
    #[derive(Eq, Hash)]
    pub struct UntagResourceOutput {}
}

shape! {
    /// Output of the `ListTagsOfResource` operation.
    #[derive(Eq, Hash)]
    pub struct ListTagsOfResourceOutput {
        /// The tags on this page.
        pub tags: Vec<Tag> => with_tags,
        /// The continuation token; unset on the last page.
        pub next_token: String => with_next_token,
    }
}
