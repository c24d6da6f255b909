//! Shared DynamoDB shapes, grouped by family.
//!
//! All shapes follow the DynamoDB JSON wire format with `PascalCase` field
//! names. Every field is optional; unset fields are omitted on the wire and
//! in `Debug` output.
//!
//! Enum variants use idiomatic Rust naming and map to the
//! `SCREAMING_SNAKE_CASE` wire spelling; unknown wire values are kept in an
//! `Unknown(String)` variant instead of failing deserialization.

use std::collections::BTreeMap;

use crate::attribute_value::AttributeValue;
use crate::shape::wire_enum;

mod autoscaling;
mod backup;
mod capacity;
mod global_table;
mod item;
mod table;

pub use autoscaling::*;
pub use backup::*;
pub use capacity::*;
pub use global_table::*;
pub use item::*;
pub use table::*;

// ---------------------------------------------------------------------------
// Type aliases for common DynamoDB item shapes
// ---------------------------------------------------------------------------

/// A DynamoDB item represented as a map of attribute names to values.
pub type Item = BTreeMap<String, AttributeValue>;

/// A DynamoDB key represented as a map of key attribute names to values.
pub type Key = BTreeMap<String, AttributeValue>;

/// Expression attribute names mapping (`#name` placeholders to attribute names).
pub type ExpressionAttributeNames = BTreeMap<String, String>;

/// Expression attribute values mapping (`:value` placeholders to attribute values).
pub type ExpressionAttributeValues = BTreeMap<String, AttributeValue>;

// ---------------------------------------------------------------------------
// Enums - Key schema
// ---------------------------------------------------------------------------

wire_enum! {
    /// Role of an attribute within a key schema.
    pub enum KeyType {
        /// Partition key.
        Hash => "HASH",
        /// Sort key.
        Range => "RANGE",
    }
}

wire_enum! {
    /// Scalar attribute types allowed for key attributes.
    pub enum ScalarAttributeType {
        /// String type.
        S => "S",
        /// Number type.
        N => "N",
        /// Binary type.
        B => "B",
    }
}

wire_enum! {
    /// Attribute set copied into a secondary index.
    pub enum ProjectionType {
        /// All attributes from the table are projected into the index.
        All => "ALL",
        /// Only the index and primary keys are projected.
        KeysOnly => "KEYS_ONLY",
        /// Only specified non-key attributes are projected alongside keys.
        Include => "INCLUDE",
    }
}

// ---------------------------------------------------------------------------
// Enums - Table lifecycle
// ---------------------------------------------------------------------------

wire_enum! {
    /// Current status of a table.
    pub enum TableStatus {
        /// The table is being created.
        Creating => "CREATING",
        /// The table is being updated.
        Updating => "UPDATING",
        /// The table is being deleted.
        Deleting => "DELETING",
        /// The table is ready for use.
        Active => "ACTIVE",
    }
}

wire_enum! {
    /// Current status of a global secondary index.
    pub enum IndexStatus {
        /// The index is being created.
        Creating => "CREATING",
        /// The index is being updated.
        Updating => "UPDATING",
        /// The index is being deleted.
        Deleting => "DELETING",
        /// The index is active and ready for use.
        Active => "ACTIVE",
    }
}

wire_enum! {
    /// What a stream record captures when an item changes.
    pub enum StreamViewType {
        /// The entire item as it appears after modification.
        NewImage => "NEW_IMAGE",
        /// The entire item as it appeared before modification.
        OldImage => "OLD_IMAGE",
        /// Both the new and old item images.
        NewAndOldImages => "NEW_AND_OLD_IMAGES",
        /// Only the key attributes of the modified item.
        KeysOnly => "KEYS_ONLY",
    }
}

wire_enum! {
    /// Server-side encryption type.
    pub enum SseType {
        /// AES-256 with a service-owned key.
        Aes256 => "AES256",
        /// AWS KMS managed key encryption.
        Kms => "KMS",
    }
}

wire_enum! {
    /// Server-side encryption status.
    pub enum SseStatus {
        /// SSE is being enabled.
        Enabling => "ENABLING",
        /// SSE is active.
        Enabled => "ENABLED",
        /// SSE is being disabled.
        Disabling => "DISABLING",
        /// SSE is disabled.
        Disabled => "DISABLED",
        /// SSE is being updated.
        Updating => "UPDATING",
    }
}

wire_enum! {
    /// Time to Live status of a table.
    pub enum TimeToLiveStatus {
        /// TTL is being enabled.
        Enabling => "ENABLING",
        /// TTL is being disabled.
        Disabling => "DISABLING",
        /// TTL is enabled.
        Enabled => "ENABLED",
        /// TTL is disabled.
        Disabled => "DISABLED",
    }
}

// ---------------------------------------------------------------------------
// Enums - Backups
// ---------------------------------------------------------------------------

wire_enum! {
    /// Lifecycle status of an on-demand backup.
    pub enum BackupStatus {
        /// The backup is being created.
        Creating => "CREATING",
        /// The backup has been deleted.
        Deleted => "DELETED",
        /// The backup can be restored from.
        Available => "AVAILABLE",
    }
}

wire_enum! {
    /// Who created a backup.
    pub enum BackupType {
        /// Created by the user.
        User => "USER",
        /// Created by the service.
        System => "SYSTEM",
    }
}

wire_enum! {
    /// Backup type filter for `ListBackups`.
    pub enum BackupTypeFilter {
        /// User-created backups only.
        User => "USER",
        /// System-created backups only.
        System => "SYSTEM",
        /// Both kinds.
        All => "ALL",
    }
}

wire_enum! {
    /// Status of continuous backups on a table.
    pub enum ContinuousBackupsStatus {
        /// Continuous backups are enabled.
        Enabled => "ENABLED",
        /// Continuous backups are disabled.
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// Status of point-in-time recovery on a table.
    pub enum PointInTimeRecoveryStatus {
        /// Point-in-time recovery is enabled.
        Enabled => "ENABLED",
        /// Point-in-time recovery is disabled.
        Disabled => "DISABLED",
    }
}

// ---------------------------------------------------------------------------
// Enums - Global tables
// ---------------------------------------------------------------------------

wire_enum! {
    /// Current status of a global table.
    pub enum GlobalTableStatus {
        /// The global table is being created.
        Creating => "CREATING",
        /// The global table is ready for use.
        Active => "ACTIVE",
        /// The global table is being deleted.
        Deleting => "DELETING",
        /// The global table is being updated.
        Updating => "UPDATING",
    }
}

wire_enum! {
    /// Current status of a region replica.
    pub enum ReplicaStatus {
        /// The replica is being created.
        Creating => "CREATING",
        /// The replica is being updated.
        Updating => "UPDATING",
        /// The replica is being deleted.
        Deleting => "DELETING",
        /// The replica is ready for use.
        Active => "ACTIVE",
    }
}

// ---------------------------------------------------------------------------
// Enums - Data plane
// ---------------------------------------------------------------------------

wire_enum! {
    /// Determines what values are returned by write operations.
    pub enum ReturnValue {
        /// Nothing is returned.
        None => "NONE",
        /// Returns all attributes of the item as they appeared before the operation.
        AllOld => "ALL_OLD",
        /// Returns only the updated attributes as they appeared before the operation.
        UpdatedOld => "UPDATED_OLD",
        /// Returns all attributes of the item as they appear after the operation.
        AllNew => "ALL_NEW",
        /// Returns only the updated attributes as they appear after the operation.
        UpdatedNew => "UPDATED_NEW",
    }
}

wire_enum! {
    /// Controls whether consumed capacity information is returned.
    pub enum ReturnConsumedCapacity {
        /// Return consumed capacity for the table and any indexes involved.
        Indexes => "INDEXES",
        /// Return only the total consumed capacity.
        Total => "TOTAL",
        /// Do not return consumed capacity.
        None => "NONE",
    }
}

wire_enum! {
    /// Controls whether item collection metrics are returned for writes.
    pub enum ReturnItemCollectionMetrics {
        /// Return item collection size estimates.
        Size => "SIZE",
        /// Do not return item collection metrics.
        None => "NONE",
    }
}

wire_enum! {
    /// Attributes to retrieve in a `Query` or `Scan` operation.
    pub enum Select {
        /// All attributes of the item.
        AllAttributes => "ALL_ATTRIBUTES",
        /// All projected attributes (for index queries).
        AllProjectedAttributes => "ALL_PROJECTED_ATTRIBUTES",
        /// Only the attributes named in `AttributesToGet` or the projection.
        SpecificAttributes => "SPECIFIC_ATTRIBUTES",
        /// Only the count of matching items.
        Count => "COUNT",
    }
}

wire_enum! {
    /// Logical operator combining legacy conditions.
    pub enum ConditionalOperator {
        /// All conditions must be true.
        And => "AND",
        /// At least one condition must be true.
        Or => "OR",
    }
}

wire_enum! {
    /// Comparison operator for legacy `Condition` filters.
    ///
    /// Used with the legacy `ScanFilter`, `QueryFilter`, `KeyConditions` and
    /// `Expected` parameters.
    pub enum ComparisonOperator {
        /// Equal to.
        Eq => "EQ",
        /// Not equal to.
        Ne => "NE",
        /// Membership in a list.
        In => "IN",
        /// Less than or equal to.
        Le => "LE",
        /// Less than.
        Lt => "LT",
        /// Greater than or equal to.
        Ge => "GE",
        /// Greater than.
        Gt => "GT",
        /// Inclusive range.
        Between => "BETWEEN",
        /// Attribute exists.
        NotNull => "NOT_NULL",
        /// Attribute does not exist.
        Null => "NULL",
        /// Substring or set membership.
        Contains => "CONTAINS",
        /// Absence of substring or set member.
        NotContains => "NOT_CONTAINS",
        /// String or binary prefix.
        BeginsWith => "BEGINS_WITH",
    }
}

wire_enum! {
    /// Action performed on an attribute by the legacy `AttributeUpdates` parameter.
    pub enum AttributeAction {
        /// Add to a number or set attribute.
        Add => "ADD",
        /// Set the attribute value.
        Put => "PUT",
        /// Remove the attribute or elements from a set.
        Delete => "DELETE",
    }
}
