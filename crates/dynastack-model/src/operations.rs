//! DynamoDB operation enum.

use std::fmt;

macro_rules! operations {
    ($( $(#[$doc:meta])* $variant:ident ),+ $(,)?) => {
        /// All operations of the 2012-08-10 DynamoDB API.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum DynamoDBOperation {
            $( $(#[$doc])* $variant, )+
        }

        impl DynamoDBOperation {
            /// Every operation, in alphabetical order.
            pub const ALL: &[Self] = &[ $( Self::$variant, )+ ];

            /// Returns the AWS operation name string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }

            /// Parse an operation name string into a `DynamoDBOperation`.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( stringify!($variant) => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

operations! {
    /// Read items from one or more tables by primary key.
    BatchGetItem,
    /// Put or delete items in one or more tables.
    BatchWriteItem,
    /// Create an on-demand backup of a table.
    CreateBackup,
    /// Create a global table from existing regional tables.
    CreateGlobalTable,
    /// Create a new table.
    CreateTable,
    /// Delete an on-demand backup.
    DeleteBackup,
    /// Delete an item by primary key.
    DeleteItem,
    /// Delete a table.
    DeleteTable,
    /// Describe an on-demand backup.
    DescribeBackup,
    /// Describe continuous backups and point-in-time recovery.
    DescribeContinuousBackups,
    /// Describe a global table.
    DescribeGlobalTable,
    /// Describe the capacity settings of a global table.
    DescribeGlobalTableSettings,
    /// Describe the account and table capacity limits.
    DescribeLimits,
    /// Describe a table.
    DescribeTable,
    /// Describe the Time to Live settings of a table.
    DescribeTimeToLive,
    /// Get an item by primary key.
    GetItem,
    /// List on-demand backups.
    ListBackups,
    /// List global tables.
    ListGlobalTables,
    /// List tables.
    ListTables,
    /// List the tags of a resource.
    ListTagsOfResource,
    /// Put (insert or replace) an item.
    PutItem,
    /// Query items by key condition.
    Query,
    /// Create a table from an on-demand backup.
    RestoreTableFromBackup,
    /// Create a table from a point in time of another table.
    RestoreTableToPointInTime,
    /// Scan all items in a table or index.
    Scan,
    /// Add tags to a resource.
    TagResource,
    /// Remove tags from a resource.
    UntagResource,
    /// Enable or disable point-in-time recovery.
    UpdateContinuousBackups,
    /// Add or remove replicas of a global table.
    UpdateGlobalTable,
    /// Update the capacity settings of a global table.
    UpdateGlobalTableSettings,
    /// Update an item.
    UpdateItem,
    /// Update a table's throughput, indexes, streams or encryption.
    UpdateTable,
    /// Enable or disable Time to Live on a table.
    UpdateTimeToLive,
}

impl fmt::Display for DynamoDBOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_list_every_operation() {
        assert_eq!(DynamoDBOperation::ALL.len(), 33);
        assert!(DynamoDBOperation::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_should_roundtrip_operation_names() {
        for op in DynamoDBOperation::ALL {
            assert_eq!(DynamoDBOperation::from_name(op.as_str()), Some(*op));
        }
    }

    #[test]
    fn test_should_reject_unknown_operation_name() {
        assert_eq!(DynamoDBOperation::from_name("TransactWriteItems"), None);
        assert_eq!(DynamoDBOperation::from_name("describetable"), None);
    }

    #[test]
    fn test_should_display_operation_name() {
        assert_eq!(
            DynamoDBOperation::RestoreTableToPointInTime.to_string(),
            "RestoreTableToPointInTime"
        );
    }
}
