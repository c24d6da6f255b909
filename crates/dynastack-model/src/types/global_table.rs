//! Global table, replica and replica settings shapes.

use super::{
    AutoScalingSettingsDescription, AutoScalingSettingsUpdate, GlobalTableStatus, IndexStatus,
    ReplicaStatus,
};
use crate::shape::shape;
use crate::timestamp::Timestamp;

shape! {
    /// A region that holds a replica of a global table.
    #[derive(Eq, Hash)]
    pub struct Replica {
        /// The region where the replica lives.
        pub region_name: String => with_region_name,
    }
}

impl Replica {
    /// Create a replica for the given region.
    #[must_use]
    pub fn new(region_name: impl Into<String>) -> Self {
        Self::default().with_region_name(region_name)
    }
}

shape! {
    /// A replica as reported by the service.
    #[derive(Eq, Hash)]
    pub struct ReplicaDescription {
        /// The region where the replica lives.
        pub region_name: String => with_region_name,
    }
}

shape! {
    /// Add or remove one replica (`UpdateGlobalTable`).
    ///
    /// Exactly one action is expected to be set.
    #[derive(Eq, Hash)]
    pub struct ReplicaUpdate {
        /// Add a replica in a new region.
        pub create: CreateReplicaAction => with_create,
        /// Remove the replica in a region.
        pub delete: DeleteReplicaAction => with_delete,
    }
}

shape! {
    /// Replica to add to a global table.
    #[derive(Eq, Hash)]
    pub struct CreateReplicaAction {
        /// The region of the new replica.
        pub region_name: String => with_region_name,
    }
}

shape! {
    /// Replica to remove from a global table.
    #[derive(Eq, Hash)]
    pub struct DeleteReplicaAction {
        /// The region of the replica to remove.
        pub region_name: String => with_region_name,
    }
}

shape! {
    /// A global table and its replication group (`ListGlobalTables`).
    #[derive(Eq, Hash)]
    pub struct GlobalTable {
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
        /// The regions in which the global table has replicas.
        pub replication_group: Vec<Replica> => with_replication_group,
    }
}

shape! {
    /// Full description of a global table.
    #[derive(Eq, Hash)]
    pub struct GlobalTableDescription {
        /// The replicas of the global table.
        pub replication_group: Vec<ReplicaDescription> => with_replication_group,
        /// The ARN of the global table.
        pub global_table_arn: String => with_global_table_arn,
        /// When the global table was created.
        pub creation_date_time: Timestamp => with_creation_date_time,
        /// The current status of the global table.
        pub global_table_status: GlobalTableStatus => with_global_table_status,
        /// The global table name.
        pub global_table_name: String => with_global_table_name,
    }
}

shape! {
    /// Capacity settings of one replica of a global table.
    #[derive(Eq, Hash)]
    pub struct ReplicaSettingsDescription {
        /// The region of the replica.
        pub region_name: String => with_region_name,
        /// The current status of the replica.
        pub replica_status: ReplicaStatus => with_replica_status,
        /// Provisioned read capacity of the replica.
        pub replica_provisioned_read_capacity_units: i64 => with_replica_provisioned_read_capacity_units,
        /// Auto scaling of the replica's read capacity.
        pub replica_provisioned_read_capacity_auto_scaling_settings:
            AutoScalingSettingsDescription
            => with_replica_provisioned_read_capacity_auto_scaling_settings,
        /// Provisioned write capacity of the replica.
        pub replica_provisioned_write_capacity_units: i64 => with_replica_provisioned_write_capacity_units,
        /// Auto scaling of the replica's write capacity.
        pub replica_provisioned_write_capacity_auto_scaling_settings:
            AutoScalingSettingsDescription
            => with_replica_provisioned_write_capacity_auto_scaling_settings,
        /// Capacity settings of the replica's global secondary indexes.
        pub replica_global_secondary_index_settings:
            Vec<ReplicaGlobalSecondaryIndexSettingsDescription>
            => with_replica_global_secondary_index_settings,
    }
}

shape! {
    /// Capacity settings of one global secondary index on a replica.
    #[derive(Eq, Hash)]
    pub struct ReplicaGlobalSecondaryIndexSettingsDescription {
        /// The name of the index.
        pub index_name: String => with_index_name,
        /// The current status of the index.
        pub index_status: IndexStatus => with_index_status,
        /// Provisioned read capacity of the index.
        pub provisioned_read_capacity_units: i64 => with_provisioned_read_capacity_units,
        /// Auto scaling of the index's read capacity.
        pub provisioned_read_capacity_auto_scaling_settings:
            AutoScalingSettingsDescription
            => with_provisioned_read_capacity_auto_scaling_settings,
        /// Provisioned write capacity of the index.
        pub provisioned_write_capacity_units: i64 => with_provisioned_write_capacity_units,
        /// Auto scaling of the index's write capacity.
        pub provisioned_write_capacity_auto_scaling_settings:
            AutoScalingSettingsDescription
            => with_provisioned_write_capacity_auto_scaling_settings,
    }
}

shape! {
    /// Requested capacity settings for one replica.
    #[derive(Eq, Hash)]
    pub struct ReplicaSettingsUpdate {
        /// The region of the replica.
        pub region_name: String => with_region_name,
        /// New provisioned read capacity of the replica.
        pub replica_provisioned_read_capacity_units: i64 => with_replica_provisioned_read_capacity_units,
        /// New auto scaling of the replica's read capacity.
        pub replica_provisioned_read_capacity_auto_scaling_settings_update:
            AutoScalingSettingsUpdate
            => with_replica_provisioned_read_capacity_auto_scaling_settings_update,
        /// New capacity settings of the replica's global secondary indexes.
        pub replica_global_secondary_index_settings_update:
            Vec<ReplicaGlobalSecondaryIndexSettingsUpdate>
            => with_replica_global_secondary_index_settings_update,
    }
}

shape! {
    /// Requested capacity settings for one global secondary index on a replica.
    #[derive(Eq, Hash)]
    pub struct ReplicaGlobalSecondaryIndexSettingsUpdate {
        /// The name of the index.
        pub index_name: String => with_index_name,
        /// New provisioned read capacity of the index.
        pub provisioned_read_capacity_units: i64 => with_provisioned_read_capacity_units,
        /// New auto scaling of the index's read capacity.
        pub provisioned_read_capacity_auto_scaling_settings_update:
            AutoScalingSettingsUpdate
            => with_provisioned_read_capacity_auto_scaling_settings_update,
    }
}

shape! {
    /// Requested write capacity for one global secondary index across all replicas.
    #[derive(Eq, Hash)]
    pub struct GlobalTableGlobalSecondaryIndexSettingsUpdate {
        /// The name of the index.
        pub index_name: String => with_index_name,
        /// New provisioned write capacity of the index.
        pub provisioned_write_capacity_units: i64 => with_provisioned_write_capacity_units,
        /// New auto scaling of the index's write capacity.
        pub provisioned_write_capacity_auto_scaling_settings_update:
            AutoScalingSettingsUpdate
            => with_provisioned_write_capacity_auto_scaling_settings_update,
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;
    use crate::types::{
        AutoScalingPolicyDescription,
        AutoScalingTargetTrackingScalingPolicyConfigurationDescription,
    };

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_should_serialize_replica_update() {
        let update = ReplicaUpdate::default()
            .with_create(CreateReplicaAction::default().with_region_name("eu-west-1"));
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"Create":{"RegionName":"eu-west-1"}}"#);
    }

    #[test]
    fn test_should_deserialize_global_table_description() {
        let json = r#"{
            "ReplicationGroup": [{"RegionName": "us-east-1"}, {"RegionName": "us-west-2"}],
            "GlobalTableArn": "arn:aws:dynamodb::123456789012:global-table/Music",
            "CreationDateTime": 1503520839.55,
            "GlobalTableStatus": "CREATING",
            "GlobalTableName": "Music"
        }"#;
        let description: GlobalTableDescription = serde_json::from_str(json).unwrap();
        assert_eq!(
            description.replication_group.as_ref().map(Vec::len),
            Some(2)
        );
        assert_eq!(
            description.global_table_status,
            Some(GlobalTableStatus::Creating)
        );
        assert_eq!(
            description
                .creation_date_time
                .map(|ts| ts.as_datetime().timestamp_millis()),
            Some(1_503_520_839_550)
        );
    }

    #[test]
    fn test_should_compare_replicas_by_region() {
        assert_eq!(Replica::new("us-east-1"), Replica::new("us-east-1"));
        assert_ne!(Replica::new("us-east-1"), Replica::new("us-west-2"));
        assert_eq!(
            format!("{:?}", Replica::new("us-east-1")),
            r#"Replica { region_name: "us-east-1" }"#
        );
    }

    #[test]
    fn test_should_deserialize_replica_settings() {
        let json = r#"{
            "RegionName": "us-east-1",
            "ReplicaStatus": "ACTIVE",
            "ReplicaProvisionedReadCapacityUnits": 10,
            "ReplicaGlobalSecondaryIndexSettings": [
                {"IndexName": "by-album", "IndexStatus": "ACTIVE", "ProvisionedReadCapacityUnits": 5}
            ]
        }"#;
        let settings: ReplicaSettingsDescription = serde_json::from_str(json).unwrap();
        assert_eq!(settings.replica_status, Some(ReplicaStatus::Active));
        let index = &settings
            .replica_global_secondary_index_settings
            .as_ref()
            .unwrap()[0];
        assert_eq!(index.provisioned_read_capacity_units, Some(5));
    }

    #[test]
    fn test_should_roundtrip_replica_settings_with_auto_scaling() {
        let scaling = |target: f64| {
            AutoScalingSettingsDescription::default()
                .with_minimum_units(5)
                .with_maximum_units(100)
                .with_auto_scaling_disabled(false)
                .with_scaling_policies(vec![
                    AutoScalingPolicyDescription::default()
                        .with_policy_name("DynamoDBReadCapacityUtilization")
                        .with_target_tracking_scaling_policy_configuration(
                            AutoScalingTargetTrackingScalingPolicyConfigurationDescription::default()
                                .with_scale_in_cooldown(60)
                                .with_target_value(target),
                        ),
                ])
        };
        let settings = ReplicaSettingsDescription::default()
            .with_region_name("us-east-1")
            .with_replica_status(ReplicaStatus::Active)
            .with_replica_provisioned_read_capacity_units(10)
            .with_replica_provisioned_read_capacity_auto_scaling_settings(scaling(70.5))
            .with_replica_provisioned_write_capacity_auto_scaling_settings(scaling(-0.0))
            .with_replica_global_secondary_index_settings(vec![
                ReplicaGlobalSecondaryIndexSettingsDescription::default()
                    .with_index_name("by-album")
                    .with_index_status(IndexStatus::Active)
                    .with_provisioned_read_capacity_auto_scaling_settings(scaling(0.75)),
            ]);

        let json = serde_json::to_string(&settings).unwrap();
        let back: ReplicaSettingsDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
        assert_eq!(settings, back);
        assert_eq!(hash_of(&back), hash_of(&settings));

        let positive_zero = settings
            .clone()
            .with_replica_provisioned_write_capacity_auto_scaling_settings(scaling(0.0));
        assert_eq!(positive_zero, settings);
        assert_eq!(hash_of(&positive_zero), hash_of(&settings));
        assert_ne!(
            settings
                .clone()
                .with_replica_provisioned_read_capacity_auto_scaling_settings(scaling(70.25)),
            settings
        );
    }
}
