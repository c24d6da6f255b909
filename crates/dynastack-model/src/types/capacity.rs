//! Provisioned and consumed capacity shapes.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use crate::shape::{eq_f64, hash_f64, map_entries, shape};
use crate::timestamp::Timestamp;

shape! {
    /// Provisioned throughput settings for a table or global secondary index.
    #[derive(Eq, Hash)]
    pub struct ProvisionedThroughput {
        /// The maximum number of strongly consistent reads per second.
        pub read_capacity_units: i64 => with_read_capacity_units,
        /// The maximum number of writes per second.
        pub write_capacity_units: i64 => with_write_capacity_units,
    }
}

impl ProvisionedThroughput {
    /// Create throughput settings with both read and write units set.
    #[must_use]
    pub fn new(read_capacity_units: i64, write_capacity_units: i64) -> Self {
        Self {
            read_capacity_units: Some(read_capacity_units),
            write_capacity_units: Some(write_capacity_units),
        }
    }
}

shape! {
    /// Provisioned throughput as reported by the service, including history.
    #[derive(Eq, Hash)]
    pub struct ProvisionedThroughputDescription {
        /// The time of the last provisioned throughput increase.
        pub last_increase_date_time: Timestamp => with_last_increase_date_time,
        /// The time of the last provisioned throughput decrease.
        pub last_decrease_date_time: Timestamp => with_last_decrease_date_time,
        /// The number of decreases performed during the current UTC day.
        pub number_of_decreases_today: i64 => with_number_of_decreases_today,
        /// The provisioned read capacity units.
        pub read_capacity_units: i64 => with_read_capacity_units,
        /// The provisioned write capacity units.
        pub write_capacity_units: i64 => with_write_capacity_units,
    }
}

shape! {
    @manual_eq
    /// Capacity units consumed against one table or index.
    pub struct Capacity {
        /// The read capacity units consumed.
        pub read_capacity_units: f64 => with_read_capacity_units,
        /// The write capacity units consumed.
        pub write_capacity_units: f64 => with_write_capacity_units,
        /// The total capacity units consumed.
        pub capacity_units: f64 => with_capacity_units,
    }
}

impl PartialEq for Capacity {
    fn eq(&self, other: &Self) -> bool {
        eq_f64(self.read_capacity_units, other.read_capacity_units)
            && eq_f64(self.write_capacity_units, other.write_capacity_units)
            && eq_f64(self.capacity_units, other.capacity_units)
    }
}

impl Eq for Capacity {}

impl Hash for Capacity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.read_capacity_units, state);
        hash_f64(self.write_capacity_units, state);
        hash_f64(self.capacity_units, state);
    }
}

shape! {
    @manual_eq
    /// Capacity units consumed by an operation, optionally broken down by index.
    pub struct ConsumedCapacity {
        /// The name of the table affected by the operation.
        pub table_name: String => with_table_name,
        /// The total capacity units consumed.
        pub capacity_units: f64 => with_capacity_units,
        /// The total read capacity units consumed.
        pub read_capacity_units: f64 => with_read_capacity_units,
        /// The total write capacity units consumed.
        pub write_capacity_units: f64 => with_write_capacity_units,
        /// The capacity consumed by the table itself.
        pub table: Capacity => with_table,
        /// The capacity consumed by each local secondary index.
        pub local_secondary_indexes: BTreeMap<String, Capacity> => with_local_secondary_indexes,
        /// The capacity consumed by each global secondary index.
        pub global_secondary_indexes: BTreeMap<String, Capacity> => with_global_secondary_indexes,
    }
}

map_entries! {
    ConsumedCapacity {
        local_secondary_indexes: Capacity => add_local_secondary_indexes_entry, clear_local_secondary_indexes_entries;
        global_secondary_indexes: Capacity => add_global_secondary_indexes_entry, clear_global_secondary_indexes_entries;
    }
}

impl PartialEq for ConsumedCapacity {
    fn eq(&self, other: &Self) -> bool {
        self.table_name == other.table_name
            && eq_f64(self.capacity_units, other.capacity_units)
            && eq_f64(self.read_capacity_units, other.read_capacity_units)
            && eq_f64(self.write_capacity_units, other.write_capacity_units)
            && self.table == other.table
            && self.local_secondary_indexes == other.local_secondary_indexes
            && self.global_secondary_indexes == other.global_secondary_indexes
    }
}

impl Eq for ConsumedCapacity {}

impl Hash for ConsumedCapacity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.table_name.hash(state);
        hash_f64(self.capacity_units, state);
        hash_f64(self.read_capacity_units, state);
        hash_f64(self.write_capacity_units, state);
        self.table.hash(state);
        self.local_secondary_indexes.hash(state);
        self.global_secondary_indexes.hash(state);
    }
}
