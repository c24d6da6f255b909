//! Item-level shapes: legacy conditions, batch requests and item collection
//! metrics.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use super::{AttributeAction, ComparisonOperator, ExpressionAttributeNames, Item, Key};
use crate::attribute_value::AttributeValue;
use crate::shape::{canonical_f64s, map_entries, shape};

shape! {
    /// Legacy per-attribute update used by `UpdateItem`'s `AttributeUpdates`.
    #[derive(Eq, Hash)]
    pub struct AttributeValueUpdate {
        /// The new value, or the operand for `ADD` / `DELETE`.
        pub value: AttributeValue => with_value,
        /// How to apply the update.
        pub action: AttributeAction => with_action,
    }
}

shape! {
    /// Legacy precondition on one attribute (the `Expected` parameter).
    #[derive(Eq, Hash)]
    pub struct ExpectedAttributeValue {
        /// The value to compare against.
        pub value: AttributeValue => with_value,
        /// Whether the attribute must exist.
        pub exists: bool => with_exists,
        /// The comparison to apply.
        pub comparison_operator: ComparisonOperator => with_comparison_operator,
        /// Operands for the comparison.
        pub attribute_value_list: Vec<AttributeValue> => with_attribute_value_list,
    }
}

shape! {
    /// Legacy comparison used by `KeyConditions`, `QueryFilter` and `ScanFilter`.
    #[derive(Eq, Hash)]
    pub struct Condition {
        /// Operands for the comparison.
        pub attribute_value_list: Vec<AttributeValue> => with_attribute_value_list,
        /// The comparison to apply.
        pub comparison_operator: ComparisonOperator => with_comparison_operator,
    }
}

shape! {
    /// Keys and projection for one table in a `BatchGetItem` request.
    #[derive(Eq, Hash)]
    pub struct KeysAndAttributes {
        /// The primary keys to fetch.
        pub keys: Vec<Key> => with_keys,
        /// Legacy list of attributes to return.
        pub attributes_to_get: Vec<String> => with_attributes_to_get,
        /// Whether to use strongly consistent reads.
        pub consistent_read: bool => with_consistent_read,
        /// The attributes to return, as a projection expression.
        pub projection_expression: String => with_projection_expression,
        /// Substitution tokens for attribute names in the projection expression.
        pub expression_attribute_names: ExpressionAttributeNames => with_expression_attribute_names,
    }
}

map_entries! {
    KeysAndAttributes {
        expression_attribute_names: String => add_expression_attribute_names_entry, clear_expression_attribute_names_entries;
    }
}

shape! {
    /// One put or delete inside a `BatchWriteItem` request.
    ///
    /// Exactly one of the two requests is expected to be set.
    #[derive(Eq, Hash)]
    pub struct WriteRequest {
        /// Put an item.
        pub put_request: PutRequest => with_put_request,
        /// Delete an item.
        pub delete_request: DeleteRequest => with_delete_request,
    }
}

impl From<PutRequest> for WriteRequest {
    fn from(request: PutRequest) -> Self {
        Self::default().with_put_request(request)
    }
}

impl From<DeleteRequest> for WriteRequest {
    fn from(request: DeleteRequest) -> Self {
        Self::default().with_delete_request(request)
    }
}

shape! {
    /// Item to put as part of a batch write.
    #[derive(Eq, Hash)]
    pub struct PutRequest {
        /// The item attributes.
        pub item: Item => with_item,
    }
}

map_entries! {
    PutRequest {
        item: AttributeValue => add_item_entry, clear_item_entries;
    }
}

shape! {
    /// Key of an item to delete as part of a batch write.
    #[derive(Eq, Hash)]
    pub struct DeleteRequest {
        /// The primary key of the item.
        pub key: Key => with_key,
    }
}

map_entries! {
    DeleteRequest {
        key: AttributeValue => add_key_entry, clear_key_entries;
    }
}

shape! {
    @manual_eq
    /// Size estimate of the item collection touched by a write.
    pub struct ItemCollectionMetrics {
        /// The partition key value of the item collection.
        pub item_collection_key: BTreeMap<String, AttributeValue> => with_item_collection_key,
        /// Lower and upper bound of the collection size, in gigabytes.
        #[serde(rename = "SizeEstimateRangeGB")]
        pub size_estimate_range_gb: Vec<f64> => with_size_estimate_range_gb,
    }
}

map_entries! {
    ItemCollectionMetrics {
        item_collection_key: AttributeValue => add_item_collection_key_entry, clear_item_collection_key_entries;
    }
}

impl PartialEq for ItemCollectionMetrics {
    fn eq(&self, other: &Self) -> bool {
        self.item_collection_key == other.item_collection_key
            && canonical_f64s(self.size_estimate_range_gb.as_deref())
                == canonical_f64s(other.size_estimate_range_gb.as_deref())
    }
}

impl Eq for ItemCollectionMetrics {}

impl Hash for ItemCollectionMetrics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_collection_key.hash(state);
        canonical_f64s(self.size_estimate_range_gb.as_deref()).hash(state);
    }
}
