//! An in-memory DynamoDB endpoint that speaks the wire protocol.
//!
//! Requests are routed by `X-Amz-Target` and decoded with the model types,
//! so the client under test goes through the same marshalling path it would
//! use against the real service.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;

use dynastack_http::client::{Transport, TransportFuture};
use dynastack_http::response::{error_to_response, json_response};
use dynastack_http::target::resolve_operation;
use dynastack_model::error::DynamoDBError;
use dynastack_model::input::{
    CreateTableInput, DeleteItemInput, DeleteTableInput, DescribeTableInput, GetItemInput,
    ListTablesInput, ListTagsOfResourceInput, PutItemInput, TagResourceInput, UntagResourceInput,
};
use dynastack_model::operations::DynamoDBOperation;
use dynastack_model::output::{
    CreateTableOutput, DeleteItemOutput, DeleteTableOutput, DescribeTableOutput, GetItemOutput,
    ListTablesOutput, ListTagsOfResourceOutput, PutItemOutput, TagResourceOutput,
    UntagResourceOutput,
};
use dynastack_model::types::{Item, Key, TableDescription, TableStatus, Tag};

const ACCOUNT_ID: &str = "123456789012";
const DEFAULT_LIST_LIMIT: usize = 100;
const TAGS_PAGE_SIZE: usize = 2;

#[derive(Debug)]
struct Table {
    description: TableDescription,
    items: BTreeMap<String, Item>,
}

#[derive(Debug, Default)]
struct State {
    tables: BTreeMap<String, Table>,
    tags: BTreeMap<String, Vec<Tag>>,
}

/// A single-region DynamoDB fake backed by ordered maps.
#[derive(Debug)]
pub struct InMemoryDynamoDB {
    region: String,
    state: Mutex<State>,
    requests: Mutex<Vec<DynamoDBOperation>>,
    corrupt_crc: AtomicBool,
}

impl InMemoryDynamoDB {
    /// Create an empty endpoint for `region`.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            state: Mutex::new(State::default()),
            requests: Mutex::new(Vec::new()),
            corrupt_crc: AtomicBool::new(false),
        }
    }

    /// Operations received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<DynamoDBOperation> {
        self.requests.lock().clone()
    }

    /// Make the next response carry a wrong `x-amz-crc32` header.
    pub fn corrupt_next_crc(&self) {
        self.corrupt_crc.store(true, Ordering::SeqCst);
    }

    fn table_arn(&self, table_name: &str) -> String {
        format!(
            "arn:aws:dynamodb:{}:{ACCOUNT_ID}:table/{table_name}",
            self.region
        )
    }

    fn handle(&self, request: &http::Request<Bytes>) -> Result<Vec<u8>, DynamoDBError> {
        let op = resolve_operation(request.headers())?;
        self.requests.lock().push(op);
        let body = request.body();

        match op {
            DynamoDBOperation::CreateTable => encode(&self.create_table(decode(body)?)?),
            DynamoDBOperation::DescribeTable => encode(&self.describe_table(&decode(body)?)?),
            DynamoDBOperation::DeleteTable => encode(&self.delete_table(&decode(body)?)?),
            DynamoDBOperation::ListTables => encode(&self.list_tables(&decode(body)?)),
            DynamoDBOperation::PutItem => encode(&self.put_item(decode(body)?)?),
            DynamoDBOperation::GetItem => encode(&self.get_item(&decode(body)?)?),
            DynamoDBOperation::DeleteItem => encode(&self.delete_item(&decode(body)?)?),
            DynamoDBOperation::TagResource => encode(&self.tag_resource(decode(body)?)?),
            DynamoDBOperation::UntagResource => encode(&self.untag_resource(&decode(body)?)?),
            DynamoDBOperation::ListTagsOfResource => {
                encode(&self.list_tags_of_resource(&decode(body)?)?)
            }
            other => Err(DynamoDBError::unknown_operation(other.as_str())),
        }
    }

    fn create_table(&self, input: CreateTableInput) -> Result<CreateTableOutput, DynamoDBError> {
        let name = required(input.table_name, "TableName")?;
        let key_schema = required(input.key_schema, "KeySchema")?;
        if key_schema.is_empty() {
            return Err(DynamoDBError::validation("KeySchema must not be empty"));
        }

        let mut state = self.state.lock();
        if state.tables.contains_key(&name) {
            return Err(DynamoDBError::resource_in_use(format!(
                "Table already exists: {name}"
            )));
        }

        let mut description = TableDescription::default()
            .with_table_arn(self.table_arn(&name))
            .with_table_id(uuid::Uuid::new_v4().to_string())
            .with_table_name(name.clone())
            .with_key_schema(key_schema)
            .with_table_status(TableStatus::Active)
            .with_creation_date_time(Utc::now())
            .with_item_count(0)
            .with_table_size_bytes(0);
        description.attribute_definitions = input.attribute_definitions;

        state.tables.insert(
            name,
            Table {
                description: description.clone(),
                items: BTreeMap::new(),
            },
        );
        Ok(CreateTableOutput::default().with_table_description(description))
    }

    fn describe_table(
        &self,
        input: &DescribeTableInput,
    ) -> Result<DescribeTableOutput, DynamoDBError> {
        let state = self.state.lock();
        let table = lookup(&state.tables, input.table_name.as_deref())?;
        Ok(DescribeTableOutput::default().with_table(table.description.clone()))
    }

    fn delete_table(&self, input: &DeleteTableInput) -> Result<DeleteTableOutput, DynamoDBError> {
        let mut state = self.state.lock();
        let name = input.table_name.clone().unwrap_or_default();
        let table = state
            .tables
            .remove(&name)
            .ok_or_else(|| not_found(&name))?;
        let arn = self.table_arn(&name);
        state.tags.remove(&arn);
        Ok(DeleteTableOutput::default()
            .with_table_description(table.description.with_table_status(TableStatus::Deleting)))
    }

    fn list_tables(&self, input: &ListTablesInput) -> ListTablesOutput {
        let state = self.state.lock();
        let limit = input
            .limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(DEFAULT_LIST_LIMIT);

        let names: Vec<String> = state
            .tables
            .keys()
            .filter(|name| {
                input
                    .exclusive_start_table_name
                    .as_ref()
                    .is_none_or(|start| *name > start)
            })
            .cloned()
            .collect();

        let page: Vec<String> = names.iter().take(limit).cloned().collect();
        let mut output = ListTablesOutput::default();
        if names.len() > page.len() {
            if let Some(last) = page.last() {
                output = output.with_last_evaluated_table_name(last.clone());
            }
        }
        output.with_table_names(page)
    }

    fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput, DynamoDBError> {
        let item = required(input.item, "Item")?;
        let mut state = self.state.lock();
        let name = input.table_name.unwrap_or_default();
        let table = state
            .tables
            .get_mut(&name)
            .ok_or_else(|| not_found(&name))?;

        let storage_key = storage_key(&table.description, &item)?;
        table.items.insert(storage_key, item);
        table.description.item_count = i64::try_from(table.items.len()).ok();
        Ok(PutItemOutput::default())
    }

    fn get_item(&self, input: &GetItemInput) -> Result<GetItemOutput, DynamoDBError> {
        let state = self.state.lock();
        let table = lookup(&state.tables, input.table_name.as_deref())?;
        let key = input
            .key
            .as_ref()
            .ok_or_else(|| DynamoDBError::validation("Key is required"))?;

        let storage_key = storage_key(&table.description, key)?;
        let mut output = GetItemOutput::default();
        if let Some(item) = table.items.get(&storage_key) {
            output = output.with_item(item.clone());
        }
        Ok(output)
    }

    fn delete_item(&self, input: &DeleteItemInput) -> Result<DeleteItemOutput, DynamoDBError> {
        let mut state = self.state.lock();
        let name = input.table_name.clone().unwrap_or_default();
        let table = state
            .tables
            .get_mut(&name)
            .ok_or_else(|| not_found(&name))?;
        let key = input
            .key
            .as_ref()
            .ok_or_else(|| DynamoDBError::validation("Key is required"))?;

        let storage_key = storage_key(&table.description, key)?;
        table.items.remove(&storage_key);
        table.description.item_count = i64::try_from(table.items.len()).ok();
        Ok(DeleteItemOutput::default())
    }

    fn tag_resource(&self, input: TagResourceInput) -> Result<TagResourceOutput, DynamoDBError> {
        let arn = required(input.resource_arn, "ResourceArn")?;
        let mut state = self.state.lock();
        self.check_arn(&state, &arn)?;

        let tags = state.tags.entry(arn).or_default();
        for tag in input.tags.unwrap_or_default() {
            tags.retain(|t| t.key != tag.key);
            tags.push(tag);
        }
        Ok(TagResourceOutput::default())
    }

    fn untag_resource(
        &self,
        input: &UntagResourceInput,
    ) -> Result<UntagResourceOutput, DynamoDBError> {
        let arn = input.resource_arn.clone().unwrap_or_default();
        let mut state = self.state.lock();
        self.check_arn(&state, &arn)?;

        if let (Some(tags), Some(keys)) = (state.tags.get_mut(&arn), input.tag_keys.as_ref()) {
            tags.retain(|t| t.key.as_ref().is_none_or(|k| !keys.contains(k)));
        }
        Ok(UntagResourceOutput::default())
    }

    fn list_tags_of_resource(
        &self,
        input: &ListTagsOfResourceInput,
    ) -> Result<ListTagsOfResourceOutput, DynamoDBError> {
        let arn = input.resource_arn.clone().unwrap_or_default();
        let state = self.state.lock();
        self.check_arn(&state, &arn)?;

        let tags = state.tags.get(&arn).cloned().unwrap_or_default();
        let start = match input.next_token.as_deref() {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| DynamoDBError::validation(format!("Invalid NextToken: {token}")))?,
            None => 0,
        };
        let end = (start + TAGS_PAGE_SIZE).min(tags.len());
        let page = tags.get(start..end).map(<[Tag]>::to_vec).unwrap_or_default();

        let mut output = ListTagsOfResourceOutput::default().with_tags(page);
        if end < tags.len() {
            output = output.with_next_token(end.to_string());
        }
        Ok(output)
    }

    fn check_arn(&self, state: &State, arn: &str) -> Result<(), DynamoDBError> {
        let known = state.tables.keys().any(|name| self.table_arn(name) == arn);
        if known {
            Ok(())
        } else {
            Err(DynamoDBError::resource_not_found(format!(
                "Requested resource not found: ResourceArn: {arn} not found"
            )))
        }
    }
}

impl Transport for InMemoryDynamoDB {
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let mut response = match self.handle(&request) {
            Ok(json) => json_response(json, &request_id),
            Err(err) => {
                tracing::debug!(code = %err.code, "fake endpoint rejected request");
                error_to_response(&err, &request_id)
            }
        };

        if self.corrupt_crc.swap(false, Ordering::SeqCst) {
            response
                .headers_mut()
                .insert("x-amz-crc32", http::HeaderValue::from_static("0"));
        }

        Box::pin(async move { Ok(response) })
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DynamoDBError> {
    serde_json::from_slice(body)
        .map_err(|e| DynamoDBError::serialization_exception(e.to_string()).with_source(e))
}

fn encode<T: Serialize>(output: &T) -> Result<Vec<u8>, DynamoDBError> {
    serde_json::to_vec(output).map_err(|e| DynamoDBError::internal_error(e.to_string()))
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, DynamoDBError> {
    value.ok_or_else(|| DynamoDBError::validation(format!("{field} is required")))
}

fn not_found(table_name: &str) -> DynamoDBError {
    DynamoDBError::resource_not_found(format!(
        "Requested resource not found: Table: {table_name} not found"
    ))
}

fn lookup<'a>(
    tables: &'a BTreeMap<String, Table>,
    table_name: Option<&str>,
) -> Result<&'a Table, DynamoDBError> {
    let name = table_name.unwrap_or_default();
    tables.get(name).ok_or_else(|| not_found(name))
}

/// Project the key attributes out of `item` and render them as a map key.
fn storage_key(description: &TableDescription, item: &Key) -> Result<String, DynamoDBError> {
    let mut key = Key::new();
    for element in description.key_schema.iter().flatten() {
        let name = element.attribute_name.as_deref().unwrap_or_default();
        let value = item.get(name).ok_or_else(|| {
            DynamoDBError::validation(format!(
                "One of the required keys was not given a value: {name}"
            ))
        })?;
        key.insert(name.to_owned(), value.clone());
    }
    encode(&key).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
