//! Table lifecycle and tagging through the client.

#[cfg(test)]
mod tests {
    use dynastack_model::input::{
        CreateTableInput, DeleteTableInput, DescribeTableInput, ListTagsOfResourceInput,
        TagResourceInput, UntagResourceInput,
    };
    use dynastack_model::operations::DynamoDBOperation;
    use dynastack_model::types::{
        AttributeDefinition, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus, Tag,
    };

    use crate::{local_client, test_table_name};

    fn simple_table(name: &str) -> CreateTableInput {
        CreateTableInput::new(
            name,
            vec![KeySchemaElement::new("pk", KeyType::Hash)],
            vec![AttributeDefinition::new("pk", ScalarAttributeType::S)],
        )
    }

    #[tokio::test]
    async fn test_should_create_describe_and_delete_table() -> anyhow::Result<()> {
        let (client, endpoint) = local_client();
        let name = test_table_name("lifecycle");

        let created = client.create_table(simple_table(&name)).await?;
        let description = created.table_description.unwrap_or_default();
        assert_eq!(description.table_name.as_deref(), Some(name.as_str()));
        assert_eq!(description.table_status, Some(TableStatus::Active));
        assert!(description.creation_date_time.is_some());
        assert_eq!(
            description.key_schema,
            Some(vec![KeySchemaElement::new("pk", KeyType::Hash)])
        );

        let described = client.describe_table(DescribeTableInput::new(&name)).await?;
        assert_eq!(described.table, Some(description));

        let deleted = client.delete_table(DeleteTableInput::new(&name)).await?;
        assert_eq!(
            deleted.table_description.and_then(|d| d.table_status),
            Some(TableStatus::Deleting)
        );

        assert_eq!(
            endpoint.requests(),
            vec![
                DynamoDBOperation::CreateTable,
                DynamoDBOperation::DescribeTable,
                DynamoDBOperation::DeleteTable,
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_should_tag_and_untag_table() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("tags");
        let arn = client
            .create_table(simple_table(&name))
            .await?
            .table_description
            .and_then(|d| d.table_arn)
            .unwrap_or_default();

        client
            .tag_resource(
                TagResourceInput::default()
                    .with_resource_arn(arn.clone())
                    .with_tags(vec![Tag::new("env", "test"), Tag::new("team", "storage")]),
            )
            .await?;
        client
            .untag_resource(
                UntagResourceInput::default()
                    .with_resource_arn(arn.clone())
                    .with_tag_keys(vec!["team".to_owned()]),
            )
            .await?;

        let listed = client
            .list_tags_of_resource(ListTagsOfResourceInput::new(&arn))
            .await?;
        assert_eq!(listed.tags, Some(vec![Tag::new("env", "test")]));
        assert_eq!(listed.next_token, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_render_only_set_fields_in_debug() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("debug");
        client.create_table(simple_table(&name)).await?;

        let table = client
            .describe_table(DescribeTableInput::new(&name))
            .await?
            .table
            .unwrap_or_default();
        let debug = format!("{table:?}");
        assert!(debug.contains("table_name"));
        assert!(debug.contains("item_count: 0"));
        assert!(!debug.contains("global_secondary_indexes"));
        assert!(!debug.contains("None"));
        Ok(())
    }
}
