//! Following continuation markers across pages.

#[cfg(test)]
mod tests {
    use dynastack_model::input::{
        CreateTableInput, ListTablesInput, ListTagsOfResourceInput, TagResourceInput,
    };
    use dynastack_model::pagination::Paginate;
    use dynastack_model::types::{KeySchemaElement, KeyType, Tag};

    use crate::local_client;

    fn table(name: &str) -> CreateTableInput {
        CreateTableInput::default()
            .with_table_name(name)
            .with_key_schema(vec![KeySchemaElement::new("pk", KeyType::Hash)])
    }

    #[tokio::test]
    async fn test_should_list_all_tables_page_by_page() -> anyhow::Result<()> {
        let (client, _) = local_client();
        for name in ["alpha", "bravo", "charlie", "delta", "echo"] {
            client.create_table(table(name)).await?;
        }

        let mut pages = Vec::new();
        let mut input = Some(ListTablesInput::default().with_limit(2));
        while let Some(current) = input {
            let output = client.list_tables(current.clone()).await?;
            pages.push(output.table_names.clone().unwrap_or_default());
            input = current.next_page(&output);
        }

        assert_eq!(
            pages,
            vec![
                vec!["alpha".to_owned(), "bravo".to_owned()],
                vec!["charlie".to_owned(), "delta".to_owned()],
                vec!["echo".to_owned()],
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_should_follow_next_token_for_tags() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let arn = client
            .create_table(table("tagged"))
            .await?
            .table_description
            .and_then(|d| d.table_arn)
            .unwrap_or_default();

        let tags: Vec<Tag> = (0..5).map(|i| Tag::new(format!("k{i}"), "v")).collect();
        client
            .tag_resource(
                TagResourceInput::default()
                    .with_resource_arn(arn.clone())
                    .with_tags(tags.clone()),
            )
            .await?;

        let mut collected = Vec::new();
        let mut requests = 0;
        let mut input = Some(ListTagsOfResourceInput::new(arn));
        while let Some(current) = input {
            let output = client.list_tags_of_resource(current.clone()).await?;
            requests += 1;
            collected.extend(output.tags.clone().unwrap_or_default());
            input = current.next_page(&output);
        }

        assert_eq!(collected, tags);
        assert_eq!(requests, 3);
        Ok(())
    }
}
