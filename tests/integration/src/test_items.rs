//! Item reads and writes through the client.

#[cfg(test)]
mod tests {
    use dynastack_model::attribute_value::AttributeValue;
    use dynastack_model::error::ModelError;
    use dynastack_model::input::{CreateTableInput, DeleteItemInput, GetItemInput, PutItemInput};
    use dynastack_model::types::{
        AttributeDefinition, Item, Key, KeySchemaElement, KeyType, ScalarAttributeType,
    };

    use crate::{local_client, test_table_name};

    async fn create_composite_table(
        client: &dynastack_http::DynamoDBClient<std::sync::Arc<crate::InMemoryDynamoDB>>,
        name: &str,
    ) -> anyhow::Result<()> {
        client
            .create_table(CreateTableInput::new(
                name,
                vec![
                    KeySchemaElement::new("pk", KeyType::Hash),
                    KeySchemaElement::new("sk", KeyType::Range),
                ],
                vec![
                    AttributeDefinition::new("pk", ScalarAttributeType::S),
                    AttributeDefinition::new("sk", ScalarAttributeType::N),
                ],
            ))
            .await?;
        Ok(())
    }

    fn key(pk: &str, sk: i64) -> Key {
        Key::from([
            ("pk".to_owned(), AttributeValue::S(pk.to_owned())),
            ("sk".to_owned(), AttributeValue::number(sk)),
        ])
    }

    #[tokio::test]
    async fn test_should_put_get_and_delete_item() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("items");
        create_composite_table(&client, &name).await?;

        let input = PutItemInput::default()
            .with_table_name(name.clone())
            .add_item_entry("pk", AttributeValue::S("user#1".to_owned()))?
            .add_item_entry("sk", AttributeValue::number(1))?
            .add_item_entry("name", AttributeValue::S("Alice".to_owned()))?
            .add_item_entry(
                "roles",
                AttributeValue::Ss(vec!["admin".to_owned(), "dev".to_owned()]),
            )?;
        let expected: Item = input.item.clone().unwrap_or_default();
        client.put_item(input).await?;

        let got = client
            .get_item(GetItemInput::new(&name, key("user#1", 1)).with_consistent_read(true))
            .await?;
        assert_eq!(got.item, Some(expected));

        client
            .delete_item(DeleteItemInput::new(&name, key("user#1", 1)))
            .await?;
        let gone = client.get_item(GetItemInput::new(&name, key("user#1", 1))).await?;
        assert_eq!(gone.item, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_keep_items_apart_by_sort_key() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("sort");
        create_composite_table(&client, &name).await?;

        for sk in 1..=3 {
            let mut item = key("order#7", sk);
            item.insert("qty".to_owned(), AttributeValue::number(sk * 10));
            client.put_item(PutItemInput::new(&name, item)).await?;
        }

        let got = client.get_item(GetItemInput::new(&name, key("order#7", 2))).await?;
        assert_eq!(
            got.item.and_then(|item| item.get("qty").cloned()),
            Some(AttributeValue::N("20".to_owned()))
        );
        Ok(())
    }

    #[test]
    fn test_should_reject_duplicate_item_entry_before_sending() {
        let err = PutItemInput::default()
            .add_item_entry("pk", AttributeValue::S("a".to_owned()))
            .and_then(|input| input.add_item_entry("pk", AttributeValue::S("b".to_owned())))
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { ref key, .. } if key == "pk"));
    }

    #[tokio::test]
    async fn test_should_roundtrip_binary_and_nested_values() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("nested");
        create_composite_table(&client, &name).await?;

        let mut item = key("doc#1", 1);
        item.insert(
            "blob".to_owned(),
            AttributeValue::B(bytes::Bytes::from_static(b"\x00\x01binary")),
        );
        item.insert(
            "meta".to_owned(),
            AttributeValue::M(
                [
                    ("active".to_owned(), AttributeValue::Bool(true)),
                    ("deleted".to_owned(), AttributeValue::Null(true)),
                    (
                        "scores".to_owned(),
                        AttributeValue::L(vec![AttributeValue::number(1.5), AttributeValue::number(-2)]),
                    ),
                ]
                .into(),
            ),
        );
        client.put_item(PutItemInput::new(&name, item.clone())).await?;

        let got = client.get_item(GetItemInput::new(&name, key("doc#1", 1))).await?;
        assert_eq!(got.item, Some(item));
        Ok(())
    }
}
