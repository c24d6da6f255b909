//! Service errors as seen by the caller.

#[cfg(test)]
mod tests {
    use dynastack_model::error::DynamoDBErrorCode;
    use dynastack_model::input::{
        CreateTableInput, DescribeLimitsInput, DescribeTableInput, GetItemInput, ListTablesInput,
        PutItemInput,
    };
    use dynastack_model::types::{Item, KeySchemaElement, KeyType};

    use crate::{local_client, test_table_name};

    #[tokio::test]
    async fn test_should_report_missing_table() {
        let (client, _) = local_client();
        let err = client
            .describe_table(DescribeTableInput::new("does-not-exist"))
            .await
            .unwrap_err();

        assert_eq!(err.code, DynamoDBErrorCode::ResourceNotFoundException);
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert!(err.message.contains("does-not-exist"));
        assert!(err.request_id.is_some());
    }

    #[tokio::test]
    async fn test_should_report_duplicate_table() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("dup");
        let input = CreateTableInput::default()
            .with_table_name(name.clone())
            .with_key_schema(vec![KeySchemaElement::new("pk", KeyType::Hash)]);

        client.create_table(input.clone()).await?;
        let err = client.create_table(input).await.unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::ResourceInUseException);
        assert_eq!(
            err.to_string(),
            format!("DynamoDBError(ResourceInUseException): Table already exists: {name}")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_should_report_validation_error_for_missing_key() -> anyhow::Result<()> {
        let (client, _) = local_client();
        let name = test_table_name("validation");
        client
            .create_table(
                CreateTableInput::default()
                    .with_table_name(name.clone())
                    .with_key_schema(vec![KeySchemaElement::new("pk", KeyType::Hash)]),
            )
            .await?;

        let err = client
            .put_item(PutItemInput::new(&name, Item::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::ValidationException);

        let err = client
            .get_item(GetItemInput::default().with_table_name(name))
            .await
            .unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::ValidationException);
        Ok(())
    }

    #[tokio::test]
    async fn test_should_report_unsupported_operation() {
        let (client, _) = local_client();
        let err = client
            .describe_limits(DescribeLimitsInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::UnrecognizedClientException);
        assert!(err.message.contains("DescribeLimits"));
    }

    #[tokio::test]
    async fn test_should_reject_corrupted_response() -> anyhow::Result<()> {
        let (client, endpoint) = local_client();
        endpoint.corrupt_next_crc();

        let err = client
            .list_tables(ListTablesInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, DynamoDBErrorCode::SerializationException);

        let output = client.list_tables(ListTablesInput::default()).await?;
        assert_eq!(output.table_names, Some(Vec::new()));
        Ok(())
    }
}
