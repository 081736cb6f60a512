//! End-to-end copier tests against a live S3 endpoint.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aws_sdk_s3::primitives::ByteStream;
    use objectferry_core::{FerryConfig, FerryError, FerryService, S3ObjectStore};

    use crate::{cleanup_bucket, create_test_bucket, object_created_event, s3_client};

    fn service_for(source_bucket: &str, destination_bucket: &str) -> FerryService {
        let config = FerryConfig::builder()
            .source_bucket(source_bucket.into())
            .destination_bucket(destination_bucket.into())
            .source_prefix("incoming/".into())
            .destination_prefix("processed/".into())
            .build();
        FerryService::new(
            Arc::new(S3ObjectStore::new(s3_client())),
            Arc::new(config),
        )
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_copy_object_with_tags_on_event() {
        let client = s3_client();
        let source = create_test_bucket(&client, "ferry-src").await;
        let destination = create_test_bucket(&client, "ferry-dst").await;

        client
            .put_object()
            .bucket(&source)
            .key("incoming/report.csv")
            .body(ByteStream::from_static(b"id,amount\n1,10\n"))
            .content_type("text/csv")
            .send()
            .await
            .expect("put_object");

        let service = service_for(&source, &destination);
        let event = object_created_event(&[(&source, "incoming/report.csv")]);
        let confirmation = service.process_event(&event).await.expect("process_event");
        assert_eq!(confirmation, "Successfully processed S3 event");

        let copied = client
            .get_object()
            .bucket(&destination)
            .key("processed/report.csv")
            .send()
            .await
            .expect("copied object exists");
        let data = copied.body.collect().await.expect("collect body").into_bytes();
        assert_eq!(data.as_ref(), b"id,amount\n1,10\n");

        let tagging = client
            .get_object_tagging()
            .bucket(&destination)
            .key("processed/report.csv")
            .send()
            .await
            .expect("get_object_tagging");
        let tags = tagging.tag_set();
        assert_eq!(tags.len(), 6);
        assert!(
            tags.iter()
                .any(|t| t.key() == "ProcessingType" && t.value() == "Copy")
        );
        assert!(
            tags.iter()
                .any(|t| t.key() == "Environment" && t.value() == "Production")
        );
        assert!(
            tags.iter()
                .any(|t| t.key() == "SourceBucket" && t.value() == source)
        );

        cleanup_bucket(&client, &source).await;
        cleanup_bucket(&client, &destination).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_not_copy_on_foreign_bucket_event() {
        let client = s3_client();
        let source = create_test_bucket(&client, "ferry-src").await;
        let destination = create_test_bucket(&client, "ferry-dst").await;

        let service = service_for(&source, &destination);
        // Event names a bucket other than the configured source.
        let event = object_created_event(&[("some-other-bucket", "incoming/report.csv")]);
        service.process_event(&event).await.expect("process_event");

        let listed = client
            .list_objects_v2()
            .bucket(&destination)
            .send()
            .await
            .expect("list destination");
        assert_eq!(listed.key_count(), Some(0));

        cleanup_bucket(&client, &source).await;
        cleanup_bucket(&client, &destination).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_surface_copy_error_for_missing_source_object() {
        let client = s3_client();
        let source = create_test_bucket(&client, "ferry-src").await;
        let destination = create_test_bucket(&client, "ferry-dst").await;

        let service = service_for(&source, &destination);
        let event = object_created_event(&[(&source, "incoming/never-uploaded.csv")]);
        let err = service.process_event(&event).await.unwrap_err();
        assert!(matches!(err, FerryError::Copy { .. }));

        cleanup_bucket(&client, &source).await;
        cleanup_bucket(&client, &destination).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_read_object_metadata() {
        let client = s3_client();
        let source = create_test_bucket(&client, "ferry-src").await;

        client
            .put_object()
            .bucket(&source)
            .key("incoming/data.bin")
            .body(ByteStream::from_static(b"binary data"))
            .content_type("application/octet-stream")
            .send()
            .await
            .expect("put_object");

        let service = service_for(&source, "unused-destination");
        let head = service
            .object_head(&source, "incoming/data.bin")
            .await
            .expect("object_head");
        assert_eq!(head.size, Some(11));
        assert_eq!(head.content_type.as_deref(), Some("application/octet-stream"));
        assert!(head.e_tag.is_some());

        cleanup_bucket(&client, &source).await;
    }
}
