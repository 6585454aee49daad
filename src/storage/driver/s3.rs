use std::future::Future;
use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use chrono::DateTime;

use crate::config::Config;
use crate::storage::{ObjectEntry, ObjectRead, ObjectStore, StorageError, sort_and_cap};

/// ListObjectsV2 returns at most 1000 keys per page regardless of the
/// requested maximum.
const LIST_PAGE_SIZE: usize = 1000;

pub struct S3Storage {
    client: Client,
    bucket: String,
    op_timeout: Option<Duration>,
}

impl S3Storage {
    pub async fn new(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "bucketview-flags",
        );
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .load()
            .await;
        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            // MinIO and friends route by path, not by virtual host.
            .force_path_style(true)
            .build();

        S3Storage {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            op_timeout: (config.op_timeout_secs > 0)
                .then(|| Duration::from_secs(config.op_timeout_secs)),
        }
    }

    /// Apply the configured operation timeout, if any. The timeout covers
    /// the list/open call itself; the body copy stays unbounded.
    async fn bounded<T, F>(&self, fut: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        match self.op_timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| StorageError::Timeout(limit))?,
            None => fut.await,
        }
    }

    async fn collect_entries(
        &self,
        prefix: &str,
        max_keys: usize,
    ) -> Result<Vec<ObjectEntry>, StorageError> {
        let mut entries = Vec::new();
        let mut continuation_token: Option<String> = None;

        while entries.len() < max_keys {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .max_keys((max_keys - entries.len()).min(LIST_PAGE_SIZE) as i32);
            if !prefix.is_empty() {
                req = req.prefix(prefix);
            }
            if let Some(token) = &continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| StorageError::Backend(format!("list objects failed: {e}")))?;

            for obj in resp.contents.unwrap_or_default() {
                entries.push(ObjectEntry {
                    key: obj.key.unwrap_or_default(),
                    size: obj.size.unwrap_or(0).max(0) as u64,
                    last_modified: obj
                        .last_modified
                        .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
                });
            }

            continuation_token = resp.next_continuation_token;
            if continuation_token.is_none() {
                break;
            }
        }

        Ok(sort_and_cap(entries, max_keys))
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Storage {
    async fn list(
        &self,
        prefix: &str,
        max_keys: usize,
    ) -> Result<Vec<ObjectEntry>, StorageError> {
        self.bounded(self.collect_entries(prefix, max_keys)).await
    }

    async fn open_read(&self, key: &str) -> Result<ObjectRead, StorageError> {
        self.bounded(async {
            let resp = self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| match e.as_service_error() {
                    Some(svc) if svc.is_no_such_key() => {
                        StorageError::NoSuchKey(key.to_string())
                    }
                    _ => StorageError::Backend(format!("get object `{key}` failed: {e}")),
                })?;

            Ok(ObjectRead {
                size: resp.content_length().and_then(|len| u64::try_from(len).ok()),
                content_type: resp.content_type().map(str::to_owned),
                reader: Box::new(resp.body.into_async_read()),
            })
        })
        .await
    }
}
