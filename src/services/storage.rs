use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::core::config::Settings;
use crate::services::collaborators::{ObjectStorage, TransferError};

const SUBMISSION_PREFIX: &str = "submissions";

/// S3-compatible object storage for submission files.
///
/// Keys are `submissions/{uuid}/{name}`; the uuid is the uniqueness token, so the canonical
/// file name stays intact for whoever downloads it. Locations are `s3://{bucket}/{key}`.
#[derive(Debug, Clone)]
pub(crate) struct StorageService {
    client: Client,
    bucket: String,
    view_url_ttl: Duration,
}

impl StorageService {
    pub(crate) async fn from_settings(settings: &Settings) -> anyhow::Result<Option<Self>> {
        if settings.s3().access_key.is_empty() || settings.s3().secret_key.is_empty() {
            return Ok(None);
        }

        let creds = Credentials::new(
            settings.s3().access_key.clone(),
            settings.s3().secret_key.clone(),
            None,
            None,
            "lms-static",
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(settings.s3().endpoint.clone())
            .region(aws_config::Region::new(settings.s3().region.clone()))
            .credentials_provider(creds)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config).force_path_style(true).build();

        Ok(Some(Self {
            client: Client::from_conf(s3_config),
            bucket: settings.s3().bucket.clone(),
            view_url_ttl: Duration::from_secs(settings.s3().presigned_url_expire_minutes * 60),
        }))
    }

    pub(crate) async fn presign_get(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> anyhow::Result<String> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(PresigningConfig::expires_in(expires_in)?)
            .await?;

        Ok(presigned.uri().to_string())
    }

    fn location_for(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }

    /// The object key behind a location this bucket produced; `None` for foreign locations.
    fn key_for<'a>(&self, location: &'a str) -> Option<&'a str> {
        location.strip_prefix("s3://")?.strip_prefix(self.bucket.as_str())?.strip_prefix('/')
    }
}

pub(crate) fn object_key(token: &Uuid, name: &str) -> String {
    format!("{SUBMISSION_PREFIX}/{token}/{name}")
}

#[async_trait]
impl ObjectStorage for StorageService {
    async fn store(
        &self,
        name: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<String, TransferError> {
        let key = object_key(&Uuid::new_v4(), name);
        let size = bytes.len();
        let checksum = hex::encode(Sha256::digest(&bytes));

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(mime_type)
            .content_disposition(format!("attachment; filename=\"{name}\""))
            .metadata("sha256", &checksum)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|err| TransferError(format!("S3 put_object failed: {err}")))?;

        tracing::debug!(key = %key, size_bytes = size, sha256 = %checksum, "Object stored");
        Ok(self.location_for(&key))
    }

    async fn view_url(&self, location: &str) -> Result<Option<String>, TransferError> {
        let Some(key) = self.key_for(location) else {
            return Ok(None);
        };

        self.presign_get(key, self.view_url_ttl)
            .await
            .map(Some)
            .map_err(|err| TransferError(format!("Failed to presign download: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn object_key_keeps_canonical_name_last() {
        let token = Uuid::nil();
        assert_eq!(
            object_key(&token, "Jane_Doe_Lab.pdf"),
            "submissions/00000000-0000-0000-0000-000000000000/Jane_Doe_Lab.pdf"
        );
    }

    #[tokio::test]
    async fn unconfigured_credentials_disable_storage() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();

        let settings = Settings::load().expect("settings");
        assert!(StorageService::from_settings(&settings).await.expect("storage").is_none());
    }

    #[tokio::test]
    async fn view_url_presigns_own_locations_only() {
        let _guard = test_support::env_lock().await;
        test_support::set_test_env();
        test_support::set_test_storage_env();

        let settings = Settings::load().expect("settings");
        let storage = StorageService::from_settings(&settings)
            .await
            .expect("storage")
            .expect("storage enabled");

        let location = storage.location_for("submissions/abc/Jane_Doe_Lab.pdf");
        assert_eq!(location, "s3://lms-test-bucket/submissions/abc/Jane_Doe_Lab.pdf");

        let url = storage.view_url(&location).await.expect("presign").expect("url");
        assert!(url.contains("Jane_Doe_Lab.pdf"));

        let foreign = storage.view_url("s3://other-bucket/file.pdf").await.expect("foreign");
        assert!(foreign.is_none());
    }
}
