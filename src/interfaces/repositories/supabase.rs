use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::instrument;
use url::Url;
use zeroize::Zeroizing;

use crate::{
    constants::UPLOAD_CACHE_CONTROL_SECS,
    errors::GatewayError,
    repositories::store::{ObjectStore, RowQuery, RowStore},
    settings::BackendCredentials,
};

/// REST client for the hosted backend: PostgREST under `/rest/v1` and object storage
/// under `/storage/v1`.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: Arc<Zeroizing<String>>,
}

impl SupabaseClient {
    pub fn new(credentials: BackendCredentials, timeout: Duration) -> Result<Self, GatewayError> {
        let parsed = Url::parse(&credentials.base_url)
            .map_err(|e| GatewayError::Transport(format!("Invalid backend URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::Transport(format!(
                "Unsupported backend URL scheme: {}",
                parsed.scheme()
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::from)?;

        Ok(SupabaseClient {
            http,
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            anon_key: Arc::new(credentials.anon_key),
        })
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, encode_key(key))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.anon_key.as_str())
            .bearer_auth(self.anon_key.as_str())
    }

    async fn rows(response: Response) -> Result<Vec<Value>, GatewayError> {
        let response = ensure_success(response).await?;
        let body: Value = response.json().await?;
        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(GatewayError::Decode(format!("expected an array of rows, got {other}"))),
        }
    }
}

/// `<backend>/storage/v1/object/public/<bucket>/<key>`.
pub fn public_object_url(base_url: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}/storage/v1/object/public/{}/{}",
        base_url.trim_end_matches('/'),
        bucket,
        encode_key(key)
    )
}

/// Percent-encodes each path segment of a storage key, keeping the separators.
fn encode_key(key: &str) -> String {
    key.trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

async fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl RowStore for SupabaseClient {
    #[instrument(skip(self))]
    async fn select(&self, table: &str, query: &RowQuery) -> Result<Vec<Value>, GatewayError> {
        let mut params: Vec<(String, String)> = vec![("select".to_string(), "*".to_string())];
        if let Some((field, value)) = &query.eq {
            params.push((field.clone(), eq_filter(value)));
        }
        if let Some(field) = &query.order_desc {
            params.push(("order".to_string(), format!("{field}.desc")));
        }
        if let Some(limit) = query.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        let response = self
            .authorized(self.http.get(self.rest_url(table)))
            .query(&params)
            .send()
            .await?;

        Self::rows(response).await
    }

    #[instrument(skip(self, row))]
    async fn insert(&self, table: &str, row: Value) -> Result<Value, GatewayError> {
        let response = self
            .authorized(self.http.post(self.rest_url(table)))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::Decode("insert returned no rows".to_string()))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Option<Value>, GatewayError> {
        let response = self
            .authorized(self.http.patch(self.rest_url(table)))
            .header("Prefer", "return=representation")
            .query(&[("id", eq_filter(id))])
            .json(&patch)
            .send()
            .await?;

        Ok(Self::rows(response).await?.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn delete(&self, table: &str, id: &str) -> Result<bool, GatewayError> {
        let response = self
            .authorized(self.http.delete(self.rest_url(table)))
            .header("Prefer", "return=representation")
            .query(&[("id", eq_filter(id))])
            .send()
            .await?;

        Ok(!Self::rows(response).await?.is_empty())
    }
}

#[async_trait]
impl ObjectStore for SupabaseClient {
    #[instrument(skip(self))]
    async fn exists(&self, bucket: &str, key: &str) -> Result<bool, GatewayError> {
        let response = self
            .http
            .head(self.public_url(bucket, key))
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(true),
            // Storage answers 400 rather than 404 for some missing public objects
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => Ok(false),
            status => Err(GatewayError::Status {
                status: status.as_u16(),
                body: String::new(),
            }),
        }
    }

    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, GatewayError> {
        let response = self
            .authorized(self.http.post(self.object_url(bucket, key)))
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CACHE_CONTROL, format!("max-age={UPLOAD_CACHE_CONTROL_SECS}"))
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(key.to_string())
    }

    #[instrument(skip(self))]
    async fn remove(&self, bucket: &str, keys: Vec<String>) -> Result<(), GatewayError> {
        if keys.is_empty() {
            return Ok(());
        }

        let response = self
            .authorized(self.http.delete(format!("{}/storage/v1/object/{}", self.base_url, bucket)))
            .json(&serde_json::json!({ "prefixes": keys }))
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        public_object_url(&self.base_url, bucket, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(base_url: &str) -> BackendCredentials {
        BackendCredentials {
            base_url: base_url.to_string(),
            anon_key: Zeroizing::new("anon".to_string()),
        }
    }

    #[test]
    fn public_url_is_pure_function_of_bucket_and_key() {
        assert_eq!(
            public_object_url("https://xyz.supabase.co/", "images", "projects/abc-123.png"),
            "https://xyz.supabase.co/storage/v1/object/public/images/projects/abc-123.png"
        );
    }

    #[test]
    fn key_segments_are_encoded() {
        assert_eq!(encode_key("projects/my file.png"), "projects/my%20file.png");
    }

    #[test]
    fn rejects_non_http_backend_url() {
        assert!(SupabaseClient::new(credentials("ftp://xyz"), Duration::from_secs(1)).is_err());
        assert!(SupabaseClient::new(credentials("not a url"), Duration::from_secs(1)).is_err());
    }

    #[test]
    fn object_urls_use_trimmed_base() {
        let client = SupabaseClient::new(credentials("https://xyz.supabase.co/"), Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.object_url("blogs", "b1.jpg"),
            "https://xyz.supabase.co/storage/v1/object/blogs/b1.jpg"
        );
        assert_eq!(client.rest_url("courses"), "https://xyz.supabase.co/rest/v1/courses");
    }
}
