use std::sync::Arc;

use futures::future::join_all;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::{
    constants::REMOVABLE_IMAGE_EXTENSIONS,
    entities::{
        asset::ValidatedImage,
        blog_post::BlogPost,
        entity::{avatar_stem, AssetLocation, Record, Resolved, AVATAR_LOCATION},
    },
    errors::{AppError, GatewayError},
    repositories::{
        image_resolver::ImageResolver,
        store::{ObjectStore, RowQuery, RowStore},
    },
};

/// Which image of an entity an upload fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSlot {
    Main,
    Avatar,
}

impl AssetSlot {
    fn location<E: Record>(&self) -> AssetLocation {
        match self {
            AssetSlot::Main => E::ASSETS,
            AssetSlot::Avatar => AVATAR_LOCATION,
        }
    }

    fn stem(&self, id: &str) -> String {
        match self {
            AssetSlot::Main => id.to_string(),
            AssetSlot::Avatar => avatar_stem(id),
        }
    }
}

/// An image waiting for its row id so it can be keyed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAsset {
    pub slot: AssetSlot,
    pub image: ValidatedImage,
}

impl PendingAsset {
    pub fn main(image: ValidatedImage) -> Self {
        PendingAsset { slot: AssetSlot::Main, image }
    }

    pub fn avatar(image: ValidatedImage) -> Self {
        PendingAsset { slot: AssetSlot::Avatar, image }
    }
}

/// Typed reads and writes over the row and object stores. Every read comes back with
/// image URLs resolved from the row id.
#[derive(Clone)]
pub struct DataGateway {
    rows: Arc<dyn RowStore>,
    objects: Arc<dyn ObjectStore>,
    resolver: ImageResolver,
}

impl DataGateway {
    pub fn new(rows: Arc<dyn RowStore>, objects: Arc<dyn ObjectStore>, placeholder: &str) -> Self {
        let resolver = ImageResolver::new(objects.clone(), placeholder);
        DataGateway { rows, objects, resolver }
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    /// One-row read used by the health check.
    pub async fn ping(&self) -> Result<(), AppError> {
        let probe = RowQuery {
            limit: Some(1),
            ..RowQuery::default()
        };
        self.rows
            .select(BlogPost::TABLE, &probe)
            .await
            .map(|_| ())
            .map_err(|e| AppError::FetchError(e.to_string()))
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn get_all<E: Record>(&self) -> Result<Vec<Resolved<E>>, AppError> {
        self.fetch::<E>(&RowQuery::all()).await
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn get_by_field<E: Record>(&self, field: &str, value: &str) -> Result<Vec<Resolved<E>>, AppError> {
        self.fetch::<E>(&RowQuery::by_field(field, value)).await
    }

    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn get_by_id<E: Record>(&self, id: &str) -> Result<Resolved<E>, AppError> {
        self.fetch::<E>(&RowQuery::by_id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Two-phase create: insert the row, then upload each asset keyed by the new id.
    /// Not transactional. If an upload fails the row stays without that image and the
    /// error carries its id.
    #[instrument(skip(self, insert, assets), fields(table = E::TABLE, assets = assets.len()))]
    pub async fn create<E: Record>(&self, insert: &E::Insert, assets: Vec<PendingAsset>) -> Result<Resolved<E>, AppError> {
        let payload = serde_json::to_value(insert)
            .map_err(|e| AppError::InternalError(format!("Failed to encode {}: {}", E::KIND.label(), e)))?;

        let row = self.rows.insert(E::TABLE, payload).await.map_err(|e| {
            error!(table = E::TABLE, "Insert failed: {}", e);
            AppError::WriteError(e.to_string())
        })?;

        let id = extract_id(&row).map_err(|e| {
            error!(table = E::TABLE, "Insert returned no usable id: {}", e);
            AppError::WriteError(e.to_string())
        })?;
        info!(table = E::TABLE, id = %id, "Row inserted");

        let record: E = decode_row(row.clone())
            .or_else(|_| decode_row(with_id(row, &id)))
            .map_err(|e| AppError::InternalError(format!("Inserted {} could not be read back: {}", E::KIND.label(), e)))?;

        let mut image_url = None;
        let mut avatar_url = None;
        for asset in assets {
            let location = asset.slot.location::<E>();
            let key = location.key(&asset.slot.stem(&id), asset.image.format.extension());
            let url = self
                .upload_asset(location.bucket, &key, &asset.image)
                .await
                .map_err(|e| AppError::UploadError {
                    id: id.clone(),
                    message: e.to_string(),
                })?;
            match asset.slot {
                AssetSlot::Main => image_url = Some(url),
                AssetSlot::Avatar => avatar_url = Some(url),
            }
        }

        Ok(Resolved {
            record,
            image_url: image_url.unwrap_or_else(|| self.resolver.placeholder().to_string()),
            avatar_url,
        })
    }

    /// Stores `image` at `bucket/key` and returns its public URL.
    #[instrument(skip(self, image), fields(size = image.bytes.len()))]
    pub async fn upload_asset(&self, bucket: &str, key: &str, image: &ValidatedImage) -> Result<String, GatewayError> {
        let stored = self
            .objects
            .upload(bucket, key, image.bytes.clone(), image.format.mime_type())
            .await
            .inspect_err(|e| error!(bucket, key, "Upload failed: {}", e))?;
        Ok(self.objects.public_url(bucket, &stored))
    }

    #[instrument(skip(self, patch), fields(table = E::TABLE))]
    pub async fn update<E: Record>(&self, id: &str, patch: Value) -> Result<Resolved<E>, AppError> {
        let row = self
            .rows
            .update(E::TABLE, id, patch)
            .await
            .map_err(|e| {
                error!(table = E::TABLE, id, "Update failed: {}", e);
                AppError::WriteError(e.to_string())
            })?
            .ok_or_else(|| not_found::<E>(id))?;

        let record: E = decode_row(row).map_err(|e| AppError::FetchError(e.to_string()))?;
        Ok(self.resolve(record).await)
    }

    /// Removes every image the entity may own, then the row. Image removal is best
    /// effort; only the row delete decides the outcome.
    #[instrument(skip(self), fields(table = E::TABLE))]
    pub async fn delete<E: Record>(&self, id: &str) -> Result<(), AppError> {
        let mut targets = vec![(E::ASSETS, id.to_string())];
        if E::HAS_AVATAR {
            targets.push((AVATAR_LOCATION, avatar_stem(id)));
        }

        for (location, stem) in targets {
            let keys = REMOVABLE_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| location.key(&stem, ext))
                .collect::<Vec<_>>();
            if let Err(e) = self.objects.remove(location.bucket, keys).await {
                warn!(bucket = location.bucket, id, "Ignoring image cleanup failure: {}", e);
            }
        }

        let deleted = self.rows.delete(E::TABLE, id).await.map_err(|e| {
            error!(table = E::TABLE, id, "Delete failed: {}", e);
            AppError::WriteError(e.to_string())
        })?;

        if deleted {
            info!(table = E::TABLE, id, "Row deleted");
            Ok(())
        } else {
            Err(not_found::<E>(id))
        }
    }

    async fn fetch<E: Record>(&self, query: &RowQuery) -> Result<Vec<Resolved<E>>, AppError> {
        let rows = self.rows.select(E::TABLE, query).await.map_err(|e| {
            error!(table = E::TABLE, "Fetch failed: {}", e);
            AppError::FetchError(e.to_string())
        })?;

        let records = rows
            .into_iter()
            .map(decode_row::<E>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                error!(table = E::TABLE, "Row decode failed: {}", e);
                AppError::FetchError(e.to_string())
            })?;

        // resolve concurrently; join_all keeps input order
        Ok(join_all(records.into_iter().map(|record| self.resolve(record))).await)
    }

    async fn resolve<E: Record>(&self, record: E) -> Resolved<E> {
        let id = record.id().to_string();
        let (image_url, avatar_url) = futures::join!(self.resolver.resolve::<E>(&id), async {
            if E::HAS_AVATAR {
                self.resolver.resolve_avatar(&id).await
            } else {
                None
            }
        });
        Resolved { record, image_url, avatar_url }
    }
}

fn not_found<E: Record>(id: &str) -> AppError {
    AppError::NotFound(format!("No {} with id {}", E::KIND.label(), id))
}

fn decode_row<E: Record>(row: Value) -> Result<E, GatewayError> {
    serde_json::from_value(row).map_err(GatewayError::from)
}

/// Backends hand out string or integer ids; both are used as an opaque string.
fn extract_id(row: &Value) -> Result<String, GatewayError> {
    match row.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(GatewayError::MissingId),
    }
}

fn with_id(mut row: Value, id: &str) -> Value {
    if let Some(map) = row.as_object_mut() {
        map.insert("id".to_string(), Value::String(id.to_string()));
    }
    row
}
