use std::sync::Arc;

use tracing::warn;

use crate::{
    constants::IMAGE_EXTENSIONS,
    entities::entity::{avatar_stem, AssetLocation, Record, AVATAR_LOCATION},
    repositories::store::ObjectStore,
};

/// Maps an entity id to the public URL of its image by probing `<stem>.<ext>` for each
/// known extension in order.
#[derive(Clone)]
pub struct ImageResolver {
    store: Arc<dyn ObjectStore>,
    placeholder: String,
}

impl ImageResolver {
    pub fn new(store: Arc<dyn ObjectStore>, placeholder: impl Into<String>) -> Self {
        ImageResolver {
            store,
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// First existing `<folder>/<stem>.<ext>` wins. A failed probe counts as a miss.
    pub async fn probe(&self, location: AssetLocation, stem: &str) -> Option<String> {
        for extension in IMAGE_EXTENSIONS {
            let key = location.key(stem, extension);
            match self.store.exists(location.bucket, &key).await {
                Ok(true) => return Some(self.store.public_url(location.bucket, &key)),
                Ok(false) => continue,
                Err(e) => {
                    warn!(bucket = location.bucket, key = %key, "Image probe failed: {}", e);
                    continue;
                }
            }
        }
        None
    }

    /// Main image of a stored entity, falling back to the placeholder path.
    pub async fn resolve<E: Record>(&self, id: &str) -> String {
        self.probe(E::ASSETS, id)
            .await
            .unwrap_or_else(|| self.placeholder.clone())
    }

    pub async fn resolve_avatar(&self, id: &str) -> Option<String> {
        self.probe(AVATAR_LOCATION, &avatar_stem(id)).await
    }
}
