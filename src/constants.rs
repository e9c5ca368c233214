use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Probe order used when resolving `<id>.<ext>` images. First hit wins.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Extensions swept when a blog post is deleted. Wider than the probe list on purpose
/// so legacy gif uploads are cleaned up as well.
pub const REMOVABLE_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

pub const IMAGES_BUCKET: &str = "images";
pub const BLOGS_BUCKET: &str = "blogs";

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_IMAGE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

pub const UPLOAD_CACHE_CONTROL_SECS: u32 = 3600;

/// Largest carousel window radius served; wider requests are clamped or refused.
pub const MAX_WINDOW_RADIUS: usize = 12;

pub const CAROUSEL_TRANSITION: Duration = Duration::from_millis(400);
pub const STATUS_DISMISS_DELAY: Duration = Duration::from_secs(3);

pub const GLOBAL_SEARCH_LIMIT: usize = 6;

pub const ALL_CATEGORIES: &str = "all";
pub const BLOG_CATEGORIES: [&str; 4] = ["Technology", "Research", "Innovation", "Community"];
