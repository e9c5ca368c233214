#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

use actix_web::web;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::Notify;
use uuid::Uuid;

use club_site::{
    constants::PLACEHOLDER_IMAGE,
    errors::GatewayError,
    repositories::{
        store::{ObjectStore, RowQuery, RowStore},
        supabase::public_object_url,
    },
    AppState,
};

pub const BACKEND_URL: &str = "https://club.test";

/// Rows and objects kept in memory, standing in for the hosted backend.
#[derive(Default)]
pub struct InMemoryBackend {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    objects: Mutex<HashMap<(String, String), (Vec<u8>, String)>>,
    next_ids: Mutex<Vec<String>>,
    fail_uploads: AtomicBool,
    select_failure: Mutex<Option<String>>,
    insert_gate: Mutex<Option<Arc<Notify>>>,
    inserts: AtomicUsize,
    uploads: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(InMemoryBackend::default())
    }

    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables.lock().entry(table.to_string()).or_default().extend(rows);
    }

    pub fn seed_object(&self, bucket: &str, key: &str) {
        self.objects
            .lock()
            .insert((bucket.to_string(), key.to_string()), (vec![0u8; 4], "image/png".into()));
    }

    /// Ids handed out by the following inserts, in order.
    pub fn assign_ids(&self, ids: &[&str]) {
        let mut next = self.next_ids.lock();
        next.extend(ids.iter().rev().map(|s| s.to_string()));
    }

    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Every following select answers 500 with `body`.
    pub fn fail_selects(&self, body: &str) {
        *self.select_failure.lock() = Some(body.to_string());
    }

    /// Inserts wait on the returned gate; each `notify_one` lets one through.
    pub fn hold_inserts(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.insert_gate.lock() = Some(gate.clone());
        gate
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.lock().get(table).cloned().unwrap_or_default()
    }

    pub fn has_object(&self, bucket: &str, key: &str) -> bool {
        self.objects.lock().contains_key(&(bucket.to_string(), key.to_string()))
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().len()
    }
}

fn field_matches(row: &Value, field: &str, wanted: &str) -> bool {
    match row.get(field) {
        Some(Value::String(s)) => s == wanted,
        Some(other) => other.to_string() == wanted,
        None => false,
    }
}

#[async_trait]
impl RowStore for InMemoryBackend {
    async fn select(&self, table: &str, query: &RowQuery) -> Result<Vec<Value>, GatewayError> {
        if let Some(body) = self.select_failure.lock().clone() {
            return Err(GatewayError::Status { status: 500, body });
        }

        let mut rows: Vec<Value> = self
            .rows(table)
            .into_iter()
            .filter(|row| {
                query
                    .eq
                    .as_ref()
                    .is_none_or(|(field, value)| field_matches(row, field, value))
            })
            .collect();

        if let Some(column) = &query.order_desc {
            rows.sort_by(|a, b| {
                let a = a.get(column).and_then(Value::as_str).unwrap_or_default();
                let b = b.get(column).and_then(Value::as_str).unwrap_or_default();
                b.cmp(a)
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, GatewayError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let gate = self.insert_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let id = self
            .next_ids
            .lock()
            .pop()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut row = row;
        row["id"] = json!(id);
        self.seed(table, vec![row.clone()]);
        Ok(row)
    }

    async fn update(&self, table: &str, id: &str, patch: Value) -> Result<Option<Value>, GatewayError> {
        let mut tables = self.tables.lock();
        let Some(row) = tables
            .get_mut(table)
            .and_then(|rows| rows.iter_mut().find(|r| field_matches(r, "id", id)))
        else {
            return Ok(None);
        };

        if let (Some(target), Some(fields)) = (row.as_object_mut(), patch.as_object()) {
            for (key, value) in fields {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, table: &str, id: &str) -> Result<bool, GatewayError> {
        let mut tables = self.tables.lock();
        let Some(rows) = tables.get_mut(table) else {
            return Ok(false);
        };
        let before = rows.len();
        rows.retain(|r| !field_matches(r, "id", id));
        Ok(rows.len() != before)
    }
}

#[async_trait]
impl ObjectStore for InMemoryBackend {
    async fn exists(&self, bucket: &str, key: &str) -> Result<bool, GatewayError> {
        Ok(self.has_object(bucket, key))
    }

    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, GatewayError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(GatewayError::Status {
                status: 503,
                body: "storage unavailable".into(),
            });
        }
        self.objects
            .lock()
            .insert((bucket.to_string(), key.to_string()), (bytes, content_type.to_string()));
        Ok(key.to_string())
    }

    async fn remove(&self, bucket: &str, keys: Vec<String>) -> Result<(), GatewayError> {
        let mut objects = self.objects.lock();
        for key in keys {
            objects.remove(&(bucket.to_string(), key));
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        public_object_url(BACKEND_URL, bucket, key)
    }
}

pub fn test_state(backend: &Arc<InMemoryBackend>) -> web::Data<AppState> {
    web::Data::new(AppState::with_stores(backend.clone(), backend.clone(), PLACEHOLDER_IMAGE))
}

/// The smallest byte string sniffed as PNG, padded to `len`.
pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.resize(len.max(bytes.len()), 0);
    bytes
}

pub const BOUNDARY: &str = "----club-site-test-boundary";

pub enum Part<'a> {
    Json(&'a str, Value),
    File(&'a str, &'a str, &'a str, Vec<u8>),
}

/// Encodes `parts` as a `multipart/form-data` body delimited by [`BOUNDARY`].
pub fn multipart_body(parts: Vec<Part<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Json(name, value) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\nContent-Type: application/json\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(value.to_string().as_bytes());
            }
            Part::File(name, file_name, content_type, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(&bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub fn project_row(id: &str, title: &str, category: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "full_description": format!("{title} in depth"),
        "category": category,
        "author": "Priya Sharma",
        "tags": ["student"],
        "github_link": null,
        "live_demo": null,
        "tech_stack": ["Rust"],
        "features": [],
        "status": "Completed",
        "date": "2024-03-01",
        "created_at": created_at,
        "updated_at": created_at
    })
}

/// Seven projects, two of them in Technology.
pub fn seven_projects() -> Vec<Value> {
    vec![
        project_row("p1", "Campus Assistant", "AI/ML", "2024-01-01T00:00:00Z"),
        project_row("p2", "Smart Attendance", "Technology", "2024-01-02T00:00:00Z"),
        project_row("p3", "Event Planner", "Web Development", "2024-01-03T00:00:00Z"),
        project_row("p4", "Code Review Bot", "Technology", "2024-01-04T00:00:00Z"),
        project_row("p5", "Solar Tracker", "IoT", "2024-01-05T00:00:00Z"),
        project_row("p6", "Study Buddy", "Mobile", "2024-01-06T00:00:00Z"),
        project_row("p7", "Quiz Arena", "Web Development", "2024-01-07T00:00:00Z"),
    ]
}

pub fn blog_row(id: &str, title: &str, category: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "excerpt": format!("{title} excerpt"),
        "full_content": format!("# {title}\n\nSome **bold** words.<script>alert(1)</script>"),
        "author": "Sneha Reddy",
        "read_time": "4 min read",
        "category": category,
        "created_at": created_at,
        "updated_at": created_at
    })
}
