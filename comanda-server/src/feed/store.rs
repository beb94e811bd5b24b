//! In-memory realtime document store
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 FeedStore                     │
//! │   RwLock<Value>  (JSON document tree)         │
//! │   FeedVersions   (per-resource counters)      │
//! │   broadcast::Sender<FeedChange>               │
//! └───────────────┬──────────────────────────────┘
//!                 │ FeedChange { resource, path, version }
//!        ┌────────┴────────┐
//!        ▼                 ▼
//!  FeedSubscription   FeedSubscription
//!  ("pedidos")        ("menu")
//! ```
//!
//! Writes normalise the value before storing it: server timestamp
//! placeholders are resolved, `null` children are dropped and empty
//! objects/arrays vanish, so a parent left empty disappears too.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use shared::feed::is_server_timestamp;
use shared::message::{ChangeAction, FeedChange};
use shared::util::now_millis;
use shared::{AppError, AppResult};
use tokio::sync::broadcast;

use super::path::{FeedPath, MAX_DEPTH, validate_key};
use super::push_id::PushIdGenerator;
use super::subscription::FeedSubscription;

/// Default capacity of the change channel
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Per-resource version counters
///
/// Each top-level path keeps its own counter, bumped on every write to it.
#[derive(Debug, Default)]
pub struct FeedVersions {
    versions: DashMap<String, u64>,
}

impl FeedVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump a resource and return the new version (first write is 1)
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version of a resource, 0 if never written
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

struct StoreInner {
    root: RwLock<Value>,
    changes: broadcast::Sender<FeedChange>,
    versions: FeedVersions,
    push_ids: Mutex<PushIdGenerator>,
}

/// Shared document feed. Cloning is cheap (Arc).
#[derive(Clone)]
pub struct FeedStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for FeedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let resources = self
            .inner
            .root
            .read()
            .as_object()
            .map(|o| o.len())
            .unwrap_or(0);
        f.debug_struct("FeedStore")
            .field("resources", &resources)
            .field("subscribers", &self.inner.changes.receiver_count())
            .finish()
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Store whose change channel buffers `capacity` notices per subscriber
    pub fn with_capacity(capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: Arc::new(StoreInner {
                root: RwLock::new(Value::Object(Map::new())),
                changes,
                versions: FeedVersions::new(),
                push_ids: Mutex::new(PushIdGenerator::new()),
            }),
        }
    }

    // ========== Reads ==========

    /// Snapshot at `path` (`Value::Null` when absent)
    pub fn get(&self, path: &str) -> AppResult<Value> {
        let path = FeedPath::parse(path)?;
        Ok(self.get_at(&path))
    }

    pub(crate) fn get_at(&self, path: &FeedPath) -> Value {
        let root = self.inner.root.read();
        let mut node = &*root;
        for segment in path.segments() {
            match node.get(segment.as_str()) {
                Some(child) => node = child,
                None => return Value::Null,
            }
        }
        node.clone()
    }

    /// Current version of a top-level resource
    pub fn version(&self, resource: &str) -> u64 {
        self.inner.versions.get(resource)
    }

    // ========== Writes ==========

    /// Replace the value at `path`; `null` deletes it
    pub fn set(&self, path: &str, value: Value) -> AppResult<()> {
        let path = FeedPath::parse(path)?;
        check_value_at(&value, path.depth())?;
        self.write(&path, ChangeAction::Set, |root, now| {
            let value = normalize(value, now);
            set_at(root, path.segments(), value);
        })
    }

    /// Merge `fields` into the object at `path`, one child at a time
    pub fn update(&self, path: &str, fields: Map<String, Value>) -> AppResult<()> {
        let path = FeedPath::parse(path)?;
        for (key, value) in &fields {
            validate_key(key)?;
            check_value_at(value, path.depth() + 1)?;
        }
        self.write(&path, ChangeAction::Update, |root, now| {
            for (key, value) in fields {
                let mut segments = path.segments().to_vec();
                segments.push(key);
                set_at(root, &segments, normalize(value, now));
            }
        })
    }

    /// Append `value` under a generated, time-ordered key and return the key
    pub fn push(&self, path: &str, value: Value) -> AppResult<String> {
        let parent = FeedPath::parse(path)?;
        check_value_at(&value, parent.depth() + 1)?;
        let key = self.inner.push_ids.lock().next_id(now_millis());
        let path = parent.child(&key)?;
        self.write(&path, ChangeAction::Push, |root, now| {
            set_at(root, path.segments(), normalize(value, now));
        })?;
        Ok(key)
    }

    /// Delete the value at `path`
    pub fn remove(&self, path: &str) -> AppResult<()> {
        let path = FeedPath::parse(path)?;
        self.write(&path, ChangeAction::Remove, |root, _| {
            set_at(root, path.segments(), Value::Null);
        })
    }

    fn write<F>(&self, path: &FeedPath, action: ChangeAction, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut Value, i64),
    {
        let Some(resource) = path.resource() else {
            return Err(AppError::feed_write("Writes to the root are not allowed"));
        };

        let now = now_millis();
        {
            let mut root = self.inner.root.write();
            apply(&mut root, now);
        }

        let version = self.inner.versions.increment(resource);
        let change = FeedChange {
            resource: resource.to_string(),
            path: path.to_string(),
            version,
            action,
        };
        tracing::debug!(path = %change.path, version, action = %action, "Feed write");
        // No subscribers is fine
        let _ = self.inner.changes.send(change);
        Ok(())
    }

    // ========== Subscriptions ==========

    /// Subscribe to snapshots of `path`
    ///
    /// The first `next()` yields the current snapshot; later ones yield a
    /// fresh snapshot after every write that touches `path`.
    pub fn subscribe(&self, path: &str) -> AppResult<FeedSubscription> {
        let path = FeedPath::parse(path)?;
        Ok(FeedSubscription::new(
            self.clone(),
            path,
            self.inner.changes.subscribe(),
        ))
    }

    /// Raw change notices
    pub fn changes(&self) -> broadcast::Receiver<FeedChange> {
        self.inner.changes.subscribe()
    }
}

fn check_value_at(value: &Value, depth: usize) -> AppResult<()> {
    if depth > MAX_DEPTH {
        return Err(AppError::feed_write(format!(
            "Value nests deeper than {MAX_DEPTH} levels"
        )));
    }
    match value {
        Value::Object(map) if !is_server_timestamp(value) => {
            for (key, child) in map {
                validate_key(key)?;
                check_value_at(child, depth + 1)?;
            }
            Ok(())
        }
        Value::Array(items) => items
            .iter()
            .try_for_each(|child| check_value_at(child, depth + 1)),
        _ => Ok(()),
    }
}

/// Resolve placeholders and drop empty containers / nulls
fn normalize(value: Value, now: i64) -> Value {
    if is_server_timestamp(&value) {
        return Value::from(now);
    }
    match value {
        Value::Object(map) => {
            let cleaned: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, normalize(v, now)))
                .filter(|(_, v)| !v.is_null())
                .collect();
            if cleaned.is_empty() {
                Value::Null
            } else {
                Value::Object(cleaned)
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                Value::Null
            } else {
                Value::Array(items.into_iter().map(|v| normalize(v, now)).collect())
            }
        }
        other => other,
    }
}

/// Write `value` at `segments` below `node`, pruning parents left empty
fn set_at(node: &mut Value, segments: &[String], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if value.is_null() && !node.is_object() {
        return;
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    let Value::Object(map) = node else {
        return;
    };

    let child = map.entry(head.clone()).or_insert(Value::Null);
    set_at(child, rest, value);

    let now_empty = match &map[head.as_str()] {
        Value::Null => true,
        Value::Object(inner) => inner.is_empty(),
        _ => false,
    };
    if now_empty {
        map.remove(head.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::ErrorCode;
    use shared::feed::server_timestamp;

    #[test]
    fn test_set_and_get() {
        let store = FeedStore::new();
        store
            .set("categorias/c1", json!({"nombre_categoria": "Fondos"}))
            .unwrap();

        assert_eq!(
            store.get("categorias/c1/nombre_categoria").unwrap(),
            json!("Fondos")
        );
        assert_eq!(store.get("categorias/missing").unwrap(), Value::Null);
        assert_eq!(store.get("nothing/here/at/all").unwrap(), Value::Null);
    }

    #[test]
    fn test_set_null_deletes_and_prunes_parents() {
        let store = FeedStore::new();
        store.set("pedidos/1/a", json!({"timestamp": 1})).unwrap();
        store.set("pedidos/1/a", Value::Null).unwrap();

        assert_eq!(store.get("pedidos/1").unwrap(), Value::Null);
        assert_eq!(store.get("pedidos").unwrap(), Value::Null);
    }

    #[test]
    fn test_empty_containers_are_not_stored() {
        let store = FeedStore::new();
        store
            .set(
                "pedidos/1/a",
                json!({"personas": [{"id": "p1", "seleccionados": {}, "detalles": []}]}),
            )
            .unwrap();

        let person = store.get("pedidos/1/a/personas").unwrap();
        assert_eq!(person, json!([{"id": "p1"}]));
    }

    #[test]
    fn test_server_timestamp_is_resolved() {
        let store = FeedStore::new();
        let before = now_millis();
        store
            .set("pedidos/2/x", json!({"timestamp": server_timestamp()}))
            .unwrap();
        let after = now_millis();

        let ts = store.get("pedidos/2/x/timestamp").unwrap().as_i64().unwrap();
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn test_push_generates_ordered_keys() {
        let store = FeedStore::new();
        let first = store.push("pedidos/1", json!({"timestamp": 1})).unwrap();
        let second = store.push("pedidos/1", json!({"timestamp": 2})).unwrap();

        assert!(second > first);
        let table = store.get("pedidos/1").unwrap();
        assert_eq!(table.as_object().unwrap().len(), 2);
        assert_eq!(table[&first]["timestamp"], json!(1));
    }

    #[test]
    fn test_update_merges_children() {
        let store = FeedStore::new();
        store
            .set(
                "menu/d1",
                json!({"nombre_comida": "Pan", "precio_comida": "500"}),
            )
            .unwrap();

        let mut fields = Map::new();
        fields.insert("precio_comida".into(), json!("650"));
        fields.insert("seccion".into(), json!("Cafetería"));
        store.update("menu/d1", fields).unwrap();

        assert_eq!(
            store.get("menu/d1").unwrap(),
            json!({"nombre_comida": "Pan", "precio_comida": "650", "seccion": "Cafetería"})
        );
    }

    #[test]
    fn test_remove() {
        let store = FeedStore::new();
        store.set("secciones/s1", json!({"nombre_seccion": "Cocina"})).unwrap();
        store.remove("secciones/s1").unwrap();
        assert_eq!(store.get("secciones").unwrap(), Value::Null);
        // Removing something absent is fine
        store.remove("secciones/s1").unwrap();
    }

    #[test]
    fn test_invalid_writes_fail() {
        let store = FeedStore::new();
        let err = store.set("", json!(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::FeedWriteFailed);

        let err = store.set("menu/d$1", json!(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::FeedWriteFailed);

        let mut fields = Map::new();
        fields.insert("bad.key".into(), json!(1));
        assert!(store.update("menu/d1", fields).is_err());
    }

    #[test]
    fn test_values_with_bad_keys_or_depth_are_rejected() {
        let store = FeedStore::new();
        assert!(store.set("menu/d1", json!({"ok": 1})).is_ok());
        assert!(store.set("menu/d2", json!({"no#": 1})).is_err());
        assert!(store.push("pedidos/1", json!({"x": {"a.b": 1}})).is_err());
        assert!(store.set("pedidos/1/p", json!({"t": server_timestamp()})).is_ok());

        let mut deep = json!(1);
        for _ in 0..MAX_DEPTH {
            deep = json!({ "n": deep });
        }
        let err = store.set("menu/d3", deep).unwrap_err();
        assert_eq!(err.code, ErrorCode::FeedWriteFailed);
        assert_eq!(store.get("menu/d2").unwrap(), Value::Null);
    }

    #[test]
    fn test_versions_increment_per_resource() {
        let store = FeedStore::new();
        assert_eq!(store.version("menu"), 0);
        store.set("menu/d1", json!({"nombre_comida": "Pan"})).unwrap();
        store.set("menu/d2", json!({"nombre_comida": "Té"})).unwrap();
        store.set("categorias/c1", json!({"nombre_categoria": "X"})).unwrap();

        assert_eq!(store.version("menu"), 2);
        assert_eq!(store.version("categorias"), 1);
    }

    #[test]
    fn test_write_over_primitive_replaces_it() {
        let store = FeedStore::new();
        store.set("menu/d1", json!("legacy")).unwrap();
        store.set("menu/d1/nombre_comida", json!("Pan")).unwrap();
        assert_eq!(store.get("menu/d1").unwrap(), json!({"nombre_comida": "Pan"}));
    }

    #[tokio::test]
    async fn test_changes_are_broadcast() {
        let store = FeedStore::new();
        let mut rx = store.changes();
        store.push("pedidos/5", json!({"timestamp": 1})).unwrap();

        let change = rx.recv().await.unwrap();
        assert_eq!(change.resource, "pedidos");
        assert!(change.path.starts_with("pedidos/5/"));
        assert_eq!(change.version, 1);
        assert_eq!(change.action, ChangeAction::Push);
    }
}
