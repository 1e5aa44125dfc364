use std::{collections::BTreeMap, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::StoreError;

/// Generic JSON file-backed ordered map store.
///
/// Keeps a `BTreeMap<K, V>` in memory and rewrites the whole file after each
/// mutation. Iteration follows key order. Writes hold the lock until the file
/// is written, so the file never lags behind a later write.
pub struct JsonMapStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Ord + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Load the store from `path`, creating the file (and parent dirs) with an
    /// empty map if missing. A file that exists but does not parse is an error.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(StoreError::unavailable)?;
        }

        let map: BTreeMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Unavailable(format!("{}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: BTreeMap<K, V> = BTreeMap::new();
                write_json(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(StoreError::unavailable(e)),
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }

    /// All values in key order.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Values matching `pred`, in key order.
    pub async fn filter_values<F>(&self, pred: F) -> Vec<V>
    where
        F: Fn(&V) -> bool,
    {
        let map = self.inner.read().await;
        map.values().filter(|v| pred(v)).cloned().collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert a value under a key that must not exist yet, then persist.
    /// Returns `false` (and writes nothing) if the key is taken.
    pub async fn insert_new(&self, key: K, value: V) -> Result<bool, StoreError> {
        let mut map = self.inner.write().await;
        if map.contains_key(&key) {
            return Ok(false);
        }
        map.insert(key.clone(), value);
        if let Err(e) = write_json(&self.file_path, &*map).await {
            map.remove(&key);
            return Err(e);
        }
        Ok(true)
    }

    /// Remove a key and persist; returns whether it existed.
    pub async fn remove(&self, key: &K) -> Result<bool, StoreError> {
        let mut map = self.inner.write().await;
        let Some(old) = map.remove(key) else { return Ok(false) };
        if let Err(e) = write_json(&self.file_path, &*map).await {
            map.insert(key.clone(), old);
            return Err(e);
        }
        Ok(true)
    }
}

async fn write_json<T: serde::Serialize>(path: &std::path::Path, value: &T) -> Result<(), StoreError> {
    let data = serde_json::to_vec_pretty(value).map_err(StoreError::unavailable)?;
    fs::write(path, data).await.map_err(StoreError::unavailable)
}
