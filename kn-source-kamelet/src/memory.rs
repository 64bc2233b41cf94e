//! An in-process [`BindingStore`], for tests and dry runs.
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use camel_k::{Kamelet, Pipe};
use kube::{error::ErrorResponse, ResourceExt};

use crate::store::BindingStore;

type ItemKey = (String, String);

#[derive(Debug, Default)]
struct Items {
    kamelets: BTreeMap<ItemKey, Kamelet>,
    pipes: BTreeMap<ItemKey, Pipe>,
    replaced: Vec<Pipe>,
    version: u64,
}

impl Items {
    fn next_version(&mut self) -> String {
        self.version += 1;
        self.version.to_string()
    }
}

/// Keeps Kamelets and Pipes in memory and answers with the same status errors
/// the API server would: `NotFound`, `AlreadyExists` and `Conflict` on a stale
/// resource version.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Mutex<Items>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kamelet(self, kamelet: Kamelet) -> Self {
        self.insert_kamelet(kamelet);
        self
    }

    pub fn with_pipe(self, pipe: Pipe) -> Self {
        self.insert_pipe(pipe);
        self
    }

    pub fn insert_kamelet(&self, kamelet: Kamelet) {
        let key = item_key(kamelet.namespace(), kamelet.name_any());
        self.lock().kamelets.insert(key, kamelet);
    }

    /// Store `pipe` as is, assigning a resource version if it has none.
    pub fn insert_pipe(&self, mut pipe: Pipe) {
        let mut items = self.lock();
        if pipe.metadata.resource_version.is_none() {
            pipe.metadata.resource_version = Some(items.next_version());
        }
        let key = item_key(pipe.namespace(), pipe.name_any());
        items.pipes.insert(key, pipe);
    }

    pub fn pipe(&self, namespace: &str, name: &str) -> Option<Pipe> {
        self.lock()
            .pipes
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
    }

    /// Every pipe passed to a successful [`BindingStore::replace_pipe`], in call order.
    pub fn replaced(&self) -> Vec<Pipe> {
        self.lock().replaced.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Items> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn item_key(namespace: Option<String>, name: String) -> ItemKey {
    (namespace.unwrap_or_default(), name)
}

fn status_error(code: u16, reason: &str, message: String) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message,
        reason: reason.to_string(),
        code,
    })
}

fn not_found(resource: &str, name: &str) -> kube::Error {
    status_error(404, "NotFound", format!("{resource} \"{name}\" not found"))
}

#[async_trait]
impl BindingStore for InMemoryStore {
    async fn get_kamelet(&self, namespace: &str, name: &str) -> Result<Kamelet, kube::Error> {
        self.lock()
            .kamelets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| not_found("kamelets.camel.apache.org", name))
    }

    async fn get_pipe(&self, namespace: &str, name: &str) -> Result<Pipe, kube::Error> {
        self.pipe(namespace, name)
            .ok_or_else(|| not_found("pipes.camel.apache.org", name))
    }

    async fn create_pipe(&self, namespace: &str, pipe: &Pipe) -> Result<Pipe, kube::Error> {
        let mut items = self.lock();
        let key = (namespace.to_string(), pipe.name_any());
        if items.pipes.contains_key(&key) {
            return Err(status_error(
                409,
                "AlreadyExists",
                format!("pipes.camel.apache.org \"{}\" already exists", key.1),
            ));
        }
        let mut created = pipe.clone();
        created.metadata.namespace = Some(key.0.clone());
        created.metadata.resource_version = Some(items.next_version());
        items.pipes.insert(key, created.clone());
        Ok(created)
    }

    async fn replace_pipe(&self, namespace: &str, pipe: &Pipe) -> Result<Pipe, kube::Error> {
        let mut items = self.lock();
        let key = (namespace.to_string(), pipe.name_any());
        let current = items
            .pipes
            .get(&key)
            .ok_or_else(|| not_found("pipes.camel.apache.org", &key.1))?;
        if current.metadata.resource_version != pipe.metadata.resource_version {
            return Err(status_error(
                409,
                "Conflict",
                format!(
                    "Operation cannot be fulfilled on pipes.camel.apache.org \"{}\": the object has been modified",
                    key.1
                ),
            ));
        }
        items.replaced.push(pipe.clone());
        let mut updated = pipe.clone();
        updated.metadata.namespace = Some(key.0.clone());
        updated.metadata.resource_version = Some(items.next_version());
        items.pipes.insert(key, updated.clone());
        Ok(updated)
    }
}
