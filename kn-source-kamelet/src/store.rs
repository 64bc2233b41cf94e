//! Access to the Kamelet and Pipe resources of a cluster.
use async_trait::async_trait;
use camel_k::{Kamelet, Pipe};
use kube::{
    api::{Api, PostParams},
    Client, ResourceExt,
};

/// Namespaced get/create/replace for the resources a binding touches.
#[async_trait]
pub trait BindingStore: Send + Sync {
    async fn get_kamelet(&self, namespace: &str, name: &str) -> Result<Kamelet, kube::Error>;

    async fn get_pipe(&self, namespace: &str, name: &str) -> Result<Pipe, kube::Error>;

    async fn create_pipe(&self, namespace: &str, pipe: &Pipe) -> Result<Pipe, kube::Error>;

    /// Replace the pipe of the same name. The pipe must carry the resource
    /// version of the object it replaces.
    async fn replace_pipe(&self, namespace: &str, pipe: &Pipe) -> Result<Pipe, kube::Error>;
}

/// Whether the API server rejected a create because the name is taken.
pub fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(response) if response.reason == "AlreadyExists")
}

pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(response) if response.reason == "NotFound" || response.code == 404)
}

/// [`BindingStore`] backed by the Kubernetes API server.
#[derive(Clone)]
pub struct KubeStore {
    client: Client,
}

impl KubeStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn kamelets(&self, namespace: &str) -> Api<Kamelet> {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn pipes(&self, namespace: &str) -> Api<Pipe> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl BindingStore for KubeStore {
    async fn get_kamelet(&self, namespace: &str, name: &str) -> Result<Kamelet, kube::Error> {
        self.kamelets(namespace).get(name).await
    }

    async fn get_pipe(&self, namespace: &str, name: &str) -> Result<Pipe, kube::Error> {
        self.pipes(namespace).get(name).await
    }

    async fn create_pipe(&self, namespace: &str, pipe: &Pipe) -> Result<Pipe, kube::Error> {
        self.pipes(namespace).create(&PostParams::default(), pipe).await
    }

    async fn replace_pipe(&self, namespace: &str, pipe: &Pipe) -> Result<Pipe, kube::Error> {
        self.pipes(namespace)
            .replace(&pipe.name_any(), &PostParams::default(), pipe)
            .await
    }
}
