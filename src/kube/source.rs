//! Live cluster resource source
//!
//! Uses `Api::all` when every namespace is selected and `Api::namespaced`
//! otherwise, so a namespaced run never lists the whole cluster.

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::core::v1::{
    Namespace, PersistentVolume, PersistentVolumeClaim, Pod, Service,
};
use kube::api::ListParams;
use kube::core::NamespaceResourceScope;
use kube::{Api, Client};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::error::SourceError;
use crate::models::{ResourceKind, ResourceRecord, Scope};
use crate::source::ResourceSource;

/// Lists resources through a kube client
#[derive(Clone)]
pub struct KubeResourceSource {
    client: Client,
}

impl KubeResourceSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn list_namespaced<K>(&self, scope: &Scope) -> Result<Vec<ResourceRecord>, SourceError>
    where
        K: kube::Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
        for<'a> ResourceRecord: From<&'a K>,
    {
        let api: Api<K> = match scope {
            Scope::All => Api::all(self.client.clone()),
            Scope::Namespace(ns) => Api::namespaced(self.client.clone(), ns),
        };
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(ResourceRecord::from).collect())
    }

    async fn list_volumes(&self) -> Result<Vec<ResourceRecord>, SourceError> {
        let api: Api<PersistentVolume> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(ResourceRecord::from).collect())
    }

    async fn list_namespaces(&self, scope: &Scope) -> Result<Vec<ResourceRecord>, SourceError> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        match scope {
            Scope::All => {
                let list = api.list(&ListParams::default()).await?;
                Ok(list.items.iter().map(ResourceRecord::from).collect())
            }
            Scope::Namespace(ns) => match api.get_opt(ns).await? {
                Some(namespace) => Ok(vec![ResourceRecord::from(&namespace)]),
                None => Err(SourceError::NamespaceNotFound(ns.clone())),
            },
        }
    }
}

#[async_trait]
impl ResourceSource for KubeResourceSource {
    async fn list(
        &self,
        kind: ResourceKind,
        scope: &Scope,
    ) -> Result<Vec<ResourceRecord>, SourceError> {
        tracing::debug!("Listing {} in {}", kind, scope);
        match kind {
            ResourceKind::Namespace => self.list_namespaces(scope).await,
            ResourceKind::Deployment => self.list_namespaced::<Deployment>(scope).await,
            ResourceKind::ReplicaSet => self.list_namespaced::<ReplicaSet>(scope).await,
            ResourceKind::StatefulSet => self.list_namespaced::<StatefulSet>(scope).await,
            ResourceKind::DaemonSet => self.list_namespaced::<DaemonSet>(scope).await,
            ResourceKind::PersistentVolumeClaim => {
                self.list_namespaced::<PersistentVolumeClaim>(scope).await
            }
            ResourceKind::PersistentVolume => self.list_volumes().await,
            ResourceKind::Service => self.list_namespaced::<Service>(scope).await,
            ResourceKind::Pod => self.list_namespaced::<Pod>(scope).await,
        }
    }
}
