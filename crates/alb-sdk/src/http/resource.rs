/*
[INPUT]:  A Resource model type and the shared controller client
[OUTPUT]: Typed CRUD operations for that object type
[POS]:    HTTP layer - per-type convenience API over the REST verbs
[UPDATE]: When adding operations common to every top-level object
*/

use std::marker::PhantomData;

use tracing::info;

use crate::http::{ApiOptions, AviClient, AviError, Result};
use crate::types::{PatchOp, Resource};

/// Typed operations for one object type.
///
/// ```no_run
/// # async fn run(client: alb_sdk::AviClient) -> alb_sdk::Result<()> {
/// use alb_sdk::types::Pool;
///
/// let pools = client.resource::<Pool>().get_all(&Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResourceClient<'a, T> {
    client: &'a AviClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceClient<'_, T> {}

impl AviClient {
    pub fn resource<T: Resource>(&self) -> ResourceClient<'_, T> {
        ResourceClient {
            client: self,
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> ResourceClient<'_, T> {
    pub async fn get_all(&self, options: &ApiOptions) -> Result<Vec<T>> {
        self.client
            .get_collection(&T::api_path(None), options)
            .await
    }

    pub async fn get(&self, uuid: &str, options: &ApiOptions) -> Result<T> {
        self.client.get(&T::api_path(Some(uuid)), options).await
    }

    pub async fn get_by_name(&self, name: &str, options: &ApiOptions) -> Result<T> {
        self.client
            .get_object_by_name(T::OBJECT_TYPE, name, options)
            .await
    }

    pub async fn get_object(&self, options: &ApiOptions) -> Result<T> {
        self.client.get_object(T::OBJECT_TYPE, options).await
    }

    pub async fn create(&self, object: &T, options: &ApiOptions) -> Result<T> {
        let created: T = self
            .client
            .post(&T::api_path(None), object, options)
            .await?;
        info!(
            object_type = T::OBJECT_TYPE,
            uuid = created.uuid().unwrap_or_default(),
            name = created.name().unwrap_or_default(),
            "object created"
        );
        Ok(created)
    }

    /// Replace the object; it must carry its uuid.
    pub async fn update(&self, object: &T, options: &ApiOptions) -> Result<T> {
        let uuid = object
            .uuid()
            .filter(|uuid| !uuid.is_empty())
            .ok_or_else(|| AviError::MissingUuid {
                object_type: T::OBJECT_TYPE.to_string(),
            })?;
        self.client
            .put(&T::api_path(Some(uuid)), object, options)
            .await
    }

    pub async fn patch<B>(
        &self,
        uuid: &str,
        op: PatchOp,
        body: &B,
        options: &ApiOptions,
    ) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
    {
        self.client
            .patch(&T::api_path(Some(uuid)), op, body, options)
            .await
    }

    pub async fn delete(&self, uuid: &str, options: &ApiOptions) -> Result<()> {
        self.client.delete(&T::api_path(Some(uuid)), options).await?;
        info!(object_type = T::OBJECT_TYPE, uuid, "object deleted");
        Ok(())
    }

    /// Look the object up by name, then delete it by uuid.
    pub async fn delete_by_name(&self, name: &str, options: &ApiOptions) -> Result<()> {
        let object = self.get_by_name(name, options).await?;
        let uuid = object.uuid().ok_or_else(|| AviError::MissingUuid {
            object_type: T::OBJECT_TYPE.to_string(),
        })?;
        self.delete(uuid, options).await
    }
}
