/*
[INPUT]:  API paths, request bodies and lookup options
[OUTPUT]: Decoded controller objects and collections
[POS]:    HTTP layer - generic REST verbs over the controller session
[UPDATE]: When adding verbs or changing pagination handling
*/

use std::collections::HashSet;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::options::DEFAULT_PAGE_SIZE;
use crate::http::{ApiOptions, AviClient, AviError, Result};
use crate::types::{ApiResponse, ObjectRef, PatchOp, RefParseError, Resource};

impl AviClient {
    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: &ApiOptions) -> Result<T> {
        self.send_json(Method::GET, path, None, options).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, options: &ApiOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::POST, path, Some(&body), options)
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, options: &ApiOptions) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send_json(Method::PUT, path, Some(&body), options)
            .await
    }

    /// Patch with `{"<op>": body}`.
    pub async fn patch<B, T>(
        &self,
        path: &str,
        op: PatchOp,
        body: &B,
        options: &ApiOptions,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut payload = serde_json::Map::new();
        payload.insert(op.as_str().to_string(), serde_json::to_value(body)?);
        let payload = serde_json::Value::Object(payload);
        self.send_json(Method::PATCH, path, Some(&payload), options)
            .await
    }

    pub async fn delete(&self, path: &str, options: &ApiOptions) -> Result<()> {
        self.execute(Method::DELETE, path, None, options).await?;
        Ok(())
    }

    /// Fetch every page of a collection.
    ///
    /// Follows `next` links until the last page. A link that was already
    /// visited ends the walk.
    pub async fn get_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &ApiOptions,
    ) -> Result<Vec<T>> {
        let first_options = if options
            .query_pairs()
            .iter()
            .any(|(key, _)| key == "page_size")
        {
            options.clone()
        } else {
            options
                .clone()
                .param("page_size", DEFAULT_PAGE_SIZE.to_string())
        };

        let page: ApiResponse<T> = self.get(path, &first_options).await?;
        let total = page.count;
        let mut next = page.next.clone().filter(|next| !next.is_empty());
        let mut results = page.into_results();

        let follow_options = options.headers_only();
        let mut visited = HashSet::new();
        while let Some(link) = next.take() {
            if !visited.insert(link.clone()) {
                warn!(path, next = %link, "collection repeated a next link, stopping");
                break;
            }
            let page: ApiResponse<T> = self.get(&link, &follow_options).await?;
            next = page.next.clone().filter(|next| !next.is_empty());
            results.extend(page.into_results());
        }

        debug!(path, total, fetched = results.len(), "collection fetched");
        Ok(results)
    }

    /// Fetch the single object of `object_type` matching `options`.
    pub async fn get_object<T: DeserializeOwned>(
        &self,
        object_type: &str,
        options: &ApiOptions,
    ) -> Result<T> {
        let path = format!("api/{object_type}");
        let page: ApiResponse<T> = self.get(&path, options).await?;
        let name = options.name_filter().unwrap_or_default().to_string();
        let mut results = page.into_results();
        match results.len() {
            0 => Err(AviError::NotFound {
                object_type: object_type.to_string(),
                name,
            }),
            1 => Ok(results.remove(0)),
            count => Err(AviError::MultipleFound {
                object_type: object_type.to_string(),
                name,
                count,
            }),
        }
    }

    pub async fn get_object_by_name<T: DeserializeOwned>(
        &self,
        object_type: &str,
        name: &str,
        options: &ApiOptions,
    ) -> Result<T> {
        let options = options.clone().name(name);
        self.get_object(object_type, &options).await
    }

    /// Fetch the object a `*_ref` field points at.
    pub async fn resolve_ref<T: Resource>(&self, reference: &str) -> Result<T> {
        let parsed = ObjectRef::parse(reference)?;
        if parsed.object_type() != T::OBJECT_TYPE {
            return Err(RefParseError::TypeMismatch {
                expected: T::OBJECT_TYPE.to_string(),
                found: parsed.object_type().to_string(),
            }
            .into());
        }
        match (parsed.uuid(), parsed.name()) {
            (Some(_), _) => self.get(&parsed.api_path(), &ApiOptions::new()).await,
            (None, Some(name)) => {
                self.get_object_by_name(T::OBJECT_TYPE, name, &ApiOptions::new())
                    .await
            }
            (None, None) => Err(RefParseError::Unresolvable(reference.to_string()).into()),
        }
    }
}
