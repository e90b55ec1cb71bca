/*
[INPUT]:  Parsed CLI actions, object type names and document files
[OUTPUT]: Controller objects rendered as JSON/YAML, or validation verdicts
[POS]:    Command layer - runs one CLI action against a resource type
[UPDATE]: When adding CLI actions or changing their output
*/

use std::path::Path;

use alb_sdk::{
    ApiOptions, AviClient, OBJECT_TYPES, PatchOp, Resource, ResourceVisitor, is_object_type,
    visit_resource,
};
use anyhow::{Context, Result, anyhow, bail};
use futures::future::LocalBoxFuture;
use serde_json::Value;
use tracing::{debug, info};

/// How objects are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render(self, value: &Value) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// One controller operation on a single object type.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    List { options: ApiOptions },
    Get { uuid: String, options: ApiOptions },
    GetByName { name: String, options: ApiOptions },
    Create { document: Value, options: ApiOptions },
    Update { document: Value, options: ApiOptions },
    Patch { uuid: String, op: PatchOp, document: Value, options: ApiOptions },
    Delete { uuid: String, options: ApiOptions },
    DeleteByName { name: String, options: ApiOptions },
}

/// Read a JSON or YAML document; the extension picks the parser.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let document = if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("parse YAML {}", path.display()))?
    } else {
        serde_json::from_str(&content).with_context(|| format!("parse JSON {}", path.display()))?
    };
    Ok(document)
}

fn ensure_known(object_type: &str) -> Result<()> {
    if is_object_type(object_type) {
        Ok(())
    } else {
        bail!("unknown object type '{object_type}'; run `albctl types` for the list")
    }
}

/// Every object type the CLI can address.
pub fn object_types() -> &'static [&'static str] {
    OBJECT_TYPES
}

struct Validate {
    document: Value,
}

impl ResourceVisitor for Validate {
    type Output = Result<Value>;

    fn visit<T: Resource>(self) -> Self::Output {
        let object: T = serde_json::from_value(self.document)
            .with_context(|| format!("document is not a valid {}", T::OBJECT_TYPE))?;
        Ok(serde_json::to_value(&object)?)
    }
}

/// Check a document against the model for `object_type`.
///
/// Returns the document as it would be sent: unknown keys dropped, unset
/// optional fields omitted.
pub fn validate(object_type: &str, document: Value) -> Result<Value> {
    ensure_known(object_type)?;
    visit_resource(object_type, Validate { document })
        .ok_or_else(|| anyhow!("unknown object type '{object_type}'"))?
}

struct Execute<'a> {
    client: &'a AviClient,
    action: Action,
}

impl<'a> ResourceVisitor for Execute<'a> {
    type Output = LocalBoxFuture<'a, Result<Value>>;

    fn visit<T: Resource>(self) -> Self::Output {
        let Execute { client, action } = self;
        Box::pin(async move {
            let resources = client.resource::<T>();
            debug!(object_type = T::OBJECT_TYPE, ?action, "running action");
            let value = match action {
                Action::List { options } => serde_json::to_value(resources.get_all(&options).await?)?,
                Action::Get { uuid, options } => {
                    serde_json::to_value(resources.get(&uuid, &options).await?)?
                }
                Action::GetByName { name, options } => {
                    serde_json::to_value(resources.get_by_name(&name, &options).await?)?
                }
                Action::Create { document, options } => {
                    let object: T = typed(document)?;
                    serde_json::to_value(resources.create(&object, &options).await?)?
                }
                Action::Update { document, options } => {
                    let object: T = typed(document)?;
                    serde_json::to_value(resources.update(&object, &options).await?)?
                }
                Action::Patch { uuid, op, document, options } => {
                    serde_json::to_value(resources.patch(&uuid, op, &document, &options).await?)?
                }
                Action::Delete { uuid, options } => {
                    resources.delete(&uuid, &options).await?;
                    info!(object_type = T::OBJECT_TYPE, %uuid, "deleted");
                    Value::Null
                }
                Action::DeleteByName { name, options } => {
                    resources.delete_by_name(&name, &options).await?;
                    info!(object_type = T::OBJECT_TYPE, %name, "deleted");
                    Value::Null
                }
            };
            Ok(value)
        })
    }
}

fn typed<T: Resource>(document: Value) -> Result<T> {
    serde_json::from_value(document)
        .with_context(|| format!("document is not a valid {}", T::OBJECT_TYPE))
}

/// Run `action` against the controller for `object_type`.
pub async fn execute(client: &AviClient, object_type: &str, action: Action) -> Result<Value> {
    ensure_known(object_type)?;
    let future = visit_resource(object_type, Execute { client, action })
        .ok_or_else(|| anyhow!("unknown object type '{object_type}'"))?;
    future.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_normalizes_document() {
        let normalized = validate(
            "pool",
            json!({"name": "web-pool", "not_a_field": 1, "servers": []}),
        )
        .unwrap();
        assert_eq!(normalized, json!({"name": "web-pool"}));
    }

    #[test]
    fn test_validate_reports_missing_required() {
        let err = validate("pool", json!({"lb_algorithm": "LB_ALGORITHM_ROUND_ROBIN"}))
            .unwrap_err();
        assert!(format!("{err:#}").contains("name"));
    }

    #[test]
    fn test_unknown_object_type() {
        assert!(validate("virtualservice-x", json!({})).is_err());
    }

    #[test]
    fn test_render_yaml() {
        let rendered = OutputFormat::Yaml.render(&json!({"name": "web-pool"})).unwrap();
        assert_eq!(rendered.trim(), "name: web-pool");
    }
}
