//! Merges per-module OpenAPI fragments into a single document.

use serde_json::{json, Value};

use bookshelf_kernel::{settings::ServerSettings, ModuleRegistry};

pub const TITLE: &str = "Bookshelf API";
pub const VERSION: &str = "1.0.0";

/// Build the full OpenAPI document for every registered module.
///
/// Module paths are prefixed with the module mount path; a module path of `/`
/// maps onto the mount path itself.
pub fn collect(registry: &ModuleRegistry, server: &ServerSettings) -> Value {
    let mut openapi_spec = json!({
        "openapi": "3.1.0",
        "info": {
            "title": TITLE,
            "version": VERSION,
            "description": "In-memory bookshelf record keeping"
        },
        "paths": {},
        "components": {
            "schemas": {}
        }
    });

    openapi_spec["components"]["schemas"]["FailResponse"] = json!({
        "type": "object",
        "properties": {
            "status": {
                "type": "string",
                "enum": ["fail"]
            },
            "message": {
                "type": "string"
            }
        },
        "required": ["status", "message"]
    });

    openapi_spec["paths"]["/healthz"] = json!({
        "get": {
            "summary": "Health check",
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "text/plain": {
                            "schema": {
                                "type": "string"
                            }
                        }
                    }
                }
            }
        }
    });

    for module in registry.modules() {
        let Some(module_spec) = module.openapi() else {
            continue;
        };
        let mount = server.module_path(module.name());

        if let Some(paths) = module_spec.get("paths").and_then(Value::as_object) {
            for (path, path_item) in paths {
                let prefixed_path = if path == "/" {
                    mount.clone()
                } else {
                    format!("{}{}", mount, path)
                };
                openapi_spec["paths"][prefixed_path] = path_item.clone();
            }
        }

        if let Some(schemas) = module_spec
            .get("components")
            .and_then(|components| components.get("schemas"))
            .and_then(Value::as_object)
        {
            for (schema_name, schema_def) in schemas {
                openapi_spec["components"]["schemas"][schema_name] = schema_def.clone();
            }
        }
    }

    openapi_spec
}

/// Convert the merged JSON into a typed document for Swagger UI.
pub fn to_typed(spec: &Value) -> utoipa::openapi::OpenApi {
    serde_json::from_value(spec.clone()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "merged OpenAPI document is not valid, serving a stub");
        utoipa::openapi::OpenApiBuilder::new()
            .info(
                utoipa::openapi::InfoBuilder::new()
                    .title(TITLE)
                    .version(VERSION)
                    .build(),
            )
            .build()
    })
}
