//! Bookshelf application library
//!
//! Book records kept in memory and served over HTTP through the bookshelf kernel.
#![recursion_limit = "256"]

pub mod modules;
pub mod utils;

use anyhow::Context;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

/// Build a registry with every application module registered
pub fn build_registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Run module lifecycle around the HTTP server until shutdown
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = build_registry();
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!(modules = registry.len(), "bookshelf bootstrap complete");

    let served = bookshelf_http::start_server(&registry, &settings)
        .await
        .context("HTTP server terminated with an error");

    registry.stop_all().await?;
    served
}
