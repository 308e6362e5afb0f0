//! Tracing setup for the vashc binary.
//!
//! Output format is chosen by `VASH_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented output via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! VASH_LOG=trace VASH_LOG_FORMAT=tree vashc page.json
//! VASH_LOG="vash_codegen=debug" vashc --outDir out a.json b.json
//! ```
//!
//! Nothing is installed unless `VASH_LOG` (or `RUST_LOG`) is set. A bare
//! `VASH_LOG` level only enables this workspace's crates.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("VASH_LOG_FORMAT").unwrap_or_default())
    }
}

/// Targets a bare `VASH_LOG` level applies to.
const VASH_TARGETS: [&str; 3] = ["vash_codegen", "vash_cli", "vashc"];

/// Expand a bare level such as `trace` into per-target directives so
/// dependencies stay quiet. Anything with a target or several directives is
/// passed through unchanged.
pub fn scope_directives(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.contains(['=', ',', '[']) {
        return value.to_string();
    }
    VASH_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, value))
        .collect::<Vec<_>>()
        .join(",")
}

/// `VASH_LOG` wins over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("VASH_LOG") {
        EnvFilter::builder().parse_lossy(scope_directives(&val))
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the global subscriber. Logs go to stderr so generated source on
/// stdout stays clean.
pub fn init_tracing() {
    let has_vash_log = std::env::var("VASH_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_vash_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
