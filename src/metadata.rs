//! The package descriptor compiled into the crate.
//!
//! Every field comes from `Cargo.toml` through the `CARGO_PKG_*` variables
//! Cargo sets at build time, so the binary always reports what it was
//! packaged as.

use std::fmt;

use anyhow::{Context, Result};
use semver::Version;
use serde::Serialize;

/// Name shown to people; the package and command use the lowercase form.
pub const DISPLAY_NAME: &str = "Rulid";

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const LICENSE: &str = env!("CARGO_PKG_LICENSE");

// Cargo does not export keywords to the compiler.
const KEYWORDS: &[&str] = &["rust", "build", "package"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    pub name: &'static str,
    pub version: Version,
    pub description: &'static str,
    pub authors: Vec<&'static str>,
    pub url: &'static str,
    pub keywords: Vec<&'static str>,
    pub license: &'static str,
}

impl PackageMetadata {
    pub fn summary(&self) -> String {
        format!("{DISPLAY_NAME} {} - {}", self.version, self.description)
    }
}

/// Mapping from an installed command to the callable it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    pub command: &'static str,
    pub module: &'static str,
    pub callable: &'static str,
}

impl EntryPoint {
    /// Path of the callable, e.g. `rulid::main`.
    pub fn target(&self) -> String {
        format!("{}::{}", self.module, self.callable)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.command, self.target())
    }
}

pub fn package() -> Result<PackageMetadata> {
    let version = Version::parse(VERSION)
        .with_context(|| format!("package version `{VERSION}` is not valid semver"))?;
    Ok(PackageMetadata {
        name: NAME,
        version,
        description: DESCRIPTION,
        authors: split_authors(AUTHORS),
        url: REPOSITORY,
        keywords: KEYWORDS.to_vec(),
        license: LICENSE,
    })
}

/// The package declares exactly one console entry point.
pub fn entry_point() -> EntryPoint {
    EntryPoint {
        command: "rulid",
        module: NAME,
        callable: "main",
    }
}

// CARGO_PKG_AUTHORS joins entries with ':'.
fn split_authors(raw: &str) -> Vec<&str> {
    raw.split(':')
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .collect()
}
