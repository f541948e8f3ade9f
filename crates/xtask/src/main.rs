use std::collections::BTreeSet;

use anyhow::Context;
use serde::Deserialize;

/// Runtime and I/O crates the pure game rules must never depend on.
const DOMAIN_FORBIDDEN: &[&str] = &[
    "tokio",
    "axum",
    "tower",
    "tower-http",
    "rand",
    "tracing",
    "uuid",
    "reqwest",
    "dotenvy",
    "futures-util",
];

/// Crates each workspace member may depend on from inside the workspace.
const INTERNAL_ALLOWED: &[(&str, &[&str])] = &[
    ("snakeladder-domain", &[]),
    ("snakeladder-shared", &["snakeladder-domain"]),
    (
        "snakeladder-engine",
        &["snakeladder-domain", "snakeladder-shared"],
    ),
    ("xtask", &[]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = check(&metadata);
    if violations.is_empty() {
        println!("arch-check: ok ({} packages)", metadata.packages.len());
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} dependency rule(s) violated", violations.len())
}

fn check(metadata: &Metadata) -> Vec<String> {
    let workspace: BTreeSet<&str> = metadata.packages.iter().map(|p| p.name.as_str()).collect();
    let mut violations = Vec::new();

    for package in &metadata.packages {
        // Dev-dependencies only affect tests.
        let normal = package
            .dependencies
            .iter()
            .filter(|d| d.kind.as_deref() != Some("dev"));

        for dep in normal {
            if package.name == "snakeladder-domain" && DOMAIN_FORBIDDEN.contains(&dep.name.as_str())
            {
                violations.push(format!(
                    "snakeladder-domain must stay pure but depends on {}",
                    dep.name
                ));
            }

            if workspace.contains(dep.name.as_str()) {
                let allowed = INTERNAL_ALLOWED
                    .iter()
                    .find(|(name, _)| *name == package.name)
                    .map(|(_, allowed)| *allowed)
                    .unwrap_or(&[]);
                if !allowed.contains(&dep.name.as_str()) {
                    violations.push(format!(
                        "{} may not depend on workspace crate {}",
                        package.name, dep.name
                    ));
                }
            }
        }
    }

    violations
}
