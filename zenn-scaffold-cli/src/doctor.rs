//! Doctor - diagnostic checks for scaffold setup.
//!
//! Checks:
//! - Configuration file presence and validity
//! - Schema self-check for both rigors
//! - Articles directory
//! - Publication slug configured

use std::path::Path;

use zenn_scaffold::{Rigor, Schema};

use crate::config::{ScaffoldConfig, CONFIG_FILE};

/// Severity of one diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// One diagnostic result.
#[derive(Debug)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub fix: Option<String>,
}

/// Run all diagnostic checks and print a report. Returns the exit code:
/// 0 when nothing is broken, 1 when any check errored.
pub fn run_doctor(verbose: bool) -> i32 {
    let checks = run_checks();

    for check in &checks {
        let marker = match check.status {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Error => "✗",
        };
        println!("{} {}: {}", marker, check.name, check.message);
        if verbose {
            if let Some(fix) = &check.fix {
                println!("  fix: {fix}");
            }
        }
    }

    let errors = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();
    let warnings = checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();
    println!();
    println!(
        "{} checks, {} warnings, {} errors",
        checks.len(),
        warnings,
        errors
    );

    if errors > 0 {
        1
    } else {
        0
    }
}

fn run_checks() -> Vec<Check> {
    let mut checks = Vec::new();

    // Configuration file
    let config = match ScaffoldConfig::load() {
        Ok(config) => {
            if Path::new(CONFIG_FILE).exists() {
                checks.push(Check {
                    name: "Configuration".into(),
                    status: CheckStatus::Ok,
                    message: format!("{CONFIG_FILE} loaded"),
                    fix: None,
                });
            } else {
                checks.push(Check {
                    name: "Configuration".into(),
                    status: CheckStatus::Warning,
                    message: format!("{CONFIG_FILE} not found, using defaults"),
                    fix: Some(format!("Create {CONFIG_FILE} to set articles_dir and publication")),
                });
            }
            Some(config)
        }
        Err(e) => {
            checks.push(Check {
                name: "Configuration".into(),
                status: CheckStatus::Error,
                message: e.to_string(),
                fix: Some(format!("Fix the syntax in {CONFIG_FILE}")),
            });
            None
        }
    };

    // Schema self-check, both rigors
    for rigor in [Rigor::Permissive, Rigor::Strict] {
        let schema = Schema::article(rigor);
        match schema.verify() {
            Ok(()) => checks.push(Check {
                name: format!("Schema ({rigor})"),
                status: CheckStatus::Ok,
                message: format!("{} fields verified", schema.fields().len()),
                fix: None,
            }),
            Err(e) => checks.push(Check {
                name: format!("Schema ({rigor})"),
                status: CheckStatus::Error,
                message: e.to_string(),
                fix: None,
            }),
        }
    }

    if let Some(config) = config {
        // Articles directory
        if config.articles_dir.is_dir() {
            checks.push(Check {
                name: "Articles directory".into(),
                status: CheckStatus::Ok,
                message: format!("{}", config.articles_dir.display()),
                fix: None,
            });
        } else {
            checks.push(Check {
                name: "Articles directory".into(),
                status: CheckStatus::Warning,
                message: format!(
                    "{} does not exist yet",
                    config.articles_dir.display()
                ),
                fix: Some("It will be created on the first `new` run".into()),
            });
        }

        // Publication slug
        match &config.publication {
            Some(publication) => checks.push(Check {
                name: "Publication".into(),
                status: CheckStatus::Ok,
                message: publication.clone(),
                fix: None,
            }),
            None => checks.push(Check {
                name: "Publication".into(),
                status: CheckStatus::Warning,
                message: "no publication configured; the attach toggle has no effect".into(),
                fix: Some(format!("Set `publication = \"...\"` in {CONFIG_FILE}")),
            }),
        }
    }

    checks
}
