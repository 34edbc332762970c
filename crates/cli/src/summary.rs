//! Run-summary sidecar: provenance plus the shape of the final subdivision.

use anyhow::{Context, Result};
use polysplit::api::{Dcel, FaceTally};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Counts {
    pub vertices: usize,
    pub edges: usize,
    pub faces: usize,
    pub half_edges: usize,
}

impl Counts {
    pub fn of(dcel: &Dcel) -> Self {
        Self {
            vertices: dcel.num_vertices(),
            edges: dcel.num_edges(),
            faces: dcel.num_faces(),
            half_edges: dcel.num_half_edges(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct SplitStats {
    pub requested: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Everything the sidecar records besides provenance.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub params: serde_json::Value,
    pub counts: Counts,
    pub splits: SplitStats,
    pub towers: usize,
    pub face_totals: Vec<i64>,
    pub total: i64,
}

impl RunSummary {
    pub fn new(
        params: serde_json::Value,
        dcel: &Dcel,
        splits: SplitStats,
        towers: usize,
        tally: &FaceTally,
    ) -> Self {
        Self {
            params,
            counts: Counts::of(dcel),
            splits,
            towers,
            face_totals: tally.totals.clone(),
            total: tally.total(),
        }
    }
}

/// Write `summary` to `path` as pretty JSON, tagged with the git revision and callsite.
#[track_caller]
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }
    let callsite = Location::caller();
    let doc = serde_json::json!({
        "code_rev": code_revision(),
        "version": polysplit::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "summary": summary,
    });
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Revision baked in at build time, then `GIT_COMMIT` at run time, then `git rev-parse`.
fn code_revision() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}
