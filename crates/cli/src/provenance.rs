use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `doc` as pretty JSON to `out` plus a `<stem>.provenance.json` sidecar
/// recording the git revision, callsite, and `params`. Returns the sidecar path.
#[track_caller]
pub fn write_with_sidecar<T: Serialize>(out: &Path, doc: &T, params: Value) -> Result<PathBuf> {
    let callsite = Location::caller();
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = sidecar_path(out);
    let prov = json!({
        "code_rev": current_git_rev(),
        "version": shapebox::VERSION,
        "callsite": { "file": callsite.file(), "line": callsite.line() },
        "params": params,
        "outputs": [out.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote report");
    Ok(sidecar)
}

fn sidecar_path(out: &Path) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    out.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
