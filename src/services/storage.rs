use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::rules;

/// Overwrite `path` with the bundled rules document, byte for byte.
/// The target directory must already exist.
pub fn write_rules(path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, rules::DEV_RULES)
        .map_err(|e| anyhow::anyhow!("write {}: {}", path.display(), e))
}

/// One successful emit, as recorded in the audit log.
#[derive(Debug, Serialize)]
pub struct EmitRecord {
    pub file: String,
    pub bytes: usize,
    pub rules_version: String,
}

/// Append an emit event to the audit log. Best effort: a missing HOME or an
/// unwritable log never fails the run.
pub fn audit_emit(record: &EmitRecord) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/firefix/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_timestamp(),
        "action": "emit",
        "data": record
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| f.write_all(line.as_bytes()));
}

fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
