use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::store::FileStore;

/// Diagnostic aggregate over the whole collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_files: usize,
    pub total_characters: usize,
    /// Distinct language labels, in first-seen order.
    pub languages: Vec<String>,
    /// Seconds since the server state was created.
    pub server_uptime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<MemoryUsage>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub rss_bytes: u64,
}

pub fn run<S: FileStore>(store: &S, uptime: Duration) -> Result<StatsReport> {
    let files = store.list_files()?;

    let mut languages: Vec<String> = Vec::new();
    for file in &files {
        if !languages.contains(&file.language) {
            languages.push(file.language.clone());
        }
    }

    Ok(StatsReport {
        total_files: files.len(),
        total_characters: files.iter().map(|f| f.content.len()).sum(),
        languages,
        server_uptime: uptime.as_secs_f64(),
        memory_usage: resident_memory(),
        timestamp: Utc::now(),
    })
}

#[cfg(target_os = "linux")]
fn resident_memory() -> Option<MemoryUsage> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(MemoryUsage {
        rss_bytes: kb * 1024,
    })
}

#[cfg(not(target_os = "linux"))]
fn resident_memory() -> Option<MemoryUsage> {
    None
}
