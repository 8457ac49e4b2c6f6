use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language;

/// A stored snippet file. Serializes to the camelCase wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub content: String,
    pub language: String,
    pub extension: String,
    pub created_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn new(name: String, content: String) -> Self {
        let detected = language::detect(&name);
        Self {
            id: new_id(),
            name,
            content,
            language: detected.language,
            extension: detected.extension,
            created_at: Utc::now(),
        }
    }

    /// Rename the file, recomputing the derived language and extension
    /// together so they never go stale.
    pub fn rename(&mut self, name: String) {
        let detected = language::detect(&name);
        self.name = name;
        self.language = detected.language;
        self.extension = detected.extension;
    }
}

// Ids follow the `file-{millis}-{suffix}` shape clients already expect.
fn new_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("file-{}-{}", Utc::now().timestamp_millis(), &hex[..9])
}

/// The only fields a client may change on an existing file.
///
/// `id` and `created_at` are deliberately not representable here, so an
/// update payload cannot overwrite them no matter what JSON it carries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileUpdate {
    pub name: Option<String>,
    pub content: Option<String>,
}
