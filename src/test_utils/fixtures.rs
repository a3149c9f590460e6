use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::catalog::{CatalogDocument, CatalogStore};

/// Isolated directory holding a catalog document and, optionally, a config file.
pub struct CatalogFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl CatalogFixture {
    /// Write `document` to `skills.json` inside a fresh temp directory.
    #[must_use]
    pub fn new(document: &Value) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().join("skills.json");
        std::fs::write(&data_path, document.to_string()).expect("Failed to write catalog");
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Small catalog: two categories, three skills, built and evaluated mixed.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(&sample_document())
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file next to the catalog.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Config that pins the data file and silences the animation delays.
    #[must_use]
    pub fn write_config(&self) -> PathBuf {
        let config = format!(
            r#"[source]
data_file = "{}"
use_embedded = false

[showcase]
spinner_interval_ms = 1
type_delay_min_ms = 0
type_delay_max_ms = 0
hold_ms = 0
erase_delay_ms = 0
gap_ms = 0
start_delay_ms = 0

[output]
color = false
"#,
            self.data_path.display().to_string().replace('\\', "/")
        );
        self.create_file("config.toml", &config)
    }

    #[must_use]
    pub fn store(&self) -> CatalogStore {
        let raw = std::fs::read_to_string(&self.data_path).expect("Failed to read catalog");
        CatalogStore::from_document(CatalogDocument::from_json(&raw).expect("Invalid catalog"))
    }
}

/// The document written by [`CatalogFixture::sample`].
#[must_use]
pub fn sample_document() -> Value {
    json!({
        "meta": {
            "title": "Test Catalog",
            "description": "Fixture catalog",
            "repoUrl": "https://example.com/repo",
            "surveyUrl": "[待添加 - 问卷链接]"
        },
        "categories": ["Writing", "Research"],
        "skills": [
            {
                "id": "draft-helper",
                "name": "Draft Helper",
                "description": "Turns notes into a first draft.",
                "type": "evaluated",
                "rating": 3.5,
                "category": "Writing",
                "githubUrl": "https://example.com/draft",
                "docUrl": "",
                "requirements": ["Claude Pro"]
            },
            {
                "id": "paper-reader",
                "name": "Paper Reader",
                "description": "Summarises papers.",
                "type": "built",
                "rating": 4,
                "category": "Research",
                "githubUrl": "https://example.com/paper",
                "docUrl": "[待添加 - 飞书文档]",
                "requirements": []
            },
            {
                "id": "style-check",
                "name": "Style Check",
                "description": "Checks tone and style.",
                "type": "built",
                "rating": 5,
                "category": "Writing",
                "githubUrl": "",
                "docUrl": "https://example.com/style",
                "requirements": []
            }
        ]
    })
}
