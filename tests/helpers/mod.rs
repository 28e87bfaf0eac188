use anyhow::{Context, Result};
use readeck_highlights::infrastructure::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";
#[allow(dead_code)]
pub const ANNOTATIONS_PATH: &str = "/api/bookmarks/annotations";

/// Temporary directory holding the CSV output of one test
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub output_path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let output_path = temp_dir.path().join("highlights.csv");
        Ok(Self {
            _temp_dir: temp_dir,
            output_path,
        })
    }

    /// Config pointing at `server` under `/api`, writing into this workspace
    pub fn config_for(&self, server: &MockServer) -> Config {
        Config {
            base_url: format!("{}/api", server.uri()),
            api_key: TEST_TOKEN.to_string(),
            output_path: self.output_path.clone(),
        }
    }
}

/// Payload with three highlights, including CSV special characters and non-ASCII text
#[allow(dead_code)]
pub fn fixture_body() -> Result<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/annotations.json");
    std::fs::read_to_string(&path).context("Failed to read annotations fixture")
}

/// Answer authenticated GETs on the annotations endpoint with `response`
#[allow(dead_code)]
pub async fn mount_annotations(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(ANNOTATIONS_PATH))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Parse a CSV file into records, header included
#[allow(dead_code)]
pub fn read_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .context("Failed to open CSV file")?;

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .context("Failed to parse CSV record")
        })
        .collect()
}
