use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

/// Body of `GET /repos/{owner}/{repo}/readme`. Only the fields we use.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub encoding: String,
    #[serde(default)]
    pub content: String,
}

/// Decoded README text for one repository. Lives only as long as the
/// enrichment task that fetched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeContent {
    pub text: String,
}

impl ReadmeData {
    /// Decode the base64 payload. GitHub wraps it at 60 columns, so line
    /// breaks are stripped first. Returns `None` for empty or undecodable
    /// content.
    pub fn decode(&self) -> Option<ReadmeContent> {
        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if compact.is_empty() {
            return None;
        }

        let bytes = STANDARD.decode(compact.as_bytes()).ok()?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        if text.trim().is_empty() {
            return None;
        }
        Some(ReadmeContent { text })
    }
}
