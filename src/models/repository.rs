use serde::{Deserialize, Deserializer, Serialize};

/// A repository from the user's starred list, as returned by the GitHub API
/// and persisted in the checkpoint files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarredRepository {
    pub name: String,
    pub full_name: String,
    /// API URL (`https://api.github.com/repos/{owner}/{repo}`).
    pub url: String,
    pub html_url: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(rename = "ai_tag", default, deserialize_with = "null_as_default")]
    pub classification: Classification,
}

/// LLM-derived labels for one repository. The default value means
/// "not classified".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    #[serde(default, deserialize_with = "null_as_default")]
    pub group: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.tags.is_empty() && self.desc.is_empty()
    }
}

/// Treats an explicit `null` like a missing key. Older checkpoints write
/// `"tags": null` for untagged records, and models sometimes answer
/// `"group": null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
