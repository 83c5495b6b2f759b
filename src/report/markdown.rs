use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::StarredRepository;

const UNGROUPED: &str = "Ungrouped";

/// One `###` section per repository, in the given order.
pub fn render(repos: &[StarredRepository]) -> String {
    let mut output = String::new();
    for repo in repos {
        push_section(&mut output, repo);
    }
    output
}

/// Same sections, collected under `## {group}` headings in first-seen group
/// order. Repositories without a group come last.
pub fn render_grouped(repos: &[StarredRepository]) -> String {
    let mut groups: Vec<(&str, Vec<&StarredRepository>)> = Vec::new();
    let mut ungrouped = Vec::new();

    for repo in repos {
        let group = repo.classification.group.trim();
        if group.is_empty() {
            ungrouped.push(repo);
            continue;
        }
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, members)) => members.push(repo),
            None => groups.push((group, vec![repo])),
        }
    }
    if !ungrouped.is_empty() {
        groups.push((UNGROUPED, ungrouped));
    }

    let mut output = String::new();
    for (group, members) in groups {
        output.push_str(&format!("## {}\n\n", group));
        for repo in members {
            push_section(&mut output, repo);
        }
    }
    output
}

pub fn write_report<P: AsRef<Path>>(path: P, markdown: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, markdown)?;
    tracing::info!("Report written to: {}", path.display());
    Ok(())
}

fn push_section(output: &mut String, repo: &StarredRepository) {
    output.push_str(&format!("### [{}]({})\n", repo.full_name, repo.html_url));
    if let Some(ref description) = repo.description {
        output.push_str(&format!("- **Description:** {}\n", description));
    }
    if !repo.classification.tags.is_empty() {
        output.push_str(&format!(
            "- **Tags:** {}\n",
            repo.classification.tags.join(", ")
        ));
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;

    fn repo(full_name: &str, description: Option<&str>, group: &str, tags: &[&str]) -> StarredRepository {
        StarredRepository {
            name: full_name.rsplit('/').next().unwrap().to_string(),
            full_name: full_name.to_string(),
            url: format!("https://api.github.com/repos/{}", full_name),
            html_url: format!("https://github.com/{}", full_name),
            description: description.map(String::from),
            homepage: None,
            language: None,
            topics: Vec::new(),
            stargazers_count: 0,
            classification: Classification {
                group: group.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                desc: String::new(),
            },
        }
    }

    #[test]
    fn test_render_full_section() {
        let md = render(&[repo("foo/bar", Some("A CLI"), "", &["go", "cli"])]);
        assert_eq!(
            md,
            "### [foo/bar](https://github.com/foo/bar)\n\
             - **Description:** A CLI\n\
             - **Tags:** go, cli\n\n"
        );
    }

    #[test]
    fn test_render_omits_missing_lines() {
        let md = render(&[repo("a/b", None, "", &[])]);
        assert_eq!(md, "### [a/b](https://github.com/a/b)\n\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_grouped_orders_groups_and_ungrouped_last() {
        let repos = vec![
            repo("a/one", None, "", &["x"]),
            repo("b/two", None, "Tools", &[]),
            repo("c/three", None, "Databases", &[]),
            repo("d/four", None, "Tools", &[]),
        ];
        let md = render_grouped(&repos);

        let tools = md.find("## Tools").unwrap();
        let databases = md.find("## Databases").unwrap();
        let ungrouped = md.find("## Ungrouped").unwrap();
        assert!(tools < databases && databases < ungrouped);
        assert!(md.find("d/four").unwrap() < databases);
        assert!(md.find("a/one").unwrap() > ungrouped);
    }
}
