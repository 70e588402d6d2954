use git_version::git_version;

use crate::catalog::{CATEGORIES, MOODS, STYLES};

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

fn version_line() -> String {
    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {tag}"),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("development branch {ahead} commits ahead of {latest}")
        }
        _ if !latest.is_empty() => format!("development branch ahead of {latest}"),
        _ => format!("development {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Build and catalog summary shown by `/info`.
pub fn get_system_info() -> String {
    let profile = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };

    format!(
        "{} - {}\nCommit: {}\n{} build\nCatalog: {} categories, {} styles, {} moods",
        env!("CARGO_PKG_NAME"),
        version_line(),
        COMMIT,
        profile,
        CATEGORIES.len(),
        STYLES.len(),
        MOODS.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_mentions_commit_and_catalog() {
        let info = get_system_info();
        assert!(info.starts_with("stockprompt - "));
        assert!(info.contains(COMMIT));
        assert!(info.contains("Dev build") || info.contains("Release build"));
        assert!(info.contains("7 categories"));
    }
}
