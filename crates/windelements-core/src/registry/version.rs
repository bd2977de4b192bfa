//! Version comparison between the CLI and its bundled registry

use semver::Version;

/// Compare CLI version against the registry's declared version
/// Returns a warning message if the CLI is older than the registry expects
pub fn check_compatibility(
    cli_version: &str,
    registry_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    let registry_ver = parse_version(registry_version)?;

    if cli_ver < registry_ver {
        Some(format!(
            "These templates were built for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            registry_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

/// Parse a version string, tolerating a leading `v`
fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install windelements --force";

    #[test]
    fn test_cli_older_than_registry() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE);
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_or_newer() {
        assert!(check_compatibility("0.1.0", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.2.0", "v0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_invalid_versions_skip_warning() {
        assert!(check_compatibility("invalid", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", "next", UPGRADE).is_none());
    }
}
