//! Path utilities for the Zellij sandbox environment.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`,
//! pointing at the cwd of the last focused terminal (or where Zellij was
//! started). Trace output lives under the conventional data directory there.

use std::path::PathBuf;

/// Returns the data directory for Mortydex output.
///
/// Resolves to `/host/.local/share/zellij/mortydex`, which is typically
/// `~/.local/share/zellij/mortydex` when Zellij was started from a home
/// directory terminal.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("mortydex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_the_sandbox_mount() {
        assert_eq!(
            get_data_dir().to_str(),
            Some("/host/.local/share/zellij/mortydex")
        );
    }
}
