use std::collections::BTreeMap;
use std::ffi::OsStr;

/// Presence/absence of optional toolchain components, for the report's
/// miscellany section. Absent components keep their key with no value.
pub fn toolchain_miscellany() -> BTreeMap<String, Option<String>> {
    let path = std::env::var_os("PATH");
    let mut miscellany = BTreeMap::new();
    miscellany.insert(
        "Rust compiler".to_string(),
        path.as_deref().and_then(|p| find_in_path("rustc", p)),
    );
    miscellany.insert(
        "Cargo".to_string(),
        path.as_deref().and_then(|p| find_in_path("cargo", p)),
    );
    miscellany
}

fn find_in_path(name: &str, path: &OsStr) -> Option<String> {
    let file = if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    };
    std::env::split_paths(path)
        .map(|dir| dir.join(&file))
        .find(|candidate| candidate.is_file())
        .map(|p| p.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miscellany_always_lists_both_components() {
        let miscellany = toolchain_miscellany();
        assert!(miscellany.contains_key("Rust compiler"));
        assert!(miscellany.contains_key("Cargo"));
    }

    #[test]
    fn unknown_component_is_not_found() {
        let path = std::env::var_os("PATH").unwrap_or_default();
        assert_eq!(find_in_path("sysreport-no-such-tool", &path), None);
    }
}
