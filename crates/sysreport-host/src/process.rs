use std::collections::BTreeMap;

/// Live process key/value map for the report's properties section.
///
/// Values that cannot be determined stay present with an absent value, so
/// the formatter renders them as `(null)` instead of dropping the key.
pub fn properties() -> BTreeMap<String, Option<String>> {
    let mut props = BTreeMap::new();
    props.insert(
        "os.name".to_string(),
        Some(std::env::consts::OS.to_string()),
    );
    props.insert(
        "os.arch".to_string(),
        Some(std::env::consts::ARCH.to_string()),
    );
    props.insert(
        "os.family".to_string(),
        Some(std::env::consts::FAMILY.to_string()),
    );
    props.insert(
        "process.id".to_string(),
        Some(std::process::id().to_string()),
    );
    props.insert(
        "process.exe".to_string(),
        std::env::current_exe()
            .ok()
            .map(|p| p.display().to_string()),
    );
    props.insert(
        "user.dir".to_string(),
        std::env::current_dir()
            .ok()
            .map(|p| p.display().to_string()),
    );
    props
}

/// All environment variables, lossily decoded.
pub fn environment() -> BTreeMap<String, Option<String>> {
    std::env::vars_os()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                Some(value.to_string_lossy().into_owned()),
            )
        })
        .collect()
}
