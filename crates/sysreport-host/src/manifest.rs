use camino::Utf8PathBuf;
use std::collections::BTreeMap;
use sysreport_domain::ManifestLookup;
use sysreport_types::ids;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("container is not an exploded directory: {0}")]
    NotADirectory(Utf8PathBuf),
    #[error("read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

/// [`ManifestLookup`] over exploded containers on disk.
///
/// A container path resolves against `root`; the manifest is the
/// `META-INF/MANIFEST.MF` entry underneath it, parsed as `Key: Value`
/// lines with leading-space continuation lines appended to the previous
/// value.
#[derive(Clone, Debug)]
pub struct DirManifestLookup {
    root: Utf8PathBuf,
}

impl DirManifestLookup {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ManifestLookup for DirManifestLookup {
    fn open_manifest(&self, container: &str) -> anyhow::Result<BTreeMap<String, String>> {
        let dir = self.root.join(container);
        if !dir.is_dir() {
            return Err(ManifestError::NotADirectory(dir).into());
        }
        let path = dir.join(ids::MANIFEST_ENTRY);
        let text = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(parse_manifest(&text))
    }
}

fn parse_manifest(text: &str) -> BTreeMap<String, String> {
    let mut attributes: BTreeMap<String, String> = BTreeMap::new();
    let mut last_key: Option<String> = None;
    for line in text.lines() {
        if let Some(continuation) = line.strip_prefix(' ') {
            if let Some(key) = &last_key
                && let Some(value) = attributes.get_mut(key)
            {
                value.push_str(continuation);
            }
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_string();
        attributes.insert(key.clone(), value.trim_start().to_string());
        last_key = Some(key);
    }
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use tempfile::TempDir;

    fn write_manifest(root: &Utf8Path, container: &str, contents: &str) {
        let dir = root.join(container).join("META-INF");
        std::fs::create_dir_all(&dir).expect("create META-INF");
        std::fs::write(dir.join("MANIFEST.MF"), contents).expect("write manifest");
    }

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    #[test]
    fn reads_build_id_from_manifest() {
        let tmp = TempDir::new().expect("tempdir");
        let root = utf8_root(&tmp);
        write_manifest(
            &root,
            "lib/core",
            "Manifest-Version: 1.0\nImplementation-Build: abc1234\n",
        );

        let lookup = DirManifestLookup::new(root);
        let manifest = lookup.open_manifest("lib/core").expect("open manifest");
        assert_eq!(manifest[ids::BUILD_ID_KEY], "abc1234");
    }

    #[test]
    fn continuation_lines_extend_previous_value() {
        let parsed = parse_manifest("Long-Key: first\n part-two\nOther: x\n");
        assert_eq!(parsed["Long-Key"], "firstpart-two");
        assert_eq!(parsed["Other"], "x");
    }

    #[test]
    fn lines_without_colon_are_skipped() {
        let parsed = parse_manifest("garbage line\nKey: value\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["Key"], "value");
    }

    #[test]
    fn missing_container_is_an_error() {
        let tmp = TempDir::new().expect("tempdir");
        let lookup = DirManifestLookup::new(utf8_root(&tmp));
        let err = lookup.open_manifest("lib/absent").unwrap_err();
        assert!(err.to_string().contains("not an exploded directory"));
    }

    #[test]
    fn container_without_manifest_is_an_error() {
        let tmp = TempDir::new().expect("tempdir");
        let root = utf8_root(&tmp);
        std::fs::create_dir_all(root.join("lib/bare")).expect("create container");
        let lookup = DirManifestLookup::new(root);
        assert!(lookup.open_manifest("lib/bare").is_err());
    }
}
