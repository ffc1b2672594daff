//! Test helpers for staging city files and capturing command output.

use super::*;
use std::fs;
use tempfile::TempDir;

pub(super) const TROY_ONLY: &str = r#"{
  "city": "Troy",
  "landmarks": [
    {"id": 2, "name": "Prospect Park", "latitude": 42.728, "longitude": -73.6869, "type": "Park"}
  ]
}"#;

/// Temporary directory exposed through UTF-8 paths.
pub(super) struct DataDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &camino::Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write city file");
        path
    }
}

/// Parse `argv` and run the command, capturing stdout as a string.
pub(super) fn run_captured<I, S>(argv: I) -> Result<String, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv).map_err(CliError::ArgumentParsing)?;
    let mut buffer = Vec::new();
    run_command(cli.command, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("utf-8 output"))
}
