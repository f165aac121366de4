use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

fn io_err<P: AsRef<Path>>(op: &'static str, path: P) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.as_ref().to_path_buf();
    move |source| Error::Io { op, path, source }
}

/// Reads the whole source file into memory.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(io_err("open source file", path))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .map_err(io_err("read source file", path))?;
    Ok(buf)
}

/// Creates or truncates `path` and writes `bytes` as its entire content.
pub fn write_target<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err("open target file", path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(io_err("write to target file", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mkenv_envfile_{}_{}", std::process::id(), name))
    }

    #[test]
    fn write_then_read() -> Result<()> {
        let path = tmp("roundtrip");
        write_target(&path, b"some longer content to be truncated")?;
        write_target(&path, b"short")?;
        assert_eq!(read_source(&path)?, b"short");
        std::fs::remove_file(&path).ok();
        Ok(())
    }

    #[test]
    fn missing_source_reports_path() {
        let path = tmp("does_not_exist");
        match read_source(&path) {
            Err(Error::Io { op, path: p, source }) => {
                assert_eq!(op, "open source file");
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn unwritable_target_fails() {
        let path = tmp("no_such_dir").join("env.bin");
        assert!(matches!(
            write_target(&path, b"x"),
            Err(Error::Io { op: "open target file", .. })
        ));
    }
}
