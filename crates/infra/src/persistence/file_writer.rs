// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use metastat_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing report files.
pub struct FileWriter;

impl FileWriter {
    /// Creates `dir` and any missing parents.
    pub fn ensure_dir(dir: &Path) -> InfraResult<()> {
        fs::create_dir_all(dir)
            .map_err(|source| InfrastructureError::DirectoryCreate { path: dir.to_path_buf(), source })
    }

    /// Replaces the contents of `path` with `data`, creating the parent directory if needed.
    ///
    /// The data goes to a temp file in the same directory which is then renamed
    /// over the target, so readers never observe a half-written report.
    pub fn overwrite(path: &Path, data: &[u8]) -> InfraResult<()> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        Self::ensure_dir(parent)?;

        let file_write = |source: std::io::Error| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        // PID + nanos keeps concurrent writers in the same directory apart.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let result = File::create(&tmp).and_then(|file| {
            let mut w = BufWriter::new(file);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            Ok(())
        });
        if let Err(err) = result.and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(file_write(err));
        }
        Ok(())
    }
}
