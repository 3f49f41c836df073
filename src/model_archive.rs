use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("model path has no file name: {0}")]
    InvalidModelPath(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

/// Deflate `model` into a fresh zip at `archive`, stored under the model's own
/// file name. Returns the number of model bytes written.
pub fn zip_model(model: &Path, archive: &Path) -> Result<u64, ArchiveError> {
    let entry_name = model
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ArchiveError::InvalidModelPath(model.to_path_buf()))?;

    let mut source = File::open(model)?;
    let mut writer = ZipWriter::new(File::create(archive)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(entry_name, options)?;
    let written = io::copy(&mut source, &mut writer)?;
    writer.finish()?;

    Ok(written)
}
