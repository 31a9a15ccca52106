use anyhow::Context;
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

/// Read the whole file into memory.
///
/// A failed transfer surfaces as an error, never as an empty buffer.
pub fn read_file_bytes(file: &Path) -> anyhow::Result<Vec<u8>> {
    let file_handle =
        File::open(file).with_context(|| format!("opening \"{}\"", file.display()))?;
    let mut bytes = Vec::new();
    io::BufReader::new(file_handle)
        .read_to_end(&mut bytes)
        .with_context(|| format!("reading \"{}\"", file.display()))?;
    Ok(bytes)
}

/// Write byte slice to specified file.
pub fn write_file_bytes(file: &Path, data: &[u8]) -> anyhow::Result<()> {
    let file_handle =
        File::create(file).with_context(|| format!("creating \"{}\"", file.display()))?;
    let mut writer = io::BufWriter::new(file_handle);
    writer
        .write_all(data)
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing \"{}\"", file.display()))?;
    Ok(())
}
