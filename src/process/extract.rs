// src/process/extract.rs
use anyhow::{Context, Result};
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

/// Pull one member out of an in-memory ZIP by exact name.
///
/// A missing member surfaces as `ZipError::FileNotFound` under the context
/// chain; callers can downcast to tell it apart from a corrupt archive.
pub fn read_member(archive: &[u8], member_name: &str) -> Result<Vec<u8>> {
    let mut archive =
        ZipArchive::new(Cursor::new(archive)).context("Failed to read ZIP archive")?;

    let mut entry = archive
        .by_name(member_name)
        .with_context(|| format!("Failed to locate {} in archive", member_name))?;

    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {} into memory", member_name))?;

    debug!(member = member_name, bytes = buf.len(), "extracted member");
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::location_zip;
    use zip::result::ZipError;

    #[test]
    fn reads_named_member() -> Result<()> {
        let archive = location_zip("US.txt", "US\t10001\n")?;
        assert_eq!(read_member(&archive, "US.txt")?, b"US\t10001\n");
        Ok(())
    }

    #[test]
    fn lookup_is_exact() -> Result<()> {
        let archive = location_zip("US.txt", "US\t10001\n")?;
        let err = read_member(&archive, "us.txt").expect_err("names are case sensitive");
        assert!(matches!(
            err.downcast_ref::<ZipError>(),
            Some(ZipError::FileNotFound)
        ));
        Ok(())
    }

    #[test]
    fn garbage_is_not_an_archive() {
        let err = read_member(b"definitely not a zip", "US.txt").expect_err("not a zip");
        assert!(err.downcast_ref::<ZipError>().is_some());
    }
}
