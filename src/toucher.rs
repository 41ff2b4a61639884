use std::fs::File;
use std::io;
use std::os::fd::IntoRawFd as _;
use std::os::unix::fs::OpenOptionsExt as _;
use std::path::Path;

use anyhow::anyhow;
use anyhow::Context as _;

/// Permission bits for newly created files, before the umask is applied.
const CREATE_MODE: u32 = 0o644;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was opened (and created if needed) and closed again.
    Touched,
    /// The file does not exist and creation was suppressed.
    Skipped,
}

/// Open `path` for appending and close it again, creating it unless
/// `no_create` is set. Existing contents are never truncated.
pub fn touch(path: &Path, no_create: bool) -> anyhow::Result<Outcome> {
    if no_create && !path.exists() {
        log::info!("{} does not exist, not creating", path.display());
        return Ok(Outcome::Skipped);
    }

    let file = open(path, !no_create)
        .with_context(|| anyhow!("Error opening file '{}'", path.display()))?;

    close(file).with_context(|| anyhow!("Error closing file '{}'", path.display()))?;

    log::info!("touched {}", path.display());
    Ok(Outcome::Touched)
}

fn open(path: &Path, create: bool) -> io::Result<File> {
    log::debug!("opening {} (append, create={})", path.display(), create);

    File::options()
        .append(true)
        .create(create)
        .mode(CREATE_MODE)
        .open(path)
}

// File's Drop ignores close errors, so close the descriptor by hand.
fn close(file: File) -> io::Result<()> {
    let fd = file.into_raw_fd();
    log::debug!("closing fd={}", fd);

    match unsafe { libc::close(fd) } {
        0 => Ok(()),
        _ => Err(io::Error::last_os_error()),
    }
}
