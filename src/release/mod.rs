mod archive;
mod naming;
mod stage;
mod workdir;

pub use archive::{remove_stale, write_zip};
pub use naming::{ArchiveName, ArchiveNamer};
pub use stage::{check_release_dir, create_release_dir, stage};
pub use workdir::WorkingDir;
#[cfg(test)]
pub use workdir::CWD_LOCK;
