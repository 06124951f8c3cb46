/// Filesystem adapters for presenting output
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
