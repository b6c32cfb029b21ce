/// Filesystem adapters for file I/O operations
mod file_writer;
mod page_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use page_reader::FileSystemPageReader;
