pub mod console;
pub mod language;
pub mod memory;
pub mod photo;

pub use language::FileLanguageStore;
pub use memory::{MemoryLanguageStore, MemoryPhotoStore};
pub use photo::FilePhotoStore;
