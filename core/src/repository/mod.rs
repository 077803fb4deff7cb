pub mod file;
pub mod traits;

// Re-export
pub use file::FileRegisterRepository;
pub use traits::{RegisterRepository, Stored};
