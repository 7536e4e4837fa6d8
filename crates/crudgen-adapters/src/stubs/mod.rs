//! Stub repository adapters.

mod builtin;
mod directory;

pub use builtin::BuiltinStubs;
pub use directory::DirectoryStubs;
