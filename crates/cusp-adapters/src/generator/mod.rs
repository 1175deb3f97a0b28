//! Build file generator adapters.

mod premake;

pub use premake::{PREMAKE_FILE_NAME, PremakeGenerator};
