//! Command implementations for OxiEntropy CLI.

pub mod compress;
pub mod decompress;
pub mod detect;
pub mod info;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use detect::cmd_detect;
pub use info::cmd_info;
