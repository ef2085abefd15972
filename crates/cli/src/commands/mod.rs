pub mod format;
pub mod lint;
pub mod serve;
pub mod status;
pub mod toolchain;
