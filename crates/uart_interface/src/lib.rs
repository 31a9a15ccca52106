/// Arguments for the various binaries.
/// This is compartmentalized to a module because the binaries have almost the exact same argument requirements.
pub mod args;

/// Simple helper functions for reading and writing files.
pub mod file_io;

/// Write/read port sessions exposing the transforms with device-like semantics.
pub mod port;
