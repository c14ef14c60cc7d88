//! Domain entities

pub mod processed_error;

#[cfg(test)]
mod tests;

pub use processed_error::{ErrorKind, ProcessedError};
