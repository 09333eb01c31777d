//! Action handlers. Each one receives already-parsed arguments and loaded
//! configuration; argument definitions live in [`crate::cli`].

pub mod completions;
pub mod compose;
pub mod init;
