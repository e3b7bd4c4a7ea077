//! Vendored-library refresh: upstream checkout, bundle replacement, and
//! import rewriting.
//!
//! The project bundles a copy of an upstream Python library under its own
//! package so end users never need the library installed separately. The
//! `vendor` task checks out the wanted upstream rev, copies the library's
//! source tree into the bundle directory, rewrites its imports to the bundled
//! namespace, and records the upstream commit it came from.

/// Copying the upstream tree into the bundle directory.
pub mod bundle;

/// In-place import rewriting over the bundled tree.
pub mod rewrite;

/// Git operations on the upstream working copy.
pub mod upstream;
