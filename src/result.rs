//! Error handling and result types for relkit.
//!
//! relkit reports failures through the `color-eyre` crate, which layers
//! context, suggestions, and colored terminal output on top of plain errors.
//! Every fallible function in the crate returns the [`Result`] alias defined
//! here so that reporting stays consistent from the innermost helper all the
//! way up to `main`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::result::Result;
//!
//! fn load_notes() -> Result<String> {
//!     let content = std::fs::read_to_string("notes.html")?;
//!     Ok(content)
//! }
//! ```
//!
//! Use `.wrap_err()` to add context as errors propagate:
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//!
//! fn refresh_bundle() -> Result<()> {
//!     copy_upstream_tree()
//!         .wrap_err("failed to copy upstream working tree")?;
//!     rewrite_imports()
//!         .wrap_err("failed to rewrite bundled imports")?;
//!     Ok(())
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout relkit.
///
/// A type alias for `color_eyre::eyre::Result<T>`: colorized error output,
/// chain-able contexts via `.wrap_err()`, and optional stack traces when
/// `RUST_BACKTRACE` is set.
pub type Result<T> = EyreResult<T>;
