//! Marker Core
//!
//! Shared types for the marker compile pipeline: the block and inline
//! trees the parser produces and the compiler consumes, the parser's
//! per-line state, and the workspace error type.
//!
//! The compile pipeline itself never fails; [`MarkerError`] only
//! covers the edges around it (file I/O, configuration).

pub mod block;
pub mod error;
pub mod inline;
pub mod state;

pub use block::{Block, HeaderLevel};
pub use error::{MarkerError, Result};
pub use inline::{Inline, Line, LineElement};
pub use state::ParseState;
