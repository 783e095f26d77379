//! Console input handling.
//!
//! - `TokenReader` - whitespace-delimited tokens across lines
//! - `Prompter` - prompt/answer seam used by the session
//! - `ConsolePrompter` - `Prompter` over any reader/writer pair

mod prompter;
mod tokens;

pub use prompter::*;
pub use tokens::*;
