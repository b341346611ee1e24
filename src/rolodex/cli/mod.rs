//! # CLI Layer
//!
//! One UI client for the rolodex library. This is the only code that:
//! - Knows about stdout/stderr and exit codes
//! - Parses shell arguments (clap) and reads the interactive prompt
//! - Sets up logging
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions
//! - [`commands`]: `run()`, context setup and one handler per subcommand
//! - [`repl`]: the interactive prompt, used when no subcommand is given
//! - [`print`]: colored output of `CmdMessage`s

mod commands;
mod print;
mod repl;
mod setup;

pub use commands::run;
