//! PPA console
//!
//! Line-oriented front end for a Personal Projects Analysis session.
//! Each line is one command; after it runs the active phase is rendered
//! again. The same loop drives interactive use and scripts.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod command;
pub mod config;
pub mod console;
pub mod render;

pub use command::{parse_line, ConsoleCommand};
pub use config::AppConfig;
pub use console::{Console, Flow};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
