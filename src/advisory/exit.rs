//! Process exit statuses.
//!
//! The invoking package manager only launches the application on
//! [`SUCCESS`]. [`DECLINED`] covers both a refused advisory and a failed
//! processor baseline.

/// Launch may proceed (or there was nothing to check).
pub const SUCCESS: u8 = 0;

/// Missing or invalid arguments.
pub const USAGE: u8 = 1;

/// Do not launch: consent declined or processor feature missing.
pub const DECLINED: u8 = 10;

/// Standard output could not be opened (systemd `EXIT_STDOUT`).
pub const STDOUT_UNAVAILABLE: u8 = 209;

/// Standard input could not be opened (systemd `EXIT_STDIN`).
pub const STDIN_UNAVAILABLE: u8 = 210;
