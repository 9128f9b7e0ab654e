//! Process exit codes, numbered after BSD sysexits.h
//!
//! Breaches alone never change the exit code; see `Settings::fail_on_breach`.

pub const OK: i32 = 0;

/// Bad arguments or no subcommand
pub const USAGE: i32 = 64;

/// Malformed batch, amount overflow, or a breach / unresolved path when the
/// settings make those fatal
pub const DATAERR: i32 = 65;

/// Transaction batch or working directory unavailable
pub const NOINPUT: i32 = 66;

/// Batch file exists but could not be read
pub const IOERR: i32 = 74;

/// Config file that does not parse, or bad `RSLIMIT_*` values
pub const CONFIG: i32 = 78;
