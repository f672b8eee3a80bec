//! Standard exit codes (BSD sysexits.h compatible)

/// At least one checked answer did not match the rule
pub const WRONG: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
