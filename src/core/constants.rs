/// Minimum roster size before roles can be dealt
pub const MIN_PLAYERS: usize = 8;

/// Maximum roster size
pub const MAX_PLAYERS: usize = 20;

/// Sessions idle longer than this are dropped by the cleanup task (1 hour)
pub const SESSION_TTL_SECONDS: u64 = 3600;

/// How often the cleanup task sweeps idle sessions
pub const CLEANUP_INTERVAL_SECONDS: u64 = 60;
