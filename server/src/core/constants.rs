// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "TagVault";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "tagvault";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".tagvault";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "TAGVAULT_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "TAGVAULT_PORT";

/// Environment variable for the data directory override
pub const ENV_DATA_DIR: &str = "TAGVAULT_DATA_DIR";

/// Environment variable for the log filter (falls back to RUST_LOG)
pub const ENV_LOG: &str = "TAGVAULT_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Maximum accepted upload body size in bytes (multipart framing included)
pub const UPLOAD_BODY_LIMIT: usize = 128 * 1024 * 1024;

// =============================================================================
// SQLite
// =============================================================================

/// Database filename inside the sqlite data subdirectory
pub const SQLITE_DB_FILENAME: &str = "tagvault.db";

/// Connection pool size
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// Seconds a connection waits on a locked database before failing
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

/// Page cache size pragma (negative = KiB)
pub const SQLITE_CACHE_SIZE: &str = "-20000";

/// WAL autocheckpoint pragma (pages)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";
