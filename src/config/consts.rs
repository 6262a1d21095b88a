// src/config/consts.rs

// Ledger
pub const DEFAULT_LEDGER_FILE: &str = "registros.xlsx";
pub const LEDGER_HEADERS: [&str; 5] = ["nombre", "identificacion", "correo", "rol", "fecha_registro"];
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// History export
pub const DEFAULT_EXPORT_FILE: &str = "registros.csv";

// Net
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("qr_kiosk/", env!("CARGO_PKG_VERSION"));

// Payload rewrite (profile link → query link)
pub const PROFILE_PARAM: &str = "idperfil=";
pub const QUERY_PARAM: &str = "action=consulta&id=";

// Access
pub const DEFAULT_CREDENTIALS_FILE: &str = "credenciales.csv";

// Diagnostics
pub const DEFAULT_LOG_FILE: &str = ".kiosk/kiosk.log";

// Environment overrides
pub const ENV_LEDGER: &str = "KIOSK_LEDGER";
pub const ENV_CREDENTIALS: &str = "KIOSK_CREDENTIALS";
pub const ENV_TIMEZONE: &str = "KIOSK_TZ";
pub const ENV_TIMEOUT: &str = "KIOSK_TIMEOUT_SECS";
