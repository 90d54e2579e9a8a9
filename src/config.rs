use crate::utils::net;

/// Bind address for the launcher's own UI server. All interfaces, so other
/// machines on the LAN can reach the login page.
pub const APP_HOST: [u8; 4] = [0, 0, 0, 0];

/// Port for this login application
pub const APP_PORT: u16 = 8550;

/// Port of the main chat server
pub const CHAT_SERVER_PORT: u16 = 5000;

/// Used when automatic discovery fails, or when the chat server runs on a
/// different machine than this launcher.
pub const CHAT_SERVER_IP_FALLBACK: &str = "10.14.222.137";

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub chat_server_host: String,
    pub chat_server_port: u16,
}

impl Config {
    /// Resolve the chat server address once at startup. The launcher assumes
    /// the chat server runs on this machine; if discovery fails, the fallback
    /// constant is used instead.
    pub fn resolve() -> Self {
        Self {
            port: APP_PORT,
            chat_server_host: net::local_ip_or(CHAT_SERVER_IP_FALLBACK),
            chat_server_port: CHAT_SERVER_PORT,
        }
    }
}
