const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let host = dotenvy::var("REMINDERS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parse_port(dotenvy::var("REMINDERS_PORT").ok());
        Self::new_host_port(host, port)
    }

    pub fn new_host_port(host: String, port: u16) -> Self {
        Self { host, port }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid REMINDERS_PORT {raw:?}, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}
