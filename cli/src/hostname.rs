//! Local host name lookup.

/// Reported when the host name cannot be determined.
const UNKNOWN_HOST: &str = "unknown";

/// Name of the machine the monitor runs on.
pub fn get() -> String {
    resolve(system_hostname(), |var| std::env::var(var).ok())
}

fn system_hostname() -> Option<String> {
    gethostname::gethostname()
        .into_string()
        .ok()
        .filter(|name| !name.is_empty())
}

/// Prefer the system name, then `HOSTNAME`/`COMPUTERNAME`, then a placeholder.
fn resolve(system: Option<String>, env: impl Fn(&str) -> Option<String>) -> String {
    system
        .or_else(|| {
            ["HOSTNAME", "COMPUTERNAME"]
                .iter()
                .find_map(|var| env(var).filter(|v| !v.is_empty()))
        })
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}
