use std::env;

#[derive(Debug, Clone)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
    /// Filter directives used when `RUST_LOG` is unset.
    pub(crate) default_directives: String,
    /// Warnings captured during config parsing so they can be logged after tracing is initialized.
    pub(crate) warnings: Vec<String>,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        let component = component.trim().to_string();

        let service_name = env_string("SERVICE_NAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| component.clone());

        let environment = env_string("STAGE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        let (default_directives, warnings) = default_directives_from_env();

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
            default_directives,
            warnings,
        }
    }
}

fn default_directives_from_env() -> (String, Vec<String>) {
    let mut warnings = Vec::new();

    let level = match env_string("LOG_LEVEL") {
        Some(raw) if !raw.trim().is_empty() => match parse_level(&raw) {
            Some(level) => level,
            None => {
                warnings.push(format!("LOG_LEVEL is invalid (value: {raw}); defaulting to info"));
                "info"
            }
        },
        _ => "info",
    };

    // Diesel's r2d2 pool and hyper are noisy below warn.
    (format!("{level},hyper=warn,r2d2=warn"), warnings)
}

fn parse_level(input: &str) -> Option<&'static str> {
    match input.trim().to_ascii_lowercase().as_str() {
        "error" => Some("error"),
        "warn" | "warning" => Some("warn"),
        "info" => Some("info"),
        "debug" => Some("debug"),
        "trace" => Some("trace"),
        _ => None,
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("WARNING"), Some("warn"));
        assert_eq!(parse_level(" debug "), Some("debug"));
        assert_eq!(parse_level("loud"), None);
    }
}
