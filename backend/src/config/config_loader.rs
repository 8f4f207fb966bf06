use crate::config::{
    config_model::{
        AdminBootstrap, BackendServer, Database, DotEnvyConfig, Razorpay, Sanity, Session, Upi,
    },
    stage::Stage,
};
use anyhow::{Context, Result};

const DEFAULT_SANITY_API_VERSION: &str = "2024-01-01";
const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: required("SERVER_PORT")?
            .parse()
            .context("SERVER_PORT is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
        frontend_origin: std::env::var("FRONTEND_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string()),
    };

    let database = Database {
        url: required("DATABASE_URL")?,
    };

    let sanity = Sanity {
        project_id: required("SANITY_PROJECT_ID")?,
        dataset: std::env::var("SANITY_DATASET").unwrap_or_else(|_| "production".to_string()),
        api_version: std::env::var("SANITY_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_SANITY_API_VERSION.to_string()),
        token: optional("SANITY_TOKEN"),
        use_cdn: optional("SANITY_USE_CDN")
            .map(|raw| parse_bool(&raw))
            .transpose()
            .context("SANITY_USE_CDN is invalid")?
            .unwrap_or(true),
    };

    let razorpay = Razorpay {
        key_id: required("RAZORPAY_KEY_ID")?,
        key_secret: required("RAZORPAY_KEY_SECRET")?,
    };

    let upi = Upi {
        vpa: required("UPI_VPA")?,
        payee_name: required("UPI_PAYEE_NAME")?,
    };

    let session = Session {
        ttl_hours: optional("SESSION_TTL_HOURS")
            .map(|raw| raw.parse::<i64>())
            .transpose()
            .context("SESSION_TTL_HOURS is invalid")?
            .unwrap_or(DEFAULT_SESSION_TTL_HOURS),
    };

    let admin_bootstrap = match (optional("ADMIN_USERNAME"), optional("ADMIN_PASSWORD")) {
        (Some(username), Some(password)) => Some(AdminBootstrap { username, password }),
        _ => None,
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        stage: get_stage(),
        sanity,
        razorpay,
        upi,
        session,
        admin_bootstrap,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{} is invalid", key))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("not a boolean: {}", other)),
    }
}
