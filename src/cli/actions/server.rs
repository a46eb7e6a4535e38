use crate::{
    api::{self, AuthState},
    auth::AuthConfig,
    store::{MemoryUserStore, PgUserStore, UserStore},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub dsn: Option<String>,
    pub jwt_secret: SecretString,
    pub jwt_expiration_seconds: u64,
    pub bcrypt_cost: u32,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable, the schema cannot be
/// applied, or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let config = AuthConfig::new(args.jwt_secret)
        .with_jwt_expiration_seconds(args.jwt_expiration_seconds)
        .with_bcrypt_cost(args.bcrypt_cost);

    let store: Arc<dyn UserStore> = if let Some(dsn) = &args.dsn {
        let store = PgUserStore::connect(dsn)
            .await
            .context("Failed to open the Postgres user store")?;
        store
            .migrate()
            .await
            .context("Failed to apply database schema")?;
        Arc::new(store)
    } else {
        warn!("No DSN configured, users are kept in memory and lost on restart");
        Arc::new(MemoryUserStore::new())
    };

    let state = Arc::new(AuthState::new(config, store));

    api::new(args.port, state).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        (
            "dsn",
            args.dsn
                .as_deref()
                .map_or_else(|| "none (in-memory store)".to_string(), redact_dsn),
        ),
        ("jwt_expiration", format!("{}s", args.jwt_expiration_seconds)),
        ("bcrypt_cost", args.bcrypt_cost.to_string()),
    ];

    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!(
        "{} {} - {}\n\nStartup configuration:",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH)
    );
    for (key, value) in &entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    info!("{message}");
}

fn redact_dsn(dsn: &str) -> String {
    match Url::parse(dsn) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("REDACTED"));
            }
            parsed.to_string()
        }
        Err(_) => "invalid-dsn".to_string(),
    }
}

fn short_commit(hash: &str) -> &str {
    let trimmed = hash.trim();
    trimmed.get(..7).unwrap_or(trimmed)
}
