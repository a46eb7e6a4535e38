//! Map parsed CLI arguments to the action the binary runs.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{jwt, ARG_DSN, ARG_PORT};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let dsn = matches
        .get_one::<String>(ARG_DSN)
        .map(|dsn| dsn.trim().to_string())
        .filter(|dsn| !dsn.is_empty());

    let jwt_opts = jwt::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        dsn,
        jwt_secret: jwt_opts.jwt_secret,
        jwt_expiration_seconds: jwt_opts.jwt_expiration_seconds,
        bcrypt_cost: jwt_opts.bcrypt_cost,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn server_action_from_env() -> Result<()> {
        temp_env::with_vars(
            [
                ("AUTHGATE_PORT", Some("9090")),
                ("AUTHGATE_DSN", None::<&str>),
                ("AUTHGATE_JWT_SECRET", Some("s3cret")),
                ("AUTHGATE_JWT_EXPIRATION", Some("120")),
                ("AUTHGATE_BCRYPT_COST", None::<&str>),
            ],
            || {
                let matches = commands::new().get_matches_from(vec!["authgate"]);
                let Action::Server(args) = handler(&matches)?;
                assert_eq!(args.port, 9090);
                assert_eq!(args.dsn, None);
                assert_eq!(args.jwt_secret.expose_secret(), "s3cret");
                assert_eq!(args.jwt_expiration_seconds, 120);
                assert_eq!(args.bcrypt_cost, crate::auth::DEFAULT_BCRYPT_COST);
                Ok(())
            },
        )
    }

    #[test]
    fn blank_dsn_falls_back_to_memory() -> Result<()> {
        temp_env::with_vars(
            [
                ("AUTHGATE_DSN", Some("  ")),
                ("AUTHGATE_JWT_SECRET", Some("s3cret")),
            ],
            || {
                let matches = commands::new().get_matches_from(vec!["authgate"]);
                let Action::Server(args) = handler(&matches)?;
                assert_eq!(args.dsn, None);
                Ok(())
            },
        )
    }
}
