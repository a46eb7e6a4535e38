use crate::auth::{DEFAULT_BCRYPT_COST, DEFAULT_JWT_EXPIRATION_SECONDS};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_JWT_SECRET: &str = "jwt-secret";
pub const ARG_JWT_EXPIRATION: &str = "jwt-expiration";
pub const ARG_BCRYPT_COST: &str = "bcrypt-cost";

/// Token and password-hashing settings.
#[derive(Debug)]
pub struct Options {
    pub jwt_secret: SecretString,
    pub jwt_expiration_seconds: u64,
    pub bcrypt_cost: u32,
}

impl Options {
    /// Read the signing secret, token lifetime and hash cost from `matches`.
    ///
    /// # Errors
    /// Returns an error if the signing secret is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let jwt_secret = matches
            .get_one::<String>(ARG_JWT_SECRET)
            .cloned()
            .context("missing required argument: --jwt-secret")?;

        Ok(Self {
            jwt_secret: SecretString::from(jwt_secret),
            jwt_expiration_seconds: matches
                .get_one::<u64>(ARG_JWT_EXPIRATION)
                .copied()
                .unwrap_or(DEFAULT_JWT_EXPIRATION_SECONDS),
            bcrypt_cost: matches
                .get_one::<u32>(ARG_BCRYPT_COST)
                .copied()
                .unwrap_or(DEFAULT_BCRYPT_COST),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_JWT_SECRET)
                .long("jwt-secret")
                .help("Secret used to sign and verify session tokens")
                .env("AUTHGATE_JWT_SECRET")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_JWT_EXPIRATION)
                .long("jwt-expiration")
                .help("Session token lifetime in seconds")
                .default_value("3600")
                .env("AUTHGATE_JWT_EXPIRATION")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_BCRYPT_COST)
                .long("bcrypt-cost")
                .help("bcrypt work factor for stored password hashes")
                .default_value("10")
                .env("AUTHGATE_BCRYPT_COST")
                .value_parser(clap::value_parser!(u32).range(4..=31)),
        )
}
