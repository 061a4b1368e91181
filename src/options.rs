use std::env::VarError;

use color_eyre::Help;
use eyre::Context;
use secrecy::SecretString;

use crate::{MAX_COST, MIN_COST};

/// Options for a single invocation, read from the environment.
pub struct Options {
    /// bcrypt cost factor (number of internal rounds is `2^cost`).
    ///
    /// Default is [`bcrypt::DEFAULT_COST`] (12).
    /// Can be specified by setting the environment variable `BCRYPT_COST`.
    pub cost: u32,
    /// Password supplied via the `PASSWORD` environment variable for
    /// non-interactive use. When absent the password is prompted for on the
    /// terminal instead.
    pub password: Option<SecretString>,
}

impl Options {
    pub fn initialize() -> eyre::Result<Self> {
        let cost = match std::env::var("BCRYPT_COST") {
            Ok(cost) => {
                tracing::info!("Cost factor was read from BCRYPT_COST environment variable");
                cost.parse::<u32>()
                    .wrap_err_with(|| {
                        format!("Error parsing BCRYPT_COST environment variable: {cost:?}")
                    })
                    .suggestion(format!(
                        "BCRYPT_COST must be an integer in the range {MIN_COST}..={MAX_COST}"
                    ))?
            }
            Err(VarError::NotPresent) => bcrypt::DEFAULT_COST,
            Err(unexpected) => {
                return Err(unexpected)
                    .wrap_err("Error while reading BCRYPT_COST environment variable")
            }
        };

        let password = match std::env::var("PASSWORD") {
            Ok(password) => {
                tracing::info!("Password was read from PASSWORD environment variable");
                Some(SecretString::new(password))
            }
            Err(VarError::NotPresent) => None,
            Err(unexpected) => {
                return Err(unexpected)
                    .wrap_err("Error while reading PASSWORD environment variable")
            }
        };

        Ok(Self { cost, password })
    }
}
