use eyre::Context;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use admin_password_hash::{hash_password, options::Options};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // Only the hash goes to stdout.
        .with_writer(std::io::stderr)
        .init();

    let options = Options::initialize()?;

    let password = match options.password {
        Some(password) => password,
        None => SecretString::new(
            rpassword::prompt_password("Enter password to be hashed: ")
                .wrap_err("Unable to read password")?,
        ),
    };

    // https://cheatsheetseries.owasp.org/cheatsheets/Password_Storage_Cheat_Sheet.html#bcrypt
    let password_hash =
        hash_password(&password, options.cost).wrap_err("Unable to hash password")?;
    println!("{password_hash}");

    Ok(())
}
