//! Register command - runs the full registration workflow

use clap::Args;

use crate::config::AppConfig;
use crate::domain::RegistrationInput;
use crate::infrastructure::logging;
use crate::infrastructure::registration::user_message;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username shown to other students
    #[arg(long)]
    pub username: String,

    /// Email address used to sign in
    #[arg(long)]
    pub email: String,

    /// Password; the minimum length comes from configuration
    #[arg(long)]
    pub password: String,

    /// Confirmation value; defaults to the password
    #[arg(long)]
    pub confirm_password: Option<String>,
}

/// Run one registration attempt against the configured services
pub async fn run(args: RegisterArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let service = crate::create_registration_service(&config).await?;

    let input = RegistrationInput {
        user_name: args.username,
        email: args.email,
        confirm_password: args
            .confirm_password
            .unwrap_or_else(|| args.password.clone()),
        password: args.password,
    };

    match service.register(&input).await {
        Ok(account) => {
            println!(
                "Registered '{}' with account id {}",
                account.user_name(),
                account.account_id()
            );
            Ok(())
        }
        Err(error) => {
            if let Some(message) = user_message(&error) {
                eprintln!("{}", message);
            }
            Err(error.into())
        }
    }
}
