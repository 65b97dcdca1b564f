//! Check-username command - probes directory availability

use std::time::Duration;

use clap::Args;

use crate::config::AppConfig;
use crate::domain::AccountDirectory;
use crate::infrastructure::directory::RestAccountDirectory;
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct CheckUsernameArgs {
    /// Username to probe
    pub name: String,
}

/// Ask the directory whether a username is still free
pub async fn run(args: CheckUsernameArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let client = HttpClient::with_timeout(Duration::from_secs(config.http.request_timeout_secs));
    let directory = RestAccountDirectory::new(client, &config.directory.base_url);

    let available = directory.is_user_name_available(&args.name).await?;

    if available {
        println!("'{}' is available", args.name);
    } else {
        println!("'{}' is taken", args.name);
    }

    Ok(())
}
