// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pairs with a bridge and stores the issued username.
//!
//! Press the link button on the bridge, then run:
//!
//! ```text
//! hueconn --ip 192.168.1.2
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use hue_sdk::credentials::{CredentialStore, StoredCredentials, YamlCredentialStore};
use hue_sdk::protocol::{DEFAULT_DEVICE_TYPE, Pairing, RetryPolicy};
use hue_sdk::{Result, check_address};
use tracing::Level;

#[derive(Parser)]
#[command(name = "hueconn")]
#[command(about = "Pair with a Hue bridge and save the credentials", long_about = None)]
struct Cli {
    /// Bridge address (IPv4, optionally with a port)
    #[arg(short, long)]
    ip: String,

    /// Treat the address as a host name and skip IPv4 validation
    #[arg(long)]
    domain: bool,

    /// Credential file to write (default: <config dir>/hue_sdk/config.yml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Application identifier recorded by the bridge
    #[arg(long, default_value = DEFAULT_DEVICE_TYPE)]
    devicetype: String,

    /// Pairing attempts before giving up
    #[arg(long, default_value = "6")]
    attempts: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value = "5")]
    delay: u64,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    fn store(&self) -> Result<YamlCredentialStore> {
        match &self.config {
            Some(path) => Ok(YamlCredentialStore::new(path.clone())),
            None => Ok(YamlCredentialStore::default_location()?),
        }
    }
}

async fn run(cli: &Cli) -> Result<StoredCredentials> {
    if !cli.domain {
        check_address(&cli.ip)?;
    }
    let store = cli.store()?;

    let session = Pairing::new(cli.ip.as_str())?
        .with_device_type(cli.devicetype.as_str())
        .with_retry(RetryPolicy::new(cli.attempts, Duration::from_secs(cli.delay)))
        .pair()
        .await?;

    let credentials = StoredCredentials::from(&session);
    store.write(&credentials)?;
    Ok(credentials)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level()).init();

    println!("Press the link button on the bridge at {}", cli.ip);
    match run(&cli).await {
        Ok(credentials) => {
            println!("ip: {}", credentials.ip);
            println!("user_name: {}", credentials.user_name);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
