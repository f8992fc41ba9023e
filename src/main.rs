//! twitter-imagedl - CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use twitter_imagedl::{
    auth::Credentials,
    cli::{Args, Command},
    config::Config,
    download::download_all,
    error::{exit_codes, Result},
    fs::account_dir,
    output::{print_banner, print_error, print_info, print_run_summary, print_warning},
    timeline::fetch_new_images,
    Error, Ledger, TwitterApi,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::USAGE_ERROR,
            };
            return ExitCode::from(code as u8);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            if e.is_credential_error() {
                ExitCode::from(exit_codes::CREDENTIAL_ERROR as u8)
            } else {
                ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8)
            }
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!("No configuration file at {}, using defaults", args.config.display());
        Config::default()
    };
    args.merge_into_config(&mut config);

    let Command::GetImages { account } = &args.command;

    // Load credentials. A missing file is not fatal yet; signing the first
    // request is where the run actually dies without them.
    let credentials = match Credentials::load(&config.credentials_file) {
        Ok(credentials) => Some(credentials),
        Err(Error::CredentialMissing(path)) => {
            print_warning(&format!(
                "{} not found. You would need it for authentication.",
                path.display()
            ));
            None
        }
        Err(e) => return Err(e),
    };

    let mut ledger = Ledger::read(&config.ledger_path())?;
    let watermark = ledger.watermark(account);

    let api = TwitterApi::new(credentials, config.credentials_file.clone())?;

    print_info(&format!("Scanning timeline of {}...", account));
    let scan = fetch_new_images(&api, account, config.page_size, watermark).await?;

    if scan.image_urls.is_empty() {
        print_info("No images retrieved. (you are likely up to date)");
        return Ok(());
    }

    print_info(&format!(
        "Retrieved URL of {} images. Downloading now.",
        scan.image_urls.len()
    ));

    let target_dir = account_dir(&config.download_directory, account);
    let stats = download_all(&api, &target_dir, &scan.image_urls).await;

    print_run_summary(&stats);

    // The watermark only advances after a fully successful run, so every
    // image is delivered at least once across retried runs.
    if scan.complete && stats.failed == 0 {
        if let Some(newest) = scan.watermark {
            ledger.set_watermark(account, newest);
            if let Err(e) = ledger.write() {
                print_error(&format!("Failed to persist watermark ledger: {}", e));
            }
        }
    } else {
        print_warning("Run did not fully succeed; watermark not advanced. Missed images will be retried next run.");
    }

    Ok(())
}
