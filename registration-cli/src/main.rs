use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use registration::config::DEFAULT_CONFIG_FILE;
use registration::wizard::{RecordingNavigator, RecordingRegistrationClient};
use registration::{Config, LoginForm, RegistrationWizard, WizardAction};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

/// Replays scripted form sessions against the registration wizard.
#[derive(Parser, Debug)]
#[command(name = "registration-cli", version)]
struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON array of wizard actions, printing the state after each one
    Register {
        #[arg(long)]
        script: PathBuf,
        /// Exit with an error if any action fails validation
        #[arg(long)]
        strict: bool,
    },
    /// Check a JSON login form
    Login {
        #[arg(long)]
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.application.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting", config.application.name);

    match cli.command {
        Command::Register { script, strict } => register(&config, &script, strict).await,
        Command::Login { script } => login(&script),
    }
}

async fn register(config: &Config, script: &Path, strict: bool) -> anyhow::Result<()> {
    let actions: Vec<WizardAction> = read_script(script)?;

    let client = Arc::new(RecordingRegistrationClient::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let mut wizard =
        RegistrationWizard::with_config(config.wizard.clone(), client.clone(), navigator);

    let mut failures = 0usize;
    for (index, action) in actions.into_iter().enumerate() {
        let description = action.description();
        wizard.dispatch(action);

        if let Some(Err(error)) = wizard.update().await {
            failures += 1;
            tracing::warn!("Action {} ({}) failed: {}", index + 1, description, error);
        }

        println!("{}", serde_json::to_string_pretty(&wizard.state().redacted())?);
    }

    let submitted = client.submissions().len();
    tracing::info!(
        "Session finished: {} registration(s) submitted, {} failed action(s)",
        submitted,
        failures
    );

    if strict && failures > 0 {
        anyhow::bail!("{} action(s) failed validation", failures);
    }
    Ok(())
}

fn login(script: &Path) -> anyhow::Result<()> {
    let form: LoginForm = read_script(script)?;

    match form.validate() {
        Ok(()) => {
            println!("✅ {} login form is complete for {}", form.role, form.email);
            Ok(())
        }
        Err(error) => anyhow::bail!("{} login form: {}", form.role, error),
    }
}

fn read_script<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
