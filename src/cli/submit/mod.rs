//! Submit command - drives the wizard from a saved form

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;

use crate::wizard::{FormWizard, HttpRegistrationClient, RegistrationForm, WizardStep};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// JSON file with the form fields (camelCase keys)
    pub form: PathBuf,

    /// Base URL of the registration endpoint
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

pub async fn run(args: SubmitArgs) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(&args.form)
        .await
        .with_context(|| format!("Failed to read {}", args.form.display()))?;
    let form: RegistrationForm = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", args.form.display()))?;

    let mut wizard = FormWizard::from(form);
    while wizard.step() != WizardStep::Review {
        let step = wizard.step();
        wizard
            .advance()
            .map_err(|e| anyhow::anyhow!("Step {}: {}", step, e))?;
        println!("✓ {}", step);
    }

    let client = HttpRegistrationClient::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let submission = wizard.submit(&client).await?;

    println!("{}", submission.notice);
    println!("Team ID: {}", submission.team_id);

    Ok(())
}
