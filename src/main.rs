//! Seedgate CLI - deployment-context guard for deploy scripts
//!
//! Usage: seedgate <COMMAND>
//!
//! Commands:
//!   check    Evaluate the guard for a category (exit 0 = run, 1 = skip)
//!   context  Print the deployment context resolved from the environment

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use seedgate::{current_context, DeploymentGuard, GuardedOperation};

/// Seedgate - deployment-context guard for environment-gated seeders
#[derive(Parser, Debug)]
#[command(name = "seedgate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the guard against the current environment
    Check {
        /// Guarded-environment category (*, REVIEW, PRODUCTION, LOCAL,
        /// REVIEW+LOCAL, REVIEW+PRODUCTION, PRODUCTION+LOCAL)
        #[arg(short, long, default_value = "*")]
        guard: String,

        /// Restrict to an exact branch
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Print the deployment context resolved from the environment
    Context,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { guard, branch } => {
            let operation = GuardedOperation::from_config(&guard, branch.as_deref())?;
            let context = current_context();
            let allowed = DeploymentGuard::evaluate(&context, &operation);

            if cli.json {
                let record = json!({
                    "guard": operation.guarded_environment.as_str(),
                    "branch_restriction": operation.branch_restriction,
                    "context": context,
                    "allowed": allowed,
                });
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else if allowed {
                println!("run");
            } else {
                println!("skip");
            }

            if !allowed {
                std::process::exit(1);
            }
        }

        Commands::Context => {
            let context = current_context();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&context)?);
            } else {
                println!(
                    "application environment: {}",
                    context.application_environment.as_deref().unwrap_or("-")
                );
                println!(
                    "deployment type:         {}",
                    context.deployment_type.as_deref().unwrap_or("-")
                );
                println!(
                    "deployed branch:         {}",
                    context.deployed_branch.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(())
}
