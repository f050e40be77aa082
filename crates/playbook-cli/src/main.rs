mod config;
mod data_init_cmd;
mod edit_cmd;
mod export_cmd;
mod import_cmd;
mod logo;
mod plans_cmd;
mod show_cmd;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};

use playbook_core::{PlanSession, SelectBy};
use playbook_store::{PlanStore, StoreConfig};

use config::PlaybookConfig;

#[derive(Parser)]
#[command(name = "playbook", about = "Marketing playbook browser and inline editor")]
struct Cli {
    /// Data directory (overrides PLAYBOOK_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a playbook config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Create the data directory and seed starter documents
    DataInit,
    /// List registered plans and their document status
    Plans,
    /// Show a plan overview, one stage, or one step
    Show {
        /// Plan key (b2c, product, b2b)
        plan: String,
        /// Stage title
        #[arg(long, conflicts_with = "stage_id")]
        stage: Option<String>,
        /// Stage id (instead of title)
        #[arg(long)]
        stage_id: Option<String>,
        /// Step title
        #[arg(long, conflicts_with = "step_id")]
        step: Option<String>,
        /// Step id (instead of title)
        #[arg(long)]
        step_id: Option<String>,
    },
    /// Emit the pre-filled edit form for a step
    Form {
        /// Plan key
        plan: String,
        /// Stage title
        #[arg(long, conflicts_with = "stage_id")]
        stage: Option<String>,
        /// Stage id (instead of title)
        #[arg(long)]
        stage_id: Option<String>,
        /// Step title
        #[arg(long, conflicts_with = "step_id")]
        step: Option<String>,
        /// Step id (instead of title)
        #[arg(long)]
        step_id: Option<String>,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Apply an edited form to a step and save the document
    Edit {
        /// Plan key
        plan: String,
        /// Stage title
        #[arg(long, conflicts_with = "stage_id")]
        stage: Option<String>,
        /// Stage id (instead of title)
        #[arg(long)]
        stage_id: Option<String>,
        /// Step title
        #[arg(long, conflicts_with = "step_id")]
        step: Option<String>,
        /// Step id (instead of title)
        #[arg(long)]
        step_id: Option<String>,
        /// Edited form file (otherwise $VISUAL/$EDITOR is opened)
        #[arg(long)]
        form: Option<String>,
    },
    /// Export a plan document as JSON
    Export {
        /// Plan key
        plan: String,
        /// Output file path (defaults to <key>.json in the working dir)
        #[arg(long, conflicts_with = "stdout")]
        output: Option<String>,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Replace a plan document from a JSON file
    Import {
        /// Plan key
        plan: String,
        /// JSON file to import
        file: String,
    },
    /// Launch the interactive browser
    Browse {
        /// Plan key
        plan: String,
    },
}

/// Build a lookup criterion from the `--x` / `--x-id` flag pair.
fn selector<'a>(title: &'a Option<String>, id: &'a Option<String>) -> Option<SelectBy<'a>> {
    match (id, title) {
        (Some(id), _) => Some(SelectBy::Id(id)),
        (None, Some(title)) => Some(SelectBy::Title(title)),
        (None, None) => None,
    }
}

/// Execute the `playbook init` command: write the config file.
fn cmd_init(cli_data_dir: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let data_dir = match cli_data_dir {
        Some(dir) => dir.to_string(),
        None => std::env::var("PLAYBOOK_DATA_DIR")
            .unwrap_or_else(|_| StoreConfig::DEFAULT_DIR.to_string()),
    };

    let cfg = config::ConfigFile {
        store: config::StoreSection {
            data_dir: data_dir.clone(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  store.data_dir = {data_dir}");
    println!();
    println!("Next: run `playbook data-init` to seed starter documents.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(cli.data_dir.as_deref(), force)?;
        }
        Commands::DataInit => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            data_init_cmd::run_data_init(&store)?;
        }
        Commands::Plans => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            plans_cmd::run_plans(&store)?;
        }
        Commands::Show {
            plan,
            stage,
            stage_id,
            step,
            step_id,
        } => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            let stage_sel = selector(&stage, &stage_id);
            let step_sel = selector(&step, &step_id);
            if stage_sel.is_none() && step_sel.is_some() {
                anyhow::bail!("--step requires --stage or --stage-id");
            }
            show_cmd::run_show(&store, &plan, stage_sel, step_sel)?;
        }
        Commands::Form {
            plan,
            stage,
            stage_id,
            step,
            step_id,
            output,
        } => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            let stage_sel = selector(&stage, &stage_id)
                .context("a stage is required: pass --stage <TITLE> or --stage-id <ID>")?;
            let step_sel = selector(&step, &step_id)
                .context("a step is required: pass --step <TITLE> or --step-id <ID>")?;
            edit_cmd::run_form(&store, &plan, stage_sel, step_sel, output.as_deref())?;
        }
        Commands::Edit {
            plan,
            stage,
            stage_id,
            step,
            step_id,
            form,
        } => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            let stage_sel = selector(&stage, &stage_id)
                .context("a stage is required: pass --stage <TITLE> or --stage-id <ID>")?;
            let step_sel = selector(&step, &step_id)
                .context("a step is required: pass --step <TITLE> or --step-id <ID>")?;
            edit_cmd::run_edit(&store, &plan, stage_sel, step_sel, form.as_deref())?;
        }
        Commands::Export {
            plan,
            output,
            stdout,
        } => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            export_cmd::run_export(&store, &plan, output.as_deref(), stdout)?;
        }
        Commands::Import { plan, file } => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            import_cmd::run_import(&store, &plan, &file)?;
        }
        Commands::Browse { plan } => {
            let resolved = PlaybookConfig::resolve(cli.data_dir.as_deref())?;
            let store = PlanStore::new(resolved.store_config);
            let session = PlanSession::open(store, &plan)?;
            tui::run_browser(&session)?;
        }
    }

    Ok(())
}
