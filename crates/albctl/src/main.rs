/*
[INPUT]:  CLI arguments, YAML configuration file, ALBCTL_* environment
[OUTPUT]: Controller objects printed to stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::PathBuf;

use alb_sdk::{ApiOptions, AviClient, PatchOp};
use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use albctl::commands::{self, Action, OutputFormat};
use albctl::ControllerConfig;

#[derive(Parser, Debug)]
#[command(name = "albctl", version, about = "Load-balancer controller object tool")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Tenant for this invocation, overriding the configured one
    #[arg(long, global = true)]
    tenant: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every supported object type
    Types,
    /// Check a JSON/YAML document against an object model without contacting the controller
    Validate { object_type: String, file: PathBuf },
    /// List objects of a type
    List {
        object_type: String,
        #[command(flatten)]
        filter: Filter,
    },
    /// Fetch one object by uuid, or by name with --name
    Get {
        object_type: String,
        uuid: Option<String>,
        #[command(flatten)]
        filter: Filter,
    },
    /// Create an object from a JSON/YAML document
    Create { object_type: String, file: PathBuf },
    /// Replace an object; the document must carry its uuid
    Update { object_type: String, file: PathBuf },
    /// Apply an add/replace/delete patch from a document
    Patch {
        object_type: String,
        uuid: String,
        #[arg(long, default_value = "replace")]
        op: PatchOp,
        file: PathBuf,
    },
    /// Delete an object by uuid, or by name with --name
    Delete {
        object_type: String,
        uuid: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Args, Debug)]
struct Filter {
    #[arg(long)]
    name: Option<String>,
    /// Cloud name (`cloud_ref.name`)
    #[arg(long)]
    cloud: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Types => {
            for object_type in commands::object_types() {
                println!("{object_type}");
            }
            Ok(())
        }
        Command::Validate { object_type, file } => {
            let document = commands::read_document(&file)?;
            let normalized = commands::validate(&object_type, document)?;
            info!(%object_type, file = %file.display(), "document is valid");
            println!("{}", args.output.render(&normalized)?);
            Ok(())
        }
        command => {
            let config = ControllerConfig::load(args.config_path.as_deref())
                .context("load controller configuration")?;
            let client = AviClient::new(config.client_config()?, config.credentials()?)
                .context("create controller client")?;
            debug!(controller = %config.controller, tenant = %config.tenant, "client ready");

            let mut options = ApiOptions::new();
            if let Some(tenant) = &args.tenant {
                options = options.tenant(tenant.clone());
            }
            let (object_type, action) = into_action(command, options)?;
            let value = commands::execute(&client, &object_type, action).await?;
            if !value.is_null() {
                println!("{}", args.output.render(&value)?);
            }
            Ok(())
        }
    }
}

fn into_action(command: Command, options: ApiOptions) -> Result<(String, Action)> {
    let action = match command {
        Command::List { object_type, filter } => {
            (object_type, Action::List { options: filter.apply(options) })
        }
        Command::Get { object_type, uuid, filter } => match (uuid, filter.name.clone()) {
            (Some(uuid), _) => (object_type, Action::Get { uuid, options }),
            (None, Some(name)) => {
                let options = Filter { name: None, ..filter }.apply(options);
                (object_type, Action::GetByName { name, options })
            }
            (None, None) => return Err(anyhow!("get needs a uuid or --name")),
        },
        Command::Create { object_type, file } => {
            let document = commands::read_document(&file)?;
            (object_type, Action::Create { document, options })
        }
        Command::Update { object_type, file } => {
            let document = commands::read_document(&file)?;
            (object_type, Action::Update { document, options })
        }
        Command::Patch { object_type, uuid, op, file } => {
            let document = commands::read_document(&file)?;
            (object_type, Action::Patch { uuid, op, document, options })
        }
        Command::Delete { object_type, uuid, name } => match (uuid, name) {
            (Some(uuid), _) => (object_type, Action::Delete { uuid, options }),
            (None, Some(name)) => (object_type, Action::DeleteByName { name, options }),
            (None, None) => return Err(anyhow!("delete needs a uuid or --name")),
        },
        Command::Types | Command::Validate { .. } => {
            return Err(anyhow!("command does not talk to the controller"));
        }
    };
    Ok(action)
}

impl Filter {
    fn apply(self, mut options: ApiOptions) -> ApiOptions {
        if let Some(name) = self.name {
            options = options.name(name);
        }
        if let Some(cloud) = self.cloud {
            options = options.cloud(cloud);
        }
        options
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
