//! Autowire - Entry Point
//!
//! Thin harness around dependency listing.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `autowire types` | List auto-registered types |
//! | `autowire deps <TYPE>` | Print the constructor dependencies of a type |

mod demo;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use autowire::infrastructure::logging::init_logging;
use autowire::{
    ConfigLoader, Error, ParameterDescriptor, ServiceRegistry, Target, bootstrap, list_injectable_types,
};
use clap::{Parser, Subcommand};

/// Command line interface for autowire
#[derive(Parser, Debug)]
#[command(name = "autowire")]
#[command(about = "Autowire - Inspect constructor dependencies of registered types")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List auto-registered types
    Types,

    /// Print the dependencies of a type's constructor
    Deps {
        /// Full type name, or its last path segment when unique
        type_name: String,

        /// Member to inspect instead of the configured constructor
        #[arg(short, long)]
        member: Option<String>,

        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Types => {
            for (name, description) in list_injectable_types() {
                println!("{name}  {description}");
            }
        }
        Command::Deps {
            type_name,
            member,
            json,
        } => {
            let context = bootstrap(&config, Vec::<Arc<dyn ServiceRegistry>>::new());
            let definition = context
                .catalog
                .find(&type_name)
                .ok_or_else(|| Error::target_not_found(&type_name))?;
            let descriptors = context
                .resolver
                .list_dependencies(&Target::Type(definition), member.as_deref())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&descriptors)?);
            } else {
                print_descriptors(&descriptors);
            }
        }
    }

    Ok(())
}

fn print_descriptors(descriptors: &[ParameterDescriptor]) {
    if descriptors.is_empty() {
        println!("(no dependencies)");
        return;
    }
    for (position, descriptor) in descriptors.iter().enumerate() {
        let mut flags = Vec::new();
        if descriptor.allows_null {
            flags.push("nullable");
        }
        if descriptor.is_optional {
            flags.push("optional");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        };
        println!("{position}: {} {}{flags}", descriptor.name, descriptor.type_name);
    }
}
