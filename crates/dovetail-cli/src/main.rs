//! Dovetail command-line tool
//!
//! Inspector for the type bridge: resolves source type names into joint
//! types and the JNI artifacts the bridge emitter consumes.

mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dovetail")]
#[command(about = "JNI bridge type mapping inspector", long_about = None)]
#[command(version)]
struct Cli {
    /// Color output: always, never, or auto
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve type names into joint types and JNI artifacts
    Resolve {
        /// Type names as written in source (e.g. "int[]", "java.lang.String")
        #[arg(required = true)]
        types: Vec<String>,
        /// Resolve selectors for static dispatch
        #[arg(long = "static")]
        is_static: bool,
        /// Emit JSON instead of styled text
        #[arg(long)]
        json: bool,
    },

    /// List the canonical joint type table
    Types {
        /// Emit JSON instead of styled text
        #[arg(long)]
        json: bool,
    },

    /// Assemble a method descriptor from return and parameter types
    Method {
        /// Return type name
        ret: String,
        /// Parameter type names in declaration order
        params: Vec<String>,
        /// Resolve the return selector for static dispatch
        #[arg(long = "static")]
        is_static: bool,
        /// Emit JSON instead of styled text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let choice = output::resolve_color_choice(&cli.color);

    let result = match cli.command {
        Commands::Resolve {
            types,
            is_static,
            json,
        } => commands::resolve::execute(&types, is_static, json, choice),
        Commands::Types { json } => commands::types::execute(json, choice),
        Commands::Method {
            ret,
            params,
            is_static,
            json,
        } => commands::method::execute(&ret, &params, is_static, json, choice),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
