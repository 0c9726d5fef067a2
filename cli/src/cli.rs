use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "films")]
#[command(
    author,
    version,
    about = "Browse Star Wars films from the SWAPI GraphQL API"
)]
pub struct Cli {
    /// GraphQL endpoint URL (overrides the config file and STAR_WARS_GRAPHQL_ENDPOINT)
    #[clap(long, global = true)]
    pub endpoint: Option<String>,

    /// Configuration file path (optional, defaults to films.toml)
    #[clap(short, long, global = true, default_value = "films.toml")]
    pub config: String,

    /// Enable verbose output with request logging
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every film with its director, release date and species
    List {
        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the details of a single film
    Show {
        /// Film id as returned by `films list`
        id: String,

        /// Output format
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the GraphQL operations this tool sends
    Queries,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable text - default
    Text,

    /// Pretty printed JSON
    Json,
}
