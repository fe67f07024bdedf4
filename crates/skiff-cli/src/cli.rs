use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Set current instance
    #[arg(short, long, global = true)]
    pub instance: Option<String>,

    /// Provide custom config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set proxy
    #[arg(required = false, long, short = 'P', global = true)]
    pub proxy: Option<String>,

    /// Set user agent
    #[arg(required = false, long, short = 'A', global = true)]
    pub user_agent: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the canonical repositories advertised by the master list
    #[clap(name = "available", visible_alias = "canonical")]
    Available,

    /// List registered repositories
    #[clap(name = "list", visible_alias = "ls")]
    List,

    /// Register a repository
    #[command(arg_required_else_help = true)]
    #[clap(name = "add")]
    Add {
        /// Name of the repository
        #[arg(required = true)]
        name: String,

        /// URL of the repository
        #[arg(required = true)]
        url: String,
    },

    /// Forget a repository
    #[command(arg_required_else_help = true)]
    #[clap(name = "forget", visible_alias = "remove")]
    Forget {
        /// Name of the repository
        #[arg(required = true)]
        name: String,
    },

    /// Set the default repository
    #[command(arg_required_else_help = true)]
    #[clap(name = "default")]
    Default {
        /// Name or URL of a registered repository
        #[arg(required = true)]
        target: String,
    },

    /// Generate default config
    #[clap(name = "def-config")]
    DefConfig,
}
