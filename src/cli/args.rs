use clap::Parser;

/// Command line client for MPRIS2 compatible media players
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mprisctl", version, about)]
pub struct Invocation {
    /// Player command to execute ("services" lists available players)
    #[arg(default_value = "status")]
    pub command: String,

    /// Arguments for the command, if any
    pub args: Vec<String>,

    /// Use the Nth MPRIS2 service available [default: 0, or the configured default]
    #[arg(short, long, value_name = "N")]
    pub service: Option<usize>,

    /// Enable extra output
    #[arg(short, long)]
    pub verbose: bool,

    /// List supported commands, then exit
    #[arg(long)]
    pub commands: bool,
}
