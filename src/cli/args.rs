use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "certserve")]
#[command(author, version, about, long_about = None)]
#[command(about = "Issue MasterClass participation certificates as PDF")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP certificate service
    Serve {
        /// Roster JSON file (array of participants)
        #[arg(short, long, default_value = "roster.json")]
        roster: String,

        /// Address to bind
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: String,
    },

    /// Issue a single certificate from the command line
    Issue {
        /// Roster JSON file (array of participants)
        #[arg(short, long, default_value = "roster.json")]
        roster: String,

        /// Participant email
        #[arg(short, long)]
        email: String,

        /// Shared access key
        #[arg(short, long)]
        key: String,

        /// Output PDF path
        #[arg(short, long, default_value = "Certificado_MasterClass.pdf")]
        output: String,
    },

    /// Generate an example roster JSON file
    Example {
        /// Output path for example roster
        #[arg(short, long, default_value = "roster.example.json")]
        output: String,
    },
}
