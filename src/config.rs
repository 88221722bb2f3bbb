use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub const STORE_ENV: &str = "INTERVIEW_FEEDBACK_STORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "interview-feedback",
    version,
    disable_help_subcommand = true,
    about = "Normalize and render mock-interview feedback records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the feedback page for one interview and user.
    Render {
        #[arg(
            long,
            env = STORE_ENV,
            value_name = "DIR",
            help = "Record store holding interviews/ and feedback/"
        )]
        store: PathBuf,
        #[arg(long, value_name = "ID", help = "Interview identifier")]
        interview: String,
        #[arg(long, value_name = "ID", help = "User the feedback belongs to")]
        user: String,
        #[arg(
            long,
            value_name = "DIR",
            help = "Write feedback.txt and feedback.json into this directory"
        )]
        out: Option<PathBuf>,
        #[arg(
            long,
            value_enum,
            default_value = "text",
            help = "Format printed to stdout when --out is not given"
        )]
        format: OutputFormat,
    },
    /// Print the normalized category breakdown of a feedback record as JSON.
    Normalize {
        #[arg(long, value_name = "FILE", help = "Feedback record (.json, .json.gz or - for stdin)")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub store: PathBuf,
    pub interview_id: String,
    pub user_id: String,
    pub out_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub input: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunConfig {
    Render(RenderConfig),
    Normalize(NormalizeConfig),
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        match cli.command {
            Command::Render {
                store,
                interview,
                user,
                out,
                format,
            } => RunConfig::Render(RenderConfig {
                store,
                interview_id: interview,
                user_id: user,
                out_dir: out,
                format,
            }),
            Command::Normalize { input } => RunConfig::Normalize(NormalizeConfig { input }),
        }
    }
}

pub fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(RunConfig::from)
}

#[cfg(test)]
#[path = "../tests/src_inline/config/tests.rs"]
mod tests;
