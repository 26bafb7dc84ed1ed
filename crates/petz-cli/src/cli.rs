//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Petz CLI - Look up pets in a pedigree registry.
#[derive(Debug, Parser)]
#[command(name = "petz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Registry database file
    #[arg(long, global = true, env = "PETZ_DB", default_value = "petz.db")]
    pub db: String,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a pet's profile, siblings and three-generation pedigree
    Profile(ProfileArgs),

    /// Show a pet's pedigree
    Pedigree(PedigreeArgs),
}

/// Arguments for the profile command.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    /// Pet id
    pub id: i64,
}

/// Arguments for the pedigree command.
#[derive(Debug, Parser)]
pub struct PedigreeArgs {
    /// Pet id
    pub id: i64,

    /// Number of generations
    #[arg(short, long, default_value = "3")]
    pub generations: u32,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pedigree_command() {
        let cli = Cli::parse_from(["petz", "--db", "test.db", "pedigree", "12", "-g", "5"]);
        assert_eq!(cli.db, "test.db");
        match cli.command {
            Command::Pedigree(args) => {
                assert_eq!(args.id, 12);
                assert_eq!(args.generations, 5);
            }
            _ => panic!("Expected Pedigree command"),
        }
    }

    #[test]
    fn test_profile_command_defaults() {
        let cli = Cli::parse_from(["petz", "profile", "7"]);
        assert_eq!(cli.format, CliFormat::Table);
        assert!(!cli.no_color);
        assert!(matches!(cli.command, Command::Profile(ProfileArgs { id: 7 })));
    }

    #[test]
    fn test_json_format_flag() {
        let cli = Cli::parse_from(["petz", "pedigree", "1", "--format", "json"]);
        assert_eq!(cli.format, CliFormat::Json);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(Cli::try_parse_from(["petz", "profile"]).is_err());
    }
}
