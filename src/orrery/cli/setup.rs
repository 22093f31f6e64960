use clap::{Parser, Subcommand};
use orrery::index::DisplayIndex;
use orrery::model::{BodyInput, Field};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orrery", bin_name = "orrery", version)]
#[command(about = "A small catalog of celestial bodies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $ORRERY_HOME, then the platform data dir)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// One line typed into `orrery shell`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List bodies in their current order
    #[command(alias = "ls")]
    List,

    /// Add a body to the end of the catalog
    #[command(alias = "a", allow_negative_numbers = true)]
    Add {
        #[command(flatten)]
        fields: BodyFields,
    },

    /// Replace the fields of the body at INDEX
    #[command(alias = "e", allow_negative_numbers = true)]
    Edit {
        /// Index as shown by `list` (starts at 1)
        index: DisplayIndex,

        #[command(flatten)]
        fields: BodyFields,
    },

    /// Remove the body at INDEX
    #[command(alias = "rm")]
    Remove {
        /// Index as shown by `list` (starts at 1)
        index: DisplayIndex,
    },

    /// Sort by a field; repeating the same field flips the direction
    #[command(alias = "s")]
    Sort {
        /// name, distance, mass or orbital_period
        field: Field,

        /// Start descending instead of ascending
        #[arg(long)]
        desc: bool,
    },

    /// Discard the data file and restore the default eight planets
    Reset,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, precision)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session; sort toggles carry over between commands
    Shell,
}

#[derive(clap::Args, Debug, Clone)]
pub struct BodyFields {
    /// Name of the body
    pub name: String,

    /// Distance from the reference star (AU)
    pub distance: String,

    /// Mass
    pub mass: String,

    /// Orbital period (days)
    pub orbital_period: String,
}

impl BodyFields {
    pub fn to_input(&self) -> BodyInput {
        BodyInput::new(
            self.name.clone(),
            self.distance.clone(),
            self.mass.clone(),
            self.orbital_period.clone(),
        )
    }
}

/// Splits a shell line into words, honoring single and double quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_negative_number() {
        let cli = Cli::try_parse_from(["orrery", "add", "Ghost", "-1", "1", "1"]).unwrap();
        match cli.command {
            Some(Commands::Add { fields }) => {
                assert_eq!(fields.name, "Ghost");
                assert_eq!(fields.distance, "-1");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_sort_field_and_alias() {
        let cli = Cli::try_parse_from(["orrery", "s", "period", "--desc"]).unwrap();
        match cli.command {
            Some(Commands::Sort { field, desc }) => {
                assert_eq!(field, Field::OrbitalPeriod);
                assert!(desc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["orrery", "sort", "albedo"]).is_err());
    }

    #[test]
    fn rejects_zero_index() {
        assert!(Cli::try_parse_from(["orrery", "remove", "0"]).is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["orrery", "list", "-v", "--dir", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn shell_line_parses_without_binary_name() {
        let line = ShellLine::try_parse_from(["edit", "2", "Venus", "0.72", "0.815", "224.7"])
            .unwrap();
        match line.command {
            Commands::Edit { index, fields } => {
                assert_eq!(index.value(), 2);
                assert_eq!(fields.orbital_period, "224.7");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn split_words_handles_quotes() {
        assert_eq!(
            split_words(r#"add "Halley's Comet" 17.8 0.0000000000367 27510"#).unwrap(),
            ["add", "Halley's Comet", "17.8", "0.0000000000367", "27510"]
        );
        assert_eq!(split_words("  sort   mass ").unwrap(), ["sort", "mass"]);
        assert_eq!(split_words("add '' 1 1 1").unwrap(), ["add", "", "1", "1", "1"]);
        assert!(split_words("add \"open").is_err());
    }
}
