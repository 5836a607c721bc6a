use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ketav", version, about = "Paleo-Hebrew reading aids")]
pub struct Cli {
    /// JSON config file. Defaults to ./ketav.json when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print plain text instead of JSON.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert Hebrew text to Paleo-Hebrew.
    Convert { text: String },

    /// Convert Paleo-Hebrew text back to Hebrew letters.
    ToHebrew { text: String },

    /// Romanize Hebrew text word by word.
    Transliterate { text: String },

    /// Pictographic analysis of one Hebrew word.
    Analyze { word: String },

    /// Mark up the Paleo words of a verse with their Hebrew correlates.
    Annotate {
        /// Hebrew line of the verse.
        #[arg(long)]
        hebrew: String,

        /// Rendered Paleo line. Converted from --hebrew when omitted.
        #[arg(long)]
        paleo: Option<String>,

        #[arg(long, default_value = "verse")]
        verse_id: String,
    },

    /// List the 22 letters of the alphabet.
    Alphabet,

    /// Show one letter by name, Hebrew letter or Paleo symbol.
    Letter { query: String },

    /// Reading guide and speech parameters for Hebrew or Paleo text.
    Pronounce {
        text: String,

        #[arg(long, value_enum, default_value_t = SpeechKind::Word)]
        kind: SpeechKind,
    },

    /// Tokenize Hebrew text and look up every word.
    Lookup { text: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpeechKind {
    Verse,
    Word,
    Letter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotate() {
        let cli = Cli::parse_from(["ketav", "--plain", "annotate", "--hebrew", "ברא"]);
        assert!(cli.plain);
        match cli.command {
            Command::Annotate {
                hebrew,
                paleo,
                verse_id,
            } => {
                assert_eq!(hebrew, "ברא");
                assert!(paleo.is_none());
                assert_eq!(verse_id, "verse");
            }
            _ => panic!("expected annotate"),
        }
    }

    #[test]
    fn test_parse_pronounce_kind() {
        let cli = Cli::parse_from(["ketav", "pronounce", "ב", "--kind", "letter"]);
        assert!(matches!(
            cli.command,
            Command::Pronounce {
                kind: SpeechKind::Letter,
                ..
            }
        ));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
