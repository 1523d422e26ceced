use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mediabot")]
#[command(author, version, about = "Telegram bot that saves YouTube audio and TikTok videos locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Fetch a single URL into the download folder and exit
    Fetch {
        /// YouTube or TikTok URL
        url: String,

        /// Override DOWNLOAD_FOLDER for this run
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["mediabot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_fetch_parses_url_and_output() {
        let cli = Cli::try_parse_from(["mediabot", "fetch", "https://youtu.be/abc123", "-o", "/tmp/out"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Fetch {
                url: "https://youtu.be/abc123".to_string(),
                output: Some("/tmp/out".to_string()),
            })
        );
    }

    #[test]
    fn test_fetch_requires_url() {
        assert!(Cli::try_parse_from(["mediabot", "fetch"]).is_err());
    }
}
