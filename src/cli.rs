use clap::Parser;
use scroller_config::{MAX_SPEED_MS, MIN_SPEED_MS};
use std::path::PathBuf;

/// Displays text and scrolls it automatically at a steady pace.
#[derive(Parser, Debug)]
#[command(name = "scroller", version, about)]
pub struct Cli {
    /// Text file to show at startup
    pub file: Option<PathBuf>,

    /// Milliseconds between scroll steps
    #[arg(
        short,
        long,
        value_name = "MS",
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_SPEED_MS)..=i64::from(MAX_SPEED_MS))
    )]
    pub speed: Option<u8>,

    /// Read-only TOML startup profile
    #[arg(short, long, value_name = "PATH", env = "SCROLLER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_file_speed_and_config() {
        let cli = Cli::try_parse_from([
            "scroller",
            "speech.txt",
            "--speed",
            "20",
            "--config",
            "profile.toml",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("speech.txt")));
        assert_eq!(cli.speed, Some(20));
        assert_eq!(cli.config, Some(PathBuf::from("profile.toml")));
    }

    #[test]
    fn rejects_speed_outside_slider_bounds() {
        assert!(Cli::try_parse_from(["scroller", "--speed", "0"]).is_err());
        assert!(Cli::try_parse_from(["scroller", "--speed", "101"]).is_err());
    }
}
