use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_THEME_FILE};

/// Image carousel with arrow, dot and autoplay navigation.
#[derive(Debug, Clone, Parser)]
#[command(name = "carousel", version)]
pub struct Args {
    /// Directory holding the slide images
    pub image_directory: PathBuf,

    /// Autoplay interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_AUTOPLAY_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Show slides in random order
    #[arg(long)]
    pub shuffle: bool,

    /// File the selected theme is remembered in
    #[arg(long, default_value = DEFAULT_THEME_FILE)]
    pub theme_file: PathBuf,
}

impl Args {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["carousel", "photos"]).unwrap();
        assert_eq!(args.image_directory, PathBuf::from("photos"));
        assert_eq!(args.autoplay_interval(), Duration::from_secs(10));
        assert!(!args.shuffle);
        assert_eq!(args.theme_file, PathBuf::from(DEFAULT_THEME_FILE));
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "carousel",
            "photos",
            "--interval-ms",
            "2500",
            "--shuffle",
            "--theme-file",
            "/tmp/theme",
        ])
        .unwrap();
        assert_eq!(args.autoplay_interval(), Duration::from_millis(2500));
        assert!(args.shuffle);
        assert_eq!(args.theme_file, PathBuf::from("/tmp/theme"));
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Args::try_parse_from(["carousel", "photos", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn directory_is_required() {
        assert!(Args::try_parse_from(["carousel"]).is_err());
    }
}
