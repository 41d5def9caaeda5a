use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{catalog::Catalog, error::KioskError, random::ReceiptNumbers};


// Command line of the kiosk binary
#[derive(Debug, Clone, Parser)]
#[command(name = "burger-kiosk", about = "Terminal burger ordering kiosk")]
pub struct Args {
    /// JSON catalog to serve instead of the built-in menu
    #[arg(long, env = "KIOSK_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Seed for receipt numbers, for reproducible sessions
    #[arg(long, env = "KIOSK_SEED")]
    pub seed: Option<u64>,

    /// Milliseconds to coalesce state changes before redrawing
    #[arg(long, env = "KIOSK_DEBOUNCE_MS", default_value_t = 120)]
    pub debounce_ms: u64,

    /// Log filter, e.g. `debug` or `burger_kiosk=trace`
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log: String,
}

impl Args {
    pub fn load_catalog(&self) -> Result<Catalog, KioskError> {
        match &self.catalog {
            Some(path) => Catalog::from_json_file(path),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn receipt_numbers(&self) -> ReceiptNumbers {
        match self.seed {
            Some(seed) => ReceiptNumbers::seeded(seed),
            None => ReceiptNumbers::from_entropy(),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

// Logs go to stderr so they never land on the dashboard
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_builtin_catalog() {
        let args = Args::try_parse_from(["burger-kiosk"]).unwrap();
        assert_eq!(args.debounce(), Duration::from_millis(120));
        assert_eq!(args.load_catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn seed_makes_numbers_reproducible() {
        let args =
            Args::try_parse_from(["burger-kiosk", "--seed", "5", "--debounce-ms", "0"]).unwrap();
        let mut a = args.receipt_numbers();
        let mut b = ReceiptNumbers::seeded(5);
        assert_eq!(a.next_number(), b.next_number());
        assert_eq!(args.debounce(), Duration::ZERO);
    }
}
