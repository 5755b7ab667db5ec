#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global launch settings, set from command line
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

/// Settings components read after startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchConfig {
    pub width: f64,
    pub height: f64,
    /// Fixed starfield seed; random sky when unset
    pub star_seed: Option<u64>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            width: DESKTOP_SIZE.0,
            height: DESKTOP_SIZE.1,
            star_seed: None,
        }
    }
}

const DESKTOP_SIZE: (f64, f64) = (1280.0, 900.0);
const MOBILE_SIZE: (f64, f64) = (390.0, 844.0);

/// Get the launch settings (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH.get().copied().unwrap_or_default()
}

/// Warathep's portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page personal portfolio")]
struct Args {
    /// Open a phone-sized window so the mobile menu is active
    #[arg(short, long)]
    mobile: bool,

    /// Window width in logical pixels (overrides --mobile)
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels (overrides --mobile)
    #[arg(long)]
    height: Option<f64>,

    /// Seed for the background starfield
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn launch_config(&self) -> LaunchConfig {
        let (width, height) = if self.mobile { MOBILE_SIZE } else { DESKTOP_SIZE };
        LaunchConfig {
            width: self.width.unwrap_or(width),
            height: self.height.unwrap_or(height),
            star_seed: self.seed,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let launch = args.launch_config();
    let _ = LAUNCH.set(launch);

    tracing::info!(
        width = launch.width,
        height = launch.height,
        mobile = args.mobile,
        "Starting portfolio"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Warathep | Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(launch.width, launch.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_flag_picks_phone_size() {
        let args = Args::parse_from(["portfolio-desktop", "--mobile"]);
        let launch = args.launch_config();
        assert_eq!((launch.width, launch.height), MOBILE_SIZE);
        assert_eq!(launch.star_seed, None);
    }

    #[test]
    fn explicit_size_overrides_preset() {
        let args = Args::parse_from([
            "portfolio-desktop",
            "--mobile",
            "--width",
            "500",
            "--seed",
            "9",
        ]);
        let launch = args.launch_config();
        assert_eq!(launch.width, 500.0);
        assert_eq!(launch.height, MOBILE_SIZE.1);
        assert_eq!(launch.star_seed, Some(9));
    }

    #[test]
    fn defaults_to_desktop_window() {
        let launch = Args::parse_from(["portfolio-desktop"]).launch_config();
        assert_eq!(launch, LaunchConfig::default());
    }
}
