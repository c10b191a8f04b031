// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "keyper-shell")]
#[command(about = "Keyper single-window shell lifecycle demo", long_about = None)]
pub struct Cli {
    /// Report the device as an emulator (requests the status bar only)
    #[arg(long, default_value = "false")]
    pub emulator: bool,

    /// Device density in pixels per vp, used for inset conversion
    #[arg(long, default_value = "2.0")]
    pub scale: f32,

    /// Initial avoid-area top height in pixels
    #[arg(long, default_value = "80")]
    pub avoid_top: u32,

    /// Initial avoid-area bottom height in pixels
    #[arg(long, default_value = "40")]
    pub avoid_bottom: u32,

    /// JSON file with launch parameters handed to on_create
    #[arg(long = "launch-params")]
    pub launch_params: Option<PathBuf>,
}
