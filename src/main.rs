use std::fs;
use std::rc::Rc;

use clap::Parser;

use keyper_shell::cli::Cli;
use keyper_shell::core::{AvoidArea, LaunchParams};
use keyper_shell::sim::{HostDriver, SimDeviceProfile, SimWindow};
use keyper_shell::ui_state::{AVOID_BOTTOM_HEIGHT, AVOID_TOP_HEIGHT};
use keyper_shell::{EntryAbility, EventBus, SharedUiState, VpScale};

type Result<T> = anyhow::Result<T>;

fn load_launch_params(cli: &Cli) -> Result<LaunchParams> {
    match &cli.launch_params {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(LaunchParams::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let launch = load_launch_params(&cli)?;

    let ui_state = SharedUiState::new();
    let bus = EventBus::new();
    bus.subscribe(|event| println!("bus event {}", event.id()));

    let device = Rc::new(SimDeviceProfile::new(cli.emulator));
    let ability = EntryAbility::new(
        ui_state.clone(),
        bus.clone(),
        VpScale::new(cli.scale),
        device,
    );

    let window = SimWindow::new(AvoidArea {
        top_height_px: cli.avoid_top,
        bottom_height_px: cli.avoid_bottom,
    });

    // Script one full ability lifecycle against the simulated host
    let driver = HostDriver::new(ability, window.clone(), launch);
    driver.create()?;
    driver.stage_create()?;
    driver.foreground()?;

    // Simulate a geometry change while in the foreground
    window.report_avoid_area(AvoidArea {
        top_height_px: cli.avoid_top / 2,
        bottom_height_px: cli.avoid_bottom / 2,
    });

    driver.background()?;
    driver.foreground()?;
    driver.stage_destroy()?;
    driver.destroy()?;

    println!(
        "published: {}={:?} {}={:?}",
        AVOID_TOP_HEIGHT,
        ui_state.get(AVOID_TOP_HEIGHT),
        AVOID_BOTTOM_HEIGHT,
        ui_state.get(AVOID_BOTTOM_HEIGHT),
    );

    Ok(())
}
