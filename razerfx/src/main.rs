use std::env::args;
use std::io::Write;
use std::process::exit;

use config_traits::{StdConfig, StdConfigLoad};
use gumdrop::Options;
use log::{error, info, LevelFilter};
use razer_dbus::RazerDbusClientBlocking;
use razer_fx::device::{apply_advanced_fx, read_device_infos, TargetKeyboard};
use razer_fx::{Brightness, ColourPalette, KeyboardMatrix};

use crate::cli_opts::{CliStart, Command};
use crate::config::RazerFxConfig;

mod cli_opts;
mod config;

fn main() {
    let mut logger = env_logger::Builder::new();
    logger
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} -- PID-{}:{}:{}: {}",
                buf.timestamp(),
                std::process::id(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args: Vec<String> = args().skip(1).collect();
    let parsed = match CliStart::parse_args_default(&args) {
        Ok(p) => p,
        Err(err) => {
            println!("Error: {err}\n");
            print_help();
            exit(2);
        }
    };

    if parsed.help {
        print_help();
        return;
    }

    if parsed.version {
        println!("razerfx v{}", env!("CARGO_PKG_VERSION"));
        println!("razer-fx v{}", razer_fx::VERSION);
        println!("razer-dbus v{}", razer_dbus::VERSION);
        return;
    }

    let Some(command) = parsed.command() else {
        if let [cmd] = parsed.command.as_slice() {
            println!("Unknown command: {cmd}\n");
        }
        print_help();
        return;
    };

    let config = RazerFxConfig::new().load();
    let (palette, brightness) = match config.resolve(&parsed) {
        Ok(r) => r,
        Err(err) => {
            println!("Error: {err}");
            exit(2);
        }
    };

    if let Err(err) = do_parsed(command, &palette, brightness) {
        error!("{err}");
        if command.needs_daemon() {
            print_daemon_hint();
        }
        exit(1);
    }
}

fn print_help() {
    println!(
        "razerfx v{} for Razer BlackWidow 2019 (en_US) keyboard\n",
        env!("CARGO_PKG_VERSION")
    );
    println!("Usage: razerfx [OPTIONS] <command>\n");
    println!("Commands:");
    println!("  apply            set the advanced per-key effect on the keyboard");
    println!("  device_info      print the devices found by openrazer-daemon");
    println!("  keyboard_matrix  print the key to lighting matrix table");
    println!("  show_colorpal    preview the colour palette\n");
    println!("{}", CliStart::usage());
}

fn print_daemon_hint() {
    println!(
        "\n\x1b[0;31mIs openrazer-daemon running? Start it with `openrazer-daemon` or `systemctl \
         --user start openrazer-daemon`\x1b[0m"
    );
}

fn do_parsed(
    command: Command,
    palette: &ColourPalette,
    brightness: Option<Brightness>,
) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = KeyboardMatrix::blackwidow_2019(palette);

    match command {
        Command::Apply => {
            let dbus = RazerDbusClientBlocking::new()?;
            let devices = dbus.devices()?;
            apply_advanced_fx(&devices, &TargetKeyboard::default(), &matrix, brightness)?;
        }
        Command::DeviceInfo => {
            let dbus = RazerDbusClientBlocking::new()?;
            print_device_info(&dbus)?;
        }
        Command::KeyboardMatrix => {
            info!("Keyboard matrix: \n{matrix}");
        }
        Command::ShowColourPal => show_colourpal(palette),
    }
    Ok(())
}

fn print_device_info(
    dbus: &RazerDbusClientBlocking<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    match dbus.daemon_version() {
        Ok(v) => info!("openrazer-daemon v{v}"),
        Err(e) => error!("Could not get daemon version: {e}"),
    }

    let devices = dbus.devices()?;
    for (idx, info) in read_device_infos(&devices).into_iter().enumerate() {
        let info = match info {
            Ok(info) => info,
            Err(e) => {
                error!("Device {idx}: {e}");
                continue;
            }
        };
        info!("Device {idx}");
        info!("  device.type: {}", info.device_type);
        info!("  device.name: {}", info.name);
        info!("  device.keyboard_layout: {}", info.keyboard_layout);
        info!("  device.brightness: {:.6}", info.brightness);
    }
    Ok(())
}

fn show_colourpal(palette: &ColourPalette) {
    println!("Palette: {}", palette.name());
    for (idx, c) in palette.iter().enumerate() {
        let razer_fx::Colour(r, g, b) = *c;
        println!("  {idx}: \x1b[48;2;{r};{g};{b}m        \x1b[0m {c} ({r}, {g}, {b})");
    }
}
