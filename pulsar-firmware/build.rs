//! Build script for pulsar-firmware
//!
//! - Sets up linker search paths and arguments for memory.x
//! - Validates pulse.toml and compiles it in as constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use pulsar_core::config::{PulseConfig, MAX_DUTY_CYCLE, MIN_DUTY_CYCLE};
use serde::Deserialize;

/// GPIO pins available on RP2040
const GPIO_COUNT: u8 = 30;

/// Layout of pulse.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FirmwareConfig {
    #[serde(default)]
    pulse: PulseConfig,
    button: Option<ButtonConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ButtonConfig {
    pin: u8,
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let config = validate_config();
    write_config(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate pulse.toml configuration at compile time
fn validate_config() -> FirmwareConfig {
    println!("cargo:rerun-if-changed=pulse.toml");

    let config_path = Path::new("pulse.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read pulse.toml", &[e.to_string()]),
    };

    let config: FirmwareConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid pulse.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    let pulse = &config.pulse;

    if pulse.period_ms == 0 {
        errors.push("[pulse] period_ms must be greater than 0".to_string());
    }
    if pulse.pin >= GPIO_COUNT {
        errors.push(format!("[pulse] pin must be 0-{}", GPIO_COUNT - 1));
    }
    if let Some(button) = &config.button {
        if button.pin >= GPIO_COUNT {
            errors.push(format!("[button] pin must be 0-{}", GPIO_COUNT - 1));
        }
        if button.pin == pulse.pin {
            errors.push("[button] pin must differ from [pulse] pin".to_string());
        }
    }

    if !errors.is_empty() {
        fail("Invalid pulse configuration", &errors);
    }

    if !pulse.duty_cycle_valid() {
        println!(
            "cargo:warning=pulse.toml duty_cycle {} is outside {}-{}, using {}%",
            pulse.duty_cycle,
            MIN_DUTY_CYCLE,
            MAX_DUTY_CYCLE,
            pulse.duty_percent()
        );
    }

    config
}

/// Emit the validated config as Rust constants
fn write_config(out_dir: &Path, config: &FirmwareConfig) {
    let pulse = &config.pulse;
    let button = match &config.button {
        Some(button) => format!("Some({})", button.pin),
        None => "None".to_string(),
    };

    let source = format!(
        "/// Pulse parameters from pulse.toml\n\
         pub const PULSE: PulseConfig = PulseConfig {{\n    \
             period_ms: {},\n    \
             pin: {},\n    \
             duty_cycle: {},\n\
         }};\n\n\
         /// Start/stop button pin from pulse.toml\n\
         pub const BUTTON_PIN: Option<u8> = {};\n",
        pulse.period_ms, pulse.pin, pulse.duty_cycle, button
    );

    fs::write(out_dir.join("pulse_config.rs"), source).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| format!("║  • {:<62} ║", line))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
