//! Build script for escapement-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time
//! - Generates the `CLOCK_CONFIG` constant the firmware boots with

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use escapement_core::config::ClockConfig;
use serde::Deserialize;

/// Layout of clock.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ClockFile {
    #[serde(default)]
    clock: ClockConfig,
}

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate clock.toml
fn load_config() -> ClockConfig {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        println!("cargo:warning=clock.toml not found, using reference configuration");
        return ClockConfig::DEFAULT;
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read clock.toml", &e.to_string()),
    };

    let file: ClockFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => fail("Invalid clock.toml", &e.to_string()),
    };

    if let Err(e) = file.clock.validate() {
        fail("Rejected clock configuration in clock.toml", &e.to_string());
    }

    println!("cargo:warning=clock.toml validated successfully");
    file.clock
}

/// Write `$OUT_DIR/clock_config.rs`
fn write_config(config: &ClockConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let source = format!(
        "/// Clock configuration from clock.toml\n\
         pub const CLOCK_CONFIG: ClockConfig = ClockConfig {{\n    \
             debounce_ms: {},\n    \
             long_press_ms: {},\n    \
             dwell_ms: {},\n    \
             steps_per_revolution: {},\n    \
             minute_period_s: {},\n    \
             hour_period_s: {},\n    \
             minute_hour_coupling: {},\n\
         }};\n",
        config.debounce_ms,
        config.long_press_ms,
        config.dwell_ms,
        config.steps_per_revolution,
        config.minute_period_s,
        config.hour_period_s,
        config.minute_hour_coupling,
    );

    fs::write(out_dir.join("clock_config.rs"), source).unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
