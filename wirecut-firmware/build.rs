//! Build script for wirecut-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates rig.toml at compile time
//! - Generates the `RIG` calibration constant from rig.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// (section, key, field of RigConfig, upper bound)
const RIG_KEYS: &[(&str, &str, &str, i64)] = &[
    ("feed", "radius_mm", "feed_radius_mm", 1_000),
    ("feed", "steps_per_revolution", "steps_per_revolution", 1_000_000),
    ("feed", "step_half_period_us", "step_half_period_us", 100_000),
    ("cutter", "valve_switch_ms", "valve_switch_ms", 60_000),
    ("cutter", "settle_ms", "settle_ms", 60_000),
    ("machine", "error_hold_ms", "error_hold_ms", 600_000),
];

fn main() {
    setup_linker();
    let values = validate_config();
    generate_rig_config(&values);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

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

/// Validate rig.toml configuration at compile time
///
/// Returns the validated values in `RIG_KEYS` order.
fn validate_config() -> Vec<u32> {
    println!("cargo:rerun-if-changed=rig.toml");

    let config_path = Path::new("rig.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: rig.toml not found!                                      ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a rig.toml calibration file.              ║\n\
            ║  Please create one in the wirecut-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read rig.toml                                  ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in rig.toml                          ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let mut values = Vec::with_capacity(RIG_KEYS.len());

    for (section, key, _, max) in RIG_KEYS {
        let table = match config.get(section) {
            Some(toml::Value::Table(t)) => t,
            Some(_) => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
            None => {
                errors.push(format!("missing [{}] section", section));
                continue;
            }
        };

        match table.get(*key) {
            Some(toml::Value::Integer(v)) if *v >= 1 && *v <= *max => values.push(*v as u32),
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("[{}] {} must be 1-{}", section, key, max));
            }
            Some(_) => {
                errors.push(format!("[{}] {} must be an integer", section, key));
            }
            None => {
                errors.push(format!("[{}] missing '{}'", section, key));
            }
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid rig configuration                                ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=rig.toml validated successfully");
    values
}

/// Write `rig_config.rs` into OUT_DIR
fn generate_rig_config(values: &[u32]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let fields = RIG_KEYS
        .iter()
        .zip(values)
        .map(|((_, _, field, _), value)| format!("    {}: {},\n", field, value))
        .collect::<String>();

    let source = format!(
        "// Generated from rig.toml by build.rs\n\
         pub const RIG: wirecut_core::config::RigConfig = wirecut_core::config::RigConfig {{\n{}}};\n",
        fields
    );

    fs::write(out_dir.join("rig_config.rs"), source).unwrap();
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
