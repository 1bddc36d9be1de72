//! Rig calibration generated from rig.toml at build time

include!(concat!(env!("OUT_DIR"), "/rig_config.rs"));
