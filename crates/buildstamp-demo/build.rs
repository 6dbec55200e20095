use std::env;
use std::path::PathBuf;

use buildstamp::{PropertySnapshot, SourceEmitter, TimestampPair};

/// Cargo- and rustc-provided variables worth stamping into the binary.
const CAPTURED_VARS: &[&str] = &[
    "CARGO_PKG_NAME",
    "CARGO_PKG_VERSION",
    "HOST",
    "TARGET",
    "PROFILE",
    "OPT_LEVEL",
    "RUSTC",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let raw: Vec<(String, String)> = CAPTURED_VARS
        .iter()
        .filter_map(|name| env::var(name).ok().map(|value| (name.to_string(), value)))
        .collect();

    let timestamps = TimestampPair::capture();
    let snapshot = PropertySnapshot::normalize(raw);
    let unit = SourceEmitter::emit("demo", "build_stamp", &snapshot, &timestamps);

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    unit.write_to_file(&out_dir.join("build_stamp.rs"))
        .expect("write generated build stamp");
}
