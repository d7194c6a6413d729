//! Prints the host processor's vendor string, maximum CPUID leaf, and
//! SIMD instruction-set support, one item per line.
//!
//! Takes no arguments. `RUST_LOG` controls diagnostic verbosity on stderr;
//! stdout carries only the report.

use std::process::ExitCode;

use log::debug;

use cpuprobe_core::{CpuId, ProbeReport};

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cpuid = match CpuId::new() {
        Ok(cpuid) => cpuid,
        Err(err) => {
            eprintln!("cpuprobe: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = ProbeReport::detect(&cpuid);
    print!("{}", report);

    if let Some(brand) = cpuid.brand_string() {
        debug!("brand string: {}", brand);
    }
    debug!("max extended leaf: {:#x}", cpuid.max_extended_leaf());

    ExitCode::SUCCESS
}
