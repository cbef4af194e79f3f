//! Solves the default mixed RLC circuit, prints every readout and writes the
//! voltage and current diagrams as PNG files.
//!
//! Usage: `cargo run --example phasor_report -- [output-dir]`
//! Set `RUST_LOG=rlc_phasor=debug` to see solver and renderer events.

use std::path::PathBuf;

use rlc_phasor::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::args().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    // 1 kHz, 1 µF, 1000 µH, 1k/2k/3k, 10 V ∠ 0°.
    let params = CircuitParameters::default();
    let state = solve(&params).map_err(RlcError::from)?;

    println!("ω = {:.2} rad/s", state.omega());
    println!("V_ref = {}  ({})", format_polar(state.v_ref()), format_rectangular(state.v_ref()));
    println!();
    print!("{}", state.report());

    for (set, title, file) in [
        (state.voltage_phasors(), "Voltage phasor diagram", "voltages.png"),
        (state.current_phasors(), "Current phasor diagram", "currents.png"),
    ] {
        let png = render(&set, title).map_err(RlcError::from)?;
        let path = out_dir.join(file);
        std::fs::write(&path, &png)?;
        info!(path = %path.display(), bytes = png.len(), "wrote diagram");
    }
    Ok(())
}
