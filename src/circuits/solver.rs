//! Phasor solver for the fixed two-branch topology.

use tracing::{debug, trace};

use crate::constants::angular_frequency;
use crate::math::{CScalar, Scalar};
use crate::phasor_set::LabeledPhasorSet;

use super::component::{Capacitor, Component, Inductor, Resistor};
use super::network::{ConnectionKind, Network};
use super::parameters::CircuitParameters;
use super::report::{CircuitReport, ReportSection};
use super::CircuitError;

/// Every phasor derived from one set of [`CircuitParameters`].
///
/// Naming follows the circuit: branch 1 holds `C`, `R1`, `R2`; branch 2 holds `R3`, `L`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitState {
    omega: Scalar,
    v_ref: CScalar,
    z_c: CScalar,
    z_l: CScalar,
    z_branch1: CScalar,
    z_branch2: CScalar,
    z_total: CScalar,
    i_total: CScalar,
    i_branch1: CScalar,
    i_branch2: CScalar,
    v_c: CScalar,
    v_r1: CScalar,
    v_r2: CScalar,
    v_r3: CScalar,
    v_l: CScalar,
}

/// Solves the circuit at the source frequency.
///
/// Parameters are validated first; on error nothing is computed.
pub fn solve(params: &CircuitParameters) -> Result<CircuitState, CircuitError> {
    params.validate()?;

    let omega = angular_frequency(params.frequency_hz);
    let v_ref = params.v_ref;

    let capacitor = Capacitor::new("C", params.capacitance_f);
    let inductor = Inductor::new("L", params.inductance_h);
    let r1 = Resistor::new("R1", params.r1_ohms);
    let r2 = Resistor::new("R2", params.r2_ohms);
    let r3 = Resistor::new("R3", params.r3_ohms);

    let z_c = capacitor.impedance(omega);
    let z_l = inductor.impedance(omega);
    let z_r1 = r1.impedance(omega);
    let z_r2 = r2.impedance(omega);
    let z_r3 = r3.impedance(omega);

    let branch1 = Network::new("branch1", ConnectionKind::Series)
        .with_component(capacitor)
        .with_component(r1)
        .with_component(r2);
    let branch2 = Network::new("branch2", ConnectionKind::Series)
        .with_component(r3)
        .with_component(inductor);
    let z_branch1 = branch1.impedance(omega);
    let z_branch2 = branch2.impedance(omega);

    let total = Network::new("total", ConnectionKind::Parallel)
        .with_component(branch1)
        .with_component(branch2);
    let z_total = total.impedance(omega);
    trace!(?total, "composed network");

    let i_total = v_ref / z_total;
    let i_branch1 = v_ref / z_branch1;
    let i_branch2 = v_ref / z_branch2;

    let state = CircuitState {
        omega,
        v_ref,
        z_c,
        z_l,
        z_branch1,
        z_branch2,
        z_total,
        i_total,
        i_branch1,
        i_branch2,
        v_c: i_branch1 * z_c,
        v_r1: i_branch1 * z_r1,
        v_r2: i_branch1 * z_r2,
        v_r3: i_branch2 * z_r3,
        v_l: i_branch2 * z_l,
    };
    debug!(
        frequency_hz = params.frequency_hz,
        omega,
        z_total_mag = z_total.norm(),
        i_total_mag = i_total.norm(),
        "solved circuit"
    );
    Ok(state)
}

impl CircuitState {
    /// Angular frequency ω = 2πf in rad/s.
    #[must_use]
    pub fn omega(&self) -> Scalar {
        self.omega
    }

    /// Reference voltage, unchanged from the parameters.
    #[must_use]
    pub fn v_ref(&self) -> CScalar {
        self.v_ref
    }

    /// Capacitor impedance `1 / (jωC)`.
    #[must_use]
    pub fn z_c(&self) -> CScalar {
        self.z_c
    }

    /// Inductor impedance `jωL`.
    #[must_use]
    pub fn z_l(&self) -> CScalar {
        self.z_l
    }

    /// Branch 1 impedance `Z_C + R1 + R2`.
    #[must_use]
    pub fn z_branch1(&self) -> CScalar {
        self.z_branch1
    }

    /// Branch 2 impedance `R3 + Z_L`.
    #[must_use]
    pub fn z_branch2(&self) -> CScalar {
        self.z_branch2
    }

    /// Parallel combination of both branches.
    #[must_use]
    pub fn z_total(&self) -> CScalar {
        self.z_total
    }

    /// Source current `V_ref / Z_total`.
    #[must_use]
    pub fn i_total(&self) -> CScalar {
        self.i_total
    }

    /// Branch 1 current.
    #[must_use]
    pub fn i_branch1(&self) -> CScalar {
        self.i_branch1
    }

    /// Branch 2 current.
    #[must_use]
    pub fn i_branch2(&self) -> CScalar {
        self.i_branch2
    }

    /// Voltage across the capacitor.
    #[must_use]
    pub fn v_c(&self) -> CScalar {
        self.v_c
    }

    /// Voltage across R1.
    #[must_use]
    pub fn v_r1(&self) -> CScalar {
        self.v_r1
    }

    /// Voltage across R2.
    #[must_use]
    pub fn v_r2(&self) -> CScalar {
        self.v_r2
    }

    /// Voltage across R3.
    #[must_use]
    pub fn v_r3(&self) -> CScalar {
        self.v_r3
    }

    /// Voltage across the inductor.
    #[must_use]
    pub fn v_l(&self) -> CScalar {
        self.v_l
    }

    /// `V_ref` followed by the five component voltages.
    #[must_use]
    pub fn voltage_phasors(&self) -> LabeledPhasorSet {
        LabeledPhasorSet::new()
            .with("V_ref", self.v_ref)
            .with("V_C", self.v_c)
            .with("V_R1", self.v_r1)
            .with("V_R2", self.v_r2)
            .with("V_R3", self.v_r3)
            .with("V_L", self.v_l)
    }

    /// Total current followed by both branch currents.
    #[must_use]
    pub fn current_phasors(&self) -> LabeledPhasorSet {
        LabeledPhasorSet::new()
            .with("I_total", self.i_total)
            .with("I_ramo1", self.i_branch1)
            .with("I_ramo2", self.i_branch2)
    }

    /// Both branch impedances followed by the total.
    #[must_use]
    pub fn impedance_phasors(&self) -> LabeledPhasorSet {
        LabeledPhasorSet::new()
            .with("Z_ramo1", self.z_branch1)
            .with("Z_ramo2", self.z_branch2)
            .with("Z_total", self.z_total)
    }

    /// Formatted readouts grouped as impedances, currents and component voltages.
    #[must_use]
    pub fn report(&self) -> CircuitReport {
        CircuitReport::new(vec![
            ReportSection::from_set(
                "Impedances",
                &LabeledPhasorSet::new()
                    .with("Z Ramo 1 (C+R1+R2)", self.z_branch1)
                    .with("Z Ramo 2 (R3+L)", self.z_branch2)
                    .with("Z Total", self.z_total),
            ),
            ReportSection::from_set(
                "Currents",
                &LabeledPhasorSet::new()
                    .with("I Total", self.i_total)
                    .with("I Ramo 1", self.i_branch1)
                    .with("I Ramo 2", self.i_branch2),
            ),
            ReportSection::from_set(
                "Component voltages",
                &self
                    .voltage_phasors()
                    .into_iter()
                    .skip(1)
                    .collect::<LabeledPhasorSet>(),
            ),
        ])
    }
}
