//! Process-wide gate library and gate selection
//!
//! [`GateLibrary`] holds one immutable instance of every fixed gate, keyed by
//! name. It is built on first use and never modified afterwards, so it can be
//! shared freely between threads.
//!
//! ```rust
//! use qubitviz_core::Gate;
//! use qubitviz_gates::library::GateLibrary;
//!
//! let library = GateLibrary::global();
//! let h = library.get("h").unwrap();
//! assert_eq!(h.name(), "H");
//!
//! let r = GateLibrary::phase(std::f64::consts::PI);
//! assert_eq!(r.name(), "Rφ");
//! ```

use crate::error::{GateError, Result};
use crate::standard::{CNot, Hadamard, Identity, PauliX, PauliY, PauliZ, PhaseRotation};
use qubitviz_core::Gate;
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

static GLOBAL_LIBRARY: OnceLock<GateLibrary> = OnceLock::new();

/// Immutable catalog of the fixed gates
#[derive(Debug)]
pub struct GateLibrary {
    gates: BTreeMap<String, Arc<dyn Gate>>,
}

impl GateLibrary {
    /// Build a library holding I, H, X, Y, Z and CNOT
    pub fn standard() -> Self {
        let fixed: [Arc<dyn Gate>; 6] = [
            Arc::new(Identity),
            Arc::new(Hadamard),
            Arc::new(PauliX),
            Arc::new(PauliY),
            Arc::new(PauliZ),
            Arc::new(CNot),
        ];

        let gates = fixed
            .into_iter()
            .map(|gate| (gate.name().to_ascii_uppercase(), gate))
            .collect();
        Self { gates }
    }

    /// The shared library, built on first access
    pub fn global() -> &'static GateLibrary {
        GLOBAL_LIBRARY.get_or_init(Self::standard)
    }

    /// Look up a fixed gate by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn Gate>> {
        self.gates.get(&name.to_ascii_uppercase()).cloned()
    }

    /// Look up a fixed gate, failing with [`GateError::UnknownGate`]
    pub fn require(&self, name: &str) -> Result<Arc<dyn Gate>> {
        self.get(name).ok_or_else(|| GateError::UnknownGate(name.to_string()))
    }

    /// Construct the phase rotation Rφ for `angle` radians
    pub fn phase(angle: f64) -> PhaseRotation {
        PhaseRotation::new(angle)
    }

    /// Names of all fixed gates in sorted order
    pub fn gate_names(&self) -> Vec<&str> {
        self.gates.keys().map(String::as_str).collect()
    }

    /// Fixed gates acting on exactly `num_qubits` qubits
    pub fn gates_for_qubits(&self, num_qubits: usize) -> Vec<Arc<dyn Gate>> {
        self.gates
            .values()
            .filter(|gate| gate.num_qubits() == num_qubits)
            .cloned()
            .collect()
    }

    /// Number of fixed gates
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// A single-qubit gate the user can select
///
/// `Phase` carries the user-facing multiplier; the rotation angle is
/// `multiplier · π` radians.
///
/// Parses from `"h"`, `"x"`, `"y"`, `"z"`, `"i"` or `"phase:<multiplier>"`
/// (also `"rphi:<multiplier>"`), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateKind {
    Identity,
    Hadamard,
    PauliX,
    PauliY,
    PauliZ,
    Phase(f64),
}

impl GateKind {
    /// Resolve the selection to a concrete gate
    ///
    /// Fixed gates come from [`GateLibrary::global`]; only `Phase` is built
    /// on demand.
    ///
    /// # Errors
    /// Returns [`GateError::InvalidMultiplier`] when `multiplier · π` is not
    /// finite.
    pub fn gate(&self) -> Result<Arc<dyn Gate>> {
        match self {
            GateKind::Phase(multiplier) => {
                Ok(Arc::new(GateLibrary::phase(phase_angle(*multiplier)?)))
            }
            fixed => GateLibrary::global().require(&fixed.label()),
        }
    }

    /// Short label, e.g. `"H"` or `"Rφ(0.500π)"`
    pub fn label(&self) -> String {
        match self {
            GateKind::Identity => "I".to_string(),
            GateKind::Hadamard => "H".to_string(),
            GateKind::PauliX => "X".to_string(),
            GateKind::PauliY => "Y".to_string(),
            GateKind::PauliZ => "Z".to_string(),
            GateKind::Phase(multiplier) => format!("Rφ({:.3}π)", multiplier),
        }
    }
}

/// Rotation angle in radians for a user-facing multiplier of π
fn phase_angle(multiplier: f64) -> Result<f64> {
    let angle = multiplier * PI;
    if angle.is_finite() {
        Ok(angle)
    } else {
        Err(GateError::InvalidMultiplier(multiplier.to_string()))
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for GateKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if let Some((head, arg)) = lower.split_once(':') {
            if head != "phase" && head != "rphi" {
                return Err(GateError::UnknownGate(trimmed.to_string()));
            }
            let invalid = || GateError::InvalidMultiplier(arg.trim().to_string());
            let multiplier: f64 = arg.trim().parse().map_err(|_| invalid())?;
            phase_angle(multiplier).map_err(|_| invalid())?;
            return Ok(GateKind::Phase(multiplier));
        }

        match lower.as_str() {
            "i" | "id" | "identity" => Ok(GateKind::Identity),
            "h" | "hadamard" => Ok(GateKind::Hadamard),
            "x" => Ok(GateKind::PauliX),
            "y" => Ok(GateKind::PauliY),
            "z" => Ok(GateKind::PauliZ),
            _ => Err(GateError::UnknownGate(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_library_contents() {
        let library = GateLibrary::standard();
        assert_eq!(library.len(), 6);
        assert_eq!(library.gate_names(), vec!["CNOT", "H", "I", "X", "Y", "Z"]);
        assert_eq!(library.gates_for_qubits(1).len(), 5);
        assert_eq!(library.gates_for_qubits(2).len(), 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let library = GateLibrary::global();
        assert_eq!(library.get("cnot").unwrap().name(), "CNOT");
        assert_eq!(library.get("X").unwrap().name(), "X");
        assert!(library.get("T").is_none());
        assert_eq!(
            library.require("swap").unwrap_err(),
            GateError::UnknownGate("swap".to_string())
        );
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(GateLibrary::global(), GateLibrary::global()));
    }

    #[test]
    fn test_parse_gate_kind() {
        assert_eq!("H".parse::<GateKind>().unwrap(), GateKind::Hadamard);
        assert_eq!(" z ".parse::<GateKind>().unwrap(), GateKind::PauliZ);
        assert_eq!("phase:0.5".parse::<GateKind>().unwrap(), GateKind::Phase(0.5));
        assert_eq!("RPHI: -2".parse::<GateKind>().unwrap(), GateKind::Phase(-2.0));
        assert!(matches!("q".parse::<GateKind>(), Err(GateError::UnknownGate(_))));
        assert!(matches!("phase:abc".parse::<GateKind>(), Err(GateError::InvalidMultiplier(_))));
        assert!(matches!("phase:inf".parse::<GateKind>(), Err(GateError::InvalidMultiplier(_))));
        assert!(matches!("phase:nan".parse::<GateKind>(), Err(GateError::InvalidMultiplier(_))));
        assert!(matches!("phase:1e308".parse::<GateKind>(), Err(GateError::InvalidMultiplier(_))));
        assert!(matches!("swap:1".parse::<GateKind>(), Err(GateError::UnknownGate(_))));
    }

    #[test]
    fn test_phase_kind_scales_by_pi() {
        let gate = GateKind::Phase(0.5).gate().unwrap();
        let m = gate.matrix();
        assert_relative_eq!(m[(1, 1)].re, 0.0, epsilon = 1e-15);
        assert_relative_eq!(m[(1, 1)].im, 1.0);
    }

    #[test]
    fn test_phase_kind_rejects_overflowing_angle() {
        // 1e308 is finite but 1e308·π is not
        let err = GateKind::Phase(1e308).gate().unwrap_err();
        assert!(matches!(err, GateError::InvalidMultiplier(_)));
        assert!(GateKind::Phase(f64::NAN).gate().is_err());
        assert!(GateKind::Phase(-1e308).gate().is_err());
    }

    #[test]
    fn test_fixed_kinds_resolve_through_global_library() {
        let library = GateLibrary::global();
        for kind in [
            GateKind::Identity,
            GateKind::Hadamard,
            GateKind::PauliX,
            GateKind::PauliY,
            GateKind::PauliZ,
        ] {
            let gate = kind.gate().unwrap();
            let shared = library.get(&kind.label()).unwrap();
            assert!(Arc::ptr_eq(&gate, &shared), "{kind} was not the shared instance");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(GateKind::Hadamard.to_string(), "H");
        assert_eq!(GateKind::Phase(0.25).label(), "Rφ(0.250π)");
    }
}
