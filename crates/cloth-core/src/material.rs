/// Solver mode: classical PBD, or XPBD with a material compliance.
///
/// Compliance values are taken from measured Young's moduli
/// (Macklin et al., "XPBD: Position-Based Simulation of Compliant
/// Constrained Dynamics", 2016).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveMode {
    /// Direct positional projection; stiffness is iteration-dependent.
    Pbd,
    Concrete,
    Wood,
    Leather,
    Tendon,
    Rubber,
    Muscle,
    Fat,
}

/// Display label and distance-constraint compliance for one mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProfile {
    pub label: &'static str,
    /// Compliance in m^2/N. 0.0 = infinitely stiff.
    pub compliance: f32,
}

impl SolveMode {
    /// All modes, in HUD/cycling order.
    pub const ALL: [SolveMode; 8] = [
        SolveMode::Pbd,
        SolveMode::Concrete,
        SolveMode::Wood,
        SolveMode::Leather,
        SolveMode::Tendon,
        SolveMode::Rubber,
        SolveMode::Muscle,
        SolveMode::Fat,
    ];

    /// Label and compliance for this mode, from a single lookup.
    pub const fn profile(self) -> MaterialProfile {
        match self {
            SolveMode::Pbd => MaterialProfile {
                label: "PBD",
                compliance: 0.0,
            },
            SolveMode::Concrete => MaterialProfile {
                label: "XPBD(Concrete)",
                compliance: 4.0e-11,
            },
            SolveMode::Wood => MaterialProfile {
                label: "XPBD(Wood)",
                compliance: 1.6e-10,
            },
            SolveMode::Leather => MaterialProfile {
                label: "XPBD(Leather)",
                compliance: 1.0e-9,
            },
            SolveMode::Tendon => MaterialProfile {
                label: "XPBD(Tendon)",
                compliance: 2.0e-9,
            },
            SolveMode::Rubber => MaterialProfile {
                label: "XPBD(Rubber)",
                compliance: 1.0e-7,
            },
            SolveMode::Muscle => MaterialProfile {
                label: "XPBD(Muscle)",
                compliance: 2.0e-5,
            },
            SolveMode::Fat => MaterialProfile {
                label: "XPBD(Fat)",
                compliance: 1.0e-4,
            },
        }
    }

    pub const fn label(self) -> &'static str {
        self.profile().label
    }

    pub const fn compliance(self) -> f32 {
        self.profile().compliance
    }

    /// True for every mode solved with the compliant (XPBD) formula.
    pub const fn is_xpbd(self) -> bool {
        !matches!(self, SolveMode::Pbd)
    }

    /// The next-softer mode, clamped at the end of the list.
    pub fn next(self) -> SolveMode {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap();
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// The next-stiffer mode, clamped at the start of the list.
    pub fn prev(self) -> SolveMode {
        let i = Self::ALL.iter().position(|m| *m == self).unwrap();
        Self::ALL[i.saturating_sub(1)]
    }
}
