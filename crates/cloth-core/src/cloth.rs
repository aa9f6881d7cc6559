use glam::Vec3;

use crate::collider::SphereCollider;
use crate::config::ClothConfig;
use crate::constraint::{self, ConstraintKind, DistanceConstraint};
use crate::context::SimulationContext;
use crate::error::{ClothError, ClothResult};
use crate::particle::Particle;

/// Wall clock for the solve-time diagnostic. `std::time::Instant` is
/// unsupported on `wasm32-unknown-unknown`, so the wasm build reads
/// `Date.now()` instead.
#[cfg(not(target_arch = "wasm32"))]
mod clock {
    use std::time::Instant;

    pub fn start() -> Instant {
        Instant::now()
    }

    pub fn elapsed_ms(start: Instant) -> f32 {
        start.elapsed().as_secs_f32() * 1000.0
    }
}

#[cfg(target_arch = "wasm32")]
mod clock {
    pub fn start() -> f64 {
        js_sys::Date::now()
    }

    pub fn elapsed_ms(start: f64) -> f32 {
        (js_sys::Date::now() - start) as f32
    }
}

/// A rectangular cloth mesh: a particle arena plus a distance-constraint
/// graph over the grid topology.
///
/// Particles live in a flat `row * cols + col` array; constraints refer to
/// them by index. The constraint list is built once at construction and its
/// order is the relaxation order for every sweep.
pub struct Cloth {
    cols: usize,
    rows: usize,
    pub particles: Vec<Particle>,
    pub constraints: Vec<DistanceConstraint>,
}

impl Cloth {
    /// Build a flat, horizontally centered grid with uniform inverse mass
    /// and the three constraint families (structural, shear, bend).
    ///
    /// No particle is pinned.
    pub fn new(config: &ClothConfig) -> ClothResult<Self> {
        if config.cols < 2 || config.rows < 2 {
            return Err(ClothError::InvalidGridDimensions {
                cols: config.cols,
                rows: config.rows,
            });
        }
        if !(config.width > 0.0) || !(config.height > 0.0) {
            return Err(ClothError::InvalidClothSize {
                width: config.width,
                height: config.height,
            });
        }

        let (cols, rows) = (config.cols, config.rows);
        let mut particles = Vec::with_capacity(cols * rows);
        for h in 0..rows {
            for w in 0..cols {
                let position = Vec3::new(
                    config.width * (w as f32 / cols as f32) - config.width * 0.5,
                    config.plane_height,
                    -config.height * (h as f32 / rows as f32) + config.height * 0.5,
                );
                particles.push(Particle::new(
                    config.particle_inv_mass,
                    position,
                    config.gravity,
                ));
            }
        }

        let mut cloth = Self {
            cols,
            rows,
            particles,
            constraints: Vec::new(),
        };

        // Structural and shear families, one pass per cell.
        for w in 0..cols {
            for h in 0..rows {
                if w < cols - 1 {
                    cloth.link(w, h, w + 1, h, ConstraintKind::Structural, config.stiffness);
                }
                if h < rows - 1 {
                    cloth.link(w, h, w, h + 1, ConstraintKind::Structural, config.stiffness);
                }
                if w < cols - 1 && h < rows - 1 {
                    cloth.link(w, h, w + 1, h + 1, ConstraintKind::Shear, config.stiffness);
                    cloth.link(w + 1, h, w, h + 1, ConstraintKind::Shear, config.stiffness);
                }
            }
        }
        // Bend family: distance-2 along both axes and both diagonals.
        for w in 0..cols {
            for h in 0..rows {
                if w < cols - 2 {
                    cloth.link(w, h, w + 2, h, ConstraintKind::Bend, config.stiffness);
                }
                if h < rows - 2 {
                    cloth.link(w, h, w, h + 2, ConstraintKind::Bend, config.stiffness);
                }
                if w < cols - 2 && h < rows - 2 {
                    cloth.link(w, h, w + 2, h + 2, ConstraintKind::Bend, config.stiffness);
                    cloth.link(w + 2, h, w, h + 2, ConstraintKind::Bend, config.stiffness);
                }
            }
        }

        Ok(cloth)
    }

    fn link(&mut self, w1: usize, h1: usize, w2: usize, h2: usize, kind: ConstraintKind, stiffness: f32) {
        let a = self.index(w1, h1);
        let b = self.index(w2, h2);
        let rest_length =
            (self.particles[a].position - self.particles[b].position).length();
        self.constraints.push(DistanceConstraint::new(
            a as u32, b as u32, kind, rest_length, stiffness,
        ));
    }

    /// Advance the simulation by one frame.
    ///
    /// Integrates every particle, resets the constraint accumulators, then
    /// runs `context.iteration_count()` sweeps: collider push-out followed by
    /// one in-order relaxation of every constraint. The wall-clock time of
    /// the relaxation portion, summed over the sweeps, lands in
    /// `context.last_solve_duration_ms`.
    ///
    /// `dt` must be positive; the driver is expected to clamp it.
    pub fn step(
        &mut self,
        context: &mut SimulationContext,
        dt: f32,
        colliders: &[SphereCollider],
    ) {
        debug_assert!(dt > 0.0, "dt must be positive, got {dt}");

        for p in self.particles.iter_mut() {
            p.integrate(dt);
        }
        constraint::reset_lambdas(&mut self.constraints);

        let mode = context.mode();
        let mut solve_ms = 0.0_f32;
        for _ in 0..context.iteration_count() {
            for ball in colliders {
                ball.resolve(&mut self.particles);
            }
            let sweep = clock::start();
            constraint::relax_all(&mut self.constraints, &mut self.particles, mode, dt);
            solve_ms += clock::elapsed_ms(sweep);
        }
        context.record_solve_duration(solve_ms);
    }

    /// Flat index of the particle at grid coordinates (col, row).
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Position of the particle at grid coordinates (col, row).
    pub fn position(&self, col: usize, row: usize) -> Vec3 {
        self.particles[self.index(col, row)].position
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Constraint totals per family: (structural, shear, bend).
    pub fn constraint_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for c in &self.constraints {
            match c.kind {
                ConstraintKind::Structural => counts.0 += 1,
                ConstraintKind::Shear => counts.1 += 1,
                ConstraintKind::Bend => counts.2 += 1,
            }
        }
        counts
    }
}
