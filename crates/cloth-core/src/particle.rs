use glam::Vec3;

/// A point mass with Verlet state.
///
/// Velocity is implicit in the difference between `position` and
/// `prev_position`. An inverse mass of 0.0 marks the particle as pinned
/// (infinite mass): it ignores integration and unforced corrections.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Inverse mass. 0.0 = pinned/immovable.
    pub inv_mass: f32,
    pub position: Vec3,
    pub prev_position: Vec3,
    /// Constant external acceleration (gravity), fixed at construction.
    pub acceleration: Vec3,
}

impl Particle {
    /// Create a particle at rest: `prev_position` starts equal to `position`.
    pub fn new(inv_mass: f32, position: Vec3, acceleration: Vec3) -> Self {
        Self {
            inv_mass,
            position,
            prev_position: position,
            acceleration,
        }
    }

    /// Advance one Störmer–Verlet step. Pinned particles do not move.
    pub fn integrate(&mut self, dt: f32) {
        if self.inv_mass > 0.0 {
            let next = self.position + (self.position - self.prev_position)
                + self.acceleration * dt * dt;
            self.prev_position = self.position;
            self.position = next;
        }
    }

    /// Add a position correction, respecting pinning.
    ///
    /// Constraint projections go through here so pinned particles act as
    /// anchors.
    pub fn apply_correction(&mut self, delta: Vec3) {
        if self.inv_mass > 0.0 {
            self.position += delta;
        }
    }

    /// Add a position correction unconditionally.
    ///
    /// Collider push-out uses this path: colliders displace even pinned
    /// particles.
    pub fn apply_correction_forced(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Implicit Verlet velocity over the last step.
    pub fn velocity(&self, dt: f32) -> Vec3 {
        if dt <= f32::EPSILON {
            return Vec3::ZERO;
        }
        (self.position - self.prev_position) / dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_starts_at_rest() {
        let p = Particle::new(0.1, Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert_eq!(p.position, p.prev_position);
        assert_eq!(p.velocity(1.0 / 60.0), Vec3::ZERO);
    }

    #[test]
    fn integrate_applies_verlet_update() {
        let dt = 1.0 / 60.0;
        let gravity = Vec3::new(0.0, -0.8, 0.0);
        let mut p = Particle::new(0.1, Vec3::ZERO, gravity);
        p.integrate(dt);

        // At rest the only displacement is acceleration * dt^2.
        let expected = gravity * dt * dt;
        assert!(
            (p.position - expected).length() < 1e-7,
            "expected {expected}, got {}",
            p.position
        );
        assert_eq!(p.prev_position, Vec3::ZERO);

        // A second step carries the accumulated implicit velocity.
        let before = p.position;
        p.integrate(dt);
        assert!(p.position.y < before.y);
    }

    #[test]
    fn pinned_particle_ignores_integration_and_corrections() {
        let mut p = Particle::new(0.0, Vec3::ONE, Vec3::new(0.0, -9.8, 0.0));
        p.integrate(1.0 / 60.0);
        assert_eq!(p.position, Vec3::ONE);

        p.apply_correction(Vec3::X);
        assert_eq!(p.position, Vec3::ONE);
    }

    #[test]
    fn forced_correction_moves_pinned_particle() {
        let mut p = Particle::new(0.0, Vec3::ZERO, Vec3::ZERO);
        p.apply_correction_forced(Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(p.position, Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn free_particle_accepts_unforced_correction() {
        let mut p = Particle::new(1.0, Vec3::ZERO, Vec3::ZERO);
        p.apply_correction(Vec3::X);
        assert_eq!(p.position, Vec3::X);
    }
}
