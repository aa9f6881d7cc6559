use glam::Vec3;

use crate::particle::Particle;

/// Push-out happens at this multiple of the sphere radius, not at the
/// rendered surface itself.
pub const SURFACE_MARGIN: f32 = 1.1;

/// A static sphere the cloth cannot enter.
///
/// Passive data: `center` may be repositioned between frames by the owner,
/// but nothing in the solver moves it.
#[derive(Clone, Copy, Debug)]
pub struct SphereCollider {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereCollider {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Push every penetrating particle radially out to the inflated radius.
    ///
    /// Uses forced corrections: colliders displace even pinned particles.
    /// A particle coincident with the center has no push direction and is
    /// left in place.
    pub fn resolve(&self, particles: &mut [Particle]) {
        let inflated = self.radius * SURFACE_MARGIN;
        for p in particles.iter_mut() {
            let to_particle = p.position - self.center;
            let dist = to_particle.length();
            if dist < inflated && dist > 1e-6 {
                p.apply_correction_forced(to_particle / dist * (inflated - dist));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penetrating_particle_lands_on_inflated_radius() {
        let ball = SphereCollider::new(Vec3::ZERO, 1.0);
        let mut particles =
            vec![Particle::new(0.1, Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO)];

        ball.resolve(&mut particles);

        let dist = particles[0].position.length();
        assert!(
            (dist - SURFACE_MARGIN).abs() < 1e-6,
            "expected push-out to {SURFACE_MARGIN}, got {dist}"
        );
        // Pushed along the original separation direction.
        assert!(particles[0].position.x > 0.0);
        assert_eq!(particles[0].position.y, 0.0);
        assert_eq!(particles[0].position.z, 0.0);
    }

    #[test]
    fn pinned_particle_is_still_pushed() {
        let ball = SphereCollider::new(Vec3::ZERO, 1.0);
        let mut particles =
            vec![Particle::new(0.0, Vec3::new(0.0, -0.9, 0.0), Vec3::ZERO)];

        ball.resolve(&mut particles);

        let dist = particles[0].position.length();
        assert!((dist - SURFACE_MARGIN).abs() < 1e-6);
        assert!(particles[0].position.y < 0.0, "direction must be preserved");
    }

    #[test]
    fn particle_outside_margin_is_untouched() {
        let ball = SphereCollider::new(Vec3::ZERO, 1.0);
        let start = Vec3::new(1.2, 0.0, 0.0);
        let mut particles = vec![Particle::new(0.1, start, Vec3::ZERO)];

        ball.resolve(&mut particles);
        assert_eq!(particles[0].position, start);
    }

    #[test]
    fn particle_at_center_is_left_in_place() {
        let ball = SphereCollider::new(Vec3::ONE, 1.0);
        let mut particles = vec![Particle::new(0.1, Vec3::ONE, Vec3::ZERO)];

        ball.resolve(&mut particles);
        assert_eq!(particles[0].position, Vec3::ONE);
    }
}
