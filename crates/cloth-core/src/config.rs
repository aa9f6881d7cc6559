use glam::Vec3;

/// Construction parameters for a cloth grid.
#[derive(Clone, Copy, Debug)]
pub struct ClothConfig {
    /// Physical size along X, in meters.
    pub width: f32,
    /// Physical size along Z, in meters.
    pub height: f32,
    /// Particle count along X.
    pub cols: usize,
    /// Particle count along Z.
    pub rows: usize,
    /// Initial Y of the flat grid plane.
    pub plane_height: f32,
    pub gravity: Vec3,
    /// Uniform inverse mass given to every particle.
    pub particle_inv_mass: f32,
    /// PBD stiffness in [0, 1], shared by all constraint families.
    pub stiffness: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            width: 1.5,
            height: 1.5,
            cols: 40,
            rows: 40,
            plane_height: 0.3,
            gravity: Vec3::new(0.0, -0.8, 0.0),
            particle_inv_mass: 0.1,
            stiffness: 0.1,
        }
    }
}
