use cloth_core::{
    Cloth, ClothConfig, SimulationContext, SolveMode, SphereCollider,
};
use glam::Vec3;
use wasm_bindgen::prelude::*;

/// The driver clamps frame deltas to this bound (~30fps) so integration
/// error stays bounded at low frame rates.
const MAX_DT: f32 = 0.033;

/// GPU-compatible vertex: 16 bytes, position + padding.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    _pad: f32,          //  4 bytes
}

/// Sphere figure the cloth drops onto. Radii and centers captured from a
/// posed character, in cloth-local meters.
const SCENE_BALLS: [(f32, f32, f32, f32); 27] = [
    (0.1, -0.00964272, 0.00487864, -0.00019705296),
    (0.08, 0.00054020714, -0.095394075, -0.0036351085),
    (0.100999996, 0.15198378, -0.22183715, -0.017068058),
    (0.0845, 0.07931688, -0.18869743, -0.011383),
    (0.068, 0.006649964, -0.1555577, -0.005697942),
    (0.100999996, -0.131352, -0.20754479, -0.043588962),
    (0.0845, -0.062351022, -0.18155125, -0.024643453),
    (0.093399994, 0.2420846, -0.21270585, -0.040538955),
    (0.0866, 0.33278927, -0.23020619, -0.059466075),
    (0.08, 0.42082617, -0.24719185, -0.07783651),
    (0.093399994, -0.21404074, -0.20185287, -0.055183973),
    (0.0866, -0.29637498, -0.22534016, -0.059819847),
    (0.08, -0.37628764, -0.24813664, -0.06431937),
    (0.07339999, 0.50924724, -0.25322366, -0.08937363),
    (0.066599995, 0.60034776, -0.25943828, -0.10126037),
    (0.06, 0.68876886, -0.2654701, -0.1127975),
    (0.07339999, -0.47129363, -0.2560258, -0.07179497),
    (0.066599995, -0.5691786, -0.26415402, -0.079497114),
    (0.06, -0.6641846, -0.2720432, -0.08697271),
    (0.105000004, 0.08969513, -0.3231805, -0.0020129606),
    (0.11, 0.09738652, -0.45480677, 0.02527158),
    (0.114999995, 0.1050779, -0.58643305, 0.05255612),
    (0.12, 0.11276928, -0.7180593, 0.07984066),
    (0.105000004, -0.066214666, -0.3246228, -0.009860255),
    (0.11, -0.07034518, -0.4660233, 0.023834959),
    (0.114999995, -0.07447569, -0.6074238, 0.057530172),
    (0.12, -0.07860621, -0.74882424, 0.091225386),
];

#[wasm_bindgen]
pub struct ClothWorld {
    cloth: Cloth,
    context: SimulationContext,
    colliders: Vec<SphereCollider>,
    vertex_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl ClothWorld {
    /// Build the default scene: a cols x rows cloth above the sphere
    /// figure, starting in XPBD(Fat).
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize) -> Result<ClothWorld, JsValue> {
        let config = ClothConfig {
            cols,
            rows,
            ..ClothConfig::default()
        };
        let cloth = Cloth::new(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        web_sys::console::log_1(
            &format!(
                "WASM ClothWorld created: {}x{} particles, {} constraints",
                cols,
                rows,
                cloth.constraints.len()
            )
            .into(),
        );

        let colliders = SCENE_BALLS
            .iter()
            .map(|&(radius, x, y, z)| SphereCollider::new(Vec3::new(x, y, z), radius))
            .collect();

        let vertex_buffer = vec![
            GpuVertex {
                position: [0.0; 3],
                _pad: 0.0,
            };
            cols * rows
        ];

        let mut world = ClothWorld {
            cloth,
            context: SimulationContext::new(SolveMode::Fat),
            colliders,
            vertex_buffer,
        };
        world.write_vertex_buffer();
        Ok(world)
    }

    /// Step the simulation. Returns total elapsed milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        let dt = dt.min(MAX_DT);
        self.cloth.step(&mut self.context, dt, &self.colliders);
        self.write_vertex_buffer();
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn vertex_buffer_ptr(&self) -> *const f32 {
        self.vertex_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn vertex_buffer_byte_length(&self) -> usize {
        self.vertex_buffer.len() * std::mem::size_of::<GpuVertex>()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.cloth.particles.len()
    }

    #[wasm_bindgen]
    pub fn cols(&self) -> usize {
        self.cloth.cols()
    }

    #[wasm_bindgen]
    pub fn rows(&self) -> usize {
        self.cloth.rows()
    }

    /// Index buffer for the mesh: two triangles per grid cell. The renderer
    /// alternates cell colors for the checkerboard.
    #[wasm_bindgen]
    pub fn triangle_indices(&self) -> Vec<u32> {
        let (cols, rows) = (self.cloth.cols(), self.cloth.rows());
        let mut indices = Vec::with_capacity((cols - 1) * (rows - 1) * 6);
        for w in 0..cols - 1 {
            for h in 0..rows - 1 {
                let i = |w: usize, h: usize| self.cloth.index(w, h) as u32;
                indices.extend_from_slice(&[
                    i(w + 1, h),
                    i(w, h),
                    i(w, h + 1),
                    i(w + 1, h + 1),
                    i(w + 1, h),
                    i(w, h + 1),
                ]);
            }
        }
        indices
    }

    // --- input collaborator ---

    /// Select by position in the mode list (0 = PBD .. 7 = XPBD(Fat)).
    #[wasm_bindgen]
    pub fn set_mode(&mut self, index: usize) {
        if let Some(mode) = SolveMode::ALL.get(index) {
            self.context.set_mode(*mode);
        }
    }

    #[wasm_bindgen]
    pub fn next_mode(&mut self) {
        self.context.next_mode();
    }

    #[wasm_bindgen]
    pub fn prev_mode(&mut self) {
        self.context.prev_mode();
    }

    #[wasm_bindgen]
    pub fn increment_iterations(&mut self) {
        self.context.increment_iterations();
    }

    #[wasm_bindgen]
    pub fn decrement_iterations(&mut self) {
        self.context.decrement_iterations();
    }

    // --- collider management ---

    #[wasm_bindgen]
    pub fn clear_colliders(&mut self) {
        self.colliders.clear();
    }

    #[wasm_bindgen]
    pub fn add_collider(&mut self, x: f32, y: f32, z: f32, radius: f32) {
        self.colliders
            .push(SphereCollider::new(Vec3::new(x, y, z), radius));
    }

    #[wasm_bindgen]
    pub fn move_collider(&mut self, index: usize, x: f32, y: f32, z: f32) {
        if let Some(ball) = self.colliders.get_mut(index) {
            ball.center = Vec3::new(x, y, z);
        }
    }

    #[wasm_bindgen]
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    // --- HUD collaborator ---

    #[wasm_bindgen]
    pub fn mode_label(&self) -> String {
        self.context.mode_label().to_string()
    }

    #[wasm_bindgen]
    pub fn iteration_count(&self) -> u32 {
        self.context.iteration_count()
    }

    /// Milliseconds spent in constraint relaxation last frame.
    #[wasm_bindgen]
    pub fn last_solve_ms(&self) -> f32 {
        self.context.last_solve_duration_ms()
    }
}

impl ClothWorld {
    fn write_vertex_buffer(&mut self) {
        for (v, p) in self.vertex_buffer.iter_mut().zip(self.cloth.particles.iter()) {
            v.position = p.position.to_array();
        }
    }
}
