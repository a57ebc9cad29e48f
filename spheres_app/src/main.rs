//! Sphere-field demo
//!
//! A camera orbits a field of randomly placed spheres, composing each
//! sphere's placement through the matrix stack and reading back the MVP and
//! normal matrices that a rendering backend would upload as uniforms. The
//! demo is headless: the matrices are the output, logged at trace level.

use firefly_engine::foundation::math::Mat4;
use firefly_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SPHERE_COUNT: usize = 50;
const FIELD_RADIUS: f32 = 20.0;
const DEMO_FRAMES: u32 = 600;
// Re-orthogonalize the camera basis after this many incremental rotations.
const NORMALIZE_INTERVAL: u32 = 100;

struct SpheresApp {
    camera: Frame,
    spheres: Vec<Frame>,
    model_view: MatrixStack,
    projection: MatrixStack,
    frames_run: u32,
}

impl SpheresApp {
    fn new() -> Self {
        Self {
            camera: Frame::new(),
            spheres: Vec::new(),
            model_view: MatrixStack::new(),
            projection: MatrixStack::new(),
            frames_run: 0,
        }
    }
}

impl Application for SpheresApp {
    fn load(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        // Fixed seed keeps the field identical across runs.
        let mut rng = StdRng::seed_from_u64(7);
        self.spheres = (0..SPHERE_COUNT)
            .map(|_| {
                let mut sphere = Frame::new();
                sphere.set_origin(Vec3::new(
                    rng.gen_range(-FIELD_RADIUS..FIELD_RADIUS),
                    0.0,
                    rng.gen_range(-FIELD_RADIUS..FIELD_RADIUS),
                ));
                sphere
            })
            .collect();

        self.camera.set_origin(Vec3::new(0.0, 1.0, FIELD_RADIUS));
        self.projection
            .load_matrix(&Mat4::new_perspective(16.0 / 9.0, 0.8, 0.5, 200.0));

        log::info!("sphere field ready: {} spheres", self.spheres.len());
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, dt: f32, _elapsed: f32) -> Result<(), AppError> {
        // Orbit: turn slowly while drifting forward.
        self.camera.rotate_local_y(dt * 12.0);
        self.camera.move_forward(dt * 2.0);

        self.frames_run += 1;
        if self.frames_run % NORMALIZE_INTERVAL == 0 {
            self.camera.normalize();
        }
        if self.frames_run >= DEMO_FRAMES {
            engine.quit();
        }
        Ok(())
    }

    fn render(&mut self, _engine: &mut Engine, _dt: f32, elapsed: f32) -> Result<(), AppError> {
        self.model_view.push();
        self.model_view.mult_matrix(&self.camera.camera_matrix(false));

        for (i, sphere) in self.spheres.iter().enumerate() {
            self.model_view.push();
            self.model_view.mult_matrix(&sphere.matrix(true));
            // Each sphere slowly spins in place.
            self.model_view.rotate(elapsed * 40.0, 0.0, 1.0, 0.0);

            let transform = Transform::new(&self.model_view, &self.projection);
            let mvp = transform.mvp_array();
            let normal = transform.normal_matrix_array(true);
            // Stand-in for the uniform upload a rendering backend would do.
            log::trace!("sphere {i}: mvp[12..15]={:?} normal[0]={}", &mvp[12..15], normal[0]);

            self.model_view.pop();
        }

        self.model_view.pop();
        Ok(())
    }

    fn resize(&mut self, _engine: &mut Engine, width: u32, height: u32) {
        let aspect = width as f32 / height.max(1) as f32;
        self.projection
            .load_matrix(&Mat4::new_perspective(aspect, 0.8, 0.5, 200.0));
        log::info!("viewport resized to {width}x{height}");
    }

    fn exit(&mut self, engine: &mut Engine) {
        log::info!(
            "demo finished: {} frames in {:.2}s ({:.1} fps avg over last window)",
            engine.frame_count(),
            engine.run_time(),
            engine.stats().fps(),
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::load_or_default(firefly_engine::core::config::DEFAULT_CONFIG_FILE);
    firefly_engine::foundation::logging::init(&config.logging.filter);

    let mut app = SpheresApp::new();
    Engine::run(config, &mut app)?;
    Ok(())
}
