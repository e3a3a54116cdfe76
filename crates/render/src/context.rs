use vantage_camera::FlyCamera;
use vantage_input::{Action, apply};
use vantage_math::Scalar;
use vantage_scene::Scene;

/// Everything a frame reads and the simulation writes.
///
/// Owned by the loop and passed by reference; there is no global camera or
/// scene.
#[derive(Debug, Clone)]
pub struct FrameContext<S> {
    pub camera: FlyCamera<S>,
    pub scene: Scene<S>,
}

impl<S: Scalar> Default for FrameContext<S> {
    fn default() -> Self {
        Self::new(FlyCamera::default(), Scene::new())
    }
}

impl<S: Scalar> FrameContext<S> {
    pub fn new(camera: FlyCamera<S>, scene: Scene<S>) -> Self {
        Self { camera, scene }
    }

    pub fn handle(&mut self, action: Action<S>) {
        apply(action, &mut self.camera);
    }

    /// One fixed simulation step.
    pub fn update(&mut self, dt: S) {
        let _span = tracing::info_span!("frame_update").entered();
        self.camera.advance(dt);
        self.scene.update(dt);
    }
}
