use vantage_camera::{CameraBlock, MatrixOrder};
use vantage_math::Scalar;
use vantage_scene::EntityId;

use crate::context::FrameContext;

/// Renderer-agnostic interface. Renderers read a frame and produce output.
pub trait Renderer<S: Scalar> {
    type Output;

    fn render(&self, ctx: &FrameContext<S>) -> Self::Output;
}

/// Human-readable frame dump for the CLI and logs.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl<S: Scalar> Renderer<S> for DebugTextRenderer {
    type Output = String;

    fn render(&self, ctx: &FrameContext<S>) -> String {
        let cam = &ctx.camera;
        let mut out = String::new();
        out.push_str(&format!("=== Frame (objects={}) ===\n", ctx.scene.len()));
        out.push_str(&format!(
            "Camera: pos={:.3} dir={:.3} h={:.3} v={:.3} fov={:.0}\n",
            cam.pos(),
            cam.direction,
            cam.horizontal_angle,
            cam.vertical_angle,
            cam.camera.projection.fov_y
        ));
        for (id, item) in ctx.scene.draw_list() {
            let t = item.model.col3(3);
            out.push_str(&format!(
                "  [{:.8}] {} at ({:.2}, {:.2}, {:.2})\n",
                &id.0.to_string()[..8],
                item.shader,
                t.x,
                t.y,
                t.z
            ));
        }
        out
    }
}

/// Bytes and matrices a GPU backend would upload for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformFrame<S> {
    pub camera_block: Vec<u8>,
    /// Column-major model matrix and colour per drawn object, in id order.
    pub models: Vec<(EntityId, [S; 16], [S; 4])>,
}

impl<S: Scalar> UniformFrame<S> {
    /// Model matrices packed back to back as raw bytes.
    pub fn model_bytes(&self) -> Vec<u8> {
        let flat: Vec<S> = self.models.iter().flat_map(|(_, m, _)| *m).collect();
        bytemuck::cast_slice(&flat[..]).to_vec()
    }
}

/// Produces [`UniformFrame`]s.
#[derive(Debug, Default)]
pub struct UniformRenderer {
    /// Matrix order used inside the camera block.
    pub order: MatrixOrder,
}

impl UniformRenderer {
    pub fn new(order: MatrixOrder) -> Self {
        Self { order }
    }
}

impl<S: Scalar> Renderer<S> for UniformRenderer {
    type Output = UniformFrame<S>;

    fn render(&self, ctx: &FrameContext<S>) -> UniformFrame<S> {
        let block = CameraBlock::from_camera(&ctx.camera.camera);
        let models = ctx
            .scene
            .draw_list()
            .into_iter()
            .map(|(id, item)| (id, item.model.data_col_major(), item.colour.to_array()))
            .collect();
        UniformFrame {
            camera_block: block.to_bytes(self.order),
            models,
        }
    }
}

#[cfg(test)]
mod tests {
    use vantage_math::Vec3;
    use vantage_scene::Cube;

    use super::*;

    fn context() -> FrameContext<f32> {
        let mut ctx = FrameContext::default();
        ctx.scene.spawn(Cube::new(Vec3::new(1.0, 2.0, 3.0)));
        ctx.scene.update(0.0);
        ctx
    }

    #[test]
    fn debug_renderer_empty_frame() {
        let ctx = FrameContext::<f32>::default();
        let out = DebugTextRenderer::new().render(&ctx);
        assert!(out.contains("objects=0"));
        assert!(out.contains("Camera: pos="));
    }

    #[test]
    fn debug_renderer_lists_objects() {
        let out = DebugTextRenderer::new().render(&context());
        assert!(out.contains("objects=1"));
        assert!(out.contains("Player at (1.00, 2.00, 3.00)"));
    }

    #[test]
    fn debug_renderer_writes_one_line_per_object() {
        let out = DebugTextRenderer::new().render(&context());
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().nth(2).is_some_and(|l| l.starts_with("  [")));
    }

    #[test]
    fn uniform_frame_sizes() {
        let frame = UniformRenderer::default().render(&context());
        assert_eq!(frame.camera_block.len(), CameraBlock::<f32>::size());
        assert_eq!(frame.models.len(), 1);
        assert_eq!(frame.model_bytes().len(), 16 * 4);
    }

    #[test]
    fn model_matrices_are_column_major() {
        let frame = UniformRenderer::default().render(&context());
        let (_, model, colour) = frame.models[0];
        assert_eq!(&model[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(colour, [0.8, 0.0, 0.6, 1.0]);
    }
}
