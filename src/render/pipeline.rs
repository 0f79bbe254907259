use std::collections::HashMap;
use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};
use crate::animation::Frame;
use crate::config::SceneConfig;
use crate::error::DemoError;
use crate::math::Vec3;
use crate::mesh::RectMesh;
use super::webgl::{VertexAttrib, WebGLContext};
use super::shaders::*;

/// Attribute slot of `position` in the vertex shader
const POSITION_LOCATION: u32 = 0;

/// A linked program and its cached uniform locations
struct ProgramSlot {
    program: WebGlProgram,
    uniforms: HashMap<&'static str, WebGlUniformLocation>,
}

impl ProgramSlot {
    fn new(ctx: &WebGLContext, frag_src: &str, names: &[&'static str]) -> Result<Self, DemoError> {
        let program = ctx.create_program(SCENE_VERTEX_SHADER, frag_src)?;
        let uniforms = ctx.uniform_locations(&program, names);
        Ok(Self { program, uniforms })
    }

    fn uniform(&self, name: &str) -> Option<&WebGlUniformLocation> {
        self.uniforms.get(name)
    }
}

/// Draws the flat rectangle and the noise-depth rectangle each frame
pub struct ScenePipeline {
    ctx: WebGLContext,

    flat: ProgramSlot,
    frag_depth: ProgramSlot,

    rect_vao: WebGlVertexArrayObject,
    // Kept alive for the VAO
    _rect_vertex_buffer: WebGlBuffer,
    _rect_index_buffer: WebGlBuffer,
    rect_index_count: i32,

    flat_color: Vec3,
    noise_color: Vec3,
}

impl ScenePipeline {
    pub fn new(gl: WebGl2RenderingContext, config: &SceneConfig) -> Result<Self, DemoError> {
        let ctx = WebGLContext::new(gl);
        ctx.enable_depth_test();
        ctx.enable_cull_face();

        let flat = ProgramSlot::new(&ctx, FLAT_FRAGMENT_SHADER, &FLAT_UNIFORMS)?;
        let frag_depth = ProgramSlot::new(&ctx, FRAG_DEPTH_FRAGMENT_SHADER, &FRAG_DEPTH_UNIFORMS)?;

        let mesh = RectMesh::new();
        let vertex_buffer = ctx.create_vertex_buffer(mesh.positions())?;
        let index_buffer = ctx.create_index_buffer(mesh.indices())?;
        let rect_vao = ctx.create_vao(
            &[VertexAttrib { buffer: &vertex_buffer, index: POSITION_LOCATION, size: 3 }],
            Some(&index_buffer),
        )?;

        ctx.clear_color(config.clear_color);

        log::info!(
            "Scene pipeline ready ({} flat uniforms, {} frag-depth uniforms)",
            flat.uniforms.len(),
            frag_depth.uniforms.len()
        );

        Ok(Self {
            ctx,
            flat,
            frag_depth,
            rect_vao,
            _rect_vertex_buffer: vertex_buffer,
            _rect_index_buffer: index_buffer,
            rect_index_count: mesh.index_count(),
            flat_color: config.flat_color(),
            noise_color: config.noise_color(),
        })
    }

    /// Render one frame
    pub fn draw(&self, frame: &Frame) {
        let gl = &self.ctx.gl;

        self.ctx.clear();

        // Flat rectangle
        gl.use_program(Some(&self.flat.program));
        self.ctx.uniform_matrix4fv(self.flat.uniform("u_mvpMatrix"), frame.mvp.as_slice());
        self.set_color(&self.flat, self.flat_color);
        self.draw_rect();

        // Same rectangle, depth displaced per fragment
        gl.use_program(Some(&self.frag_depth.program));
        self.ctx.uniform_matrix4fv(self.frag_depth.uniform("u_mvpMatrix"), frame.mvp.as_slice());
        self.set_color(&self.frag_depth, self.noise_color);
        self.ctx.uniform_1f(self.frag_depth.uniform("u_time"), frame.elapsed);
        self.draw_rect();
    }

    fn set_color(&self, slot: &ProgramSlot, color: Vec3) {
        self.ctx.uniform_3f(slot.uniform("u_color"), color.x, color.y, color.z);
    }

    fn draw_rect(&self) {
        let gl = &self.ctx.gl;
        gl.bind_vertex_array(Some(&self.rect_vao));
        gl.draw_elements_with_i32(
            WebGl2RenderingContext::TRIANGLES,
            self.rect_index_count,
            WebGl2RenderingContext::UNSIGNED_SHORT,
            0,
        );
        gl.bind_vertex_array(None);
    }

    /// Match the viewport to a resized canvas
    pub fn resize(&mut self, width: i32, height: i32) {
        self.ctx.viewport(0, 0, width, height);
    }
}
