use std::collections::HashMap;
use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};
use crate::error::DemoError;

/// One float attribute stream bound into a vertex array
pub struct VertexAttrib<'a> {
    pub buffer: &'a WebGlBuffer,
    pub index: u32,
    pub size: i32,
}

/// Wrapper around WebGL2 context with helper methods
pub struct WebGLContext {
    pub gl: WebGl2RenderingContext,
}

impl WebGLContext {
    pub fn new(gl: WebGl2RenderingContext) -> Self {
        Self { gl }
    }

    /// Compile a shader from source
    pub fn compile_shader(&self, shader_type: u32, source: &str) -> Result<WebGlShader, DemoError> {
        let gl = &self.gl;

        let shader = gl.create_shader(shader_type)
            .ok_or(DemoError::Resource("shader"))?;

        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        if gl.get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(&shader).unwrap_or_default();
            gl.delete_shader(Some(&shader));
            Err(DemoError::ShaderCompile(log))
        }
    }

    /// Create a shader program from vertex and fragment shaders
    pub fn create_program(&self, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, DemoError> {
        let gl = &self.gl;

        let vert_shader = self.compile_shader(WebGl2RenderingContext::VERTEX_SHADER, vert_src)?;
        let frag_shader = self.compile_shader(WebGl2RenderingContext::FRAGMENT_SHADER, frag_src)?;

        let program = gl.create_program().ok_or(DemoError::Resource("program"))?;

        gl.attach_shader(&program, &vert_shader);
        gl.attach_shader(&program, &frag_shader);
        gl.link_program(&program);

        // Linked into the program now
        gl.delete_shader(Some(&vert_shader));
        gl.delete_shader(Some(&frag_shader));

        if gl.get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            Ok(program)
        } else {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            Err(DemoError::ProgramLink(log))
        }
    }

    /// Create a static vertex buffer
    pub fn create_vertex_buffer(&self, data: &[f32]) -> Result<WebGlBuffer, DemoError> {
        let gl = &self.gl;

        let buffer = gl.create_buffer().ok_or(DemoError::Resource("vertex buffer"))?;
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

        // Safety: the view is consumed before any further allocation
        unsafe {
            let array = js_sys::Float32Array::view(data);
            gl.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ARRAY_BUFFER,
                &array,
                WebGl2RenderingContext::STATIC_DRAW,
            );
        }

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, None);
        Ok(buffer)
    }

    /// Create a static 16-bit index buffer
    pub fn create_index_buffer(&self, data: &[u16]) -> Result<WebGlBuffer, DemoError> {
        let gl = &self.gl;

        let buffer = gl.create_buffer().ok_or(DemoError::Resource("index buffer"))?;
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&buffer));

        unsafe {
            let array = js_sys::Uint16Array::view(data);
            gl.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER,
                &array,
                WebGl2RenderingContext::STATIC_DRAW,
            );
        }

        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, None);
        Ok(buffer)
    }

    /// Create a Vertex Array Object binding tightly packed float attributes
    /// and an optional index buffer
    pub fn create_vao(
        &self,
        attribs: &[VertexAttrib<'_>],
        index_buffer: Option<&WebGlBuffer>,
    ) -> Result<WebGlVertexArrayObject, DemoError> {
        let gl = &self.gl;

        let vao = gl.create_vertex_array().ok_or(DemoError::Resource("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        if let Some(ibo) = index_buffer {
            gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(ibo));
        }

        for attrib in attribs {
            gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(attrib.buffer));
            gl.enable_vertex_attrib_array(attrib.index);
            gl.vertex_attrib_pointer_with_i32(
                attrib.index,
                attrib.size,
                WebGl2RenderingContext::FLOAT,
                false,
                0,
                0,
            );
        }

        gl.bind_vertex_array(None);
        if index_buffer.is_some() {
            gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, None);
        }
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, None);

        Ok(vao)
    }

    /// Look up a set of uniforms by name. Names the linker optimised away
    /// are simply absent.
    pub fn uniform_locations(
        &self,
        program: &WebGlProgram,
        names: &[&'static str],
    ) -> HashMap<&'static str, WebGlUniformLocation> {
        names
            .iter()
            .filter_map(|&name| {
                self.gl
                    .get_uniform_location(program, name)
                    .map(|location| (name, location))
            })
            .collect()
    }

    /// Set float uniform
    pub fn uniform_1f(&self, location: Option<&WebGlUniformLocation>, value: f32) {
        self.gl.uniform1f(location, value);
    }

    /// Set vec3 uniform
    pub fn uniform_3f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32, z: f32) {
        self.gl.uniform3f(location, x, y, z);
    }

    /// Set mat4 uniform
    pub fn uniform_matrix4fv(&self, location: Option<&WebGlUniformLocation>, data: &[f32; 16]) {
        self.gl.uniform_matrix4fv_with_f32_array(location, false, data);
    }

    pub fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        self.gl.clear_color(r, g, b, a);
    }

    /// Clear color and depth
    pub fn clear(&self) {
        self.gl.clear(WebGl2RenderingContext::COLOR_BUFFER_BIT | WebGl2RenderingContext::DEPTH_BUFFER_BIT);
    }

    /// Enable depth testing
    pub fn enable_depth_test(&self) {
        self.gl.enable(WebGl2RenderingContext::DEPTH_TEST);
    }

    /// Cull back faces
    pub fn enable_cull_face(&self) {
        self.gl.enable(WebGl2RenderingContext::CULL_FACE);
    }

    /// Set viewport
    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }
}
