pub mod webgl;
pub mod shaders;
pub mod pipeline;

pub use webgl::WebGLContext;
pub use pipeline::ScenePipeline;
