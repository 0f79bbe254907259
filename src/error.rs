use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while setting up or configuring the demo
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("WebGL2 context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Failed to create {0}")]
    Resource(&'static str),

    #[error("Shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("Program linking failed: {0}")]
    ProgramLink(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DemoError {
    fn from(value: JsValue) -> Self {
        DemoError::Js(format!("{:?}", value))
    }
}

impl From<DemoError> for JsValue {
    fn from(err: DemoError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
