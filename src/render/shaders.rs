/// Vertex shader shared by both programs
pub const SCENE_VERTEX_SHADER: &str = r#"#version 300 es

layout (location = 0) in vec3 position;

out vec3 v_position;

uniform mat4 u_mvpMatrix;

void main(void) {
    v_position = position;
    gl_Position = u_mvpMatrix * vec4(position, 1.0);
}
"#;

/// Fragment shader writing a single uniform color
pub const FLAT_FRAGMENT_SHADER: &str = r#"#version 300 es

precision highp float;

out vec4 o_color;

uniform vec3 u_color;

void main(void) {
    o_color = vec4(u_color, 1.0);
}
"#;

/// Fragment shader that overrides depth with animated fbm displacement.
/// Must stay in step with `crate::noise`.
pub const FRAG_DEPTH_FRAGMENT_SHADER: &str = r#"#version 300 es

precision highp float;

in vec3 v_position;

out vec4 o_color;

uniform mat4 u_mvpMatrix;
uniform vec3 u_color;
uniform float u_time;

float random(vec3 x) {
    return fract(sin(dot(x, vec3(12.9898, 78.233, 39.425))) * 43758.5453);
}

float valuenoise(vec3 x) {
    vec3 i = floor(x);
    vec3 f = fract(x);

    vec3 u = f * f * (3.0 - 2.0 * f);

    return mix(
        mix(
            mix(random(i), random(i + vec3(1.0, 0.0, 0.0)), u.x),
            mix(random(i + vec3(0.0, 1.0, 0.0)), random(i + vec3(1.0, 1.0, 0.0)), u.x),
            u.y
        ),
        mix(
            mix(random(i + vec3(0.0, 0.0, 1.0)), random(i + vec3(1.0, 0.0, 1.0)), u.x),
            mix(random(i + vec3(0.0, 1.0, 1.0)), random(i + vec3(1.0, 1.0, 1.0)), u.x),
            u.y
        ),
        u.z
    );
}

float fbm(vec3 x) {
    float sum = 0.0;
    float amp = 0.5;
    for (int i = 0; i < 5; i++) {
        sum += amp * valuenoise(x);
        amp *= 0.5;
        x *= 2.01;
    }
    return sum;
}

void main(void) {
    o_color = vec4(u_color, 1.0);
    float offset = fbm(vec3(v_position.xy + vec2(100.0), u_time * 0.3)) * 2.0 - 1.0;
    vec4 position = u_mvpMatrix * vec4(v_position + vec3(0.0, 0.0, offset), 1.0);
    gl_FragDepth = (position.z / position.w) * 0.5 + 0.5;
}
"#;

/// Uniforms looked up on the flat program
pub const FLAT_UNIFORMS: [&str; 2] = ["u_mvpMatrix", "u_color"];
/// Uniforms looked up on the frag-depth program
pub const FRAG_DEPTH_UNIFORMS: [&str; 3] = ["u_mvpMatrix", "u_color", "u_time"];
