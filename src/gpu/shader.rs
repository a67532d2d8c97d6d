use bytemuck::{Pod, Zeroable};

/// Maps canvas pixels to clip space and expands each instance into a quad.
pub const QUAD_SHADER: &str = r#"
struct Uniforms {
    canvas_size: vec2<f32>,
    _padding: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct InstanceInput {
    @location(0) origin: vec2<f32>,
    @location(1) size: f32,
    @location(2) shape: u32,
    @location(3) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) @interpolate(flat) shape: u32,
    @location(2) color: vec4<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    instance: InstanceInput,
) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(1.0, 1.0),
        vec2<f32>(0.0, 1.0),
    );
    let corner = corners[vertex_index];
    let pixel = instance.origin + corner * instance.size;

    var out: VertexOutput;
    out.clip_position = vec4<f32>(
        pixel.x / uniforms.canvas_size.x * 2.0 - 1.0,
        1.0 - pixel.y / uniforms.canvas_size.y * 2.0,
        0.0,
        1.0,
    );
    out.local = corner;
    out.shape = instance.shape;
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    if in.shape == 1u {
        let d = in.local - vec2<f32>(0.5, 0.5);
        if dot(d, d) > 0.25 {
            discard;
        }
    }
    return in.color;
}
"#;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub canvas_size: [f32; 2],
    pub _padding: [f32; 2],
}
