/// WGSL Phong shader for every scene object. Lighting matches
/// `deskscene_render::lighting::phong`.
pub const SCENE_SHADER: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    view_position: vec4<f32>,
    light_position: vec4<f32>,
    // rgb = color, a = ambient strength
    light_color: vec4<f32>,
};

struct Object {
    model: mat4x4<f32>,
    normal_matrix: mat4x4<f32>,
    base_color: vec4<f32>,
    // x = specular strength, y = shininess, z = lit
    params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(1) @binding(0)
var<uniform> object: Object;

@group(2) @binding(0)
var t_diffuse: texture_2d<f32>;
@group(2) @binding(1)
var s_diffuse: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world = object.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = globals.view_proj * world;
    out.world_position = world.xyz;
    out.world_normal = (object.normal_matrix * vec4<f32>(vertex.normal, 0.0)).xyz;
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let albedo = textureSample(t_diffuse, s_diffuse, in.uv) * object.base_color;
    if (object.params.z < 0.5) {
        return albedo;
    }

    let light_color = globals.light_color.rgb;
    let n = normalize(in.world_normal);
    let light_dir = normalize(globals.light_position.xyz - in.world_position);
    let view_dir = normalize(globals.view_position.xyz - in.world_position);
    let reflect_dir = reflect(-light_dir, n);

    let ambient = globals.light_color.a * light_color;
    let diffuse = max(dot(n, light_dir), 0.0) * light_color;
    let specular = object.params.x * pow(max(dot(view_dir, reflect_dir), 0.0), object.params.y) * light_color;

    return vec4<f32>((ambient + diffuse + specular) * albedo.rgb, albedo.a);
}
"#;
