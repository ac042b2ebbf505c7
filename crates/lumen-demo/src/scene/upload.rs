use lumen_engine::uniforms::{UniformSink, UniformUploader};

use super::{Scene, SceneCounts};
use crate::camera::{Axis, CameraOffset};

/// Uniform names the fragment shader declares.
pub mod names {
    pub const LIGHT: &str = "light";
    pub const PLANE_VERT: &str = "planeVert";
    pub const PLANE_COLOR: &str = "planeColor";
    pub const PLANE_LIGHT: &str = "planeLight";
    pub const TRIANGLE_VERT: &str = "triangleVert";
    pub const TRIANGLE_COLOR: &str = "triangleColor";
    pub const TRIANGLE_LIGHT: &str = "triangleLight";
    pub const SPHERE_VERT: &str = "sphereVert";
    pub const SPHERE_COLOR: &str = "sphereColor";
    pub const SPHERE_LIGHT: &str = "sphereLight";

    pub const PLANE_COUNT: &str = "pV";
    pub const TRIANGLE_COUNT: &str = "tV";
    pub const SPHERE_COUNT: &str = "sV";

    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const Z: &str = "z";
}

pub fn upload_counts<S: UniformSink>(
    uploader: &mut UniformUploader,
    sink: &mut S,
    counts: SceneCounts,
) {
    uploader.i32(sink, names::PLANE_COUNT, counts.plane);
    uploader.i32(sink, names::TRIANGLE_COUNT, counts.triangle);
    uploader.i32(sink, names::SPHERE_COUNT, counts.sphere);
}

/// Uploads the camera offset in x, z, y order.
pub fn upload_camera<S: UniformSink>(
    uploader: &mut UniformUploader,
    sink: &mut S,
    camera: CameraOffset,
) {
    for axis in [Axis::X, Axis::Z, Axis::Y] {
        uploader.f32(sink, axis.uniform_name(), camera.get(axis));
    }
}

/// Every float-array uniform with the scene data it carries, in upload order.
pub fn scene_arrays(scene: &Scene) -> [(&'static str, &[f32]); 10] {
    [
        (names::LIGHT, scene.light.as_slice()),
        (names::PLANE_VERT, scene.planes.vertices.as_slice()),
        (names::PLANE_COLOR, scene.planes.colors.as_slice()),
        (names::TRIANGLE_VERT, scene.triangles.vertices.as_slice()),
        (names::TRIANGLE_COLOR, scene.triangles.colors.as_slice()),
        (names::SPHERE_VERT, scene.spheres.vertices.as_slice()),
        (names::SPHERE_COLOR, scene.spheres.colors.as_slice()),
        (names::PLANE_LIGHT, scene.planes.lighting.as_slice()),
        (names::SPHERE_LIGHT, scene.spheres.lighting.as_slice()),
        (names::TRIANGLE_LIGHT, scene.triangles.lighting.as_slice()),
    ]
}

/// Uploads every scene sequence. An unresolved name skips that one upload and
/// the rest still go through.
pub fn upload_scene<S: UniformSink>(uploader: &mut UniformUploader, sink: &mut S, scene: &Scene) {
    for (name, values) in scene_arrays(scene) {
        uploader.f32_array(sink, name, values);
    }
}
