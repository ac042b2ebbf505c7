//! Scene data: flat float sequences laid out the way the fragment shader reads
//! them.
//!
//! Every primitive contributes one fixed-size geometry record, one RGB colour,
//! and one lighting 4-tuple, so record `i` of each sequence describes the same
//! primitive.

mod presets;
mod upload;

use std::fmt;
use std::str::FromStr;

use crate::camera::CameraOffset;

pub use upload::{names, upload_camera, upload_counts, upload_scene};

pub type Point3 = [f32; 3];
pub type Rgb = [f32; 3];

/// Floats per plane record: normal then a point on the plane.
pub const PLANE_FLOATS: usize = 6;
/// Floats per sphere record: centre then radius.
pub const SPHERE_FLOATS: usize = 4;
/// Floats per triangle record: three vertices.
pub const TRIANGLE_FLOATS: usize = 9;
pub const COLOR_FLOATS: usize = 3;
pub const LIGHTING_FLOATS: usize = 4;

/// One of the hand-authored scene presets, selected by number key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SceneId {
    One,
    Two,
    Three,
}

impl SceneId {
    #[cfg(test)]
    pub const ALL: [SceneId; 3] = [SceneId::One, SceneId::Two, SceneId::Three];

    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Camera offset restored whenever this scene is selected.
    pub fn camera_default(self) -> CameraOffset {
        match self {
            Self::One | Self::Two => CameraOffset::ORIGIN,
            Self::Three => CameraOffset::new(-0.1, 0.0, -1.0),
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene {}", self.number())
    }
}

impl FromStr for SceneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| format!("expected 1, 2 or 3, got `{s}`"))
    }
}

/// Phong lighting coefficients.
///
/// Flattened in the fixed order ambient, diffuse, specular, shininess; the
/// shader indexes the tuple positionally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
}

impl Material {
    pub const fn new(ambient: f32, diffuse: f32, specular: f32, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn coefficients(&self) -> [f32; LIGHTING_FLOATS] {
        [self.ambient, self.diffuse, self.specular, self.shininess]
    }
}

/// Parallel geometry / colour / lighting sequences for one primitive kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveData {
    pub vertices: Vec<f32>,
    pub colors: Vec<f32>,
    pub lighting: Vec<f32>,
}

impl PrimitiveData {
    fn push(&mut self, record: &[f32], color: Rgb, material: Material) {
        self.vertices.extend_from_slice(record);
        self.colors.extend_from_slice(&color);
        self.lighting.extend_from_slice(&material.coefficients());
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
        self.lighting.clear();
    }

    /// Number of primitives, counted by colour records.
    pub fn len(&self) -> usize {
        self.colors.len() / COLOR_FLOATS
    }
}

/// Array lengths the shader loops over, in floats.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SceneCounts {
    pub plane: i32,
    pub triangle: i32,
    pub sphere: i32,
}

/// All uniform data for one scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub light: Vec<f32>,
    pub planes: PrimitiveData,
    pub spheres: PrimitiveData,
    pub triangles: PrimitiveData,
}

impl Scene {
    /// A freshly built preset.
    #[cfg(test)]
    pub fn build(id: SceneId) -> Self {
        let mut scene = Self::default();
        scene.rebuild(id);
        scene
    }

    /// Clears every sequence, then fills in the preset for `id`.
    pub fn rebuild(&mut self, id: SceneId) {
        self.clear();
        presets::populate(self, id);
    }

    pub fn clear(&mut self) {
        self.light.clear();
        self.planes.clear();
        self.spheres.clear();
        self.triangles.clear();
    }

    pub fn counts(&self) -> SceneCounts {
        SceneCounts {
            plane: (self.planes.len() * PLANE_FLOATS) as i32,
            triangle: (self.triangles.len() * TRIANGLE_FLOATS) as i32,
            sphere: (self.spheres.len() * SPHERE_FLOATS) as i32,
        }
    }

    pub fn set_light(&mut self, position: Point3) {
        self.light.clear();
        self.light.extend_from_slice(&position);
    }

    pub fn push_plane(&mut self, normal: Point3, point: Point3, color: Rgb, material: Material) {
        let [nx, ny, nz] = normal;
        let [px, py, pz] = point;
        self.planes.push(&[nx, ny, nz, px, py, pz], color, material);
    }

    pub fn push_sphere(&mut self, center: Point3, radius: f32, color: Rgb, material: Material) {
        let [cx, cy, cz] = center;
        self.spheres.push(&[cx, cy, cz, radius], color, material);
    }

    pub fn push_triangle(&mut self, vertices: [Point3; 3], color: Rgb, material: Material) {
        self.triangles.push(vertices.as_flattened(), color, material);
    }

    /// Triangle fan `(rim[i], apex, rim[i + 1])`, closed back to `rim[0]`,
    /// translated by `offset`.
    pub fn push_fan(
        &mut self,
        rim: &[Point3],
        apex: Point3,
        offset: Point3,
        color: Rgb,
        material: Material,
    ) {
        let shift = |p: Point3| [p[0] + offset[0], p[1] + offset[1], p[2] + offset[2]];
        let apex = shift(apex);

        for (i, &a) in rim.iter().enumerate() {
            let b = rim[(i + 1) % rim.len()];
            self.push_triangle([shift(a), apex, shift(b)], color, material);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_record_sizes(data: &PrimitiveData, floats: usize) {
        assert_eq!(data.vertices.len(), data.len() * floats);
        assert_eq!(data.colors.len(), data.len() * COLOR_FLOATS);
        assert_eq!(data.lighting.len(), data.len() * LIGHTING_FLOATS);
    }

    #[test]
    fn every_preset_has_consistent_record_sizes() {
        for id in SceneId::ALL {
            let scene = Scene::build(id);
            assert_eq!(scene.light.len(), 3, "{id}");
            assert_record_sizes(&scene.planes, PLANE_FLOATS);
            assert_record_sizes(&scene.spheres, SPHERE_FLOATS);
            assert_record_sizes(&scene.triangles, TRIANGLE_FLOATS);
        }
    }

    #[test]
    fn scene_one_layout() {
        let scene = Scene::build(SceneId::One);
        assert_eq!(scene.light, vec![0.0, 2.5, -7.75]);
        assert_eq!(scene.planes.len(), 1);
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.triangles.len(), 12);
        assert_eq!(scene.counts(), SceneCounts { plane: 6, triangle: 108, sphere: 4 });
    }

    #[test]
    fn scene_two_layout() {
        let scene = Scene::build(SceneId::Two);
        assert_eq!(scene.light, vec![4.0, 6.0, -1.0]);
        assert_eq!(scene.planes.len(), 2);
        assert_eq!(scene.spheres.len(), 3);
        assert_eq!(scene.triangles.len(), 32);
        assert_eq!(scene.counts(), SceneCounts { plane: 12, triangle: 288, sphere: 12 });
    }

    #[test]
    fn scene_three_layout() {
        let scene = Scene::build(SceneId::Three);
        assert_eq!(scene.light, vec![0.0, 0.0, -5.5]);
        assert_eq!(scene.planes.len(), 2);
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.triangles.len(), 32);
        assert_eq!(scene.counts(), SceneCounts { plane: 12, triangle: 288, sphere: 8 });
    }

    #[test]
    fn rebuild_leaves_no_residue_from_previous_scene() {
        let mut scene = Scene::build(SceneId::Two);
        scene.rebuild(SceneId::One);
        assert_eq!(scene, Scene::build(SceneId::One));

        scene.rebuild(SceneId::Three);
        scene.rebuild(SceneId::Three);
        assert_eq!(scene, Scene::build(SceneId::Three));
    }

    #[test]
    fn clear_empties_every_sequence() {
        let mut scene = Scene::build(SceneId::Two);
        scene.clear();
        assert_eq!(scene, Scene::default());
        assert_eq!(scene.counts(), SceneCounts { plane: 0, triangle: 0, sphere: 0 });
    }

    #[test]
    fn lighting_tuple_order_is_fixed() {
        let mut scene = Scene::default();
        scene.push_sphere([0.0; 3], 1.0, [1.0; 3], Material::new(0.1, 0.2, 0.3, 40.0));
        assert_eq!(scene.spheres.lighting, vec![0.1, 0.2, 0.3, 40.0]);
    }

    #[test]
    fn plane_record_is_normal_then_point() {
        let mut scene = Scene::default();
        scene.push_plane([0.0, 1.0, 0.0], [0.0, -1.0, 0.0], [1.0; 3], Material::new(0.5, 0.5, 0.0, 0.0));
        assert_eq!(scene.planes.vertices, vec![0.0, 1.0, 0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn fan_closes_back_to_first_rim_point() {
        let mut scene = Scene::default();
        let rim = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0]];
        scene.push_fan(&rim, [0.5, 1.0, 0.5], [0.0, 0.0, -2.0], [1.0; 3], Material::new(0.0, 0.0, 0.0, 0.0));

        assert_eq!(scene.triangles.len(), 3);
        let last = &scene.triangles.vertices[18..27];
        assert_eq!(last, &[1.0, 0.0, -1.0, 0.5, 1.0, -1.5, 0.0, 0.0, -2.0]);
    }

    #[test]
    fn scene_id_parses_numbers_only_in_range() {
        assert_eq!("2".parse::<SceneId>(), Ok(SceneId::Two));
        assert_eq!(" 3 ".parse::<SceneId>(), Ok(SceneId::Three));
        assert!("0".parse::<SceneId>().is_err());
        assert!("two".parse::<SceneId>().is_err());
    }
}
