use super::{Material, Point3, Rgb, Scene, SceneId};

const WHITE: Rgb = [1.0, 1.0, 1.0];
const GREY: Rgb = [0.4, 0.4, 0.4];
const RED: Rgb = [1.0, 0.0, 0.0];
const GREEN: Rgb = [0.0, 1.0, 0.0];
const BLUE: Rgb = [0.0, 0.0, 1.0];

const MATTE: Material = Material::new(0.2, 0.5, 0.0, 0.0);
const GLOSSY: Material = Material::new(0.5, 0.5, 1.0, 50.0);
const SHINY: Material = Material::new(0.3, 0.5, 1.0, 50.0);

/// Base ring of the blue pyramid, walked so that each fan triangle keeps the
/// winding of the hand-authored mesh.
const PYRAMID_RIM: [Point3; 4] = [
    [-0.4, -2.75, -5.55],
    [0.11, -2.75, -3.98],
    [-1.46, -2.75, -3.47],
    [-1.97, -2.75, -5.04],
];
const PYRAMID_APEX: Point3 = [-0.93, 0.55, -4.51];

/// The same pyramid four units further back, written out so the stored
/// floats match the authored values exactly.
const ROOM_PYRAMID_RIM: [Point3; 4] = [
    [-0.4, -2.75, -9.55],
    [0.11, -2.75, -7.98],
    [-1.46, -2.75, -7.47],
    [-1.97, -2.75, -9.04],
];
const ROOM_PYRAMID_APEX: Point3 = [-0.93, 0.55, -8.51];

const CONE_RIM: [Point3; 12] = [
    [0.0, -1.0, -5.8],
    [0.4, -1.0, -5.693],
    [0.6928, -1.0, -5.4],
    [0.8, -1.0, -5.0],
    [0.6928, -1.0, -4.6],
    [0.4, -1.0, -4.307],
    [0.0, -1.0, -4.2],
    [-0.4, -1.0, -4.307],
    [-0.6928, -1.0, -4.6],
    [-0.8, -1.0, -5.0],
    [-0.6928, -1.0, -5.4],
    [-0.4, -1.0, -5.693],
];
const CONE_APEX: Point3 = [0.0, 0.6, -5.0];

const ICOSAHEDRON: [[Point3; 3]; 20] = [
    [[-2.0, -1.0, -7.0], [-1.276, -0.4472, -6.474], [-2.276, -0.4472, -6.149]],
    [[-1.276, -0.4472, -6.474], [-2.0, -1.0, -7.0], [-1.276, -0.4472, -7.526]],
    [[-2.0, -1.0, -7.0], [-2.276, -0.4472, -6.149], [-2.894, -0.4472, -7.0]],
    [[-2.0, -1.0, -7.0], [-2.894, -0.4472, -7.0], [-2.276, -0.4472, -7.851]],
    [[-2.0, -1.0, -7.0], [-2.276, -0.4472, -7.851], [-1.276, -0.4472, -7.526]],
    [[-1.276, -0.4472, -6.474], [-1.276, -0.4472, -7.526], [-1.106, 0.4472, -7.0]],
    [[-2.276, -0.4472, -6.149], [-1.276, -0.4472, -6.474], [-1.724, 0.4472, -6.149]],
    [[-2.894, -0.4472, -7.0], [-2.276, -0.4472, -6.149], [-2.724, 0.4472, -6.474]],
    [[-2.276, -0.4472, -7.851], [-2.894, -0.4472, -7.0], [-2.724, 0.4472, -7.526]],
    [[-1.276, -0.4472, -7.526], [-2.276, -0.4472, -7.851], [-1.724, 0.4472, -7.851]],
    [[-1.276, -0.4472, -6.474], [-1.106, 0.4472, -7.0], [-1.724, 0.4472, -6.149]],
    [[-2.276, -0.4472, -6.149], [-1.724, 0.4472, -6.149], [-2.724, 0.4472, -6.474]],
    [[-2.894, -0.4472, -7.0], [-2.724, 0.4472, -6.474], [-2.724, 0.4472, -7.526]],
    [[-2.276, -0.4472, -7.851], [-2.724, 0.4472, -7.526], [-1.724, 0.4472, -7.851]],
    [[-1.276, -0.4472, -7.526], [-1.724, 0.4472, -7.851], [-1.106, 0.4472, -7.0]],
    [[-1.724, 0.4472, -6.149], [-1.106, 0.4472, -7.0], [-2.0, 1.0, -7.0]],
    [[-2.724, 0.4472, -6.474], [-1.724, 0.4472, -6.149], [-2.0, 1.0, -7.0]],
    [[-2.724, 0.4472, -7.526], [-2.724, 0.4472, -6.474], [-2.0, 1.0, -7.0]],
    [[-1.724, 0.4472, -7.851], [-2.724, 0.4472, -7.526], [-2.0, 1.0, -7.0]],
    [[-1.106, 0.4472, -7.0], [-1.724, 0.4472, -7.851], [-2.0, 1.0, -7.0]],
];

pub(super) fn populate(scene: &mut Scene, id: SceneId) {
    match id {
        SceneId::One => box_room(scene),
        SceneId::Two => cone_and_icosahedron(scene),
        SceneId::Three => pyramid_row(scene),
    }
}

fn push_pyramid(scene: &mut Scene, offset: Point3, color: Rgb, material: Material) {
    scene.push_fan(&PYRAMID_RIM, PYRAMID_APEX, offset, color, material);
}

/// A walled room with a back plane, one sphere and a pyramid.
fn box_room(scene: &mut Scene) {
    scene.set_light([0.0, 2.5, -7.75]);

    scene.push_plane(
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -10.5],
        WHITE,
        Material::new(0.3, 0.5, 0.0, 0.0),
    );

    scene.push_sphere([0.9, -1.925, -6.69], 0.825, GREY, GLOSSY);

    scene.push_fan(&ROOM_PYRAMID_RIM, ROOM_PYRAMID_APEX, [0.0; 3], BLUE, GLOSSY);

    let ceiling = Material::new(0.5, 0.5, 0.0, 0.0);
    scene.push_triangle(
        [[2.75, 2.75, -10.5], [2.75, 2.75, -5.0], [-2.75, 2.75, -5.0]],
        WHITE,
        ceiling,
    );
    scene.push_triangle(
        [[-2.75, 2.75, -10.5], [2.75, 2.75, -10.5], [-2.75, 2.75, -5.0]],
        WHITE,
        ceiling,
    );

    // right wall
    scene.push_triangle(
        [[2.75, 2.75, -5.0], [2.75, 2.75, -10.5], [2.75, -2.75, -10.5]],
        GREEN,
        MATTE,
    );
    scene.push_triangle(
        [[2.75, -2.75, -5.0], [2.75, 2.75, -5.0], [2.75, -2.75, -10.5]],
        GREEN,
        MATTE,
    );

    // left wall
    scene.push_triangle(
        [[-2.75, -2.75, -5.0], [-2.75, -2.75, -10.5], [-2.75, 2.75, -10.5]],
        RED,
        MATTE,
    );
    scene.push_triangle(
        [[-2.75, 2.75, -5.0], [-2.75, -2.75, -5.0], [-2.75, 2.75, -10.5]],
        RED,
        MATTE,
    );

    // floor
    scene.push_triangle(
        [[2.75, -2.75, -5.0], [2.75, -2.75, -10.5], [-2.75, -2.75, -10.5]],
        WHITE,
        MATTE,
    );
    scene.push_triangle(
        [[-2.75, -2.75, -5.0], [2.75, -2.75, -5.0], [-2.75, -2.75, -10.5]],
        WHITE,
        MATTE,
    );
}

fn cone_and_icosahedron(scene: &mut Scene) {
    scene.set_light([4.0, 6.0, -1.0]);

    let flat = Material::new(0.5, 0.5, 0.0, 0.0);
    scene.push_plane([0.0, 1.0, 0.0], [0.0, -1.0, 0.0], WHITE, flat);
    scene.push_plane([0.0, 0.0, 1.0], [0.0, 0.0, -12.0], [1.0, 0.5, 0.0], flat);

    let polished = Material::new(0.3, 0.5, 1.0, 150.0);
    scene.push_sphere(
        [1.0, -0.5, -3.5],
        0.5,
        [0.8, 0.8, 0.0],
        Material::new(0.3, 0.5, 0.5, 30.0),
    );
    scene.push_sphere([0.0, 1.0, -5.0], 0.4, GREY, polished);
    scene.push_sphere([-0.8, -0.75, -4.0], 0.25, [0.604, 0.102, 0.604], polished);

    scene.push_fan(&CONE_RIM, CONE_APEX, [0.0; 3], GREEN, SHINY);

    for face in ICOSAHEDRON {
        scene.push_triangle(face, RED, SHINY);
    }
}

/// Eight pyramids in a row under a large sphere.
fn pyramid_row(scene: &mut Scene) {
    scene.set_light([0.0, 0.0, -5.5]);

    scene.push_plane(
        [0.0, 1.0, 0.0],
        [0.0, -2.0, 0.3],
        [0.6, 0.2, 1.0],
        Material::new(0.35, 1.0, 0.0, 0.0),
    );
    scene.push_plane(
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -20.0],
        [0.2, 0.0, 0.4],
        Material::new(0.2, 0.5, 0.0, 0.0),
    );

    scene.push_sphere(
        [0.0, 2.0, -8.5],
        1.5,
        [1.0, 0.5, 0.15],
        Material::new(1.0, 1.0, 0.0, 0.0),
    );
    scene.push_sphere(
        [1.7, 1.5, -6.5],
        0.3,
        WHITE,
        Material::new(0.5, 0.5, 0.0, 0.0),
    );

    let material = Material::new(0.0, 0.5, 1.0, 50.0);
    for step in 0..8 {
        let x = -1.0 + 0.5 * step as f32;
        push_pyramid(scene, [x, 0.0, 0.0], BLUE, material);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(scene: &Scene, index: usize) -> &[f32] {
        &scene.triangles.vertices[index * 9..(index + 1) * 9]
    }

    #[test]
    fn box_room_pyramid_keeps_authored_floats() {
        let scene = Scene::build(SceneId::One);
        assert_eq!(
            triangle(&scene, 0),
            &[-0.4, -2.75, -9.55, -0.93, 0.55, -8.51, 0.11, -2.75, -7.98]
        );
        assert_eq!(
            triangle(&scene, 1),
            &[0.11, -2.75, -7.98, -0.93, 0.55, -8.51, -1.46, -2.75, -7.47]
        );
        assert_eq!(
            triangle(&scene, 2),
            &[-1.46, -2.75, -7.47, -0.93, 0.55, -8.51, -1.97, -2.75, -9.04]
        );
        assert_eq!(
            triangle(&scene, 3),
            &[-1.97, -2.75, -9.04, -0.93, 0.55, -8.51, -0.4, -2.75, -9.55]
        );
    }

    #[test]
    fn cone_fan_wraps_to_first_rim_point() {
        let scene = Scene::build(SceneId::Two);
        assert_eq!(
            triangle(&scene, 11),
            &[-0.4, -1.0, -5.693, 0.0, 0.6, -5.0, 0.0, -1.0, -5.8]
        );
        assert_eq!(&scene.triangles.colors[..3], &GREEN);
        assert_eq!(&scene.triangles.colors[12 * 3..13 * 3], &RED);
    }

    #[test]
    fn pyramid_row_spans_half_unit_steps() {
        let scene = Scene::build(SceneId::Three);
        let first = triangle(&scene, 0);
        let last = triangle(&scene, 28);
        assert_eq!(first[0], -0.4 - 1.0);
        assert_eq!(last[0], -0.4 + 2.5);
        assert!(scene.triangles.colors.chunks(3).all(|c| c == BLUE));
    }
}
