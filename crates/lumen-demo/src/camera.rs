use crate::scene::names;

/// Distance one key press moves the camera along an axis.
pub const CAMERA_STEP: f32 = 0.5;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn uniform_name(self) -> &'static str {
        match self {
            Axis::X => names::X,
            Axis::Y => names::Y,
            Axis::Z => names::Z,
        }
    }
}

/// Camera pan directions bound to the movement keys.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Move {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    pub fn axis(self) -> Axis {
        match self {
            Move::Forward | Move::Back => Axis::Z,
            Move::Left | Move::Right => Axis::X,
            Move::Up | Move::Down => Axis::Y,
        }
    }

    /// Signed step along [`axis`](Self::axis). Forward is toward -z.
    pub fn delta(self) -> f32 {
        match self {
            Move::Forward | Move::Left | Move::Down => -CAMERA_STEP,
            Move::Back | Move::Right | Move::Up => CAMERA_STEP,
        }
    }
}

/// Offset added to the ray origin by the fragment shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CameraOffset {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl CameraOffset {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Applies `mv` and returns the axis that changed.
    pub fn apply(&mut self, mv: Move) -> Axis {
        let axis = mv.axis();
        *self.get_mut(axis) += mv.delta();
        axis
    }
}
