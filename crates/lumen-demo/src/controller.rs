//! Keyboard state machine: active scene plus camera offset.

use lumen_engine::input::{Key, KeyState};
use lumen_engine::uniforms::{UniformSink, UniformUploader};

use crate::camera::{CameraOffset, Move};
use crate::scene::{self, Scene, SceneId};

/// What a key press asks for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Exit,
    Move(Move),
    SelectScene(SceneId),
}

/// Maps a key event to a command.
///
/// Movement keys act on every event: press, auto-repeat and release, so a
/// single tap moves two steps. Escape and the scene keys act on the initial
/// press only.
pub fn command_for(key: Key, state: KeyState, repeat: bool) -> Option<Command> {
    let initial_press = state == KeyState::Pressed && !repeat;

    let command = match key {
        Key::Escape if initial_press => Command::Exit,
        Key::W => Command::Move(Move::Forward),
        Key::S => Command::Move(Move::Back),
        Key::A => Command::Move(Move::Left),
        Key::D => Command::Move(Move::Right),
        Key::O => Command::Move(Move::Up),
        Key::P => Command::Move(Move::Down),
        Key::Digit1 if initial_press => Command::SelectScene(SceneId::One),
        Key::Digit2 if initial_press => Command::SelectScene(SceneId::Two),
        Key::Digit3 if initial_press => Command::SelectScene(SceneId::Three),
        _ => return None,
    };
    Some(command)
}

/// Result of applying a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Exit,
    /// Uniforms changed; draw and present now.
    Redraw,
}

/// Scene and camera state, kept in step with the program's uniforms.
#[derive(Debug, Default)]
pub struct Controller {
    active: Option<SceneId>,
    camera: CameraOffset,
    scene: Scene,
    uploader: UniformUploader,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<SceneId> {
        self.active
    }

    pub fn camera(&self) -> CameraOffset {
        self.camera
    }

    pub fn apply<S: UniformSink>(&mut self, sink: &mut S, command: Command) -> Outcome {
        match command {
            Command::Exit => return Outcome::Exit,
            Command::Move(mv) => self.move_camera(sink, mv),
            Command::SelectScene(id) => self.select_scene(sink, id),
        }
        Outcome::Redraw
    }

    /// Nudges the camera and re-uploads the changed axis only.
    pub fn move_camera<S: UniformSink>(&mut self, sink: &mut S, mv: Move) {
        let axis = self.camera.apply(mv);
        let value = self.camera.get(axis);
        log::debug!("camera {mv:?}: {} = {value}", axis.uniform_name());
        self.uploader.f32(sink, axis.uniform_name(), value);
    }

    /// Resets the camera, rebuilds the scene and uploads everything.
    pub fn select_scene<S: UniformSink>(&mut self, sink: &mut S, id: SceneId) {
        self.uploader.reset_warnings();
        self.active = Some(id);
        self.camera = id.camera_default();
        self.scene.rebuild(id);

        let counts = self.scene.counts();
        log::debug!(
            "selected {id}: pV={} tV={} sV={} camera={:?}",
            counts.plane,
            counts.triangle,
            counts.sphere,
            self.camera
        );

        scene::upload_counts(&mut self.uploader, sink, counts);
        scene::upload_camera(&mut self.uploader, sink, self.camera);
        scene::upload_scene(&mut self.uploader, sink, &self.scene);
    }
}
