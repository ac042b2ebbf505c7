use super::types::InputEvent;
use super::Modifiers;

/// Input state carried between events.
///
/// winit reports modifiers separately from key presses; the live set is kept
/// here so every `InputEvent::Key` carries it.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::Key { modifiers, .. } => self.modifiers = *modifiers,
        }
    }
}
