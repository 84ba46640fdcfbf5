use eframe::egui;
use snake_common::session::Key;

const WATCHED_KEYS: [(egui::Key, Key); 5] = [
    (egui::Key::ArrowUp, Key::ArrowUp),
    (egui::Key::ArrowDown, Key::ArrowDown),
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::P, Key::Char('p')),
];

/// Keys pressed since the last frame, in a fixed order.
pub fn pressed_keys(ctx: &egui::Context) -> Vec<Key> {
    ctx.input(|i| {
        WATCHED_KEYS
            .iter()
            .filter(|(egui_key, _)| i.key_pressed(*egui_key))
            .map(|(_, key)| *key)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::session::InputAction;

    #[test]
    fn test_every_watched_key_maps_to_an_action() {
        for (_, key) in WATCHED_KEYS {
            assert!(key.action().is_some(), "{:?} has no action", key);
        }
        assert_eq!(Key::Char('p').action(), Some(InputAction::TogglePause));
    }
}
