//! Share command

use crate::core::Clock;
use crate::game::Game;
use crate::output::share_text;
use crate::storage::KeyValueStore;

/// Share text for a finished game, or `None` while it is still in progress
#[must_use]
pub fn share_game<S: KeyValueStore, C: Clock>(
    game: &Game<'_, S, C>,
    title: &str,
    link: Option<&str>,
) -> Option<String> {
    game.is_finished()
        .then(|| share_text(title, &game.code(), &game.rows(), link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Day, ManualClock};
    use crate::game::GameConfig;
    use crate::storage::{MemoryStore, Storage};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn only_finished_games_are_shared() {
        let dictionary =
            Dictionary::new(words_from_slice(&["crane"]), words_from_slice(&["slate"])).unwrap();
        let clock = ManualClock::new(Day::new(36));
        let storage = Storage::new("test", MemoryStore::default());
        let mut game = Game::new(&dictionary, storage, &clock).with_config(GameConfig::instant());
        game.load();

        game.make_guess("slate");
        assert_eq!(share_game(&game, "Rewordle", None), None);

        game.tick();
        game.make_guess("crane");
        let text = share_game(&game, "Rewordle", Some("https://rewordle.app/")).unwrap();
        assert_eq!(
            text,
            "Rewordle #10 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩\n\nhttps://rewordle.app/"
        );
    }
}
