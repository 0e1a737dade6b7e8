//! Property tests for session scoring and validation invariants.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use wordterm::core::spell::PermissiveChecker;
use wordterm::core::words::StaticWordList;
use wordterm::games::scramble::{rules, ScrambleGame, Session};

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn fixed_root_game(root: &str) -> ScrambleGame {
    let provider = Box::new(StaticWordList::new([root]));
    ScrambleGame::start(provider, Box::new(PermissiveChecker), "en").unwrap()
}

proptest! {
    /// The score always equals the sum of the accepted words' lengths,
    /// whatever mix of good and bad submissions came in.
    #[test]
    fn score_is_sum_of_accepted_lengths(
        root in "[a-z]{4,10}",
        subs in prop::collection::vec("[a-z]{0,6}", 0..32),
    ) {
        let mut game = fixed_root_game(&root);
        let mut expected = 0u32;

        for raw in &subs {
            if let Ok(word) = game.submit(raw) {
                expected += word.chars().count() as u32;
            }
        }

        prop_assert_eq!(game.session().score(), expected);
    }

    /// No word ever shows up twice in the used list, even when every
    /// submission is sent twice.
    #[test]
    fn used_words_stay_unique(
        root in "[a-z]{4,10}",
        subs in prop::collection::vec("[a-z]{1,5}", 0..16),
    ) {
        let mut game = fixed_root_game(&root);

        for raw in subs.iter().chain(subs.iter()) {
            let _ = game.submit(raw);
        }

        let unique: HashSet<&String> = game.session().used_words().iter().collect();
        prop_assert_eq!(unique.len(), game.session().used_words().len());
    }

    /// Every accepted word can actually be assembled from the root's
    /// letters, each occurrence used at most once.
    #[test]
    fn accepted_words_are_formable_from_root(
        root in "[a-z]{4,10}",
        subs in prop::collection::vec("[a-z]{0,6}", 0..32),
    ) {
        let mut game = fixed_root_game(&root);
        for raw in &subs {
            let _ = game.submit(raw);
        }

        let root_counts = letter_counts(game.session().root_word());
        for word in game.session().used_words() {
            prop_assert!(word.chars().count() >= 3);
            prop_assert_ne!(word.as_str(), game.session().root_word());
            for (letter, count) in letter_counts(word) {
                prop_assert!(root_counts.get(&letter).copied().unwrap_or(0) >= count);
            }
        }
    }

    /// Validating the same candidate against the same session always
    /// gives the same verdict.
    #[test]
    fn validation_is_stable_for_unchanged_session(
        root in "[a-z]{4,10}",
        raw in "[ a-zA-Z]{0,10}",
    ) {
        let session = Session::new(&root);
        let first = rules::validate(&raw, &session, &PermissiveChecker, "en");
        let second = rules::validate(&raw, &session, &PermissiveChecker, "en");
        prop_assert_eq!(first, second);
    }
}
