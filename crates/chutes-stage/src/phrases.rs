//! Cue phrases that drive the game from ordinary chat.
//!
//! Matching is case-insensitive substring containment against the whole
//! message, so "Wanna PLAY Chutes & Ladders?" counts as both a play cue
//! and a game cue.

/// Signs the user wants to play something.
pub const PLAY_CUES: &[&str] = &["play", "playing"];

/// Names the user might give the game.
pub const GAME_CUES: &[&str] = &[
    "chutes and ladders",
    "chutes & ladders",
    "a board game",
    "c&l",
    "c & l",
];

/// Ways of wrecking the board, which forfeits the game.
pub const DISRUPTION_CUES: &[&str] = &[
    "knock the board",
    "throw the board",
    "spill the pieces",
    "knock over the board",
    "bump the board",
];

/// Ways of taking a turn.
pub const TURN_CUES: &[&str] = &[
    "roll di",
    "take my turn",
    "takes a turn",
    "take turn",
    "have a go",
];

/// Whether `text` contains any of `cues`, ignoring case.
pub fn mentions_any(text: &str, cues: &[&str]) -> bool {
    let lower = text.to_lowercase();
    cues.iter().any(|cue| lower.contains(&cue.to_lowercase()))
}

/// Whether `text` proposes a game: it must carry both a play cue and a
/// game cue.
pub fn proposes_game(text: &str) -> bool {
    mentions_any(text, PLAY_CUES) && mentions_any(text, GAME_CUES)
}
