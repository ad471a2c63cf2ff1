//! Director notes steering the character's next reply.
//!
//! Notes use the host's `{{user}}` and `{{char}}` placeholders; most hosts
//! fill them in, and [`fill_tags`] does it for those that don't.

/// An out-of-band instruction for the response generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorNote {
    /// The user asked to play and the character is setting up.
    GameProposed,
    /// The user wrecked the board and lost.
    Forfeit,
    /// The user rolled and moved.
    TurnTaken {
        /// Die result (1-6).
        roll: u32,
        /// Space the user landed on.
        space: i64,
    },
    /// The user chatted instead of moving.
    TurnPending,
}

impl std::fmt::Display for DirectorNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameProposed => write!(
                f,
                "{{{{user}}}} wants to play the classic board game, Chutes and Ladders, \
                 and {{{{char}}}} will agree as they set up the board. \
                 The game isn't starting yet, though."
            ),
            Self::Forfeit => write!(
                f,
                "{{{{user}}}} has messed up the board; {{{{char}}}} will consider this as \
                 {{{{user}}}} forfeiting--therefore, losing the game. \
                 The game is effectively ended."
            ),
            Self::TurnTaken { roll, space } => write!(
                f,
                "{{{{user}}}} has taken their turn, rolling a {roll} and advancing to {space}."
            ),
            Self::TurnPending => write!(
                f,
                "{{{{user}}}} didn't take their turn. {{{{char}}}} should spend some time \
                 chatting, bantering, or antagonizing them, but it will remain \
                 {{{{user}}}}'s turn."
            ),
        }
    }
}

/// Replace `{{user}}` and `{{char}}` with display names.
pub fn fill_tags(text: &str, user: &str, character: &str) -> String {
    text.replace("{{user}}", user).replace("{{char}}", character)
}
