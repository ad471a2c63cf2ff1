//! The stage controller for one chat session.
//!
//! `ChutesStage` owns the board state for a single conversation. The host
//! restores it before each turn, feeds it the user's message and the
//! character's reply, and stores whatever state it hands back.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;
use tracing::{debug, info};

use crate::board::render_board;
use crate::config::StageConfig;
use crate::dice::roll_d6;
use crate::message::Message;
use crate::note::{DirectorNote, fill_tags};
use crate::phrases::{DISRUPTION_CUES, TURN_CUES, mentions_any, proposes_game};
use crate::response::{LoadResponse, StageResponse};
use crate::roster::{InitialData, Roster};
use crate::state::MessageState;

/// Space every token starts on.
pub const START_SPACE: i64 = 1;

/// Chutes and Ladders stage for one session.
pub struct ChutesStage {
    config: StageConfig,
    roster: Roster,
    state: MessageState,
    rng: StdRng,
}

impl ChutesStage {
    /// Open a session from the host's bundle, reading config from it.
    pub fn new(data: InitialData) -> Self {
        let config = StageConfig::from_value(data.config.as_ref());
        Self::with_config(data, config)
    }

    /// Open a session with an explicit config, ignoring the bundle's.
    pub fn with_config(data: InitialData, config: StageConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let roster = Roster::from_initial(&data);
        debug!(
            user = %roster.user_id,
            characters = ?roster.characters,
            "opening stage"
        );

        let mut stage = Self {
            config,
            roster,
            state: MessageState::default(),
            rng,
        };
        stage.restore_state(data.message_state.as_ref());
        stage
    }

    /// Get the config.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Get the seated participants.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get the current game state.
    pub fn state(&self) -> &MessageState {
        &self.state
    }

    /// Host load hook. Nothing to fetch, so this always succeeds.
    pub fn load(&self) -> LoadResponse {
        LoadResponse::default()
    }

    /// Replace the game state with a host blob. Missing or malformed
    /// fields fall back to their empty values.
    pub fn restore_state(&mut self, blob: Option<&Value>) {
        self.state = MessageState::from_value(blob);
        debug!(
            turn = %self.state.current_turn,
            tokens = self.state.current_space.len(),
            "state restored"
        );
    }

    /// Host swipe/jump hook; same as [`ChutesStage::restore_state`].
    pub fn set_state(&mut self, blob: Option<&Value>) {
        self.restore_state(blob);
    }

    /// Package the game state for the host.
    pub fn serialize_state(&self) -> Value {
        self.state.to_value()
    }

    /// Process the user's message text and return a director note, if the
    /// message moved the game.
    pub fn on_user_message(&mut self, text: &str) -> Option<String> {
        self.advance(text)
            .map(|note| note.to_string())
            .filter(|note| !note.trim().is_empty())
    }

    /// Board markup to show after the character replies, while a game runs.
    pub fn on_assistant_message(&self) -> Option<String> {
        self.state.is_active().then(|| self.render_board())
    }

    /// Render the board for the current positions.
    pub fn render_board(&self) -> String {
        render_board(&self.state.current_space, &self.config)
    }

    /// Host hook run before the reply is generated.
    pub fn before_prompt(&mut self, message: &Message) -> StageResponse {
        debug!(
            sender = %message.anonymized_id,
            prompt_for = ?message.prompt_for_id,
            turn = %self.state.current_turn,
            "before prompt"
        );
        let mut stage_directions = self.on_user_message(&message.content);
        if self.config.fill_names {
            let character = self.roster.character_name(message.prompt_for_id.as_deref());
            stage_directions = stage_directions
                .map(|note| fill_tags(&note, &self.roster.user_name, character));
        }
        StageResponse {
            stage_directions,
            message_state: self.serialize_state(),
            ..StageResponse::default()
        }
    }

    /// Host hook run after the reply is generated.
    pub fn after_response(&mut self, message: &Message) -> StageResponse {
        debug!(sender = %message.anonymized_id, "after response");
        StageResponse {
            system_message: self.on_assistant_message(),
            message_state: self.serialize_state(),
            ..StageResponse::default()
        }
    }

    fn advance(&mut self, text: &str) -> Option<DirectorNote> {
        if !self.state.is_active() {
            // Without a user there is nobody to hold the turn.
            if self.roster.user_id.is_empty() {
                return None;
            }
            return proposes_game(text).then(|| self.start_game());
        }

        if mentions_any(text, DISRUPTION_CUES) {
            info!(user = %self.roster.user_id, "board knocked over; game forfeited");
            self.state.current_turn.clear();
            return Some(DirectorNote::Forfeit);
        }

        // Characters never hold the turn, so only the user's turn is handled.
        if self.state.current_turn != self.roster.user_id {
            return None;
        }

        if mentions_any(text, TURN_CUES) {
            Some(self.take_turn())
        } else {
            Some(DirectorNote::TurnPending)
        }
    }

    fn start_game(&mut self) -> DirectorNote {
        let user = self.roster.user_id.clone();
        for id in &self.roster.characters {
            self.state.current_space.insert(id.clone(), START_SPACE);
        }
        self.state.current_space.insert(user.clone(), START_SPACE);
        info!(user = %user, players = self.state.current_space.len(), "game proposed");
        self.state.current_turn = user;
        DirectorNote::GameProposed
    }

    // The turn stays with the user afterwards, so repeated cues keep rolling.
    fn take_turn(&mut self) -> DirectorNote {
        let roll = roll_d6(&mut self.rng);
        let space = self
            .state
            .current_space
            .entry(self.roster.user_id.clone())
            .or_insert(START_SPACE);
        *space = space.saturating_add(i64::from(roll));
        let space = *space;
        info!(user = %self.roster.user_id, roll, space, "turn taken");
        DirectorNote::TurnTaken { roll, space }
    }
}
