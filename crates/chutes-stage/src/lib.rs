//! Chutes and Ladders mini-game stage for chat roleplay hosts.
//!
//! The stage watches user messages for cue phrases, keeps a small board
//! state per chat session, and answers with director notes for the
//! response generator and an HTML board for the chat log.

pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod message;
pub mod note;
pub mod phrases;
pub mod response;
pub mod roster;
pub mod stage;
pub mod state;

pub use config::StageConfig;
pub use error::{StageError, StageResult};
pub use message::Message;
pub use note::DirectorNote;
pub use response::{LoadResponse, StageResponse};
pub use roster::{InitialData, Participant, Roster};
pub use stage::ChutesStage;
pub use state::MessageState;
