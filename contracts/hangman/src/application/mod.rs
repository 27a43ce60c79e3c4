mod commands;
mod dto;
mod queries;

pub use commands::{
    AnswerCommand, ClaimForfeitCommand, CommitWordCommand, RevealCommand, StartGameCommand,
};
pub use dto::{AnswerResult, GameRules, RevealResult};
pub use queries::{GetRulesQuery, ObserveGameQuery};
