//! Error types. None of these are fatal: game and form errors become
//! user-facing notices, config errors fall back to defaults.

use thiserror::Error;

/// A game action whose precondition did not hold. The state is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("need {need} coins to plant a tree, have {have}")]
    NotEnoughCoins { have: u32, need: u32 },
    #[error("no trees left to cut")]
    NoTreesToCut,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid game config: {0}")]
    Invalid(String),
}
