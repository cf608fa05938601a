use crate::Door;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid operation")]
    InvalidOperation,
    #[error("Invalid door label: {0:?}")]
    InvalidDoor(String),
    #[error("Invalid policy: {0:?}, expected 'stick' or 'switch'")]
    InvalidPolicy(String),
    #[error("Both doors are {0}, there is no single third door")]
    SameDoor(Door),
    #[error("Every door is excluded")]
    NoDoorLeft,
    #[error("Revealed door {0} is the chosen door")]
    RevealedChosenDoor(Door),
    #[error("Final choice {0} is the revealed door")]
    FinalChoiceRevealed(Door),
    #[error("Host revealed door {revealed} (prize {prize}, chosen {chosen})")]
    HostContractViolation {
        prize: Door,
        chosen: Door,
        revealed: Door,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
