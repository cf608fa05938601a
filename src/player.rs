use crate::error::*;
use crate::Door;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 挑战者在主持人揭示后的策略
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// 坚持选择
    Stick,

    /// 改变选择
    Switch,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Stick, Policy::Switch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Stick => "stick",
            Policy::Switch => "switch",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stick" => Ok(Policy::Stick),
            "switch" => Ok(Policy::Switch),
            _ => Err(Error::InvalidPolicy(s.to_owned())),
        }
    }
}

/// 挑战者：先随机选择一个门，主持人揭示后按策略做出最终抉择
pub trait Contestant {
    fn choose_door<R: Rng + ?Sized>(&self, rng: &mut R) -> Door;

    fn make_final_choice(&self, chosen: Door, revealed: Door) -> Result<Door>;
}

/// 持有固定策略的挑战者
#[derive(Debug, Clone)]
pub struct Player {
    /// 挑战者 ID
    id: Uuid,
    /// 挑战者策略，创建后不再改变
    policy: Policy,
}

impl Player {
    pub fn new(policy: Policy) -> Self {
        Self {
            id: Uuid::new_v4(),
            policy,
        }
    }

    /// 挑战者 ID
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(policy: &str) -> Result<Self> {
        Ok(Self::new(policy.parse()?))
    }
}

impl Contestant for Player {
    fn choose_door<R: Rng + ?Sized>(&self, rng: &mut R) -> Door {
        Door::random(rng)
    }

    fn make_final_choice(&self, chosen: Door, revealed: Door) -> Result<Door> {
        if chosen == revealed {
            return Err(Error::RevealedChosenDoor(revealed));
        }

        match self.policy {
            Policy::Stick => Ok(chosen),
            Policy::Switch => Door::third(chosen, revealed),
        }
    }
}
