use crate::error::*;
use rand::distributions::Standard;
use rand::prelude::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 门，三个门中只有一个门后有奖品
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Door {
    A,
    B,
    C,
}

impl Door {
    /// 全部三个门，按标签顺序
    pub const ALL: [Door; 3] = [Door::A, Door::B, Door::C];

    /// 在三个门中随机选择一个
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// 在 `excluded` 之外的门中随机选择一个
    pub fn random_excluding<R: Rng + ?Sized>(rng: &mut R, excluded: &[Door]) -> Result<Self> {
        let mut candidates = [Door::A; 3];
        let mut len = 0;
        for door in Self::ALL {
            if !excluded.contains(&door) {
                candidates[len] = door;
                len += 1;
            }
        }

        if len == 0 {
            return Err(Error::NoDoorLeft);
        }

        Ok(candidates[rng.gen_range(0..len)])
    }

    /// 既不是 `a` 也不是 `b` 的那个门
    pub fn third(a: Door, b: Door) -> Result<Self> {
        if a == b {
            return Err(Error::SameDoor(a));
        }

        Self::ALL
            .into_iter()
            .find(|door| *door != a && *door != b)
            .ok_or(Error::NoDoorLeft)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Door::A => "A",
            Door::B => "B",
            Door::C => "C",
        }
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Door {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A" | "a" => Ok(Door::A),
            "B" | "b" => Ok(Door::B),
            "C" | "c" => Ok(Door::C),
            other => Err(Error::InvalidDoor(other.to_owned())),
        }
    }
}

impl Distribution<Door> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Door {
        Door::random(rng)
    }
}
