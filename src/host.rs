use crate::error::*;
use crate::Door;
use rand::Rng;
use uuid::Uuid;

/// 主持人：决定奖品位置，并在挑战者选择后揭示一个没有奖品的门
pub trait Host {
    /// 随机决定奖品所在的门
    fn decide_winning_door<R: Rng + ?Sized>(&self, rng: &mut R) -> Door;

    /// 揭示一个既不是挑战者所选、也不是奖品所在的门
    fn choose_door_to_reveal<R: Rng + ?Sized>(
        &self,
        prize: Door,
        chosen: Door,
        rng: &mut R,
    ) -> Result<Door>;
}

/// 游戏节目主持人
#[derive(Debug, Clone)]
pub struct GameShowHost {
    /// 主持人 ID
    id: Uuid,
    /// 主持人名字
    name: String,
}

impl Default for GameShowHost {
    fn default() -> Self {
        Self::with_name("Monty")
    }
}

impl GameShowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// 主持人 ID
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// 主持人名字
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Host for GameShowHost {
    fn decide_winning_door<R: Rng + ?Sized>(&self, rng: &mut R) -> Door {
        Door::random(rng)
    }

    fn choose_door_to_reveal<R: Rng + ?Sized>(
        &self,
        prize: Door,
        chosen: Door,
        rng: &mut R,
    ) -> Result<Door> {
        // 挑战者选中奖品时，剩下两个门都可以揭示
        if prize == chosen {
            Door::random_excluding(rng, &[chosen])
        } else {
            Door::random_excluding(rng, &[chosen, prize])
        }
    }
}

#[cfg(test)]
mod test {
    use super::{GameShowHost, Host};
    use crate::Door;
    use std::collections::HashMap;

    #[test]
    fn reveal_never_chosen_or_prize() {
        let host = GameShowHost::new();
        let mut rng = rand::thread_rng();
        for prize in Door::ALL {
            for chosen in Door::ALL {
                for _ in 0..1000 {
                    let revealed = host.choose_door_to_reveal(prize, chosen, &mut rng).unwrap();
                    assert_ne!(revealed, chosen);
                    assert_ne!(revealed, prize);
                }
            }
        }
    }

    #[test]
    fn reveal_only_goat_left() {
        let host = GameShowHost::new();
        let revealed = host
            .choose_door_to_reveal(Door::B, Door::A, &mut rand::thread_rng())
            .unwrap();
        assert_eq!(revealed, Door::C);
    }

    #[test]
    fn reveal_either_when_prize_chosen() {
        let host = GameShowHost::new();
        let mut rng = rand::thread_rng();
        let mut counts = HashMap::new();
        for _ in 0..10000 {
            let revealed = host.choose_door_to_reveal(Door::A, Door::A, &mut rng).unwrap();
            *counts.entry(revealed).or_insert(0u32) += 1;
        }
        assert_eq!(counts.get(&Door::A), None);
        for door in [Door::B, Door::C] {
            let count = counts[&door];
            assert!((4500..=5500).contains(&count), "{door}: {count}");
        }
    }

    #[test]
    fn winning_door_uniform() {
        let host = GameShowHost::new();
        let mut rng = rand::thread_rng();
        let mut counts = HashMap::new();
        for _ in 0..30000 {
            *counts
                .entry(host.decide_winning_door(&mut rng))
                .or_insert(0u32) += 1;
        }
        for door in Door::ALL {
            let count = counts[&door];
            assert!((9400..=10600).contains(&count), "{door}: {count}");
        }
    }

    #[test]
    fn name() {
        assert_eq!(GameShowHost::new().name(), "Monty");
        let host = GameShowHost::with_name("Wayne");
        assert_eq!(host.name(), "Wayne");
        assert_ne!(host.id(), GameShowHost::with_name("Wayne").id());
    }
}
