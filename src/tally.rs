use crate::error::*;
use crate::{run_round, Contestant, Host, Player, Policy, RoundResult};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 模拟设置
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Settings {
    /// 每种策略进行的轮数
    pub rounds: u32,

    /// 随机数种子，未设置时使用线程随机数
    pub seed: Option<u64>,
}

impl Settings {
    pub fn new(rounds: u32, seed: Option<u64>) -> Self {
        Self { rounds, seed }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(1000, None)
    }
}

/// 输赢计数
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Default, Eq, PartialEq)]
pub struct Tally {
    wins: u32,
    losses: u32,
}

impl Tally {
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win => self.wins += 1,
            RoundResult::Lose => self.losses += 1,
        }
    }

    /// 赢的轮数
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// 输的轮数
    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    /// 胜率，没有进行任何一轮时为 0
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.wins as f64 / total as f64,
        }
    }
}

/// 同一对主持人和挑战者进行 `rounds` 轮游戏并统计输赢
pub fn simulate<C, H, R>(contestant: &C, host: &H, rounds: u32, rng: &mut R) -> Result<Tally>
where
    C: Contestant,
    H: Host,
    R: Rng + ?Sized,
{
    let mut tally = Tally::default();
    for _ in 0..rounds {
        tally.record(run_round(contestant, host, rng)?.result());
    }
    tracing::debug!(wins = tally.wins, losses = tally.losses, "simulation finished");
    Ok(tally)
}

/// 同一个主持人依次模拟每种策略，每种策略一份新的计数。
///
/// 所有策略共用一个随机数生成器，设置了种子时整个过程可以复现。
pub fn simulate_policies<H: Host>(
    policies: &[Policy],
    host: &H,
    settings: Settings,
) -> Result<Vec<PolicyReport>> {
    let mut rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    policies
        .iter()
        .map(|&policy| {
            let player = Player::new(policy);
            tracing::debug!(player = %player.id(), %policy, "simulating policy");
            let tally = simulate(&player, host, settings.rounds, rng.as_mut())?;
            Ok(PolicyReport { policy, tally })
        })
        .collect()
}

/// 一种策略的统计结果
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct PolicyReport {
    pub policy: Policy,
    pub tally: Tally,
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Policy: '{}'  Wins: {}  Losses: {}",
            self.policy,
            self.tally.wins(),
            self.tally.losses()
        )
    }
}
