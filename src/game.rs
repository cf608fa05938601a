use crate::error::*;
use crate::{Contestant, Door, Host};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 一轮游戏的输赢
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Win,
    Lose,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundResult::Win)
    }
}

/// 一轮游戏的完整记录
#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
pub struct RoundOutcome {
    /// 奖品所在门
    prize: Door,

    /// 挑战者第一次选择的门
    chosen: Door,

    /// 主持人揭示的门
    revealed: Door,

    /// 挑战者的最终抉择
    final_choice: Door,

    /// 是否赢得奖品
    result: RoundResult,
}

impl RoundOutcome {
    /// 奖品所在门
    pub fn prize(&self) -> Door {
        self.prize
    }

    /// 挑战者第一次选择的门
    pub fn chosen(&self) -> Door {
        self.chosen
    }

    /// 主持人揭示的门
    pub fn revealed(&self) -> Door {
        self.revealed
    }

    /// 挑战者的最终抉择
    pub fn final_choice(&self) -> Door {
        self.final_choice
    }

    pub fn result(&self) -> RoundResult {
        self.result
    }
}

/// 一轮游戏的各个阶段
#[derive(Debug, Copy, Clone, Default)]
pub enum Stage {
    /// 尚未开始
    #[default]
    Start,

    /// 主持人已决定奖品位置
    PrizeDecided { prize: Door },

    /// 挑战者已选择
    PlayerChose { prize: Door, chosen: Door },

    /// 主持人已揭示
    DoorRevealed {
        prize: Door,
        chosen: Door,
        revealed: Door,
    },

    /// 挑战者已做出最终抉择
    FinalChoiceMade {
        prize: Door,
        chosen: Door,
        revealed: Door,
        final_choice: Door,
    },

    /// 已计分
    Scored { outcome: RoundOutcome },
}

/// 一轮游戏，各阶段只能按顺序推进
#[derive(Debug, Default)]
pub struct Round {
    stage: Stage,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前阶段
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// 放置奖品
    pub fn decide_prize(&mut self, prize: Door) -> Result<()> {
        match self.stage {
            Stage::Start => {
                self.stage = Stage::PrizeDecided { prize };
                Ok(())
            }
            _ => Err(Error::InvalidOperation),
        }
    }

    /// 挑战者做出选择
    pub fn choose(&mut self, chosen: Door) -> Result<()> {
        match self.stage {
            Stage::PrizeDecided { prize } => {
                self.stage = Stage::PlayerChose { prize, chosen };
                Ok(())
            }
            _ => Err(Error::InvalidOperation),
        }
    }

    /// 主持人揭示
    pub fn reveal(&mut self, revealed: Door) -> Result<()> {
        match self.stage {
            Stage::PlayerChose { prize, chosen } => {
                // 不能揭示挑战者选择的门，也不能揭示奖品
                if revealed == chosen || revealed == prize {
                    return Err(Error::HostContractViolation {
                        prize,
                        chosen,
                        revealed,
                    });
                }
                self.stage = Stage::DoorRevealed {
                    prize,
                    chosen,
                    revealed,
                };
                Ok(())
            }
            _ => Err(Error::InvalidOperation),
        }
    }

    /// 挑战者做出最终抉择
    pub fn decide(&mut self, final_choice: Door) -> Result<()> {
        match self.stage {
            Stage::DoorRevealed {
                prize,
                chosen,
                revealed,
            } => {
                if final_choice == revealed {
                    return Err(Error::FinalChoiceRevealed(revealed));
                }
                self.stage = Stage::FinalChoiceMade {
                    prize,
                    chosen,
                    revealed,
                    final_choice,
                };
                Ok(())
            }
            _ => Err(Error::InvalidOperation),
        }
    }

    /// 计分
    pub fn score(&mut self) -> Result<RoundOutcome> {
        match self.stage {
            Stage::FinalChoiceMade {
                prize,
                chosen,
                revealed,
                final_choice,
            } => {
                let result = if final_choice == prize {
                    RoundResult::Win
                } else {
                    RoundResult::Lose
                };
                let outcome = RoundOutcome {
                    prize,
                    chosen,
                    revealed,
                    final_choice,
                    result,
                };
                self.stage = Stage::Scored { outcome };
                Ok(outcome)
            }
            _ => Err(Error::InvalidOperation),
        }
    }

    /// 已计分的结果
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match &self.stage {
            Stage::Scored { outcome } => Some(outcome),
            _ => None,
        }
    }
}

/// 进行一轮完整的游戏
pub fn run_round<C, H, R>(contestant: &C, host: &H, rng: &mut R) -> Result<RoundOutcome>
where
    C: Contestant,
    H: Host,
    R: Rng + ?Sized,
{
    let mut round = Round::new();

    let prize = host.decide_winning_door(rng);
    round.decide_prize(prize)?;

    let chosen = contestant.choose_door(rng);
    round.choose(chosen)?;

    let revealed = host.choose_door_to_reveal(prize, chosen, rng)?;
    round.reveal(revealed)?;

    round.decide(contestant.make_final_choice(chosen, revealed)?)?;

    let outcome = round.score()?;
    tracing::trace!(?outcome, "round finished");
    Ok(outcome)
}
