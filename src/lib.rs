//! 三门问题（Monty Hall）模拟。
//!
//! 主持人决定奖品位置，挑战者选择一个门，主持人再揭示一个没有奖品的门，
//! 最后挑战者按固定策略（坚持或改变）做出抉择。重复多轮即可比较两种策略的胜率。

mod door;
mod error;
mod game;
mod host;
mod player;
mod tally;

pub use door::Door;
pub use error::*;
pub use game::{run_round, Round, RoundOutcome, RoundResult, Stage};
pub use host::{GameShowHost, Host};
pub use player::{Contestant, Player, Policy};
pub use tally::{simulate, simulate_policies, PolicyReport, Settings, Tally};
pub use uuid::Uuid;
