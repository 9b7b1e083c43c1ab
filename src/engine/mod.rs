//! Движок блэкджека: раунд от ставки до расчёта фишек.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `start_round` – принять ставку, перемешать колоду, раздать карты
//!   - `player_hit` / `player_stand` – ход игрока
//!   - `reveal_house_hand` / `house_should_hit` / `house_hit` – ход казино
//!   - `settle` – определить итог и один раз изменить баланс

pub mod config;
pub mod errors;
pub mod game_loop;
pub mod outcome;
pub mod round_history;

pub use config::{GameConfig, BLACKJACK, HOUSE_HIT_CEILING, STARTING_CHIPS};
pub use errors::EngineError;
pub use game_loop::{GameEngine, RoundPhase, RoundStart};
pub use outcome::{settlement_delta, RoundOutcome};
pub use round_history::{Party, RoundEvent, RoundEventKind, RoundHistory};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
