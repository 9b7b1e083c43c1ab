use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::{GameEngine, RandomSource, RoundOutcome};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_round_view;

/// Команды клиента. Каждая доводит раунд до ближайшей точки, где
/// нужно решение игрока, или до расчёта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Зарегистрировать игрока (новая сессия со стартовым балансом).
    RegisterPlayer { name: String },

    /// Сделать ставку и раздать карты. Натуральный блэкджек
    /// рассчитывается сразу.
    StartRound { wager: Chips },

    /// Взять карту. Перебор рассчитывается сразу.
    Hit,

    /// Остановиться: казино доигрывает, раунд рассчитывается.
    Stand,
}

/// Применить команду к движку.
pub fn apply_command<R: RandomSource>(
    engine: &mut GameEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::RegisterPlayer { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(ApiError::BadRequest("player name is empty".into()));
            }
            engine.register_player(name)?;
            round_state(engine)
        }

        Command::StartRound { wager } => {
            let start = engine.start_round(wager)?;
            if start.player_natural {
                let outcome = engine.settle()?;
                return round_finished(engine, outcome);
            }
            round_state(engine)
        }

        Command::Hit => {
            engine.player_hit()?;
            if engine.player_busted()? {
                let outcome = engine.settle()?;
                return round_finished(engine, outcome);
            }
            round_state(engine)
        }

        Command::Stand => {
            engine.player_stand()?;
            engine.play_house_turn()?;
            let outcome = engine.settle()?;
            round_finished(engine, outcome)
        }
    }
}

fn round_state<R: RandomSource>(engine: &GameEngine<R>) -> Result<CommandResponse, ApiError> {
    build_round_view(engine)
        .map(CommandResponse::RoundState)
        .ok_or_else(|| ApiError::Internal("player is not registered".into()))
}

fn round_finished<R: RandomSource>(
    engine: &GameEngine<R>,
    outcome: RoundOutcome,
) -> Result<CommandResponse, ApiError> {
    let view = build_round_view(engine)
        .ok_or_else(|| ApiError::Internal("player is not registered".into()))?;
    Ok(CommandResponse::RoundFinished { view, outcome })
}
