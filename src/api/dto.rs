use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::HandValue;
use crate::domain::RoundId;
use crate::engine::{RoundOutcome, RoundPhase};

/// DTO текущего раунда для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundViewDto {
    pub player_name: String,
    pub chips: Chips,
    pub wager: Chips,
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub player_hand: String,
    pub player_value: HandValue,
    pub player_cards: Vec<Option<Card>>,
    pub house_hand: String,
    pub house_value: HandValue,
    /// Закрытые карты – `None`, ранг и масть до вскрытия не отдаём.
    pub house_cards: Vec<Option<Card>>,
    pub last_outcome: Option<RoundOutcome>,
}

impl RoundViewDto {
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|e| ApiError::Internal(e.to_string()))
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Раунд продолжается – обновлённое состояние.
    RoundState(RoundViewDto),

    /// Раунд рассчитан.
    RoundFinished {
        view: RoundViewDto,
        outcome: RoundOutcome,
    },
}
