use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::RoundId;
use crate::engine::outcome::RoundOutcome;

/// Кому сдана карта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Party {
    Player,
    House,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Player => write!(f, "игрок"),
            Party::House => write!(f, "казино"),
        }
    }
}

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Ставка принята, раунд начался.
    RoundStarted { round_id: RoundId, wager: Chips },

    /// Сдана карта. Закрытая карта пишется как `None`, чтобы лог
    /// не раскрывал её до вскрытия.
    CardDealt {
        to: Party,
        card: Option<Card>,
        face_down: bool,
    },

    /// Игрок остановился, ход переходит к казино.
    PlayerStood,

    /// Казино вскрыло руку.
    HouseRevealed { hand: Vec<Card> },

    /// Раунд рассчитан.
    RoundSettled {
        outcome: RoundOutcome,
        delta: i64,
        balance: Chips,
    },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история текущего раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Сколько раз раунд был рассчитан (в корректной истории – не больше одного).
    pub fn settlements(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, RoundEventKind::RoundSettled { .. }))
            .count()
    }
}
