use core::fmt;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, HandValue};
use crate::domain::player::{House, Player};
use crate::domain::RoundId;
use crate::engine::config::{GameConfig, BLACKJACK, HOUSE_HIT_CEILING};
use crate::engine::errors::EngineError;
use crate::engine::outcome::{settlement_delta, RoundOutcome};
use crate::engine::round_history::{Party, RoundEventKind, RoundHistory};
use crate::engine::RandomSource;

/// Фаза раунда.
///
/// `Idle → PlayerTurn → HouseTurn → Resolved → (следующий раунд | Terminal)`.
/// Раздача происходит внутри `start_round` и отдельной фазы не имеет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    PlayerTurn,
    HouseTurn,
    Resolved,
    /// У игрока не осталось фишек.
    Terminal,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundPhase::Idle => "Idle",
            RoundPhase::PlayerTurn => "PlayerTurn",
            RoundPhase::HouseTurn => "HouseTurn",
            RoundPhase::Resolved => "Resolved",
            RoundPhase::Terminal => "Terminal",
        };
        write!(f, "{name}")
    }
}

/// Что внешний цикл узнаёт сразу после раздачи.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundStart {
    pub round_id: RoundId,
    /// У игрока натуральный блэкджек – раунд нужно сразу рассчитать.
    pub player_natural: bool,
}

/// Состояние игры: колода, игрок, казино и текущий раунд.
pub struct GameEngine<R: RandomSource> {
    config: GameConfig,
    rng: R,
    deck: Deck,
    player: Option<Player>,
    house: House,
    phase: RoundPhase,
    current_wager: Chips,
    round_id: RoundId,
    last_outcome: Option<RoundOutcome>,
    history: RoundHistory,
}

impl<R: RandomSource> GameEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(GameConfig::default(), rng)
    }

    pub fn with_config(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            deck: Deck::standard_52(),
            player: None,
            house: House::new(),
            phase: RoundPhase::Idle,
            current_wager: Chips::ZERO,
            round_id: 0,
            last_outcome: None,
            history: RoundHistory::new(),
        }
    }

    /// Зарегистрировать игрока со стартовым балансом. Повторная регистрация
    /// начинает новую сессию; во время раунда запрещена.
    pub fn register_player(&mut self, name: impl Into<String>) -> Result<(), EngineError> {
        if matches!(self.phase, RoundPhase::PlayerTurn | RoundPhase::HouseTurn) {
            return Err(EngineError::IllegalAction {
                action: "register_player",
                phase: self.phase,
            });
        }

        let player = Player::new(name, self.config.starting_chips);
        info!(
            "registered player `{}` with {} chips",
            player.name(),
            player.chips()
        );

        self.player = Some(player);
        self.house.clear_hand();
        self.phase = RoundPhase::Idle;
        self.current_wager = Chips::ZERO;
        self.round_id = 0;
        self.last_outcome = None;
        self.history = RoundHistory::new();
        Ok(())
    }

    /// Старт раунда:
    /// - проверяет ставку (состояние при ошибке не меняется);
    /// - сбрасывает и перемешивает колоду, очищает руки;
    /// - сдаёт игроку две открытые карты, казино – открытую и закрытую.
    pub fn start_round(&mut self, wager: Chips) -> Result<RoundStart, EngineError> {
        let player = self.player.as_ref().ok_or(EngineError::PlayerNotRegistered)?;

        match self.phase {
            RoundPhase::Idle | RoundPhase::Resolved => {}
            RoundPhase::Terminal => return Err(EngineError::GameOver),
            phase => {
                return Err(EngineError::IllegalAction {
                    action: "start_round",
                    phase,
                })
            }
        }

        if wager < self.config.min_wager || !player.can_wager(wager) {
            warn!("rejected wager {} (balance {})", wager, player.chips());
            return Err(EngineError::InvalidWager {
                wager,
                available: player.chips(),
            });
        }

        self.deck.reset();
        self.deck.shuffle_with(&mut self.rng);

        self.house.clear_hand();
        if let Some(p) = self.player.as_mut() {
            p.clear_hand();
        }

        self.round_id += 1;
        self.current_wager = wager;
        self.last_outcome = None;
        self.history = RoundHistory::new();
        self.history.push(RoundEventKind::RoundStarted {
            round_id: self.round_id,
            wager,
        });

        self.deal_to(Party::Player, false)?;
        self.deal_to(Party::Player, false)?;
        self.deal_to(Party::House, false)?;
        self.deal_to(Party::House, true)?;

        self.phase = RoundPhase::PlayerTurn;

        let player_natural = self.player_hand()?.is_natural_blackjack();
        info!(
            "round {} started: wager={}, natural={}",
            self.round_id, wager, player_natural
        );

        Ok(RoundStart {
            round_id: self.round_id,
            player_natural,
        })
    }

    /// Игрок берёт карту. Ход после этого не завершается автоматически –
    /// перебор вызывающий проверяет через `player_busted`.
    /// С натуральным блэкджеком на руке ходить нельзя, остаётся `settle`.
    pub fn player_hit(&mut self) -> Result<Card, EngineError> {
        self.ensure_player_may_act("player_hit")?;
        self.deal_to(Party::Player, false)
    }

    pub fn player_busted(&self) -> Result<bool, EngineError> {
        Ok(self.player_hand()?.is_bust())
    }

    /// Игрок остановился, ход переходит к казино.
    pub fn player_stand(&mut self) -> Result<(), EngineError> {
        self.ensure_player_may_act("player_stand")?;
        self.phase = RoundPhase::HouseTurn;
        self.history.push(RoundEventKind::PlayerStood);
        debug!(
            "player stands on {}",
            self.player_hand_value().unwrap_or(HandValue::Unknown)
        );
        Ok(())
    }

    /// Открыть закрытую карту казино. Повторный вызов ничего не делает.
    pub fn reveal_house_hand(&mut self) -> Result<(), EngineError> {
        self.ensure_phase(RoundPhase::HouseTurn, "reveal_house_hand")?;
        if !self.house.hand().has_hidden() {
            return Ok(());
        }

        self.house.reveal_hand();
        let hand = self.house.hand();
        debug!("house reveals {} ({})", hand, hand.total_value());
        self.history.push(RoundEventKind::HouseRevealed {
            hand: hand.cards().to_vec(),
        });
        Ok(())
    }

    /// Казино добирает, пока не обгоняет игрока и держит не больше 16.
    pub fn house_should_hit(&self) -> Result<bool, EngineError> {
        self.ensure_phase(RoundPhase::HouseTurn, "house_should_hit")?;
        let (player_total, house_total) = self.known_totals()?;
        Ok(house_total <= player_total && house_total <= HOUSE_HIT_CEILING)
    }

    pub fn house_hit(&mut self) -> Result<Card, EngineError> {
        self.ensure_phase(RoundPhase::HouseTurn, "house_hit")?;
        if self.house.hand().has_hidden() {
            return Err(EngineError::HouseHandHidden);
        }
        self.deal_to(Party::House, false)
    }

    /// Весь ход казино: вскрыть руку и добирать по политике.
    /// Перебор казино сразу останавливает добор.
    pub fn play_house_turn(&mut self) -> Result<(), EngineError> {
        self.reveal_house_hand()?;
        while self.house_should_hit()? {
            self.house_hit()?;
            if self.house.hand().is_bust() {
                break;
            }
        }
        Ok(())
    }

    pub fn player_won(&self) -> Result<bool, EngineError> {
        let (player_total, house_total) = self.known_totals()?;
        Ok(self.player_hand()?.is_natural_blackjack()
            || player_total > house_total
            || house_total > BLACKJACK)
    }

    pub fn house_won(&self) -> Result<bool, EngineError> {
        let (player_total, house_total) = self.known_totals()?;
        Ok(self.house.hand().is_natural_blackjack()
            || player_total < house_total
            || player_total > BLACKJACK)
    }

    /// Ничья по очкам. Смысл имеет, только если не сработали
    /// `player_won` и `house_won`.
    pub fn is_push(&self) -> Result<bool, EngineError> {
        let (player_total, house_total) = self.known_totals()?;
        Ok(player_total == house_total)
    }

    /// Определить итог раунда и изменить баланс. Второй расчёт того же
    /// раунда – ошибка.
    pub fn settle(&mut self) -> Result<RoundOutcome, EngineError> {
        let outcome = match self.phase {
            RoundPhase::PlayerTurn => {
                let hand = self.player_hand()?;
                if hand.is_natural_blackjack() {
                    RoundOutcome::PlayerBlackjack
                } else if hand.is_bust() {
                    RoundOutcome::PlayerBust
                } else {
                    return Err(EngineError::IllegalAction {
                        action: "settle",
                        phase: self.phase,
                    });
                }
            }
            RoundPhase::HouseTurn => self.resolve_showdown()?,
            RoundPhase::Resolved | RoundPhase::Terminal => {
                return Err(EngineError::RoundAlreadySettled)
            }
            RoundPhase::Idle => {
                return Err(EngineError::IllegalAction {
                    action: "settle",
                    phase: self.phase,
                })
            }
        };

        let delta = settlement_delta(outcome, self.current_wager);
        let player = self.player.as_mut().ok_or(EngineError::PlayerNotRegistered)?;
        player.add_chips(delta);
        let balance = player.chips();
        let broke = !player.has_chips();

        self.history.push(RoundEventKind::RoundSettled {
            outcome,
            delta,
            balance,
        });
        self.last_outcome = Some(outcome);
        self.phase = if broke {
            RoundPhase::Terminal
        } else {
            RoundPhase::Resolved
        };

        info!(
            "round {} settled: {:?}, delta={}, balance={}",
            self.round_id, outcome, delta, balance
        );
        if broke {
            info!("player is out of chips, game over");
        }

        Ok(outcome)
    }

    // ----------------- доступ к состоянию -----------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::Terminal
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn current_wager(&self) -> Chips {
        self.current_wager
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn chips(&self) -> Option<Chips> {
        self.player.as_ref().map(Player::chips)
    }

    pub fn player_hand_display(&self) -> Option<String> {
        self.player.as_ref().map(|p| p.hand().to_string())
    }

    pub fn player_hand_value(&self) -> Option<HandValue> {
        self.player.as_ref().map(|p| p.hand().total_value())
    }

    pub fn house_hand_display(&self) -> String {
        self.house.hand().to_string()
    }

    pub fn house_hand_value(&self) -> HandValue {
        self.house.hand().total_value()
    }

    // ----------------- внутреннее -----------------

    fn ensure_phase(&self, expected: RoundPhase, action: &'static str) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::IllegalAction {
                action,
                phase: self.phase,
            })
        }
    }

    /// Ход игрока открыт, и на руке не натуральный блэкджек.
    fn ensure_player_may_act(&self, action: &'static str) -> Result<(), EngineError> {
        self.ensure_phase(RoundPhase::PlayerTurn, action)?;
        if self.player_hand()?.is_natural_blackjack() {
            return Err(EngineError::IllegalAction {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn player_hand(&self) -> Result<&Hand, EngineError> {
        self.player
            .as_ref()
            .map(Player::hand)
            .ok_or(EngineError::PlayerNotRegistered)
    }

    /// Суммы игрока и казино; обе должны быть известны.
    fn known_totals(&self) -> Result<(u32, u32), EngineError> {
        match (
            self.player_hand()?.total_value(),
            self.house.hand().total_value(),
        ) {
            (HandValue::Known(p), HandValue::Known(h)) => Ok((p, h)),
            _ => Err(EngineError::HouseHandHidden),
        }
    }

    /// Итог после хода казино. Порядок проверок важен: перебор игрока
    /// проигрывает даже при переборе казино.
    fn resolve_showdown(&self) -> Result<RoundOutcome, EngineError> {
        let player_hand = self.player_hand()?;
        if player_hand.is_natural_blackjack() {
            return Ok(RoundOutcome::PlayerBlackjack);
        }
        if player_hand.is_bust() {
            return Ok(RoundOutcome::PlayerBust);
        }

        let (_, house_total) = self.known_totals()?;
        if house_total > BLACKJACK {
            Ok(RoundOutcome::HouseBust)
        } else if self.player_won()? {
            Ok(RoundOutcome::PlayerWin)
        } else if self.house_won()? {
            Ok(RoundOutcome::HouseWin)
        } else {
            Ok(RoundOutcome::Push)
        }
    }

    fn deal_to(&mut self, to: Party, face_down: bool) -> Result<Card, EngineError> {
        let card = self.deck.draw(face_down).ok_or(EngineError::EmptyDeck)?;
        match to {
            Party::Player => self
                .player
                .as_mut()
                .ok_or(EngineError::PlayerNotRegistered)?
                .receive_card(card),
            Party::House => self.house.receive_card(card),
        }

        debug!("dealt {} to {}", card, to);
        self.history.push(RoundEventKind::CardDealt {
            to,
            card: if face_down { None } else { Some(card) },
            face_down,
        });
        Ok(card)
    }
}
