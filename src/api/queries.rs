use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::engine::{GameEngine, RandomSource};

use super::dto::RoundViewDto;

/// Сформировать DTO раунда. `None`, пока игрок не зарегистрирован.
pub fn build_round_view<R: RandomSource>(engine: &GameEngine<R>) -> Option<RoundViewDto> {
    let player = engine.player()?;
    let house = engine.house().hand();

    Some(RoundViewDto {
        player_name: player.name().to_string(),
        chips: player.chips(),
        wager: engine.current_wager(),
        round_id: engine.round_id(),
        phase: engine.phase(),
        player_hand: player.hand().to_string(),
        player_value: player.hand().total_value(),
        player_cards: visible_cards(player.hand()),
        house_hand: house.to_string(),
        house_value: house.total_value(),
        house_cards: visible_cards(house),
        last_outcome: engine.last_outcome(),
    })
}

fn visible_cards(hand: &Hand) -> Vec<Option<Card>> {
    hand.cards()
        .iter()
        .map(|c| if c.is_hidden() { None } else { Some(*c) })
        .collect()
}
