//! Общие помощники для интеграционных тестов.

#![allow(dead_code)]

use blackjack_engine::domain::{Card, Deck, Hand};
use blackjack_engine::engine::{GameEngine, RandomSource};

/// Простой RNG для тестов: shuffle ничего не делает => колода остаётся
/// в стандартном порядке.
#[derive(Default)]
pub struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

/// RNG со сценарием: "перемешивание" кладёт заданные карты на верх колоды
/// в порядке раздачи. Работает, потому что движок перед каждым shuffle
/// сбрасывает колоду в стандартный порядок.
pub struct ScriptedRng {
    rounds: Vec<Vec<usize>>,
    next: usize,
}

impl ScriptedRng {
    /// Один раунд: `deal_order` – карты в порядке, в котором их сдаст движок
    /// (игрок, игрок, казино открытая, казино закрытая, затем добор).
    pub fn dealing(deal_order: &[&str]) -> Self {
        Self::rounds(&[deal_order])
    }

    /// Несколько раундов подряд; после последнего сценарий повторяется.
    pub fn rounds(rounds: &[&[&str]]) -> Self {
        Self {
            rounds: rounds.iter().map(|r| permutation_for(r)).collect(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        let perm = &self.rounds[self.next % self.rounds.len()];
        self.next += 1;
        apply_permutation(slice, perm);
    }
}

/// perm[i] – индекс в стандартной колоде карты, которая окажется на позиции i.
/// Верх колоды – конец вектора, поэтому сценарий кладём в хвост задом наперёд.
fn permutation_for(deal_order: &[&str]) -> Vec<usize> {
    let standard = Deck::standard_52();
    let wanted: Vec<Card> = deal_order.iter().map(|s| card(s)).collect();

    let index_of = |c: &Card| {
        standard
            .cards()
            .iter()
            .position(|x| x == c)
            .expect("card from standard deck")
    };

    let mut perm: Vec<usize> = standard
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, c)| !wanted.contains(c))
        .map(|(i, _)| i)
        .collect();
    perm.extend(wanted.iter().rev().map(index_of));
    assert_eq!(perm.len(), 52, "scripted cards must be distinct");
    perm
}

/// new[i] = old[perm[i]], на месте, по циклам перестановки.
fn apply_permutation<T>(slice: &mut [T], perm: &[usize]) {
    assert_eq!(slice.len(), perm.len());
    let mut visited = vec![false; perm.len()];
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut j = start;
        loop {
            visited[j] = true;
            let k = perm[j];
            if k == start {
                break;
            }
            slice.swap(j, k);
            j = k;
        }
    }
}

pub fn card(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

pub fn hand(cards: &[&str]) -> Hand {
    Hand::from_cards(cards.iter().map(|s| card(s)).collect())
}

/// Движок с зарегистрированным игроком "alice" (100 фишек).
pub fn engine_with<R: RandomSource>(rng: R) -> GameEngine<R> {
    let mut engine = GameEngine::new(rng);
    engine.register_player("alice").expect("register player");
    engine
}
