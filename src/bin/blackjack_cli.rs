// src/bin/blackjack_cli.rs

use std::error::Error;

use blackjack_engine::api::build_round_view;
use blackjack_engine::domain::chips::Chips;
use blackjack_engine::engine::{
    settlement_delta, EngineError, GameEngine, RandomSource, RoundOutcome,
};
use blackjack_engine::infra::{DeterministicRng, SystemRng};
use clap::Parser;
use dialoguer::{Input, Select};

/// Консольный блэкджек против казино.
#[derive(Parser, Debug)]
#[command(name = "blackjack_cli")]
struct Args {
    /// Имя игрока (если не задано – спросим).
    #[arg(long)]
    name: Option<String>,

    /// Seed для воспроизводимых раздач.
    #[arg(long)]
    seed: Option<u64>,

    /// Печатать состояние раунда ещё и в JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let result = match args.seed {
        Some(seed) => run(GameEngine::new(DeterministicRng::from_seed(seed)), &args),
        None => run(GameEngine::new(SystemRng), &args),
    };

    if let Err(e) = result {
        eprintln!("[CLI] ОШИБКА: {e}");
        std::process::exit(1);
    }
}

/// Игровая сессия: раунды идут, пока у игрока есть фишки.
fn run<R: RandomSource>(mut engine: GameEngine<R>, args: &Args) -> Result<(), Box<dyn Error>> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => Input::<String>::new()
            .with_prompt("Введите ваше имя")
            .interact_text()?,
    };
    engine.register_player(name)?;

    while !engine.is_game_over() {
        let chips = engine.chips().unwrap_or(Chips::ZERO);
        println!();
        println!("Фишек доступно: {chips}");

        let wager: u64 = Input::new()
            .with_prompt("Сколько фишек ставите?")
            .interact_text()?;

        let start = match engine.start_round(Chips::new(wager)) {
            Ok(start) => start,
            Err(e @ EngineError::InvalidWager { .. }) => {
                println!("{e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        print_player_hand(&engine);

        if start.player_natural {
            let outcome = engine.settle()?;
            report(&engine, outcome, args.json)?;
            continue;
        }

        if play_player_turn(&mut engine)? {
            let outcome = engine.settle()?;
            report(&engine, outcome, args.json)?;
            continue;
        }

        engine.play_house_turn()?;
        println!();
        println!(
            "Рука казино: {} (сумма: {})",
            engine.house_hand_display(),
            engine.house_hand_value()
        );

        let outcome = engine.settle()?;
        report(&engine, outcome, args.json)?;
    }

    println!("У вас закончились фишки. Игра окончена.");
    Ok(())
}

/// Ход игрока. `true` – игрок перебрал.
fn play_player_turn<R: RandomSource>(engine: &mut GameEngine<R>) -> Result<bool, Box<dyn Error>> {
    let choices = ["Взять карту", "Остановиться"];
    loop {
        let selection = Select::new()
            .with_prompt("Ваш ход")
            .items(&choices[..])
            .default(0)
            .interact()?;

        if selection != 0 {
            engine.player_stand()?;
            return Ok(false);
        }

        engine.player_hit()?;
        print_player_hand(engine);
        if engine.player_busted()? {
            return Ok(true);
        }
    }
}

fn print_player_hand<R: RandomSource>(engine: &GameEngine<R>) {
    let name = engine.player().map(|p| p.name()).unwrap_or("игрок");
    println!();
    println!(
        "Рука {}: {}",
        name,
        engine.player_hand_display().unwrap_or_default()
    );
    if let Some(value) = engine.player_hand_value() {
        println!("Сумма: {value}");
    }
    println!(
        "Казино: {} (сумма: {})",
        engine.house_hand_display(),
        engine.house_hand_value()
    );
}

fn report<R: RandomSource>(
    engine: &GameEngine<R>,
    outcome: RoundOutcome,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    println!("{outcome}");
    let wager = engine.current_wager();
    if outcome.is_player_win() {
        println!("Выигрыш: +{}", settlement_delta(outcome, wager));
    } else if outcome.is_house_win() {
        println!("Проигрыш: {wager}");
    }
    if json {
        if let Some(view) = build_round_view(engine) {
            println!("{}", view.to_json()?);
        }
    }
    Ok(())
}
