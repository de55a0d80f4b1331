use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use honk_simulation::{Roster, SimConfig, SimEventKind, Simulation, Verdict};

/// Flags of the `simulate` subcommand.
pub struct Options {
    pub seed: u64,
    pub rounds: u64,
    pub players: usize,
    pub geese: usize,
    pub roster: Option<PathBuf>,
    pub threshold: i64,
    pub verbose: bool,
}

pub fn run(opts: &Options) -> Result<(), String> {
    let roster = match &opts.roster {
        Some(path) => Roster::load(path).map_err(|e| e.to_string())?,
        None => {
            // Seeded separately so the roster does not shift the game's rolls
            let mut rng = StdRng::seed_from_u64(opts.seed.wrapping_add(1));
            Roster::generate(opts.players, opts.geese, &mut rng)
        }
    };
    let casino = roster.into_casino().map_err(|e| e.to_string())?;

    let config = SimConfig::default()
        .with_seed(opts.seed)
        .with_max_rounds(opts.rounds)
        .with_victory_threshold(opts.threshold)
        .with_max_events(500);
    config.validate().map_err(|e| e.to_string())?;
    let mut sim = Simulation::new(casino, config);
    let verdict = sim.run();

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({} rounds max, seed={}, threshold={})",
            opts.rounds, opts.seed, opts.threshold
        )
        .dimmed()
    );
    println!(
        "  {} rounds played, {} events logged",
        sim.round(),
        sim.events().len()
    );
    println!();

    if opts.verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let round_label = format!("[round {:>3}]", event.round).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {round_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let bankruptcies: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| matches!(e.kind, SimEventKind::Bankrupt { .. }))
            .collect();
        if !bankruptcies.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in &bankruptcies {
                println!("  {}  {}", "BANKRUPT".red().bold(), event.description);
            }
            println!();
        }
    }

    // Standings
    println!("  {}", "Players".bold().underline());
    println!();
    if sim.casino().player_count() == 0 {
        println!("  {}", "(nobody left at the tables)".dimmed());
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Player", "Balance"]);
        for player in sim.casino().players() {
            table.add_row(vec![player.name.clone(), player.balance.to_string()]);
        }
        println!("{table}");
    }
    println!();

    println!("  {}", "Geese".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Goose", "Role", "Volume", "Balance"]);
    for goose in sim.casino().geese() {
        table.add_row(vec![
            goose.name.clone(),
            goose.role.to_string(),
            goose.honk_volume.to_string(),
            goose.balance.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    match verdict {
        Verdict::GeeseWin => println!("  {}", "The geese win. Every player is bankrupt.".red().bold()),
        Verdict::PlayerWin { name, balance } => println!(
            "  {} {name} wins with a balance of {balance}",
            "WINNER".green().bold()
        ),
        Verdict::Undecided => println!(
            "  {} after {} rounds",
            "No winner".yellow().bold(),
            sim.round()
        ),
    }

    Ok(())
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::ChipStolen { .. } | SimEventKind::PlayerScared { .. } => description.yellow(),
        SimEventKind::GooseReplaced { .. } => description.cyan(),
        SimEventKind::BetPlaced { won: true, .. } => description.green(),
        SimEventKind::BetPlaced { won: false, .. } => description.normal(),
        SimEventKind::ActionFailed { .. } | SimEventKind::NoActor { .. } => description.dimmed(),
        SimEventKind::Bankrupt { .. } | SimEventKind::GeeseWon => description.red().bold(),
        SimEventKind::PlayerWon { .. } => description.green().bold(),
    }
}
