use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use honk_core::{Casino, CasinoError, Player, Wager};

const BETTOR: &str = "Player";

pub fn run(stake: i64, wager: &str, balance: i64, seed: u64) -> Result<(), String> {
    let mut casino = Casino::new();
    casino
        .add_player(Player::new(BETTOR, balance))
        .map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(seed);
    let wager: Wager = wager.parse().unwrap_or_else(|never| match never {});

    println!(
        "  {} {stake} on {} {}",
        "Bet".bold(),
        wager.to_string().cyan(),
        format!("(balance {balance}, seed={seed})").dimmed()
    );

    match casino.place_bet(BETTOR, stake, wager, &mut rng) {
        Ok(spin) => {
            let after = casino.find_player_balance(BETTOR).map_err(|e| e.to_string())?;
            println!("  The ball landed on {}", spin.pocket.to_string().bold());
            if spin.won {
                println!("  {} payout {}", "WIN".green().bold(), spin.payout);
            } else {
                println!("  {}", "LOSS".red().bold());
            }
            println!("  Balance: {balance} -> {after} ({:+})", after - balance);
            Ok(())
        }
        Err(e @ CasinoError::InvalidWager(_)) => {
            let after = casino.find_player_balance(BETTOR).map_err(|e| e.to_string())?;
            println!(
                "  {} stake of {stake} forfeited, balance: {balance} -> {after}",
                "FORFEIT".red().bold()
            );
            Err(e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}
