//! Statistics command

use crate::output::print_stats;
use crate::stats::Stats;
use colored::Colorize;

/// Print stored statistics
pub fn run_stats(stats: &Stats) {
    if stats.games_played == 0 {
        println!("\n{}", "No games finished yet.".bright_black());
    }
    print_stats(stats, None);
    println!();
}
