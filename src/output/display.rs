//! Display functions for command results

use crate::commands::SimulationResult;
use crate::core::MAX_INCORRECT;
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", percentage(result.wins, result.total_rounds)).green()
    );
    println!(
        "   Lost:             {} {}",
        result.losses,
        format!("({:.1}%)", percentage(result.losses, result.total_rounds)).red()
    );
    println!(
        "   Avg misses:       {}",
        format!("{:.2}", result.average_incorrect)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Misses per won round:".bright_cyan().bold());
    for misses in 0..MAX_INCORRECT {
        let count = *result.incorrect_distribution.get(&misses).unwrap_or(&0);
        let pct = percentage(count, result.wins.max(1));
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {misses}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest words (5+ misses)".yellow().bold());
        for (word, misses) in result.hardest_words.iter().take(5) {
            println!("   {} ({} misses)", word.to_uppercase().yellow(), misses);
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
