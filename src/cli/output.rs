//! Output formatting helpers for CLI

use crate::{solver::Analysis, tictactoe::Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Print a board next to its cell-index legend
pub fn print_board(board: &Board) {
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| board.get(row * 3 + col).to_char().to_string())
            .collect();
        let legend: Vec<String> = (0..3).map(|col| (row * 3 + col).to_string()).collect();
        println!("  {}     {}", cells.join(" "), legend.join(" "));
    }
}

/// Print every candidate's score and the search statistics
pub fn print_analysis(analysis: &Analysis) {
    print_subsection("Candidate scores (+1 O wins, -1 X wins)");
    for candidate in &analysis.scores {
        let marker = if analysis.best.map(|b| b.position) == Some(candidate.position) {
            "  <- chosen"
        } else {
            ""
        };
        println!(
            "  position {} (row {}, col {}): {:+}{marker}",
            candidate.position,
            candidate.position / 3,
            candidate.position % 3,
            candidate.score
        );
    }
    print_kv("Nodes", &format_number(analysis.stats.nodes as usize));
    print_kv("Cutoffs", &format_number(analysis.stats.cutoffs as usize));
}
