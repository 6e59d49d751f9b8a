use colored::Colorize;

/// Prints a green check line for a completed step.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

/// Prints a red cross line for a failed step.
pub fn error(message: &str) {
    println!("{} {}", "✗".red().bold(), message.red());
}

/// Prints a yellow arrow line for a neutral status update.
pub fn info(message: &str) {
    println!("{} {}", "→".yellow(), message.yellow());
}

/// Prints a ruled section header.
pub fn header(message: &str) {
    let rule = "=".repeat(50);
    println!("\n{}", rule.blue().bold());
    println!("{} {}", "✦".cyan(), message.cyan().bold());
    println!("{}", rule.blue().bold());
}

/// Shows the current tool version.
pub fn show_version() {
    println!("Gotcha Auto-Reff v{}", env!("CARGO_PKG_VERSION"));
}
