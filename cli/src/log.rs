use colored::Colorize;

/// Prints a bold, prominent title for major sections of output.
pub fn print_title(text: &str) {
    println!("{}", format!("\n{}", text).bold());
}

/// Prints an empty line to separate sections of output.
pub fn print_divider() {
    println!();
}

/// Prints a highlighted section header.
pub fn print_section_header(text: &str) {
    println!("{}", format!("\n=== {} ===", text).yellow().bold());
}

/// Prints an informational message with a cyan arrow prefix.
pub fn print_message(text: &str) {
    println!("{}", format!("→ {}", text).cyan());
}

/// Prints a count or metric with a blue diamond prefix.
pub fn print_count(text: &str) {
    println!("{}", format!("⟐ {}", text).blue());
}

/// Prints an error message with a red cross prefix.
pub fn print_error(text: &str) {
    println!("{}", format!("✗ {}", text).red());
}
