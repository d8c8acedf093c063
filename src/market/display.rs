use owo_colors::OwoColorize;

use super::view::ListingRow;

/// Print derived rows to stdout for the `items` command
pub fn print_listings(rows: &[ListingRow], limit: usize, detailed: bool) {
    if rows.is_empty() {
        println!("{}", "No listings matched".bright_yellow());
        return;
    }

    for (idx, row) in rows.iter().take(limit).enumerate() {
        println!(
            "{} {}",
            format!("{}.", idx + 1).bright_black(),
            row.title.bright_white()
        );
        println!("   {} {}", "Price:".bright_black(), row.price.bright_yellow());
        println!(
            "   {} {}  {} {}",
            "Origin:".bright_black(),
            row.origin.bright_cyan(),
            "Country:".bright_black(),
            row.country.bright_cyan()
        );
        println!(
            "   {} {}  {} {}",
            "Guarantee:".bright_black(),
            row.guarantee,
            "Hours:".bright_black(),
            row.hours
        );

        if detailed {
            println!("   {} {}", "Published:".bright_black(), row.published);
            println!(
                "   {} {}",
                "Last Activity:".bright_black(),
                row.last_activity
            );
            println!("   {} {}", "Link:".bright_black(), row.url.bright_blue());
        }
    }

    if rows.len() > limit {
        println!(
            "{}",
            format!("... and {} more (raise --limit to see them)", rows.len() - limit)
                .bright_black()
        );
    }
}
