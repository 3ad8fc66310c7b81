//! `list-checks` command.

use anyhow::Result;
use colored::Colorize;

use ugrid_check::checker::{self, Priority};
use ugrid_check::ui::colors;

pub fn cmd_list_checks() -> Result<()> {
    println!(
        "{} {} checks",
        checker::CHECKER_NAME.to_uppercase().bold(),
        checker::SPEC_VERSION
    );

    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        let header = format!("{} ({})", priority.display_header(), priority);
        println!();
        println!("{}", header.bold());
        println!("{}", "─".repeat(header.chars().count()));

        for info in checker::available_checks()
            .iter()
            .filter(|c| c.priority == priority)
        {
            let parent = info
                .parent
                .map(|p| format!(" (part of {})", p))
                .unwrap_or_default();
            println!(
                "  {:<24}{}",
                colors::identifier(info.name),
                parent.dimmed()
            );
            println!("      {}", info.description);
        }
    }
    Ok(())
}
