use adw_app::{blog_routes, Config};
use anyhow::Result;
use colored::Colorize;

pub fn list(config: &Config) -> Result<()> {
    let table = blog_routes(config.router.case_insensitive);

    println!("{}", "Routes (match order)".green().bold());
    println!();
    for route in table.routes() {
        let kind = if route.is_literal() { "literal" } else { "dynamic" };
        println!(
            "  {:<20} → {:<12} {}",
            route.pattern.cyan(),
            route.view,
            kind.dimmed()
        );
    }
    println!();
    println!(
        "Case-insensitive: {}",
        if table.is_case_insensitive() { "Yes" } else { "No" }
    );

    Ok(())
}

pub fn resolve(config: &Config, hash: &str) -> Result<()> {
    let table = blog_routes(config.router.case_insensitive);

    match table.match_path(hash) {
        Some(found) => {
            println!("{} {}", "View:".green().bold(), found.view.cyan());
            println!("Pattern: {}", found.pattern);
            let mut params: Vec<_> = found.params.iter().collect();
            params.sort();
            for (name, value) in params {
                println!("  {} = {}", name, value);
            }
        }
        None => {
            println!("{} no route matches {}", "404:".yellow().bold(), hash);
        }
    }

    Ok(())
}
