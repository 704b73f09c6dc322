use adw_components::{upgrade_html, ComponentRegistry, UpgradeReport};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn execute(file: &Path, output: Option<&Path>) -> Result<()> {
    let html = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {:?}", file))?;

    let registry = ComponentRegistry::with_defaults();
    let (upgraded, report) = upgrade_html(&html, &registry);

    match output {
        Some(path) => {
            fs::write(path, &upgraded).with_context(|| format!("Failed to write {:?}", path))?;
            print_report(&report);
            println!("Written to {}", path.display().to_string().cyan());
        }
        None => {
            println!("{}", upgraded);
            // Keep stdout clean for piping
            eprintln!("{}", summary(&report));
        }
    }

    Ok(())
}

fn print_report(report: &UpgradeReport) {
    println!("{}", summary(report));
    for degraded in &report.degraded {
        println!("  {} <{}>: {}", "⚠".yellow(), degraded.tag, degraded.reason);
    }
}

fn summary(report: &UpgradeReport) -> String {
    if report.is_clean() {
        format!("{} {} placeholders upgraded", "✓".green(), report.upgraded)
    } else {
        format!(
            "{} {} placeholders upgraded, {} degraded",
            "⚠".yellow(),
            report.upgraded,
            report.degraded.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_upgrade_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        let output = dir.path().join("out.html");
        fs::write(&input, r#"<main><adw-spinner size="small"></adw-spinner></main>"#).unwrap();

        execute(&input, Some(&output)).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("<main><div "));
        assert!(written.contains("adw-spinner small"));
        assert_eq!(written.matches("<adw-").count(), 0);
    }

    #[test]
    fn test_missing_input_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(&dir.path().join("nope.html"), None).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
