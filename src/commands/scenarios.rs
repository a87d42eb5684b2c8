//! Handler for `standin scenarios`.

use crate::adapters::fixed::Scenario;

/// Print one line per canned scenario: name, status and description.
///
/// # Errors
///
/// Never fails; returns `Result` for dispatch uniformity.
pub fn run() -> Result<(), String> {
    for line in lines() {
        println!("{line}");
    }
    Ok(())
}

fn lines() -> Vec<String> {
    let width = Scenario::ALL.iter().map(|s| s.name().len()).max().unwrap_or(0);
    Scenario::ALL
        .iter()
        .map(|scenario| {
            let status = scenario.status().map_or_else(|| "---".to_string(), |s| s.to_string());
            format!("{:<width$}  {status}  {}", scenario.name(), scenario.description())
        })
        .collect()
}
