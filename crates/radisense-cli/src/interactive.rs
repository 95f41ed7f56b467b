use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use radisense_core::config::parse_date;
use radisense_core::AnalysisForm;

pub const TITLE: &str = "RadiSense";
pub const SUBTITLE: &str = "Satellite-based Radiation Signal Detection";

pub fn print_header() {
    println!("\n{}", style(TITLE).cyan().bold());
    println!("{}\n", style(SUBTITLE).dim());
}

/// Prompt for the analysis form, pre-filled with the previous answers
///
/// Coordinates are kept as typed. Blank or non-numeric input is passed
/// through and reported by the run.
pub fn prompt_form(previous: &AnalysisForm) -> Result<AnalysisForm> {
    let latitude: String = Input::new()
        .with_prompt("Latitude")
        .with_initial_text(previous.latitude.clone())
        .allow_empty(true)
        .interact_text()?;

    let longitude: String = Input::new()
        .with_prompt("Longitude")
        .with_initial_text(previous.longitude.clone())
        .allow_empty(true)
        .interact_text()?;

    let start: String = Input::new()
        .with_prompt("Start date")
        .default(previous.start_date.to_string())
        .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    let end: String = Input::new()
        .with_prompt("End date")
        .default(previous.end_date.to_string())
        .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(AnalysisForm::new(latitude, longitude).with_dates(parse_date(&start)?, parse_date(&end)?))
}

pub fn confirm_another() -> Result<bool> {
    let again = Confirm::new().with_prompt("Run another analysis?").default(true).interact()?;
    Ok(again)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lines() {
        assert_eq!(TITLE, "RadiSense");
        assert_eq!(SUBTITLE, "Satellite-based Radiation Signal Detection");
        assert!(!SUBTITLE.contains(TITLE));
    }
}
