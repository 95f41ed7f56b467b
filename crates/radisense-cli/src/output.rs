use console::{style, StyledObject};
use radisense_core::control::{PanelView, ResultPanel, EMPTY_TEXT, PROCESSING_TEXT};
use radisense_core::models::RiskCategory;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Output format mode
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { format: if json { OutputFormat::Json } else { OutputFormat::Human } }
    }

    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("✓").green().bold(), message);
            }
            OutputFormat::Json => print_status("success", message),
        }
    }

    pub fn info(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", style("ℹ").blue().bold(), message);
            }
            OutputFormat::Json => print_status("info", message),
        }
    }

    pub fn warning(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("⚠").yellow().bold(), message);
            }
            OutputFormat::Json => eprint_status("warning", message),
        }
    }

    pub fn error(&self, message: impl Display) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", style("✗").red().bold(), message);
            }
            OutputFormat::Json => eprint_status("error", message),
        }
    }

    pub fn table<T: Tabled>(&self, data: Vec<T>) {
        if data.is_empty() {
            println!("{}", style("(no data)").dim());
        } else {
            let mut table = Table::new(data);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        let output = match self.format {
            OutputFormat::Human => serde_json::to_value(&data)?,
            OutputFormat::Json => serde_json::json!({
                "status": "success",
                "data": data,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    pub fn kv(&self, key: impl Display, value: impl Display) {
        println!("{}: {}", style(key).bold(), value);
    }

    pub fn section(&self, title: impl Display) {
        if let OutputFormat::Human = self.format {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Render the control surface result area
    pub fn panel(&self, view: &PanelView) {
        match &view.panel {
            ResultPanel::Processing => println!("{}", style(PROCESSING_TEXT).dim()),
            ResultPanel::Empty { error } => {
                if let Some(error) = error {
                    self.error(error);
                }
                println!("{}", style(EMPTY_TEXT).dim());
            }
            ResultPanel::Summary(summary) => {
                println!("{}", risk_style(summary.category, &summary.headline).bold());
                println!("Score: {}", summary.score);
            }
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Color-code text by risk category
pub fn risk_style<D>(category: RiskCategory, text: D) -> StyledObject<D> {
    match category {
        RiskCategory::Low => style(text).green(),
        RiskCategory::Moderate => style(text).yellow(),
        RiskCategory::High => style(text).red(),
    }
}

fn status_json(status: &str, message: impl Display) -> String {
    let output = serde_json::json!({
        "status": status,
        "message": message.to_string(),
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
}

fn print_status(status: &str, message: impl Display) {
    println!("{}", status_json(status, message));
}

fn eprint_status(status: &str, message: impl Display) {
    eprintln!("{}", status_json(status, message));
}
