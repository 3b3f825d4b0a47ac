use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Table,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Print a JSON document to stdout.
///
/// Table output applies to summaries, not documents — it falls back to
/// pretty-printing here.
pub fn print_value(value: &Value, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
            );
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
            );
        }
    }
}

/// Result of checking one schema document.
#[derive(Serialize)]
pub struct CheckOutcome {
    pub schema: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub fn print_check_outcomes(outcomes: &[CheckOutcome], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for outcome in outcomes {
                println!(
                    "{}",
                    serde_json::to_string(outcome).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SCHEMA", "STATUS", "DETAIL"]);
            for outcome in outcomes {
                table.add_row(vec![
                    outcome.schema.clone(),
                    status_name(outcome.ok).to_string(),
                    outcome.detail.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for outcome in outcomes {
                match &outcome.detail {
                    Some(detail) => println!(
                        "schema={} status={} detail={}",
                        outcome.schema,
                        status_name(outcome.ok),
                        detail
                    ),
                    None => println!(
                        "schema={} status={}",
                        outcome.schema,
                        status_name(outcome.ok)
                    ),
                }
            }
        }
    }
}

pub fn status_name(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "invalid"
    }
}
