use lapwise_core::compare::{ComparisonRow, Outcome};
use lapwise_core::runtime::{
    ComparisonReport, ComparisonRuntime, DeterministicComparisonRuntime, Selection,
};
use tracing::info;

use crate::commands::{load_session, CommandResult};

const COMMAND: &str = "compare";

pub fn run(first: &str, second: &str, json_output: bool) -> CommandResult {
    let session = match load_session(COMMAND) {
        Ok(session) => session,
        Err(failure) => return failure,
    };

    let runtime = DeterministicComparisonRuntime::new(session.currency());
    let selection = Selection::new(first.trim(), second.trim());
    let report = match runtime.compare(&session.catalog, &selection) {
        Ok(report) => report,
        Err(error) => return CommandResult::application_failure(COMMAND, error),
    };

    info!(
        event_name = "cli.compare.completed",
        first = %selection.first,
        second = %selection.second,
        winner = %report.recommendation.winner.id,
        "comparison rendered"
    );

    if json_output {
        let message = format!("{} is the recommended choice", report.recommendation.winner.name);
        return CommandResult::success_with_data(COMMAND, message, &report);
    }

    CommandResult::text(render_human(&report))
}

fn render_human(report: &ComparisonReport<'_>) -> String {
    let first = report.comparison.first;
    let second = report.comparison.second;
    let first_width =
        column_width(&first.name, report.comparison.rows.iter().map(|row| &row.first_value));
    let second_width =
        column_width(&second.name, report.comparison.rows.iter().map(|row| &row.second_value));

    let mut lines = Vec::new();
    lines.push(format!(
        "{:<10}  {:<first_width$}  {:<second_width$}  {}",
        "FEATURE", first.name, second.name, "ADVANTAGE"
    ));
    for row in &report.comparison.rows {
        lines.push(format!(
            "{:<10}  {:<first_width$}  {:<second_width$}  {}",
            row.label,
            row.first_value,
            row.second_value,
            advantage(row)
        ));
    }

    let recommendation = &report.recommendation;
    lines.push(String::new());
    lines.push(format!(
        "Recommendation: {} (score {:.1} vs {:.1})",
        recommendation.winner.name, recommendation.winner_score, recommendation.runner_up_score
    ));
    lines.push(recommendation.justification.clone());

    lines.join("\n")
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a String>) -> usize {
    values.map(|value| value.chars().count()).chain([header.chars().count()]).max().unwrap_or(0)
}

fn advantage(row: &ComparisonRow) -> &'static str {
    match row.outcome {
        Some(Outcome::Better) => "first",
        Some(Outcome::Worse) => "second",
        Some(Outcome::Equal) => "equal",
        None => "-",
    }
}
