//! Terminal rendering of the normalized dashboard snapshot.

use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::dashboard::{ChartDatum, DashboardSnapshot, SeriesPoint};
use crate::tenant::Tenant;

use super::output;

const BAR_WIDTH: usize = 32;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the full dashboard to stdout.
pub fn render(snapshot: &DashboardSnapshot, range_label: &str, tenant: Option<&Tenant>) {
    let heading = match tenant {
        Some(t) => format!("Dashboard · {} · {range_label}", t.display_name),
        None => format!("Dashboard · {range_label}"),
    };
    output::section(&heading);

    output::key_value("Conversations", snapshot.kpis.total_chats);
    output::key_value("Appointments", snapshot.kpis.total_appointments);
    output::key_value(
        "Conversion rate",
        format!("{:.1}%", snapshot.kpis.conversion_rate),
    );
    output::key_value(
        "Avg response time",
        format!("{:.2}s", snapshot.kpis.average_response_secs),
    );

    bar_chart("Sentiment Distribution", &snapshot.sentiment);
    bar_chart("Conversations by Channel", &snapshot.channels);
    bar_chart("Top Keywords", &snapshot.keywords);

    sparkline("Conversion Over Time", &snapshot.conversion_over_time);
    sparkline("Conversations Over Time", &snapshot.conversations_over_time);
    sparkline("Appointments Over Time", &snapshot.appointments_over_time);

    summaries_table(snapshot);
}

/// Horizontal bar chart scaled to the largest value.
fn bar_chart(title: &str, data: &[ChartDatum]) {
    output::section(&title.bold().to_string());

    if data.is_empty() {
        output::note("no data");
        return;
    }

    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let label_width = data.iter().map(|d| d.category.len()).max().unwrap_or(0);

    for datum in data {
        let filled = if max > 0.0 {
            ((datum.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(filled.max(usize::from(datum.value > 0.0)));
        println!(
            "{:<label_width$}  {} {}",
            datum.category,
            bar.cyan(),
            datum.value,
        );
    }
}

/// One-line area chart over the primary series values.
fn sparkline(title: &str, points: &[SeriesPoint]) {
    output::section(&title.bold().to_string());

    if points.is_empty() {
        output::note("no data");
        return;
    }

    let max = points.iter().map(|p| p.primary).fold(0.0_f64, f64::max);
    let line: String = points
        .iter()
        .map(|p| {
            if max > 0.0 {
                let level = ((p.primary / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            } else {
                SPARK_LEVELS[0]
            }
        })
        .collect();

    println!("{}", line.green());

    let first = points.first().map(|p| p.bucket_start.as_str()).unwrap_or("");
    let last = points.last().map(|p| p.bucket_end.as_str()).unwrap_or("");
    output::note(&format!("{first} .. {last} · peak {max}"));
}

#[derive(Tabled)]
struct SummaryRowView {
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Summary")]
    summary: String,
}

fn summaries_table(snapshot: &DashboardSnapshot) {
    output::section(&"Conversation Summaries".bold().to_string());

    if snapshot.summaries.is_empty() {
        output::note("no data");
        return;
    }

    let rows: Vec<SummaryRowView> = snapshot
        .summaries
        .iter()
        .map(|row| SummaryRowView {
            user: row.user.clone(),
            summary: row.summary.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    output::key_value(
        "Users with summary",
        snapshot.total_users_with_summary,
    );
}
