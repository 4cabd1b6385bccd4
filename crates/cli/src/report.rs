//! Console rendering of a comparison report.

use costar_core::{ComparisonReport, RatingSummary, Verdict};

/// Maximum shared titles listed before the overflow line.
const MAX_LISTED_TITLES: usize = 10;

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;

/// Render the report as console text.
pub fn render(report: &ComparisonReport) -> String {
    let first = &report.first;
    let second = &report.second;

    let mut lines: Vec<String> = Vec::new();
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    lines.push(banner.clone());
    lines.push("RESULTS".to_string());
    lines.push(banner);
    lines.push(String::new());

    if !report.together.titles.is_empty() {
        lines.push(format!(
            "Movies {} and {} starred in together:",
            first.name, second.name
        ));
        let mut shared = report.together.titles.clone();
        shared.sort();
        for title in shared.iter().take(MAX_LISTED_TITLES) {
            lines.push(format!("  - {}", title));
        }
        if shared.len() > MAX_LISTED_TITLES {
            lines.push(format!("  ... and {} more", shared.len() - MAX_LISTED_TITLES));
        }
        lines.push(String::new());
    }

    lines.push(format!("{} movies: {}", first.name, first.movie_count));
    lines.push(format!("{} movies: {}", second.name, second.movie_count));
    lines.push(format!("Movies together: {}", report.shared_count));
    lines.push(String::new());

    lines.push("Average Ratings Comparison:".to_string());
    lines.push(rule.clone());

    let together_label = format!("{} & {} together:", first.name, second.name);
    let first_label = format!("{} only:", first.name);
    let second_label = format!("{} only:", second.name);
    let width = together_label
        .len()
        .max(first_label.len())
        .max(second_label.len());

    lines.push(rating_line(&together_label, &report.together, width));
    lines.push(rating_line(&first_label, &report.first_solo, width));
    lines.push(rating_line(&second_label, &report.second_solo, width));
    lines.push(String::new());

    lines.push("Analysis:".to_string());
    lines.push(rule);
    match report.verdict() {
        Some(Verdict::Higher) => {
            lines.push("  Together: HIGHER ratings than solo work!".to_string());
        }
        Some(Verdict::Lower) => {
            lines.push("  Together: LOWER ratings than solo work.".to_string());
        }
        Some(Verdict::Mixed) => {
            lines.push("  Mixed: collaborations sit between the individual averages.".to_string());
        }
        None => {
            lines.push("  Not enough rated movies to compare together and solo work.".to_string());
        }
    }

    let (first_delta, second_delta) = report.solo_deltas();
    if let Some(delta) = first_delta {
        lines.push(format!("  Difference from {} solo: {:+.2}", first.name, delta));
    }
    if let Some(delta) = second_delta {
        lines.push(format!("  Difference from {} solo: {:+.2}", second.name, delta));
    }
    lines.push(String::new());

    lines.join("\n") + "\n"
}

fn rating_line(label: &str, summary: &RatingSummary, width: usize) -> String {
    let value = match summary.mean {
        Some(mean) => format!("{:.2} ({} movies)", mean, summary.rated_count),
        None => "n/a (no rated movies)".to_string(),
    };
    format!("  {:<width$} {}", label, value, width = width)
}
