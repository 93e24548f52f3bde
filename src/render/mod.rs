//! Dashboard renderers.
//!
//! Plain text for terminals and a standalone HTML page with one table per
//! section. JSON output is just `serde_json` on the report itself.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::calculate::format_efficiency;
use crate::models::Category;
use crate::report::DashboardReport;

/// Output formats understood by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}' (expected text, html or json)", other)),
        }
    }
}

/// Render `report` in the requested format.
pub fn render(report: &DashboardReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Html => Ok(render_html(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

fn title(report: &DashboardReport) -> String {
    match &report.team {
        Some(team) => format!("{} ({} data)", team, report.origin),
        None => "Sample roster".to_string(),
    }
}

pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "=== Player Analysis: {} ===", title(report));

    let _ = writeln!(out, "\n1. Transformed players");
    let _ = writeln!(
        out,
        "   {:<22} {:>5} {:>7} {:>10} {:>6}",
        "Player", "Goals", "Assists", "Efficiency", "Total"
    );
    for r in &report.transformed {
        let _ = writeln!(
            out,
            "   {:<22} {:>5} {:>7} {:>10} {:>6}",
            r.player, r.goals, r.assists, r.efficiency, r.total_contribution
        );
    }

    let _ = writeln!(out, "\n2. Top scorers ({}+ goals)", report.min_goals);
    if report.top_scorers.is_empty() {
        let _ = writeln!(out, "   (none)");
    } else {
        let _ = writeln!(out, "   {}", report.top_scorers.join(", "));
    }

    let analysis = &report.analysis;
    let _ = writeln!(out, "\n3. Team analysis");
    let _ = writeln!(out, "   Total goals:    {}", analysis.total_goals);
    let _ = writeln!(out, "   Total assists:  {}", analysis.total_assists);
    let _ = writeln!(
        out,
        "   Most efficient: {} ({})",
        analysis.max_efficiency.name,
        format_efficiency(analysis.max_efficiency.value)
    );
    let spread: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{}: {}", c, analysis.players_by_category.get(*c)))
        .collect();
    let _ = writeln!(out, "   By category:    {}", spread.join(", "));

    let _ = writeln!(out, "\n4. Category per player");
    for s in &report.categories {
        let _ = writeln!(
            out,
            "   {}: {} ({})",
            s.player.name,
            s.category,
            format_efficiency(s.efficiency)
        );
    }

    let _ = writeln!(out, "\n5. Disciplined players (fewer than {} cards)", report.max_cards);
    for r in &report.disciplined {
        let _ = writeln!(
            out,
            "   {}: {} goals, {} assists, efficiency {}",
            r.player, r.goals, r.assists, r.efficiency
        );
    }

    let _ = writeln!(out, "\n6. Top {} most efficient", report.top.len());
    for (rank, r) in report.top.iter().enumerate() {
        let _ = writeln!(out, "   {}. {}: {}", rank + 1, r.name, r.efficiency);
    }

    out
}

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn html_table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) {
    out.push_str("<table>\n<thead><tr>");
    for h in headers {
        let _ = write!(out, "<th>{}</th>", escape_html(h));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn html_section(out: &mut String, heading: &str) {
    let _ = write!(out, "<section class=\"result-section\">\n<h4>{}</h4>\n", escape_html(heading));
}

pub fn render_html(report: &DashboardReport) -> String {
    let mut out = String::new();
    let page_title = escape_html(&title(report));

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>Player Analysis: {0}</title>\n</head>\n<body>\n<h1>Player Analysis: {0}</h1>\n",
        page_title
    );

    html_section(&mut out, "1. Transformed players");
    let rows: Vec<Vec<String>> = report
        .transformed
        .iter()
        .map(|r| {
            vec![
                r.player.clone(),
                r.goals.to_string(),
                r.assists.to_string(),
                r.efficiency.clone(),
                r.total_contribution.to_string(),
            ]
        })
        .collect();
    html_table(&mut out, &["Player", "Goals", "Assists", "Efficiency", "Total"], &rows);
    out.push_str("</section>\n");

    html_section(&mut out, &format!("2. Top scorers ({}+ goals)", report.min_goals));
    let _ = writeln!(out, "<p>{}</p>", escape_html(&report.top_scorers.join(", ")));
    out.push_str("</section>\n");

    let analysis = &report.analysis;
    html_section(&mut out, "3. Team analysis");
    let mut rows = vec![
        vec!["Total goals".to_string(), analysis.total_goals.to_string()],
        vec!["Total assists".to_string(), analysis.total_assists.to_string()],
        vec![
            "Most efficient".to_string(),
            format!(
                "{} ({})",
                analysis.max_efficiency.name,
                format_efficiency(analysis.max_efficiency.value)
            ),
        ],
    ];
    for c in Category::ALL {
        rows.push(vec![c.to_string(), analysis.players_by_category.get(c).to_string()]);
    }
    html_table(&mut out, &["Metric", "Value"], &rows);
    out.push_str("</section>\n");

    html_section(&mut out, "4. Category per player");
    let rows: Vec<Vec<String>> = report
        .categories
        .iter()
        .map(|s| {
            vec![
                s.player.name.clone(),
                s.category.to_string(),
                format_efficiency(s.efficiency),
            ]
        })
        .collect();
    html_table(&mut out, &["Player", "Category", "Efficiency"], &rows);
    out.push_str("</section>\n");

    html_section(
        &mut out,
        &format!("5. Disciplined players (fewer than {} cards)", report.max_cards),
    );
    let rows: Vec<Vec<String>> = report
        .disciplined
        .iter()
        .map(|r| {
            vec![
                r.player.clone(),
                r.goals.to_string(),
                r.assists.to_string(),
                r.efficiency.clone(),
                r.total_contribution.to_string(),
            ]
        })
        .collect();
    html_table(&mut out, &["Player", "Goals", "Assists", "Efficiency", "Total"], &rows);
    out.push_str("</section>\n");

    html_section(&mut out, &format!("6. Top {} most efficient", report.top.len()));
    let rows: Vec<Vec<String>> = report
        .top
        .iter()
        .enumerate()
        .map(|(rank, r)| vec![(rank + 1).to_string(), r.name.clone(), r.efficiency.clone()])
        .collect();
    html_table(&mut out, &["#", "Player", "Efficiency"], &rows);
    out.push_str("</section>\n</body>\n</html>\n");

    out
}
