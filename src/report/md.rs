use super::{BatchSummary, ScoreReport};

pub fn to_markdown(report: &ScoreReport) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str(&format!("# SEO Report: {}\n\n", report.subject));
    output.push_str(&format!("Kind: {}\n", report.kind));
    output.push_str(&format!(
        "Score: {}/100 ({}, {})\n\n",
        result.score, result.grade, result.grade_text
    ));

    if let Some(reading) = &report.reading {
        output.push_str(&format!(
            "Reading: {} words, about {} min\n\n",
            reading.word_count, reading.reading_time_minutes
        ));
    }

    output.push_str("## Checklist\n\n");
    for entry in &result.checklist {
        output.push_str(&format!("- {} {}\n", entry.severity.marker(), entry.message));
    }
    output.push('\n');

    push_list(&mut output, "Issues", &result.issues);
    output.push('\n');
    push_list(&mut output, "Recommendations", &result.recommendations);
    output
}

pub fn batch_to_markdown(summary: &BatchSummary) -> String {
    let mut output = String::new();
    output.push_str("# SEO Batch Report\n\n");
    if summary.entries.is_empty() {
        output.push_str("- no snapshots found\n\n");
    }
    for entry in &summary.entries {
        output.push_str(&format!(
            "- [{}] {:>3}/100 {} {} ({} issues){}\n",
            entry.grade,
            entry.score,
            entry.kind,
            entry.path,
            entry.issue_count,
            if entry.cached { " cached" } else { "" }
        ));
    }
    if !summary.entries.is_empty() {
        output.push('\n');
    }

    let totals = &summary.totals;
    output.push_str("## Totals\n\n");
    output.push_str(&format!(
        "- entities: {}\n- average score: {:.1}\n- with issues: {}\n- failing (F): {}\n- served from cache: {}\n",
        totals.entities, totals.average_score, totals.with_issues, totals.failing, totals.cached
    ));
    output
}

fn push_list(output: &mut String, heading: &str, items: &[String]) {
    output.push_str(&format!("## {heading}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n");
    } else {
        for item in items {
            output.push_str(&format!("- {item}\n"));
        }
    }
}
