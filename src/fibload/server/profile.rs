use std::collections::BTreeMap;

use fibload_lib::measurement::RegionStats;

/// Util function: formatting a table for printing
///
/// input: Vec of rows, each row is a Vec of strings (columns)
///
/// output: String
fn format_table(data: Vec<Vec<String>>) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut max_widths = vec![0; data[0].len()];
    for row in &data {
        for (i, item) in row.iter().enumerate() {
            max_widths[i] = max_widths[i].max(item.len());
        }
    }

    data.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, item)| format!("{:width$}", item, width = max_widths[i]))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the accumulated profile as a table, one region per row.
pub fn format_profile(regions: &BTreeMap<&'static str, RegionStats>) -> String {
    if regions.is_empty() {
        return "No computations recorded yet".to_string();
    }

    let mut rows = vec![vec![
        "region".to_string(),
        "calls".to_string(),
        "total wall".to_string(),
        "mean wall".to_string(),
        "max wall".to_string(),
        "total cpu".to_string(),
    ]];

    for (region, stats) in regions {
        rows.push(vec![
            region.to_string(),
            stats.calls.to_string(),
            format!("{:?}", stats.total_wall),
            format!("{:?}", stats.mean_wall()),
            format!("{:?}", stats.max_wall),
            format!("{:?}", stats.total_cpu),
        ]);
    }

    format_table(rows)
}

#[cfg(test)]
#[path = "tests/profile.rs"]
mod tests;
