use crate::models::outcome::FilterOutcome;
use crate::utils::table::Table;

/// Render the outcome for a terminal: the message, then one table row per
/// inactive user, then any skipped rows.
pub fn render(outcome: &FilterOutcome) -> String {
    let mut out = String::new();
    out.push_str(&outcome.message);
    out.push('\n');

    if !outcome.users.is_empty() {
        let width = outcome
            .users
            .iter()
            .map(|u| u.fields.len())
            .max()
            .unwrap_or(0);

        let mut headers: Vec<String> = (0..width)
            .map(|i| {
                outcome
                    .header
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("field_{}", i + 1))
            })
            .collect();
        headers.push("inactive_days".to_string());

        let mut table = Table::new(headers);
        for user in &outcome.users {
            let mut row = user.fields.clone();
            row.resize(width, String::new());
            row.push(user.inactive_days.to_string());
            table.add_row(row);
        }

        out.push('\n');
        out.push_str(&table.render());
    }

    for skipped in &outcome.skipped {
        out.push_str(&format!("skipped row {}: {}\n", skipped.row, skipped.error));
    }

    out
}
