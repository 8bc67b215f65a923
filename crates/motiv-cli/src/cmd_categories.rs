use std::fmt::Write as _;

use motiv_planner::taxonomy::{CategoryEntry, TAXONOMY};

/// `motiv categories [--json]`
pub fn execute(json: bool) -> anyhow::Result<()> {
    if json {
        let value: Vec<serde_json::Value> = TAXONOMY.iter().map(entry_json).collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render());
    }
    Ok(())
}

fn entry_json(entry: &CategoryEntry) -> serde_json::Value {
    let subcategories: Vec<serde_json::Value> = entry
        .subcategories
        .iter()
        .map(|(name, keywords)| serde_json::json!({ "name": name, "keywords": keywords }))
        .collect();
    serde_json::json!({
        "category": entry.category,
        "keywords": entry.keywords,
        "support": entry.support,
        "subcategories": subcategories,
    })
}

fn render() -> String {
    let mut out = String::new();
    for entry in TAXONOMY.iter() {
        let subs: Vec<&str> = entry.subcategories.iter().map(|(name, _)| *name).collect();
        let _ = writeln!(out, "{}", entry.category);
        let _ = writeln!(out, "  keywords:      {}", entry.keywords.join(", "));
        let _ = writeln!(out, "  subcategories: {}", subs.join(", "));
    }
    out
}
