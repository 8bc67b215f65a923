use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use motiv_core::{Activity, ActivityContext};
use motiv_planner::{Planner, PlannerConfig};

// ── Dispatch ──

/// `motiv parse [TEXT] [--json] [--config PATH]`
pub fn execute(text: Option<&str>, json: bool, config: Option<&Path>) -> anyhow::Result<()> {
    let planner = Planner::with_config(load_config(config)?);
    let text = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading reflection text from stdin")?;
            buf
        }
    };

    let activities = planner.parse(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&activities)?);
    } else {
        print!("{}", render(&activities));
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PlannerConfig> {
    match path {
        Some(p) => PlannerConfig::load(p)
            .with_context(|| format!("loading planner config {}", p.display())),
        None => Ok(PlannerConfig::default()),
    }
}

// ── Rendering ──

fn render(activities: &[Activity]) -> String {
    let mut out = String::new();
    for a in activities {
        let _ = writeln!(out, "{}. {}", a.sequence_order, a.text);
        let confidence = if a.is_classified() {
            format!("confidence {:.2}", a.confidence)
        } else {
            "unclassified".to_string()
        };
        let _ = writeln!(
            out,
            "   category:   {}/{} ({confidence})",
            a.category, a.subcategory
        );
        let _ = writeln!(out, "   duration:   {} min", a.duration);
        let _ = writeln!(out, "   intensity:  {}", a.intensity);
        let _ = writeln!(out, "   mood:       {}", a.mood);
        if !a.context.is_empty() {
            let _ = writeln!(out, "   context:    {}", render_context(&a.context));
        }
        if let Some(n) = a.merged_count {
            let _ = writeln!(out, "   merged:     {n} phrases");
        }
    }
    out
}

fn render_context(ctx: &ActivityContext) -> String {
    let mut parts = Vec::new();
    if let Some(loc) = &ctx.location {
        parts.push(format!("at {loc}"));
    }
    match ctx.with_others {
        Some(true) => parts.push("with others".to_string()),
        Some(false) => parts.push("alone".to_string()),
        None => {}
    }
    if let Some(t) = ctx.time_of_day {
        parts.push(t.as_str().to_string());
    }
    if let Some(w) = ctx.weather {
        parts.push(format!("{} weather", w.as_str()));
    }
    if !ctx.tools.is_empty() {
        parts.push(format!("using {}", ctx.tools.join(", ")));
    }
    parts.join("; ")
}
