use brunn_core::error::BrunnError;
use brunn_core::rules::{self, builtin};
use std::path::Path;

pub fn list() -> Result<(), BrunnError> {
    println!("Available predefined rulesets:\n");
    for name in builtin::PRESETS {
        let rs = builtin::load_preset(name)?;
        println!("  {:<8} {} (v{})", name, rs.name, rs.version);
        if let Some(ref desc) = rs.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), BrunnError> {
    let rs = builtin::load_preset(preset)?;

    println!("{} (version {})\n", rs.name, rs.version);
    if let Some(ref desc) = rs.description {
        println!("{}\n", desc);
    }

    println!("A sample is judged not potable when any rule below is breached,");
    println!("regardless of the classifier's verdict:\n");

    for rule in &rs.rules {
        let optional_marker = if rule.optional { " [optional]" } else { "" };
        println!(
            "  {:<18} {} {} {}  ({}){}",
            rule.name,
            rule.parameter,
            rule.condition,
            rule.parameter.unit(),
            rule.meaning,
            optional_marker,
        );
        if let Some(ref note) = rule.note {
            println!("                     {}", note);
        }
    }
    println!();
    println!("A sample that breaches no rule keeps the classifier's verdict.");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), BrunnError> {
    let rs = rules::load_ruleset(file)?;
    println!(
        "OK: '{}' (v{}) with {} rules",
        rs.name,
        rs.version,
        rs.rules.len()
    );
    Ok(())
}
