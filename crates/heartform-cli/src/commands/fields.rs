use anyhow::Result;
use colored::Colorize;
use heartform::TooltipTable;
use heartform_rules::{FieldRule, NumericType, RuleKind, RuleTable};
use serde::Serialize;

#[derive(Serialize)]
struct FieldListing<'a> {
    #[serde(flatten)]
    rule: &'a FieldRule,
    tooltip: Option<&'static str>,
}

pub fn execute(json: bool) -> Result<()> {
    let table = RuleTable::standard();
    let tooltips = TooltipTable::standard();

    if json {
        let listing: Vec<_> = table
            .iter()
            .map(|rule| FieldListing {
                rule,
                tooltip: tooltips.get(rule.field),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for rule in table.iter() {
        println!("{} {}", rule.field.as_str().cyan().bold(), rule.label);
        println!("    {}", describe(rule));
        if let Some(text) = tooltips.get(rule.field) {
            println!("    {}", text.dimmed());
        }
    }
    Ok(())
}

fn describe(rule: &FieldRule) -> String {
    let required = if rule.required { "required" } else { "optional" };
    match rule.kind {
        RuleKind::Range { min, max, numeric } => {
            let kind = match numeric {
                NumericType::Integer => "integer",
                NumericType::Float => "decimal",
            };
            format!("{required}, {kind} in [{min}, {max}]")
        }
        RuleKind::Enum { allowed } => format!("{required}, one of {}", allowed.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_rules() {
        let table = RuleTable::standard();
        let oldpeak = table.get(heartform_rules::FieldId::Oldpeak).unwrap();
        assert_eq!(describe(oldpeak), "required, decimal in [0, 10]");
        let cp = table.get(heartform_rules::FieldId::Cp).unwrap();
        assert_eq!(describe(cp), "required, one of 0, 1, 2, 3");
    }

    #[test]
    fn test_listing_runs() {
        assert!(execute(false).is_ok());
        assert!(execute(true).is_ok());
    }
}
