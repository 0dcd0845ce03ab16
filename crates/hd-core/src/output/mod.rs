//! Report rendering for inference results.
//!
//! stdout carries only the payload rendered here; all logs go to stderr.

use crate::inference::PersonPosterior;
use hd_common::{OutputFormat, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Machine-readable inference report payload.
///
/// People keep their input order, so serialization is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceReport {
    pub schema_version: String,

    /// Data source the report was computed from.
    pub source: String,

    pub people: Vec<PersonPosterior>,
}

impl InferenceReport {
    pub fn new(source: impl Into<String>, people: Vec<PersonPosterior>) -> Self {
        InferenceReport {
            schema_version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            people,
        }
    }
}

/// Validation result payload for the `check` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub schema_version: String,

    /// Where the active priors model came from.
    pub priors_source: String,

    /// Number of people in the validated pedigree, if one was checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<usize>,
}

/// Render an inference report in the requested format.
pub fn render_report(report: &InferenceReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => render_human(report),
        OutputFormat::Json => to_pretty_json(report),
    }
}

/// Render a check report in the requested format.
pub fn render_check(report: &CheckReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => {
            let mut out = format!("✓ Priors valid ({})\n", report.priors_source);
            if let Some(people) = report.people {
                out.push_str(&format!("✓ Pedigree valid: {} people\n", people));
            }
            out
        }
        OutputFormat::Json => to_pretty_json(report),
    }
}

fn to_pretty_json<T: Serialize>(payload: &T) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string())
}

/// Per-person report in the classic four-decimal layout.
fn render_human(report: &InferenceReport) -> String {
    let mut out = String::new();
    for person in &report.people {
        out.push_str(&format!("{}:\n", person.person));
        out.push_str("  Gene:\n");
        out.push_str(&format!("    2: {:.4}\n", person.gene.two));
        out.push_str(&format!("    1: {:.4}\n", person.gene.one));
        out.push_str(&format!("    0: {:.4}\n", person.gene.zero));
        out.push_str("  Trait:\n");
        out.push_str(&format!("    True: {:.4}\n", person.trait_dist.present));
        out.push_str(&format!("    False: {:.4}\n", person.trait_dist.absent));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{GeneDistribution, TraitDistribution};
    use hd_common::PersonId;

    fn sample_report() -> InferenceReport {
        InferenceReport::new(
            "family0.csv",
            vec![PersonPosterior {
                person: PersonId::from("Harry"),
                gene: GeneDistribution {
                    zero: 0.5351,
                    one: 0.4557,
                    two: 0.0092,
                },
                trait_dist: TraitDistribution {
                    present: 0.2665,
                    absent: 0.7335,
                },
            }],
        )
    }

    #[test]
    fn human_format_uses_four_decimals() {
        let text = render_report(&sample_report(), OutputFormat::Human);
        assert!(text.contains("Harry:\n"));
        assert!(text.contains("    2: 0.0092\n"));
        assert!(text.contains("    True: 0.2665\n"));
    }

    #[test]
    fn json_roundtrip_preserves_order() {
        let report = sample_report();
        let json = render_report(&report, OutputFormat::Json);
        let back: InferenceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.schema_version, SCHEMA_VERSION);
        assert_eq!(back.people[0].person, report.people[0].person);
        assert!(json.contains("\"trait\""));
    }

    #[test]
    fn check_report_human_rendering() {
        let report = CheckReport {
            schema_version: SCHEMA_VERSION.to_string(),
            priors_source: "builtin default".to_string(),
            people: Some(3),
        };
        let text = render_check(&report, OutputFormat::Human);
        assert!(text.contains("Priors valid"));
        assert!(text.contains("3 people"));
    }

    #[test]
    fn check_report_omits_absent_pedigree() {
        let report = CheckReport {
            schema_version: SCHEMA_VERSION.to_string(),
            priors_source: "CLI argument".to_string(),
            people: None,
        };
        let json = render_check(&report, OutputFormat::Json);
        assert!(!json.contains("\"people\""));
    }
}
