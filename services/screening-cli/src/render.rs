use crate::classify::CpfCheck;
use registrant_screening::workflows::eligibility::report::ReportOutcome;
use registrant_screening::workflows::eligibility::BatchCounts;
use std::path::Path;

pub(crate) fn render_summary(input: &Path, counts: BatchCounts, outcomes: &[ReportOutcome]) {
    println!("Registrant screening");
    println!("Source: {}", input.display());

    println!("\nSummary");
    println!("- Total: {}", counts.total);
    println!("- Eligible: {}", counts.eligible);
    println!("- Ineligible: {}", counts.ineligible);

    println!("\nReports");
    for outcome in outcomes {
        match outcome {
            ReportOutcome::Written {
                label,
                entries,
                pages,
                paths,
            } => {
                for path in paths {
                    println!(
                        "- {}: {} ({} registrant(s), {} page(s))",
                        label.label(),
                        path.display(),
                        entries,
                        pages
                    );
                }
            }
            ReportOutcome::Skipped { label } => {
                println!("- {}: no registrants, report not generated", label.label());
            }
        }
    }
}

pub(crate) fn render_cpf_checks(checks: &[CpfCheck]) {
    for check in checks {
        println!("{}", cpf_check_line(check));
    }
}

fn cpf_check_line(check: &CpfCheck) -> String {
    let verdict = if check.valid { "valid" } else { "invalid" };
    if check.value.trim() == check.normalized {
        format!("{}: {verdict}", check.value)
    } else {
        format!("{} ({}): {verdict}", check.value, check.normalized)
    }
}
