use anyhow::{bail, Result};
use colored::Colorize;
use heartform::{FormConfig, FormController, HeadlessForm, StepState, SubmitOutcome};
use heartform_rules::SampleProfile;

pub fn execute(profile: SampleProfile, config: FormConfig) -> Result<()> {
    let mut form = FormController::with_config(HeadlessForm::standard(), config);

    let steps = form.mount();
    println!("{} {:.0}% complete", "mount".cyan(), steps.percent());

    let blocked = form.on_submit();
    if let SubmitOutcome::Blocked { report } = &blocked {
        println!(
            "{} blocked, {} empty field(s), first: {}",
            "submit".cyan(),
            report.error_count(),
            form.surface().scrolled_to().map(|field| field.as_str()).unwrap_or("-")
        );
    }

    let steps = form.fill_sample(profile);
    let bar: String = steps
        .states()
        .map(|state| match state {
            StepState::Completed => "●",
            StepState::Active => "◐",
            StepState::Pending => "○",
        })
        .collect();
    println!("{} {} {bar}", "fill".cyan(), profile);
    if let Some(notice) = form.surface().notifications().last() {
        println!("       {}", notice.message.green());
    }

    match form.on_submit() {
        SubmitOutcome::Proceed { values } => {
            println!("{} proceeds with {} field(s)", "submit".cyan(), values.iter().count());
            println!(
                "       processing overlay for {} ms",
                form.config().timing.processing_delay_ms
            );
            form.finish_processing();
            Ok(())
        }
        SubmitOutcome::Blocked { report } => {
            bail!("sample {profile} was rejected with {} error(s)", report.error_count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_simulates() {
        for profile in SampleProfile::ALL {
            assert!(execute(profile, FormConfig::default()).is_ok());
        }
    }

    #[test]
    fn test_custom_step_count() {
        let config = FormConfig::from_toml_str("[progress]\nstep_count = 2\n").unwrap();
        assert!(execute(SampleProfile::MediumRisk, config).is_ok());
    }
}
