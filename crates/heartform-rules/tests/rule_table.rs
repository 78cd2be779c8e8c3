//! Behaviour of the standard rule table as the form sees it
//!
//! Covers range boundaries, exact enum membership, required-ness and the
//! completion ratio that drives the progress steps.

use heartform_rules::{FieldId, FormRuleValidator, FormValues, SampleProfile};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(FieldId::Age, "1", "120", "0", "121")]
#[case(FieldId::Trestbps, "50", "300", "49", "301")]
#[case(FieldId::Chol, "100", "600", "99", "601")]
#[case(FieldId::Thalach, "60", "220", "59", "221")]
#[case(FieldId::Oldpeak, "0", "10", "-1", "11")]
fn range_boundaries_are_inclusive(
    #[case] field: FieldId,
    #[case] min: &str,
    #[case] max: &str,
    #[case] below: &str,
    #[case] above: &str,
) {
    let validator = FormRuleValidator::standard();
    assert!(validator.validate(field, min).valid, "{field}={min}");
    assert!(validator.validate(field, max).valid, "{field}={max}");
    assert!(!validator.validate(field, below).valid, "{field}={below}");
    assert!(!validator.validate(field, above).valid, "{field}={above}");
}

#[rstest]
#[case("0.0", true)]
#[case("9.99", true)]
#[case("10.0", true)]
#[case("10.001", false)]
#[case("-0.1", false)]
fn st_depression_accepts_fractions(#[case] value: &str, #[case] valid: bool) {
    let validator = FormRuleValidator::standard();
    assert_eq!(validator.validate(FieldId::Oldpeak, value).valid, valid);
}

#[rstest]
#[case(FieldId::Age, "sixty")]
#[case(FieldId::Age, "65.5")]
#[case(FieldId::Trestbps, "120/80")]
#[case(FieldId::Oldpeak, "1,5")]
fn unparseable_values_fail_with_range_message(#[case] field: FieldId, #[case] value: &str) {
    let validator = FormRuleValidator::standard();
    let rule = validator.table().get(field).unwrap();
    let result = validator.validate(field, value);
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some(rule.message));
}

#[rstest]
#[case(FieldId::Sex, &["0", "1"])]
#[case(FieldId::Fbs, &["0", "1"])]
#[case(FieldId::Exang, &["0", "1"])]
#[case(FieldId::Cp, &["0", "1", "2", "3"])]
#[case(FieldId::Restecg, &["0", "1", "2"])]
#[case(FieldId::Slope, &["0", "1", "2"])]
#[case(FieldId::Ca, &["0", "1", "2", "3"])]
#[case(FieldId::Thal, &["0", "1", "2"])]
fn enum_fields_accept_exactly_their_set(#[case] field: FieldId, #[case] allowed: &[&str]) {
    let validator = FormRuleValidator::standard();
    for value in allowed {
        assert!(validator.validate(field, value).valid, "{field}={value}");
    }
    for value in ["01", "4", "-1", "1.0", "a", "3 "] {
        let expected = allowed.contains(&value.trim());
        assert_eq!(validator.validate(field, value).valid, expected, "{field}={value:?}");
    }
}

#[test]
fn required_empty_fails_for_every_field() {
    let validator = FormRuleValidator::standard();
    for field in FieldId::ALL {
        let result = validator.validate(field, "");
        assert!(!result.valid, "{field}");
        let label = validator.table().label(field);
        assert_eq!(result.message, Some(format!("{label} harus diisi")));
    }
}

#[test]
fn completion_ratio_is_monotonic() {
    let validator = FormRuleValidator::standard();
    let sample = SampleProfile::HighRisk.values();
    let mut values = FormValues::new();

    assert_eq!(validator.completion_ratio(&values), 0.0);
    let mut previous = 0.0;
    for field in FieldId::ALL {
        values.set(field, sample.get(field));
        let ratio = validator.completion_ratio(&values);
        assert!(ratio >= previous);
        previous = ratio;
    }
    assert_eq!(validator.completion_ratio(&values), 1.0);
}

#[test]
fn completion_counts_presence_not_validity() {
    let validator = FormRuleValidator::standard();
    let values = FormValues::from_named([("age", "999"), ("sex", " ")]).unwrap();
    assert_eq!(validator.completion_ratio(&values), 1.0 / 13.0);
    assert_eq!(validator.step_index(&values, 4), 0);
}

#[rstest]
#[case(SampleProfile::HighRisk)]
#[case(SampleProfile::MediumRisk)]
#[case(SampleProfile::LowRisk)]
fn sample_sets_validate(#[case] profile: SampleProfile) {
    let validator = FormRuleValidator::standard();
    let report = validator.validate_all(&profile.values());
    assert!(report.is_valid());
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.len(), 13);
}

#[test]
fn empty_form_reports_every_field() {
    let validator = FormRuleValidator::standard();
    let report = validator.validate_all(&FormValues::new());
    assert!(!report.is_valid());
    assert_eq!(report.error_count(), 13);
    assert_eq!(report.first_error(), Some((FieldId::Age, "Usia harus diisi")));
}
