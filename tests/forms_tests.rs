use rdo_presence_bot::interactions::forms::{FormError, FormKind};

fn values(items: &[&str]) -> Vec<Option<String>> {
    items.iter().map(|v| Some(v.to_string())).collect()
}

#[test]
fn setup_schema_has_three_ordered_fields() {
    let fields = FormKind::Setup.fields();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0].custom_id, "rid_input");
    assert_eq!(fields[1].custom_id, "bounty_input");
    assert_eq!(fields[2].custom_id, "footer_input");
}

#[test]
fn edit_forms_carry_exactly_one_field() {
    for kind in [
        FormKind::SetBounty,
        FormKind::SetFooter,
        FormKind::SetRockstarId,
    ] {
        assert_eq!(kind.fields().len(), 1, "{kind:?}");
    }
}

#[test]
fn extract_checks_positional_arity() {
    let err = FormKind::Setup
        .extract(values(&["123456789", "19.99"]))
        .unwrap_err();
    assert_eq!(
        err,
        FormError::Arity {
            form: "setup",
            want: 3,
            got: 2
        }
    );

    let err = FormKind::SetBounty.extract(values(&[])).unwrap_err();
    assert!(matches!(err, FormError::Arity { want: 1, got: 0, .. }));
}

#[test]
fn extract_rejects_rows_without_text_input() {
    let err = FormKind::SetFooter.extract(vec![None]).unwrap_err();
    assert_eq!(
        err,
        FormError::MissingInput {
            form: "set_footer",
            index: 0
        }
    );
}

#[test]
fn extract_returns_values_in_schema_order() {
    let extracted = FormKind::Setup
        .extract(values(&["123456789", "19.99", "howdy"]))
        .unwrap();
    assert_eq!(extracted, vec!["123456789", "19.99", "howdy"]);
}

#[test]
fn blank_inputs_become_unsupplied_fields() {
    let extracted = FormKind::Setup
        .extract(values(&["123456789", "19.99", ""]))
        .unwrap();
    let patch = FormKind::Setup.patch_from_values(&extracted);
    assert_eq!(patch.rockstar_id.as_deref(), Some("123456789"));
    assert_eq!(patch.bounty.as_deref(), Some("19.99"));
    assert_eq!(patch.footer, None);
    assert_eq!(patch.camp, None);
}

#[test]
fn values_are_trimmed_before_storage() {
    let patch = FormKind::SetBounty.patch_from_values(&[" 10.01 ".to_string()]);
    assert_eq!(patch.bounty.as_deref(), Some("10.01"));

    // Whitespace-only counts as blank.
    let patch = FormKind::SetFooter.patch_from_values(&["   ".to_string()]);
    assert_eq!(patch.footer, None);
}

#[test]
fn single_field_forms_touch_only_their_field() {
    let patch = FormKind::SetRockstarId.patch_from_values(&["987654321".to_string()]);
    assert_eq!(patch.rockstar_id.as_deref(), Some("987654321"));
    assert!(patch.bounty.is_none() && patch.camp.is_none() && patch.footer.is_none());
}
