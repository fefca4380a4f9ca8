//! Integration tests for the storage/user page.

use choice_form::page::{STORAGE_REQUIRED, USER_REQUIRED, storage_options, user_options};
use choice_form::{
    ChoicePage, ComboBox, FieldName, PrefillParams, PrefillSync, RadioGroup, SelectionAdapter,
    SelectionEvent,
};

fn storage() -> FieldName {
    FieldName::new("storage")
}

fn user() -> FieldName {
    FieldName::new("user")
}

#[test]
fn both_widgets_report_only_the_value() {
    for (idx, option) in storage_options().iter().enumerate() {
        let mut group = RadioGroup::new("Radio Group", storage_options());
        assert_eq!(
            group.select(idx),
            Some(SelectionEvent::Change(option.value().to_string()))
        );
    }

    for option in user_options().iter() {
        let mut combo = ComboBox::new("Combo Box", user_options());
        combo.set_query(option.label());
        assert_eq!(
            combo.choose(0),
            Some(SelectionEvent::Change(option.value().to_string()))
        );
    }
}

#[test]
fn controlled_value_drives_the_selection() {
    let mut group = RadioGroup::new("Radio Group", storage_options());
    let mut combo = ComboBox::new("Combo Box", user_options());

    group.set_value(Some("startup".into()));
    combo.set_value(Some("arlene".into()));
    assert_eq!(group.selected_option().map(|o| o.label()), Some("Startup"));
    assert_eq!(combo.selected_option().map(|o| o.label()), Some("Arlene Mccoy"));

    group.set_value(Some("nothing".into()));
    combo.set_value(None);
    assert_eq!(group.selected_index(), None);
    assert_eq!(combo.selected_index(), None);
}

#[test]
fn empty_submit_records_both_errors() {
    let mut page = ChoicePage::new();
    assert!(!page.submit().is_valid());
    assert!(!page.submit().is_valid());

    let meta = page.meta();
    assert_eq!(meta.submit_count, 2);
    assert_eq!(meta.errors[&storage()].message, STORAGE_REQUIRED);
    assert_eq!(meta.errors[&user()].message, USER_REQUIRED);
    assert!(page.submission().is_empty());

    assert_eq!(page.storage().error(), Some(STORAGE_REQUIRED));
    assert_eq!(page.user().error(), Some(USER_REQUIRED));
}

#[test]
fn valid_submit_captures_snapshot() {
    let mut page = ChoicePage::new();
    page.select_storage(0).unwrap();
    page.user_open();
    page.user_input('w');
    page.choose_user_highlighted().unwrap();

    assert!(page.submit().is_valid());
    assert!(page.meta().errors.is_empty());
    assert_eq!(page.submission().get(&storage()), Some("startup"));
    assert_eq!(page.submission().get(&user()), Some("wade"));
    assert_eq!(
        serde_json::to_string(page.submission()).unwrap(),
        r#"{"storage":"startup","user":"wade"}"#
    );
}

#[test]
fn abandoned_combo_edit_keeps_committed_value() {
    let mut page = ChoicePage::new();
    page.apply_external_values(Some("business"), Some("arlene"));
    assert!(page.submit().is_valid());

    page.user_open();
    page.user_input('x');
    page.blur_user().unwrap();
    // The combo never committed an empty value, so the form is still valid.
    assert!(page.submit().is_valid());
    assert_eq!(page.submission().get(&user()), Some("arlene"));
}

#[test]
fn errors_clear_as_fields_get_values() {
    let mut page = ChoicePage::new();
    page.submit();
    page.select_storage(1).unwrap();
    assert!(page.storage().error().is_none());
    assert_eq!(page.user().error(), Some(USER_REQUIRED));

    page.user_open();
    page.choose_user(1).unwrap();
    assert!(page.user().error().is_none());
    assert!(page.meta().errors.is_empty());
}

#[test]
fn prefill_sets_values_and_clears_snapshot() {
    let mut page = ChoicePage::new();
    page.select_storage(0).unwrap();
    page.user_open();
    page.choose_user(0).unwrap();
    page.submit();
    assert!(!page.submission().is_empty());

    page.apply_external_values(Some("business"), Some("arlene"));
    assert_eq!(page.watched().get(&storage()), Some("business"));
    assert_eq!(page.watched().get(&user()), Some("arlene"));
    assert!(page.submission().is_empty());
    assert_eq!(page.storage().selected_index(), Some(1));
    assert_eq!(page.user().display_text(), "Arlene Mccoy");

    page.apply_external_values(None, Some("arlene"));
    assert_eq!(page.watched().get(&storage()), None);
    assert_eq!(page.watched().get(&user()), None);
    assert_eq!(page.user().display_text(), "");
    assert_eq!(page.meta().submit_count, 0);
}

#[test]
fn prefill_sync_follows_the_nav_link() {
    let mut page = ChoicePage::new();
    let mut sync = PrefillSync::new();

    let params = PrefillParams::from_query("");
    sync.sync(&mut page, &params);
    let link = params.toggle_link();
    assert_eq!(link.label, "Prefill");

    let params = link.params();
    assert!(sync.sync(&mut page, &params));
    assert_eq!(page.storage().selected_option().map(|o| o.value()), Some("business"));

    let link = params.toggle_link();
    assert_eq!(link.label, "Without Prefill");
    assert!(sync.sync(&mut page, &link.params()));
    assert_eq!(page.storage().selected_option(), None);
}

#[test]
fn combo_filter_choose_and_revert() {
    let mut page = ChoicePage::new();
    page.user_open();
    for c in "COOP".chars() {
        page.user_input(c);
    }
    let labels: Vec<_> = page
        .user()
        .visible_options()
        .iter()
        .map(|o| o.label().to_string())
        .collect();
    assert_eq!(labels, vec!["Wade Cooper"]);

    page.choose_user(0).unwrap();
    assert_eq!(page.user().display_text(), "Wade Cooper");
    assert_eq!(page.watched().get(&user()), Some("wade"));

    page.user_open();
    page.user_backspace();
    page.user_input('z');
    page.blur_user().unwrap();
    assert_eq!(page.user().display_text(), "Wade Cooper");
    assert_eq!(page.watched().get(&user()), Some("wade"));
    assert!(page.meta().touched_fields.contains_key(&user()));
}

#[test]
fn blur_marks_touched_without_dirtying() {
    let mut page = ChoicePage::new();
    page.blur_storage().unwrap();
    let meta = page.meta();
    assert!(meta.touched_fields.contains_key(&storage()));
    assert!(!meta.is_dirty);
}
