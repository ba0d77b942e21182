mod common;

use common::{minimal_profile, sample_profile};
use pilgrim_page::model::NOT_AVAILABLE;
use pilgrim_page::view::error_page::render_error_template;
use pilgrim_page::view::profile::render_profile_template;

#[test]
fn test_full_profile_renders_every_section() {
    let html = render_profile_template(&sample_profile()).into_string();

    assert!(html.contains("أحمد محمد العلي"));
    assert!(html.contains("Ahmed Mohammed Alali"));
    assert!(html.contains("1234****"));
    assert!(html.contains("O+"));
    assert!(html.contains("مخيم منى 3"));
    assert!(html.contains("status-sick"));
    assert!(html.contains("⚠️"));
    assert!(html.contains("tel:+966500000001"));
    assert!(html.contains("tel:+966500000002"));
}

#[test]
fn test_camp_location_links_to_map_when_both_coordinates_present() {
    let html = render_profile_template(&sample_profile()).into_string();
    assert!(html.contains("https://www.google.com/maps?q=21.4225,39.8262"));
}

#[test]
fn test_camp_location_is_plain_text_when_a_coordinate_is_missing() {
    let mut profile = sample_profile();
    profile.camp_lng = None;
    let html = render_profile_template(&profile).into_string();

    assert!(html.contains("منى - المنطقة الشرقية"));
    assert!(!html.contains("google.com/maps"));
}

#[test]
fn test_absent_camp_location_omits_the_row() {
    let mut profile = sample_profile();
    profile.camp_location_name = None;
    let html = render_profile_template(&profile).into_string();

    assert!(!html.contains("موقع المخيم"));
    assert!(!html.contains("google.com/maps"));
}

#[test]
fn test_minimal_profile_still_renders_well_formed_sections() {
    let html = render_profile_template(&minimal_profile()).into_string();

    // name falls back, national id sentinel, healthy fallback badge
    assert!(html.contains(NOT_AVAILABLE));
    assert!(html.contains("status-healthy"));
    assert!(html.contains("✅"));
    // section titles stay even with zero rows
    assert!(html.contains("معلومات الرحلة"));
    assert!(html.contains("جهة الاتصال للطوارئ"));
    // no call buttons, no english name, no map
    assert!(!html.contains("tel:"));
    assert!(!html.contains("pilgrim-name-en"));
    assert!(!html.contains("google.com/maps"));
}

#[test]
fn test_rendering_is_deterministic() {
    let profile = sample_profile();
    let first = render_profile_template(&profile).into_string();
    let second = render_profile_template(&profile).into_string();
    assert_eq!(first, second);
}

#[test]
fn test_profile_fields_are_html_escaped() {
    let mut profile = sample_profile();
    profile.full_name_arabic = Some("<script>alert('x')</script>".to_string());
    let html = render_profile_template(&profile).into_string();

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_error_document_embeds_escaped_message() {
    let html = render_error_template("boom <img src=x onerror=alert(1)>").into_string();

    assert!(html.contains("حدث خطأ"));
    assert!(html.contains("boom"));
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;img"));
}
