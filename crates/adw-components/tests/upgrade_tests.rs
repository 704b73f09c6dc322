use adw_components::{upgrade_document, upgrade_html, ComponentRegistry};
use adw_dom::Document;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn registry() -> ComponentRegistry {
    ComponentRegistry::with_defaults()
}

const PAGE: &str = concat!(
    r#"<div id="app">"#,
    r#"<adw-header-bar title="Blog" data-test="header">"#,
    r##"<adw-button slot="start" icon="go-previous-symbolic" href="#/feed"></adw-button>"##,
    r#"<adw-split-button slot="end" label="New" appearance="suggested">"#,
    r#"<adw-button slot="menu" label="Draft"></adw-button>"#,
    r#"</adw-split-button>"#,
    r#"</adw-header-bar>"#,
    r#"<adw-box orientation="vertical" spacing="6" class="feed">"#,
    r#"<adw-spinner size="small"></adw-spinner>"#,
    r#"<adw-like-button item-type="post" item-id="42" like-count="3"></adw-like-button>"#,
    r#"</adw-box>"#,
    r#"<adw-dialog title="Sign in"><p>Please sign in.</p>"#,
    r#"<adw-button slot="footer" label="OK" data-test="ok"></adw-button></adw-dialog>"#,
    r#"</div>"#
);

#[test]
fn test_upgrades_every_placeholder() {
    let registry = registry();
    let (html, report) = upgrade_html(PAGE, &registry);

    assert!(report.is_clean(), "{:?}", report.degraded);
    assert!(!html.contains("<adw-"), "{}", html);
    assert!(html.contains(r#"<header class="adw-header-bar" data-test="header">"#));
    assert!(html.contains(r#"<div class="adw-box vertical feed" style="gap: 6px">"#));
    assert!(html.contains(r#"data-item-id="42""#));
    assert!(html.contains(r#"data-test="ok""#));
}

#[test]
fn test_upgrade_is_idempotent() {
    let registry = registry();
    let (once, _) = upgrade_html(PAGE, &registry);
    let (twice, report) = upgrade_html(&once, &registry);

    assert_eq!(once, twice);
    assert_eq!(report.upgraded, 0);
    assert!(report.is_clean());
}

#[test]
fn test_suggested_button_keeps_data_attribute() {
    let (html, report) = upgrade_html(
        r#"<adw-button appearance="suggested" data-x="1" label="Go"></adw-button>"#,
        &registry(),
    );
    assert_eq!(report.upgraded, 1);
    assert_eq!(
        html,
        r#"<button type="button" class="adw-button suggested-action" data-x="1"><span class="adw-button-label">Go</span></button>"#
    );
}

#[rstest]
#[case(r#"<adw-button data-test="x"></adw-button>"#)]
#[case(r#"<adw-box data-test="x"></adw-box>"#)]
#[case(r#"<adw-spinner data-test="x"></adw-spinner>"#)]
#[case(r#"<adw-status-page title="Empty" data-test="x"></adw-status-page>"#)]
#[case(r#"<adw-header-bar title="T" data-test="x"></adw-header-bar>"#)]
fn test_non_schema_attribute_survives(#[case] input: &str) {
    let (html, _) = upgrade_html(input, &registry());
    assert!(html.contains(r#"data-test="x""#), "{}", html);
    assert!(!html.contains("<adw-"), "{}", html);
}

#[test]
fn test_replacement_attribute_wins_over_placeholder() {
    let (html, _) = upgrade_html(r#"<adw-button type="submit" label="Send"></adw-button>"#, &registry());
    assert!(html.starts_with(r#"<button type="button""#), "{}", html);
}

#[test]
fn test_header_bar_buttons_become_flat() {
    let (html, _) = upgrade_html(
        r#"<adw-header-bar title="Feed"><adw-button slot="end" label="Menu"></adw-button></adw-header-bar>"#,
        &registry(),
    );
    assert!(
        html.contains(r#"<div class="adw-header-bar-end"><button type="button" class="adw-button flat">"#),
        "{}",
        html
    );
}

#[test]
fn test_nested_boxes_upgrade_inside_out() {
    let mut document = Document::parse(
        r#"<adw-box orientation="horizontal"><adw-box><adw-button label="a"></adw-button></adw-box></adw-box>"#,
    );
    let report = upgrade_document(&mut document, &registry());

    assert_eq!(report.upgraded, 3);
    assert_eq!(
        document.to_html(),
        concat!(
            r#"<div class="adw-box horizontal">"#,
            r#"<div class="adw-box vertical">"#,
            r#"<button type="button" class="adw-button"><span class="adw-button-label">a</span></button>"#,
            r#"</div></div>"#
        )
    );
}

#[test]
fn test_degraded_placeholders_do_not_stop_the_pass() {
    let (html, report) = upgrade_html(
        concat!(
            r#"<adw-view-switcher></adw-view-switcher>"#,
            r#"<adw-split-button></adw-split-button>"#,
            r#"<adw-button label="Still here"></adw-button>"#
        ),
        &registry(),
    );

    let tags: Vec<_> = report.degraded.iter().map(|d| d.tag.as_str()).collect();
    assert_eq!(tags, vec!["adw-split-button", "adw-view-switcher"]);
    assert_eq!(report.upgraded, 3);
    assert!(html.contains("Still here"));
    assert!(!html.contains("<adw-"));
}

#[test]
fn test_unregistered_tags_are_left_alone() {
    let mut registry = ComponentRegistry::new();
    registry.register::<adw_components::Button>();

    let (html, _) = upgrade_html(r#"<adw-box><adw-button label="x"></adw-button></adw-box>"#, &registry);
    assert!(html.starts_with("<adw-box>"), "{}", html);
    assert!(html.contains(r#"<button type="button" class="adw-button">"#));
}

#[rstest]
#[case(r#"<div><adw-button slot="end" label="x"></adw-button></div>"#)]
#[case(r#"<adw-spinner slot="start"></adw-spinner>"#)]
#[case(r#"<adw-header-bar title="T" slot="top"></adw-header-bar>"#)]
fn test_slot_attribute_is_consumed(#[case] input: &str) {
    let (html, _) = upgrade_html(input, &registry());
    assert!(!html.contains("slot="), "{}", html);
    assert!(!html.contains("<adw-"), "{}", html);
}

#[test]
fn test_unknown_header_bar_slot_goes_to_start() {
    let (html, report) = upgrade_html(
        r#"<adw-header-bar title="T"><adw-button slot="right" label="Keep"></adw-button></adw-header-bar>"#,
        &registry(),
    );
    assert!(report.is_clean());
    assert!(
        html.contains(concat!(
            r#"<div class="adw-header-bar-start">"#,
            r#"<button type="button" class="adw-button flat"><span class="adw-button-label">Keep</span></button>"#,
            r#"</div>"#
        )),
        "{}",
        html
    );
    assert!(!html.contains("slot="), "{}", html);
}

#[test]
fn test_unknown_dialog_slot_goes_to_body() {
    let (html, report) = upgrade_html(
        r#"<adw-dialog title="Hi"><p slot="content">Body text</p></adw-dialog>"#,
        &registry(),
    );
    assert!(report.is_clean(), "{:?}", report);
    assert!(html.contains(r#"<div class="adw-dialog-body"><p>Body text</p></div>"#), "{}", html);
}

#[test]
fn test_split_button_keeps_children_outside_menu_slot() {
    let (html, _) = upgrade_html(
        r##"<adw-split-button label="Publish"><a slot="menu" href="#/a">A</a><a slot="items" href="#/b">B</a></adw-split-button>"##,
        &registry(),
    );
    assert!(
        html.contains(r##"<div class="adw-split-button-menu" role="menu" hidden><a href="#/a">A</a><a href="#/b">B</a></div>"##),
        "{}",
        html
    );
}
