use super::*;
use crate::bindings::{EventKind, Target};
use crate::consts::{PLACEHOLDER_MESSAGE, SHADOW_ELEVATED, SHADOW_FLAT, THEME_ATTRIBUTE};
use crate::fake_test::{FakeNode, FakePage, MemoryStore, Portfolio, portfolio};

type TestController = Controller<FakePage, MemoryStore>;

fn boot(p: Portfolio) -> (TestController, Vec<Binding<FakeNode>>, Portfolio) {
    boot_with(p, MemoryStore::default())
}

fn boot_with(mut p: Portfolio, store: MemoryStore) -> (TestController, Vec<Binding<FakeNode>>, Portfolio) {
    let page = std::mem::take(&mut p.page);
    let ctrl = Controller::new(page, store, PageConfig::default()).unwrap();
    let startup = ctrl.start().unwrap();
    (ctrl, startup.bindings, p)
}

/// Deliver a click the way the browser does: element listeners from the
/// clicked node up through its ancestors, then document listeners.
fn click(ctrl: &TestController, rows: &[Binding<FakeNode>], node: FakeNode) -> Outcome {
    let mut outcome = Outcome::PROCEED;
    let mut run = |handler: Handler, current: Option<FakeNode>| {
        let ctx = EventContext { target: Some(node), current };
        if ctrl.dispatch(handler, &ctx).unwrap().prevent_default {
            outcome = Outcome::PREVENT;
        }
    };

    let mut cursor = Some(node);
    while let Some(current) = cursor {
        for row in rows {
            if row.event == EventKind::Click && row.target == Target::Element(current) {
                run(row.handler, Some(current));
            }
        }
        cursor = ctrl.page().parent(current);
    }
    for row in rows {
        if row.event == EventKind::Click && row.target == Target::Document {
            run(row.handler, None);
        }
    }
    outcome
}

fn scroll_to(ctrl: &TestController, rows: &[Binding<FakeNode>], y: f64) {
    ctrl.page().set_scroll(y);
    for row in rows.iter().filter(|r| r.event == EventKind::Scroll) {
        ctrl.dispatch(row.handler, &EventContext::default()).unwrap();
    }
}

fn applied_theme(ctrl: &TestController) -> Option<String> {
    ctrl.page().root_attribute(THEME_ATTRIBUTE)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_fails_on_missing_navbar() {
    let page = FakePage::default();
    page.add("button", &[], &[("id", "themeToggle")], None);
    page.add("button", &[], &[("id", "mobileMenuBtn")], None);
    page.add("ul", &[], &[("id", "navLinks")], None);

    let err = Controller::new(page, MemoryStore::default(), PageConfig::default()).err();
    assert_eq!(err, Some(FolioError::MissingElement { id: "navbar".into() }));
}

#[test]
fn new_fails_on_first_missing_element() {
    let err = Controller::new(FakePage::default(), MemoryStore::default(), PageConfig::default()).err();
    assert_eq!(err, Some(FolioError::MissingElement { id: "themeToggle".into() }));
}

#[test]
fn new_honors_configured_ids() {
    let page = FakePage::default();
    for id in ["dark-switch", "burger", "menu", "topbar"] {
        page.add("div", &[], &[("id", id)], None);
    }
    let config = PageConfig {
        theme_toggle_id: "dark-switch".into(),
        menu_button_id: "burger".into(),
        menu_id: "menu".into(),
        navbar_id: "topbar".into(),
        ..PageConfig::default()
    };
    assert!(Controller::new(page, MemoryStore::default(), config).is_ok());
}

// =============================================================
// Startup
// =============================================================

#[test]
fn start_applies_light_without_stored_preference() {
    let (ctrl, _, _) = boot(portfolio());
    assert_eq!(applied_theme(&ctrl).as_deref(), Some("light"));
}

#[test]
fn start_applies_stored_dark() {
    let (ctrl, _, _) = boot_with(portfolio(), MemoryStore::with("theme", "dark"));
    assert_eq!(applied_theme(&ctrl).as_deref(), Some("dark"));
}

#[test]
fn start_fails_when_storage_is_unavailable() {
    let mut p = portfolio();
    let page = std::mem::take(&mut p.page);
    let ctrl = Controller::new(page, MemoryStore::unavailable(), PageConfig::default()).unwrap();
    assert!(matches!(ctrl.start(), Err(FolioError::Storage(_))));
}

#[test]
fn start_highlights_initial_section() {
    let (ctrl, _, p) = boot(portfolio());
    assert!(ctrl.page().active(p.home_link));
    assert!(!ctrl.page().active(p.about_link));
}

#[test]
fn start_returns_fade_targets_hidden() {
    let mut p = portfolio();
    let page = std::mem::take(&mut p.page);
    let ctrl = Controller::new(page, MemoryStore::default(), PageConfig::default()).unwrap();
    let startup = ctrl.start().unwrap();
    assert_eq!(startup.fade_targets, vec![p.card, p.project_card]);
    assert_eq!(ctrl.page().style(p.card, "opacity").as_deref(), Some("0"));
}

#[test]
fn start_survives_fade_target_without_inline_style() {
    let mut p = portfolio();
    p.page.make_unstylable(p.project_card);
    let page = std::mem::take(&mut p.page);
    let ctrl = Controller::new(page, MemoryStore::default(), PageConfig::default()).unwrap();
    let startup = ctrl.start().unwrap();
    assert_eq!(startup.fade_targets, vec![p.card]);
    assert!(!startup.bindings.is_empty());
}

#[test]
fn bindings_table_is_in_registration_order() {
    let (_, rows, p) = boot(portfolio());
    let handlers = rows.iter().map(|r| r.handler).collect::<Vec<_>>();
    assert_eq!(
        handlers,
        vec![
            Handler::ToggleTheme,
            Handler::ToggleMenu,
            Handler::CloseMenu,
            Handler::CloseMenu,
            Handler::CloseMenu,
            Handler::CloseMenuOnOutsideClick,
            Handler::SmoothScroll,
            Handler::SmoothScroll,
            Handler::SmoothScroll,
            Handler::SmoothScroll,
            Handler::SmoothScroll,
            Handler::TrackActiveSection,
            Handler::UpdateNavbarShadow,
            Handler::GuardPlaceholder,
        ]
    );
    assert_eq!(rows[0].target, Target::Element(p.toggle));
    assert_eq!(rows[5].target, Target::Document);
    assert_eq!(rows[11].target, Target::Window);
    assert_eq!(rows[13].target, Target::Element(p.placeholder));
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggle_click_flips_and_persists() {
    let mut p = portfolio();
    let page = std::mem::take(&mut p.page);
    let ctrl = Controller::new(page, MemoryStore::default(), PageConfig::default()).unwrap();
    let rows = ctrl.start().unwrap().bindings;

    click(&ctrl, &rows, p.toggle);
    assert_eq!(applied_theme(&ctrl).as_deref(), Some("dark"));
    click(&ctrl, &rows, p.toggle);
    assert_eq!(applied_theme(&ctrl).as_deref(), Some("light"));
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_button_click_opens_and_survives_document_listener() {
    let (ctrl, rows, p) = boot(portfolio());
    click(&ctrl, &rows, p.button);
    assert!(ctrl.page().active(p.menu));
    assert!(ctrl.page().active(p.button));
}

#[test]
fn click_on_button_icon_toggles_through_bubbling() {
    let (ctrl, rows, p) = boot(portfolio());
    click(&ctrl, &rows, p.button_icon);
    assert!(ctrl.page().active(p.menu));
    click(&ctrl, &rows, p.button_icon);
    assert!(!ctrl.page().active(p.menu));
}

#[test]
fn nav_link_click_always_closes_menu() {
    for toggles in [1, 3, 5] {
        let (ctrl, rows, p) = boot(portfolio());
        for _ in 0..toggles {
            click(&ctrl, &rows, p.button);
        }
        assert!(ctrl.page().active(p.menu));
        click(&ctrl, &rows, p.about_link);
        assert!(!ctrl.page().active(p.menu));
        assert!(!ctrl.page().active(p.button));
    }
}

#[test]
fn outside_click_closes_open_menu() {
    let (ctrl, rows, p) = boot(portfolio());
    click(&ctrl, &rows, p.button);
    click(&ctrl, &rows, p.outside);
    assert!(!ctrl.page().active(p.menu));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn nav_link_click_scrolls_and_prevents_navigation() {
    let (ctrl, rows, p) = boot(portfolio());
    let outcome = click(&ctrl, &rows, p.projects_link);
    assert!(outcome.prevent_default);
    assert_eq!(ctrl.page().scrolled_to(), vec![p.projects]);
}

#[test]
fn broken_anchor_is_silent() {
    let (ctrl, rows, p) = boot(portfolio());
    let outcome = click(&ctrl, &rows, p.broken);
    assert!(outcome.prevent_default);
    assert!(ctrl.page().scrolled_to().is_empty());
    assert!(ctrl.page().alerts().is_empty());
}

#[test]
fn placeholder_click_alerts_without_scrolling() {
    let (ctrl, rows, p) = boot(portfolio());
    for _ in 0..2 {
        assert!(click(&ctrl, &rows, p.placeholder).prevent_default);
    }
    assert_eq!(ctrl.page().alerts(), vec![PLACEHOLDER_MESSAGE.to_owned(); 2]);
    assert!(ctrl.page().scrolled_to().is_empty());
}

#[test]
fn filled_in_placeholder_is_no_longer_guarded() {
    let (ctrl, _, p) = boot(portfolio());
    ctrl.page().set_attribute(p.placeholder, "href", "https://example.com/project");
    let ctx = EventContext { target: Some(p.placeholder), current: Some(p.placeholder) };
    let outcome = ctrl.dispatch(Handler::GuardPlaceholder, &ctx).unwrap();
    assert_eq!(outcome, Outcome::PROCEED);
    assert!(ctrl.page().alerts().is_empty());
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_updates_active_link_and_shadow() {
    let (ctrl, rows, p) = boot(portfolio());

    scroll_to(&ctrl, &rows, 900.0);
    assert!(ctrl.page().active(p.about_link));
    assert!(!ctrl.page().active(p.home_link));
    assert_eq!(ctrl.page().style(p.navbar, "box-shadow").as_deref(), Some(SHADOW_ELEVATED));

    scroll_to(&ctrl, &rows, 0.0);
    assert!(ctrl.page().active(p.home_link));
    assert!(!ctrl.page().active(p.about_link));
    assert_eq!(ctrl.page().style(p.navbar, "box-shadow").as_deref(), Some(SHADOW_FLAT));
}

// =============================================================
// Fade-in
// =============================================================

#[test]
fn intersection_reveals_card() {
    let (ctrl, _, p) = boot(portfolio());
    assert!(ctrl.on_intersect(&p.project_card, true).unwrap());
    assert_eq!(ctrl.page().style(p.project_card, "opacity").as_deref(), Some("1"));
    assert_eq!(ctrl.page().style(p.card, "opacity").as_deref(), Some("0"));
}
