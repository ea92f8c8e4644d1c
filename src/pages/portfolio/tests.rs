use super::*;
use crate::pages::testing::{CountingProjectSource, FailingProjectSource, FixedTranslations};
use falah_core::error::FetchError;
use falah_core::locale::LocalizedString;
use falah_core::model::{Badge, Section};

fn acme() -> ProjectRecord {
    ProjectRecord {
        id: "acme-deal".into(),
        title: "Acme Deal".into(),
        badges: vec![
            Badge {
                label: "Fintech".into(),
                color: "#1e1a61".into(),
            },
            Badge {
                label: "Series A".into(),
                color: "#0f766e".into(),
            },
        ],
        investment_year: Some(2021),
        content_image: None,
        content_sections: vec![Section {
            title: "About".into(),
            text: "Acme builds payment rails.".into(),
        }],
    }
}

fn sources(
    projects: Arc<CountingProjectSource>,
    translations: Arc<FixedTranslations>,
) -> PortfolioSources {
    PortfolioSources {
        projects,
        translations,
    }
}

fn ru_title_overlay() -> ProjectOverlay {
    ProjectOverlay {
        title: Some(LocalizedString::new("", "Сделка", "")),
        ..Default::default()
    }
}

#[test]
fn test_legacy_id_pattern() {
    assert!(is_legacy_project_id("p1"));
    assert!(is_legacy_project_id("p0042"));
    assert!(!is_legacy_project_id("p"));
    assert!(!is_legacy_project_id("p12a"));
    assert!(!is_legacy_project_id("P12"));
    assert!(!is_legacy_project_id("xp12"));
    assert!(!is_legacy_project_id("acme-deal"));
    assert!(!is_legacy_project_id("project-7"));
}

#[tokio::test]
async fn test_legacy_ids_never_fetch() {
    let projects = Arc::new(CountingProjectSource::with(vec![ProjectRecord {
        id: "p12".into(),
        ..acme()
    }]));
    let translations = Arc::new(FixedTranslations::ok(ProjectOverlay::default()));
    let srcs = sources(projects.clone(), translations.clone());

    for id in ["p1", "p12", "p999999"] {
        assert_eq!(load_project(&srcs, id).await, PageState::NotFound);
    }
    assert_eq!(projects.calls(), 0);
    assert!(translations.requested().is_empty());
}

#[tokio::test]
async fn test_overlay_requested_with_record_id() {
    let projects = Arc::new(CountingProjectSource::with(vec![acme()]));
    let translations = Arc::new(FixedTranslations::ok(ru_title_overlay()));
    let srcs = sources(projects.clone(), translations.clone());

    let loaded = load_project(&srcs, "acme-deal").await;
    assert!(loaded.found().is_some());
    assert_eq!(translations.requested(), vec!["acme-deal".to_string()]);
    assert_eq!(projects.calls(), 1);
}

#[tokio::test]
async fn test_overlay_keyed_by_record_id_not_route() {
    let projects = Arc::new(CountingProjectSource::routed(vec![("acme", acme())]));
    let translations = Arc::new(FixedTranslations::ok(ru_title_overlay()));
    let ctx = Arc::new(SiteContext::new(Locale::Ru));
    let page = PortfolioPage::mount(ctx, sources(projects, translations.clone()), "acme").await;

    assert_eq!(translations.requested(), vec!["acme-deal".to_string()]);
    assert_eq!(page.route_id(), "acme");
    assert_eq!(page.resolved().found().unwrap().id, "acme-deal");
    assert!(page.render().contains("<h1>Сделка</h1>"));
}

#[tokio::test]
async fn test_missing_record_skips_overlay() {
    let projects = Arc::new(CountingProjectSource::with(vec![]));
    let translations = Arc::new(FixedTranslations::ok(ru_title_overlay()));
    let srcs = sources(projects, translations.clone());

    assert_eq!(load_project(&srcs, "ghost").await, PageState::NotFound);
    assert!(translations.requested().is_empty());
}

#[tokio::test]
async fn test_primary_fetch_error_is_not_found() {
    let srcs = PortfolioSources {
        projects: Arc::new(FailingProjectSource),
        translations: Arc::new(FixedTranslations::ok(ProjectOverlay::default())),
    };
    let page = PortfolioPage::mount(Arc::new(SiteContext::default()), srcs, "acme-deal").await;
    assert_eq!(page.state(), &PageState::NotFound);
    assert!(page.render().contains("Project Not Found"));
}

#[tokio::test]
async fn test_failed_overlay_shows_default_title_in_every_locale() {
    let ctx = Arc::new(SiteContext::new(Locale::En));
    let srcs = sources(
        Arc::new(CountingProjectSource::with(vec![acme()])),
        Arc::new(FixedTranslations::failing(FetchError::Status(500))),
    );
    let mut page = PortfolioPage::mount(ctx.clone(), srcs, "acme-deal").await;

    for locale in Locale::ALL {
        ctx.set_locale(locale);
        page.process_pending();
        let resolved = page.resolved();
        assert_eq!(resolved.found().unwrap().title, "Acme Deal");
    }
}

#[tokio::test]
async fn test_end_to_end_ru_title_and_kz_fallback() {
    let ctx = Arc::new(SiteContext::new(Locale::Ru));
    let srcs = sources(
        Arc::new(CountingProjectSource::with(vec![acme()])),
        Arc::new(FixedTranslations::ok(ru_title_overlay())),
    );
    let mut page = PortfolioPage::mount(ctx.clone(), srcs, "acme-deal").await;
    assert!(page.render().contains("<h1>Сделка</h1>"));
    assert!(page.render().contains("Инвестировано в 2021"));

    ctx.set_locale(Locale::Kz);
    assert_eq!(page.process_pending(), 1);
    assert!(page.render().contains("<h1>Acme Deal</h1>"));
}

#[tokio::test]
async fn test_locale_change_does_not_refetch() {
    let ctx = Arc::new(SiteContext::new(Locale::En));
    let projects = Arc::new(CountingProjectSource::with(vec![acme()]));
    let srcs = sources(
        projects.clone(),
        Arc::new(FixedTranslations::ok(ProjectOverlay::default())),
    );
    let mut page = PortfolioPage::mount(ctx.clone(), srcs, "acme-deal").await;
    ctx.set_locale(Locale::Ru);
    ctx.notify_i18n_updated();
    ctx.notify_team_data_updated();
    assert_eq!(page.process_pending(), 3);
    assert_eq!(page.locale(), Locale::Ru);
    assert_eq!(projects.calls(), 1);
}

#[tokio::test]
async fn test_language_changed_without_payload_rereads_context() {
    let ctx = Arc::new(SiteContext::new(Locale::En));
    let srcs = sources(
        Arc::new(CountingProjectSource::with(vec![acme()])),
        Arc::new(FixedTranslations::ok(ProjectOverlay::default())),
    );
    let mut page = PortfolioPage::new(ctx.clone(), srcs, "acme-deal");
    ctx.set_locale(Locale::Kz);
    // Handle only the payload-less event.
    assert!(page.handle_event(&SiteEvent::LanguageChanged { lang: None }));
    assert_eq!(page.locale(), Locale::Kz);
}

#[tokio::test]
async fn test_state_machine_loading_then_found_then_found() {
    let ctx = Arc::new(SiteContext::new(Locale::En));
    let srcs = sources(
        Arc::new(CountingProjectSource::with(vec![acme()])),
        Arc::new(FixedTranslations::ok(ru_title_overlay())),
    );
    let mut page = PortfolioPage::new(ctx.clone(), srcs, "acme-deal");
    assert!(page.state().is_loading());
    assert!(page.render().contains("Loading..."));

    page.load().await;
    assert!(page.state().found().is_some());

    ctx.set_locale(Locale::Ru);
    page.process_pending();
    assert_eq!(page.resolved().found().unwrap().title, "Сделка");
}

#[tokio::test]
async fn test_stale_load_is_discarded() {
    let ctx = Arc::new(SiteContext::default());
    let other = ProjectRecord {
        id: "beta-deal".into(),
        title: "Beta Deal".into(),
        ..acme()
    };
    let srcs = sources(
        Arc::new(CountingProjectSource::with(vec![acme(), other])),
        Arc::new(FixedTranslations::ok(ProjectOverlay::default())),
    );
    let mut page = PortfolioPage::new(ctx, srcs.clone(), "acme-deal");

    let first = page.begin_load();
    let second = page.begin_load();
    let newer = load_project(&srcs, "beta-deal").await;
    let older = load_project(&srcs, "acme-deal").await;

    assert!(page.apply_load(second, newer));
    assert!(!page.apply_load(first, older));
    assert_eq!(page.resolved().found().unwrap().title, "Beta Deal");
}

#[tokio::test]
async fn test_navigate_reloads() {
    let ctx = Arc::new(SiteContext::default());
    let srcs = sources(
        Arc::new(CountingProjectSource::with(vec![acme()])),
        Arc::new(FixedTranslations::ok(ProjectOverlay::default())),
    );
    let mut page = PortfolioPage::mount(ctx, srcs, "acme-deal").await;
    page.navigate("p7").await;
    assert_eq!(page.route_id(), "p7");
    assert_eq!(page.state(), &PageState::NotFound);
}

#[test]
fn test_drop_releases_subscription() {
    let ctx = Arc::new(SiteContext::default());
    let srcs = sources(
        Arc::new(CountingProjectSource::default()),
        Arc::new(FixedTranslations::ok(ProjectOverlay::default())),
    );
    let a = PortfolioPage::new(ctx.clone(), srcs.clone(), "acme-deal");
    let b = PortfolioPage::new(ctx.clone(), srcs, "beta-deal");
    assert_eq!(ctx.listener_count(), 2);
    drop(a);
    drop(b);
    assert_eq!(ctx.listener_count(), 0);
}
