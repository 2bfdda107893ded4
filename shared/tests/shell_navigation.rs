use assert_matches::assert_matches;
use crux_core::testing::AppTester;
use shared::capabilities::{InstallOperation, InstallOutcome};
use shared::model::{NotificationId, PlaceId, SearchResultId};
use shared::overlay::{InstallHandle, OverlayKind};
use shared::settings::SettingKey;
use shared::view::ScreenView;
use shared::{App, Effect, EntityRef, Event, Model, ScreenId};

#[test]
fn navigation_closes_the_drawer_for_every_screen() {
    let app = AppTester::<App, Effect>::default();
    for screen in ScreenId::ALL {
        let mut model = Model::default();
        app.update(Event::OpenDrawer, &mut model);
        assert!(model.overlay.drawer_open());

        let update = app.update(Event::Navigate { screen }, &mut model);
        assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
        assert!(!model.overlay.drawer_open());
        assert_eq!(model.router.current(), screen);
        assert_eq!(app.view(&model).screen, screen);
    }
}

#[test]
fn back_returns_to_the_map() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::Navigate {
            screen: ScreenId::Routes,
        },
        &mut model,
    );
    assert_matches!(app.view(&model).content, ScreenView::Placeholder { .. });

    app.update(Event::NavigateBack, &mut model);
    assert_eq!(model.router.current(), ScreenId::Map);
}

#[test]
fn back_closes_the_drawer_and_the_foreign_info_panel() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::Navigate {
            screen: ScreenId::Favorites,
        },
        &mut model,
    );
    app.update(
        Event::EntitySelected {
            entity: EntityRef::stop("1"),
        },
        &mut model,
    );
    app.update(Event::OpenDrawer, &mut model);

    let update = app.update(Event::NavigateBack, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    let view = app.view(&model);
    assert_eq!(view.screen, ScreenId::Map);
    assert!(!view.drawer.open);
    assert!(view.info_panel.is_none());
}

#[test]
fn backdrop_and_close_button_share_one_path() {
    let app = AppTester::<App, Effect>::default();
    let mut via_backdrop = Model::default();
    let mut via_button = Model::default();

    for model in [&mut via_backdrop, &mut via_button] {
        app.update(Event::OpenDrawer, model);
        app.update(
            Event::EntitySelected {
                entity: EntityRef::bus("bus-2"),
            },
            model,
        );
    }

    app.update(
        Event::BackdropTapped {
            overlay: OverlayKind::Drawer,
        },
        &mut via_backdrop,
    );
    app.update(Event::CloseDrawer, &mut via_button);
    assert_eq!(via_backdrop.overlay, via_button.overlay);

    app.update(
        Event::BackdropTapped {
            overlay: OverlayKind::InfoPanel,
        },
        &mut via_backdrop,
    );
    app.update(Event::SelectionCleared, &mut via_button);
    assert_eq!(via_backdrop.overlay, via_button.overlay);
    assert!(app.view(&via_backdrop).info_panel.is_none());
}

#[test]
fn unknown_entities_are_not_selected() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    let update = app.update(
        Event::EntitySelected {
            entity: EntityRef::bus("bus-99"),
        },
        &mut model,
    );
    assert!(update.effects.is_empty());
    assert!(model.overlay.selected().is_none());
}

#[test]
fn leaving_the_map_drops_the_selection() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::EntitySelected {
            entity: EntityRef::stop("1"),
        },
        &mut model,
    );
    app.update(
        Event::Navigate {
            screen: ScreenId::Map,
        },
        &mut model,
    );
    assert!(model.overlay.selected().is_some());

    app.update(
        Event::Navigate {
            screen: ScreenId::Favorites,
        },
        &mut model,
    );
    assert!(model.overlay.selected().is_none());
}

#[test]
fn seeded_notification_scenario() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    assert_eq!(model.notifications.unread_count(), 2);
    assert_eq!(
        app.view(&model).chrome.and_then(|c| c.unread_badge),
        Some(2)
    );

    app.update(
        Event::NotificationRead {
            id: NotificationId::new("1"),
        },
        &mut model,
    );
    assert_eq!(model.notifications.unread_count(), 1);

    app.update(Event::AllNotificationsRead, &mut model);
    assert_eq!(model.notifications.unread_count(), 0);
    assert_eq!(
        app.view(&model).chrome.and_then(|c| c.unread_badge),
        None
    );

    app.update(Event::AllNotificationsCleared, &mut model);
    assert_eq!(model.notifications.len(), 0);
    assert_eq!(model.notifications.unread_count(), 0);
}

#[test]
fn deleting_an_unread_notification_updates_the_badge() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::NotificationDeleted {
            id: NotificationId::new("2"),
        },
        &mut model,
    );
    assert_eq!(model.notifications.len(), 4);
    assert_eq!(
        app.view(&model).chrome.and_then(|c| c.unread_badge),
        Some(1)
    );
}

#[test]
fn settings_events_clamp_and_toggle() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::SettingToggled {
            key: SettingKey::DarkMode,
        },
        &mut model,
    );
    app.update(Event::FontSizeChanged { px: 99 }, &mut model);
    app.update(Event::RefreshIntervalChanged { seconds: 62 }, &mut model);

    let view = app.view(&model);
    assert!(view.dark_mode);
    assert_eq!(view.font_size_px, 24);
    assert_eq!(model.settings.refresh_interval_s, 60);
}

#[test]
fn selecting_a_search_result_opens_the_map() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::Navigate {
            screen: ScreenId::Search,
        },
        &mut model,
    );
    app.update(
        Event::SearchQueryChanged {
            query: "queen".into(),
        },
        &mut model,
    );
    assert_matches!(
        app.view(&model).content,
        ScreenView::Search { ref results, searching: true, .. } if results.len() == 1
    );

    app.update(
        Event::SearchResultSelected {
            id: SearchResultId::new("3"),
        },
        &mut model,
    );
    assert_eq!(model.router.current(), ScreenId::Map);
}

#[test]
fn saved_places_can_be_removed_and_selected() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::Navigate {
            screen: ScreenId::Favorites,
        },
        &mut model,
    );

    app.update(
        Event::SavedPlaceAlertsToggled {
            id: PlaceId::new("3"),
        },
        &mut model,
    );
    assert!(model.saved_places.get(&PlaceId::new("3")).is_some_and(|p| p.alerts));

    app.update(
        Event::SavedPlaceRemoved {
            id: PlaceId::new("1"),
        },
        &mut model,
    );
    assert_eq!(model.saved_places.places().len(), 3);

    let update = app.update(
        Event::SavedPlaceRemoved {
            id: PlaceId::new("1"),
        },
        &mut model,
    );
    assert!(update.effects.is_empty());

    app.update(
        Event::SavedPlaceSelected {
            id: PlaceId::new("2"),
        },
        &mut model,
    );
    assert_eq!(model.router.current(), ScreenId::Map);
}

#[test]
fn install_prompt_lifecycle() {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();

    app.update(
        Event::InstallPromptAvailable {
            handle: InstallHandle("evt-1".into()),
        },
        &mut model,
    );
    let view = app.view(&model);
    assert!(view.install_banner);
    assert!(view.drawer.can_install);

    app.update(Event::InstallPromptDeferred, &mut model);
    let view = app.view(&model);
    assert!(!view.install_banner);
    assert!(view.drawer.can_install);

    let update = app.update(Event::InstallRequested, &mut model);
    let mut prompt = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::InstallPrompt(request) => Some(request),
            _ => None,
        })
        .expect("prompt requested");
    assert_eq!(
        prompt.operation,
        InstallOperation::Prompt {
            handle: InstallHandle("evt-1".into())
        }
    );
    assert!(!app.view(&model).drawer.can_install);

    let resolved = app
        .resolve(&mut prompt, InstallOutcome::Dismissed)
        .expect("prompt resolves");
    assert_eq!(
        resolved.events,
        vec![Event::InstallPromptResolved {
            outcome: InstallOutcome::Dismissed
        }]
    );

    let update = app.update(Event::InstallRequested, &mut model);
    assert!(!update
        .effects
        .iter()
        .any(|e| matches!(e, Effect::InstallPrompt(_))));
}
