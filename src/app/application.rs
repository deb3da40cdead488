//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::eventing::app_event::AppEvent;
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store::load_app_config;

actions!(artwork_table, [Quit]);

/// Run the artwork table application
pub fn run_app() -> anyhow::Result<()> {
    let config = load_app_config();
    tracing::info!(
        base_url = %config.catalog.base_url,
        concurrency = config.selection.concurrency,
        "Configuration loaded"
    );

    // Create event channel for service -> UI communication
    let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
    let service_hub = ServiceHub::new(config.clone(), event_tx)?;

    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(&config, cx);
        cx.set_global(entities.clone());
        cx.set_global(service_hub);

        let locale = entities.i18n.read(cx).locale;
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app-title")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx.clone(), cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
