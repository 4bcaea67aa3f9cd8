// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery screen to localization, theming and the
//! injected [`GallerySource`](crate::application::port::GallerySource). The
//! source is built once in [`run`] and shared for the whole session.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedGallerySource;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::HttpGalleryClient;
use crate::ui::gallery;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    window_id: Option<window::Id>,
    theme: Theme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("gallery", &self.gallery)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
///
/// Close requests are routed through [`Message::WindowCloseRequested`] so the
/// gallery is detached before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Everything `App::new` needs, resolved before the event loop starts.
pub struct Boot {
    pub flags: Flags,
    pub config: Config,
    pub config_warning: Option<String>,
    pub source: SharedGallerySource,
}

impl Boot {
    /// Loads the config and builds the HTTP gallery client.
    pub fn prepare(flags: Flags) -> crate::error::Result<Self> {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let settings = config.api.client_settings(flags.service_key.as_deref());
        let source: SharedGallerySource = Arc::new(HttpGalleryClient::new(settings)?);

        Ok(Self {
            flags,
            config,
            config_warning,
            source,
        })
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> crate::error::Result<()> {
    use std::cell::RefCell;

    let boot_state = RefCell::new(Some(Boot::prepare(flags)?));
    // iced 0.14 requires `Fn` for boot; the state is consumed on the first call.
    let boot = move || match boot_state.borrow_mut().take() {
        Some(boot) => App::new(boot),
        None => unreachable!("boot function called more than once"),
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Builds the root state and issues the first page fetch.
    pub fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            config,
            config_warning,
            source,
        } = boot;

        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let page_size = flags
            .page_size
            .map(crate::domain::gallery::PageSize::new)
            .unwrap_or_else(|| config.api.page_size());
        let mut gallery = gallery::State::new(source, page_size);
        let task = gallery.start().map(Message::Gallery);

        let app = App {
            i18n,
            gallery,
            window_id: None,
            theme: config.general.theme_mode.theme(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.gallery.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            window_id: &mut self.window_id,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
        })
    }
}
