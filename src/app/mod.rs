// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home layout, the
//! full-window panels and the lightbox.
//!
//! The `App` struct wires together the domains (gallery, panels, lightbox,
//! localization) and translates messages into side effects like panel frame
//! recomputation or scroll snapping. This file intentionally keeps policy
//! decisions (window sizing, photos directory resolution, panel open/close
//! sequencing) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::packages;
use crate::ui::panel::{Frames, Panel};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    lightbox: lightbox::State,
    packages: packages::State,
    home: home::State,
    /// Panel currently shown in place of the home layout.
    active_panel: Option<Panel>,
    /// Page-level marker: present exactly while a panel is shown.
    fullscreen_mode: bool,
    /// Whether home scrolling is suppressed (panels scroll internally).
    scroll_locked: bool,
    /// One frame per panel, kept current even for hidden panels.
    frames: Frames,
    window_size: Size,
    theme_mode: ThemeMode,
    /// Directory scanned for gallery photos at startup.
    photos_dir: PathBuf,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_panel", &self.active_panel)
            .field("photo_count", &self.gallery.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let window_size = Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        );

        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(),
            lightbox: lightbox::State::new(),
            packages: packages::State::new(),
            home: home::State::new(window_size.height),
            active_panel: None,
            fullscreen_mode: false,
            scroll_locked: false,
            frames: Frames::new(navbar::height(window_size.width), window_size.height),
            window_size,
            theme_mode: ThemeMode::System,
            photos_dir: PathBuf::from(config::DEFAULT_PHOTOS_DIR),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous photo
    /// scan based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode.unwrap_or_default();
        app.photos_dir = flags
            .photos_dir
            .or(config.photos_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PHOTOS_DIR));

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let scan_dir = app.photos_dir.clone();
        let task = Task::perform(async move { gallery::scan(&scan_dir) }, |result| {
            Message::Gallery(gallery::Message::Scanned(result))
        });

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.active_panel {
            Some(Panel::Portfolio) => format!("{} - {app_name}", self.i18n.tr("nav-portfolio")),
            Some(Panel::Packages) => format!("{} - {app_name}", self.i18n.tr("nav-packages")),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            lightbox: &mut self.lightbox,
            packages: &mut self.packages,
            home: &mut self.home,
            active_panel: &mut self.active_panel,
            fullscreen_mode: &mut self.fullscreen_mode,
            scroll_locked: &mut self.scroll_locked,
            frames: &mut self.frames,
            window_size: &mut self.window_size,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut ctx, lightbox_message)
            }
            Message::Packages(packages_message) => {
                update::handle_packages_message(&mut ctx, packages_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            lightbox: &self.lightbox,
            packages: &self.packages,
            home: &self.home,
            active_panel: self.active_panel,
            frames: &self.frames,
            window_size: self.window_size,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gallery::PhotoMeta;
    use crate::ui::home::Layout;
    use crate::ui::lightbox;
    use crate::ui::navbar::NavLink;
    use crate::ui::packages::{Disclosure, PackageId};
    use crate::ui::panel::Frame;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn sample_metas(count: usize) -> Vec<PhotoMeta> {
        (0..count)
            .map(|i| PhotoMeta {
                path: PathBuf::from(format!("photo-{i}.png")),
                width: 4,
                height: 3,
            })
            .collect()
    }

    /// Loads `count` photos into the gallery through the normal scan path.
    fn app_with_photos(count: usize) -> App {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::Scanned(Ok(
            sample_metas(count),
        ))));
        app
    }

    fn press_link(app: &mut App, link: NavLink) {
        let _ = app.update(Message::Navbar(navbar::Message::LinkPressed(link)));
    }

    fn assert_fullscreen_invariant(app: &App) {
        assert_eq!(
            app.fullscreen_mode,
            app.active_panel.is_some(),
            "fullscreen marker must be present exactly while a panel is visible"
        );
    }

    #[test]
    fn new_starts_on_home_without_panels() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(app.active_panel.is_none());
            assert!(!app.fullscreen_mode);
            assert!(!app.scroll_locked);
            assert!(!app.lightbox.is_visible());
            assert_fullscreen_invariant(&app);
        });
    }

    #[test]
    fn new_prefers_cli_photos_dir_over_config() {
        with_temp_config_dir(|config_root| {
            let config_dir = config_root.join("IcedAtelier");
            std::fs::create_dir_all(&config_dir).expect("config dir");
            std::fs::write(
                config_dir.join("settings.toml"),
                "photos_dir = \"from-config\"\n",
            )
            .expect("write config");

            let (from_config, _) = App::new(Flags::default());
            assert_eq!(from_config.photos_dir, PathBuf::from("from-config"));

            let (from_cli, _) = App::new(Flags {
                photos_dir: Some("from-cli".to_string()),
                ..Flags::default()
            });
            assert_eq!(from_cli.photos_dir, PathBuf::from("from-cli"));
        });
    }

    #[test]
    fn new_warns_when_config_is_unreadable() {
        with_temp_config_dir(|config_root| {
            let config_dir = config_root.join("IcedAtelier");
            std::fs::create_dir_all(&config_dir).expect("config dir");
            std::fs::write(config_dir.join("settings.toml"), "not = valid = toml")
                .expect("write bad config");

            let (app, _task) = App::new(Flags::default());
            assert!(app.notifications.has_notifications());
        });
    }

    #[test]
    fn thumbnail_press_sources_the_lightbox() {
        let mut app = app_with_photos(3);

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(1)));

        assert!(app.lightbox.is_visible());
        assert_eq!(app.lightbox.source_index(), Some(1));
    }

    #[test]
    fn close_control_hides_lightbox_and_keeps_source() {
        let mut app = app_with_photos(3);
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(2)));

        let _ = app.update(Message::Lightbox(lightbox::Message::ClosePressed));

        assert!(!app.lightbox.is_visible());
        assert_eq!(app.lightbox.source_index(), Some(2));
    }

    #[test]
    fn backdrop_press_hides_lightbox_but_image_press_does_not() {
        let mut app = app_with_photos(2);
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));

        let _ = app.update(Message::Lightbox(lightbox::Message::ImagePressed));
        assert!(app.lightbox.is_visible());

        let _ = app.update(Message::Lightbox(lightbox::Message::BackdropPressed));
        assert!(!app.lightbox.is_visible());
    }

    #[test]
    fn scan_failure_surfaces_a_warning_toast() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::Scanned(Err(
            crate::error::Error::Io("denied".into()),
        ))));

        assert!(app.notifications.has_notifications());
        assert!(app.gallery.is_empty());
    }

    #[test]
    fn portfolio_link_opens_the_portfolio_panel() {
        let mut app = App::default();

        press_link(&mut app, NavLink::Portfolio);

        assert_eq!(app.active_panel, Some(Panel::Portfolio));
        assert!(app.fullscreen_mode);
        assert!(app.scroll_locked);
        assert_fullscreen_invariant(&app);

        let expected = Frame::compute(
            navbar::height(app.window_size.width),
            app.window_size.height,
        );
        assert_eq!(app.frames.get(Panel::Portfolio), expected);
    }

    #[test]
    fn switching_panels_keeps_a_single_panel_visible() {
        let mut app = App::default();

        press_link(&mut app, NavLink::Portfolio);
        press_link(&mut app, NavLink::Packages);

        assert_eq!(app.active_panel, Some(Panel::Packages));
        assert_fullscreen_invariant(&app);
    }

    #[test]
    fn reopening_the_active_panel_runs_the_full_sequence() {
        let mut app = App::default();

        press_link(&mut app, NavLink::Packages);
        let before = (app.active_panel, app.fullscreen_mode, app.scroll_locked);

        press_link(&mut app, NavLink::Packages);
        let after = (app.active_panel, app.fullscreen_mode, app.scroll_locked);

        assert_eq!(before, after);
        assert_eq!(app.active_panel, Some(Panel::Packages));
    }

    #[test]
    fn plain_link_closes_panels_and_restores_home() {
        let mut app = App::default();
        press_link(&mut app, NavLink::Portfolio);

        // Disturb the landing layout so the baseline reset is observable
        app.home.layout.top_margin = 55.0;
        app.home.layout.height = 1.0;

        press_link(&mut app, NavLink::Home);

        assert!(app.active_panel.is_none());
        assert!(!app.fullscreen_mode);
        assert!(!app.scroll_locked);
        assert_eq!(app.home.layout, Layout::baseline(app.window_size.height));
        assert_fullscreen_invariant(&app);
    }

    #[test]
    fn contact_link_also_closes_panels() {
        let mut app = App::default();
        press_link(&mut app, NavLink::Packages);

        press_link(&mut app, NavLink::Contact);

        assert!(app.active_panel.is_none());
        assert!(!app.fullscreen_mode);
        assert!(!app.scroll_locked);
        assert_fullscreen_invariant(&app);
    }

    #[test]
    fn closing_without_an_open_panel_is_harmless() {
        let mut app = App::default();

        press_link(&mut app, NavLink::Home);

        assert!(app.active_panel.is_none());
        assert!(!app.fullscreen_mode);
        assert_eq!(app.home.layout, Layout::baseline(app.window_size.height));
    }

    #[test]
    fn resize_recomputes_every_panel_frame() {
        let mut app = App::default();
        press_link(&mut app, NavLink::Portfolio);

        let _ = app.update(Message::WindowResized(Size::new(900.0, 700.0)));

        let expected = Frame::compute(navbar::height(900.0), 700.0);
        assert_eq!(app.frames.get(Panel::Portfolio), expected);
        assert_eq!(app.frames.get(Panel::Packages), expected);
        assert_eq!(app.window_size, Size::new(900.0, 700.0));
    }

    #[test]
    fn resize_below_breakpoint_uses_the_wrapped_header_height() {
        let mut app = App::default();

        let _ = app.update(Message::WindowResized(Size::new(600.0, 700.0)));

        let frame = app.frames.get(Panel::Portfolio);
        assert_eq!(frame.top, navbar::WRAPPED_HEIGHT);
        assert_eq!(frame.height, 700.0 - navbar::WRAPPED_HEIGHT);
    }

    #[test]
    fn repeated_resize_with_unchanged_size_is_idempotent() {
        let mut app = App::default();
        let size = Size::new(800.0, 640.0);

        let _ = app.update(Message::WindowResized(size));
        let first = app.frames;

        let _ = app.update(Message::WindowResized(size));
        assert_eq!(app.frames, first);
    }

    #[test]
    fn hidden_panels_stay_sized_for_activation() {
        let mut app = App::default();

        // Resize while nothing is open, then activate a panel without an
        // intervening resize: the frame must already match the window.
        let _ = app.update(Message::WindowResized(Size::new(1280.0, 1024.0)));
        press_link(&mut app, NavLink::Packages);

        assert_eq!(
            app.frames.get(Panel::Packages),
            Frame::compute(navbar::height(1280.0), 1024.0)
        );
    }

    #[test]
    fn disclosure_sequence_expand_collapse_expand() {
        let mut app = App::default();
        press_link(&mut app, NavLink::Packages);

        let toggle = |app: &mut App| {
            let _ = app.update(Message::Packages(packages::Message::ToggleDetails(
                PackageId::Ideal,
            )));
        };

        toggle(&mut app);
        assert!(app.packages.disclosure(PackageId::Ideal).is_expanded());

        toggle(&mut app);
        assert_eq!(
            app.packages.disclosure(PackageId::Ideal),
            Disclosure::CollapsedExplicit
        );

        toggle(&mut app);
        assert!(app.packages.disclosure(PackageId::Ideal).is_expanded());
    }

    #[test]
    fn disclosures_survive_panel_switches() {
        let mut app = App::default();
        press_link(&mut app, NavLink::Packages);
        let _ = app.update(Message::Packages(packages::Message::ToggleDetails(
            PackageId::Premium,
        )));

        press_link(&mut app, NavLink::Home);
        press_link(&mut app, NavLink::Packages);

        assert!(app.packages.disclosure(PackageId::Premium).is_expanded());
    }

    #[test]
    fn notification_tick_dismisses_expired_toasts() {
        let mut app = App::default();
        app.notifications.push(
            notifications::Notification::warning("notification-photo-scan-error")
                .auto_dismiss(std::time::Duration::ZERO),
        );

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_reflects_the_active_panel() {
        let mut app = App {
            i18n: I18n::new(Some("en-US".to_string()), &config::Config::default()),
            ..App::default()
        };

        assert_eq!(app.title(), "IcedAtelier");

        press_link(&mut app, NavLink::Portfolio);
        assert_eq!(app.title(), "Portfolio - IcedAtelier");

        press_link(&mut app, NavLink::Packages);
        assert_eq!(app.title(), "Packages - IcedAtelier");
    }

    #[test]
    fn view_renders_every_screen_state() {
        let mut app = app_with_photos(4);
        let _ = app.view();

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        let _ = app.view();

        press_link(&mut app, NavLink::Portfolio);
        let _ = app.view();

        press_link(&mut app, NavLink::Packages);
        let _ = app.view();
    }

    #[test]
    fn full_showcase_scenario() {
        let mut app = app_with_photos(3);

        // Press gallery photo #2 (zero-based index 1)
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(1)));
        assert!(app.lightbox.is_visible());
        assert_eq!(app.lightbox.source_index(), Some(1));

        // Open the packages panel
        press_link(&mut app, NavLink::Packages);
        assert_eq!(app.active_panel, Some(Panel::Packages));
        assert!(app.fullscreen_mode);
        assert!(app.scroll_locked);
        assert_fullscreen_invariant(&app);

        // A plain link closes everything and restores the home baseline
        press_link(&mut app, NavLink::Home);
        assert!(app.active_panel.is_none());
        assert!(!app.fullscreen_mode);
        assert!(!app.scroll_locked);
        assert_eq!(app.home.layout, Layout::baseline(app.window_size.height));
        assert_fullscreen_invariant(&app);
    }
}
