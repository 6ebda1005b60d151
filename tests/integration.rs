// SPDX-License-Identifier: MPL-2.0
use iced_atelier::config::{self, Config};
use iced_atelier::i18n::fluent::I18n;
use iced_atelier::ui::gallery;
use iced_atelier::ui::home::{Layout, HEADER_BASELINE};
use iced_atelier::ui::navbar;
use iced_atelier::ui::panel::{Frame, Panel};
use iced_atelier::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: Some(ThemeMode::System),
        photos_dir: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-packages"), "Packages");

    // 2. Change config to es
    let spanish_config = Config {
        language: Some("es".to_string()),
        theme_mode: Some(ThemeMode::System),
        photos_dir: None,
    };
    config::save_to_path(&spanish_config, &temp_config_file_path)
        .expect("Failed to write spanish config file");

    // Load i18n with spanish config
    let loaded_spanish_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load spanish config from path");
    let i18n_es = I18n::new(None, &loaded_spanish_config);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("nav-packages"), "Paquetes");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_photo_scan_end_to_end() {
    let dir = tempdir().expect("Failed to create temporary directory");

    for (name, side) in [("wedding.jpg", 6u32), ("portrait.png", 4u32)] {
        let img = image_rs::RgbaImage::from_pixel(side, side, image_rs::Rgba([200, 160, 90, 255]));
        img.save(dir.path().join(name)).expect("Failed to write photo");
    }
    std::fs::write(dir.path().join("invoice.pdf"), b"%PDF").expect("Failed to write decoy");

    let metas = gallery::scan(dir.path()).expect("scan should succeed");

    assert_eq!(metas.len(), 2);
    // Alphabetical by file name
    assert!(metas[0].path.ends_with("portrait.png"));
    assert!(metas[1].path.ends_with("wedding.jpg"));
    assert_eq!(metas[0].width, 4);
    assert_eq!(metas[1].width, 6);
}

#[test]
fn test_panel_frames_follow_the_header_for_every_panel() {
    for (width, height) in [(1024.0_f32, 768.0_f32), (600.0, 900.0)] {
        let header = navbar::height(width);
        for _panel in Panel::ALL {
            let frame = Frame::compute(header, height);
            assert_eq!(frame.top, header);
            assert_eq!(frame.height, height - header);
        }
    }
}

#[test]
fn test_home_baseline_matches_the_fixed_header_constant() {
    // The landing reset uses the 80px constant even when the live header
    // is taller (wrapped navigation on narrow windows).
    let layout = Layout::baseline(900.0);
    assert_eq!(layout.top_padding, HEADER_BASELINE);
    assert_eq!(layout.height, 900.0 - HEADER_BASELINE);
    assert!(navbar::height(600.0) > HEADER_BASELINE);
}
