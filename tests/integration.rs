// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};

use ::team_settings::config::{self, Config, RemoveButton};
use ::team_settings::domain::Team;
use ::team_settings::i18n::fluent::I18n;
use ::team_settings::media::picture;
use ::team_settings::ui::dialog::EXIT_TRANSITION;
use ::team_settings::ui::picture_upload;
use ::team_settings::ui::team_settings::{self, GeneralMessage, TabId};
use tempfile::tempdir;

fn picture_options(config: &Config) -> picture_upload::Options {
    picture_upload::Options {
        allowed_extensions: config.accepted_image_extensions.clone(),
        remove_button: config.remove_button,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_picture_policy_round_trips_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        accepted_image_extensions: vec!["png".to_string(), "jpg".to_string()],
        remove_button: RemoveButton::WhenImagePresent,
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let options = picture_options(&loaded);
    assert_eq!(options.allowed_extensions, vec!["png", "jpg"]);
    assert_eq!(options.remove_button, RemoveButton::WhenImagePresent);

    dir.close().expect("Failed to close temporary directory");
}

/// Walks the modal through open, navigation and the full two-phase close.
#[test]
fn test_modal_open_navigate_close_flow() {
    let config = Config::default();
    let team = Team::new("acme", "Acme");
    let mut modal = team_settings::State::new(picture_options(&config));

    // Opens on General with no active section.
    assert_eq!(modal.active_tab(), Some(TabId::General));
    assert_eq!(modal.active_section(), "");

    // Open the name section, then switch tabs: the section must not leak.
    modal.update(
        team_settings::Message::General(GeneralMessage::OpenSection(team_settings::Section::Name)),
        &team,
    );
    assert_eq!(modal.active_section(), "name");
    modal.update(team_settings::Message::TabSelected(TabId::Info), &team);
    assert_eq!(modal.active_tab(), Some(TabId::Info));
    assert_eq!(modal.active_section(), "");

    // Close: nothing observable until the exit transition has elapsed.
    modal.update(team_settings::Message::CloseRequested, &team);
    assert!(modal.is_animating());
    let early = modal.update(team_settings::Message::AnimationTick(Instant::now()), &team);
    assert!(matches!(early, team_settings::Event::None));

    let after = Instant::now() + EXIT_TRANSITION + Duration::from_millis(5);
    let exited = modal.update(team_settings::Message::AnimationTick(after), &team);
    assert!(matches!(exited, team_settings::Event::Exited));

    // After exit, transient state is back at the defaults.
    assert_eq!(modal.active_tab(), Some(TabId::General));
    assert_eq!(modal.active_section(), "");
    assert!(!modal.is_animating());
}

/// Selecting a disallowed file surfaces a rejection carrying the extension,
/// without ever starting a preview read.
#[test]
fn test_disallowed_extension_is_rejected_at_selection() {
    let config = Config::default();
    let team = Team::new("acme", "Acme");
    let mut modal = team_settings::State::new(picture_options(&config));

    let event = modal.update(
        team_settings::Message::General(GeneralMessage::Picture(
            picture_upload::Message::FileChosen(Some("/tmp/photo.tga".into())),
        )),
        &team,
    );

    let team_settings::Event::ImageRejected(err) = event else {
        panic!("expected ImageRejected, got {event:?}");
    };
    assert_eq!(err.i18n_key(), "error-image-unsupported-type");
    assert_eq!(
        err.i18n_args(),
        vec![("extension", "tga".to_string())],
    );
}

/// A valid selection asks the owner to read the file, and the decoded preview
/// flows back through the same message path.
#[tokio::test]
async fn test_valid_selection_produces_a_preview() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("icon.png");

    let mut pixels = image_rs::RgbaImage::new(4, 2);
    for pixel in pixels.pixels_mut() {
        *pixel = image_rs::Rgba([10, 20, 30, 255]);
    }
    pixels.save(&path).expect("Failed to write test image");

    let config = Config::default();
    let team = Team::new("acme", "Acme");
    let mut modal = team_settings::State::new(picture_options(&config));

    let event = modal.update(
        team_settings::Message::General(GeneralMessage::Picture(
            picture_upload::Message::FileChosen(Some(path.clone())),
        )),
        &team,
    );
    let team_settings::Event::ImageSelected { request, path } = event else {
        panic!("expected ImageSelected, got {event:?}");
    };

    let result = picture::load_preview(path).await;
    let preview = result.as_ref().expect("Failed to decode preview");
    assert_eq!((preview.width, preview.height), (4, 2));

    let event = modal.update(
        team_settings::Message::General(GeneralMessage::Picture(
            picture_upload::Message::PreviewLoaded { request, result },
        )),
        &team,
    );
    assert!(matches!(event, team_settings::Event::PreviewReady));

    dir.close().expect("Failed to close temporary directory");
}
