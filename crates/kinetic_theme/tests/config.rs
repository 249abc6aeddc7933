use kinetic_core::Color;
use kinetic_theme::{ColorToken, ComponentDefaults, OpacityToken, Theme, ThemeError, ThemeState};

const APP_THEME: &str = r##"
[colors]
primary = "#2563eb"
input = "#cbd5e1"

[opacity]
disabled = 0.4

[collapsible]
duration_ms = 300
min_height = 24

[switch]
duration_ms = 220
track_width = 48

[input_otp]
max_length = 4
mask = "*"

[spinner]
spinner_ms = 600
"##;

#[test]
fn app_theme_overrides_only_what_it_names() {
    let theme = Theme::from_toml_str(APP_THEME).unwrap();
    let builtin = Theme::default();

    assert_eq!(theme.colors.primary, Color::from_hex(0x2563EB));
    assert_eq!(theme.colors.input, Color::from_hex(0xCBD5E1));
    assert_eq!(theme.colors.border, builtin.colors.border);

    assert_eq!(theme.opacities.disabled, 0.4);

    assert_eq!(theme.defaults.collapsible.duration_ms, 300.0);
    assert_eq!(theme.defaults.collapsible.min_height, 24.0);
    assert_eq!(theme.defaults.switch.duration_ms, 220.0);
    assert_eq!(theme.defaults.switch.track_width, 48.0);
    assert_eq!(theme.defaults.switch.thumb_width, 20.0);
    assert_eq!(theme.defaults.input_otp.max_length, 4);
    assert_eq!(theme.defaults.input_otp.mask, '*');
    assert_eq!(theme.defaults.spinner.spinner_ms, 600.0);
    assert_eq!(theme.defaults.spinner.pulse_ms, 1500.0);
}

#[test]
fn invalid_defaults_are_reported_with_their_field() {
    let err = Theme::from_toml_str("[collapsible]\nmin_height = -4\n").unwrap_err();
    match err {
        ThemeError::InvalidValue { field, .. } => assert_eq!(field, "collapsible.min_height"),
        other => panic!("unexpected error: {other}"),
    }

    let err = Theme::from_toml_str("[input_otp]\nmax_length = 0\n").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidValue { field: "input_otp.max_length", .. }));
}

#[test]
fn defaults_survive_a_json_round_trip() {
    let defaults = ComponentDefaults::default();
    let json = serde_json::to_string(&defaults).unwrap();
    let parsed: ComponentDefaults = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, defaults);

    let partial: ComponentDefaults =
        serde_json::from_str(r#"{"switch": {"duration_ms": 90}}"#).unwrap();
    assert_eq!(partial.switch.duration_ms, 90.0);
    assert_eq!(partial.collapsible, defaults.collapsible);
}

#[test]
fn theme_file_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("kinetic-theme-{}.toml", std::process::id()));
    std::fs::write(&path, APP_THEME).unwrap();

    let theme = Theme::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(theme.defaults.switch.duration_ms, 220.0);
}

#[test]
fn global_state_serves_installed_theme() {
    ThemeState::init(Theme::from_toml_str(APP_THEME).unwrap());

    let state = ThemeState::get();
    assert_eq!(state.color(ColorToken::Primary), Color::from_hex(0x2563EB));
    assert_eq!(state.opacity(OpacityToken::Disabled), 0.4);
    assert_eq!(state.defaults().collapsible.duration_ms, 300.0);
    assert!(ThemeState::try_get().is_some());
}
