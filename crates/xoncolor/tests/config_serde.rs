use pretty_assertions::assert_eq;
use xoncolor::{Color, RenderConfig};

#[test]
fn reads_console_settings() {
    let config: RenderConfig = toml::from_str(
        r##"
default_color = "#c0c0c0"
min_brightness = 80
max_brightness = 255
"##,
    )
    .unwrap();
    assert_eq!(config, RenderConfig::console());
}

#[test]
fn out_of_range_brightness_is_clamped() {
    let config: RenderConfig = toml::from_str("min_brightness = -5\nmax_brightness = 300").unwrap();
    assert_eq!(config.min_brightness(), 0);
    assert_eq!(config.max_brightness(), 255);
    assert_eq!(config.default_color(), RenderConfig::console().default_color());
}

#[test]
fn missing_keys_use_console_defaults() {
    let config: RenderConfig = toml::from_str("default_color = \"#00ff00\"").unwrap();
    assert_eq!(config.default_color(), Color::rgb(0, 255, 0));
    assert_eq!(config.min_brightness(), 80);
    assert_eq!(config.max_brightness(), 255);

    let config: RenderConfig = toml::from_str("max_brightness = 200").unwrap();
    assert_eq!(config.min_brightness(), 80);
    assert_eq!(config.default_color(), Color::rgb(192, 192, 192));

    let empty: RenderConfig = toml::from_str("").unwrap();
    assert_eq!(empty, RenderConfig::console());
}

#[test]
fn inverted_range_is_an_error() {
    let err = toml::from_str::<RenderConfig>("min_brightness = 200\nmax_brightness = 100")
        .unwrap_err();
    assert!(err.to_string().contains("invalid brightness range"), "{err}");
}

#[test]
fn bad_color_is_an_error() {
    assert!(toml::from_str::<RenderConfig>("default_color = \"grey\"").is_err());
}

#[test]
fn serializes_color_as_hex() {
    let text = toml::to_string(&RenderConfig::console()).unwrap();
    assert!(text.contains("default_color = \"#c0c0c0\""), "{text}");
    let back: RenderConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, RenderConfig::console());
    assert_eq!(Color::rgb(192, 192, 192).to_hex(), "#c0c0c0");
}
