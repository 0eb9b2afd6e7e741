use super::*;

use std::io::{Cursor, Read};

use assert_matches::assert_matches;

use crate::{error::Error, sink::Sink, tee::Tee};

#[test]
fn test_default_settings() {
    let settings = Settings::load_with(None, |_| None).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.tee.empty_read, EmptyReadPolicy::Ignore);
    assert_eq!(settings.tee.close, ClosePolicy::Repeat);
}

#[test]
fn test_load_yaml_override() {
    let settings = Settings::load(Some(Path::new("src/testing/assets/settings/close-once.yaml"))).unwrap();
    assert_eq!(settings.tee.close, ClosePolicy::Once);
    assert_eq!(settings.tee.empty_read, EmptyReadPolicy::Ignore);
}

#[test]
fn test_load_toml_override() {
    let settings = Settings::load(Some(Path::new("src/testing/assets/settings/legacy.toml"))).unwrap();
    assert_eq!(
        settings.tee,
        Options::default()
            .with_empty_read(EmptyReadPolicy::Close)
            .with_close(ClosePolicy::Repeat)
    );
}

#[test]
fn test_load_from_env_var() {
    let settings = Settings::load_with(None, |name| {
        (name == CONFIG_ENV_VAR).then(|| "src/testing/assets/settings/close-once.yaml".into())
    })
    .unwrap();
    assert_eq!(settings.tee.close, ClosePolicy::Once);
}

#[test]
fn test_missing_file_from_env_var_is_ignored() {
    let settings = Settings::load_with(None, |_| Some("src/testing/assets/settings/nonexistent.yaml".into())).unwrap();
    assert_eq!(settings, Settings::default());

    let settings = Settings::load_with(None, |_| Some("".into())).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_missing_explicit_file() {
    let result = Settings::load_with(Some(Path::new("src/testing/assets/settings/nonexistent.yaml")), |_| None);
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_invalid_value() {
    let result = Settings::load(Some(Path::new("src/testing/assets/settings/invalid.yaml")));
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_options_builders() {
    let options = Options::default().with_close(ClosePolicy::Once);
    assert_eq!(options.close, ClosePolicy::Once);
    assert_eq!(options.empty_read, EmptyReadPolicy::Ignore);
    let options = options.with_empty_read(EmptyReadPolicy::Close);
    assert_eq!(options.close, ClosePolicy::Once);
    assert_eq!(options.empty_read, EmptyReadPolicy::Close);
}

#[test]
fn test_loaded_options_drive_tee() {
    let settings = Settings::load(Some(Path::new("src/testing/assets/settings/close-once.yaml"))).unwrap();

    let mut sink = CloseCounter::default();
    let mut tee = Cursor::new(b"ok").tee_with(&mut sink, settings.tee);

    let mut buf = [0; 4];
    assert_eq!(tee.read(&mut buf).unwrap(), 2);
    for _ in 0..3 {
        assert_eq!(tee.read(&mut buf).unwrap(), 0);
    }
    drop(tee);

    assert_eq!(sink.closes, 1);
}

// ---

#[derive(Default)]
struct CloseCounter {
    closes: usize,
}

impl Sink for CloseCounter {
    fn write(&mut self, _: &[u8]) {}

    fn flush(&mut self) {}

    fn close(&mut self) {
        self.closes += 1;
    }
}
