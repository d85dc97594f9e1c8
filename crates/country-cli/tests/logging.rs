//! Logging initialisation writes events from our crates through the configured writer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use country_catalog::Catalog;
use country_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};
use country_field::normalize;
use country_model::SelectionMode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_json_logging_captures_label_fallback() {
    let buffer = Buffer::default();
    let mut config = LogConfig::default()
        .with_level_filter(LevelFilter::DEBUG)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    config.use_env_filter = false;
    init_logging_with_writer(&config, buffer.clone());

    let value = normalize("QQ", Catalog::builtin(), SelectionMode::Single);
    assert_eq!(value.label(), Some("QQ"));

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("json log line"))
        .collect();
    assert!(events.iter().any(|event| {
        event["fields"]["message"] == "code not in catalog, using it as its own label"
            && event["fields"]["code"] == "QQ"
    }));
    assert!(
        events
            .iter()
            .any(|event| event["fields"]["message"] == "normalized country value")
    );
}
