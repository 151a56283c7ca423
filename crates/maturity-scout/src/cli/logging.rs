//! Diagnostic logging setup. Logs always go to stderr so stdout stays clean
//! for `--json` output.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// One JSON object per event.
    Json,
}

/// `RUST_LOG` plus our own default level.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "maturity_scout=debug"
    } else {
        "maturity_scout=warn"
    };
    let filter = EnvFilter::from_default_env();
    match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

pub fn build_subscriber<W>(
    verbose: bool,
    format: LogFormat,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(writer);
    match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool, format: LogFormat) {
    let _ = tracing::subscriber::set_global_default(build_subscriber(
        verbose,
        format,
        std::io::stderr,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured(format: LogFormat) -> String {
        let capture = Capture::default();
        let subscriber = build_subscriber(false, format, capture.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(url = "https://example.com/", "fetch failed");
            tracing::info!("below the default level");
        });
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_json_lines() {
        let out = captured(LogFormat::Json);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["level"], "WARN");
        assert_eq!(event["fields"]["message"], "fetch failed");
        assert_eq!(event["fields"]["url"], "https://example.com/");
    }

    #[test]
    fn test_text_format() {
        let out = captured(LogFormat::Text);
        assert!(out.contains("fetch failed"));
        assert!(!out.contains("below the default level"));
        assert!(serde_json::from_str::<serde_json::Value>(out.trim()).is_err());
    }
}
