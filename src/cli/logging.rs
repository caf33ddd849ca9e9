//! Diagnostic logging for the binary.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "clerk=warn",
        1 => "clerk=info",
        2 => "clerk=debug",
        _ => "clerk=trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directive(0), "clerk=warn");
        assert_eq!(default_directive(1), "clerk=info");
        assert_eq!(default_directive(2), "clerk=debug");
        assert_eq!(default_directive(9), "clerk=trace");
    }
}
