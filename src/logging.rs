use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warnings by default, `-v` for step
/// progress, `-vv` for git output and HTTP requests.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "git_hub=warn",
        1 => "git_hub=info",
        _ => "git_hub=debug",
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "git_hub=warn");
        assert_eq!(default_directive(1), "git_hub=info");
        assert_eq!(default_directive(2), "git_hub=debug");
        assert_eq!(default_directive(9), "git_hub=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
