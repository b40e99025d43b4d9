use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global stderr subscriber. `RUST_LOG` wins over `verbosity`
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace). Later calls are no-ops.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if let Err(err) = result {
            eprintln!("typescale: logging already initialised: {err}");
        }
    });
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "typescale=warn",
        1 => "typescale=info",
        2 => "typescale=debug",
        _ => "typescale=trace",
    }
}
