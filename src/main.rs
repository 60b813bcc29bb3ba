use diskloop::bench::BenchmarkLoop;
use diskloop::config::LoopConfig;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new("info"))
        .init();

    let outcome = BenchmarkLoop::new(LoopConfig::default()).and_then(|mut bench| bench.run());
    let err = match outcome {
        Ok(never) => match never {},
        Err(err) => err,
    };

    error!("{}", err);
    std::process::exit(1);
}
