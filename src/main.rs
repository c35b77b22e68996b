use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = descendants_chart_geometry::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
