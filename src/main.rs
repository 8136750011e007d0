mod app;

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON, so logs go to stderr only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    app::run()
}
