use inkpot::{Config, run};

fn main() -> anyhow::Result<()> {
    let worker_threads = Config::load()?.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    // 0 falls through to tokio's default (one worker per core).
    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    builder.build()?.block_on(run())
}
