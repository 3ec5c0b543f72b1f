use fern::Dispatch;
use log::{Level, LevelFilter};
use std::{fmt::Display, time::Instant};

pub fn setup_logging(log_level: LevelFilter) -> anyhow::Result<()> {
    let start = Instant::now();

    // stdout only carries the rounded results
    Dispatch::new()
        .format(move |out, msg, record| {
            out.finish(format_args!(
                "{}",
                format_line(start.elapsed().as_secs_f32(), record.level(), record.target(), msg)
            ))
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn format_line<M>(elapsed: f32, level: Level, target: &str, msg: M) -> String
where
    M: Display,
{
    format!("{:.3}s {: >5} [{}] {}", elapsed, level, target, msg)
}
