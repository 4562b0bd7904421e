use anyhow::{bail, Result};
use skeleton_recorder::config::Config;
use skeleton_recorder::replay;
use skeleton_recorder::session::RecordingSession;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("usage: {} <capture.csv>", args[0]);
    }

    println!("=== Skeleton Recorder - Despike Replay ===");
    println!("capture: {}", args[1]);
    println!("monitored joints: {:?}", config.despike.joints);
    println!("thresholds: {:?}", config.despike.thresholds);
    println!();

    let frames = replay::read_capture(&args[1])?;
    println!("{} frames loaded", frames.len());

    let mut session = RecordingSession::start(&config)?;
    for (time, body) in &frames {
        session.process_frame(*time, std::slice::from_ref(body))?;
    }

    let path = session.finish()?;
    println!("despiked recording written to {}", path.display());

    Ok(())
}
