//! Tilt Trail headless runner
//!
//! Loads a stage, feeds a constant tilt through the sensor channel, and runs
//! the fixed-timestep session for a number of frames. Useful for tuning
//! stage files and simulation configs without a renderer.
//!
//! Usage: tilt-trail [stage.json] [--config config.json] [--frames N] [--tilt X,Y]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tilt Trail (native) starting...");

    if let Err(err) = runner::run(std::env::args().skip(1)) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is embedded by a host page; there is no standalone entry point
}

#[cfg(not(target_arch = "wasm32"))]
mod runner {
    use std::time::Duration;

    use glam::Vec3;
    use tilt_trail::consts::{SIM_DT, TILT_SAMPLE_INTERVAL_MS};
    use tilt_trail::input::{AxisConvention, tilt_channel};
    use tilt_trail::sim::{GameEvent, TickInput};
    use tilt_trail::{GameSession, SessionEvent, SimConfig, Stage};

    /// Flat 100x100 field with a start pad in the south and a goal in the north
    const DEMO_STAGE: &str = r#"{
        "name": "demo-field",
        "spawn": [0.0, 1.0, 40.0],
        "surfaces": [{
            "name": "field",
            "paintable": true,
            "positions": [[-50, 0, -50], [50, 0, -50], [50, 0, 50], [-50, 0, 50]],
            "uvs": [[0, 0], [1, 0], [1, 1], [0, 1]],
            "triangles": [[0, 2, 1], [0, 3, 2]]
        }],
        "colliders": [
            { "role": "start", "center": [0, 1, 40], "size": [10, 4, 6] },
            { "role": "end", "center": [0, 1, -40], "size": [10, 4, 6] },
            { "role": "obstacle", "center": [20, 1, 0], "size": [4, 2, 4] }
        ]
    }"#;

    struct Args {
        stage: Option<String>,
        config: Option<String>,
        frames: u32,
        tilt: (f32, f32),
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
        let mut parsed = Args {
            stage: None,
            config: None,
            frames: 1200,
            tilt: (0.0, 0.5),
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config = Some(args.next().ok_or("--config needs a path")?),
                "--frames" => {
                    let value = args.next().ok_or("--frames needs a count")?;
                    parsed.frames = value
                        .parse()
                        .map_err(|_| format!("invalid frame count '{value}'"))?;
                }
                "--tilt" => {
                    let value = args.next().ok_or("--tilt needs X,Y")?;
                    let (x, y) = value
                        .split_once(',')
                        .ok_or_else(|| format!("invalid tilt '{value}', expected X,Y"))?;
                    let parse = |s: &str| {
                        s.trim()
                            .parse::<f32>()
                            .map_err(|_| format!("invalid tilt component '{s}'"))
                    };
                    parsed.tilt = (parse(x)?, parse(y)?);
                }
                path if parsed.stage.is_none() && !path.starts_with("--") => {
                    parsed.stage = Some(path.to_string());
                }
                other => return Err(format!("unexpected argument '{other}'")),
            }
        }
        Ok(parsed)
    }

    fn read(path: &str) -> Result<String, String> {
        std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))
    }

    pub fn run(args: impl Iterator<Item = String>) -> Result<(), String> {
        let args = parse_args(args)?;

        let stage_json = match &args.stage {
            Some(path) => read(path)?,
            None => DEMO_STAGE.to_string(),
        };
        let stage = Stage::from_json(&stage_json).map_err(|e| e.to_string())?;
        let config = match &args.config {
            Some(path) => SimConfig::from_json(&read(path)?).map_err(|e| e.to_string())?,
            None => SimConfig::default(),
        };

        let mut session = GameSession::new(stage, config);
        let (mut writer, reader) = tilt_channel(AxisConvention::Native);

        // Device held level first so the baseline is zero
        let mut sensor_clock = Duration::ZERO;
        writer.push(Vec3::ZERO, sensor_clock);
        let tilt = Vec3::new(args.tilt.0, args.tilt.1, 0.0);

        for frame in 0..args.frames {
            let elapsed = Duration::from_secs_f32(frame as f32 * SIM_DT);
            if elapsed >= sensor_clock + Duration::from_millis(TILT_SAMPLE_INTERVAL_MS) {
                sensor_clock = elapsed;
                writer.push(tilt, sensor_clock);
            }

            let input = TickInput {
                tilt: reader.latest(),
                paused: false,
            };
            session.advance(SIM_DT, &input);

            for event in session.drain_events() {
                match event {
                    SessionEvent::Game(GameEvent::Started) => {
                        log::info!("Frame {frame}: run started");
                    }
                    SessionEvent::Game(GameEvent::Over(reason)) => {
                        log::info!("Frame {frame}: game over ({})", reason.as_str());
                    }
                    SessionEvent::PathSample(waypoint) => {
                        log::debug!("Frame {frame}: waypoint {:?}", waypoint.pos);
                    }
                }
            }
            if session.outcome().is_over() {
                break;
            }
        }

        let ball = session.ball();
        println!("stage:     {}", session.stage().name);
        println!("outcome:   {:?}", session.outcome());
        println!(
            "ball:      ({:.2}, {:.2}, {:.2})",
            ball.pos.x, ball.pos.y, ball.pos.z
        );
        println!("waypoints: {}", session.waypoints().len());
        println!("painted:   {} texels", session.painted_texels());
        Ok(())
    }
}
