use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::skeleton::{BodyFrame, Joint, JointType, TrackingState};

/// Field count of the raw part of a capture line: timestamp plus
/// x/y/z/state per logged joint
const RAW_FIELDS: usize = 1 + JointType::COUNT * 4;

/// Parse a recorder-produced capture CSV back into timestamped body frames.
/// The despiked columns of an existing recording, if present, are ignored
/// so a finished recording can be replayed through a fresh filter.
pub fn read_capture<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, BodyFrame)>> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut frames = Vec::new();
    for (lineno, line) in content.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        let frame = parse_line(line)
            .with_context(|| format!("{}:{}", path.display(), lineno + 1))?;
        frames.push(frame);
    }
    Ok(frames)
}

fn parse_line(line: &str) -> Result<(f64, BodyFrame)> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < RAW_FIELDS {
        bail!(
            "expected at least {} fields, got {}",
            RAW_FIELDS,
            fields.len()
        );
    }

    let time: f64 = fields[0].parse().context("timestamp")?;
    let mut joints = [Joint::default(); JointType::COUNT];
    for (i, joint) in joints.iter_mut().enumerate() {
        let base = 1 + i * 4;
        let x: f32 = fields[base].parse().context("x coordinate")?;
        let y: f32 = fields[base + 1].parse().context("y coordinate")?;
        let z: f32 = fields[base + 2].parse().context("z coordinate")?;
        let code: i32 = fields[base + 3].parse().context("tracking state")?;
        let state = match TrackingState::from_code(code) {
            Some(state) => state,
            None => bail!("tracking state code {} out of range", code),
        };
        *joint = Joint::new([x, y, z], state);
    }

    // Capture files carry no identity column; replay presents one body
    Ok((time, BodyFrame::new(1, joints)))
}
