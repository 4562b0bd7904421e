use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::RecordingConfig;
use crate::skeleton::{BodyFrame, JointType};

/// CSV sink for one recording: the raw skeleton record for every frame,
/// with the despiked record appended to the same line once the filter has
/// output. The header is written once at creation; each subsequent line is
/// opened by `write_raw`.
pub struct SkeletonRecorder {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl SkeletonRecorder {
    /// Create a timestamp-named recording in the configured directory
    pub fn create(config: &RecordingConfig, monitored: &[JointType]) -> Result<Self> {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("creating recording dir {}", config.output_dir))?;
        let ts = chrono::Local::now().format("%Y-%m-%d %H-%M-%S");
        let path = Path::new(&config.output_dir).join(format!("{}.csv", ts));
        Self::create_at(path, monitored)
    }

    pub fn create_at<P: Into<PathBuf>>(path: P, monitored: &[JointType]) -> Result<Self> {
        let path = path.into();
        let file =
            File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{}", header(monitored))?;
        Ok(Self { writer, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new line with the raw record: timestamp, then x/y/z and the
    /// tracking-state code for every logged joint
    pub fn write_raw(&mut self, relative_secs: f64, body: &BodyFrame) -> Result<()> {
        write!(self.writer, "\n{}", relative_secs)?;
        for joint in JointType::ALL {
            let j = body.get(joint);
            write!(
                self.writer,
                ",{},{},{},{}",
                j.position[0],
                j.position[1],
                j.position[2],
                j.state.code()
            )?;
        }
        Ok(())
    }

    /// Append the filter's despiked record to the current line. During the
    /// two seeding frames there is none and the line ends after the raw part.
    pub fn append_despiked(&mut self, row: &str) -> Result<()> {
        write!(self.writer, "{}", row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Header row: raw columns for all logged joints, then the despiked columns
/// for the monitored set
fn header(monitored: &[JointType]) -> String {
    let mut header = String::from("time");
    for joint in JointType::ALL {
        let stem = joint.column_stem();
        header.push_str(&format!(",{0}X,{0}Y,{0}Z,{0}S", stem));
    }
    header.push_str(",time2");
    for joint in monitored {
        let stem = joint.column_stem();
        header.push_str(&format!(",{0}DespikedX,{0}DespikedY,{0}DespikedZ", stem));
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::{Joint, TrackingState};

    fn monitored() -> Vec<JointType> {
        vec![
            JointType::WristRight,
            JointType::WristLeft,
            JointType::ElbowRight,
            JointType::ElbowLeft,
        ]
    }

    #[test]
    fn test_header_layout() {
        let h = header(&monitored());
        let columns: Vec<&str> = h.split(',').collect();
        // time + 15 joints * 4 + time2 + 4 joints * 3
        assert_eq!(columns.len(), 1 + 15 * 4 + 1 + 4 * 3);
        assert_eq!(columns[0], "time");
        assert_eq!(columns[1], "headX");
        assert_eq!(columns[4], "headS");
        assert_eq!(columns[61], "time2");
        assert_eq!(columns[62], "wristRightDespikedX");
        assert_eq!(columns[columns.len() - 1], "elbowLeftDespikedZ");
    }

    #[test]
    fn test_write_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.csv");

        let mut joints = [Joint::default(); JointType::COUNT];
        joints[JointType::WristRight as usize] =
            Joint::new([0.5, 0.25, 2.0], TrackingState::Tracked);
        let body = BodyFrame::new(3, joints);

        let mut recorder = SkeletonRecorder::create_at(&path, &monitored()).unwrap();
        recorder.write_raw(0.25, &body).unwrap();
        recorder.append_despiked(",0.25,0.5,0.25,2").unwrap();
        recorder.write_raw(0.5, &body).unwrap();
        recorder.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("time,headX"));

        // Full line: raw part plus appended despiked part
        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first[0], "0.25");
        assert_eq!(first.len(), 1 + 15 * 4 + 1 + 3);
        // wristRight occupies raw columns 37..41
        assert_eq!(first[37], "0.5");
        assert_eq!(first[40], "2");

        // Seeding-style line: raw part only
        let second: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(second.len(), 1 + 15 * 4);
    }

    #[test]
    fn test_create_names_file_in_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = RecordingConfig {
            output_dir: dir.path().join("rec").to_string_lossy().into_owned(),
        };
        let recorder = SkeletonRecorder::create(&config, &monitored()).unwrap();
        assert!(recorder.path().starts_with(dir.path().join("rec")));
        assert_eq!(
            recorder.path().extension().and_then(|e| e.to_str()),
            Some("csv")
        );
    }
}
