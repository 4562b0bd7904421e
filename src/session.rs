use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::despike::SpikeCutter;
use crate::recorder::SkeletonRecorder;
use crate::skeleton::BodyFrame;

/// One recording run: a spike cutter plus its CSV sink, with the
/// tracking-identity lock the frame handler applies. The first tracked body
/// seen locks the session to its id; bodies with any other id are skipped
/// so a bystander cannot interleave samples into the time series.
pub struct RecordingSession {
    cutter: SpikeCutter,
    recorder: SkeletonRecorder,
    locked_id: Option<u64>,
}

impl RecordingSession {
    pub fn start(config: &Config) -> Result<Self> {
        let cutter = SpikeCutter::from_config(&config.despike)?;
        let recorder = SkeletonRecorder::create(&config.recording, cutter.monitored_joints())?;
        Ok(Self::with_recorder(cutter, recorder))
    }

    pub fn with_recorder(cutter: SpikeCutter, recorder: SkeletonRecorder) -> Self {
        Self {
            cutter,
            recorder,
            locked_id: None,
        }
    }

    pub fn output_path(&self) -> &Path {
        self.recorder.path()
    }

    /// Handle one sensor frame: for the identity-locked body, log the raw
    /// record and feed the cutter, appending the despiked record once the
    /// filter window is live. `relative_secs` is time since recording start.
    pub fn process_frame(&mut self, relative_secs: f64, bodies: &[BodyFrame]) -> Result<()> {
        for body in bodies {
            if !body.is_tracked {
                continue;
            }
            match self.locked_id {
                None => self.locked_id = Some(body.tracking_id),
                Some(id) if id != body.tracking_id => continue,
                Some(_) => {}
            }

            self.recorder.write_raw(relative_secs, body)?;
            self.cutter.feed(body);
            if let Some(row) = self.cutter.despiked_row(relative_secs) {
                self.recorder.append_despiked(&row)?;
            }
        }
        Ok(())
    }

    /// Flush and close the recording, returning its path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.recorder.flush()?;
        Ok(self.recorder.path().to_path_buf())
    }
}
