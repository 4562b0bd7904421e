use anyhow::{bail, Result};

use crate::config::DespikeConfig;
use crate::despike::geometry;
use crate::skeleton::{BodyFrame, JointType};

/// Correction state carried per monitored joint between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// No active correction
    None,
    /// Last tick replaced the spiked sample with a constant-velocity projection
    Extrapolated,
    /// Last tick repaired the middle sample by averaging its neighbors
    Averaged,
}

impl Correction {
    /// Integer code for debug output (0/1/2)
    pub fn code(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Extrapolated => 1,
            Self::Averaged => 2,
        }
    }
}

/// Online single-frame spike filter over a set of monitored joints.
///
/// Keeps a 3-frame sliding window (two-back / previous / current) per joint
/// and classifies the discrete second difference against a per-joint
/// threshold. A detected spike is repaired either by extrapolating the
/// current sample from the two retained ones, or by averaging the previous
/// sample toward its neighbors; which buffer gets repaired feeds the next
/// tick's test, so the branch-to-buffer assignment matters.
///
/// The first two samples only seed the window. The despiked output is the
/// two-back snapshot, i.e. delayed one tick behind the raw input so each
/// reported sample had one frame of look-ahead inside the window.
///
/// Non-finite coordinates (sensor dropouts) are not quarantined; they
/// propagate through the arithmetic per IEEE 754.
pub struct SpikeCutter {
    joints: Vec<JointType>,
    thresholds: Vec<f32>,
    corrections: Vec<Correction>,
    current: Vec<[f32; 3]>,
    previous: Vec<[f32; 3]>,
    two_back: Vec<[f32; 3]>,
    frame_no: u64,
}

impl SpikeCutter {
    /// Reference monitored set and thresholds: wrists spike harder than
    /// elbows, so they get the looser threshold.
    pub const DEFAULT_JOINTS: [JointType; 4] = [
        JointType::WristRight,
        JointType::WristLeft,
        JointType::ElbowRight,
        JointType::ElbowLeft,
    ];
    pub const DEFAULT_THRESHOLDS: [f32; 4] = [0.1, 0.1, 0.05, 0.05];

    pub fn new(joints: Vec<JointType>, thresholds: Vec<f32>) -> Result<Self> {
        if joints.is_empty() {
            bail!("spike cutter needs at least one monitored joint");
        }
        if joints.len() != thresholds.len() {
            bail!(
                "monitored joints ({}) and thresholds ({}) must pair up",
                joints.len(),
                thresholds.len()
            );
        }
        let n = joints.len();
        Ok(Self {
            joints,
            thresholds,
            corrections: vec![Correction::None; n],
            current: vec![[0.0; 3]; n],
            previous: vec![[0.0; 3]; n],
            two_back: vec![[0.0; 3]; n],
            frame_no: 0,
        })
    }

    pub fn from_config(config: &DespikeConfig) -> Result<Self> {
        let mut joints = Vec::with_capacity(config.joints.len());
        for name in &config.joints {
            match JointType::from_name(name) {
                Some(joint) => joints.push(joint),
                None => bail!("unknown joint name in despike config: {}", name),
            }
        }
        Self::new(joints, config.thresholds.clone())
    }

    pub fn monitored_joints(&self) -> &[JointType] {
        &self.joints
    }

    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// Samples fed in since construction or the last reset
    pub fn frame_no(&self) -> u64 {
        self.frame_no
    }

    /// True once at least one full update has run, i.e. despiked output exists
    pub fn is_ready(&self) -> bool {
        self.frame_no >= 3
    }

    /// Return to the unseeded state
    pub fn reset(&mut self) {
        self.frame_no = 0;
        for c in &mut self.corrections {
            *c = Correction::None;
        }
    }

    /// Feed one body snapshot. The first two calls seed the window and
    /// produce no output; from the third call on, the spike test runs and
    /// `despiked()` yields the finalized two-back snapshot.
    pub fn feed(&mut self, body: &BodyFrame) {
        match self.frame_no {
            0 => {
                self.snapshot_into_two_back(body);
                self.frame_no += 1;
            }
            1 => {
                self.snapshot_into_previous(body);
                self.frame_no += 1;
            }
            _ => self.cut_spike(body),
        }
    }

    /// The finalized despiked snapshot, one per monitored joint, delayed
    /// one tick behind the raw input. None until the window is live.
    pub fn despiked(&self) -> Option<&[[f32; 3]]> {
        if self.is_ready() {
            Some(&self.two_back)
        } else {
            None
        }
    }

    /// The despiked CSV record: ",<time>,<x>,<y>,<z>,..." in monitored-joint
    /// order, plain decimal text, no trailing terminator. None until ready.
    pub fn despiked_row(&self, relative_secs: f64) -> Option<String> {
        use std::fmt::Write as _;

        let despiked = self.despiked()?;
        let mut row = format!(",{}", relative_secs);
        for position in despiked {
            for v in position {
                let _ = write!(row, ",{}", v);
            }
        }
        Some(row)
    }

    fn snapshot_into_two_back(&mut self, body: &BodyFrame) {
        for (i, joint) in self.joints.iter().enumerate() {
            self.two_back[i] = body.position(*joint);
        }
    }

    fn snapshot_into_previous(&mut self, body: &BodyFrame) {
        for (i, joint) in self.joints.iter().enumerate() {
            self.previous[i] = body.position(*joint);
        }
    }

    fn cut_spike(&mut self, body: &BodyFrame) {
        for (i, joint) in self.joints.iter().enumerate() {
            self.current[i] = body.position(*joint);
        }
        self.frame_no += 1;

        for i in 0..self.joints.len() {
            let d = geometry::second_difference(self.current[i], self.previous[i], self.two_back[i]);
            if geometry::norm_vec(d) <= self.thresholds[i] {
                self.corrections[i] = Correction::None;
                continue;
            }

            if self.corrections[i] == Correction::Extrapolated {
                // A second consecutive spike right after an extrapolation
                // means the joint really moved to a new position: accept the
                // raw sample and stop correcting.
                self.previous[i] = self.current[i];
                self.corrections[i] = Correction::None;
                continue;
            }

            let d1 = geometry::sub(self.current[i], self.previous[i]);
            let d2 = geometry::sub(self.current[i], self.two_back[i]);
            let nd1 = geometry::norm_vec(d1);
            let nd2 = geometry::norm_vec(d2);
            let c12 = geometry::cross_norm(d1, d2);

            if nd2 < nd1 || nd2 * nd2 < 2.0 * c12 {
                // Current sits closer to (or nearly collinear with) the
                // two-back reference: the middle sample is the outlier, so
                // repair it by averaging its neighbors. Current stays raw.
                self.corrections[i] = Correction::Averaged;
                self.previous[i] = geometry::midpoint(self.two_back[i], self.current[i]);
            } else {
                // Current is the outlier: overwrite it with the
                // constant-velocity projection of the two retained samples.
                self.corrections[i] = Correction::Extrapolated;
                self.current[i] = geometry::extrapolate(self.previous[i], self.two_back[i]);
            }
        }

        // Shift the window. Repairs made above ride along: an averaged
        // previous becomes two-back, an extrapolated current becomes previous.
        for i in 0..self.joints.len() {
            self.two_back[i] = self.previous[i];
            self.previous[i] = self.current[i];
        }
    }
}
