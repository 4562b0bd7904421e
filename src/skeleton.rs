/// The 15 upper-body joints logged by the raw recorder, in CSV column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum JointType {
    Head = 0,
    Neck = 1,
    SpineShoulder = 2,
    SpineMid = 3,
    SpineBase = 4,
    ShoulderRight = 5,
    ShoulderLeft = 6,
    ElbowRight = 7,
    ElbowLeft = 8,
    WristRight = 9,
    WristLeft = 10,
    HandRight = 11,
    HandLeft = 12,
    HandTipRight = 13,
    HandTipLeft = 14,
}

impl JointType {
    pub const COUNT: usize = 15;

    pub const ALL: [JointType; JointType::COUNT] = [
        Self::Head,
        Self::Neck,
        Self::SpineShoulder,
        Self::SpineMid,
        Self::SpineBase,
        Self::ShoulderRight,
        Self::ShoulderLeft,
        Self::ElbowRight,
        Self::ElbowLeft,
        Self::WristRight,
        Self::WristLeft,
        Self::HandRight,
        Self::HandLeft,
        Self::HandTipRight,
        Self::HandTipLeft,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Head),
            1 => Some(Self::Neck),
            2 => Some(Self::SpineShoulder),
            3 => Some(Self::SpineMid),
            4 => Some(Self::SpineBase),
            5 => Some(Self::ShoulderRight),
            6 => Some(Self::ShoulderLeft),
            7 => Some(Self::ElbowRight),
            8 => Some(Self::ElbowLeft),
            9 => Some(Self::WristRight),
            10 => Some(Self::WristLeft),
            11 => Some(Self::HandRight),
            12 => Some(Self::HandLeft),
            13 => Some(Self::HandTipRight),
            14 => Some(Self::HandTipLeft),
            _ => None,
        }
    }

    /// CSV column stem, e.g. "wristRight" for the wristRightX/Y/Z/S columns
    pub fn column_stem(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::SpineShoulder => "spineShoulder",
            Self::SpineMid => "spineMid",
            Self::SpineBase => "spineBase",
            Self::ShoulderRight => "shoulderRight",
            Self::ShoulderLeft => "shoulderLeft",
            Self::ElbowRight => "elbowRight",
            Self::ElbowLeft => "elbowLeft",
            Self::WristRight => "wristRight",
            Self::WristLeft => "wristLeft",
            Self::HandRight => "handRight",
            Self::HandLeft => "handLeft",
            Self::HandTipRight => "handTipRight",
            Self::HandTipLeft => "handTipLeft",
        }
    }

    /// Config-file joint name, e.g. "wrist_right"
    pub fn config_name(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::SpineShoulder => "spine_shoulder",
            Self::SpineMid => "spine_mid",
            Self::SpineBase => "spine_base",
            Self::ShoulderRight => "shoulder_right",
            Self::ShoulderLeft => "shoulder_left",
            Self::ElbowRight => "elbow_right",
            Self::ElbowLeft => "elbow_left",
            Self::WristRight => "wrist_right",
            Self::WristLeft => "wrist_left",
            Self::HandRight => "hand_right",
            Self::HandLeft => "hand_left",
            Self::HandTipRight => "hand_tip_right",
            Self::HandTipLeft => "hand_tip_left",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|j| j.config_name() == name)
    }
}

/// Sensor tracking confidence for a single joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    NotTracked,
    Inferred,
    Tracked,
}

impl TrackingState {
    /// Integer code logged in the raw CSV "S" columns
    pub fn code(&self) -> i32 {
        match self {
            Self::NotTracked => 0,
            Self::Inferred => 1,
            Self::Tracked => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::NotTracked),
            1 => Some(Self::Inferred),
            2 => Some(Self::Tracked),
            _ => None,
        }
    }
}

/// One joint sample: sensor-space position plus tracking confidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Position (x, y, z) in sensor-space meters
    pub position: [f32; 3],
    pub state: TrackingState,
}

impl Joint {
    pub fn new(position: [f32; 3], state: TrackingState) -> Self {
        Self { position, state }
    }
}

impl Default for Joint {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            state: TrackingState::NotTracked,
        }
    }
}

/// One body's joint snapshot for a single sensor frame
#[derive(Debug, Clone)]
pub struct BodyFrame {
    /// Sensor-assigned identity; stable across frames for the same person
    pub tracking_id: u64,
    pub is_tracked: bool,
    pub joints: [Joint; JointType::COUNT],
}

impl BodyFrame {
    pub fn new(tracking_id: u64, joints: [Joint; JointType::COUNT]) -> Self {
        Self {
            tracking_id,
            is_tracked: true,
            joints,
        }
    }

    pub fn get(&self, joint: JointType) -> &Joint {
        &self.joints[joint as usize]
    }

    pub fn position(&self, joint: JointType) -> [f32; 3] {
        self.joints[joint as usize].position
    }
}

impl Default for BodyFrame {
    fn default() -> Self {
        Self {
            tracking_id: 0,
            is_tracked: false,
            joints: [Joint::default(); JointType::COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_type_count() {
        assert_eq!(JointType::COUNT, 15);
        assert_eq!(JointType::ALL.len(), JointType::COUNT);
    }

    #[test]
    fn test_joint_type_from_index() {
        assert_eq!(JointType::from_index(0), Some(JointType::Head));
        assert_eq!(JointType::from_index(14), Some(JointType::HandTipLeft));
        assert_eq!(JointType::from_index(15), None);
    }

    #[test]
    fn test_all_matches_discriminants() {
        for (i, joint) in JointType::ALL.iter().enumerate() {
            assert_eq!(*joint as usize, i);
            assert_eq!(JointType::from_index(i), Some(*joint));
        }
    }

    #[test]
    fn test_from_name_round_trip() {
        for joint in JointType::ALL {
            assert_eq!(JointType::from_name(joint.config_name()), Some(joint));
        }
        assert_eq!(JointType::from_name("ankle_left"), None);
    }

    #[test]
    fn test_tracking_state_codes() {
        assert_eq!(TrackingState::NotTracked.code(), 0);
        assert_eq!(TrackingState::Inferred.code(), 1);
        assert_eq!(TrackingState::Tracked.code(), 2);
        assert_eq!(TrackingState::from_code(2), Some(TrackingState::Tracked));
        assert_eq!(TrackingState::from_code(3), None);
    }

    #[test]
    fn test_body_frame_get() {
        let mut joints = [Joint::default(); JointType::COUNT];
        joints[JointType::WristRight as usize] =
            Joint::new([0.1, 0.2, 0.3], TrackingState::Tracked);

        let body = BodyFrame::new(7, joints);
        assert_eq!(body.tracking_id, 7);
        assert!(body.is_tracked);
        assert_eq!(body.get(JointType::WristRight).position, [0.1, 0.2, 0.3]);
        assert_eq!(body.position(JointType::Head), [0.0, 0.0, 0.0]);
    }
}
