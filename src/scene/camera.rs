use glam::Vec3;

/// Viewer of the AR scene.
///
/// The camera looks down its local -Z axis. Projection comes from the
/// tracking engine's calibration, so only the position is owned here;
/// `position.z` is the forward-axis distance the wheel moves, unclamped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Camera {
    pub position: Vec3,
}
