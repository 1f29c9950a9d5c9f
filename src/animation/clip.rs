/// Metadata of one animation clip of a loaded model.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Length in seconds (time of the last keyframe over all channels)
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    /// Builds a clip whose duration is the latest keyframe time of any channel.
    pub fn from_keyframe_times<I>(name: impl Into<String>, channel_times: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let duration = channel_times.into_iter().fold(0.0_f32, f32::max);
        Self::new(name, duration)
    }
}
