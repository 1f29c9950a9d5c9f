use std::sync::Arc;

/// Audio container formats accepted for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Ogg,
    Flac,
}

impl AudioFormat {
    /// Identifies the container from its leading bytes.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some(Self::Wav),
            [b'O', b'g', b'g', b'S', ..] => Some(Self::Ogg),
            [b'f', b'L', b'a', b'C', ..] => Some(Self::Flac),
            [b'I', b'D', b'3', ..] => Some(Self::Mp3),
            // MPEG audio frame sync (11 set bits)
            [0xff, second, ..] if second & 0xe0 == 0xe0 => Some(Self::Mp3),
            _ => None,
        }
    }
}

/// Narration sound as loaded from disk.
///
/// Decoding and spatialization happen in the [`AudioOutput`](crate::audio::AudioOutput)
/// implementation; the buffer only carries the encoded bytes.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    pub source: String,
    pub format: AudioFormat,
    pub bytes: Arc<[u8]>,
}

impl AudioBuffer {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
