use std::fmt;

/// One of the three fixed image slots on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadSlot {
    One,
    Two,
    Three,
}

impl UploadSlot {
    pub fn number(self) -> u8 {
        match self {
            UploadSlot::One => 1,
            UploadSlot::Two => 2,
            UploadSlot::Three => 3,
        }
    }

    /// Name of the file that backs this slot in the upload directory.
    pub fn file_name(self) -> &'static str {
        match self {
            UploadSlot::One => "file_001.png",
            UploadSlot::Two => "file_002.png",
            UploadSlot::Three => "file_003.png",
        }
    }
}

impl fmt::Display for UploadSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.number())
    }
}
