/// A verse identity: chapter (sura) and verse (ayah) number, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AyahNumber {
    /// Chapter number.
    pub sura: u16,
    /// Verse number within the chapter.
    pub ayah: u16,
}

impl AyahNumber {
    pub fn new(sura: u16, ayah: u16) -> Self {
        Self { sura, ayah }
    }
}

/// Identity of a single word of the text: its verse plus the word's
/// 1-based position within that verse.
///
/// Ordering follows reading order: by sura, then ayah, then word number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The verse this word belongs to.
    pub verse: AyahNumber,
    /// Position of the word within its verse.
    pub word_number: u16,
}

impl Word {
    pub fn new(sura: u16, ayah: u16, word_number: u16) -> Self {
        Self {
            verse: AyahNumber::new(sura, ayah),
            word_number,
        }
    }

    /// Chapter number of this word's verse.
    pub fn sura(&self) -> u16 {
        self.verse.sura
    }
}
