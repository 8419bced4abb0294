/// Heading block type: 1 to 3 `#` characters, a space, then inline content.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 3;

    /// Parses a heading line into `(level, rest)`.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|b| *b == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let rest = line[hashes..].strip_prefix(' ')?;
        let level = u8::try_from(hashes).ok()?;
        Some((level, rest))
    }

    /// The opening marker for `level`, including the trailing space.
    pub fn marker(level: u8) -> String {
        let mut s = "#".repeat(usize::from(level));
        s.push(' ');
        s
    }
}
