/// Memoised search for closing delimiters within one line.
///
/// The parser asks "where is the next `d` at or after `from`?" at many cursor
/// positions. Without a memo, a line of n unmatched `*` rescans the tail n
/// times. With it, each delimiter's occurrences are scanned once per line,
/// because queries for the same delimiter arrive at non-decreasing offsets.
#[derive(Debug)]
pub struct Closers<'a> {
    s: &'a str,
    memo: Vec<(&'static str, Memo)>,
}

#[derive(Debug, Clone, Copy)]
struct Memo {
    /// Offset the cached search started from.
    from: usize,
    /// First occurrence at or after `from`.
    found: Option<usize>,
}

impl Memo {
    fn answers(self, from: usize) -> Option<Option<usize>> {
        if from < self.from {
            return None;
        }
        match self.found {
            Some(at) if from <= at => Some(Some(at)),
            Some(_) => None,
            None => Some(None),
        }
    }
}

impl<'a> Closers<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, memo: vec![] }
    }

    /// Byte offset of the first `delim` starting at or after `from`.
    pub fn find(&mut self, delim: &'static str, from: usize) -> Option<usize> {
        let slot = self.memo.iter().position(|(d, _)| *d == delim);
        if let Some(answer) = slot.and_then(|i| self.memo[i].1.answers(from)) {
            return answer;
        }

        let found = self
            .s
            .get(from..)
            .and_then(|tail| tail.find(delim))
            .map(|off| from + off);
        let memo = Memo { from, found };
        match slot {
            Some(i) => self.memo[i].1 = memo,
            None => self.memo.push((delim, memo)),
        }
        found
    }
}
