// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use chatmark_engine::RosterEntry;
use chatmark_engine::limits::MESSAGE_LENGTH_CEILING;

#[allow(dead_code)]
pub fn generate_chat_message(lines: usize) -> String {
    let base = [
        "# Standup",
        "hey @ann, **build** is *green* again ~~finally~~",
        "> did you see __the __nested__ one__?",
        "||spoiler|| and `inline code` with @everyone",
        "```rust\nfn main() {}\n```",
    ];
    base.iter().cycle().take(lines).cloned().collect::<Vec<_>>().join("\n")
}

/// `depth` levels of alternating bold/underline around a word.
#[allow(dead_code)]
pub fn generate_nested_message(depth: usize) -> String {
    let delims = ["**", "__"];
    let mut content = String::from("core");
    for level in 0..depth {
        let d = delims[level % 2];
        content = format!("{d}x {content} y{d}");
    }
    content
}

/// Unmatched delimiters filling the message-length ceiling.
#[allow(dead_code)]
pub fn generate_pathological_message(unit: &str) -> String {
    unit.repeat(MESSAGE_LENGTH_CEILING / unit.len())
}

#[allow(dead_code)]
pub fn generate_roster(size: usize) -> Vec<RosterEntry> {
    (0..size)
        .map(|i| RosterEntry::new(format!("id-{i}"), format!("Member {i}"), format!("member{i}")))
        .collect()
}
