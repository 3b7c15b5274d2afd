//! Splitting a raw line stream into hand blocks.
//!
//! A block is a maximal run of non-blank lines. Blank lines (empty after
//! trimming, so `\r\n` endings are tolerated) only delimit and are dropped.

/// One hand's worth of raw, non-blank lines in document order.
pub type Block = Vec<String>;

/// Groups lines into blocks separated by blank lines.
///
/// ```
/// use chipledger_engine::segment::segment_lines;
///
/// let blocks = segment_lines(["a", "b", "", "", "c"]);
/// assert_eq!(blocks, vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]]);
/// ```
pub fn segment_lines<I, S>(lines: I) -> Vec<Block>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut blocks = Vec::new();
    let mut current: Block = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line.trim_end_matches(['\r', '\n']).to_string());
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Segments an entire text buffer (one or more concatenated log files).
pub fn segment_text(text: &str) -> Vec<Block> {
    segment_lines(text.lines())
}

/// Drops lines that start with `prefix` (pocket-card lines such as `Dealt to ...`).
pub fn strip_prefixed_lines(block: &[String], prefix: &str) -> Block {
    block
        .iter()
        .filter(|line| !line.starts_with(prefix))
        .cloned()
        .collect()
}
