/// A run of consecutive non-blank lines on a page, kept raw and in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<String>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines with surrounding whitespace (form feeds included) removed.
    pub fn trimmed(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.trim().to_string()).collect()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split a page into blank-line separated blocks.
///
/// Runs of blank lines collapse into one separator. Whatever is buffered when
/// the page ends is appended as the last block, so a page that ends on blank
/// lines carries one trailing empty block. A page without lines has no blocks.
pub fn segment_blocks(lines: &[String]) -> Vec<Block> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut current = Block::default();

    for line in lines {
        if is_blank(line) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.lines.push(line.clone());
    }
    blocks.push(current);

    blocks
}
