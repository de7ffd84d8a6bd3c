use std::io::{self, stdout, Write};

/// Pre-rendered terminal lines, drawn from the top-left corner.
pub struct Canvas {
    lines: Vec<String>,
}

impl Canvas {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn display(&self) -> io::Result<()> {
        let mut out = stdout().lock();
        let clear = termion::clear::All;
        write!(out, "{clear}")?;
        for (index, line) in self.lines.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        writeln!(out)?;
        out.flush()
    }
}
