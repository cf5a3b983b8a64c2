use std::io::{self, Write};

use pursuit_core::{Board, RenderError, Renderer};

/// Writes each board as space-separated glyph rows followed by a blank line.
pub struct TextRenderer<W> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, board: &Board) -> Result<(), RenderError> {
        writeln!(self.out, "{board}").map_err(RenderError::new)?;
        self.out.flush().map_err(RenderError::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_glyph_grid_with_trailing_blank_line() {
        let board = Board::from_layout(&["B.W", ".M."]).unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&board).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "B . W\n. M .\n\n");
    }

    #[test]
    fn rendering_is_idempotent() {
        let board = Board::from_layout(&["B.W", ".M."]).unwrap();
        let mut first = TextRenderer::new(Vec::new());
        first.render(&board).unwrap();
        let once = first.into_inner();

        let mut second = TextRenderer::new(Vec::new());
        second.render(&board).unwrap();
        second.render(&board).unwrap();
        let twice = second.into_inner();

        assert_eq!([once.clone(), once].concat(), twice);
    }
}
