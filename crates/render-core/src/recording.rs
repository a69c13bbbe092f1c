use crate::error::RenderError;
use crate::instruction::DrawInstruction;
use crate::traits::PageSurface;
use tally_types::Size;

/// A surface that keeps every instruction it receives, in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    page_size: Size,
    instructions: Vec<DrawInstruction>,
    finished: bool,
}

impl RecordingSurface {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            instructions: Vec::new(),
            finished: false,
        }
    }

    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<DrawInstruction> {
        self.instructions
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text of every cell, in draw order.
    pub fn cell_texts(&self) -> Vec<&str> {
        self.instructions
            .iter()
            .filter_map(DrawInstruction::as_cell)
            .map(|cell| cell.text.as_str())
            .collect()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Size::A4)
    }
}

impl PageSurface for RecordingSurface {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn draw(&mut self, instruction: DrawInstruction) -> Result<(), RenderError> {
        if self.finished {
            return Err(RenderError::Finished);
        }
        self.instructions.push(instruction);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        if self.finished {
            return Err(RenderError::Finished);
        }
        self.finished = true;
        Ok(())
    }
}
