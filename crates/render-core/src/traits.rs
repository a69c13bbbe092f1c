use crate::error::RenderError;
use crate::instruction::DrawInstruction;
use tally_types::Size;

/// An output backend that consumes positioned draw instructions.
///
/// A surface owns its destination for the lifetime of one render. Nothing
/// about font or cursor state lives here: each instruction is self-describing.
pub trait PageSurface {
    /// Page dimensions in millimetres.
    fn page_size(&self) -> Size;

    fn draw(&mut self, instruction: DrawInstruction) -> Result<(), RenderError>;

    /// Writes the finished document to its destination. A surface can only
    /// be finished once.
    fn finish(&mut self) -> Result<(), RenderError>;
}

impl<S: PageSurface + ?Sized> PageSurface for &mut S {
    fn page_size(&self) -> Size {
        (**self).page_size()
    }

    fn draw(&mut self, instruction: DrawInstruction) -> Result<(), RenderError> {
        (**self).draw(instruction)
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        (**self).finish()
    }
}
