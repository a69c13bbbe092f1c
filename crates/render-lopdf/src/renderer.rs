use crate::helpers::{FONT_STYLES, PageContext, font_resource_name};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use std::io::Write;
use std::path::Path;
use tally_render_core::utils::{BASE_FONT_FAMILY, get_styled_font_name};
use tally_render_core::{DrawInstruction, PageSurface, RenderError};
use tally_types::{Rect, Size, mm_to_pt};

const PDF_VERSION: &str = "1.7";
const PRODUCER: &str = concat!("tally ", env!("CARGO_PKG_VERSION"));

/// A single-page PDF surface that writes the finished document to `W`.
///
/// Draw instructions are converted to content-stream operations as they
/// arrive. Nothing is written to the destination until `finish`.
pub struct LopdfSurface<W: Write> {
    writer: W,
    document: Document,
    page: Option<PageContext>,
    page_size: Size,
    xobjects: Dictionary,
}

impl<W: Write> LopdfSurface<W> {
    /// An A4 surface.
    pub fn new(writer: W) -> Self {
        Self::with_page_size(writer, Size::A4)
    }

    pub fn with_page_size(writer: W, page_size: Size) -> Self {
        Self {
            writer,
            document: Document::with_version(PDF_VERSION),
            page: Some(PageContext::new(page_size.height)),
            page_size,
            xobjects: Dictionary::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.page.is_none()
    }

    /// Returns the destination, e.g. to read back an in-memory buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn page_mut(&mut self) -> Result<&mut PageContext, RenderError> {
        self.page.as_mut().ok_or(RenderError::Finished)
    }

    /// Decodes the image at `path` and registers it as an XObject,
    /// returning its resource name.
    fn embed_image(&mut self, path: &Path) -> Result<String, RenderError> {
        let image = image::open(path)
            .map_err(|e| RenderError::Image {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
            .to_rgb8();
        let (width, height) = image.dimensions();
        log::debug!("Embedding {}x{} image from '{}'", width, height, path.display());

        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
            },
            image.into_raw(),
        );
        let id = self.document.add_object(stream);
        let name = format!("Im{}", self.xobjects.len() + 1);
        self.xobjects.set(name.as_bytes(), Object::Reference(id));
        Ok(name)
    }

    fn draw_image(&mut self, rect: &Rect, path: &Path) -> Result<(), RenderError> {
        self.page_mut()?;
        let name = self.embed_image(path)?;
        self.page_mut()?.draw_image(rect, &name);
        Ok(())
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        for style in FONT_STYLES {
            let font = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => get_styled_font_name(BASE_FONT_FAMILY, style),
                "Encoding" => "WinAnsiEncoding",
            };
            fonts.set(font_resource_name(style), Object::Dictionary(font));
        }
        fonts
    }
}

impl<W: Write> PageSurface for LopdfSurface<W> {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn draw(&mut self, instruction: DrawInstruction) -> Result<(), RenderError> {
        match instruction {
            DrawInstruction::Cell(cell) => self.page_mut()?.draw_cell(&cell),
            DrawInstruction::Line { from, to, width } => {
                self.page_mut()?.draw_line(from, to, width)
            }
            DrawInstruction::Fill { rect, color } => self.page_mut()?.fill_rect(&rect, color),
            DrawInstruction::Image { rect, path } => self.draw_image(&rect, &path)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        let page = self.page.take().ok_or(RenderError::Finished)?;
        let content = page.finish();

        let resources_id = self.document.add_object(dictionary! {
            "Font" => Self::font_dictionary(),
            "XObject" => std::mem::take(&mut self.xobjects),
        });
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let pages_id = self.document.new_object_id();
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.0_f32.into(),
                0.0_f32.into(),
                mm_to_pt(self.page_size.width).into(),
                mm_to_pt(self.page_size.height).into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        self.document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1_i64,
            }),
        );
        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = self.document.add_object(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
        });
        self.document.trailer.set("Root", catalog_id);
        self.document.trailer.set("Info", info_id);

        self.document.compress();
        self.document.save_to(&mut self.writer)?;
        self.writer.flush()?;
        log::debug!("PDF document written");
        Ok(())
    }
}
