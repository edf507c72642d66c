use image::DynamicImage;
use lopdf::{content::Operation, Object, StringFormat};
use std::{collections::BTreeMap, io::BufWriter, mem};
use time::OffsetDateTime;
use unicode_normalization::UnicodeNormalization as _;

use crate::{
    error::ContextError,
    font_metrics::StandardFont,
    style::Color,
    surface::{DocumentMetadata, DrawingSurface, Rectangle, TextStyle},
};

/// One layer of PDF data, which is turned into a content stream of its page when the document is written.
#[derive(Debug, Clone)]
pub struct PdfLayer {
    /// Name of the layer, only used to make the debug output readable.
    pub(crate) name: String,
    /// The content stream operations of this layer.
    pub(super) operations: Vec<Operation>,
}

impl PdfLayer {
    /// Encodes the operations of the layer, isolated in their own graphics state, into an uncompressed stream.
    fn into_stream(self) -> Result<lopdf::Stream, ContextError> {
        let mut operations = Vec::with_capacity(self.operations.len() + 2);
        operations.push(Operation::new("q", vec![]));
        operations.extend(self.operations);
        operations.push(Operation::new("Q", vec![]));

        let stream_content = lopdf::content::Content { operations }
            .encode()
            .map_err(|error| {
                ContextError::with_error(
                    format!("Failed to encode the content of the layer {:?}", self.name),
                    &error,
                )
            })?;

        Ok(lopdf::Stream::new(lopdf::Dictionary::new(), stream_content).with_compression(false))
    }
}

/// The low-level image representation for a PDF document: 8-bit RGB samples, together with
/// the 8-bit alpha samples which become the soft mask of the image if it is not fully opaque.
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    /// Should the image be interpolated when scaled?
    pub interpolate: bool,
    /// The RGB samples of the image, row by row.
    pub image_data: Vec<u8>,
    /// The alpha samples of the image, `None` if the image is opaque.
    pub alpha_data: Option<Vec<u8>>,
}

impl ImageXObject {
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba_image = image.to_rgba8();
        let alpha_data: Vec<u8> = rgba_image.pixels().map(|pixel| pixel.0[3]).collect();
        let is_opaque = alpha_data.iter().all(|alpha| *alpha == u8::MAX);

        ImageXObject {
            width: image.width(),
            height: image.height(),
            interpolate: true,
            image_data: image.to_rgb8().into_raw(),
            alpha_data: (!is_opaque).then_some(alpha_data),
        }
    }

    /// Inserts the image (and its soft mask, if any) into the document, returning the object ID of the image.
    fn insert_into_document(&self, inner_document: &mut lopdf::Document) -> lopdf::ObjectId {
        use lopdf::Object::*;

        let image_dictionary = |color_space: &str| {
            lopdf::Dictionary::from_iter(vec![
                ("Type", Name("XObject".into())),
                ("Subtype", Name("Image".into())),
                ("Width", Integer(i64::from(self.width))),
                ("Height", Integer(i64::from(self.height))),
                ("ColorSpace", Name(color_space.into())),
                ("BitsPerComponent", Integer(8)),
                ("Interpolate", Boolean(self.interpolate)),
            ])
        };

        let mut dictionary = image_dictionary("DeviceRGB");
        if let Some(alpha_data) = &self.alpha_data {
            let soft_mask = lopdf::Stream::new(image_dictionary("DeviceGray"), alpha_data.clone());
            let soft_mask_id = inner_document.add_object(soft_mask);
            dictionary.set("SMask", Reference(soft_mask_id));
        }

        inner_document.add_object(lopdf::Stream::new(dictionary, self.image_data.clone()))
    }
}

/// Named reference to an `XObject`, unique within its page.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct XObjectReference(String);

impl XObjectReference {
    /// Creates a new reference for an `XObject` from a number.
    pub fn new(index: usize) -> Self {
        Self(format!("X{index}"))
    }
}

/// The association between the `XObject` names of a page and the images themselves.
#[derive(Default, Debug, Clone)]
pub struct XObjectMap(BTreeMap<String, ImageXObject>);

impl XObjectMap {
    /// Registers the image, returning the name it can be drawn with.
    fn add_image(&mut self, image: ImageXObject) -> XObjectReference {
        let reference = XObjectReference::new(self.0.len());
        self.0.insert(reference.0.clone(), image);

        reference
    }

    /// Inserts the `XObject`s into the document, simultaneously constructing a PDF dictionary of them.
    pub fn into_with_document(&self, document: &mut lopdf::Document) -> lopdf::Dictionary {
        self.0
            .iter()
            .map(|(name, image)| {
                let object_reference = image.insert_into_document(document);
                (name.clone(), lopdf::Object::Reference(object_reference))
            })
            .collect()
    }
}

/// A clickable area of a page which opens an URI, in PDF coordinates.
#[derive(Debug, Clone)]
pub struct LinkAnnotation {
    /// The lower-left and upper-right corners of the area.
    pub rectangle: [f32; 4],
    pub uri: String,
}

impl LinkAnnotation {
    fn to_dictionary(&self) -> lopdf::Dictionary {
        use lopdf::Object::*;

        lopdf::Dictionary::from_iter(vec![
            ("Type", Name("Annot".into())),
            ("Subtype", Name("Link".into())),
            (
                "Rect",
                Array(self.rectangle.iter().copied().map(Real).collect()),
            ),
            ("Border", Array(vec![Integer(0), Integer(0), Integer(0)])),
            (
                "A",
                Dictionary(lopdf::Dictionary::from_iter(vec![
                    ("S", Name("URI".into())),
                    (
                        "URI",
                        String(self.uri.clone().into_bytes(), StringFormat::Literal),
                    ),
                ])),
            ),
        ])
    }
}

/// The representation of a PDF page. Utility functions are implemented for this struct
/// so that its content can be inserted into the underlying PDF document.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// The index of the page in the document, starting from one.
    pub(crate) number: usize,
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
    /// Page layers.
    pub layers: Vec<PdfLayer>,
    /// Images used in this page.
    pub(crate) xobjects: XObjectMap,
    /// Links of this page.
    pub(crate) annotations: Vec<LinkAnnotation>,
}

/// This struct represents the actual PDF document on a high-level. It is an interface to the actual underlying
/// `lopdf::document` with the addition of the PDF pages, the document ID and the fonts used in the document.
///
/// Coordinates given to the `*_in_page` methods are in points, with the origin at the bottom-left corner
/// of the page as in the PDF specification. Through its `DrawingSurface` implementation the document is
/// instead addressed from the top-left corner, which is what the layout engine works with.
pub struct PdfDocument {
    /// The association between the font resource names, the object they are represented by and the font itself.
    fonts: BTreeMap<String, (lopdf::ObjectId, StandardFont)>,
    /// The underlying PDF document: this is a low-level interface and shouldn't be directly interacted with
    /// unless strictly necessary, anyway this is why it is exposed to the user.
    pub inner_document: lopdf::Document,
    /// The title, author and identifier of the document.
    pub metadata: DocumentMetadata,
    /// The pages of the PDF document.
    pub(crate) pages: Vec<PdfPage>,
}

impl Default for PdfDocument {
    fn default() -> Self {
        PdfDocument::new(DocumentMetadata::default())
    }
}

impl PdfDocument {
    /// Create a new `PdfDocument` by defaulting the underlying PDF document to version 1.5
    /// of the PDF specification.
    pub fn new(metadata: DocumentMetadata) -> Self {
        PdfDocument {
            fonts: BTreeMap::default(),
            inner_document: lopdf::Document::with_version("1.5"),
            metadata,
            pages: Vec::new(),
        }
    }

    /// Adds a page of given width and height in points with an empty layer for contents to be added to.
    /// The function returns the index of the page and of the layer in the page, these are to be passed
    /// to the other functions when calling them, such as to `write_text_to_layer_in_page`.
    pub fn add_page_with_layer(&mut self, page_width: f32, page_height: f32) -> (usize, usize) {
        let pdf_page = PdfPage {
            number: self.pages.len() + 1,
            width: page_width,
            height: page_height,
            layers: vec![PdfLayer {
                name: "Layer0".into(),
                operations: Vec::new(),
            }],
            xobjects: XObjectMap::default(),
            annotations: Vec::new(),
        };
        self.pages.push(pdf_page);

        let page_index = self.pages.len() - 1;
        let layer_index_in_page = 0;
        (page_index, layer_index_in_page)
    }

    /// Returns the resource name of the given standard font, registering the font on its first use.
    fn font_resource_name(&mut self, font: StandardFont) -> String {
        if let Some((face_identifier, _)) = self
            .fonts
            .iter()
            .find(|(_, (_, registered_font))| *registered_font == font)
        {
            return face_identifier.clone();
        }

        let face_identifier = format!("F{}", self.fonts.len());
        let font_object_id = self.inner_document.new_object_id();
        self.fonts
            .insert(face_identifier.clone(), (font_object_id, font));

        face_identifier
    }

    /// Writes the text in the specified font and color, with its baseline starting at the caret position.
    /// The text is normalized in the NFC form and encoded for the standard fonts, the characters which
    /// cannot be encoded are replaced by a question mark.
    #[allow(clippy::too_many_arguments)]
    pub fn write_text_to_layer_in_page(
        &mut self,
        page_index: usize,
        layer_index: usize,
        color: [f32; 3],
        text: &str,
        font: StandardFont,
        font_size: f32,
        caret_position: [f32; 2],
    ) -> Result<(), ContextError> {
        let face_identifier = self.font_resource_name(font);
        let [x, y] = caret_position;
        let [r, g, b] = color;

        self.add_operations_to_layer_in_page(
            layer_index,
            page_index,
            vec![
                Operation::new("BT", vec![]), // Begin text section
                Operation::new("Tf", vec![Object::Name(face_identifier.into_bytes()), font_size.into()]),
                Operation::new("Td", vec![x.into(), y.into()]),
                Operation::new("rg", vec![r.into(), g.into(), b.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(encode_win_ansi(text), StringFormat::Hexadecimal)],
                ),
                Operation::new("ET", vec![]),
            ],
        )
    }

    /// Strokes a straight line between the two points.
    pub fn draw_line_in_layer_in_page(
        &mut self,
        page_index: usize,
        layer_index: usize,
        color: [f32; 3],
        line_width: f32,
        from: [f32; 2],
        to: [f32; 2],
    ) -> Result<(), ContextError> {
        let [r, g, b] = color;
        self.add_operations_to_layer_in_page(
            layer_index,
            page_index,
            vec![
                Operation::new("q", vec![]),
                Operation::new("w", vec![line_width.into()]),
                Operation::new("RG", vec![r.into(), g.into(), b.into()]),
                Operation::new("m", vec![from[0].into(), from[1].into()]),
                Operation::new("l", vec![to[0].into(), to[1].into()]),
                Operation::new("S", vec![]),
                Operation::new("Q", vec![]),
            ],
        )
    }

    /// Fills the rectangle given by its lower-left corner, width and height.
    pub fn fill_rectangle_in_layer_in_page(
        &mut self,
        page_index: usize,
        layer_index: usize,
        color: [f32; 3],
        rectangle: [f32; 4],
    ) -> Result<(), ContextError> {
        let [r, g, b] = color;
        self.add_operations_to_layer_in_page(
            layer_index,
            page_index,
            vec![
                Operation::new("q", vec![]),
                Operation::new("rg", vec![r.into(), g.into(), b.into()]),
                Operation::new("re", rectangle.iter().copied().map(Object::Real).collect()),
                Operation::new("f", vec![]),
                Operation::new("Q", vec![]),
            ],
        )
    }

    /// Draws the image scaled into the rectangle given by its lower-left corner, width and height.
    pub fn add_image_to_layer_in_page(
        &mut self,
        page_index: usize,
        layer_index: usize,
        image: ImageXObject,
        rectangle: [f32; 4],
    ) -> Result<(), ContextError> {
        let pdf_page = self.get_mut_page(page_index)?;
        let XObjectReference(image_name) = pdf_page.xobjects.add_image(image);
        let [x, y, width, height] = rectangle;

        self.add_operations_to_layer_in_page(
            layer_index,
            page_index,
            vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width.into(),
                        0.0f32.into(),
                        0.0f32.into(),
                        height.into(),
                        x.into(),
                        y.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(image_name.into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        )
    }

    /// Adds a link annotation to the page.
    pub fn add_link_to_page(
        &mut self,
        page_index: usize,
        annotation: LinkAnnotation,
    ) -> Result<(), ContextError> {
        self.get_mut_page(page_index)?.annotations.push(annotation);
        Ok(())
    }

    /// Write the operations so far specified to the PDF file and finalize it.
    ///
    /// The dates are fixed to the UNIX epoch and the identifiers come from the metadata, so that
    /// rendering the same inputs twice yields the very same bytes.
    pub fn write_all(&mut self, instance_id: String) -> Result<(), ContextError> {
        use lopdf::Object::*;
        use lopdf::StringFormat::*;

        let epoch = to_pdf_timestamp_format(&OffsetDateTime::UNIX_EPOCH);
        let document_info = lopdf::Dictionary::from_iter(vec![
            ("Trapped", "False".into()),
            ("CreationDate", String(epoch.clone().into_bytes(), Literal)),
            ("ModDate", String(epoch.into_bytes(), Literal)),
            ("Title", text_string(&self.metadata.title)),
            ("Author", text_string(&self.metadata.author)),
            ("Creator", text_string(env!("CARGO_PKG_NAME"))),
            (
                "Producer",
                text_string(&format!(
                    "{} {}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                )),
            ),
            ("Subject", text_string("Resume")),
        ]);
        let document_info_id = self.inner_document.add_object(Dictionary(document_info));

        // Construct the catalog, required by the PDF specification
        let pages_id = self.inner_document.new_object_id();
        let catalog = lopdf::Dictionary::from_iter(vec![
            ("Type", "Catalog".into()),
            ("PageLayout", "OneColumn".into()),
            ("PageMode", "UseNone".into()),
            ("Pages", Reference(pages_id)),
        ]);
        let catalog_id = self.inner_document.add_object(catalog);

        self.inner_document
            .trailer
            .set("Root", Reference(catalog_id));
        self.inner_document
            .trailer
            .set("Info", Reference(document_info_id));
        self.inner_document.trailer.set(
            "ID",
            Array(vec![
                String(self.metadata.identifier.clone().into_bytes(), Literal),
                String(instance_id.into_bytes(), Literal),
            ]),
        );

        // Insert the used fonts into the PDF document, all the pages share the same font dictionary
        let fonts_dictionary = self.insert_fonts_into_document();
        let fonts_dictionary_id = self.inner_document.add_object(fonts_dictionary);

        let mut page_ids = Vec::<lopdf::Object>::new();
        for page in mem::take(&mut self.pages) {
            let media_box: Vec<lopdf::Object> =
                vec![0.into(), 0.into(), page.width.into(), page.height.into()];
            let mut page_dictionary = lopdf::Dictionary::from_iter(vec![
                ("Type", "Page".into()),
                ("Rotate", Integer(0)),
                ("MediaBox", media_box.clone().into()),
                ("CropBox", media_box.into()),
                ("Parent", Reference(pages_id)),
            ]);

            let mut resource_dictionary = lopdf::Dictionary::new();
            resource_dictionary.set("Font", Reference(fonts_dictionary_id));
            let xobjects_dictionary = page.xobjects.into_with_document(&mut self.inner_document);
            if !xobjects_dictionary.is_empty() {
                resource_dictionary.set("XObject", Dictionary(xobjects_dictionary));
            }
            let resources_page_id = self
                .inner_document
                .add_object(Dictionary(resource_dictionary));
            page_dictionary.set("Resources", Reference(resources_page_id));

            let annotations: Vec<lopdf::Object> = page
                .annotations
                .iter()
                .map(|annotation| Dictionary(annotation.to_dictionary()))
                .collect();
            page_dictionary.set("Annots", Array(annotations));

            // Merge all streams of the individual layers into one unified stream, then
            // insert it into the PDF document as a whole by setting the "Contents" field
            let mut merged_layer_streams = Vec::<u8>::new();
            for layer in page.layers {
                let mut layer_stream = layer.into_stream()?;
                merged_layer_streams.append(&mut layer_stream.content);
            }
            let merged_layer_stream =
                lopdf::Stream::new(lopdf::Dictionary::new(), merged_layer_streams)
                    .with_compression(false);
            let page_content_id = self.inner_document.add_object(merged_layer_stream);
            page_dictionary.set("Contents", Reference(page_content_id));

            log::trace!("Writing the page number {} of the document", page.number);
            let page_id = self.inner_document.add_object(page_dictionary);
            page_ids.push(Reference(page_id))
        }

        let pages = lopdf::Dictionary::from_iter(vec![
            ("Type", "Pages".into()),
            ("Count", Integer(page_ids.len() as i64)),
            ("Kids", Array(page_ids)),
        ]);
        self.inner_document
            .objects
            .insert(pages_id, Dictionary(pages));

        Ok(())
    }

    /// Optimize the PDF document (only superficially), the images being the only compressed streams.
    pub fn optimize(&mut self) {
        self.inner_document.prune_objects();
        self.inner_document.delete_zero_length_streams();
        self.inner_document.renumber_objects();
        self.inner_document.compress();
    }

    /// Save the `PdfDocument` to bytes in order for it to be written to a file or further processed.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, ContextError> {
        let mut pdf_document_bytes = Vec::new();
        let mut writer = BufWriter::new(&mut pdf_document_bytes);
        self.inner_document.save_to(&mut writer).map_err(|error| {
            ContextError::with_error("Error while saving the PDF document to bytes", &error)
        })?;
        mem::drop(writer);

        Ok(pdf_document_bytes)
    }

    /// Converts the fonts into a dictionary and inserts them into the document.
    fn insert_fonts_into_document(&mut self) -> lopdf::Dictionary {
        use lopdf::Object::*;

        let mut font_dictionary = lopdf::Dictionary::new();
        for (face_identifier, (font_object_id, font)) in self.fonts.iter() {
            let standard_font_dictionary = lopdf::Dictionary::from_iter(vec![
                ("Type", Name("Font".into())),
                ("Subtype", Name("Type1".into())),
                ("BaseFont", Name(font.base_font_name().into())),
                ("Encoding", Name("WinAnsiEncoding".into())),
            ]);
            self.inner_document
                .objects
                .insert(*font_object_id, Dictionary(standard_font_dictionary));
            font_dictionary.set(face_identifier.clone(), Reference(*font_object_id));
        }

        font_dictionary
    }

    /// This function is responsible for adding the given operations to the specified layer and page.
    fn add_operations_to_layer_in_page(
        &mut self,
        layer_index: usize,
        page_index: usize,
        operations: Vec<Operation>,
    ) -> Result<(), ContextError> {
        let pdf_layer_reference = self.get_mut_layer_in_page(layer_index, page_index)?;
        pdf_layer_reference.operations.extend(operations);

        Ok(())
    }

    fn get_mut_page(&mut self, page_index: usize) -> Result<&mut PdfPage, ContextError> {
        self.pages
            .get_mut(page_index)
            .ok_or(ContextError::with_context(format!(
                "Failed to find the page with index {}",
                page_index
            )))
    }

    // Retrieve the specified layer in the given page via the respective indices.
    fn get_mut_layer_in_page(
        &mut self,
        layer_index: usize,
        page_index: usize,
    ) -> Result<&mut PdfLayer, ContextError> {
        let pdf_page = self.get_mut_page(page_index)?;
        let pdf_layer = pdf_page
            .layers
            .get_mut(layer_index)
            .ok_or(ContextError::with_context(format!(
                "Failed to find the layer with index {}",
                layer_index
            )))?;

        Ok(pdf_layer)
    }

    /// The index and height of the page the drawing calls of the `DrawingSurface` target.
    fn current_page(&self) -> Result<(usize, f32), ContextError> {
        self.pages
            .last()
            .map(|page| (self.pages.len() - 1, page.height))
            .ok_or_else(ContextError::no_current_page)
    }
}

impl DrawingSurface for PdfDocument {
    type Output = Vec<u8>;

    fn begin_document(&mut self, metadata: &DocumentMetadata) -> Result<(), ContextError> {
        self.metadata = metadata.clone();
        Ok(())
    }

    fn add_page(&mut self, page_width: f32, page_height: f32) -> Result<(), ContextError> {
        self.add_page_with_layer(page_width, page_height);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: [f32; 2],
        text_style: &TextStyle,
    ) -> Result<(), ContextError> {
        let (page_index, page_height) = self.current_page()?;
        self.write_text_to_layer_in_page(
            page_index,
            0,
            text_style.color.components(),
            text,
            text_style.font,
            text_style.font_size,
            [position[0], page_height - position[1]],
        )
    }

    fn draw_line(
        &mut self,
        from: [f32; 2],
        to: [f32; 2],
        color: Color,
        line_width: f32,
    ) -> Result<(), ContextError> {
        let (page_index, page_height) = self.current_page()?;
        self.draw_line_in_layer_in_page(
            page_index,
            0,
            color.components(),
            line_width,
            [from[0], page_height - from[1]],
            [to[0], page_height - to[1]],
        )
    }

    fn fill_rectangle(&mut self, rectangle: Rectangle, color: Color) -> Result<(), ContextError> {
        let (page_index, page_height) = self.current_page()?;
        self.fill_rectangle_in_layer_in_page(
            page_index,
            0,
            color.components(),
            to_pdf_rectangle(rectangle, page_height),
        )
    }

    fn draw_image(
        &mut self,
        image: &DynamicImage,
        rectangle: Rectangle,
    ) -> Result<(), ContextError> {
        let (page_index, page_height) = self.current_page()?;
        self.add_image_to_layer_in_page(
            page_index,
            0,
            ImageXObject::from_image(image),
            to_pdf_rectangle(rectangle, page_height),
        )
    }

    fn add_link(&mut self, rectangle: Rectangle, uri: &str) -> Result<(), ContextError> {
        let (page_index, page_height) = self.current_page()?;
        let [x, y, width, height] = to_pdf_rectangle(rectangle, page_height);
        self.add_link_to_page(
            page_index,
            LinkAnnotation {
                rectangle: [x, y, x + width, y + height],
                uri: uri.to_string(),
            },
        )
    }

    fn finish(mut self) -> Result<Vec<u8>, ContextError> {
        let instance_id = self.metadata.identifier.clone();
        self.write_all(instance_id)?;
        self.optimize();
        self.save_to_bytes()
    }
}

/// Converts a rectangle given from its top-left corner into the lower-left corner, width and height
/// expected by the PDF operators.
fn to_pdf_rectangle(rectangle: Rectangle, page_height: f32) -> [f32; 4] {
    [
        rectangle.x,
        page_height - rectangle.y - rectangle.height,
        rectangle.width,
        rectangle.height,
    ]
}

/// Encodes a text string for the `Info` dictionary: plain ASCII is kept literal, anything else is
/// written in UTF-16BE with its byte order mark.
fn text_string(text: &str) -> lopdf::Object {
    if text.is_ascii() {
        return lopdf::Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xfe, 0xff];
    bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));

    lopdf::Object::String(bytes, StringFormat::Hexadecimal)
}

/// Encodes the text in `WinAnsiEncoding`, the encoding the standard fonts are declared with.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.nfc()
        .map(|character| match character {
            ' '..='~' | '\u{a0}'..='\u{ff}' => character as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8a,
            '‹' => 0x8b,
            'Œ' => 0x8c,
            'Ž' => 0x8e,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9a,
            '›' => 0x9b,
            'œ' => 0x9c,
            'ž' => 0x9e,
            'Ÿ' => 0x9f,
            _ => {
                log::warn!(
                    "Unable to encode the character {:?} with the standard fonts",
                    character
                );
                b'?'
            }
        })
        .collect()
}

/// Formats the given time so that it matches what the PDF specification expects.
/// An example of it is the following: D:20170505150224+02'00'.
fn to_pdf_timestamp_format(date: &OffsetDateTime) -> String {
    let offset = date.offset();
    let offset_sign = if offset.is_negative() { '-' } else { '+' };
    format!(
        "D:{:04}{:02}{:02}{:02}{:02}{:02}{offset_sign}{:02}'{:02}'",
        date.year(),
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
        date.second(),
        offset.whole_hours().abs(),
        offset.minutes_past_hour().abs(),
    )
}
