//! Layout parsing into typed pages and zones.

use std::{fs, path::Path, str};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{Layout, LayoutError, Page, Zone, prepare_source};

/// Element name of a page record.
const PAGE_TAG: &[u8] = b"page";

/// Element name of a text zone record.
const ZONE_TAG: &[u8] = b"text";

/// Reads and parses a layout file from disk.
pub fn load_layout(path: &Path) -> Result<Layout, LayoutError> {
    let bytes = fs::read(path).map_err(|source| LayoutError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded layout {} ({} bytes)", path.display(), bytes.len());
    parse_layout(&bytes)
}

/// Parses layout bytes into pages and zones.
///
/// Pages are the `<page>` children of the root element, zones the `<text>`
/// children of a page. Anything else in the document is ignored. The whole
/// document must be well-formed; on failure no partial layout is returned.
///
/// Bytes are always read as UTF-8 and the XML declaration's `encoding` is not
/// consulted. A Latin-1 layout loads only while it stays within ASCII; any
/// other byte fails with [`LayoutError::Utf8`].
pub fn parse_layout(bytes: &[u8]) -> Result<Layout, LayoutError> {
    let raw = str::from_utf8(bytes)?;
    let source = prepare_source(raw);
    let mut reader = Reader::from_str(&source);
    let mut builder = LayoutBuilder::default();

    loop {
        let position = reader.buffer_position();
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(LayoutError::malformed(reader.buffer_position(), &e)),
        };

        match event {
            Event::Start(start) => builder.open(&start, position)?,
            Event::Empty(start) => {
                builder.open(&start, position)?;
                builder.close(position)?;
            }
            Event::End(_) => builder.close(position)?,
            Event::Text(text) if builder.in_zone() => {
                let text = text
                    .unescape()
                    .map_err(|e| LayoutError::malformed(position, &e))?;
                builder.push_text(&text);
            }
            Event::CData(data) if builder.in_zone() => {
                let text = str::from_utf8(&data).map_err(|e| LayoutError::Malformed {
                    position,
                    message: e.to_string(),
                })?;
                builder.push_text(text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    builder.finish(reader.buffer_position())
}

/// Incremental state while walking the event stream.
#[derive(Default)]
struct LayoutBuilder {
    /// Completed pages.
    pages: Vec<Page>,
    /// Names of currently open elements, outermost first.
    stack: Vec<Vec<u8>>,
    /// The page being filled, if inside a `<page>`.
    page: Option<Page>,
    /// The zone being filled, if inside a `<text>`.
    zone: Option<Zone>,
    /// Whether the root element has been seen.
    seen_root: bool,
}

impl LayoutBuilder {
    /// Returns true while inside a zone element.
    fn in_zone(&self) -> bool {
        self.zone.is_some()
    }

    /// Appends character data to the current zone.
    fn push_text(&mut self, text: &str) {
        if let Some(zone) = self.zone.as_mut() {
            zone.text.push_str(text);
        }
    }

    /// Handles an opening tag.
    fn open(&mut self, start: &BytesStart<'_>, position: usize) -> Result<(), LayoutError> {
        let name = start.name();
        let name = name.as_ref();
        match self.stack.len() {
            0 if self.seen_root => {
                return Err(LayoutError::Malformed {
                    position,
                    message: "more than one root element".into(),
                });
            }
            0 => self.seen_root = true,
            1 if name == PAGE_TAG => {
                let index = self.pages.len() + 1;
                self.page = Some(read_page(start, index, position)?);
            }
            2 if name == ZONE_TAG => {
                if let Some(page) = &self.page {
                    let index = page.zones.len() + 1;
                    self.zone = Some(read_zone(start, index, position)?);
                }
            }
            _ => {}
        }
        self.stack.push(name.to_vec());
        Ok(())
    }

    /// Handles a closing tag (or the implicit close of an empty element).
    fn close(&mut self, position: usize) -> Result<(), LayoutError> {
        if self.stack.pop().is_none() {
            return Err(LayoutError::Malformed {
                position,
                message: "closing tag without a matching opening tag".into(),
            });
        }

        match self.stack.len() {
            2 => {
                if let (Some(zone), Some(page)) = (self.zone.take(), self.page.as_mut()) {
                    page.zones.push(zone);
                }
            }
            1 => {
                if let Some(page) = self.page.take() {
                    self.pages.push(page);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validates the end state and returns the layout.
    fn finish(self, position: usize) -> Result<Layout, LayoutError> {
        if let Some(open) = self.stack.last() {
            return Err(LayoutError::Malformed {
                position,
                message: format!("unclosed element <{}>", String::from_utf8_lossy(open)),
            });
        }
        if !self.seen_root {
            return Err(LayoutError::NoRootElement);
        }

        let layout = Layout { pages: self.pages };
        log::debug!(
            "parsed layout: {} pages, {} zones",
            layout.pages.len(),
            layout.zone_count()
        );
        Ok(layout)
    }
}

/// Attribute name/value pairs of one element.
struct Attributes {
    /// Element name, for error reporting.
    element: &'static str,
    /// 1-based position of the element among its siblings.
    index: usize,
    /// Unescaped attribute pairs in document order.
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Collects the attributes of an element.
    fn read(
        start: &BytesStart<'_>,
        element: &'static str,
        index: usize,
        position: usize,
    ) -> Result<Self, LayoutError> {
        let mut pairs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| LayoutError::malformed(position, &e.into()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| LayoutError::malformed(position, &e))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            pairs.push((key, value.into_owned()));
        }
        Ok(Self {
            element,
            index,
            pairs,
        })
    }

    /// Returns the raw value of an attribute.
    fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Builds an `InvalidAttribute` error for a value.
    fn invalid(&self, attribute: &'static str, value: &str) -> LayoutError {
        LayoutError::InvalidAttribute {
            element: self.element,
            attribute,
            value: value.to_string(),
            index: self.index,
        }
    }

    /// Reads a required non-negative, finite number.
    fn measure(&self, attribute: &'static str) -> Result<f64, LayoutError> {
        let value = self
            .get(attribute)
            .ok_or(LayoutError::MissingAttribute {
                element: self.element,
                attribute,
                index: self.index,
            })?;
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
            _ => Err(self.invalid(attribute, value)),
        }
    }
}

/// Reads the geometry of a `<page>` element.
///
/// A page without a `number` attribute is numbered by its position.
fn read_page(start: &BytesStart<'_>, index: usize, position: usize) -> Result<Page, LayoutError> {
    let attrs = Attributes::read(start, "page", index, position)?;
    let number = match attrs.get("number") {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map_err(|_| attrs.invalid("number", value))?,
        None => index,
    };
    Ok(Page {
        number,
        width: attrs.measure("width")?,
        height: attrs.measure("height")?,
        zones: Vec::new(),
    })
}

/// Reads the geometry of a `<text>` element.
fn read_zone(start: &BytesStart<'_>, index: usize, position: usize) -> Result<Zone, LayoutError> {
    let attrs = Attributes::read(start, "text", index, position)?;
    Ok(Zone {
        top: attrs.measure("top")?,
        left: attrs.measure("left")?,
        width: attrs.measure("width")?,
        height: attrs.measure("height")?,
        text: String::new(),
    })
}
