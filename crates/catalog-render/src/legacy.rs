//! Compatibility pass for diagrams authored before placeholders existed.
//!
//! Such diagrams mark value slots with an element id of `val_<key>`; the
//! element's content is replaced by the raw value of `key`. Slots are located
//! in the diagram as authored, so substituted placeholder values never have
//! to parse as markup.

use std::collections::BTreeMap;
use std::ops::Range;

use quick_xml::Reader;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

/// Prefix of legacy value element ids.
pub const LEGACY_ID_PREFIX: &str = "val_";

/// An element carrying a `val_<key>` id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacySlot {
    pub key: String,
    /// Byte range of the element content. For a self-closing element this is
    /// the closing `/>`.
    pub range: Range<usize>,
    /// Name of a self-closing element, which gains an explicit end tag.
    pub empty_element: Option<String>,
}

/// Locate the legacy slots whose key passes `is_key`, in document order.
///
/// Returns `None` when the document is not well-formed XML.
pub fn find_slots(document: &str, is_key: impl Fn(&str) -> bool) -> Option<Vec<LegacySlot>> {
    let mut slots = Vec::new();
    if !document.contains(LEGACY_ID_PREFIX) {
        return Some(slots);
    }

    let mut reader = Reader::from_str(document);
    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                debug!(error = %err, "diagram is not well-formed XML, skipping legacy ids");
                return None;
            }
        };
        match event {
            Event::Eof => break,
            Event::Start(start) => {
                if let Some(key) = legacy_key(&start, &is_key) {
                    let content_start = position(&reader)?;
                    let content_end = skip_element(&mut reader)?;
                    slots.push(LegacySlot {
                        key,
                        range: content_start..content_end,
                        empty_element: None,
                    });
                }
            }
            Event::Empty(start) => {
                if let Some(key) = legacy_key(&start, &is_key) {
                    let end = position(&reader)?;
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    slots.push(LegacySlot {
                        key,
                        range: end.checked_sub(2)?..end,
                        empty_element: Some(name),
                    });
                }
            }
            _ => {}
        }
    }
    Some(slots)
}

/// Write `document` with every slot set to its escaped value from `values`.
///
/// The text between slots goes through `gap`.
pub fn fill_slots(
    document: &str,
    slots: &[LegacySlot],
    values: &BTreeMap<String, String>,
    mut gap: impl FnMut(&str) -> String,
) -> String {
    let mut out = String::with_capacity(document.len());
    let mut cursor = 0;
    for slot in slots {
        out.push_str(&gap(&document[cursor..slot.range.start]));
        let value = values.get(&slot.key).map_or("", String::as_str);
        match &slot.empty_element {
            Some(name) => {
                out.push('>');
                out.push_str(&partial_escape(value));
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            None => out.push_str(&partial_escape(value)),
        }
        cursor = slot.range.end;
    }
    out.push_str(&gap(&document[cursor..]));
    out
}

fn legacy_key(start: &BytesStart<'_>, is_key: &impl Fn(&str) -> bool) -> Option<String> {
    let id = start
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"id")?;
    let id = std::str::from_utf8(&id.value).ok()?;
    let key = id.strip_prefix(LEGACY_ID_PREFIX)?;
    is_key(key).then(|| key.to_string())
}

fn position(reader: &Reader<&[u8]>) -> Option<usize> {
    usize::try_from(reader.buffer_position()).ok()
}

/// Consume the content of the element just opened and return the offset of
/// its end tag.
fn skip_element(reader: &mut Reader<&[u8]>) -> Option<usize> {
    let mut depth = 0usize;
    loop {
        let before = position(reader)?;
        match reader.read_event().ok()? {
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Some(before),
            Event::End(_) => depth -= 1,
            Event::Eof => return None,
            _ => {}
        }
    }
}
