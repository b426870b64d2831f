use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ConvertError;

/// Information sniffed from the input document during the preflight pass.
///
/// Used for log output and warnings only; the stylesheet performs its own
/// interpretation of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Tag name of the root element.
    pub root: String,
    /// Document title, from the root's `title` attribute or a top-level
    /// `<title>` child.
    pub title: Option<String>,
    /// Natural language, from the root's `lang` attribute.
    pub language: Option<String>,
}

/// Stream through the whole input once, verifying well-formedness.
///
/// This is not schema validation: any well-formed document passes and is
/// handed to the stylesheet unchanged. Malformed markup (unclosed or
/// mismatched tags, bad attribute syntax) is rejected with a
/// position-bearing diagnostic.
pub fn preflight(xml: &[u8]) -> Result<DocumentInfo, ConvertError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut info = DocumentInfo::default();
    let mut root_seen = false;
    let mut depth = 0usize;
    let mut in_title = false;

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    if root_seen {
                        return Err(ConvertError::Parse(format!(
                            "multiple root elements at byte {position}"
                        )));
                    }
                    read_root(&e, &mut info, position)?;
                    root_seen = true;
                } else if depth == 1 && info.title.is_none() {
                    in_title = e.local_name().as_ref() == b"title";
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    if root_seen {
                        return Err(ConvertError::Parse(format!(
                            "multiple root elements at byte {position}"
                        )));
                    }
                    read_root(&e, &mut info, position)?;
                    root_seen = true;
                }
            }
            Ok(Event::Text(e)) => {
                if in_title
                    && info.title.is_none()
                    && let Ok(text) = e.xml_content()
                {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        info.title = Some(text);
                    }
                }
            }
            Ok(Event::End(_)) => {
                in_title = false;
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ConvertError::Parse(format!(
                    "malformed XML at byte {position}: {e}"
                )));
            }
        }
    }

    if !root_seen {
        return Err(ConvertError::Parse(
            "document has no root element".to_string(),
        ));
    }
    if depth != 0 {
        return Err(ConvertError::Parse(format!(
            "unexpected end of file: {depth} unclosed element(s)"
        )));
    }

    Ok(info)
}

/// Record the root element's tag and the attributes the pipeline reports on.
fn read_root(
    start: &BytesStart<'_>,
    info: &mut DocumentInfo,
    position: u64,
) -> Result<(), ConvertError> {
    info.root = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            ConvertError::Parse(format!("malformed attribute at byte {position}: {e}"))
        })?;
        let value = attr.unescape_value().map_err(|e| {
            ConvertError::Parse(format!("malformed attribute at byte {position}: {e}"))
        })?;
        match attr.key.local_name().as_ref() {
            b"title" => info.title = Some(value.into_owned()),
            b"lang" => info.language = Some(value.into_owned()),
            _ => {}
        }
    }
    Ok(())
}
