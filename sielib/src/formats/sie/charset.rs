//! CP437 ("PC8") conversion of whole documents.

use crate::error::{Result, SieError};
use codepage_437::{FromCp437, ToCp437, CP437_CONTROL};
use std::borrow::Cow;

/// Encodes a complete document for the wire.
///
/// The control dialect folds some characters onto look-alikes (`€` onto
/// `ε`, `β` onto `ß`). Those would come back as something else, so the
/// encoded bytes are decoded again and any character that does not survive
/// is reported the same way as one with no mapping at all.
pub fn to_wire(text: &str) -> Result<Vec<u8>> {
    let bytes: Cow<[u8]> = text.to_cp437(&CP437_CONTROL).map_err(|e| {
        let offset = e.representable_up_to;
        SieError::Encoding {
            character: text
                .get(offset..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            offset,
        }
    })?;

    let decoded = from_wire(&bytes);
    if let Some((offset, character)) = text
        .char_indices()
        .zip(decoded.chars())
        .find(|((_, sent), back)| sent != back)
        .map(|((offset, sent), _)| (offset, sent))
    {
        return Err(SieError::Encoding { character, offset });
    }
    Ok(bytes.into_owned())
}

/// Decodes a complete document. Every CP437 byte has a mapping, so this
/// cannot fail.
pub fn from_wire(bytes: &[u8]) -> String {
    String::from_cp437(bytes.to_vec(), &CP437_CONTROL)
}
