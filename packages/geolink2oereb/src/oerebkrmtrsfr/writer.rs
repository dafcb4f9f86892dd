//! XML rendering of transfer model entities.

use quick_xml::se::Serializer;
use serde::Serialize;

use super::model::{Amt, Dokument, AMT_TAG, DOKUMENT_TAG};
use crate::error::{ConversionError, Result};

/// Indentation of rendered elements.
const INDENT: usize = 2;

fn render<T: Serialize>(entity: &T, tag: &str) -> Result<String> {
    let mut xml = String::new();
    let mut serializer = Serializer::with_root(&mut xml, Some(tag))
        .map_err(|e| ConversionError::XmlSerialization(e.to_string()))?;
    serializer.indent(' ', INDENT);
    entity
        .serialize(serializer)
        .map_err(|e| ConversionError::XmlSerialization(e.to_string()))?;
    Ok(xml)
}

/// Render a `Dokument` element.
pub fn render_dokument(dokument: &Dokument) -> Result<String> {
    render(dokument, DOKUMENT_TAG)
}

/// Render an `Amt` element.
pub fn render_amt(amt: &Amt) -> Result<String> {
    render(amt, AMT_TAG)
}

/// Render gathered pairs, each as its `Dokument` followed by its `Amt`.
pub fn render_gathered(gathered: &[(Dokument, Amt)]) -> Result<String> {
    let mut elements = Vec::with_capacity(gathered.len() * 2);
    for (dokument, amt) in gathered {
        elements.push(render_dokument(dokument)?);
        elements.push(render_amt(amt)?);
    }
    Ok(elements.join("\n"))
}

/// Render unified entities: all `Amt` elements, then all `Dokument` elements.
pub fn render_unified(dokumente: &[Dokument], aemter: &[Amt]) -> Result<String> {
    let mut elements = Vec::with_capacity(dokumente.len() + aemter.len());
    for amt in aemter {
        elements.push(render_amt(amt)?);
    }
    for dokument in dokumente {
        elements.push(render_dokument(dokument)?);
    }
    Ok(elements.join("\n"))
}
