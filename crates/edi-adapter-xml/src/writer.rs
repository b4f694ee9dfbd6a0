//! XML writer

use crate::config::{XmlConfig, XmlEncoding};
use crate::{Error, Result};
use edi_ir::{Document, Node};
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Writer for IR documents as XML
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlWriter {
    config: XmlConfig,
}

impl XmlWriter {
    /// Create a new XML writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer from a configuration
    pub fn with_config(config: XmlConfig) -> Self {
        Self { config }
    }

    /// Render the document as UTF-8 text, declaring the configured encoding
    pub fn write_to_string(&self, doc: &Document) -> Result<String> {
        let buffer = Vec::new();
        let mut xml = if self.config.indent > 0 {
            Writer::new_with_indent(buffer, b' ', self.config.indent)
        } else {
            Writer::new(buffer)
        };

        xml.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some(self.config.encoding.label()),
            None,
        )))
        .map_err(|e| Error::Xml(e.to_string()))?;
        write_node(&mut xml, &doc.root)?;

        String::from_utf8(xml.into_inner()).map_err(|e| Error::Xml(e.to_string()))
    }

    /// Write the document in the configured encoding
    pub fn write<W: Write>(&self, mut writer: W, doc: &Document) -> Result<()> {
        let text = self.write_to_string(doc)?;
        let bytes = self.config.encoding.encode(&text);
        writer.write_all(&bytes)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!(
            bytes = bytes.len(),
            encoding = %self.config.encoding,
            "Finished writing XML"
        );
        Ok(())
    }

    /// Write the document to a file, replacing it if present
    pub fn write_file(&self, path: &Path, doc: &Document) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write(std::io::BufWriter::new(file), doc)
    }

    /// Encoding of the output
    pub fn encoding(&self) -> XmlEncoding {
        self.config.encoding
    }
}

fn write_node<W: Write>(xml: &mut Writer<W>, node: &Node) -> Result<()> {
    let name = node.name.as_str();
    let text = node.text().filter(|text| !text.is_empty());
    if node.children.is_empty() && text.is_none() {
        return xml
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(|e| Error::Xml(e.to_string()));
    }

    xml.write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| Error::Xml(e.to_string()))?;
    if let Some(text) = text {
        // only markup characters are escaped, quotes stay literal
        xml.write_event(Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }
    for child in &node.children {
        write_node(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| Error::Xml(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edi_ir::{NodeType, Value};

    fn sample() -> Document {
        let mut schedule = Node::new("SCHEDULE", NodeType::Record);
        schedule.add_field("SUPP_SCHED_TYPE", "DELFOR");
        schedule.add_field("VENDOR_NO", "Müller & Söhne");
        schedule.add_child(Node::new("ARTICLE_LINES", NodeType::Collection));
        let mut root = Node::new("SCHEDULES", NodeType::Root);
        root.add_child(schedule);
        Document::new(root)
    }

    #[test]
    fn test_compact_output() {
        let writer = XmlWriter::with_config(XmlConfig::new().indent(0));
        let xml = writer.write_to_string(&sample()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>"));
        assert!(xml.contains(
            "<SCHEDULES><SCHEDULE><SUPP_SCHED_TYPE>DELFOR</SUPP_SCHED_TYPE>"
        ));
        assert!(xml.contains("<VENDOR_NO>Müller &amp; Söhne</VENDOR_NO>"));
        assert!(xml.contains("<ARTICLE_LINES/>"));
        assert!(xml.ends_with("</SCHEDULE></SCHEDULES>"));
    }

    #[test]
    fn test_indented_output_keeps_text_inline() {
        let xml = XmlWriter::new().write_to_string(&sample()).unwrap();

        assert!(xml.contains("\n  <SCHEDULE>"));
        assert!(xml.contains("\n    <SUPP_SCHED_TYPE>DELFOR</SUPP_SCHED_TYPE>"));
        assert!(xml.contains("\n    <ARTICLE_LINES/>"));
    }

    #[test]
    fn test_empty_and_null_fields_self_close() {
        let mut root = Node::new("SCHEDULES", NodeType::Root);
        root.add_field("EAN_CODE", "");
        root.add_child(Node::with_value("TO_DATE", NodeType::Field, Value::Null));
        let xml = XmlWriter::with_config(XmlConfig::new().indent(0))
            .write_to_string(&Document::new(root))
            .unwrap();

        assert!(xml.contains("<EAN_CODE/>"));
        assert!(xml.contains("<TO_DATE/>"));
    }

    #[test]
    fn test_quotes_in_text_are_not_escaped() {
        let mut root = Node::new("SCHEDULES", NodeType::Root);
        root.add_field("SUPPLIER_REF", "PO \"7\" <O'Neil> & Co");
        let xml = XmlWriter::with_config(XmlConfig::new().indent(0))
            .write_to_string(&Document::new(root))
            .unwrap();

        assert!(xml.contains("<SUPPLIER_REF>PO \"7\" &lt;O'Neil&gt; &amp; Co</SUPPLIER_REF>"));
    }

    #[test]
    fn test_latin1_bytes_on_write() -> anyhow::Result<()> {
        let mut out = Vec::new();
        XmlWriter::with_config(XmlConfig::new().indent(0)).write(&mut out, &sample())?;

        let needle = b"<VENDOR_NO>M\xFCller &amp; S\xF6hne</VENDOR_NO>";
        assert!(out.windows(needle.len()).any(|w| w == needle));
        Ok(())
    }

    #[test]
    fn test_utf8_declaration() -> anyhow::Result<()> {
        let writer = XmlWriter::with_config(XmlConfig::new().encoding(XmlEncoding::Utf8));
        let mut out = Vec::new();
        writer.write(&mut out, &sample())?;

        let text = String::from_utf8(out)?;
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(text.contains("Müller &amp; Söhne"));
        assert_eq!(writer.encoding(), XmlEncoding::Utf8);
        Ok(())
    }
}
