//! Card art to XML export

use crate::card_art::{CardArt, CardArtCollection, extract_card_art_with_progress};
use crate::error::Result;
use crate::objects::Material;
use crate::progress::{Phase, Progress, ProgressCallback, no_progress};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::fs;
use std::path::{Path, PathBuf};

/// File written into the output directory by [`export_card_art`]
pub const CARD_ART_FILE_NAME: &str = "CardArt.xml";

/// Resolve the card art of a bundle and write it to
/// `<dest>/CardArt.xml`.
///
/// # Errors
/// Returns an error if the bundle is malformed or the XML cannot be written.
pub fn export_card_art<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
) -> Result<CardArtCollection> {
    export_card_art_with_progress(source, dest, &no_progress)
}

/// [`export_card_art`] with a progress callback.
///
/// # Errors
/// Same as [`export_card_art`].
pub fn export_card_art_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    progress: ProgressCallback,
) -> Result<CardArtCollection> {
    tracing::info!(
        "Exporting card art: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let cards = extract_card_art_with_progress(source, progress)?;

    progress(&Progress::with_item(Phase::WritingFiles, 1, 1, CARD_ART_FILE_NAME));
    let path = write_card_art_xml(&cards, dest)?;
    tracing::info!("Wrote {} cards to {}", cards.len(), path.display());

    Ok(cards)
}

/// Write `CardArt.xml` into `dest`, creating the directory if needed.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_card_art_xml<P: AsRef<Path>>(cards: &CardArtCollection, dest: P) -> Result<PathBuf> {
    fs::create_dir_all(&dest)?;
    let path = dest.as_ref().join(CARD_ART_FILE_NAME);
    fs::write(&path, to_xml(cards)?)?;
    Ok(path)
}

/// Serialize card art records to XML.
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn to_xml(cards: &CardArtCollection) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b'\t', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("CardArt")))?;

    for card in cards {
        write_card(&mut writer, card)?;
    }

    writer.write_event(Event::End(BytesEnd::new("CardArt")))?;

    let mut xml = String::from_utf8(output)?;
    xml.push('\n');
    Ok(xml)
}

fn write_card<W: std::io::Write>(writer: &mut Writer<W>, card: &CardArt) -> Result<()> {
    let mut element = BytesStart::new("Card");
    element.push_attribute(("id", card.name.as_str()));
    writer.write_event(Event::Start(element))?;

    let mut texture = BytesStart::new("Texture");
    texture.push_attribute(("path", card.portrait_path.as_str()));
    texture.push_attribute(("name", card.texture_name.as_str()));
    writer.write_event(Event::Empty(texture))?;

    if let Some(material) = &card.portrait {
        write_material(writer, "Portrait", material)?;
    }
    if let Some(material) = &card.deck_bar {
        write_material(writer, "CardBar", material)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Card")))?;
    Ok(())
}

fn write_material<W: std::io::Write>(
    writer: &mut Writer<W>,
    slot: &str,
    material: &Material,
) -> Result<()> {
    let mut element = BytesStart::new("Material");
    element.push_attribute(("type", slot));

    if material.floats.is_empty() && material.tex_envs.is_empty() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }
    writer.write_event(Event::Start(element))?;

    for (name, value) in &material.floats {
        let mut float = BytesStart::new("Float");
        float.push_attribute(("name", name.as_str()));
        float.push_attribute(("value", value.to_string().as_str()));
        writer.write_event(Event::Empty(float))?;
    }

    for (name, env) in &material.tex_envs {
        let mut tex_env = BytesStart::new("TexEnv");
        tex_env.push_attribute(("name", name.as_str()));
        tex_env.push_attribute(("path_id", env.texture.path_id.to_string().as_str()));
        tex_env.push_attribute(("scale_x", env.scale.x.to_string().as_str()));
        tex_env.push_attribute(("scale_y", env.scale.y.to_string().as_str()));
        tex_env.push_attribute(("offset_x", env.offset.x.to_string().as_str()));
        tex_env.push_attribute(("offset_y", env.offset.y.to_string().as_str()));
        writer.write_event(Event::Empty(tex_env))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Material")))?;
    Ok(())
}
