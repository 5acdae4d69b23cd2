//! Card definition script data (`MonoBehaviour`, class 114)

use super::{ObjectRef, PPtr, UnityClass};
use crate::error::Result;
use crate::formats::cursor::ByteCursor;
use serde::Serialize;
use std::io::{Read, Seek};

/// Script component carrying a card's portrait assets
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardDef {
    pub game_object: PPtr,
    pub enabled: bool,
    pub script: PPtr,
    pub name: String,
    /// Path of the portrait texture, e.g. `Assets/Game/Cards/HERO_01.psd`
    pub portrait_texture_path: String,
    pub enchantment_portrait: ObjectRef,
    pub deck_card_bar_portrait: ObjectRef,
}

impl CardDef {
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<Self> {
        let game_object = PPtr::read(cursor)?;
        let enabled = cursor.read_bool()?;
        cursor.align(4)?;
        let script = PPtr::read(cursor)?;
        let name = cursor.read_aligned_string()?;
        let portrait_texture_path = cursor.read_aligned_string()?;
        let enchantment_portrait = ObjectRef::typed(UnityClass::Material, PPtr::read(cursor)?);
        let deck_card_bar_portrait = ObjectRef::typed(UnityClass::Material, PPtr::read(cursor)?);

        Ok(Self {
            game_object,
            enabled,
            script,
            name,
            portrait_texture_path,
            enchantment_portrait,
            deck_card_bar_portrait,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::cursor::ByteOrder;

    fn encode(path: &str, be: bool) -> Vec<u8> {
        let i32b = |v: i32| if be { v.to_be_bytes() } else { v.to_le_bytes() };
        let mut out = Vec::new();
        out.extend_from_slice(&i32b(0));
        out.extend_from_slice(&i32b(12));
        out.extend_from_slice(&[1, 0, 0, 0]);
        out.extend_from_slice(&i32b(1));
        out.extend_from_slice(&i32b(99));
        out.extend_from_slice(&i32b(0));
        out.extend_from_slice(&i32b(path.len() as i32));
        out.extend_from_slice(path.as_bytes());
        while out.len() % 4 != 0 {
            out.push(0);
        }
        out.extend_from_slice(&i32b(0));
        out.extend_from_slice(&i32b(600));
        out.extend_from_slice(&i32b(0));
        out.extend_from_slice(&i32b(0));
        out
    }

    #[test]
    fn test_read_card_def() {
        let data = encode("textures/hero01_portrait.tex", false);
        let mut cursor = ByteCursor::from_bytes(&data);
        let card = CardDef::read(&mut cursor).unwrap();

        assert_eq!(card.game_object.path_id, 12);
        assert!(card.enabled);
        assert_eq!(card.script, PPtr { file_id: 1, path_id: 99 });
        assert_eq!(card.name, "");
        assert_eq!(card.portrait_texture_path, "textures/hero01_portrait.tex");
        assert_eq!(card.enchantment_portrait, ObjectRef::new(21, 600));
        assert_eq!(card.deck_card_bar_portrait.path_id, 0);
        assert_eq!(card.deck_card_bar_portrait.class(), UnityClass::Material);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_read_big_endian() {
        let data = encode("a.tex", true);
        let mut cursor = ByteCursor::from_bytes(&data).with_order(ByteOrder::Big);
        let card = CardDef::read(&mut cursor).unwrap();
        assert_eq!(card.portrait_texture_path, "a.tex");
        assert_eq!(card.enchantment_portrait.path_id, 600);
    }
}
