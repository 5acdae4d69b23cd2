//! Card art record types

use crate::objects::Material;
use indexmap::IndexMap;
use serde::Serialize;

/// Portrait assets resolved for one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardArt {
    /// Card id, taken from the owning game object's name
    pub name: String,
    /// Full portrait texture path from the card definition
    pub portrait_path: String,
    /// File name of `portrait_path` without its extension
    pub texture_name: String,
    /// Material used for the in-play portrait
    pub portrait: Option<Material>,
    /// Material used for the deck list bar
    pub deck_bar: Option<Material>,
}

/// Card art records in resolution order, indexed by texture name.
///
/// Several cards may share one portrait texture; the index keeps all of
/// them in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardArtCollection {
    cards: Vec<CardArt>,
    by_texture: IndexMap<String, Vec<usize>>,
}

impl CardArtCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: CardArt) {
        let index = self.cards.len();
        self.by_texture
            .entry(card.texture_name.clone())
            .or_default()
            .push(index);
        self.cards.push(card);
    }

    #[must_use]
    pub fn cards(&self) -> &[CardArt] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardArt> {
        self.cards.iter()
    }

    /// Cards whose portrait uses the given texture, in resolution order.
    pub fn by_texture<'a>(&'a self, texture_name: &str) -> impl Iterator<Item = &'a CardArt> {
        self.by_texture
            .get(texture_name)
            .into_iter()
            .flatten()
            .map(|&i| &self.cards[i])
    }

    /// Distinct texture names, in first-seen order.
    pub fn texture_names(&self) -> impl Iterator<Item = &str> {
        self.by_texture.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a CardArtCollection {
    type Item = &'a CardArt;
    type IntoIter = std::slice::Iter<'a, CardArt>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, texture: &str) -> CardArt {
        CardArt {
            name: name.to_string(),
            portrait_path: format!("textures/{texture}.tex"),
            texture_name: texture.to_string(),
            portrait: None,
            deck_bar: None,
        }
    }

    #[test]
    fn test_texture_index_is_one_to_many() {
        let mut cards = CardArtCollection::new();
        cards.push(card("EX1_001", "shared"));
        cards.push(card("EX1_002", "other"));
        cards.push(card("EX1_001_premium", "shared"));

        let shared: Vec<_> = cards.by_texture("shared").map(|c| c.name.as_str()).collect();
        assert_eq!(shared, ["EX1_001", "EX1_001_premium"]);
        assert_eq!(cards.texture_names().collect::<Vec<_>>(), ["shared", "other"]);
        assert_eq!(cards.by_texture("missing").count(), 0);
        assert_eq!(cards.len(), 3);
    }
}
