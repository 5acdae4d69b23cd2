//! Engine class ids

use serde::Serialize;
use std::borrow::Cow;

/// Engine classes with a dedicated decoder, plus everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnityClass {
    GameObject,
    Transform,
    Material,
    Texture2D,
    /// Script-derived data; decoded as a card definition
    MonoBehaviour,
    /// Any class without a decoder, carrying its raw id
    Unsupported(i32),
}

impl UnityClass {
    pub const GAME_OBJECT_ID: i32 = 1;
    pub const TRANSFORM_ID: i32 = 4;
    pub const MATERIAL_ID: i32 = 21;
    pub const TEXTURE_2D_ID: i32 = 28;
    pub const MONO_BEHAVIOUR_ID: i32 = 114;

    #[must_use]
    pub fn from_id(class_id: i32) -> Self {
        match class_id {
            Self::GAME_OBJECT_ID => UnityClass::GameObject,
            Self::TRANSFORM_ID => UnityClass::Transform,
            Self::MATERIAL_ID => UnityClass::Material,
            Self::TEXTURE_2D_ID => UnityClass::Texture2D,
            Self::MONO_BEHAVIOUR_ID => UnityClass::MonoBehaviour,
            other => UnityClass::Unsupported(other),
        }
    }

    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            UnityClass::GameObject => Self::GAME_OBJECT_ID,
            UnityClass::Transform => Self::TRANSFORM_ID,
            UnityClass::Material => Self::MATERIAL_ID,
            UnityClass::Texture2D => Self::TEXTURE_2D_ID,
            UnityClass::MonoBehaviour => Self::MONO_BEHAVIOUR_ID,
            UnityClass::Unsupported(id) => id,
        }
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        !matches!(self, UnityClass::Unsupported(_))
    }

    /// Script classes commonly lack type tree entries.
    #[must_use]
    pub fn may_be_untyped(self) -> bool {
        matches!(self, UnityClass::MonoBehaviour)
    }

    /// Engine class name, used for output directory names.
    #[must_use]
    pub fn name(self) -> Cow<'static, str> {
        class_name(self.id())
    }
}

/// Engine class name for a class id; unknown ids become `Class<id>`.
#[must_use]
pub fn class_name(class_id: i32) -> Cow<'static, str> {
    let name = match class_id {
        1 => "GameObject",
        4 => "Transform",
        21 => "Material",
        28 => "Texture2D",
        48 => "Shader",
        49 => "TextAsset",
        83 => "AudioClip",
        114 => "MonoBehaviour",
        115 => "MonoScript",
        128 => "Font",
        142 => "AssetBundle",
        _ => return Cow::Owned(format!("Class{class_id}")),
    };
    Cow::Borrowed(name)
}
