use crate::constants::{FILTER, FORM_VIEW, LIST_VIEW, QUICK_VIEW, SHOW_VIEW};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Declarative markers carried by a registered type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Markers: u32 {
        /// The type is declared for administration and gets scanned.
        const ADMINISTRATION = 1 << 0;
        /// The type is a persistent entity.
        const ENTITY = 1 << 1;
        /// Registered, but hidden from the administration scanner.
        const HIDDEN = 1 << 2;
    }
}

impl Markers {
    /// The stock "is administratively declared" predicate.
    #[must_use]
    pub const fn is_administration(self) -> bool {
        self.contains(Self::ADMINISTRATION) && !self.contains(Self::HIDDEN)
    }
}

bitflags! {
    /// Administration views (units) a field participates in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Units: u32 {
        const LIST = 1 << 0;
        const QUICK = 1 << 1;
        const SHOW = 1 << 2;
        const FORM = 1 << 3;
        const FILTER = 1 << 4;

        const ALL_VIEWS = Self::LIST.bits() | Self::QUICK.bits() | Self::SHOW.bits() | Self::FORM.bits();
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::ALL_VIEWS
    }
}

impl From<&str> for Units {
    fn from(s: &str) -> Self {
        match s.trim() {
            LIST_VIEW => Self::LIST,
            QUICK_VIEW => Self::QUICK,
            SHOW_VIEW => Self::SHOW,
            FORM_VIEW => Self::FORM,
            FILTER => Self::FILTER,
            "all" | "*" => Self::ALL_VIEWS,
            _ => Self::empty(),
        }
    }
}

impl Units {
    /// Parses a comma separated list such as `"list, form"`. Unknown names are ignored.
    #[must_use]
    pub fn parse_list(s: &str) -> Self {
        s.split(',').map(Self::from).fold(Self::empty(), |acc, unit| acc | unit)
    }
}

macro_rules! bits_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_u32(self.bits())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let bits = u32::deserialize(deserializer)?;
                Ok(Self::from_bits_truncate(bits))
            }
        }
    };
}

bits_serde!(Markers);
bits_serde!(Units);
