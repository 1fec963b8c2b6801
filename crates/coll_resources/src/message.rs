use std::fmt;

use crate::locale::Locale;
use crate::tables;

/// Identifier of a localizable error message.
///
/// The string form (`name`) is what callers pass to `MessageCatalog::resolve`
/// and what override tables are keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageId {
    // Array arguments
    ArrayRankMultiDimNotSupported,
    ArrayNonZeroLowerBound,
    ArrayTooSmall,
    ArrayTypeInvalid,
    InvalidOffsetLength,

    // Other arguments
    ArgumentWrongType,
    ArgumentNegative,
    KeyDuplicate,
    ArgumentNull,
    ArgumentOutOfRange,
    ArgumentOutOfRangeBetween,

    // Lookups
    KeyNotFound,

    // Unsupported operations
    ReadOnlyCollection,
    FixedSizeCollection,

    // Live views
    CollectionModified,
    StoreDropped,
    StoreBusy,
}

impl MessageId {
    pub const ALL: [MessageId; 17] = [
        MessageId::ArrayRankMultiDimNotSupported,
        MessageId::ArrayNonZeroLowerBound,
        MessageId::ArrayTooSmall,
        MessageId::ArrayTypeInvalid,
        MessageId::InvalidOffsetLength,
        MessageId::ArgumentWrongType,
        MessageId::ArgumentNegative,
        MessageId::KeyDuplicate,
        MessageId::ArgumentNull,
        MessageId::ArgumentOutOfRange,
        MessageId::ArgumentOutOfRangeBetween,
        MessageId::KeyNotFound,
        MessageId::ReadOnlyCollection,
        MessageId::FixedSizeCollection,
        MessageId::CollectionModified,
        MessageId::StoreDropped,
        MessageId::StoreBusy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MessageId::ArrayRankMultiDimNotSupported => "ArrayRankMultiDimNotSupported",
            MessageId::ArrayNonZeroLowerBound => "ArrayNonZeroLowerBound",
            MessageId::ArrayTooSmall => "ArrayTooSmall",
            MessageId::ArrayTypeInvalid => "ArrayTypeInvalid",
            MessageId::InvalidOffsetLength => "InvalidOffsetLength",
            MessageId::ArgumentWrongType => "ArgumentWrongType",
            MessageId::ArgumentNegative => "ArgumentNegative",
            MessageId::KeyDuplicate => "KeyDuplicate",
            MessageId::ArgumentNull => "ArgumentNull",
            MessageId::ArgumentOutOfRange => "ArgumentOutOfRange",
            MessageId::ArgumentOutOfRangeBetween => "ArgumentOutOfRangeBetween",
            MessageId::KeyNotFound => "KeyNotFound",
            MessageId::ReadOnlyCollection => "ReadOnlyCollection",
            MessageId::FixedSizeCollection => "FixedSizeCollection",
            MessageId::CollectionModified => "CollectionModified",
            MessageId::StoreDropped => "StoreDropped",
            MessageId::StoreBusy => "StoreBusy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.name() == name)
    }

    /// Built-in template for this identifier in `locale`.
    pub fn template(self, locale: Locale) -> &'static str {
        tables::template(self, locale)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
