use crate::locale::Locale;
use crate::message::MessageId;

pub(crate) fn template(id: MessageId, locale: Locale) -> &'static str {
    match locale {
        Locale::En => template_en(id),
        Locale::ZhHans => template_zh_hans(id),
    }
}

/// Fallback used when an identifier has no template. `{0}` is the identifier.
pub(crate) fn unknown(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Unknown message '{0}'.",
        Locale::ZhHans => "未知的消息“{0}”。",
    }
}

/// Same as `unknown`, with `{1}` naming the closest known identifier.
pub(crate) fn unknown_with_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Unknown message '{0}'. Did you mean '{1}'?",
        Locale::ZhHans => "未知的消息“{0}”。您是否是指“{1}”？",
    }
}

fn template_en(id: MessageId) -> &'static str {
    match id {
        MessageId::ArrayRankMultiDimNotSupported => {
            "Only single dimensional arrays are supported for the requested action."
        }
        MessageId::ArrayNonZeroLowerBound => "The lower bound of target array must be zero.",
        MessageId::ArrayTooSmall => {
            "Destination array is not long enough to copy all the items in the collection. \
             Check array index and length."
        }
        MessageId::ArrayTypeInvalid => {
            "Target array type is not compatible with the type of items in the collection."
        }
        MessageId::InvalidOffsetLength => {
            "Offset and length were out of bounds for the array or count is greater than \
             the number of elements from index to the end of the source collection."
        }
        MessageId::ArgumentWrongType => {
            "The value \"{0}\" is not of type \"{1}\" and cannot be used in this generic collection."
        }
        MessageId::ArgumentNegative => "Parameter '{0}' must be a non-negative number.",
        MessageId::KeyDuplicate => "An item with the same key has already been added.",
        MessageId::ArgumentNull => "Value cannot be null. Parameter name: {0}.",
        MessageId::ArgumentOutOfRange => "Parameter '{0}' is out of range.",
        MessageId::ArgumentOutOfRangeBetween => "Parameter '{0}' must be between {1} and {2}.",
        MessageId::KeyNotFound => "The given key was not present in the dictionary.",
        MessageId::ReadOnlyCollection => "Collection is read-only.",
        MessageId::FixedSizeCollection => "Collection was of a fixed size.",
        MessageId::CollectionModified => {
            "Collection was modified; enumeration operation may not execute."
        }
        MessageId::StoreDropped => {
            "The backing dictionary has been dropped; the view is no longer valid."
        }
        MessageId::StoreBusy => "The backing dictionary is currently borrowed for mutation.",
    }
}

fn template_zh_hans(id: MessageId) -> &'static str {
    match id {
        MessageId::ArrayRankMultiDimNotSupported => "请求的操作只支持一维数组。",
        MessageId::ArrayNonZeroLowerBound => "目标数组的下限必须为零。",
        MessageId::ArrayTooSmall => "目标数组长度不足，无法复制集合中的所有项。请检查数组索引和长度。",
        MessageId::ArrayTypeInvalid => "目标数组类型与集合项的类型不兼容。",
        MessageId::InvalidOffsetLength => {
            "偏移量和长度超出数组的界限，或者计数大于从索引到源集合末尾的元素数量。"
        }
        MessageId::ArgumentWrongType => "值“{0}”不是“{1}”类型，不能在此泛型集合中使用。",
        MessageId::ArgumentNegative => "参数“{0}”必须是非负数。",
        MessageId::KeyDuplicate => "已添加了具有相同键的项。",
        MessageId::ArgumentNull => "值不能为 null。参数名：{0}。",
        MessageId::ArgumentOutOfRange => "参数“{0}”超出范围。",
        MessageId::ArgumentOutOfRangeBetween => "参数“{0}”必须介于 {1} 和 {2} 之间。",
        MessageId::KeyNotFound => "给定的键不在字典中。",
        MessageId::ReadOnlyCollection => "集合是只读的。",
        MessageId::FixedSizeCollection => "集合大小是固定的。",
        MessageId::CollectionModified => "集合已修改；可能无法执行枚举操作。",
        MessageId::StoreDropped => "底层字典已被释放，视图不再有效。",
        MessageId::StoreBusy => "底层字典正被可变借用。",
    }
}
