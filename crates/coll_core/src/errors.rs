//! Constructors for every error the collections raise.
//!
//! Call sites never format error text themselves: each function here resolves
//! a [`MessageId`] (plus positional arguments) through the process-wide
//! message catalog and wraps the text in a [`CollectionError`] of the right
//! kind. Constructors only allocate; the caller decides to return the error.
//!
//! The `check_*` helpers evaluate a precondition and hand back the error as
//! `Err`, so callers propagate with `?` before touching any state.

use std::fmt;

use coll_resources::{MessageId, resolve_with};
use log::trace;

use crate::error::{CollectionError, CollectionResult, ErrorKind};
use crate::shape::Shaped;

fn build(kind: ErrorKind, id: MessageId, args: &[&dyn fmt::Display]) -> CollectionError {
    trace!("event=error_build module=errors kind={} id={}", kind, id);
    CollectionError::new(kind, resolve_with(id.name(), args))
}

/// Generic invalid-argument error for any message identifier.
pub fn invalid_argument(id: MessageId, args: &[&dyn fmt::Display]) -> CollectionError {
    build(ErrorKind::InvalidArgument, id, args)
}

/// Generic unsupported-operation error for any message identifier.
pub fn unsupported_operation(id: MessageId) -> CollectionError {
    build(ErrorKind::UnsupportedOperation, id, &[])
}

// Array arguments

pub fn array_rank_multi_dim_not_supported() -> CollectionError {
    invalid_argument(MessageId::ArrayRankMultiDimNotSupported, &[])
}

pub fn array_non_zero_lower_bound() -> CollectionError {
    invalid_argument(MessageId::ArrayNonZeroLowerBound, &[])
}

/// The destination cannot hold every item of the collection.
pub fn array_too_small() -> CollectionError {
    invalid_argument(MessageId::ArrayTooSmall, &[])
}

pub fn array_type_invalid() -> CollectionError {
    invalid_argument(MessageId::ArrayTypeInvalid, &[])
}

pub fn array_type_invalid_with(
    cause: impl std::error::Error + Send + Sync + 'static,
) -> CollectionError {
    array_type_invalid().with_source(cause)
}

pub fn invalid_offset_length() -> CollectionError {
    invalid_argument(MessageId::InvalidOffsetLength, &[])
}

// Other arguments

/// `value` cannot be stored in a slot of type `T`.
pub fn argument_wrong_type<T: ?Sized>(value: &dyn fmt::Display) -> CollectionError {
    let target = std::any::type_name::<T>();
    invalid_argument(MessageId::ArgumentWrongType, &[value, &target])
}

pub fn argument_negative(param: &str) -> CollectionError {
    invalid_argument(MessageId::ArgumentNegative, &[&param]).with_param(param)
}

pub fn key_duplicate() -> CollectionError {
    invalid_argument(MessageId::KeyDuplicate, &[])
}

pub fn argument_null(param: &str) -> CollectionError {
    build(ErrorKind::NullArgument, MessageId::ArgumentNull, &[&param]).with_param(param)
}

pub fn argument_out_of_range(param: &str) -> CollectionError {
    build(ErrorKind::OutOfRange, MessageId::ArgumentOutOfRange, &[&param]).with_param(param)
}

/// Out of range, naming the valid `[begin, end]` bounds.
pub fn argument_out_of_range_between(
    param: &str,
    begin: &dyn fmt::Display,
    end: &dyn fmt::Display,
) -> CollectionError {
    build(
        ErrorKind::OutOfRange,
        MessageId::ArgumentOutOfRangeBetween,
        &[&param, begin, end],
    )
    .with_param(param)
}

// Lookups

pub fn key_not_found() -> CollectionError {
    build(ErrorKind::KeyNotFound, MessageId::KeyNotFound, &[])
}

// Unsupported operations

pub fn read_only_collection() -> CollectionError {
    unsupported_operation(MessageId::ReadOnlyCollection)
}

pub fn fixed_size_collection() -> CollectionError {
    unsupported_operation(MessageId::FixedSizeCollection)
}

// Live views

pub fn collection_modified() -> CollectionError {
    build(ErrorKind::InvalidOperation, MessageId::CollectionModified, &[])
}

pub fn store_dropped() -> CollectionError {
    build(ErrorKind::InvalidOperation, MessageId::StoreDropped, &[])
}

pub fn store_busy() -> CollectionError {
    build(ErrorKind::InvalidOperation, MessageId::StoreBusy, &[])
}

// Checks

/// Unwraps a required argument or fails with a null-argument error.
pub fn check_not_null<T>(value: Option<T>, param: &str) -> CollectionResult<T> {
    value.ok_or_else(|| argument_null(param))
}

/// Requires a one-dimensional, zero-based sequence.
pub fn check_flat_sequence<A: Shaped + ?Sized>(array: &A) -> CollectionResult<()> {
    if array.rank() != 1 {
        return Err(array_rank_multi_dim_not_supported());
    }
    if array.lower_bound(0) != 0 {
        return Err(array_non_zero_lower_bound());
    }
    Ok(())
}

/// Converts a signed count to `usize`, rejecting negatives.
pub fn check_non_negative(value: i64, param: &str) -> CollectionResult<usize> {
    usize::try_from(value).map_err(|_| argument_negative(param))
}

/// Validates copying `needed` items into a destination of `dest_len` slots
/// starting at `index`.
pub fn check_copy_target(dest_len: usize, index: usize, needed: usize) -> CollectionResult<()> {
    if index > dest_len {
        return Err(argument_out_of_range_between("index", &0, &dest_len));
    }
    if dest_len - index < needed {
        return Err(array_too_small());
    }
    Ok(())
}

/// Validates that `offset..offset + count` lies inside a sequence of `len`.
pub fn check_offset_length(len: usize, offset: usize, count: usize) -> CollectionResult<()> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(invalid_offset_length()),
    }
}
