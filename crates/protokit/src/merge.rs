//! Field merge rules used by generated builders

use crate::message::Message;

/// Take `incoming` unless it is the default value
#[inline]
pub fn value<T: PartialEq + Default + Clone>(base: &mut T, incoming: &T) {
    if *incoming != T::default() {
        base.clone_from(incoming);
    }
}

/// Merge a message field; whichever side is present wins when the other is absent
///
/// A result equal to the empty message is stored as absent.
pub fn message<M: Message>(base: &mut Option<M>, incoming: Option<&M>) {
    let Some(incoming) = incoming else {
        return;
    };
    let merged = match base.take() {
        Some(current) => current.merge(incoming),
        None => incoming.clone(),
    };
    *base = present(merged);
}

/// [`message`] for boxed, self-referencing fields
pub fn boxed_message<M: Message>(base: &mut Option<Box<M>>, incoming: Option<&M>) {
    let Some(incoming) = incoming else {
        return;
    };
    let merged = match base.take() {
        Some(current) => current.merge(incoming),
        None => incoming.clone(),
    };
    *base = present(merged).map(Box::new);
}

/// Replace the whole collection unless `incoming` is empty
pub fn repeated<T: Clone>(base: &mut Vec<T>, incoming: &[T]) {
    if !incoming.is_empty() {
        base.clear();
        base.extend_from_slice(incoming);
    }
}

/// Store `value` as a message field, treating an empty message as absent
pub fn present<M: Message>(value: M) -> Option<M> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
