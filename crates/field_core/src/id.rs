//! Keys for fields mounted in a [`FieldStore`](crate::FieldStore).

/// Key addressing one mounted field.
///
/// The store never interprets the raw value. Hosts mint keys from whatever
/// identifier space they already have (DOM node ids, widget handles) and
/// deliver every later event for the field under the same key. Ids only flow
/// from the host into the store, so no reverse conversion is provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldConfig, FieldStore};

    #[test]
    fn equal_raw_values_address_one_field() {
        let mut store = FieldStore::new();
        store.mount(FieldId::from_raw(7), FieldConfig::default());
        store.raw_change(FieldId::from_raw(7), "42");

        assert_eq!(store.canonical(FieldId::from_raw(7)), Some("42"));
        assert_eq!(store.field_count(), 1);
    }

    #[test]
    fn distinct_raw_values_address_distinct_fields() {
        let mut store = FieldStore::new();
        store.mount(FieldId::from_raw(1), FieldConfig::default());
        store.mount(FieldId::from_raw(2), FieldConfig::default());

        store.raw_change(FieldId::from_raw(1), "1");
        assert_eq!(store.canonical(FieldId::from_raw(1)), Some("1"));
        assert_eq!(store.canonical(FieldId::from_raw(2)), Some(""));
        assert!(!store.has(FieldId::from_raw(3)));
    }
}
