use super::*;

#[derive(Debug, Default)]
struct Named {
    id: Option<String>,
    ids: Vec<String>,
}

impl BatchOptions for Named {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[test]
fn test_height_reference_from_on_ground() {
    assert_eq!(HeightReference::from_on_ground(true), HeightReference::ClampToGround);
    assert_eq!(HeightReference::from_on_ground(false), HeightReference::None);
    assert!(!HeightReference::default().is_clamped());
}

#[test]
fn test_random_id_is_uuid_shaped() {
    let id = random_id();
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
    assert_ne!(id, random_id());
}

#[test]
fn test_item_shared_uses_ids() {
    let set = OptionSet::Shared(Named { id: Some("ignored".to_string()), ids: vec!["a".to_string()] });
    assert_eq!(set.item(0).unwrap().1, "a");
    // shared sets never reuse the single id
    assert_ne!(set.item(1).unwrap().1, "ignored");
}

#[test]
fn test_item_per_item_out_of_range() {
    let set = OptionSet::PerItem(vec![Named::default()]);
    assert!(set.item(0).is_ok());
    assert!(matches!(set.item(1), Err(Error::InvalidOptions(_))));
}

#[test]
fn test_check_len() {
    let set: OptionSet<Named> = OptionSet::PerItem(vec![Named::default(), Named::default()]);
    assert!(set.check_len(2).is_ok());
    assert!(set.check_len(3).is_err());
    assert!(OptionSet::Shared(Named::default()).check_len(10).is_ok());
}

#[test]
fn test_first_and_from() {
    let shared: OptionSet<Named> = Named { id: Some("x".to_string()), ..Default::default() }.into();
    assert_eq!(shared.first().and_then(|n| n.id.as_deref()), Some("x"));

    let empty: OptionSet<Named> = Vec::new().into();
    assert!(empty.first().is_none());
}
