use super::*;

#[test]
fn route_id_trims_and_rejects_blank() {
    assert_eq!(route_id(Some(" 12 ".to_owned())), Some("12".to_owned()));
    assert_eq!(route_id(Some("   ".to_owned())), None);
    assert_eq!(route_id(None), None);
}
