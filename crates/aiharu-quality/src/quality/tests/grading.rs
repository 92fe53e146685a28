use crate::quality::Grade;

#[test]
fn grade_bands_are_inclusive_at_their_lower_edge() {
    assert_eq!(Grade::from_score(100), Grade::APlus);
    assert_eq!(Grade::from_score(90), Grade::APlus);
    assert_eq!(Grade::from_score(89), Grade::A);
    assert_eq!(Grade::from_score(80), Grade::A);
    assert_eq!(Grade::from_score(79), Grade::BPlus);
    assert_eq!(Grade::from_score(70), Grade::BPlus);
    assert_eq!(Grade::from_score(69), Grade::B);
    assert_eq!(Grade::from_score(60), Grade::B);
    assert_eq!(Grade::from_score(59), Grade::CPlus);
    assert_eq!(Grade::from_score(50), Grade::CPlus);
    assert_eq!(Grade::from_score(49), Grade::C);
    assert_eq!(Grade::from_score(40), Grade::C);
    assert_eq!(Grade::from_score(39), Grade::D);
    assert_eq!(Grade::from_score(0), Grade::D);
}

#[test]
fn labels_match_the_published_grade_set() {
    assert_eq!(Grade::APlus.label(), "A+");
    assert_eq!(Grade::BPlus.label(), "B+");
    assert_eq!(Grade::D.label(), "D");
}

#[test]
fn grades_serialize_as_their_labels() {
    let serialized = serde_json::to_string(&Grade::APlus).expect("grade serializes");
    assert_eq!(serialized, "\"A+\"");
    let round_trip: Grade = serde_json::from_str("\"C+\"").expect("grade parses");
    assert_eq!(round_trip, Grade::CPlus);
}
