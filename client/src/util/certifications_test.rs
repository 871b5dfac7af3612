use std::collections::HashSet;

use super::*;
use crate::util::site_map::CERTIFICATION_LINKS;

#[test]
fn every_track_offers_nine_certifications() {
    for track in CertificationTrack::ALL {
        assert_eq!(track.certifications().len(), 9, "{track:?}");
        let names: HashSet<_> = track.certifications().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 9, "{track:?} has duplicate names");
    }
}

#[test]
fn maturity_tracks_have_five_levels_and_professional_three() {
    assert_eq!(CertificationTrack::System.levels().len(), 5);
    assert_eq!(CertificationTrack::Organizational.levels().len(), 5);
    assert_eq!(CertificationTrack::Professional.levels().len(), 3);
}

#[test]
fn levels_are_numbered_from_one() {
    for track in CertificationTrack::ALL {
        let numbers: Vec<u8> = track.levels().iter().map(|l| l.number).collect();
        let expected: Vec<u8> = (1..=u8::try_from(numbers.len()).unwrap()).collect();
        assert_eq!(numbers, expected, "{track:?}");
    }
}

#[test]
fn paths_match_the_certification_menu() {
    let menu: Vec<&str> = CERTIFICATION_LINKS.iter().map(|l| l.href).collect();
    let tracks: Vec<&str> = CertificationTrack::ALL.iter().map(|t| t.path()).collect();
    assert_eq!(menu, tracks);
}

#[test]
fn progression_note_counts_the_levels() {
    let track = CertificationTrack::Professional;
    let note = track.progression_note(&track.certifications()[0]);
    assert_eq!(note, "Progress through all 3 levels to achieve full IAISO Certified Data Science certification");
}

#[test]
fn level_dialog_badge_follows_the_level_scheme() {
    assert_eq!(CertificationTrack::System.levels_label(), "Maturity Levels");
    assert_eq!(CertificationTrack::Professional.levels_label(), "Certification Levels");
}
