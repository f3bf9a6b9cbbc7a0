// SPDX-License-Identifier: GPL-3.0-or-later

use mbgraph::{
    decode, decode_str, decode_value, Area, Artist, CdStub, Collection, DecodeErrorKind, Disc,
    Entity, EntityType, Event, Genre, Instrument, Label, Named, PartialDate, Place, Recording,
    RelationshipTarget, Release, ReleaseGroup, Series, TargetType, Url, Work,
};
use serde_json::json;
use std::time::Duration;

const MBID: &str = "a74b1b7f-71a5-4011-9441-d0b5e4122711";

fn minimal<T: Entity + Named>(document: serde_json::Value) -> T {
    let entity: T = decode_value(document).unwrap();
    assert!(!entity.name().is_empty());
    entity
}

#[test]
fn test_minimal_fixture_for_every_kind() {
    let area: Area = minimal(json!({"id": MBID, "name": "United Kingdom"}));
    assert!(area.unhandled.is_empty());
    assert!(area.sort_name.is_none() && area.life_span.is_none());
    assert!(area.iso_3166_1_codes.is_empty() && area.relationships.is_empty());

    let artist: Artist = minimal(json!({"id": MBID, "name": "Radiohead"}));
    assert!(artist.unhandled.is_empty());
    assert!(artist.type_name.is_none() && artist.rating.is_none());
    assert!(artist.release_groups.is_empty() && artist.genres.is_empty());

    let cdstub: CdStub =
        minimal(json!({"id": "lwHl8fGzJyLXQR33ug60E8jhf4k-", "title": "Doo Wop"}));
    assert!(cdstub.unhandled.is_empty());
    assert!(cdstub.artist.is_none() && cdstub.track_count.is_none());
    assert!(cdstub.tracks.is_empty());

    let collection: Collection = minimal(json!({"id": MBID, "name": "Favourites"}));
    assert!(collection.unhandled.is_empty());
    assert!(collection.editor.is_none() && collection.entity_type.is_none());
    assert!(collection.item_count.is_none());

    let event: Event = minimal(json!({"id": MBID, "name": "Glastonbury 1997"}));
    assert!(event.unhandled.is_empty());
    assert!(event.cancelled.is_none() && event.setlist.is_none());
    assert!(event.aliases.is_empty() && event.relationships.is_empty());

    let genre: Genre = minimal(json!({"id": MBID, "name": "art rock"}));
    assert!(genre.unhandled.is_empty());
    assert!(genre.count.is_none() && genre.disambiguation.is_none());
    assert!(genre.aliases.is_empty());

    let instrument: Instrument = minimal(json!({"id": MBID, "name": "theremin"}));
    assert!(instrument.unhandled.is_empty());
    assert!(instrument.description.is_none());
    assert!(instrument.tags.is_empty());

    let label: Label = minimal(json!({"id": MBID, "name": "Parlophone"}));
    assert!(label.unhandled.is_empty());
    assert!(label.label_code.is_none() && label.area.is_none());
    assert!(label.ipis.is_empty() && label.releases.is_empty());

    let place: Place = minimal(json!({"id": MBID, "name": "Abbey Road Studios"}));
    assert!(place.unhandled.is_empty());
    assert!(place.coordinates.is_none() && place.address.is_none());
    assert!(place.user_tags.is_empty());

    let recording: Recording = minimal(json!({"id": MBID, "title": "Airbag"}));
    assert!(recording.unhandled.is_empty());
    assert!(recording.length.is_none() && recording.first_release_date.is_none());
    assert!(recording.artist_credit.is_empty() && recording.isrcs.is_empty());

    let release: Release = minimal(json!({"id": MBID, "title": "OK Computer"}));
    assert!(release.unhandled.is_empty());
    assert!(release.date.is_none() && release.release_group.is_none());
    assert!(release.media.is_empty() && release.label_info.is_empty());

    let release_group: ReleaseGroup = minimal(json!({"id": MBID, "title": "OK Computer"}));
    assert!(release_group.unhandled.is_empty());
    assert!(release_group.primary_type.is_none());
    assert!(release_group.secondary_types.is_empty() && release_group.releases.is_empty());

    let series: Series = minimal(json!({"id": MBID, "name": "Now That's What I Call Music!"}));
    assert!(series.unhandled.is_empty());
    assert!(series.type_id.is_none());
    assert!(series.relationships.is_empty());

    let work: Work = minimal(json!({"id": MBID, "title": "Karma Police"}));
    assert!(work.unhandled.is_empty());
    assert!(work.language.is_none() && work.user_rating.is_none());
    assert!(work.iswcs.is_empty() && work.attributes.is_empty());

    let url: Url = decode_value(json!({"id": MBID, "resource": "https://radiohead.com/"})).unwrap();
    assert_eq!(url.resource.host_str(), Some("radiohead.com"));
    assert_eq!(Url::ENTITY_TYPE, EntityType::Url);
    assert!(url.unhandled.is_empty() && url.relationships.is_empty());

    let disc: Disc = decode_value(json!({"id": "I5l9cCSFccLKFEKS.7wqSZAorPU-"})).unwrap();
    assert_eq!(disc.track_count(), 0);
    assert!(disc.unhandled.is_empty());
    assert!(disc.sectors.is_none());
    assert!(disc.offsets.is_empty() && disc.releases.is_empty());
}

#[test]
fn test_vote_counts_may_be_negative() {
    let artist: Artist = decode_value(json!({
        "id": MBID,
        "name": "Radiohead",
        "tags": [{"name": "rock", "count": 5}, {"name": "pop", "count": -1}],
        "genres": [{"id": MBID, "name": "art rock", "count": 0}]
    }))
    .unwrap();

    let counts: Vec<Option<i32>> = artist.tags.iter().map(|tag| tag.count).collect();
    assert_eq!(counts, vec![Some(5), Some(-1)]);
    assert_eq!(artist.genres[0].count, Some(0));
}

#[test]
fn test_artist_requires_id_and_name() {
    let missing_id = decode_value::<Artist>(json!({"name": "Radiohead"})).unwrap_err();
    assert!(missing_id.is_missing_property("id"));

    let missing_name = decode_value::<Artist>(json!({"id": MBID})).unwrap_err();
    assert!(missing_name.is_missing_property("name"));

    let null_name = decode_value::<Artist>(json!({"id": MBID, "name": null})).unwrap_err();
    assert!(null_name.is_missing_property("name"));
}

#[test]
fn test_absent_collections_are_empty() {
    let artist: Artist = decode_value(json!({"id": MBID, "name": "Radiohead"})).unwrap();
    assert!(artist.aliases.is_empty());
    assert!(artist.tags.is_empty());
    assert!(artist.relationships.is_empty());
    assert!(artist.ipis.is_empty());
    assert!(artist.life_span.is_none());
}

#[test]
fn test_unknown_fields_are_kept_verbatim() {
    let artist: Artist = decode_str(&format!(
        r#"{{"id": "{MBID}", "x-new-field": {{"nested": [1, 2]}}, "name": "Radiohead", "zz": null}}"#
    ))
    .unwrap();

    let names: Vec<&str> = artist.unhandled.keys().collect();
    assert_eq!(names, vec!["x-new-field", "zz"]);
    assert_eq!(artist.unhandled.get("x-new-field"), Some(&json!({"nested": [1, 2]})));
    assert_eq!(artist.unhandled.get("zz"), Some(&json!(null)));

    let serialized = serde_json::to_value(&artist).unwrap();
    assert_eq!(serialized["unhandled"]["x-new-field"], json!({"nested": [1, 2]}));
}

#[test]
fn test_relationship_targets_resolve_by_discriminator() {
    let artist: Artist = decode_value(json!({
        "id": MBID,
        "name": "Radiohead",
        "relations": [
            {
                "type": "member of band",
                "direction": "backward",
                "target-type": "artist",
                "begin": "1985",
                "ended": false,
                "artist": {"id": "8bfac288-ccc5-448d-9573-c33ea2aa5c30", "name": "Thom Yorke"}
            },
            {
                "type": "official homepage",
                "target-type": "url",
                "url": {"id": "2a6b4a5f-5cf5-4b4f-9d3e-6b1b1f3b2c3d", "resource": "https://radiohead.com/"}
            },
            {
                "type": "performer",
                "target-type": "bogus",
                "recording": {"id": "e5a3f0c4-1fae-4f2e-8f76-0c3b4f1e4fa6", "title": "Airbag"}
            }
        ]
    }))
    .unwrap();

    let [member, homepage, bogus] = artist.relationships.as_slice() else {
        panic!("expected three relationships");
    };

    match &member.target {
        Some(RelationshipTarget::Artist(target)) => assert_eq!(target.name, "Thom Yorke"),
        other => panic!("unexpected target {other:?}"),
    }
    assert_eq!(member.begin, Some(PartialDate::new(Some(1985), None, None).unwrap()));

    assert_eq!(
        homepage.target.as_ref().map(RelationshipTarget::entity_type),
        Some(EntityType::Url)
    );

    assert!(bogus.target.is_none());
    assert_eq!(bogus.target_type, Some(TargetType::Unrecognized("bogus".into())));
    assert_eq!(bogus.unhandled.get("target-type"), Some(&json!("bogus")));
}

#[test]
fn test_cdstub_track_count_mismatch() {
    let error = decode_value::<CdStub>(json!({
        "id": "lwHl8fGzJyLXQR33ug60E8jhf4k-",
        "title": "Doo Wop",
        "track-count": 3,
        "tracks": [{"title": "One"}, {"title": "Two"}]
    }))
    .unwrap_err();

    assert_eq!(
        error.kind(),
        &DecodeErrorKind::CountMismatch {
            property: "track-count".to_string(),
            reported: 3,
            actual: 2
        }
    );
}

#[test]
fn test_release_media_keep_order_and_error_paths() {
    let release: Release = decode(
        json!({
            "id": MBID,
            "title": "OK Computer",
            "date": "1997-05-21",
            "media": [
                {"position": 1, "format": "CD", "tracks": [
                    {"id": "11111111-1111-1111-1111-111111111111", "number": "1", "title": "Airbag", "length": 284000},
                    {"id": "22222222-2222-2222-2222-222222222222", "number": "2", "title": "Paranoid Android", "length": 387000}
                ]},
                {"position": 2, "format": "CD", "tracks": []}
            ]
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap();

    assert_eq!(release.media.len(), 2);
    let titles: Vec<_> = release.media[0]
        .tracks
        .iter()
        .map(|track| track.title.as_deref())
        .collect();
    assert_eq!(titles, vec![Some("Airbag"), Some("Paranoid Android")]);
    assert_eq!(release.media[0].tracks[1].length, Some(Duration::from_millis(387000)));
    assert!(release.media[1].tracks.is_empty());

    let error = decode_value::<Release>(json!({
        "id": MBID,
        "title": "OK Computer",
        "media": [{"tracks": [
            {"id": "11111111-1111-1111-1111-111111111111"},
            {"id": "22222222-2222-2222-2222-222222222222", "length": "long"}
        ]}]
    }))
    .unwrap_err();
    assert_eq!(error.path(), "media[0].tracks[1].length");
}

#[test]
fn test_partial_dates_from_number_and_string_agree() {
    let from_number: ReleaseGroup =
        decode_value(json!({"id": MBID, "title": "Pablo Honey", "first-release-date": 1993}))
            .unwrap();
    let from_string: ReleaseGroup =
        decode_value(json!({"id": MBID, "title": "Pablo Honey", "first-release-date": "1993"}))
            .unwrap();
    assert_eq!(from_number.first_release_date, from_string.first_release_date);
}
