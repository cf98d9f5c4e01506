use song_filter::demo::demo_songs;
use song_filter::{SongFilter, SongbookView};
use songbook_common::{distinct_tags, distinct_years, filter_records, SongQuery};

#[test]
fn artist_query_finds_exactly_one_song() {
    let songs = demo_songs();
    let hits = filter_records(&songs, &SongQuery::new().with_text("아이유"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
    assert_eq!(hits[0].title, "Blueming");
}

#[test]
fn title_query_ignores_case() {
    let songs = demo_songs();
    let hits = filter_records(&songs, &SongQuery::new().with_text("blueming"));
    assert_eq!(hits, vec![songs[0].clone()]);
}

#[test]
fn missing_year_yields_nothing() {
    let songs = demo_songs();
    assert!(filter_records(&songs, &SongQuery::new().with_year("1999")).is_empty());
}

#[test]
fn tag_prefix_matches_full_tag() {
    let songs = demo_songs();
    let hits = filter_records(&songs, &SongQuery::new().with_tag("발라"));
    assert_eq!(hits.len(), 1);
    assert!(hits[0].tags.contains(&"발라드".to_string()));
}

#[test]
fn derived_lists_match_the_page_controls() {
    let songs = demo_songs();
    assert_eq!(distinct_years(&songs), vec![2021, 2019, 2015, 2008]);
    assert_eq!(distinct_tags(&songs).len(), 7);
}

#[test]
fn facade_and_view_agree_with_the_engine() {
    let query = SongQuery::new().with_text("노래제목").with_tag("저녁");
    let expected = filter_records(&demo_songs(), &query);

    let result = SongFilter::filter_songs(&query).unwrap();
    assert_eq!(result.songs, expected);

    let mut view = SongbookView::new();
    view.set_text("노래제목".to_string());
    view.set_tag("저녁".to_string());
    assert_eq!(view.current_result().unwrap().songs, expected);
}
