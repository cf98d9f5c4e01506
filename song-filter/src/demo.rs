use songbook_common::Song;

/// 演示歌单
pub fn demo_songs() -> Vec<Song> {
    vec![
        Song::new(1, "Blueming", "아이유", 2019, &["발라드", "여성보컬"]),
        Song::new(2, "노래제목 A", "가수 B", 2021, &["댄스", "여름"]),
        Song::new(3, "노래제목 C", "가수 D", 2008, &["록"]),
        Song::new(4, "노래제목 D", "가수 E", 2015, &["재즈", "저녁"]),
    ]
}
