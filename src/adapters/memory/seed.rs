use crate::domain::{Book, BookId};

/// 初期蔵書（ID, ジャンル）。タイトルはジャンル名と同じ。
const SEED_GENRES: [(u32, &str); 17] = [
    (1, "Science Fiction"),
    (2, "Satire"),
    (3, "Drama"),
    (4, "Action and Adventure"),
    (5, "Romance"),
    (6, "Mystery"),
    (7, "Horror"),
    (8, "Health"),
    (9, "Guide"),
    (10, "Diaries"),
    (11, "Comics"),
    (12, "Journals"),
    (13, "Biographies"),
    (14, "Fantasy"),
    (15, "History"),
    (16, "Science"),
    (17, "Art"),
];

/// 初期蔵書17冊をカタログ順に生成する
pub fn seed_books() -> Vec<Book> {
    SEED_GENRES
        .iter()
        .map(|(id, genre)| Book::new(BookId::new(*id), *genre, *genre))
        .collect()
}
