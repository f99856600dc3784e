use crate::domain::{Book, BookId};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// カタログポート
///
/// 全書籍とその貸出状態を保持する。書籍は初期化時に一度だけ登録され、
/// 以後は追加も削除もされない。検索はカタログ順の線形走査と同じ結果を返すこと。
pub trait Catalog: Send + Sync {
    /// 全書籍のジャンルをカタログ順に返す（重複を含む）
    fn list_genres(&self) -> Result<Vec<String>>;

    /// ジャンルが一致し、かつ貸出中でない書籍をカタログ順に返す
    fn find_available_by_genre(&self, genre: &str) -> Result<Vec<Book>>;

    /// 貸出状態に関係なくIDで書籍を検索する
    fn find_by_id(&self, book_id: BookId) -> Result<Option<Book>>;

    /// 全書籍をカタログ順に返す
    fn all_books(&self) -> Result<Vec<Book>>;

    /// 書籍の状態を保存する
    ///
    /// 同じIDの既存レコードを置き換える。未登録のIDはエラー。
    fn save(&self, book: Book) -> Result<()>;
}
