use crate::domain::DomainEvent;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// イベントログポート
///
/// 貸出・返却イベントの追記専用ログ。職員の帳簿として使われ、
/// 貸出状態の正しさはこのログに依存しない。
pub trait EventLog: Send + Sync {
    /// イベントを末尾に追加する
    fn append(&self, event: DomainEvent) -> Result<()>;

    /// すべてのイベントを追加順に読み込む
    fn load_all(&self) -> Result<Vec<DomainEvent>>;
}
