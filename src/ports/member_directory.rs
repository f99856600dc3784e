use crate::domain::{Member, MemberId};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員名簿ポート
///
/// 会員IDから会員への任意個数の対応を保持する。
pub trait MemberDirectory: Send + Sync {
    /// 会員を登録する
    ///
    /// 同じIDが既に存在する場合は連絡先を上書きし、貸出リストは引き継ぐ。
    /// 登録後の会員を返す。
    fn register(&self, member: Member) -> Result<Member>;

    /// IDで会員を検索する
    fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;

    /// 既存会員の状態を保存する。未登録のIDはエラー。
    fn save(&self, member: Member) -> Result<()>;

    /// 登録済み会員のIDを昇順で返す
    fn list_member_ids(&self) -> Result<Vec<MemberId>>;
}
