use crate::domain::{CardNumber, User};

/// 利用者台帳ポート
pub trait Registry: Send {
    /// カード番号で利用者を取得する
    fn get_user(&self, card_number: &CardNumber) -> Option<&User>;

    /// カード番号で利用者を変更可能な参照として取得する
    fn get_user_mut(&mut self, card_number: &CardNumber) -> Option<&mut User>;

    /// 利用者を登録する。同じカード番号の利用者があれば置き換える。
    fn add_user(&mut self, user: User);

    /// 全利用者を返す
    ///
    /// 登録時の重複チェックに使用される。
    fn users(&self) -> Vec<&User>;
}
