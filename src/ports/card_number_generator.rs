use crate::domain::{CardNumber, UserId};

/// カード番号採番ポート
///
/// 貸出コンテキストは採番結果を不透明なキーとして扱い、解釈しない。
pub trait CardNumberGenerator: Send {
    /// 新しいカード番号と利用者向け表示IDを払い出す
    fn next_card_number(&mut self) -> (CardNumber, UserId);
}
