use crate::domain::{Item, ItemId};

/// カタログポート
///
/// 資料の検索と登録を抽象化する。
/// キーは大文字小文字を区別した完全一致で検索する。
pub trait Catalog: Send {
    /// IDで資料を取得する
    fn get_item(&self, item_id: &ItemId) -> Option<&Item>;

    /// IDで資料を変更可能な参照として取得する
    ///
    /// 貸出・返却・延長の状態遷移で使用される。
    fn get_item_mut(&mut self, item_id: &ItemId) -> Option<&mut Item>;

    /// 資料を登録する。同じIDの資料があれば置き換える。
    fn add_item(&mut self, item: Item);

    /// 全資料を返す（順序は実装依存）
    fn items(&self) -> Vec<&Item>;
}
