use crate::domain::{Item, ItemId, Money};
use crate::ports::Catalog;

/// 初期蔵書を投入する
///
/// 図書5点（延長可否は個別）、視聴覚資料5点、参考図書5点。
pub fn populate(catalog: &mut dyn Catalog) {
    let books = [
        ("BK001", "Book1", "John Doe", true, Money::new(5, 0)),
        ("BK002", "Book2", "John Doe", false, Money::new(20, 0)),
        ("BK003", "Book3", "John Doe", true, Money::new(5, 0)),
        ("BK004", "Book4", "Jane Doe", false, Money::new(8, 0)),
        ("BK005", "Book5", "Jane Doe", true, Money::new(9, 50)),
    ];
    for (id, title, creator, renewable, value) in books {
        catalog.add_item(Item::book(ItemId::new(id), title, creator, renewable, value));
    }

    let audio_video = [
        ("AV001", "AV1", "John Doe"),
        ("AV002", "AV2", "John Doe"),
        ("AV003", "AV3", "John Doe"),
        ("AV004", "AV4", "Jane Doe"),
        ("AV005", "AV5", "Jane Doe"),
    ];
    for (id, title, creator) in audio_video {
        catalog.add_item(Item::audio_video(
            ItemId::new(id),
            title,
            creator,
            Money::new(15, 0),
        ));
    }

    for n in 1..=5 {
        catalog.add_item(Item::reference(
            ItemId::new(format!("RB{:03}", n)),
            format!("Ref{}", n),
            "John Doe",
            Money::new(2, 0),
        ));
    }

    tracing::info!(items = catalog.items().len(), "Catalog populated");
}
