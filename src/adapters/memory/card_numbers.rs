use crate::domain::{CardNumber, UserId};
use crate::ports::card_number_generator::CardNumberGenerator;

/// カード番号の開始値
pub const STARTING_CARD_NUMBER: u32 = 1000;

/// 連番によるカード番号採番
///
/// カード番号は1000から1ずつ増える。表示IDは1始まりの連番をゼロ埋め4桁にしたもの。
#[derive(Debug)]
pub struct SequentialCardNumbers {
    next: u32,
}

impl SequentialCardNumbers {
    pub fn new() -> Self {
        Self {
            next: STARTING_CARD_NUMBER,
        }
    }
}

impl Default for SequentialCardNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl CardNumberGenerator for SequentialCardNumbers {
    fn next_card_number(&mut self) -> (CardNumber, UserId) {
        let number = self.next;
        self.next += 1;
        let card_number = CardNumber::new(number.to_string());
        let user_id = UserId::new(format!("{:04}", number - STARTING_CARD_NUMBER + 1));
        (card_number, user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_base() {
        let mut generator = SequentialCardNumbers::new();

        let (card, id) = generator.next_card_number();
        assert_eq!(card.as_str(), "1000");
        assert_eq!(id.as_str(), "0001");

        let (card, id) = generator.next_card_number();
        assert_eq!(card.as_str(), "1001");
        assert_eq!(id.as_str(), "0002");
    }
}
