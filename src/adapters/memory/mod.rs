pub mod card_numbers;
pub mod catalog;
pub mod registry;

pub use card_numbers::SequentialCardNumbers;
pub use catalog::Catalog;
pub use registry::Registry;

use crate::application::lending::ServiceDependencies;
use crate::domain::{LendingPolicy, ReservationQueue};

/// インメモリのアダプターで依存関係を組み立てる
///
/// カタログ・台帳・予約キューはすべて空の状態で始まる。
pub fn in_memory_dependencies(policy: LendingPolicy) -> ServiceDependencies {
    ServiceDependencies {
        catalog: Box::new(Catalog::new()),
        registry: Box::new(Registry::new()),
        card_numbers: Box::new(SequentialCardNumbers::new()),
        reservations: ReservationQueue::new(),
        policy,
    }
}
