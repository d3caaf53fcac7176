use crate::domain::{User, UserRegistered, commands::RegisterUser};

use super::errors::{LendingError, Result};
use super::lending_service::ServiceDependencies;

/// 利用者を登録する
///
/// ビジネスルール：
/// - 氏名・住所（大文字小文字を区別しない）と電話番号が一致する利用者がいれば登録しない
/// - カード番号と表示IDは採番ポートから払い出す
pub fn register_user(deps: &mut ServiceDependencies, cmd: RegisterUser) -> Result<UserRegistered> {
    let duplicate = deps
        .registry
        .users()
        .into_iter()
        .any(|u| u.has_same_details(&cmd.name, &cmd.address, &cmd.phone_number));

    if duplicate {
        tracing::warn!(name = %cmd.name, "Registration refused: duplicate user");
        return Err(LendingError::DuplicateUser);
    }

    let (card_number, user_id) = deps.card_numbers.next_card_number();
    let user = User::new(
        card_number.clone(),
        user_id.clone(),
        cmd.name.clone(),
        cmd.address,
        cmd.phone_number,
    );
    deps.registry.add_user(user);

    tracing::info!(%card_number, %user_id, "User registered");

    Ok(UserRegistered {
        card_number,
        user_id,
        name: cmd.name,
    })
}
