use super::*;

/// Tests logging in with the registered password.
///
/// The email lookup ignores case.
///
/// Expected: Ok with the registered user
#[tokio::test]
async fn accepts_correct_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();
    let service = AuthService::new(db, &hasher);

    let registered = service
        .register(registration("login@example.com", "correct-horse"))
        .await
        .unwrap();

    let user = service
        .login("Login@Example.com", "correct-horse")
        .await
        .unwrap();

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();
    let service = AuthService::new(db, &hasher);

    service
        .register(registration("wrong@example.com", "correct-horse"))
        .await
        .unwrap();

    let result = service.login("wrong@example.com", "battery-staple").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in as an account created without a usable password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unusable_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();

    let user = factory::create_user(db).await?;

    let result = AuthService::new(db, &hasher)
        .login(&user.email, "anything")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hasher = PasswordHasher::default();

    let result = AuthService::new(db, &hasher)
        .login("ghost@example.com", "whatever")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
